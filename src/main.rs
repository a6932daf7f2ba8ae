use std::process::ExitCode;
use std::time::Instant;

use clap::error::ErrorKind;
use clap::Parser;

use saluta::{script, timing};

#[derive(Debug, Parser)]
#[command(name = "saluta", version, about = "Greets someone and does a little arithmetic.")]
struct Cli {
    /// Name to greet
    #[arg(long, default_value = script::GREETED_NAME)]
    name: String,

    /// Print step timings to stderr
    #[arg(long)]
    profile: bool,

    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    _rest: Vec<String>,
}

impl Default for Cli {
    fn default() -> Self {
        Self {
            name: script::GREETED_NAME.to_string(),
            profile: false,
            _rest: Vec::new(),
        }
    }
}

/// Parse the command line, ignoring anything it cannot make sense of.
fn parse_args() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.exit()
        }
        Err(_) => Cli::default(),
    }
}

fn main() -> ExitCode {
    timing::init();
    let cli = parse_args();
    if cli.profile {
        timing::enable();
    }

    let start = Instant::now();
    let result = script::run(&mut std::io::stdout().lock(), &cli.name);
    match result {
        Ok(()) => {
            if cli.profile {
                eprintln!(
                    "profile: total {:.3}ms",
                    start.elapsed().as_secs_f64() * 1000.0
                );
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("saluta: {err}");
            ExitCode::FAILURE
        }
    }
}
