use std::io::Write;

use crate::arithmetic::add;
use crate::greeting::greet;
use crate::io::SalutaError;
use crate::timing::TimingGuard;
use crate::{time_block, time_block_with_count};

/// Name greeted by a plain run.
pub const GREETED_NAME: &str = "Claude";

const SUM_OPERANDS: (i32, i32) = (2, 3);
const PRODUCT_OPERANDS: (i32, i32) = (10, 5);
const COMPLETION: &str = "🚀 Test completato con successo!";

/// The four output lines, in order and without trailing newlines.
pub fn lines(name: &str) -> Vec<String> {
    let (a, b) = SUM_OPERANDS;
    let sum = add(a, b);
    let (x, y) = PRODUCT_OPERANDS;
    let product = x * y;
    vec![
        greet(Some(name)),
        format!("{a} + {b} = {sum} ➕"),
        format!("{x} * {y} = {product} ✖️"),
        COMPLETION.to_string(),
    ]
}

/// Write the greeting sequence to `out` and flush it.
pub fn run<W: Write>(out: &mut W, name: &str) -> Result<(), SalutaError> {
    let _guard = TimingGuard::new("run");
    let lines = time_block!("render", lines(name));
    time_block_with_count!("write", lines.len(), write_lines(out, &lines))
}

fn write_lines<W: Write>(out: &mut W, lines: &[String]) -> Result<(), SalutaError> {
    for line in lines {
        writeln!(out, "{line}")?;
    }
    out.flush()?;
    Ok(())
}
