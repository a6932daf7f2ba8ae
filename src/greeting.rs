/// Name greeted when the caller does not supply one.
pub const DEFAULT_NAME: &str = "Mondo";

const SALUTATION: &str = "Ciao, ";
const SIGN_OFF: &str = "! 👋";

/// Format a greeting for `name`, falling back to [`DEFAULT_NAME`].
///
/// The name is embedded verbatim, so empty or unusual text is accepted.
pub fn greet(name: Option<&str>) -> String {
    let name = name.unwrap_or(DEFAULT_NAME);
    format!("{SALUTATION}{name}{SIGN_OFF}")
}
