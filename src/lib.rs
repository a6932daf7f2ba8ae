mod arithmetic;
mod greeting;
mod io;
pub mod script;
pub mod timing;

pub use arithmetic::add;
pub use greeting::{greet, DEFAULT_NAME};
pub use io::SalutaError;
