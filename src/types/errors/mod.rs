mod arithmetic;
mod config;
mod crate_error;

pub use arithmetic::ArithmeticError;
pub use config::ConfigError;
pub use crate_error::{Error, Result};
