use super::{ArithmeticError, ConfigError};

/// Describes possible Errors that may occur when calling methods in this crate
#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
#[allow(missing_docs, reason = "The error messages describe the variants")]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),

    #[error("The currency `{0}` is not known")]
    UnknownCurrency(String),

    #[error("A currency named `{0}` already exists")]
    DuplicateCurrency(String),
}

/// Shorthand for a `Result` with the crate's `Error`.
pub type Result<T, E = Error> = std::result::Result<T, E>;
