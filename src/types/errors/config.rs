/// An error with the configuration of a currency.
#[derive(thiserror::Error, Debug, Clone, Copy, Eq, PartialEq)]
#[allow(missing_docs, reason = "The error messages describe the variants")]
pub enum ConfigError {
    #[error("The currency name must not be empty")]
    EmptyCurrencyName,

    #[error("The conversion rate must be > 0")]
    InvalidRate,
}
