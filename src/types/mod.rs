mod currency_spec;
mod currency_trait;
mod errors;
mod fixed_rate_currency;
mod money;

pub use currency_spec::CurrencySpec;
pub use currency_trait::Currency;
pub use errors::*;
pub use fixed_rate_currency::FixedRateCurrency;
pub use money::Money;
