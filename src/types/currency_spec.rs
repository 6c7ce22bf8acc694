use num::rational::Ratio;
use typed_builder::TypedBuilder;

use super::{ConfigError, FixedRateCurrency};

/// The configuration of a single `FixedRateCurrency`.
///
/// Nothing is validated until it is converted into a currency.
///
/// # Example:
/// ```rust
/// use fxmoney::prelude::*;
///
/// let spec = CurrencySpec::builder().name("SEK").rate(Ratio::new(15, 100)).build();
/// let sek = FixedRateCurrency::try_from(spec).expect("Is a valid spec");
/// assert_eq!(sek.universal_value(1000), 150);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct CurrencySpec {
    /// The display name of the currency.
    #[builder(setter(into))]
    pub name: String,

    /// The value of one minor unit in universal units.
    pub rate: Ratio<i64>,
}

impl TryFrom<CurrencySpec> for FixedRateCurrency {
    type Error = ConfigError;

    fn try_from(spec: CurrencySpec) -> Result<Self, Self::Error> {
        FixedRateCurrency::new(spec.name, spec.rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn currency_spec_into_currency() {
        let spec = CurrencySpec::builder()
            .name("DKK")
            .rate(Ratio::new(1, 5))
            .build();
        let dkk = FixedRateCurrency::try_from(spec).expect("Is valid");
        assert_eq!(dkk.to_string(), "DKK");
        assert_eq!(dkk.rate(), Ratio::new(1, 5));
    }

    #[test]
    fn currency_spec_invalid() {
        let spec = CurrencySpec::builder()
            .name("DKK")
            .rate(Ratio::from_integer(0))
            .build();
        assert_eq!(
            FixedRateCurrency::try_from(spec),
            Err(ConfigError::InvalidRate)
        );
    }
}
