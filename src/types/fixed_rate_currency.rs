use derive_more::Display;
use getset::CopyGetters;
use num::rational::Ratio;
use num_traits::Signed;
use tracing::trace;

use super::{ConfigError, Currency};

/// A `Currency` with a fixed conversion rate into the universal unit.
///
/// One minor unit of this currency is worth `rate` universal units,
/// e.g. with a rate of `15 / 100`, 100 öre are worth 15 universal units.
///
/// Conversions are exact up to the final truncation toward zero.
/// Results outside of the `i64` range saturate at its bounds.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Display, CopyGetters)]
#[display("{name}")]
pub struct FixedRateCurrency {
    name: String,

    /// The value of one minor unit in universal units, always > 0.
    #[getset(get_copy = "pub")]
    rate: Ratio<i64>,
}

impl FixedRateCurrency {
    /// Create a new currency named `name` whose minor units are worth `rate` universal units.
    ///
    /// Leading and trailing whitespace is stripped from the `name`.
    ///
    /// # Errors:
    /// If the `name` is blank or the `rate` is not strictly positive.
    /// A rate with `i64::MIN` as numerator or denominator is rejected as well,
    /// as its sign cannot be normalized.
    pub fn new(name: impl Into<String>, rate: Ratio<i64>) -> Result<Self, ConfigError> {
        let name = name.into();
        let name = name.trim();
        if name.is_empty() {
            return Err(ConfigError::EmptyCurrencyName);
        }
        if *rate.numer() == i64::MIN || *rate.denom() == i64::MIN || !rate.is_positive() {
            return Err(ConfigError::InvalidRate);
        }
        let rate = rate.reduced();
        assert2::debug_assert!(*rate.denom() > 0);

        Ok(Self {
            name: name.to_owned(),
            rate,
        })
    }

    /// A copy of this currency with a different conversion `rate`.
    ///
    /// # Errors:
    /// If the `rate` is not strictly positive.
    pub fn with_rate(&self, rate: Ratio<i64>) -> Result<Self, ConfigError> {
        Self::new(self.name.clone(), rate)
    }
}

impl Currency for FixedRateCurrency {
    fn name(&self) -> &str {
        &self.name
    }

    fn universal_value(&self, amount: i64) -> i64 {
        let value = truncate_saturating(
            i128::from(amount) * i128::from(*self.rate.numer()),
            i128::from(*self.rate.denom()),
        );
        trace!("universal_value: {amount} {} -> {value}", self.name);
        value
    }

    fn value_in_this_currency(&self, amount: i64, source: &dyn Currency) -> i64 {
        let universal = source.universal_value(amount);
        let value = truncate_saturating(
            i128::from(universal) * i128::from(*self.rate.denom()),
            i128::from(*self.rate.numer()),
        );
        trace!(
            "value_in_this_currency: {amount} {} -> {value} {}",
            source.name(),
            self.name
        );
        value
    }
}

/// Divide rounding toward zero, clamping the quotient into the `i64` range.
fn truncate_saturating(numer: i128, denom: i128) -> i64 {
    assert2::debug_assert!(denom > 0);
    let quotient = numer / denom;
    i64::try_from(quotient).unwrap_or(if quotient.is_negative() {
        i64::MIN
    } else {
        i64::MAX
    })
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    fn sek() -> FixedRateCurrency {
        FixedRateCurrency::new("SEK", Ratio::new(15, 100)).expect("Is valid")
    }

    fn eur() -> FixedRateCurrency {
        FixedRateCurrency::new("EUR", Ratio::new(3, 2)).expect("Is valid")
    }

    #[test_case(1000, 150)]
    #[test_case(1050, 157; "truncates the fraction")]
    #[test_case(-1050, -157; "truncates toward zero")]
    #[test_case(0, 0)]
    #[test_case(6, 0)]
    fn fixed_rate_universal_value(amount: i64, expected: i64) {
        assert_eq!(sek().universal_value(amount), expected);
    }

    #[test]
    fn fixed_rate_value_in_this_currency() {
        let sek = sek();
        let eur = eur();
        // 1000 EUR cents are worth 1500 universal units, which is 10_000 öre.
        assert_eq!(sek.value_in_this_currency(1000, &eur), 10_000);
        assert_eq!(eur.value_in_this_currency(10_000, &sek), 1000);
        assert_eq!(sek.value_in_this_currency(1050, &sek), 1046);
        assert_eq!(eur.value_in_this_currency(-7, &sek), 0);
    }

    #[test]
    fn fixed_rate_saturates() {
        let cur = FixedRateCurrency::new("BIG", Ratio::from_integer(2)).expect("Is valid");
        assert_eq!(cur.universal_value(i64::MAX), i64::MAX);
        assert_eq!(cur.universal_value(i64::MIN), i64::MIN);

        let small = FixedRateCurrency::new("SMOL", Ratio::new(1, 1000)).expect("Is valid");
        assert_eq!(small.value_in_this_currency(i64::MAX, &cur), i64::MAX);
    }

    #[test_case(""; "empty")]
    #[test_case("   "; "blank")]
    fn fixed_rate_empty_name(name: &str) {
        assert_eq!(
            FixedRateCurrency::new(name, Ratio::from_integer(1)),
            Err(ConfigError::EmptyCurrencyName)
        );
    }

    #[test_case(Ratio::from_integer(0); "zero")]
    #[test_case(Ratio::new(-1, 2); "negative")]
    #[test_case(Ratio::new_raw(1, 0); "zero denominator")]
    #[test_case(Ratio::new_raw(i64::MIN, -1); "min numerator")]
    #[test_case(Ratio::new_raw(-1, i64::MIN); "min denominator")]
    fn fixed_rate_invalid_rate(rate: Ratio<i64>) {
        assert_eq!(
            FixedRateCurrency::new("SEK", rate),
            Err(ConfigError::InvalidRate)
        );
    }

    #[test]
    fn fixed_rate_trims_name() {
        let cur = FixedRateCurrency::new("  SEK ", Ratio::new(15, 100)).expect("Is valid");
        assert_eq!(cur.name(), "SEK");
        assert_eq!(cur, sek());
    }

    #[test]
    fn fixed_rate_reduces_rate() {
        let cur = FixedRateCurrency::new("SEK", Ratio::new_raw(30, 200)).expect("Is valid");
        assert_eq!(cur.rate(), Ratio::new(3, 20));
        assert_eq!(*cur.rate().denom(), 20);
    }

    #[test]
    fn fixed_rate_with_rate() {
        let sek = sek();
        let cheaper = sek.with_rate(Ratio::new(1, 10)).expect("Is valid");
        assert_eq!(cheaper.name(), "SEK");
        assert_eq!(cheaper.rate(), Ratio::new(1, 10));
        // The original is left untouched.
        assert_eq!(sek.rate(), Ratio::new(15, 100));
        assert_eq!(
            sek.with_rate(Ratio::from_integer(-1)),
            Err(ConfigError::InvalidRate)
        );
    }

    #[test]
    fn fixed_rate_display() {
        assert_eq!(sek().to_string(), "SEK");
    }
}
