use std::{
    cmp::Ordering,
    hash::{Hash, Hasher},
    ops::{Add, Neg, Sub},
};

use getset::CopyGetters;
use tracing::trace;

use super::{ArithmeticError, Currency};

/// Allows the quick construction of `Money`
#[macro_export]
macro_rules! money {
    ( $amount:expr, $currency:expr ) => {{ $crate::prelude::Money::new($amount, $currency) }};
}

/// An amount of money denominated in some `Currency`.
///
/// The `amount` is kept in minor units, so `1050` in a currency named "SEK" reads as 10.50 SEK.
/// Equality, hashing and ordering are based on the universal value,
/// so monies in different currencies compare by what they are worth,
/// not by their raw amount and currency.
///
/// Arithmetic never mutates, it always creates a new `Money` in the currency of the left hand side.
/// The plain operators wrap around on overflow, use the `checked_*` methods to detect it.
///
/// # Example:
/// ```rust
/// use fxmoney::prelude::*;
///
/// let usd = FixedRateCurrency::new("USD", Ratio::from_integer(1)).expect("Is valid");
/// let eur = FixedRateCurrency::new("EUR", Ratio::from_integer(2)).expect("Is valid");
///
/// let sum = Money::new(1000, &usd) + Money::new(500, &eur);
/// assert_eq!(sum.amount(), 2000);
/// assert_eq!(sum.to_string(), "20 USD");
/// assert_eq!(Money::new(200, &usd), Money::new(100, &eur));
/// ```
#[derive(Debug, Clone, Copy, CopyGetters)]
pub struct Money<'a> {
    /// The amount in minor units of the `currency`.
    #[getset(get_copy = "pub")]
    amount: i64,

    /// The currency the `amount` is denominated in.
    #[getset(get_copy = "pub")]
    currency: &'a dyn Currency,
}

impl<'a> Money<'a> {
    /// Create a new instance from an `amount` in minor units of `currency`.
    #[inline]
    pub fn new(amount: i64, currency: &'a dyn Currency) -> Self {
        Self { amount, currency }
    }

    /// Zero in the given `currency`.
    #[inline]
    pub fn zero(currency: &'a dyn Currency) -> Self {
        Self::new(0, currency)
    }

    /// The value of this money in the universal unit, according to its `Currency`.
    #[inline]
    pub fn universal_value(&self) -> i64 {
        self.currency.universal_value(self.amount)
    }

    /// Whether the raw `amount` is zero.
    /// A non-zero amount whose universal value truncates to zero is not zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.amount == 0
    }

    /// Whether the raw `amount` is below zero.
    #[inline]
    pub fn is_negative(&self) -> bool {
        self.amount < 0
    }

    /// The same money with the sign of the `amount` flipped, e.g. 10 SEK becomes -10 SEK.
    /// `i64::MIN` wraps around to itself.
    #[must_use]
    pub fn negate(self) -> Self {
        let negated = Self::new(self.amount.wrapping_neg(), self.currency);
        trace!("negate: {self} -> {negated}");
        negated
    }

    /// Add `other` to this money, converted into this money's currency.
    ///
    /// # Errors:
    /// If the resulting amount overflows.
    pub fn checked_add(self, other: Money<'_>) -> Result<Self, ArithmeticError> {
        let amount = self
            .amount
            .checked_add(self.converted(&other))
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Subtract `other` from this money, converted into this money's currency.
    ///
    /// # Errors:
    /// If the resulting amount overflows.
    pub fn checked_sub(self, other: Money<'_>) -> Result<Self, ArithmeticError> {
        let amount = self
            .amount
            .checked_sub(self.converted(&other))
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Negate the amount.
    ///
    /// # Errors:
    /// If the amount is `i64::MIN`.
    pub fn checked_neg(self) -> Result<Self, ArithmeticError> {
        let amount = self
            .amount
            .checked_neg()
            .ok_or(ArithmeticError::Overflow)?;
        Ok(Self::new(amount, self.currency))
    }

    /// Sum up `monies` of arbitrary currencies into `currency`.
    /// Each money is converted individually, so truncation happens per summand.
    pub fn sum_in<'b, I>(currency: &'a dyn Currency, monies: I) -> Self
    where
        I: IntoIterator<Item = Money<'b>>,
    {
        monies
            .into_iter()
            .fold(Self::zero(currency), |acc, money| acc + money)
    }

    /// The amount of `other` in minor units of this money's currency.
    #[inline]
    fn converted(&self, other: &Money<'_>) -> i64 {
        self.currency
            .value_in_this_currency(other.amount, other.currency)
    }
}

/// Prints the whole major units followed by the currency name, e.g. `1050` SEK prints as "10 SEK".
/// The fraction is truncated toward zero, so `-50` SEK prints as "0 SEK".
impl std::fmt::Display for Money<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.amount / 100, self.currency.name())
    }
}

impl PartialEq for Money<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.universal_value() == other.universal_value()
    }
}

impl Eq for Money<'_> {}

impl Hash for Money<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.universal_value().hash(state);
    }
}

impl PartialOrd for Money<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Money<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.universal_value().cmp(&other.universal_value())
    }
}

impl<'a> Add<Money<'_>> for Money<'a> {
    type Output = Money<'a>;

    fn add(self, rhs: Money<'_>) -> Self::Output {
        let sum = Money::new(
            self.amount.wrapping_add(self.converted(&rhs)),
            self.currency,
        );
        trace!("add: {self} + {rhs} -> {sum}");
        sum
    }
}

impl<'a> Sub<Money<'_>> for Money<'a> {
    type Output = Money<'a>;

    fn sub(self, rhs: Money<'_>) -> Self::Output {
        let diff = Money::new(
            self.amount.wrapping_sub(self.converted(&rhs)),
            self.currency,
        );
        trace!("sub: {self} - {rhs} -> {diff}");
        diff
    }
}

impl Neg for Money<'_> {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
