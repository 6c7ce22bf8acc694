/// A unit of account that `Money` can be denominated in.
///
/// Every currency relates its own minor units to a shared universal unit.
/// That relation is what makes amounts in different currencies comparable and
/// convertible into each other.
///
/// `Money` only ever borrows a currency, so implementations must not change
/// their conversion behaviour while monies refer to them.
pub trait Currency: std::fmt::Debug + Send + Sync {
    /// The human readable label, e.g. "SEK".
    fn name(&self) -> &str;

    /// Convert an `amount` in minor units of this currency into the universal unit.
    fn universal_value(&self, amount: i64) -> i64;

    /// Convert an `amount` denominated in the `source` currency into minor units of this currency.
    fn value_in_this_currency(&self, amount: i64, source: &dyn Currency) -> i64;
}
