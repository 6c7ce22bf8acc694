use std::collections::{HashMap, hash_map::Entry};

use tracing::debug;

use crate::types::{Currency, CurrencySpec, Error, FixedRateCurrency, Money, Result};

/// The currencies known to an application, keyed by their name.
///
/// Monies created through the table borrow their currency from it,
/// so the table must outlive them.
#[derive(Debug, Clone, Default)]
pub struct CurrencyTable {
    currencies: HashMap<String, FixedRateCurrency>,
}

impl CurrencyTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table holding a currency for each of the `specs`.
    ///
    /// # Errors:
    /// If any spec is invalid or two specs share a name.
    pub fn from_specs<I>(specs: I) -> Result<Self>
    where
        I: IntoIterator<Item = CurrencySpec>,
    {
        let mut table = Self::new();
        for spec in specs {
            table.insert(spec)?;
        }
        Ok(table)
    }

    /// Register the currency described by `spec`.
    ///
    /// # Errors:
    /// If the spec is invalid or a currency of the same name is already registered.
    pub fn insert(&mut self, spec: CurrencySpec) -> Result<&FixedRateCurrency> {
        let currency = FixedRateCurrency::try_from(spec)?;
        match self.currencies.entry(currency.name().to_owned()) {
            Entry::Occupied(entry) => Err(Error::DuplicateCurrency(entry.key().clone())),
            Entry::Vacant(entry) => {
                debug!("registering {currency} at rate {}", currency.rate());
                Ok(entry.insert(currency))
            }
        }
    }

    /// Look up a currency by its `name`.
    ///
    /// # Errors:
    /// If no such currency is registered.
    pub fn get(&self, name: &str) -> Result<&FixedRateCurrency> {
        self.currencies
            .get(name)
            .ok_or_else(|| Error::UnknownCurrency(name.to_owned()))
    }

    /// Create `Money` of `amount` minor units in the currency called `name`.
    ///
    /// # Errors:
    /// If no such currency is registered.
    pub fn money(&self, amount: i64, name: &str) -> Result<Money<'_>> {
        Ok(Money::new(amount, self.get(name)?))
    }

    /// The number of registered currencies.
    pub fn len(&self) -> usize {
        self.currencies.len()
    }

    /// Whether no currency is registered.
    pub fn is_empty(&self) -> bool {
        self.currencies.is_empty()
    }

    /// Iterate over the registered currencies in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = &FixedRateCurrency> {
        self.currencies.values()
    }
}
