#![deny(missing_docs, rustdoc::missing_crate_level_docs, unused_imports)]
#![warn(clippy::all)]
#![doc = include_str!("../README.md")]

//! fxmoney - immutable money values with cross-currency arithmetic

mod currency_table;
mod types;

/// Exports common types
pub mod prelude {
    pub use num::rational::Ratio;

    pub use crate::{currency_table::CurrencyTable, money, types::*};
}
