//! SQL identifier handling.
//!
//! - [`dialect`] - quote characters and reserved words per database
//! - [`quote`] - the quoting engine (policy, normalizer, batch helpers)

pub mod dialect;
pub mod quote;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types at the sql module level
pub use dialect::{Dialect, SqlDialect};
pub use quote::{QuoteConfig, QuoteMode, QuotePolicy, Quoter};
