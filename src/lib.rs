//! # sqlident
//!
//! Dialect-aware quoting of SQL table and column names for SQL generators.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │         Statement builder (caller)                       │
//! │   engine.quote("schema.table", false)                    │
//! └─────────────────────────────────────────────────────────┘
//!                          │
//!                          ▼ [Engine / QuoteConfig: Quoter]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Policy: QuoteMode × QuotePolicy × is_reserved()        │
//! └─────────────────────────────────────────────────────────┘
//!                          │ quote?
//!                          ▼ [normalizer]
//! ┌─────────────────────────────────────────────────────────┐
//! │   Per-segment rewrite with the dialect's quote pair      │
//! │   `a`.b  ──▶  "a"."b"  /  [a].[b]  /  `a`.`b`            │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use sqlident::prelude::*;
//!
//! let engine = Engine::new(Dialect::Postgres);
//! assert_eq!(engine.quote("public.users", false), r#""public"."users""#);
//! assert_eq!(engine.quote("`id`", true), r#""id""#);
//! assert_eq!(engine.quote_columns("id, name"), r#""id","name""#);
//! ```

pub mod config;
pub mod engine;
pub mod sql;

// Re-export SQL submodules at crate level
pub use sql::dialect;
pub use sql::quote;

/// Re-exports for convenient usage.
pub mod prelude {
    pub use crate::dialect::{Dialect, SqlDialect};
    pub use crate::engine::Engine;
    pub use crate::quote::{
        quote, quote_all, quote_columns, quote_join, quote_join_with, quote_to, unquote,
        QuoteConfig, QuoteMode, QuotePolicy, Quoter,
    };
}

// Also export at crate root for convenience
pub use config::{Settings, SettingsError};
pub use dialect::{Dialect, SqlDialect};
pub use engine::Engine;
pub use quote::{QuoteConfig, QuoteMode, QuotePolicy, Quoter};
