//! Chart of accounts types and sign conventions.
//!
//! The catalog is consumed read-only: accounts are created and edited by an
//! external manager, this core only resolves ids and categories.

pub mod types;

pub use types::{Account, AccountCategory, NormalBalance};
