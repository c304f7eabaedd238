//! Core business logic for Minibooks.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `catalog` - Chart of accounts types and sign conventions
//! - `ledger` - Journal entries, validation, and the ledger store contract
//! - `schedule` - Recurrence rules and the due-date calculator
//! - `executor` - Materialization of due recurring transactions
//! - `reports` - Balance sheet and profit-and-loss aggregation

pub mod catalog;
pub mod executor;
pub mod ledger;
pub mod reports;
pub mod schedule;
