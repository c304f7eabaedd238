//! Materialization of due recurring transactions.
//!
//! The executor orchestrates the due-date calculator and the two stores:
//! it turns a due rule into a journal entry exactly once per rule per
//! calendar day, and isolates per-rule failures during batch runs. It owns
//! no timer or loop - an external trigger calls `execute_due`/`execute_one`.

pub mod error;
pub mod service;

pub use error::ExecutorError;
pub use service::{BatchOutcome, RecurringExecutor, RuleFailure};
