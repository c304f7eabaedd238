//! Journal entries and the ledger store contract.
//!
//! This module implements the transaction side of the bookkeeping core:
//! - Journal entry domain types
//! - Business rule validation for entries
//! - Error types for ledger operations
//! - The storage contract consumed from collaborators, plus an in-memory
//!   reference implementation

pub mod entry;
pub mod error;
pub mod store;
pub mod validation;

pub use entry::JournalEntry;
pub use error::LedgerError;
pub use store::{LedgerStore, MemoryLedgerStore};
pub use validation::validate_entry;
