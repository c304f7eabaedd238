//! Balance sheet and profit-and-loss aggregation.
//!
//! A pure, read-only replay of the journal entry stream: safe to invoke
//! concurrently and speculatively, since nothing here mutates state.

pub mod service;
pub mod types;


pub use service::ReportService;
pub use types::{BalanceSheet, ProfitAndLoss, ReportLine, ReportingConfig};
