//! Report data types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use minibooks_shared::types::AccountId;

/// One account line in a report section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportLine {
    /// Account display name.
    pub account_name: String,
    /// Displayed amount, sign-adjusted for the account's normal balance.
    pub amount: Decimal,
}

/// Profit-and-loss statement for a period.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfitAndLoss {
    /// Revenue accounts with non-zero balances, shown positive when earned.
    pub revenues: Vec<ReportLine>,
    /// Expense accounts with non-zero balances, shown positive when spent.
    pub expenses: Vec<ReportLine>,
    /// Total revenues minus total expenses.
    pub net_income: Decimal,
}

/// Point-in-time balance sheet.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BalanceSheet {
    /// Asset accounts with non-zero balances.
    pub assets: Vec<ReportLine>,
    /// Liability accounts with non-zero balances, sign-flipped for display.
    pub liabilities: Vec<ReportLine>,
    /// Equity accounts, sign-flipped, always listed even at zero.
    pub equity: Vec<ReportLine>,
    /// Sum of asset lines.
    pub total_assets: Decimal,
    /// Sum of liability and equity lines after sign-flip and
    /// retained-earnings rollup.
    pub total_liabilities_and_equity: Decimal,
}

/// Aggregation configuration supplied by the embedding application.
///
/// The designated retained-earnings account is an explicit value rather
/// than a well-known id convention baked into the aggregation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportingConfig {
    /// The equity account that accumulates net income on the balance sheet.
    pub retained_earnings: AccountId,
}
