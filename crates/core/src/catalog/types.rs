//! Account domain types.

use serde::{Deserialize, Serialize};

use minibooks_shared::types::AccountId;

/// Account category.
///
/// The category fixes the sign convention used everywhere downstream and
/// decides which report an account appears in (balance sheet vs
/// profit-and-loss).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountCategory {
    /// Resources owned (cash, receivables, equipment).
    Asset,
    /// Obligations owed (payables, loans).
    Liability,
    /// Owner claims, including retained earnings.
    Equity,
    /// Income earned during a period.
    Revenue,
    /// Costs incurred during a period.
    Expense,
}

/// Which side of an entry increases an account's displayed balance.
///
/// - Asset/Expense: balance grows with debits (debit-normal)
/// - Liability/Equity/Revenue: balance grows with credits (credit-normal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NormalBalance {
    /// Debit-normal accounts (Asset, Expense).
    Debit,
    /// Credit-normal accounts (Liability, Equity, Revenue).
    Credit,
}

impl AccountCategory {
    /// Returns the normal balance side for this category.
    #[must_use]
    pub fn normal_balance(self) -> NormalBalance {
        match self {
            Self::Asset | Self::Expense => NormalBalance::Debit,
            Self::Liability | Self::Equity | Self::Revenue => NormalBalance::Credit,
        }
    }

    /// Returns true if accounts of this category appear on the balance sheet.
    #[must_use]
    pub fn is_balance_sheet(self) -> bool {
        matches!(self, Self::Asset | Self::Liability | Self::Equity)
    }

    /// Returns true if accounts of this category appear on the
    /// profit-and-loss statement.
    #[must_use]
    pub fn is_profit_and_loss(self) -> bool {
        matches!(self, Self::Revenue | Self::Expense)
    }
}

/// A chart of accounts entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    /// Unique identifier.
    pub id: AccountId,
    /// Display name (e.g., "Cash").
    pub name: String,
    /// Category fixing the sign convention.
    pub category: AccountCategory,
}

impl Account {
    /// Creates a new account with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, category: AccountCategory) -> Self {
        Self {
            id: AccountId::new(),
            name: name.into(),
            category,
        }
    }
}
