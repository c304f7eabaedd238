//! Report generation service.

use std::collections::HashMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;

use minibooks_shared::types::AccountId;

use crate::catalog::{Account, AccountCategory, NormalBalance};
use crate::ledger::JournalEntry;

use super::types::{BalanceSheet, ProfitAndLoss, ReportLine, ReportingConfig};

/// Service for generating financial reports.
///
/// Every function is a pure fold over a snapshot of entries and accounts.
pub struct ReportService;

impl ReportService {
    /// Replays entries into per-account signed balances.
    ///
    /// Each entry adds `+amount` to its debit account and `-amount` to its
    /// credit account. When `as_of` is given, only entries dated on or
    /// before it contribute.
    #[must_use]
    pub fn account_balances(
        entries: &[JournalEntry],
        as_of: Option<NaiveDate>,
    ) -> HashMap<AccountId, Decimal> {
        Self::balances_between(entries, None, as_of)
    }

    /// Signed balances restricted to entries within `[start, end]`,
    /// open-ended on either side.
    fn balances_between(
        entries: &[JournalEntry],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> HashMap<AccountId, Decimal> {
        let mut balances: HashMap<AccountId, Decimal> = HashMap::new();

        for entry in entries {
            if start.is_some_and(|s| entry.date < s) || end.is_some_and(|e| entry.date > e) {
                continue;
            }
            *balances.entry(entry.debit_account_id).or_default() += entry.amount;
            *balances.entry(entry.credit_account_id).or_default() -= entry.amount;
        }

        balances
    }

    /// Generates a profit-and-loss statement for `[start, end]`.
    ///
    /// Revenue accounts are credit-normal: their balances are negated so
    /// earnings display positive. Expense balances are debit-normal and
    /// already positive when spent. Zero-balance accounts are omitted.
    #[must_use]
    pub fn profit_and_loss(
        entries: &[JournalEntry],
        accounts: &[Account],
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> ProfitAndLoss {
        let balances = Self::balances_between(entries, start, end);
        let mut statement = ProfitAndLoss::default();
        let mut total_revenue = Decimal::ZERO;
        let mut total_expense = Decimal::ZERO;

        for account in accounts {
            let balance = balances.get(&account.id).copied().unwrap_or_default();
            if balance.is_zero() {
                continue;
            }

            match account.category {
                AccountCategory::Revenue => {
                    let amount = -balance;
                    total_revenue += amount;
                    statement.revenues.push(ReportLine {
                        account_name: account.name.clone(),
                        amount,
                    });
                }
                AccountCategory::Expense => {
                    total_expense += balance;
                    statement.expenses.push(ReportLine {
                        account_name: account.name.clone(),
                        amount: balance,
                    });
                }
                _ => {}
            }
        }

        statement.net_income = total_revenue - total_expense;
        statement
    }

    /// Generates a balance sheet as of `as_of` (or all time when absent).
    ///
    /// Liability and equity balances are sign-flipped for display. The
    /// period's net income is rolled into the designated retained-earnings
    /// account, closing the books into equity. Zero-balance accounts are
    /// omitted except Equity accounts, which are always listed.
    #[must_use]
    pub fn balance_sheet(
        entries: &[JournalEntry],
        accounts: &[Account],
        config: &ReportingConfig,
        as_of: Option<NaiveDate>,
    ) -> BalanceSheet {
        let balances = Self::account_balances(entries, as_of);
        let net_income = Self::profit_and_loss(entries, accounts, None, as_of).net_income;

        let mut sheet = BalanceSheet::default();
        let mut total_liabilities = Decimal::ZERO;
        let mut total_equity = Decimal::ZERO;

        for account in accounts {
            if !account.category.is_balance_sheet() {
                continue;
            }

            let balance = balances.get(&account.id).copied().unwrap_or_default();
            if balance.is_zero() && account.category != AccountCategory::Equity {
                continue;
            }

            let mut amount = match account.category.normal_balance() {
                NormalBalance::Debit => balance,
                NormalBalance::Credit => -balance,
            };
            // Roll the period's net income into the designated equity
            // account after the sign-flip, so positive earnings increase
            // displayed equity.
            if account.id == config.retained_earnings {
                amount += net_income;
            }

            let line = ReportLine {
                account_name: account.name.clone(),
                amount,
            };
            match account.category {
                AccountCategory::Asset => {
                    sheet.total_assets += line.amount;
                    sheet.assets.push(line);
                }
                AccountCategory::Liability => {
                    total_liabilities += line.amount;
                    sheet.liabilities.push(line);
                }
                AccountCategory::Equity => {
                    total_equity += line.amount;
                    sheet.equity.push(line);
                }
                AccountCategory::Revenue | AccountCategory::Expense => {}
            }
        }

        sheet.total_liabilities_and_equity = total_liabilities + total_equity;
        sheet
    }
}
