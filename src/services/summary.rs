//! Aggregation engine
//!
//! Derives every figure the budget view shows from a state snapshot. The
//! computation is pure and runs in full on each call; sums follow
//! insertion order so identical input sequences give identical output.

use serde::Serialize;

use crate::models::{Amount, BudgetState, ExpenseCategory, ExpenseItem, LineItem};

/// Months of expenses the emergency reserve should cover
pub const RESERVE_MONTHS: f64 = 6.0;

/// Sign of the monthly balance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BalanceStatus {
    Positive,
    Negative,
    /// Totals overflowed and the balance is not a number
    Undefined,
}

/// Totals derived from one state snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BudgetSummary {
    pub total_incomes: Amount,
    pub total_essential: Amount,
    pub total_non_essential: Amount,
    pub grand_total_expenses: Amount,
    pub balance: Amount,
    pub emergency_reserve: Amount,
}

impl BudgetSummary {
    /// Compute all totals for a snapshot
    pub fn compute(state: &BudgetState) -> Self {
        let total_incomes = sum_items(state.incomes());
        let total_essential = sum_expenses(state.expenses_in(ExpenseCategory::Essential));
        let total_non_essential = sum_expenses(state.expenses_in(ExpenseCategory::NonEssential));
        let grand_total_expenses = total_essential + total_non_essential;

        tracing::trace!(
            incomes = state.incomes().len(),
            expenses = state.expenses().len(),
            "recomputed budget summary"
        );

        Self {
            total_incomes,
            total_essential,
            total_non_essential,
            grand_total_expenses,
            balance: total_incomes - grand_total_expenses,
            emergency_reserve: grand_total_expenses * RESERVE_MONTHS,
        }
    }

    /// Positive when the balance is zero or above
    pub fn balance_status(&self) -> BalanceStatus {
        if !self.balance.is_finite() {
            BalanceStatus::Undefined
        } else if self.balance.is_negative() {
            BalanceStatus::Negative
        } else {
            BalanceStatus::Positive
        }
    }
}

fn sum_items(items: &[LineItem]) -> Amount {
    items.iter().map(|i| i.value).sum()
}

fn sum_expenses<'a>(expenses: impl Iterator<Item = &'a ExpenseItem>) -> Amount {
    expenses.map(|e| e.value()).sum()
}
