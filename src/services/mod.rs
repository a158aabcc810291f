//! Service layer for the budget calculator
//!
//! The session owns the state and applies edits; the summary derives the
//! totals shown next to the item tables.

pub mod session;
pub mod summary;

pub use session::BudgetSession;
pub use summary::{BalanceStatus, BudgetSummary, RESERVE_MONTHS};
