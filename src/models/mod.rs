//! Core data models for the budget calculator
//!
//! Line items, the amounts they carry, the sections they are shown in, and
//! the immutable state snapshot holding them.

pub mod amount;
pub mod ids;
pub mod item;
pub mod section;
pub mod state;

pub use amount::Amount;
pub use ids::{IdGenerator, ItemId, SequentialIds, UuidIds};
pub use item::{ExpenseCategory, ExpenseItem, ItemPatch, LineItem, RawValue};
pub use section::{ListKind, Section};
pub use state::BudgetState;
