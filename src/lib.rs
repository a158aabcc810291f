//! Budget Calc - personal budgeting calculator
//!
//! Incomes and expenses go in as line items; out come the totals, the
//! monthly balance and a suggested emergency reserve of six months of
//! expenses. All state lives in memory for a single session.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `models`: Line items, amounts, sections and immutable state snapshots
//! - `services`: The session that owns the state, and the aggregation engine
//! - `display`: Currency, table and summary formatting
//! - `cli`: Line-oriented terminal session
//! - `config`: Read-only settings and their location
//! - `error`: Custom error types
//! - `log`: Tracing subscriber setup
//!
//! # Example
//!
//! ```rust
//! use budget_calc::models::{BudgetState, ItemPatch, Section, SequentialIds};
//! use budget_calc::services::BudgetSession;
//!
//! let mut session = BudgetSession::with_state(BudgetState::empty(), Box::new(SequentialIds::default()));
//! let id = session.add(Section::Incomes);
//! session.update(Section::Incomes, &id, &ItemPatch::value(1000.0));
//! assert_eq!(session.summary().total_incomes.value(), 1000.0);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod log;
pub mod models;
pub mod services;

pub use error::{BudgetError, BudgetResult};
