//! Budget session service
//!
//! A [`BudgetSession`] is the one owner of the budget state for a running
//! session. It turns section-level edits into snapshot operations, supplies
//! fresh ids from an injected generator, and hands out the current snapshot
//! and its summary to whoever renders them.

use tracing::debug;

use crate::models::{
    BudgetState, IdGenerator, ItemId, ItemPatch, LineItem, ListKind, Section, UuidIds,
};
use crate::services::summary::BudgetSummary;

/// Attempts at a fresh id before falling back to a suffixed one
const MAX_ID_ATTEMPTS: usize = 8;

/// Session-scoped owner of the budget state
pub struct BudgetSession {
    state: BudgetState,
    ids: Box<dyn IdGenerator>,
}

impl BudgetSession {
    /// Start a session from the seed with random ids
    pub fn new() -> Self {
        Self::with_state(BudgetState::seeded(), Box::new(UuidIds))
    }

    /// Start a session from an explicit state and id generator
    pub fn with_state(state: BudgetState, ids: Box<dyn IdGenerator>) -> Self {
        debug!(
            incomes = state.incomes().len(),
            expenses = state.expenses().len(),
            "budget session started"
        );
        Self { state, ids }
    }

    /// The current snapshot
    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    /// Totals for the current snapshot
    pub fn summary(&self) -> BudgetSummary {
        BudgetSummary::compute(&self.state)
    }

    /// The ordered items of a section
    pub fn items(&self, section: Section) -> Vec<&LineItem> {
        self.state.section_items(section)
    }

    /// Append a blank item to a section and return its id
    pub fn add(&mut self, section: Section) -> ItemId {
        let id = self.fresh_id(section.list());
        self.state = self.state.with_added(section, id.clone());
        debug!(%section, %id, "added item");
        id
    }

    /// Merge a patch over an item of the section's list
    ///
    /// Returns false, and changes nothing, when the id is not in the list.
    pub fn update(&mut self, section: Section, id: &ItemId, patch: &ItemPatch) -> bool {
        let list = section.list();
        if !self.state.contains(list, id) {
            debug!(%section, %id, "update ignored: no such item");
            return false;
        }

        self.state = self.state.with_updated(list, id, patch);
        debug!(%section, %id, ?patch, "updated item");
        true
    }

    /// Remove an item from the section's list
    ///
    /// Returns false, and changes nothing, when the id is not in the list.
    pub fn delete(&mut self, section: Section, id: &ItemId) -> bool {
        let list = section.list();
        if !self.state.contains(list, id) {
            debug!(%section, %id, "delete ignored: no such item");
            return false;
        }

        self.state = self.state.with_removed(list, id);
        debug!(%section, %id, "deleted item");
        true
    }

    fn fresh_id(&mut self, list: ListKind) -> ItemId {
        let mut candidate = self.ids.next_id();
        for attempt in 1..=MAX_ID_ATTEMPTS {
            if !self.state.contains(list, &candidate) {
                return candidate;
            }
            debug!(id = %candidate, attempt, "generated id already in use");
            if attempt < MAX_ID_ATTEMPTS {
                candidate = self.ids.next_id();
            }
        }

        let base = candidate.to_string();
        let mut suffix = 1usize;
        loop {
            let id = ItemId::new(format!("{}-{}", base, suffix));
            if !self.state.contains(list, &id) {
                return id;
            }
            suffix += 1;
        }
    }
}

impl Default for BudgetSession {
    fn default() -> Self {
        Self::new()
    }
}
