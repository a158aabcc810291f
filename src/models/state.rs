//! Budget state snapshots
//!
//! A [`BudgetState`] holds the two ordered lists of the session. It is
//! immutable: every mutation returns a new snapshot. Lists are shared
//! through `Arc`, so the list a mutation does not touch is not copied.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::sync::Arc;

use super::ids::ItemId;
use super::item::{ExpenseCategory, ExpenseItem, ItemPatch, LineItem};
use super::section::{ListKind, Section};

/// Seed incomes as (id, description)
const SEED_INCOMES: &[(&str, &str)] = &[
    ("i1", "SALÁRIO LÍQUIDO DE [PESSOA 01]"),
    ("i2", "VALE-ALIMENTAÇÃO DE [PESSOA 01]"),
    ("i3", "VALE-REFEIÇÃO DE [PESSOA 01]"),
    ("i4", "SALÁRIO LÍQUIDO DE [PESSOA 02]"),
    ("i5", "OUTRAS ENTRADAS 01 (AVON, UBER...)"),
];

/// Seed expenses as (id, category, description)
const SEED_EXPENSES: &[(&str, ExpenseCategory, &str)] = &[
    ("e1", ExpenseCategory::Essential, "MORADIA (ALUGUEL/FINANCIAMENTO)"),
    ("e2", ExpenseCategory::Essential, "CONDOMÍNIO"),
    ("e3", ExpenseCategory::Essential, "SUPERMERCADO"),
    ("e4", ExpenseCategory::Essential, "LUZ / GÁS / ÁGUA"),
    ("e5", ExpenseCategory::Essential, "PLANO DE SAÚDE"),
    ("e6", ExpenseCategory::NonEssential, "CARTÃO DE CRÉDITO"),
    ("e7", ExpenseCategory::NonEssential, "COMBUSTÍVEL"),
    ("e8", ExpenseCategory::NonEssential, "FARMÁCIA / ANIMAIS"),
    ("e9", ExpenseCategory::NonEssential, "INTERNET / STREAMING"),
    ("e10", ExpenseCategory::NonEssential, "SAÍDAS / LAZER"),
];

/// Incomes and expenses of one session
///
/// Deserializing goes through [`BudgetState::new`], so decoded lists keep
/// unique ids.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "StateLists")]
pub struct BudgetState {
    incomes: Arc<Vec<LineItem>>,
    expenses: Arc<Vec<ExpenseItem>>,
}

/// Wire form of a state before id de-duplication
#[derive(Deserialize)]
struct StateLists {
    #[serde(default)]
    incomes: Vec<LineItem>,
    #[serde(default)]
    expenses: Vec<ExpenseItem>,
}

impl From<StateLists> for BudgetState {
    fn from(lists: StateLists) -> Self {
        Self::new(lists.incomes, lists.expenses)
    }
}

impl BudgetState {
    /// Build a state from explicit lists
    ///
    /// Later items whose id repeats an earlier one in the same list are
    /// dropped, keeping ids unique per list.
    pub fn new(incomes: Vec<LineItem>, expenses: Vec<ExpenseItem>) -> Self {
        let mut seen = HashSet::new();
        let incomes = incomes
            .into_iter()
            .filter(|i| seen.insert(i.id.clone()))
            .collect();

        let mut seen = HashSet::new();
        let expenses = expenses
            .into_iter()
            .filter(|e| seen.insert(e.id().clone()))
            .collect();

        Self {
            incomes: Arc::new(incomes),
            expenses: Arc::new(expenses),
        }
    }

    /// A state with no items at all
    pub fn empty() -> Self {
        Self::default()
    }

    /// The fixed starting state: five incomes and ten expenses, all zero
    pub fn seeded() -> Self {
        let incomes = SEED_INCOMES
            .iter()
            .map(|(id, description)| LineItem::new(*id, *description))
            .collect();
        let expenses = SEED_EXPENSES
            .iter()
            .map(|(id, category, description)| ExpenseItem::new(*id, *category, *description))
            .collect();

        Self::new(incomes, expenses)
    }

    pub fn incomes(&self) -> &[LineItem] {
        &self.incomes
    }

    pub fn expenses(&self) -> &[ExpenseItem] {
        &self.expenses
    }

    /// Expenses of one category, in insertion order
    pub fn expenses_in(
        &self,
        category: ExpenseCategory,
    ) -> impl Iterator<Item = &ExpenseItem> + '_ {
        self.expenses.iter().filter(move |e| e.category == category)
    }

    /// The ordered items shown in a section
    pub fn section_items(&self, section: Section) -> Vec<&LineItem> {
        match section.category() {
            None => self.incomes.iter().collect(),
            Some(category) => self.expenses_in(category).map(|e| &e.item).collect(),
        }
    }

    /// Check whether a list holds an item with this id
    pub fn contains(&self, list: ListKind, id: &ItemId) -> bool {
        match list {
            ListKind::Incomes => self.incomes.iter().any(|i| &i.id == id),
            ListKind::Expenses => self.expenses.iter().any(|e| e.id() == id),
        }
    }

    /// Append a blank item to the list behind `section`
    ///
    /// Expense sections create the expense in their own category. The id
    /// must be fresh for that list; a colliding id leaves the state as is.
    pub fn with_added(&self, section: Section, id: ItemId) -> Self {
        if self.contains(section.list(), &id) {
            return self.clone();
        }

        match section.category() {
            None => {
                let mut incomes = Vec::with_capacity(self.incomes.len() + 1);
                incomes.extend(self.incomes.iter().cloned());
                incomes.push(LineItem::blank(id));
                Self {
                    incomes: Arc::new(incomes),
                    expenses: Arc::clone(&self.expenses),
                }
            }
            Some(category) => {
                let mut expenses = Vec::with_capacity(self.expenses.len() + 1);
                expenses.extend(self.expenses.iter().cloned());
                expenses.push(ExpenseItem::blank(id, category));
                Self {
                    incomes: Arc::clone(&self.incomes),
                    expenses: Arc::new(expenses),
                }
            }
        }
    }

    /// Merge `patch` over the item with this id
    ///
    /// An unknown id returns an unchanged snapshot.
    pub fn with_updated(&self, list: ListKind, id: &ItemId, patch: &ItemPatch) -> Self {
        if !self.contains(list, id) {
            return self.clone();
        }

        match list {
            ListKind::Incomes => Self {
                incomes: Arc::new(
                    self.incomes
                        .iter()
                        .map(|i| if &i.id == id { i.patched(patch) } else { i.clone() })
                        .collect(),
                ),
                expenses: Arc::clone(&self.expenses),
            },
            ListKind::Expenses => Self {
                incomes: Arc::clone(&self.incomes),
                expenses: Arc::new(
                    self.expenses
                        .iter()
                        .map(|e| if e.id() == id { e.patched(patch) } else { e.clone() })
                        .collect(),
                ),
            },
        }
    }

    /// Remove the item with this id, keeping the order of the rest
    ///
    /// An unknown id returns an unchanged snapshot.
    pub fn with_removed(&self, list: ListKind, id: &ItemId) -> Self {
        if !self.contains(list, id) {
            return self.clone();
        }

        match list {
            ListKind::Incomes => Self {
                incomes: Arc::new(
                    self.incomes
                        .iter()
                        .filter(|i| &i.id != id)
                        .cloned()
                        .collect(),
                ),
                expenses: Arc::clone(&self.expenses),
            },
            ListKind::Expenses => Self {
                incomes: Arc::clone(&self.incomes),
                expenses: Arc::new(
                    self.expenses
                        .iter()
                        .filter(|e| e.id() != id)
                        .cloned()
                        .collect(),
                ),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(items: &[&LineItem]) -> Vec<String> {
        items.iter().map(|i| i.id.to_string()).collect()
    }

    #[test]
    fn test_seeded_state() {
        let state = BudgetState::seeded();
        assert_eq!(state.incomes().len(), 5);
        assert_eq!(state.expenses().len(), 10);
        assert_eq!(state.incomes()[0].id, ItemId::from("i1"));
        assert_eq!(state.incomes()[0].description, "SALÁRIO LÍQUIDO DE [PESSOA 01]");
        assert_eq!(state.expenses_in(ExpenseCategory::Essential).count(), 5);
        assert_eq!(state.expenses_in(ExpenseCategory::NonEssential).count(), 5);
        assert!(state.incomes().iter().all(|i| i.value.is_zero()));
        assert!(state.expenses().iter().all(|e| e.value().is_zero()));
    }

    #[test]
    fn test_seeded_sections() {
        let state = BudgetState::seeded();
        assert_eq!(
            ids(&state.section_items(Section::Essential)),
            vec!["e1", "e2", "e3", "e4", "e5"]
        );
        assert_eq!(
            ids(&state.section_items(Section::NonEssential)),
            vec!["e6", "e7", "e8", "e9", "e10"]
        );
    }

    #[test]
    fn test_new_drops_duplicate_ids() {
        let state = BudgetState::new(
            vec![LineItem::new("a", "first"), LineItem::new("a", "second")],
            vec![ExpenseItem::new("a", ExpenseCategory::Essential, "rent")],
        );
        assert_eq!(state.incomes().len(), 1);
        assert_eq!(state.incomes()[0].description, "first");
        // Same id across lists is allowed
        assert_eq!(state.expenses().len(), 1);
    }

    #[test]
    fn test_deserialize_keeps_invariants() {
        let json = r#"{
            "incomes": [
                { "id": "a", "description": "first", "value": -50.0 },
                { "id": "a", "description": "second", "value": 10.0 }
            ],
            "expenses": [
                { "id": "e1", "description": "rent", "value": 900.0, "category": "essential" }
            ]
        }"#;
        let state: BudgetState = serde_json::from_str(json).unwrap();

        assert_eq!(state.incomes().len(), 1);
        assert_eq!(state.incomes()[0].description, "first");
        assert!(state.incomes()[0].value.is_zero());
        assert_eq!(state.expenses()[0].value().value(), 900.0);
        assert_eq!(state.expenses()[0].category, ExpenseCategory::Essential);
    }

    #[test]
    fn test_serialized_state_reads_back() {
        let state = BudgetState::seeded().with_updated(
            ListKind::Incomes,
            &ItemId::from("i1"),
            &ItemPatch::value(3200.0),
        );
        let json = serde_json::to_string(&state).unwrap();
        let decoded: BudgetState = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, state);
    }

    #[test]
    fn test_add_appends_blank_item() {
        let state = BudgetState::seeded();
        let next = state.with_added(Section::Incomes, ItemId::from("n1"));

        assert_eq!(next.incomes().len(), 6);
        let added = &next.incomes()[5];
        assert_eq!(added.id, ItemId::from("n1"));
        assert!(added.description.is_empty());
        assert!(added.value.is_zero());
        // Previous snapshot is untouched
        assert_eq!(state.incomes().len(), 5);
    }

    #[test]
    fn test_add_expense_uses_section_category() {
        let state = BudgetState::empty();
        let next = state
            .with_added(Section::NonEssential, ItemId::from("n1"))
            .with_added(Section::Essential, ItemId::from("n2"));

        assert_eq!(next.expenses()[0].category, ExpenseCategory::NonEssential);
        assert_eq!(next.expenses()[1].category, ExpenseCategory::Essential);
        assert_eq!(ids(&next.section_items(Section::Essential)), vec!["n2"]);
    }

    #[test]
    fn test_add_with_colliding_id_is_ignored() {
        let state = BudgetState::seeded();
        let next = state.with_added(Section::Incomes, ItemId::from("i1"));
        assert_eq!(next, state);
    }

    #[test]
    fn test_update_replaces_matching_item() {
        let state = BudgetState::seeded();
        let next = state.with_updated(
            ListKind::Expenses,
            &ItemId::from("e3"),
            &ItemPatch::value(850.0),
        );

        assert_eq!(next.expenses()[2].value().value(), 850.0);
        assert_eq!(next.expenses()[2].item.description, "SUPERMERCADO");
        assert_eq!(next.expenses()[2].category, ExpenseCategory::Essential);
        assert!(state.expenses()[2].value().is_zero());
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let state = BudgetState::seeded();
        let next = state.with_updated(
            ListKind::Incomes,
            &ItemId::from("missing"),
            &ItemPatch::value(10.0),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_update_addresses_only_its_list() {
        let state = BudgetState::seeded();
        // "e1" is an expense id, not an income id
        let next = state.with_updated(
            ListKind::Incomes,
            &ItemId::from("e1"),
            &ItemPatch::value(10.0),
        );
        assert_eq!(next, state);
    }

    #[test]
    fn test_delete_preserves_order() {
        let state = BudgetState::seeded();
        let next = state.with_removed(ListKind::Incomes, &ItemId::from("i3"));

        let remaining: Vec<_> = next.incomes().iter().map(|i| i.id.to_string()).collect();
        assert_eq!(remaining, vec!["i1", "i2", "i4", "i5"]);
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let state = BudgetState::seeded();
        let next = state.with_removed(ListKind::Expenses, &ItemId::from("e42"));
        assert_eq!(next.expenses().len(), state.expenses().len());
        assert_eq!(next, state);
    }

    #[test]
    fn test_untouched_list_is_shared() {
        let state = BudgetState::seeded();

        let next = state.with_updated(
            ListKind::Incomes,
            &ItemId::from("i1"),
            &ItemPatch::value(1.0),
        );
        assert!(Arc::ptr_eq(&state.expenses, &next.expenses));
        assert!(!Arc::ptr_eq(&state.incomes, &next.incomes));

        let next = state.with_removed(ListKind::Expenses, &ItemId::from("e1"));
        assert!(Arc::ptr_eq(&state.incomes, &next.incomes));
    }

    #[test]
    fn test_operations_are_deterministic() {
        let run = || {
            BudgetState::empty()
                .with_added(Section::Incomes, ItemId::from("a"))
                .with_updated(ListKind::Incomes, &ItemId::from("a"), &ItemPatch::value("12,5"))
                .with_added(Section::Essential, ItemId::from("b"))
                .with_removed(ListKind::Expenses, &ItemId::from("b"))
        };
        assert_eq!(run(), run());
    }
}
