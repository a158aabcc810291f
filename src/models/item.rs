//! Line item models
//!
//! Incomes are plain [`LineItem`]s; expenses carry an [`ExpenseCategory`]
//! chosen when they are created. Edits arrive as an [`ItemPatch`] whose
//! fields are merged over the existing item.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::amount::Amount;
use super::ids::ItemId;

/// A single described monetary entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub id: ItemId,
    pub description: String,
    pub value: Amount,
}

impl LineItem {
    /// Create a blank item: empty description, value 0
    pub fn blank(id: ItemId) -> Self {
        Self::new(id, "")
    }

    /// Create an item with a description and value 0
    pub fn new(id: impl Into<ItemId>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            description: description.into(),
            value: Amount::zero(),
        }
    }

    /// Return a copy with the patch merged over this item
    pub fn patched(&self, patch: &ItemPatch) -> Self {
        let mut item = self.clone();
        patch.apply_to(&mut item);
        item
    }
}

/// Expense classification, fixed at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExpenseCategory {
    Essential,
    NonEssential,
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Essential => write!(f, "essential"),
            Self::NonEssential => write!(f, "non-essential"),
        }
    }
}

impl FromStr for ExpenseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "essential" => Ok(Self::Essential),
            "non-essential" | "nonessential" | "non_essential" => Ok(Self::NonEssential),
            other => Err(format!("unknown expense category '{}'", other)),
        }
    }
}

/// An expense: a line item plus its category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseItem {
    #[serde(flatten)]
    pub item: LineItem,
    pub category: ExpenseCategory,
}

impl ExpenseItem {
    /// Create a blank expense in the given category
    pub fn blank(id: ItemId, category: ExpenseCategory) -> Self {
        Self {
            item: LineItem::blank(id),
            category,
        }
    }

    /// Create an expense with a description and value 0
    pub fn new(
        id: impl Into<ItemId>,
        category: ExpenseCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            item: LineItem::new(id, description),
            category,
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    pub fn value(&self) -> Amount {
        self.item.value
    }

    /// Return a copy with the patch merged over this expense
    ///
    /// The category is not part of a patch and always carries over.
    pub fn patched(&self, patch: &ItemPatch) -> Self {
        Self {
            item: self.item.patched(patch),
            category: self.category,
        }
    }
}

/// A value as it arrives from the user: a number or raw text
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
    Number(f64),
    Text(String),
}

impl RawValue {
    /// Coerce into a storable amount
    pub fn to_amount(&self) -> Amount {
        match self {
            Self::Number(n) => Amount::coerce(*n),
            Self::Text(s) => Amount::parse_lenient(s),
        }
    }
}

impl From<f64> for RawValue {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for RawValue {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for RawValue {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

/// Partial update of a line item; absent fields are left as they are
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ItemPatch {
    pub description: Option<String>,
    pub value: Option<RawValue>,
}

impl ItemPatch {
    /// A patch that only sets the description
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            value: None,
        }
    }

    /// A patch that only sets the value
    pub fn value(value: impl Into<RawValue>) -> Self {
        Self {
            description: None,
            value: Some(value.into()),
        }
    }

    /// Also set the value
    pub fn with_value(mut self, value: impl Into<RawValue>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// True when the patch changes nothing
    pub fn is_empty(&self) -> bool {
        self.description.is_none() && self.value.is_none()
    }

    fn apply_to(&self, item: &mut LineItem) {
        if let Some(description) = &self.description {
            item.description = description.clone();
        }
        if let Some(value) = &self.value {
            item.value = value.to_amount();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_item() {
        let item = LineItem::blank(ItemId::from("n1"));
        assert!(item.description.is_empty());
        assert!(item.value.is_zero());
    }

    #[test]
    fn test_patch_merges_fields() {
        let item = LineItem::new("i1", "Salary");
        let patched = item.patched(&ItemPatch::value(1000.0));
        assert_eq!(patched.description, "Salary");
        assert_eq!(patched.value.value(), 1000.0);

        let renamed = patched.patched(&ItemPatch::description("Net salary"));
        assert_eq!(renamed.description, "Net salary");
        assert_eq!(renamed.value.value(), 1000.0);
    }

    #[test]
    fn test_patch_coerces_values() {
        let item = LineItem::new("i1", "Salary");
        assert!(item.patched(&ItemPatch::value(-50.0)).value.is_zero());
        assert!(item.patched(&ItemPatch::value("abc")).value.is_zero());
        assert_eq!(item.patched(&ItemPatch::value("1500,75")).value.value(), 1500.75);
    }

    #[test]
    fn test_expense_patch_keeps_category() {
        let expense = ExpenseItem::new("e1", ExpenseCategory::Essential, "Rent");
        let patched = expense.patched(
            &ItemPatch::description("Mortgage").with_value(1200.0),
        );
        assert_eq!(patched.category, ExpenseCategory::Essential);
        assert_eq!(patched.item.description, "Mortgage");
        assert_eq!(patched.value().value(), 1200.0);
        assert_eq!(patched.id(), expense.id());
    }

    #[test]
    fn test_empty_patch() {
        assert!(ItemPatch::default().is_empty());
        assert!(!ItemPatch::value(1.0).is_empty());
    }

    #[test]
    fn test_category_parse_and_display() {
        assert_eq!("essential".parse(), Ok(ExpenseCategory::Essential));
        assert_eq!("Non-Essential".parse(), Ok(ExpenseCategory::NonEssential));
        assert!("savings".parse::<ExpenseCategory>().is_err());
        assert_eq!(ExpenseCategory::NonEssential.to_string(), "non-essential");
    }

    #[test]
    fn test_expense_serialization() {
        let expense = ExpenseItem::new("e6", ExpenseCategory::NonEssential, "Card");
        let json = serde_json::to_value(&expense).unwrap();
        assert_eq!(json["id"], "e6");
        assert_eq!(json["category"], "non-essential");
        assert_eq!(json["value"], 0.0);
    }
}
