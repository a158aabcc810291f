//! Display sections
//!
//! The front-end shows three tables: incomes, essential expenses and
//! non-essential expenses. A section knows which list backs it and which
//! category new expenses get.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::item::ExpenseCategory;

/// Which backing list an operation addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    Incomes,
    Expenses,
}

/// One table of the budget view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Section {
    Incomes,
    Essential,
    NonEssential,
}

impl Section {
    /// All sections in display order
    pub fn all() -> &'static [Self] {
        &[Self::Incomes, Self::Essential, Self::NonEssential]
    }

    /// The list backing this section
    pub fn list(&self) -> ListKind {
        match self {
            Self::Incomes => ListKind::Incomes,
            Self::Essential | Self::NonEssential => ListKind::Expenses,
        }
    }

    /// The category of expenses shown in this section
    pub fn category(&self) -> Option<ExpenseCategory> {
        match self {
            Self::Incomes => None,
            Self::Essential => Some(ExpenseCategory::Essential),
            Self::NonEssential => Some(ExpenseCategory::NonEssential),
        }
    }

    /// Heading shown above the section table
    pub fn title(&self) -> &'static str {
        match self {
            Self::Incomes => "Entradas (Rendas)",
            Self::Essential => "Despesas Essenciais",
            Self::NonEssential => "Despesas Não Essenciais",
        }
    }
}

impl From<ExpenseCategory> for Section {
    fn from(category: ExpenseCategory) -> Self {
        match category {
            ExpenseCategory::Essential => Self::Essential,
            ExpenseCategory::NonEssential => Self::NonEssential,
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomes => write!(f, "income"),
            Self::Essential => write!(f, "essential"),
            Self::NonEssential => write!(f, "non-essential"),
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "income" | "incomes" => Ok(Self::Incomes),
            other => other
                .parse::<ExpenseCategory>()
                .map(Self::from)
                .map_err(|_| {
                    format!(
                        "unknown section '{}' (expected income, essential or non-essential)",
                        other
                    )
                }),
        }
    }
}
