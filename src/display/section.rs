//! Section table display
//!
//! Renders one section (incomes, essential or non-essential expenses) as a
//! table of id, description and value.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::config::Settings;
use crate::models::{LineItem, Section};

use super::currency::format_item_value;

/// Shown in place of the table when a section has no items
pub const EMPTY_SECTION: &str = "Nenhum item adicionado.";

/// Format a section heading followed by its items
pub fn format_section(section: Section, items: &[&LineItem], settings: &Settings) -> String {
    let mut output = String::new();
    output.push_str(&format!("{} [{}]\n", section.title().to_uppercase(), section));

    if items.is_empty() {
        output.push_str(&format!("  {}\n", EMPTY_SECTION));
        return output;
    }

    let mut builder = Builder::default();
    builder.push_record([
        "ID".to_string(),
        "Descrição".to_string(),
        format!("Valor ({})", settings.currency_symbol),
    ]);
    for item in items {
        builder.push_record([
            item.id.to_string(),
            item.description.clone(),
            format_item_value(item.value, settings),
        ]);
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .modify(Columns::last(), Alignment::right());

    output.push_str(&table.to_string());
    output.push('\n');
    output
}
