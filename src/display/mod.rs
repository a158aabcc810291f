//! Display formatting for terminal output
//!
//! Renders the budget state and its summary as text. Nothing here computes
//! totals; it only formats what the services produce.

pub mod currency;
pub mod section;
pub mod summary;

pub use currency::{format_currency, format_item_value};
pub use section::format_section;
pub use summary::format_summary;

use chrono::NaiveDate;

use crate::config::Settings;
use crate::models::Section;
use crate::services::BudgetSession;

/// Format every section table of a session followed by its summary panel
pub fn format_budget(session: &BudgetSession, settings: &Settings, date: Option<NaiveDate>) -> String {
    let mut output = String::new();

    for section in Section::all() {
        output.push_str(&format_section(*section, &session.items(*section), settings));
        output.push('\n');
    }

    output.push_str(&format_summary(&session.summary(), settings, date));
    output
}
