//! Summary panel display
//!
//! Monthly balance with its sign badge, the emergency reserve suggestion,
//! and the grand totals.

use chrono::NaiveDate;
use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Style};

use crate::config::Settings;
use crate::services::{BalanceStatus, BudgetSummary, RESERVE_MONTHS};

use super::currency::format_currency;

/// Badge text for the balance sign
pub fn balance_badge(status: BalanceStatus) -> &'static str {
    match status {
        BalanceStatus::Positive => "POSITIVO",
        BalanceStatus::Negative => "NEGATIVO",
        BalanceStatus::Undefined => "INDEFINIDO",
    }
}

/// Format the summary panel
///
/// `date` adds an "Atualizado em" line (dd/mm/yyyy) at the top.
pub fn format_summary(summary: &BudgetSummary, settings: &Settings, date: Option<NaiveDate>) -> String {
    let mut output = String::new();

    if let Some(date) = date {
        output.push_str(&format!("Atualizado em: {}\n\n", date.format("%d/%m/%Y")));
    }

    output.push_str(&format!(
        "SALDO MENSAL: {} [{}]\n",
        format_currency(summary.balance, settings),
        balance_badge(summary.balance_status())
    ));
    output.push_str(
        "  Este é o valor que sobrará (ou faltará) livre para investimentos ou lazer se seguir o planejado.\n\n",
    );

    output.push_str(&format!(
        "RESERVA DE EMERGÊNCIA IDEAL: {}\n",
        format_currency(summary.emergency_reserve, settings)
    ));
    output.push_str(&format!(
        "  Recomendação: Guarde {}x o valor de suas despesas mensais para segurança financeira.\n\n",
        RESERVE_MONTHS
    ));

    let mut builder = Builder::default();
    for (label, amount) in [
        ("Total Incomes", summary.total_incomes),
        ("Total Essential", summary.total_essential),
        ("Total Non-Essential", summary.total_non_essential),
        ("Grand Total", summary.grand_total_expenses),
    ] {
        builder.push_record([label.to_string(), format_currency(amount, settings)]);
    }

    let mut table = builder.build();
    table
        .with(Style::modern())
        .modify(Columns::last(), Alignment::right());

    output.push_str(&table.to_string());
    output.push('\n');
    output
}
