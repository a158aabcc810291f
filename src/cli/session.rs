//! Interactive session loop
//!
//! Reads commands line by line, forwards edits to the [`BudgetSession`] and
//! re-renders after every change. Input ending is the same as `quit`.

use std::io::{BufRead, Write};

use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::Settings;
use crate::display::{format_budget, format_summary};
use crate::error::BudgetResult;
use crate::models::{BudgetState, ItemId};
use crate::services::{BudgetSession, BudgetSummary};

use super::commands::{help_text, parse_line, SessionCommand};

/// How the session renders state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Tables and the summary panel
    #[default]
    Text,
    /// One JSON document per render
    Json,
}

/// Rendering options for a session
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    pub format: OutputFormat,
    /// Date printed above the summary; `None` hides it
    pub date: Option<NaiveDate>,
}

impl SessionOptions {
    /// Options derived from settings, dated today when enabled
    pub fn from_settings(settings: &Settings, format: OutputFormat) -> Self {
        Self {
            format,
            date: settings.show_date.then(|| Local::now().date_naive()),
        }
    }
}

#[derive(Serialize)]
struct JsonView<'a> {
    state: &'a BudgetState,
    summary: &'a BudgetSummary,
}

/// Run a session until `quit` or end of input
pub fn run_session<R: BufRead, W: Write>(
    session: &mut BudgetSession,
    settings: &Settings,
    options: &SessionOptions,
    input: R,
    output: &mut W,
) -> BudgetResult<()> {
    render_budget(session, settings, options, output)?;

    for line in input.lines() {
        let line = line?;
        let command = match parse_line(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) => {
                warn!(%line, "rejected session command");
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        debug!(?command, "session command");
        match command {
            SessionCommand::Add { section } => {
                let id = session.add(section);
                writeln!(output, "Added {} item {}", section, id)?;
                render_summary(session, settings, options, output)?;
            }
            SessionCommand::Set { .. } => {
                if let Some((section, id, patch)) = command.patch() {
                    if patch.is_empty() {
                        writeln!(output, "Nothing to change: pass --description and/or --value")?;
                    } else if session.update(section, &id, &patch) {
                        render_summary(session, settings, options, output)?;
                    } else {
                        write_missing(output, &id)?;
                    }
                }
            }
            SessionCommand::Rm { section, id } => {
                let id = ItemId::new(id);
                if session.delete(section, &id) {
                    writeln!(output, "Removed {} item {}", section, id)?;
                    render_summary(session, settings, options, output)?;
                } else {
                    write_missing(output, &id)?;
                }
            }
            SessionCommand::Show => render_budget(session, settings, options, output)?,
            SessionCommand::Summary => render_summary(session, settings, options, output)?,
            SessionCommand::Help { topic } => write!(output, "{}", help_text(topic.as_deref()))?,
            SessionCommand::Quit => break,
        }
    }

    output.flush()?;
    Ok(())
}

fn write_missing<W: Write>(output: &mut W, id: &ItemId) -> BudgetResult<()> {
    writeln!(output, "No item {} in that list; nothing changed", id)?;
    Ok(())
}

fn render_budget<W: Write>(
    session: &BudgetSession,
    settings: &Settings,
    options: &SessionOptions,
    output: &mut W,
) -> BudgetResult<()> {
    match options.format {
        OutputFormat::Text => {
            write!(output, "{}", format_budget(session, settings, options.date))?;
        }
        OutputFormat::Json => write_json(session, &session.summary(), output)?,
    }
    Ok(())
}

fn render_summary<W: Write>(
    session: &BudgetSession,
    settings: &Settings,
    options: &SessionOptions,
    output: &mut W,
) -> BudgetResult<()> {
    let summary = session.summary();
    match options.format {
        OutputFormat::Text => {
            write!(output, "{}", format_summary(&summary, settings, options.date))?;
        }
        OutputFormat::Json => write_json(session, &summary, output)?,
    }
    Ok(())
}

fn write_json<W: Write>(
    session: &BudgetSession,
    summary: &BudgetSummary,
    output: &mut W,
) -> BudgetResult<()> {
    let view = JsonView {
        state: session.state(),
        summary,
    };
    serde_json::to_writer(&mut *output, &view)?;
    writeln!(output)?;
    Ok(())
}
