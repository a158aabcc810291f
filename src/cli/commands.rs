//! Session command parsing
//!
//! Each line typed into a session is split into words (single and double
//! quotes group words) and parsed with the same clap derive machinery as
//! the process arguments.

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use crate::error::{BudgetError, BudgetResult};
use crate::models::{ItemId, ItemPatch, Section};

/// One parsed session line
#[derive(Parser, Debug)]
#[command(
    name = "budget",
    no_binary_name = true,
    disable_version_flag = true,
    disable_help_subcommand = true,
    about = "Edit incomes and expenses; totals update after every change"
)]
struct SessionLine {
    #[command(subcommand)]
    command: SessionCommand,
}

/// Commands available inside a session
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum SessionCommand {
    /// Add a blank item to a section (income, essential, non-essential)
    Add {
        /// Section to add to
        section: Section,
    },

    /// Change the description and/or value of an item
    #[command(alias = "update")]
    Set {
        /// Section the item is shown in
        section: Section,
        /// Item ID
        id: String,
        /// New description
        #[arg(short, long)]
        description: Option<String>,
        /// New value; invalid or negative input is stored as 0
        #[arg(short, long, allow_hyphen_values = true)]
        value: Option<String>,
    },

    /// Remove an item
    #[command(alias = "delete")]
    Rm {
        /// Section the item is shown in
        section: Section,
        /// Item ID
        id: String,
    },

    /// Show all sections and the summary
    Show,

    /// Show only the summary
    Summary,

    /// List commands, or the options of one command
    Help {
        /// Command to describe
        topic: Option<String>,
    },

    /// End the session
    #[command(alias = "exit")]
    Quit,
}

impl SessionCommand {
    /// Patch described by a `set` command, if this is one
    pub fn patch(&self) -> Option<(Section, ItemId, ItemPatch)> {
        match self {
            Self::Set {
                section,
                id,
                description,
                value,
            } => Some((
                *section,
                ItemId::new(id.clone()),
                ItemPatch {
                    description: description.clone(),
                    value: value.clone().map(Into::into),
                },
            )),
            _ => None,
        }
    }
}

/// Parse a session line; `Ok(None)` for a blank line or comment
pub fn parse_line(line: &str) -> BudgetResult<Option<SessionCommand>> {
    let words = split_words(line)?;
    if words.is_empty() || words[0].starts_with('#') {
        return Ok(None);
    }

    let topic = words.first().filter(|w| !w.starts_with('-')).cloned();
    match SessionLine::try_parse_from(words) {
        Ok(parsed) => Ok(Some(parsed.command)),
        // `-h`/`--help` anywhere on the line
        Err(e) if e.kind() == ErrorKind::DisplayHelp => Ok(Some(SessionCommand::Help { topic })),
        Err(e) => Err(BudgetError::command(e.render().to_string().trim_end())),
    }
}

/// Help text for all session commands, or for one when `topic` names it
pub fn help_text(topic: Option<&str>) -> String {
    let mut command = SessionLine::command();
    let topic_help = topic
        .and_then(|name| command.find_subcommand_mut(name))
        .map(|sub| sub.render_help().to_string());

    topic_help.unwrap_or_else(|| command.render_help().to_string())
}

/// Split a line into words, honouring single and double quotes
pub fn split_words(line: &str) -> BudgetResult<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut in_word = false;
    let mut quote: Option<char> = None;

    for c in line.chars() {
        match quote {
            Some(q) if c == q => quote = None,
            Some(_) => current.push(c),
            None if c == '"' || c == '\'' => {
                quote = Some(c);
                in_word = true;
            }
            None if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            None => {
                current.push(c);
                in_word = true;
            }
        }
    }

    if let Some(q) = quote {
        return Err(BudgetError::command(format!("unterminated {} quote", q)));
    }
    if in_word {
        words.push(current);
    }

    Ok(words)
}
