use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use budget_calc::cli::{run_session, OutputFormat, SessionOptions};
use budget_calc::config::{ConfigPaths, Settings};
use budget_calc::log::init_logging;
use budget_calc::models::{BudgetState, UuidIds};
use budget_calc::services::BudgetSession;

#[derive(Parser)]
#[command(
    name = "budget",
    version,
    about = "Personal budgeting calculator",
    long_about = "Enter incomes and expenses one command per line; the monthly balance \
                  and a six-month emergency reserve are recalculated after every change. \
                  Nothing is saved when the session ends. Type 'help' for commands."
)]
struct Cli {
    /// Settings file (JSON or YAML)
    #[arg(short, long, env = "BUDGET_CALC_CONFIG")]
    config: Option<PathBuf>,

    /// Start with empty lists instead of the example items
    #[arg(long)]
    empty: bool,

    /// Render state as JSON lines instead of tables
    #[arg(long)]
    json: bool,

    /// Log every change to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let settings_path = match cli.config {
        Some(path) => path,
        None => ConfigPaths::new()?.settings_file(),
    };
    let settings = Settings::load_or_default(&settings_path)?;

    let state = if cli.empty || !settings.seed_on_start {
        BudgetState::empty()
    } else {
        BudgetState::seeded()
    };
    let mut session = BudgetSession::with_state(state, Box::new(UuidIds));

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let options = SessionOptions::from_settings(&settings, format);

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    run_session(&mut session, &settings, &options, stdin.lock(), &mut stdout)?;

    Ok(())
}
