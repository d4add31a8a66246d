use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use log::debug;

use expense_ledger::cli::{run_operations, Cli, Console};
use expense_ledger::config::{LedgerPaths, Settings};
use expense_ledger::display::DisplayOptions;
use expense_ledger::services::Ledger;
use expense_ledger::storage::ExpenseStore;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = LedgerPaths::new()?;
    let settings = Settings::load(&paths)?;
    let options = DisplayOptions::from_settings(&settings);

    let ledger_file = cli
        .file
        .clone()
        .unwrap_or_else(|| settings.ledger_file(&paths));
    debug!("using ledger file {}", ledger_file.display());

    let store = ExpenseStore::new(ledger_file);
    let loaded = store.load();
    if let Some(warning) = &loaded.warning {
        eprintln!("Warning: {}. Starting with an empty ledger.", warning.error);
        if let Some(preserved) = &warning.preserved_at {
            eprintln!("The unreadable file was copied to {}", preserved.display());
        }
    }

    let mut ledger = Ledger::from_expenses(loaded.expenses);

    let operations = cli.operations();
    if operations.is_empty() {
        println!("expense - personal expense ledger");
        println!();
        println!("Run 'expense --help' for usage information.");
        return Ok(());
    }

    let stdout = io::stdout();
    let stderr = io::stderr();
    let mut out = stdout.lock();
    let mut err = stderr.lock();
    let mut console = Console {
        out: &mut out,
        err: &mut err,
        options: &options,
    };

    let failures = run_operations(&operations, &mut ledger, &mut console)?;
    out.flush()?;
    debug!("{} of {} operations failed", failures, operations.len());

    if ledger.is_dirty() {
        store
            .save(ledger.expenses())
            .with_context(|| format!("Failed to save expenses to {}", store.path().display()))?;
    }

    Ok(())
}
