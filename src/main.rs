mod args;
mod config;
mod reader;

use atm::services::InMemoryBankDatabase;
use atm::Result;

use std::io;

fn main() -> Result {
    config::configure_app()?;

    log::debug!("Application configured. Loading accounts...");

    let bank_database = match args::parse_accounts_arg()? {
        Some(path) => {
            log::debug!("Found accounts filepath as input arg: {path:?}");
            reader::load_bank_database(path)?
        }
        None => InMemoryBankDatabase::with_default_accounts()?,
    };

    log::debug!("Loaded {} accounts. Starting terminal...", bank_database.len());

    let stdin = io::stdin();
    let mut terminal = atm::build_console_terminal(stdin.lock(), io::stdout(), bank_database);

    terminal.run()?;

    log::debug!("Terminal shut down");

    Ok(())
}
