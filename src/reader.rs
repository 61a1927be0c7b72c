use atm::input::AccountRecord;
use atm::services::InMemoryBankDatabase;
use atm::Result;

use std::{
    fs::File,
    path::PathBuf,
};

use csv::{Reader, ReaderBuilder, Trim};

pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_path(filepath)?;

    return Ok(reader);
}

/// Seeds a store from the accounts file, skipping rows that don't make a valid account
pub fn load_bank_database(filepath: PathBuf) -> Result<InMemoryBankDatabase> {
    let mut rdr = build_csv_reader(filepath)?;
    let mut database = InMemoryBankDatabase::new();

    log::debug!("Deserializing accounts reader...");
    for record in rdr.deserialize::<AccountRecord>() {
        let record = match record {
            Ok(record) => record,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        log::debug!("Parsing record into Account: {record:?}");
        let account = match record.parse_account() {
            Ok(account) => account,
            Err(e) => {
                log::warn!("{e}");
                continue;
            }
        };

        if let Err(e) = database.insert(account) {
            log::warn!("{e}");
        }
    }

    return Ok(database);
}
