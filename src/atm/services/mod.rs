mod bank_database;

pub use bank_database::{BankDatabase, BankDatabaseError, InMemoryBankDatabase};
