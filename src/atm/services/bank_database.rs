use crate::ids::{AccountNumber, Pin};
use crate::models::Account;
use crate::Money;
use crate::Result;

use std::collections::HashMap;

use thiserror::Error;

pub type AccountDataStore = HashMap<AccountNumber, Account>;

#[derive(Error, Debug)]
pub enum BankDatabaseError {
    #[error("Account not found: {0}")]
    AccountNotFound(AccountNumber),

    #[error("Account already exists: {0}")]
    DuplicateAccount(AccountNumber),
}

/// Account store consumed by the terminal and its transactions
pub trait BankDatabase {
    /// Unknown accounts and wrong PINs are indistinguishable to the caller
    fn authenticate_user(&self, account_number: AccountNumber, pin: Pin) -> bool;

    fn get_available_balance(&self, account_number: AccountNumber) -> Result<Money>;

    fn get_total_balance(&self, account_number: AccountNumber) -> Result<Money>;

    fn credit(&mut self, account_number: AccountNumber, amount: Money) -> Result;

    fn debit(&mut self, account_number: AccountNumber, amount: Money) -> Result;
}

#[derive(Debug, Default)]
pub struct InMemoryBankDatabase {
    repository: AccountDataStore,
}

impl InMemoryBankDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the two demo accounts
    pub fn with_default_accounts() -> Result<Self> {
        let mut database = Self::new();

        database.insert(Account::new(
            AccountNumber(12345),
            Pin(54321),
            Money::from_dollars(1000),
            Money::from_dollars(1200),
        )?)?;

        database.insert(Account::new(
            AccountNumber(98765),
            Pin(56789),
            Money::from_dollars(200),
            Money::from_dollars(200),
        )?)?;

        return Ok(database);
    }

    pub fn insert(&mut self, account: Account) -> Result {
        let number = account.number();

        if self.repository.contains_key(&number) {
            Err(BankDatabaseError::DuplicateAccount(number))?
        }

        log::debug!("Inserting account {number}");
        self.repository.insert(number, account);

        return Ok(());
    }

    pub fn len(&self) -> usize {
        self.repository.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn get(&self, account_number: AccountNumber) -> Result<&Account> {
        let account = self
            .repository
            .get(&account_number)
            .ok_or(BankDatabaseError::AccountNotFound(account_number))?;

        return Ok(account);
    }

    fn get_mut(&mut self, account_number: AccountNumber) -> Result<&mut Account> {
        let account = self
            .repository
            .get_mut(&account_number)
            .ok_or(BankDatabaseError::AccountNotFound(account_number))?;

        return Ok(account);
    }
}

impl BankDatabase for InMemoryBankDatabase {
    fn authenticate_user(&self, account_number: AccountNumber, pin: Pin) -> bool {
        match self.repository.get(&account_number) {
            Some(account) => account.validate_pin(pin),
            None => {
                log::debug!("Authentication attempted for unknown account {account_number}");
                false
            }
        }
    }

    fn get_available_balance(&self, account_number: AccountNumber) -> Result<Money> {
        return Ok(self.get(account_number)?.available_balance());
    }

    fn get_total_balance(&self, account_number: AccountNumber) -> Result<Money> {
        return Ok(self.get(account_number)?.total_balance());
    }

    fn credit(&mut self, account_number: AccountNumber, amount: Money) -> Result {
        let account = self.get_mut(account_number)?;
        account.credit(amount)?;

        log::debug!("Credited {amount} to account {account_number}: {account:?}");

        return Ok(());
    }

    fn debit(&mut self, account_number: AccountNumber, amount: Money) -> Result {
        let account = self.get_mut(account_number)?;
        account.debit(amount)?;

        log::debug!("Debited {amount} from account {account_number}: {account:?}");

        return Ok(());
    }
}
