use crate::ids::{AccountNumber, Pin};
use crate::models::Account;
use crate::Money;
use crate::Result;

use serde::Deserialize;

/// Represents one row of an account seed file: `account,pin,available,total`
#[derive(Deserialize, Debug, Clone)]
pub struct AccountRecord {
    pub account: AccountNumber,
    pub pin: Pin,
    pub available: String,
    pub total: String,
}

impl AccountRecord {
    pub fn parse_account(self) -> Result<Account> {
        let available = Money::parse(&self.available)?;
        let total = Money::parse(&self.total)?;

        return Account::new(self.account, self.pin, available, total);
    }
}
