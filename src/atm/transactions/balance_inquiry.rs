use super::TransactionOutcome;

use crate::ids::AccountNumber;
use crate::peripherals::Screen;
use crate::services::BankDatabase;
use crate::Result;

pub struct BalanceInquiry<'a> {
    account_number: AccountNumber,
    screen: &'a mut dyn Screen,
    bank_database: &'a dyn BankDatabase,
}

impl<'a> BalanceInquiry<'a> {
    pub fn new(
        account_number: AccountNumber,
        screen: &'a mut dyn Screen,
        bank_database: &'a dyn BankDatabase,
    ) -> Self {
        return Self {
            account_number,
            screen,
            bank_database,
        };
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    pub fn execute(self) -> Result<TransactionOutcome> {
        let available = self.bank_database.get_available_balance(self.account_number)?;
        let total = self.bank_database.get_total_balance(self.account_number)?;

        self.screen.display_message_line("\nBalance Information:")?;
        self.screen.display_message(" - Available balance: ")?;
        self.screen.display_dollar_amount(available)?;
        self.screen.display_message("\n - Total balance: ")?;
        self.screen.display_dollar_amount(total)?;
        self.screen.display_message_line("")?;

        return Ok(TransactionOutcome::Completed);
    }
}
