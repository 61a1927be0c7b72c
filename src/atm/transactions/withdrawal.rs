use super::{DeclineReason, TransactionOutcome, CANCELED_MESSAGE};

use crate::ids::AccountNumber;
use crate::peripherals::{CashDispenser, Keypad, Screen};
use crate::services::BankDatabase;
use crate::Money;
use crate::Result;

/// Amounts offered by the withdrawal menu, options 1 through 5
const AMOUNTS: [Money; 5] = [
    Money::from_dollars(20),
    Money::from_dollars(40),
    Money::from_dollars(60),
    Money::from_dollars(100),
    Money::from_dollars(200),
];

const CANCEL_OPTION: i64 = 6;

pub struct Withdrawal<'a> {
    account_number: AccountNumber,
    screen: &'a mut dyn Screen,
    bank_database: &'a mut dyn BankDatabase,
    keypad: &'a mut dyn Keypad,
    cash_dispenser: &'a mut dyn CashDispenser,
}

impl<'a> Withdrawal<'a> {
    pub fn new(
        account_number: AccountNumber,
        screen: &'a mut dyn Screen,
        bank_database: &'a mut dyn BankDatabase,
        keypad: &'a mut dyn Keypad,
        cash_dispenser: &'a mut dyn CashDispenser,
    ) -> Self {
        return Self {
            account_number,
            screen,
            bank_database,
            keypad,
            cash_dispenser,
        };
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// Balance is checked before the dispenser, and the account is debited only once both checks pass.
    pub fn execute(mut self) -> Result<TransactionOutcome> {
        let amount = match self.display_menu_of_amounts()? {
            Some(amount) => amount,
            None => {
                self.screen.display_message_line(CANCELED_MESSAGE)?;
                return Ok(TransactionOutcome::Canceled);
            }
        };

        let available = self.bank_database.get_available_balance(self.account_number)?;

        if amount > available {
            log::warn!(
                "Withdrawal of {amount} declined for account {}: available balance {available}",
                self.account_number
            );
            self.screen
                .display_message_line("\nInsufficient funds in your account.")?;
            return Ok(TransactionOutcome::Declined(DeclineReason::InsufficientFunds));
        }

        if !self.cash_dispenser.is_sufficient_cash_available(amount) {
            log::warn!("Withdrawal of {amount} declined: dispenser cannot pay it");
            self.screen
                .display_message_line("\nInsufficient cash available in the ATM.")?;
            return Ok(TransactionOutcome::Declined(DeclineReason::InsufficientCash));
        }

        self.bank_database.debit(self.account_number, amount)?;

        if let Err(e) = self.cash_dispenser.dispense_cash(amount) {
            log::error!("Dispensing {amount} failed after debit, reversing: {e}");
            self.bank_database.credit(self.account_number, amount)?;
            return Err(e);
        }

        self.screen
            .display_message_line("\nYour cash has been dispensed. Please take your cash now.")?;

        return Ok(TransactionOutcome::Completed);
    }

    /// Shows the amount menu until a valid option is chosen. `None` means the user canceled.
    fn display_menu_of_amounts(&mut self) -> Result<Option<Money>> {
        loop {
            self.screen.display_message_line("\nWithdrawal Menu:")?;
            for (idx, amount) in AMOUNTS.iter().enumerate() {
                self.screen
                    .display_message_line(&format!("{} - {}", idx + 1, amount))?;
            }
            self.screen
                .display_message_line(&format!("{CANCEL_OPTION} - Cancel transaction"))?;
            self.screen.display_message("\nChoose a withdrawal amount: ")?;

            match self.keypad.read_number()? {
                Some(CANCEL_OPTION) => return Ok(None),
                Some(choice @ 1..=5) => return Ok(Some(AMOUNTS[choice as usize - 1])),
                _ => self
                    .screen
                    .display_message_line("\nInvalid selection. Try again.")?,
            }
        }
    }
}
