use super::{DeclineReason, TransactionOutcome, CANCELED_MESSAGE};

use crate::ids::AccountNumber;
use crate::peripherals::{DepositSlot, Keypad, Screen};
use crate::services::BankDatabase;
use crate::Money;
use crate::Result;

/// Largest single envelope the terminal accepts
const MAX_DEPOSIT: Money = Money::from_dollars(10_000);

const RECEIVED_MESSAGE: &str = "\nYour envelope has been received.\nNOTE: The money just deposited will not be available until we verify the amount of any enclosed cash and your checks clear.";

pub struct Deposit<'a> {
    account_number: AccountNumber,
    screen: &'a mut dyn Screen,
    bank_database: &'a mut dyn BankDatabase,
    keypad: &'a mut dyn Keypad,
    deposit_slot: &'a mut dyn DepositSlot,
}

impl<'a> Deposit<'a> {
    pub fn new(
        account_number: AccountNumber,
        screen: &'a mut dyn Screen,
        bank_database: &'a mut dyn BankDatabase,
        keypad: &'a mut dyn Keypad,
        deposit_slot: &'a mut dyn DepositSlot,
    ) -> Self {
        return Self {
            account_number,
            screen,
            bank_database,
            keypad,
            deposit_slot,
        };
    }

    pub fn account_number(&self) -> AccountNumber {
        self.account_number
    }

    /// The slot is asked once. Without an envelope nothing is credited.
    pub fn execute(mut self) -> Result<TransactionOutcome> {
        let amount = match self.prompt_for_deposit_amount()? {
            Some(amount) => amount,
            None => {
                self.screen.display_message_line(CANCELED_MESSAGE)?;
                return Ok(TransactionOutcome::Canceled);
            }
        };

        let total = self.bank_database.get_total_balance(self.account_number)?;
        if total.cents().checked_add(amount.cents()).is_none() {
            log::warn!(
                "Deposit of {amount} to account {} declined: balance limit reached",
                self.account_number
            );
            self.screen.display_message_line(
                "\nThis deposit would exceed the balance limit for your account.",
            )?;
            return Ok(TransactionOutcome::Declined(DeclineReason::BalanceLimit));
        }

        self.screen
            .display_message("\nPlease insert a deposit envelope containing ")?;
        self.screen.display_dollar_amount(amount)?;
        self.screen.display_message_line(".")?;

        if !self.deposit_slot.is_envelope_received() {
            log::warn!(
                "Deposit of {amount} to account {} canceled: no envelope received",
                self.account_number
            );
            self.screen.display_message_line(
                "\nYou did not insert an envelope, so the ATM has canceled your transaction.",
            )?;
            return Ok(TransactionOutcome::Declined(DeclineReason::EnvelopeNotReceived));
        }

        // Both balances move together, the hold notice is informational only
        self.bank_database.credit(self.account_number, amount)?;

        self.screen.display_message_line(RECEIVED_MESSAGE)?;

        return Ok(TransactionOutcome::Completed);
    }

    /// Asks for an amount in cents until a usable one is entered. `None` means the user canceled with 0.
    fn prompt_for_deposit_amount(&mut self) -> Result<Option<Money>> {
        loop {
            self.screen
                .display_message("\nPlease enter a deposit amount in CENTS (or 0 to cancel): ")?;

            match self.keypad.read_number()? {
                Some(0) => return Ok(None),
                Some(cents) if cents > MAX_DEPOSIT.cents() => {
                    self.screen.display_message("\nDeposits are limited to ")?;
                    self.screen.display_dollar_amount(MAX_DEPOSIT)?;
                    self.screen.display_message_line(". Try again.")?;
                }
                Some(cents) if cents > 0 => return Ok(Some(Money::from_cents(cents))),
                _ => self
                    .screen
                    .display_message_line("\nInvalid amount. Try again.")?,
            }
        }
    }
}
