use crate::ids::{AccountNumber, Pin};
use crate::peripherals::{CashDispenser, DepositSlot, Keypad, KeypadError, Screen};
use crate::services::BankDatabase;
use crate::transactions::{BalanceInquiry, Deposit, Transaction, TransactionOutcome, Withdrawal};
use crate::Result;

use thiserror::Error;

const WELCOME_MESSAGE: &str = "\nWelcome!";
const ACCOUNT_PROMPT: &str = "\nPlease enter your bank account number: ";
const PIN_PROMPT: &str = "\nPlease enter your PIN: ";
const INVALID_CREDENTIALS_MESSAGE: &str = "\nInvalid account number or PIN code. Please try again.";
const INVALID_SELECTION_MESSAGE: &str = "\nYou did not enter a valid selection. Try again.";
const EXIT_MESSAGE: &str = "\nExiting the system...";
const FAREWELL_MESSAGE: &str = "\nThank you! Goodbye!";

#[derive(Error, Debug)]
pub enum TerminalError {
    #[error("No authenticated session to run a {0:?} against")]
    NotAuthenticated(TransactionKind),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionKind {
    BalanceInquiry,
    Withdrawal,
    Deposit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSelection {
    Transaction(TransactionKind),
    Exit,
}

impl MenuSelection {
    pub fn from_input(value: i64) -> Option<Self> {
        match value {
            1 => Some(MenuSelection::Transaction(TransactionKind::BalanceInquiry)),
            2 => Some(MenuSelection::Transaction(TransactionKind::Withdrawal)),
            3 => Some(MenuSelection::Transaction(TransactionKind::Deposit)),
            4 => Some(MenuSelection::Exit),
            _ => None,
        }
    }
}

/// The automated teller: owns its peripherals, the account store and the session state.
///
/// A session is the span between a successful authentication and the exit selection. The current account is only
/// ever set while a user is authenticated.
pub struct Terminal<S, K, B, C, D>
where
    S: Screen,
    K: Keypad,
    B: BankDatabase,
    C: CashDispenser,
    D: DepositSlot,
{
    screen: S,
    keypad: K,
    bank_database: B,
    cash_dispenser: C,
    deposit_slot: D,
    current_account: Option<AccountNumber>,
}

impl<S, K, B, C, D> Terminal<S, K, B, C, D>
where
    S: Screen,
    K: Keypad,
    B: BankDatabase,
    C: CashDispenser,
    D: DepositSlot,
{
    pub fn new(screen: S, keypad: K, bank_database: B, cash_dispenser: C, deposit_slot: D) -> Self {
        return Self {
            screen,
            keypad,
            bank_database,
            cash_dispenser,
            deposit_slot,
            current_account: None,
        };
    }

    pub fn is_authenticated(&self) -> bool {
        self.current_account.is_some()
    }

    pub fn current_account_number(&self) -> Option<AccountNumber> {
        self.current_account
    }

    pub fn screen(&self) -> &S {
        &self.screen
    }

    pub fn keypad(&self) -> &K {
        &self.keypad
    }

    pub fn bank_database(&self) -> &B {
        &self.bank_database
    }

    pub fn cash_dispenser(&self) -> &C {
        &self.cash_dispenser
    }

    pub fn deposit_slot(&self) -> &D {
        &self.deposit_slot
    }

    pub fn into_screen(self) -> S {
        self.screen
    }

    /// Serves sessions back to back until the keypad runs out of input
    pub fn run(&mut self) -> Result {
        loop {
            match self.run_session() {
                Ok(()) => continue,
                Err(e) if is_exhausted(&e) => {
                    log::info!("Keypad input exhausted, shutting down terminal");
                    return Ok(());
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Authenticates one user, serves their transactions, then tears the session down
    pub fn run_session(&mut self) -> Result {
        while !self.is_authenticated() {
            self.screen.display_message_line(WELCOME_MESSAGE)?;
            self.authenticate_user()?;
        }

        log::info!("Session started for account {:?}", self.current_account);

        let result = self.perform_transactions();

        let account = self.current_account.take();
        log::info!("Session ended for account {account:?}");

        result?;

        self.screen.display_message_line(FAREWELL_MESSAGE)?;

        return Ok(());
    }

    /// Single credential attempt. Returns whether the user is now authenticated.
    pub fn authenticate_user(&mut self) -> Result<bool> {
        self.screen.display_message(ACCOUNT_PROMPT)?;
        let account_number = self.keypad.read_number()?.and_then(AccountNumber::from_input);

        self.screen.display_message(PIN_PROMPT)?;
        let pin = self.keypad.read_number()?.and_then(Pin::from_input);

        let authenticated = match (account_number, pin) {
            (Some(account_number), Some(pin)) => {
                self.bank_database.authenticate_user(account_number, pin)
            }
            _ => false,
        };

        if authenticated {
            self.current_account = account_number;
            log::debug!("Authenticated account {account_number:?}");
        } else {
            log::warn!("Authentication failed for account {account_number:?}");
            self.screen.display_message(INVALID_CREDENTIALS_MESSAGE)?;
        }

        return Ok(authenticated);
    }

    /// Main menu loop, left only through the exit selection
    pub fn perform_transactions(&mut self) -> Result {
        loop {
            match self.display_main_menu()? {
                Some(MenuSelection::Exit) => {
                    self.screen.display_message_line(EXIT_MESSAGE)?;
                    return Ok(());
                }
                Some(MenuSelection::Transaction(kind)) => {
                    let transaction = self.create_transaction(kind)?;
                    let account_number = transaction.account_number();
                    let name = transaction.name();

                    let outcome = transaction.execute()?;

                    match outcome {
                        TransactionOutcome::Completed => {
                            log::info!("Completed {name} for account {account_number}")
                        }
                        _ => log::debug!("{name} for account {account_number} ended with {outcome:?}"),
                    }
                }
                None => self.screen.display_message_line(INVALID_SELECTION_MESSAGE)?,
            }
        }
    }

    fn display_main_menu(&mut self) -> Result<Option<MenuSelection>> {
        self.screen.display_message_line("\nMain Menu:")?;
        self.screen.display_message_line("1 - View my balance")?;
        self.screen.display_message_line("2 - Withdraw cash")?;
        self.screen.display_message_line("3 - Deposit funds")?;
        self.screen.display_message_line("4 - Exit\n")?;
        self.screen.display_message("Enter a choice: ")?;

        let selection = self.keypad.read_number()?.and_then(MenuSelection::from_input);

        return Ok(selection);
    }

    fn create_transaction(&mut self, kind: TransactionKind) -> Result<Transaction<'_>> {
        let account_number = self
            .current_account
            .ok_or(TerminalError::NotAuthenticated(kind))?;

        let transaction = match kind {
            TransactionKind::BalanceInquiry => Transaction::BalanceInquiry(BalanceInquiry::new(
                account_number,
                &mut self.screen,
                &self.bank_database,
            )),
            TransactionKind::Withdrawal => Transaction::Withdrawal(Withdrawal::new(
                account_number,
                &mut self.screen,
                &mut self.bank_database,
                &mut self.keypad,
                &mut self.cash_dispenser,
            )),
            TransactionKind::Deposit => Transaction::Deposit(Deposit::new(
                account_number,
                &mut self.screen,
                &mut self.bank_database,
                &mut self.keypad,
                &mut self.deposit_slot,
            )),
        };

        return Ok(transaction);
    }
}

fn is_exhausted(e: &anyhow::Error) -> bool {
    matches!(e.downcast_ref::<KeypadError>(), Some(KeypadError::Exhausted))
}
