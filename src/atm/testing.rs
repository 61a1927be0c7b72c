//! Hand-written collaborators for unit tests

use crate::ids::{AccountNumber, Pin};
use crate::models::Account;
use crate::peripherals::{CashDispenser, DepositSlot, Keypad, KeypadError, Screen};
use crate::services::InMemoryBankDatabase;
use crate::Money;
use crate::Result;

use std::collections::VecDeque;

pub const SOME_ACCOUNT: AccountNumber = AccountNumber(12345);
pub const SOME_PIN: Pin = Pin(54321);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenEvent {
    Message(String),
    Line(String),
    Amount(Money),
}

#[derive(Debug, Default)]
pub struct RecordingScreen {
    pub events: Vec<ScreenEvent>,
}

impl RecordingScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shows(&self, text: &str) -> bool {
        self.events.iter().any(|event| match event {
            ScreenEvent::Message(message) | ScreenEvent::Line(message) => message == text,
            ScreenEvent::Amount(_) => false,
        })
    }

    pub fn count(&self, text: &str) -> usize {
        self.events
            .iter()
            .filter(|event| match event {
                ScreenEvent::Message(message) | ScreenEvent::Line(message) => message == text,
                ScreenEvent::Amount(_) => false,
            })
            .count()
    }

    pub fn amounts(&self) -> Vec<Money> {
        self.events
            .iter()
            .filter_map(|event| match event {
                ScreenEvent::Amount(amount) => Some(*amount),
                _ => None,
            })
            .collect()
    }

    /// Index of the first event showing `text`, for ordering assertions
    pub fn position(&self, text: &str) -> Option<usize> {
        self.events.iter().position(|event| match event {
            ScreenEvent::Message(message) | ScreenEvent::Line(message) => message == text,
            ScreenEvent::Amount(_) => false,
        })
    }
}

impl Screen for RecordingScreen {
    fn display_message(&mut self, message: &str) -> Result {
        self.events.push(ScreenEvent::Message(message.to_string()));
        Ok(())
    }

    fn display_message_line(&mut self, message: &str) -> Result {
        self.events.push(ScreenEvent::Line(message.to_string()));
        Ok(())
    }

    fn display_dollar_amount(&mut self, amount: Money) -> Result {
        self.events.push(ScreenEvent::Amount(amount));
        Ok(())
    }
}

/// Replays tokens, then reports exhaustion
#[derive(Debug, Default)]
pub struct ScriptedKeypad {
    tokens: VecDeque<String>,
}

impl ScriptedKeypad {
    pub fn new(tokens: &[&str]) -> Self {
        Self {
            tokens: tokens.iter().map(|token| token.to_string()).collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.tokens.len()
    }
}

impl Keypad for ScriptedKeypad {
    fn get_input(&mut self) -> std::result::Result<i64, KeypadError> {
        let token = self.tokens.pop_front().ok_or(KeypadError::Exhausted)?;
        token.parse().map_err(|_| KeypadError::Malformed(token))
    }
}

#[derive(Debug)]
pub struct FakeCashDispenser {
    pub sufficient: bool,
    /// Reports enough cash but then fails to pay out
    pub jammed: bool,
    pub dispensed: Vec<Money>,
}

impl FakeCashDispenser {
    pub fn new(sufficient: bool) -> Self {
        Self {
            sufficient,
            jammed: false,
            dispensed: vec![],
        }
    }

    pub fn jammed() -> Self {
        Self {
            jammed: true,
            ..Self::new(true)
        }
    }
}

impl CashDispenser for FakeCashDispenser {
    fn is_sufficient_cash_available(&self, _amount: Money) -> bool {
        self.sufficient
    }

    fn dispense_cash(&mut self, amount: Money) -> Result {
        if self.jammed {
            return Err(anyhow::anyhow!("dispenser jammed while paying {amount}"));
        }

        self.dispensed.push(amount);
        Ok(())
    }
}

#[derive(Debug)]
pub struct FakeDepositSlot {
    pub received: bool,
    pub queries: usize,
}

impl FakeDepositSlot {
    pub fn new(received: bool) -> Self {
        Self {
            received,
            queries: 0,
        }
    }
}

impl DepositSlot for FakeDepositSlot {
    fn is_envelope_received(&mut self) -> bool {
        self.queries += 1;
        self.received
    }
}

/// Store holding only account 12345 with $1,000.00 available of $1,200.00
pub fn build_bank_database() -> InMemoryBankDatabase {
    let mut database = InMemoryBankDatabase::new();

    database
        .insert(
            Account::new(
                SOME_ACCOUNT,
                SOME_PIN,
                Money::from_dollars(1000),
                Money::from_dollars(1200),
            )
            .unwrap(),
        )
        .unwrap();

    database
}
