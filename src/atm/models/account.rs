use crate::ids::{AccountNumber, Pin};
use crate::Money;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Invalid account {0}: total balance {2} is below available balance {1}")]
    TotalBelowAvailable(AccountNumber, Money, Money),

    #[error("Invalid account {0}: negative balance {1}")]
    NegativeBalance(AccountNumber, Money),

    #[error("Amount must be positive, got {0}")]
    NonPositiveAmount(Money),

    #[error("Insufficient available balance on account {0}: requested {1}, available {2}")]
    InsufficientFunds(AccountNumber, Money, Money),
}

/// A single customer account.
///
/// `total` is the available balance plus anything held back, so `total >= available >= 0` holds for every
/// reachable account.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    number: AccountNumber,
    pin: Pin,
    available: Money,
    total: Money,
}

impl Account {
    pub fn new(number: AccountNumber, pin: Pin, available: Money, total: Money) -> Result<Self> {
        if available.is_negative() {
            Err(AccountError::NegativeBalance(number, available))?
        }

        if total < available {
            Err(AccountError::TotalBelowAvailable(number, available, total))?
        }

        return Ok(Self {
            number,
            pin,
            available,
            total,
        });
    }

    pub fn number(&self) -> AccountNumber {
        self.number
    }

    pub fn validate_pin(&self, pin: Pin) -> bool {
        self.pin == pin
    }

    pub fn available_balance(&self) -> Money {
        self.available
    }

    pub fn total_balance(&self) -> Money {
        self.total
    }

    /// Adds to both balances. Deposits are not held back from the available balance.
    pub fn credit(&mut self, amount: Money) -> Result {
        if !amount.is_positive() {
            Err(AccountError::NonPositiveAmount(amount))?
        }

        let mut available = self.available;
        let mut total = self.total;

        available.add(&amount)?;
        total.add(&amount)?;

        self.available = available;
        self.total = total;

        return Ok(());
    }

    /// Removes from both balances. Refuses to take the available balance below zero.
    pub fn debit(&mut self, amount: Money) -> Result {
        if !amount.is_positive() {
            Err(AccountError::NonPositiveAmount(amount))?
        }

        if amount > self.available {
            Err(AccountError::InsufficientFunds(self.number, amount, self.available))?
        }

        self.available.sub(&amount)?;
        self.total.sub(&amount)?;

        return Ok(());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOME_NUMBER: AccountNumber = AccountNumber(12345);
    const SOME_PIN: Pin = Pin(54321);
    const OTHER_PIN: Pin = Pin(11111);

    fn build_account(available: i64, total: i64) -> Account {
        Account::new(SOME_NUMBER, SOME_PIN, Money(available), Money(total)).unwrap()
    }

    fn assert_invariant(account: &Account) {
        assert!(account.total_balance() >= account.available_balance());
        assert!(!account.available_balance().is_negative());
    }

    #[test]
    fn new_rejects_total_below_available() {
        assert!(Account::new(SOME_NUMBER, SOME_PIN, Money(200), Money(100)).is_err());
        assert!(Account::new(SOME_NUMBER, SOME_PIN, Money(-1), Money(100)).is_err());
        assert!(Account::new(SOME_NUMBER, SOME_PIN, Money(100), Money(100)).is_ok());
    }

    #[test]
    fn validate_pin() {
        let account = build_account(100, 100);

        assert!(account.validate_pin(SOME_PIN));
        assert!(!account.validate_pin(OTHER_PIN));
    }

    #[test]
    fn credit() {
        let mut account = build_account(100000, 120000);

        account.credit(Money(5000)).unwrap();

        assert_eq!(account.available_balance(), Money(105000));
        assert_eq!(account.total_balance(), Money(125000));
    }

    #[test]
    fn credit_rejects_non_positive_amount() {
        let mut account = build_account(100, 100);

        assert!(account.credit(Money(0)).is_err());
        assert!(account.credit(Money(-5)).is_err());
        assert_eq!(account, build_account(100, 100));
    }

    #[test]
    fn credit_overflow_leaves_account_untouched() {
        let mut account = build_account(100, i64::MAX);

        assert!(account.credit(Money(1)).is_err());
        assert_eq!(account.available_balance(), Money(100));
        assert_eq!(account.total_balance(), Money::MAX);
    }

    #[test]
    fn debit() {
        let mut account = build_account(100000, 120000);

        account.debit(Money(2000)).unwrap();

        assert_eq!(account.available_balance(), Money(98000));
        assert_eq!(account.total_balance(), Money(118000));
    }

    #[test]
    fn debit_rejects_more_than_available() {
        let mut account = build_account(100000, 120000);

        assert!(account.debit(Money(100001)).is_err());
        assert_eq!(account, build_account(100000, 120000));

        account.debit(Money(100000)).unwrap();
        assert_eq!(account.available_balance(), Money(0));
        assert_eq!(account.total_balance(), Money(20000));
    }

    #[test]
    fn balances_keep_invariant_over_mixed_operations() {
        let mut account = build_account(100000, 120000);

        let operations: [(bool, i64); 8] = [
            (true, 5000),
            (false, 2000),
            (false, 200000),
            (true, 1),
            (false, 103001),
            (false, 1),
            (true, 99999),
            (false, 4000),
        ];

        for (is_credit, cents) in operations {
            let _ = if is_credit {
                account.credit(Money(cents))
            } else {
                account.debit(Money(cents))
            };

            assert_invariant(&account);
        }

        assert_eq!(
            account.total_balance().cents() - account.available_balance().cents(),
            20000
        );
    }
}
