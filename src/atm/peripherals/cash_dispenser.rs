use crate::Money;
use crate::Result;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DispenserError {
    #[error("Cannot dispense {0}: {1} bills of {2} remaining")]
    InsufficientCash(Money, u32, Money),
}

pub trait CashDispenser {
    fn is_sufficient_cash_available(&self, amount: Money) -> bool;

    fn dispense_cash(&mut self, amount: Money) -> Result;
}

/// Dispenser stocked with a single bill denomination
#[derive(Debug)]
pub struct BillCashDispenser {
    bill: Money,
    count: u32,
}

impl BillCashDispenser {
    pub const BILL: Money = Money::from_dollars(20);
    pub const INITIAL_COUNT: u32 = 500;

    pub fn new() -> Self {
        Self::with_count(Self::INITIAL_COUNT)
    }

    pub fn with_count(count: u32) -> Self {
        return Self {
            bill: Self::BILL,
            count,
        };
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    /// Number of bills paying out exactly `amount`, if the amount is payable at all
    fn bills_required(&self, amount: Money) -> Option<u32> {
        if !amount.is_positive() || amount.cents() % self.bill.cents() != 0 {
            return None;
        }

        return u32::try_from(amount.cents() / self.bill.cents()).ok();
    }
}

impl Default for BillCashDispenser {
    fn default() -> Self {
        Self::new()
    }
}

impl CashDispenser for BillCashDispenser {
    fn is_sufficient_cash_available(&self, amount: Money) -> bool {
        match self.bills_required(amount) {
            Some(bills) => bills <= self.count,
            None => false,
        }
    }

    fn dispense_cash(&mut self, amount: Money) -> Result {
        let bills = self
            .bills_required(amount)
            .filter(|bills| *bills <= self.count)
            .ok_or(DispenserError::InsufficientCash(amount, self.count, self.bill))?;

        self.count -= bills;
        log::debug!("Dispensed {bills} bills, {} remaining", self.count);

        return Ok(());
    }
}
