mod balance_inquiry;
mod deposit;
mod withdrawal;

pub use balance_inquiry::BalanceInquiry;
pub use deposit::Deposit;
pub use withdrawal::Withdrawal;

use crate::ids::AccountNumber;
use crate::Result;

pub(crate) const CANCELED_MESSAGE: &str = "\nCanceling transaction...";

/// Why a transaction was refused without touching any balance
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclineReason {
    InsufficientFunds,
    InsufficientCash,
    EnvelopeNotReceived,
    BalanceLimit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionOutcome {
    Completed,
    Canceled,
    Declined(DeclineReason),
}

/// One menu selection, bound to the session's account and the collaborators it needs.
/// Built fresh per selection and consumed by `execute`.
pub enum Transaction<'a> {
    BalanceInquiry(BalanceInquiry<'a>),
    Withdrawal(Withdrawal<'a>),
    Deposit(Deposit<'a>),
}

impl Transaction<'_> {
    pub fn account_number(&self) -> AccountNumber {
        match self {
            Transaction::BalanceInquiry(inquiry) => inquiry.account_number(),
            Transaction::Withdrawal(withdrawal) => withdrawal.account_number(),
            Transaction::Deposit(deposit) => deposit.account_number(),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Transaction::BalanceInquiry(_) => "balance inquiry",
            Transaction::Withdrawal(_) => "withdrawal",
            Transaction::Deposit(_) => "deposit",
        }
    }

    pub fn execute(self) -> Result<TransactionOutcome> {
        match self {
            Transaction::BalanceInquiry(inquiry) => inquiry.execute(),
            Transaction::Withdrawal(withdrawal) => withdrawal.execute(),
            Transaction::Deposit(deposit) => deposit.execute(),
        }
    }
}
