mod account_number;
mod pin;

pub use account_number::AccountNumber;
pub use pin::Pin;
