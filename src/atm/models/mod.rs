mod account;

pub use account::{Account, AccountError};
