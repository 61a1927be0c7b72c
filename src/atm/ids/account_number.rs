use std::fmt;

use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(transparent)]
pub struct AccountNumber(pub u32);

impl AccountNumber {
    /// Keypad values outside the `u32` range can never name an account
    pub fn from_input(value: i64) -> Option<Self> {
        return u32::try_from(value).ok().map(Self);
    }
}

impl fmt::Display for AccountNumber {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "{}", self.0);
    }
}
