use std::fmt;

use serde::Deserialize;

#[derive(Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct Pin(pub u32);

impl Pin {
    pub fn from_input(value: i64) -> Option<Self> {
        return u32::try_from(value).ok().map(Self);
    }
}

// Never leak the credential into logs
impl fmt::Debug for Pin {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        return write!(f, "Pin(****)");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_is_redacted() {
        assert_eq!(format!("{:?}", Pin(54321)), "Pin(****)");
    }

    #[test]
    fn from_input() {
        assert_eq!(Pin::from_input(54321), Some(Pin(54321)));
        assert_eq!(Pin::from_input(-1), None);
        assert_eq!(Pin::from_input(i64::MAX), None);
    }
}
