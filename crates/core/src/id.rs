//! User identifier.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

/// Numeric identifier of a user, as carried in `/users/:id` paths.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u32);

impl UserId {
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u32 {
        self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl From<u32> for UserId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<UserId> for u32 {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl FromStr for UserId {
    type Err = core::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_segment() {
        let id: UserId = "10".parse().unwrap();
        assert_eq!(id.get(), 10);
        assert_eq!(id.to_string(), "10");
    }

    #[test]
    fn rejects_non_numeric_segment() {
        assert!("ten".parse::<UserId>().is_err());
        assert!("-1".parse::<UserId>().is_err());
        assert!("".parse::<UserId>().is_err());
    }
}
