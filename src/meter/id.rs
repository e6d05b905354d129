use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::meter::InvalidMeterReadings;

#[derive(
    Clone,
    Debug,
    Default,
    Eq,
    Hash,
    Ord,
    PartialEq,
    PartialOrd,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(try_from = "String")]
pub struct SmartMeterId(String);

impl SmartMeterId {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for SmartMeterId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for SmartMeterId {
    type Err = InvalidMeterReadings;

    /// Surrounding whitespace is not part of the identifier.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s.trim();
        if id.is_empty() {
            Err(InvalidMeterReadings::MissingSmartMeterId)
        } else {
            Ok(Self(id.to_owned()))
        }
    }
}

impl TryFrom<String> for SmartMeterId {
    type Error = InvalidMeterReadings;

    fn try_from(id: String) -> Result<Self, Self::Error> {
        id.parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims() {
        let id: SmartMeterId = "  smart-meter-0 ".parse().unwrap();
        assert_eq!(id.as_ref(), "smart-meter-0");
    }

    #[test]
    fn test_parse_blank() {
        assert_eq!("   ".parse::<SmartMeterId>(), Err(InvalidMeterReadings::MissingSmartMeterId));
    }
}
