//! The sampling interval of a time-series query, expressed as an ISO-8601 duration token.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// How far apart consecutive data points of a query are.
///
/// # Examples
///
/// ```
/// use meteomatics::Frequency;
///
/// assert_eq!(Frequency::default().to_string(), "PT1H");
/// assert_eq!(Frequency::Minutes(15).to_string(), "PT15M");
/// assert_eq!("P1D".parse::<Frequency>().unwrap(), Frequency::Days(1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Frequency {
    Minutes(u32),
    Hours(u32),
    Days(u32),
}

impl Default for Frequency {
    fn default() -> Self {
        Frequency::Hours(1)
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Frequency::Minutes(n) => write!(f, "PT{}M", n),
            Frequency::Hours(n) => write!(f, "PT{}H", n),
            Frequency::Days(n) => write!(f, "P{}D", n),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid sampling frequency '{0}', expected a token like PT15M, PT1H or P1D")]
pub struct ParseFrequencyError(String);

impl FromStr for Frequency {
    type Err = ParseFrequencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseFrequencyError(s.to_string());
        let (amount, variant): (&str, fn(u32) -> Frequency) =
            if let Some(rest) = s.strip_prefix("PT") {
                if let Some(n) = rest.strip_suffix('M') {
                    (n, Frequency::Minutes)
                } else if let Some(n) = rest.strip_suffix('H') {
                    (n, Frequency::Hours)
                } else {
                    return Err(invalid());
                }
            } else if let Some(n) = s.strip_prefix('P').and_then(|r| r.strip_suffix('D')) {
                (n, Frequency::Days)
            } else {
                return Err(invalid());
            };

        if amount.is_empty() || !amount.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        match amount.parse::<u32>() {
            Ok(n) if n > 0 => Ok(variant(n)),
            _ => Err(invalid()),
        }
    }
}

impl TryFrom<String> for Frequency {
    type Error = ParseFrequencyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Frequency> for String {
    fn from(frequency: Frequency) -> Self {
        frequency.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_hourly() {
        assert_eq!(Frequency::default(), Frequency::Hours(1));
        assert_eq!(Frequency::default().to_string(), "PT1H");
    }

    #[test]
    fn test_parse_tokens() {
        assert_eq!("PT30M".parse(), Ok(Frequency::Minutes(30)));
        assert_eq!("PT3H".parse(), Ok(Frequency::Hours(3)));
        assert_eq!("P2D".parse(), Ok(Frequency::Days(2)));
    }

    #[test]
    fn test_parse_rejects_malformed() {
        for token in [
            "", "PT", "PTH", "PT0H", "1H", "PT1D", "P1H", "PT-1H", "PT+1H", "P+2D", "PT 1H",
            "pt1h",
        ] {
            assert!(token.parse::<Frequency>().is_err(), "accepted '{}'", token);
        }
    }

    #[test]
    fn test_serde_as_token() {
        let json = serde_json::to_string(&Frequency::Minutes(10)).unwrap();
        assert_eq!(json, "\"PT10M\"");
        let parsed: Frequency = serde_json::from_str("\"PT6H\"").unwrap();
        assert_eq!(parsed, Frequency::Hours(6));
        assert!(serde_json::from_str::<Frequency>("\"hourly\"").is_err());
    }
}
