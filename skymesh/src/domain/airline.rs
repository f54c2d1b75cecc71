//! Airline code type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an invalid airline code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airline code: {reason}")]
pub struct InvalidAirlineCode {
    reason: &'static str,
}

/// A 2-character IATA or 3-character ICAO airline designator.
///
/// Designators are uppercase ASCII letters and digits ("QF", "U2", "3K",
/// "QFA"). At least one character must be a letter.
///
/// # Examples
///
/// ```
/// use skymesh::domain::AirlineCode;
///
/// let qf = AirlineCode::parse("QF").unwrap();
/// assert_eq!(qf.as_str(), "QF");
///
/// // Digits are allowed alongside letters
/// assert!(AirlineCode::parse("3K").is_ok());
///
/// // Lowercase and wrong lengths are rejected
/// assert!(AirlineCode::parse("qf").is_err());
/// assert!(AirlineCode::parse("Q").is_err());
/// assert!(AirlineCode::parse("QFAA").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AirlineCode {
    bytes: [u8; 3],
    len: u8,
}

impl AirlineCode {
    /// Parse an airline code from a string.
    pub fn parse(s: &str) -> Result<Self, InvalidAirlineCode> {
        let bytes = s.as_bytes();

        if !(2..=3).contains(&bytes.len()) {
            return Err(InvalidAirlineCode {
                reason: "must be 2 or 3 characters",
            });
        }

        if !bytes
            .iter()
            .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit())
        {
            return Err(InvalidAirlineCode {
                reason: "must be uppercase ASCII letters or digits",
            });
        }

        if !bytes.iter().any(u8::is_ascii_uppercase) {
            return Err(InvalidAirlineCode {
                reason: "must contain at least one letter",
            });
        }

        let mut stored = [0u8; 3];
        stored[..bytes.len()].copy_from_slice(bytes);

        Ok(AirlineCode {
            bytes: stored,
            len: bytes.len() as u8,
        })
    }

    /// Returns the code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII letters and digits are ever stored
        std::str::from_utf8(&self.bytes[..usize::from(self.len)]).unwrap_or_default()
    }
}

impl fmt::Debug for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AirlineCode({})", self.as_str())
    }
}

impl fmt::Display for AirlineCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for AirlineCode {
    type Error = InvalidAirlineCode;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        AirlineCode::parse(&value)
    }
}

impl From<AirlineCode> for String {
    fn from(code: AirlineCode) -> Self {
        code.as_str().to_string()
    }
}
