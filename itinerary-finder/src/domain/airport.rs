//! Airport code type.

use std::fmt;

/// Error returned when parsing an invalid airport code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid airport code: {reason}")]
pub struct InvalidAirport {
    reason: &'static str,
}

/// A valid 3-letter IATA airport code.
///
/// Airport codes are always 3 uppercase ASCII letters. This type
/// guarantees that any `Airport` value is valid by construction.
///
/// # Examples
///
/// ```
/// use itinerary_finder::domain::Airport;
///
/// let prg = Airport::parse("PRG").unwrap();
/// assert_eq!(prg.as_str(), "PRG");
///
/// // Lowercase is rejected
/// assert!(Airport::parse("prg").is_err());
///
/// // Wrong length is rejected
/// assert!(Airport::parse("PR").is_err());
/// assert!(Airport::parse("PRGX").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Airport([u8; 3]);

impl Airport {
    /// Parse an airport code from a string.
    ///
    /// The input must be exactly 3 uppercase ASCII letters (A-Z).
    pub fn parse(s: &str) -> Result<Self, InvalidAirport> {
        let bytes = s.as_bytes();

        if bytes.len() != 3 {
            return Err(InvalidAirport {
                reason: "must be exactly 3 characters",
            });
        }

        for &b in bytes {
            if !b.is_ascii_uppercase() {
                return Err(InvalidAirport {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        Ok(Airport([bytes[0], bytes[1], bytes[2]]))
    }

    /// Returns the airport code as a string slice.
    pub fn as_str(&self) -> &str {
        // SAFETY: We only store valid ASCII uppercase letters
        std::str::from_utf8(&self.0).unwrap()
    }
}

impl fmt::Debug for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Airport({})", self.as_str())
    }
}

impl fmt::Display for Airport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_code() {
        assert!(Airport::parse("PRG").is_ok());
        assert!(Airport::parse("VIE").is_ok());
        assert!(Airport::parse("KEF").is_ok());
        assert!(Airport::parse("AAA").is_ok());
        assert!(Airport::parse("ZZZ").is_ok());
    }

    #[test]
    fn reject_lowercase() {
        assert!(Airport::parse("prg").is_err());
        assert!(Airport::parse("Prg").is_err());
        assert!(Airport::parse("PRg").is_err());
    }

    #[test]
    fn reject_wrong_length() {
        assert!(Airport::parse("").is_err());
        assert!(Airport::parse("P").is_err());
        assert!(Airport::parse("PR").is_err());
        assert!(Airport::parse("PRGX").is_err());
        assert!(Airport::parse("PRAGUE").is_err());
    }

    #[test]
    fn reject_non_letters() {
        assert!(Airport::parse("P1G").is_err());
        assert!(Airport::parse("P-G").is_err());
        assert!(Airport::parse("P G").is_err());
        assert!(Airport::parse("PŘG").is_err());
    }

    #[test]
    fn as_str_roundtrip() {
        let code = Airport::parse("PRG").unwrap();
        assert_eq!(code.as_str(), "PRG");
    }

    #[test]
    fn display_and_debug() {
        let code = Airport::parse("KEF").unwrap();
        assert_eq!(code.to_string(), "KEF");
        assert_eq!(format!("{code:?}"), "Airport(KEF)");
    }

    #[test]
    fn equality_and_copy() {
        let a = Airport::parse("VIE").unwrap();
        let b = a; // Copy
        assert_eq!(a, b);
        assert_ne!(a, Airport::parse("PRG").unwrap());
    }
}
