//! Flight identifier type.

use std::fmt;

/// Error returned when parsing an invalid flight identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid flight id: {reason}")]
pub struct InvalidFlightId {
    reason: &'static str,
}

/// An identifier for one physical flight leg instance.
///
/// Flight ids are opaque strings assigned by the data source. The only
/// validation is that they must be non-empty. The loader is expected to
/// supply an id that is unique per physical leg; the core never relies
/// on global uniqueness, only on inequality between two records.
///
/// # Examples
///
/// ```
/// use itinerary_finder::domain::FlightId;
///
/// let id = FlightId::new("PV404".to_string()).unwrap();
/// assert_eq!(id.as_str(), "PV404");
///
/// // Empty strings are rejected
/// assert!(FlightId::new("".to_string()).is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct FlightId(String);

impl FlightId {
    /// Create a new flight id from a string.
    ///
    /// Returns an error if the string is empty.
    pub fn new(s: String) -> Result<Self, InvalidFlightId> {
        if s.is_empty() {
            return Err(InvalidFlightId {
                reason: "flight id cannot be empty",
            });
        }
        Ok(FlightId(s))
    }

    /// Returns the flight id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the FlightId and returns the inner String.
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FlightId({})", self.0)
    }
}

impl fmt::Display for FlightId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
