//! Domain error types.
//!
//! These errors represent validation failures in the domain layer.
//! They are distinct from loader/IO errors.

use super::Airport;

/// Domain-level errors for validation and data consistency.
#[derive(Debug, Clone, thiserror::Error)]
pub enum DomainError {
    /// Itinerary has fewer than two legs
    #[error("itinerary must have at least two legs")]
    TooFewLegs,

    /// Consecutive legs don't chain (arrival airport != next departure airport)
    #[error("legs do not chain: arrived at {0} but next leg departs from {1}")]
    BrokenChain(Airport, Airport),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DomainError::TooFewLegs;
        assert_eq!(err.to_string(), "itinerary must have at least two legs");

        let vie = Airport::parse("VIE").unwrap();
        let bud = Airport::parse("BUD").unwrap();
        let err = DomainError::BrokenChain(vie, bud);
        assert_eq!(
            err.to_string(),
            "legs do not chain: arrived at VIE but next leg departs from BUD"
        );
    }
}
