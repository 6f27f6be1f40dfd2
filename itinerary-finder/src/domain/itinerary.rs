//! Itinerary type.
//!
//! An `Itinerary` is an ordered sequence of flight legs forming one
//! continuous journey. It uses `Arc<FlightRecord>` legs so the search
//! can copy partial sequences per branch cheaply.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use super::{Airport, DomainError, FlightRecord};

/// A complete multi-leg journey.
///
/// # Invariants
///
/// - At least two legs (a lone flight is not an itinerary)
/// - Consecutive legs chain (destination of one = source of the next)
#[derive(Debug, Clone)]
pub struct Itinerary {
    legs: Vec<Arc<FlightRecord>>,
}

impl Itinerary {
    /// Constructs an itinerary from legs.
    ///
    /// # Errors
    ///
    /// Returns `Err` if fewer than two legs are given, or if any
    /// consecutive pair does not chain.
    pub fn new(legs: Vec<Arc<FlightRecord>>) -> Result<Self, DomainError> {
        if legs.len() < 2 {
            return Err(DomainError::TooFewLegs);
        }

        for window in legs.windows(2) {
            let prev_dest = window[0].destination();
            let next_source = window[1].source();
            if prev_dest != next_source {
                return Err(DomainError::BrokenChain(prev_dest, next_source));
            }
        }

        Ok(Itinerary { legs })
    }

    /// Returns the legs in travel order.
    pub fn legs(&self) -> &[Arc<FlightRecord>] {
        &self.legs
    }

    /// Returns the number of legs.
    pub fn leg_count(&self) -> usize {
        self.legs.len()
    }

    /// Returns the departure airport of the first leg.
    pub fn origin(&self) -> Airport {
        // Safe: at least two legs by construction
        self.legs[0].source()
    }

    /// Returns the arrival airport of the last leg.
    pub fn final_destination(&self) -> Airport {
        self.legs[self.legs.len() - 1].destination()
    }

    /// Returns the departure time of the first leg.
    pub fn departure(&self) -> NaiveDateTime {
        self.legs[0].departure()
    }

    /// Returns the arrival time of the last leg.
    pub fn arrival(&self) -> NaiveDateTime {
        self.legs[self.legs.len() - 1].arrival()
    }

    /// Returns the total elapsed time from first departure to last arrival.
    pub fn total_duration(&self) -> Duration {
        self.arrival() - self.departure()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::FlightId;

    fn time(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap()
    }

    fn airport(s: &str) -> Airport {
        Airport::parse(s).unwrap()
    }

    fn leg(id: &str, source: &str, destination: &str, dep: &str, arr: &str) -> Arc<FlightRecord> {
        Arc::new(FlightRecord::new(
            airport(source),
            airport(destination),
            time(dep),
            time(arr),
            FlightId::new(id.to_string()).unwrap(),
            100,
            1,
            10,
        ))
    }

    #[test]
    fn valid_two_leg_itinerary() {
        let itinerary = Itinerary::new(vec![
            leg("F1", "PRG", "VIE", "2017-01-01T10:00:00", "2017-01-01T11:00:00"),
            leg("F2", "VIE", "KEF", "2017-01-01T13:00:00", "2017-01-01T16:00:00"),
        ])
        .unwrap();

        assert_eq!(itinerary.leg_count(), 2);
        assert_eq!(itinerary.origin(), airport("PRG"));
        assert_eq!(itinerary.final_destination(), airport("KEF"));
        assert_eq!(itinerary.departure(), time("2017-01-01T10:00:00"));
        assert_eq!(itinerary.arrival(), time("2017-01-01T16:00:00"));
        assert_eq!(itinerary.total_duration(), Duration::hours(6));
    }

    #[test]
    fn rejects_empty_and_single_leg() {
        assert!(matches!(
            Itinerary::new(vec![]),
            Err(DomainError::TooFewLegs)
        ));

        let single = vec![leg("F1", "PRG", "VIE", "2017-01-01T10:00:00", "2017-01-01T11:00:00")];
        assert!(matches!(
            Itinerary::new(single),
            Err(DomainError::TooFewLegs)
        ));
    }

    #[test]
    fn rejects_broken_chain() {
        let result = Itinerary::new(vec![
            leg("F1", "PRG", "VIE", "2017-01-01T10:00:00", "2017-01-01T11:00:00"),
            leg("F2", "BUD", "KEF", "2017-01-01T13:00:00", "2017-01-01T16:00:00"),
        ]);

        assert!(matches!(result, Err(DomainError::BrokenChain(_, _))));
    }

    #[test]
    fn three_leg_itinerary() {
        let itinerary = Itinerary::new(vec![
            leg("F1", "PRG", "VIE", "2017-01-01T10:00:00", "2017-01-01T11:00:00"),
            leg("F2", "VIE", "BUD", "2017-01-01T13:00:00", "2017-01-01T14:00:00"),
            leg("F3", "BUD", "KEF", "2017-01-01T16:00:00", "2017-01-01T20:00:00"),
        ])
        .unwrap();

        assert_eq!(itinerary.leg_count(), 3);
        assert_eq!(itinerary.origin(), airport("PRG"));
        assert_eq!(itinerary.final_destination(), airport("KEF"));
    }
}
