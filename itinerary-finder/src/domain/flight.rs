//! Flight record type.
//!
//! A `FlightRecord` represents one flight leg loaded from the input. It
//! is immutable after construction and shared via `Arc` for cheap
//! cloning during search. The connection and direction predicates that
//! drive itinerary building live here.

use std::sync::Arc;

use chrono::{Duration, NaiveDateTime};

use super::{Airport, FlightId};

/// Minimum layover before a connecting departure, in hours.
pub const MIN_CONNECTION_HOURS: i64 = 1;

/// Maximum layover before a connecting departure, in hours.
pub const MAX_CONNECTION_HOURS: i64 = 4;

/// A single flight leg.
///
/// Arrival is not required to be after departure at this level; the
/// connection logic assumes chronologically consistent input.
///
/// # Examples
///
/// ```
/// use itinerary_finder::domain::{Airport, FlightId, FlightRecord};
/// use chrono::NaiveDateTime;
///
/// let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S").unwrap();
///
/// let a = FlightRecord::new(
///     Airport::parse("PRG").unwrap(),
///     Airport::parse("VIE").unwrap(),
///     parse("2017-01-01T10:00:00"),
///     parse("2017-01-01T11:00:00"),
///     FlightId::new("PV404".into()).unwrap(),
///     100,
///     1,
///     10,
/// );
/// let b = FlightRecord::new(
///     Airport::parse("VIE").unwrap(),
///     Airport::parse("KEF").unwrap(),
///     parse("2017-01-01T13:00:00"),
///     parse("2017-01-01T16:00:00"),
///     FlightId::new("VK101".into()).unwrap(),
///     150,
///     1,
///     10,
/// );
///
/// // Two-hour layover fits the [1h, 4h] window
/// assert!(a.can_connect_to(&b));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightRecord {
    source: Airport,
    destination: Airport,
    departure: NaiveDateTime,
    arrival: NaiveDateTime,
    flight_id: FlightId,
    /// Ticket price in currency minor units.
    price: u64,
    /// Checked bags included, 0 = no checked bags.
    bags_allowed: u32,
    /// Cost per checked bag in currency minor units.
    bag_price: u64,
}

impl FlightRecord {
    /// Construct a flight record from already-validated parts.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        source: Airport,
        destination: Airport,
        departure: NaiveDateTime,
        arrival: NaiveDateTime,
        flight_id: FlightId,
        price: u64,
        bags_allowed: u32,
        bag_price: u64,
    ) -> Self {
        Self {
            source,
            destination,
            departure,
            arrival,
            flight_id,
            price,
            bags_allowed,
            bag_price,
        }
    }

    /// Returns the departure airport.
    pub fn source(&self) -> Airport {
        self.source
    }

    /// Returns the arrival airport.
    pub fn destination(&self) -> Airport {
        self.destination
    }

    /// Returns the departure time.
    pub fn departure(&self) -> NaiveDateTime {
        self.departure
    }

    /// Returns the arrival time.
    pub fn arrival(&self) -> NaiveDateTime {
        self.arrival
    }

    /// Returns the flight identifier.
    pub fn flight_id(&self) -> &FlightId {
        &self.flight_id
    }

    /// Returns the ticket price in minor units.
    pub fn price(&self) -> u64 {
        self.price
    }

    /// Returns the number of checked bags included.
    pub fn bags_allowed(&self) -> u32 {
        self.bags_allowed
    }

    /// Returns the price per checked bag in minor units.
    pub fn bag_price(&self) -> u64 {
        self.bag_price
    }

    /// Returns the leg duration (arrival minus departure).
    pub fn duration(&self) -> Duration {
        self.arrival - self.departure
    }

    /// Can `other` be taken directly after this leg?
    ///
    /// True iff all of:
    /// - the flight ids differ (a leg never connects to itself),
    /// - this leg lands where `other` takes off,
    /// - `other` departs within `[arrival + 1h, arrival + 4h]`,
    ///   inclusive on both bounds.
    pub fn can_connect_to(&self, other: &FlightRecord) -> bool {
        if self.flight_id == other.flight_id {
            return false;
        }

        if self.destination != other.source {
            return false;
        }

        let min_departure = self.arrival + Duration::hours(MIN_CONNECTION_HOURS);
        let max_departure = self.arrival + Duration::hours(MAX_CONNECTION_HOURS);
        min_departure <= other.departure && other.departure <= max_departure
    }

    /// Can this leg extend an itinerary that already took `prior_legs`?
    ///
    /// `prior_legs` must be non-empty. True iff this leg departs from
    /// the last prior leg's destination and its (source, destination)
    /// pair was not already flown within `prior_legs`. Repeating a
    /// directed city pair is what lets an itinerary loop forever, so it
    /// is forbidden regardless of flight id.
    pub fn is_valid_extension(&self, prior_legs: &[Arc<FlightRecord>]) -> bool {
        match prior_legs.last() {
            Some(last) if self.source == last.destination => {}
            _ => return false,
        }

        !prior_legs
            .iter()
            .any(|leg| leg.source == self.source && leg.destination == self.destination)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn base_arrival() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2017, 1, 1)
            .unwrap()
            .and_hms_opt(11, 0, 0)
            .unwrap()
    }

    fn airport_from_idx(i: usize) -> Airport {
        let c1 = b'A' + ((i / 676) % 26) as u8;
        let c2 = b'A' + ((i / 26) % 26) as u8;
        let c3 = b'A' + (i % 26) as u8;
        let s = format!("{}{}{}", c1 as char, c2 as char, c3 as char);
        Airport::parse(&s).unwrap()
    }

    fn make_flight(
        id: &str,
        source: usize,
        destination: usize,
        departure: NaiveDateTime,
    ) -> FlightRecord {
        FlightRecord::new(
            airport_from_idx(source),
            airport_from_idx(destination),
            departure,
            departure + Duration::hours(2),
            FlightId::new(id.to_string()).unwrap(),
            100,
            1,
            10,
        )
    }

    proptest! {
        /// Property: equal flight ids block the connection no matter
        /// what the cities and times look like.
        #[test]
        fn equal_ids_never_connect(
            src_a in 0usize..50,
            dst_a in 0usize..50,
            src_b in 0usize..50,
            dst_b in 0usize..50,
            gap_secs in 0i64..30_000,
        ) {
            let arrival = base_arrival();
            // make_flight lands two hours after departure, so a arrives
            // exactly at `arrival`
            let a = make_flight("SAME", src_a, dst_a, arrival - Duration::hours(2));
            let b = make_flight("SAME", src_b, dst_b, arrival + Duration::seconds(gap_secs));

            prop_assert!(!a.can_connect_to(&b));
        }

        /// Property: for a matching city pair and distinct ids, window
        /// membership alone decides the connection.
        #[test]
        fn window_membership_decides(gap_secs in -10_000i64..30_000) {
            let arrival = base_arrival();
            let a = make_flight("F1", 0, 1, arrival - Duration::hours(2));
            let b = make_flight("F2", 1, 2, arrival + Duration::seconds(gap_secs));

            let in_window = gap_secs >= 3600 && gap_secs <= 4 * 3600;
            prop_assert_eq!(a.can_connect_to(&b), in_window);
        }

        /// Property: once a cycle returns to its start airport,
        /// re-flying the opening directed edge is always rejected while
        /// a fresh edge from the same airport is accepted.
        #[test]
        fn repeated_edge_always_rejected(chain_len in 2usize..7) {
            let arrival = base_arrival();

            // Cycle 0 -> 1 -> ... -> chain_len-1 -> 0
            let prior: Vec<Arc<FlightRecord>> = (0..chain_len)
                .map(|i| {
                    Arc::new(make_flight(
                        &format!("F{i}"),
                        i,
                        (i + 1) % chain_len,
                        arrival + Duration::hours(3 * i as i64),
                    ))
                })
                .collect();

            // The chain check passes (last leg landed back at 0), so
            // only the edge rule can reject this
            let repeat = make_flight("FX", 0, 1, arrival);
            prop_assert!(!repeat.is_valid_extension(&prior));

            let fresh = make_flight("FY", 0, chain_len + 5, arrival);
            prop_assert!(fresh.is_valid_extension(&prior));
        }
    }
}
