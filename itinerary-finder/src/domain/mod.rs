//! Domain types for the itinerary finder.
//!
//! This module contains the core domain model types that represent
//! validated flight data. All types enforce their invariants at
//! construction time, so code that receives these types can trust
//! their validity.

mod airport;
mod error;
mod flight;
mod flight_id;
mod itinerary;

pub use airport::{Airport, InvalidAirport};
pub use error::DomainError;
pub use flight::{FlightRecord, MAX_CONNECTION_HOURS, MIN_CONNECTION_HOURS};
pub use flight_id::{FlightId, InvalidFlightId};
pub use itinerary::Itinerary;
