//! Itinerary enumeration over loaded flight records.
//!
//! This module implements the core combination search: every record is
//! a potential starting leg, and the search walks every chain of valid
//! connections depth-first, emitting each multi-leg itinerary with its
//! baggage price tiers.

mod config;
mod pricing;
mod search;

pub use config::SearchConfig;
pub use pricing::{PriceTier, PricedItinerary, price_itinerary};
pub use search::{ItineraryIter, ItinerarySearch};
