//! Flight itinerary combination finder.
//!
//! Takes a flat list of flight records and enumerates every valid
//! multi-leg itinerary reachable through repeated connections, pricing
//! each one with its baggage tiers.

pub mod domain;
pub mod loader;
pub mod search;
