//! Baggage-tier pricing and itinerary formatting.
//!
//! Every itinerary is priced from its ordered legs. The first leg's
//! baggage allowance anchors the tier decision; legs that diverge from
//! it downgrade the offer, and a leg that allows no checked bags at all
//! removes every bag option.

use std::fmt;

use serde::Serialize;

use crate::domain::Itinerary;

/// One baggage-inclusive price line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceTier {
    /// Tier label: `2bag`, `1bag` or `0bag`.
    pub label: &'static str,
    /// Total amount in currency minor units.
    pub amount: u64,
}

impl PriceTier {
    fn new(label: &'static str, amount: u64) -> Self {
        Self { label, amount }
    }
}

/// A priced, display-ready itinerary summary.
///
/// `Display` renders the two-line output block:
///
/// ```text
/// PRG->KEF,2,2
/// PRG-VIE,VIE-KEF,1bag:270,0bag:250
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct PricedItinerary {
    /// First leg's departure airport.
    pub origin: String,
    /// Last leg's arrival airport.
    pub destination: String,
    /// Number of legs.
    pub leg_count: usize,
    /// Consecutive "source-destination" pairs in travel order.
    pub route: Vec<String>,
    /// Selected price lines, largest bag allowance first.
    pub tiers: Vec<PriceTier>,
}

impl fmt::Display for PricedItinerary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}->{},{},{}",
            self.origin,
            self.destination,
            self.leg_count,
            self.tiers.len()
        )?;
        writeln!(f)?;
        write!(f, "{}", self.route.join(","))?;
        for tier in &self.tiers {
            write!(f, ",{}:{}", tier.label, tier.amount)?;
        }
        Ok(())
    }
}

/// Price an itinerary over its ordered legs.
///
/// The first leg's `bags_allowed` anchors the tiers:
/// - every leg matching it contributes its bag price to the bag cost;
/// - a leg with a different, nonzero allowance also contributes, but
///   the allowance is no longer uniform;
/// - a leg allowing zero bags blocks baggage entirely.
///
/// Tier selection: uniform allowance of exactly 2 gives three lines
/// (2bag, 1bag, 0bag); any blocking leg gives the bare 0bag line; all
/// remaining cases give two lines (1bag, 0bag).
pub fn price_itinerary(itinerary: &Itinerary) -> PricedItinerary {
    let legs = itinerary.legs();
    let first_bags = legs[0].bags_allowed();

    let mut price: u64 = 0;
    let mut bag_cost: u64 = 0;
    let mut uniform = true;
    let mut baggage_blocked = first_bags == 0;

    let mut route = Vec::with_capacity(legs.len());

    for leg in legs {
        price += leg.price();

        if leg.bags_allowed() == first_bags {
            bag_cost += leg.bag_price();
        } else if leg.bags_allowed() > 0 {
            bag_cost += leg.bag_price();
            uniform = false;
        } else {
            uniform = false;
            baggage_blocked = true;
        }

        route.push(format!("{}-{}", leg.source(), leg.destination()));
    }

    let tiers = if uniform && first_bags == 2 {
        vec![
            PriceTier::new("2bag", price + 2 * bag_cost),
            PriceTier::new("1bag", price + bag_cost),
            PriceTier::new("0bag", price),
        ]
    } else if baggage_blocked {
        vec![PriceTier::new("0bag", price)]
    } else {
        vec![
            PriceTier::new("1bag", price + bag_cost),
            PriceTier::new("0bag", price),
        ]
    };

    PricedItinerary {
        origin: itinerary.origin().to_string(),
        destination: itinerary.final_destination().to_string(),
        leg_count: itinerary.leg_count(),
        route,
        tiers,
    }
}
