//! Depth-first itinerary enumeration.
//!
//! Walks every chain of valid connections starting from every record.
//! An itinerary is emitted only after all of its continuations have
//! been explored, so the output order is post-order within a branch and
//! input order across starting records and siblings. Single legs are
//! never emitted.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::domain::{FlightRecord, Itinerary};

use super::config::SearchConfig;
use super::pricing::{PricedItinerary, price_itinerary};

/// Itinerary enumeration over a fixed record set.
///
/// The record set is read-only for the whole search; branches share it
/// via `Arc` and each branch owns an independent copy of its leg
/// sequence, so siblings never interfere.
pub struct ItinerarySearch<'a> {
    records: &'a [Arc<FlightRecord>],
    config: &'a SearchConfig,
}

impl<'a> ItinerarySearch<'a> {
    /// Create a search over the given records.
    pub fn new(records: &'a [Arc<FlightRecord>], config: &'a SearchConfig) -> Self {
        Self { records, config }
    }

    /// Lazily enumerate every multi-leg itinerary.
    ///
    /// The returned iterator is finite and deterministic but not
    /// restartable; call `enumerate` again for a fresh pass.
    pub fn enumerate(&self) -> ItineraryIter<'a> {
        ItineraryIter {
            records: self.records,
            max_depth: self.config.max_depth,
            next_start: 0,
            stack: Vec::new(),
            explored: 0,
            emitted: 0,
        }
    }
}

/// One suspended branch of the traversal: the legs taken so far and
/// where to resume scanning the candidate list.
struct Frame {
    legs: Vec<Arc<FlightRecord>>,
    next_candidate: usize,
}

/// Lazy depth-first iterator over priced itineraries.
///
/// Implemented with an explicit frame stack rather than recursion; the
/// stack depth equals the current itinerary length, so `max_depth`
/// bounds both.
pub struct ItineraryIter<'a> {
    records: &'a [Arc<FlightRecord>],
    max_depth: usize,
    /// Index of the next record to use as a starting leg.
    next_start: usize,
    stack: Vec<Frame>,
    explored: usize,
    emitted: usize,
}

impl ItineraryIter<'_> {
    /// Extend the top frame with its next valid candidate, if any.
    ///
    /// Scans the full record set from the frame's cursor; every record
    /// is a candidate, since `can_connect_to` rejects a record against
    /// itself by flight id. The extension gets an independent copy of
    /// the leg prefix, so sibling branches never alias.
    fn try_extend(&mut self) -> bool {
        let Some(frame) = self.stack.last_mut() else {
            return false;
        };

        if frame.legs.len() >= self.max_depth {
            frame.next_candidate = self.records.len();
            return false;
        }

        let mut found = None;
        // Frames always hold at least one leg
        if let Some(last) = frame.legs.last() {
            for idx in frame.next_candidate..self.records.len() {
                let candidate = &self.records[idx];
                if last.can_connect_to(candidate) && candidate.is_valid_extension(&frame.legs) {
                    found = Some(idx);
                    break;
                }
            }
        }

        let Some(idx) = found else {
            frame.next_candidate = self.records.len();
            return false;
        };

        frame.next_candidate = idx + 1;
        let mut legs = frame.legs.clone();
        legs.push(Arc::clone(&self.records[idx]));

        trace!(
            depth = legs.len(),
            flight = %self.records[idx].flight_id(),
            "extending itinerary"
        );
        self.stack.push(Frame {
            legs,
            next_candidate: 0,
        });
        true
    }
}

impl Iterator for ItineraryIter<'_> {
    type Item = PricedItinerary;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.stack.is_empty() {
                // Open the next starting record, or finish.
                let Some(start) = self.records.get(self.next_start) else {
                    if self.next_start == self.records.len() {
                        // Advance past the end so the totals log once
                        self.next_start += 1;
                        debug!(
                            explored = self.explored,
                            emitted = self.emitted,
                            "search exhausted"
                        );
                    }
                    return None;
                };
                self.next_start += 1;
                self.stack.push(Frame {
                    legs: vec![Arc::clone(start)],
                    next_candidate: 0,
                });
                continue;
            }

            if self.try_extend() {
                continue;
            }

            // No further extension: pop, emit if this is a real itinerary.
            let Some(frame) = self.stack.pop() else {
                continue;
            };
            self.explored += 1;

            if frame.legs.len() > 1 {
                if let Ok(itinerary) = Itinerary::new(frame.legs) {
                    self.emitted += 1;
                    return Some(price_itinerary(&itinerary));
                }
            }
        }
    }
}
