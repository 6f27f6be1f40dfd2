//! CSV flight record loading.
//!
//! Converts raw 8-field CSV rows into validated domain records. A load
//! is all-or-nothing: the first malformed record fails the whole batch
//! with a typed error, and the caller decides whether to abort the run.
//! Nothing here terminates the process.

use std::io;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde::Deserialize;
use tracing::debug;

use crate::domain::{Airport, FlightId, FlightRecord};

/// Timestamp format used by the input: ISO-8601 local, no zone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Error during record loading.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// CSV-level failure: I/O, wrong field count, missing header
    #[error("failed to read records: {0}")]
    Csv(#[from] csv::Error),

    /// A field failed to parse as its expected type
    #[error("record {record}: invalid {field}: {value:?}")]
    InvalidField {
        /// 1-based record number (header excluded)
        record: usize,
        field: &'static str,
        value: String,
    },
}

/// One raw CSV row, exactly as it appears in the input.
///
/// Field order is fixed: source, destination, departure, arrival,
/// flight_number, price, bags_allowed, bag_price.
#[derive(Debug, Deserialize)]
struct RawFlightRow {
    source: String,
    destination: String,
    departure: String,
    arrival: String,
    flight_number: String,
    price: String,
    bags_allowed: String,
    bag_price: String,
}

impl RawFlightRow {
    /// Convert this row into a validated `FlightRecord`.
    fn into_record(self, record: usize) -> Result<FlightRecord, LoadError> {
        let invalid = |field: &'static str, value: &str| LoadError::InvalidField {
            record,
            field,
            value: value.to_string(),
        };

        let source =
            Airport::parse(&self.source).map_err(|_| invalid("source", &self.source))?;
        let destination = Airport::parse(&self.destination)
            .map_err(|_| invalid("destination", &self.destination))?;
        let departure = NaiveDateTime::parse_from_str(&self.departure, TIMESTAMP_FORMAT)
            .map_err(|_| invalid("departure", &self.departure))?;
        let arrival = NaiveDateTime::parse_from_str(&self.arrival, TIMESTAMP_FORMAT)
            .map_err(|_| invalid("arrival", &self.arrival))?;
        let flight_id = FlightId::new(self.flight_number.clone())
            .map_err(|_| invalid("flight_number", &self.flight_number))?;
        let price: u64 = self.price.parse().map_err(|_| invalid("price", &self.price))?;
        let bags_allowed: u32 = self
            .bags_allowed
            .parse()
            .map_err(|_| invalid("bags_allowed", &self.bags_allowed))?;
        let bag_price: u64 = self
            .bag_price
            .parse()
            .map_err(|_| invalid("bag_price", &self.bag_price))?;

        Ok(FlightRecord::new(
            source,
            destination,
            departure,
            arrival,
            flight_id,
            price,
            bags_allowed,
            bag_price,
        ))
    }
}

/// Load flight records from CSV input with a header row.
///
/// # Errors
///
/// Returns `Err` on the first row that has the wrong field count or a
/// field that fails to parse as its expected type. No partial batch is
/// returned.
pub fn load_records<R: io::Read>(reader: R) -> Result<Vec<Arc<FlightRecord>>, LoadError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, row) in csv_reader.deserialize::<RawFlightRow>().enumerate() {
        let row = row?;
        records.push(Arc::new(row.into_record(idx + 1)?));
    }

    debug!(count = records.len(), "loaded flight records");
    Ok(records)
}
