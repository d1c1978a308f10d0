//! CSV schedule loader.
//!
//! # CSV format
//!
//! One row per directed leg.  Place coordinates are integer metres on the
//! schedule plane; the fare is a decimal number.
//!
//! ```csv
//! mode,from,from_x,from_y,to,to_x,to_y,fare
//! bus,Sofia,0,2000,Plovdiv,4000,1000,90
//! bus,Plovdiv,4000,1000,Sofia,0,2000,90
//! plane,Sofia,0,2000,Varna,9000,3000,300
//! ```
//!
//! **`mode`** accepts the lower-case labels of [`VehicleMode`]: `bus`,
//! `car`, `train`, `plane`.
//!
//! Places are interned by name.  A name that reappears with different
//! coordinates is a parse error — the rows disagree about where the place
//! is, and silently picking one would corrupt every distance surcharge.

use std::io::Read;
use std::path::Path;

use rust_decimal::Decimal;
use serde::Deserialize;

use fare_core::{PlanePoint, VehicleMode};
use fare_graph::{ScheduleGraph, ScheduleGraphBuilder};

use crate::{PlannerError, PlannerResult};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct LegRecord {
    mode: String,
    from: String,
    from_x: i64,
    from_y: i64,
    to: String,
    to_x: i64,
    to_y: i64,
    fare: Decimal,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a [`ScheduleGraph`] from a CSV file.
pub fn load_schedule_csv(path: &Path) -> PlannerResult<ScheduleGraph> {
    let file = std::fs::File::open(path).map_err(PlannerError::Io)?;
    load_schedule_reader(file)
}

/// Like [`load_schedule_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for schedules embedded
/// in the binary.
pub fn load_schedule_reader<R: Read>(reader: R) -> PlannerResult<ScheduleGraph> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut builder = ScheduleGraphBuilder::new();

    for result in csv_reader.deserialize::<LegRecord>() {
        let row = result.map_err(|e| PlannerError::Parse(e.to_string()))?;

        let mode: VehicleMode = row
            .mode
            .trim()
            .parse()
            .map_err(|e: fare_core::CoreError| PlannerError::Parse(e.to_string()))?;

        let from = builder.add_place(row.from.trim(), PlanePoint::new(row.from_x, row.from_y))?;
        let to = builder.add_place(row.to.trim(), PlanePoint::new(row.to_x, row.to_y))?;
        builder.add_leg(mode, from, to, row.fare)?;
    }

    Ok(builder.build())
}
