//! Decimal cost model for scheduled legs.
//!
//! # Cost units
//!
//! All monetary values are `rust_decimal::Decimal` dollars.  Comparisons are
//! exact and reproducible; binary floating point never touches money.
//!
//! A leg's travel cost has three parts:
//!
//! ```text
//! leg_cost = fare + green_tax(mode) * fare + distance_cost(origin, destination)
//! ```
//!
//! The distance surcharge is a direction-independent infrastructure charge
//! of [`DOLLARS_PER_KM`] per Manhattan kilometre between the endpoints.
//! The same function doubles as the search heuristic: applied from a leg's
//! arrival point to the overall target it never overestimates the remaining
//! cost, because every future leg's cost includes at least its own distance
//! surcharge and Manhattan distance obeys the triangle inequality.

use rust_decimal::Decimal;

use fare_core::{LegId, PlaceId, PlanePoint};

use crate::ScheduleGraph;

/// Infrastructure surcharge rate, dollars per Manhattan kilometre.
pub const DOLLARS_PER_KM: Decimal = Decimal::from_parts(20, 0, 0, false, 0);

const METERS_PER_KM: Decimal = Decimal::from_parts(1000, 0, 0, false, 0);

/// Manhattan distance between two plane points in kilometres, exact.
///
/// Both axes are scaled identically; the metre sum is divided by 1000 in
/// decimal, so fractional kilometres survive rather than truncating.
pub fn distance_km(a: PlanePoint, b: PlanePoint) -> Decimal {
    Decimal::from(a.manhattan_m(b)) / METERS_PER_KM
}

/// Distance surcharge between two plane points: `distance_km × 20 $/km`.
pub fn distance_cost(a: PlanePoint, b: PlanePoint) -> Decimal {
    distance_km(a, b) * DOLLARS_PER_KM
}

/// Accumulated travel cost of a single leg: fare, green tax, and the
/// surcharge for the distance between its endpoints.
///
/// Always `>= fare`, since both surcharges are non-negative.
pub fn leg_cost(graph: &ScheduleGraph, leg: LegId) -> Decimal {
    let fare = graph.leg_fare[leg.index()];
    let tax = graph.leg_mode[leg.index()].green_tax();
    let from = graph.place_pos[graph.leg_from[leg.index()].index()];
    let to = graph.place_pos[graph.leg_to[leg.index()].index()];
    fare + tax * fare + distance_cost(from, to)
}

/// Estimated total cost of taking `leg` on the way to `target`:
/// `leg_cost + distance_cost(leg.destination, target)`.
///
/// This is the search's `f = g_local + h` term for a leg with no
/// predecessor; the engine adds the accumulated cost of the path that
/// reached the leg's origin on top.
pub fn estimated_total_cost(graph: &ScheduleGraph, leg: LegId, target: PlaceId) -> Decimal {
    let arrival = graph.place_pos[graph.leg_to[leg.index()].index()];
    leg_cost(graph, leg) + distance_cost(arrival, graph.place_pos[target.index()])
}
