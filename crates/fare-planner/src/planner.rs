//! Itinerary planner facade.
//!
//! Validates query endpoints against the schedule, then dispatches either
//! to a direct-leg scan or to the best-first search in `fare-graph`.
//!
//! # Thread safety
//!
//! `plan` takes `&self` and allocates all search bookkeeping per call, so
//! one `Planner` can serve many independent queries, including from
//! multiple threads sharing it behind an `Arc`.

use rust_decimal::Decimal;

use fare_core::{LegId, PlaceId};
use fare_graph::{cheapest_path, cost, ScheduleGraph};

use crate::{PlannerError, PlannerResult};

// ── Itinerary ─────────────────────────────────────────────────────────────────

/// The result of a planning query: an ordered list of `LegId`s and the
/// summed travel cost.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Itinerary {
    /// Legs to ride in order, from start to destination.
    pub legs: Vec<LegId>,
    /// Sum of `leg_cost` over all legs (fares plus all surcharges).
    pub total_cost: Decimal,
}

impl Itinerary {
    /// `true` if the trip is a single leg with no transfers.
    pub fn is_direct(&self) -> bool {
        self.legs.len() == 1
    }

    /// Number of transfers (legs minus one; zero for a direct trip).
    pub fn transfer_count(&self) -> usize {
        self.legs.len().saturating_sub(1)
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

/// Query facade over an immutable [`ScheduleGraph`].
pub struct Planner {
    graph: ScheduleGraph,
}

impl Planner {
    /// Wrap a built schedule graph.  The graph is fixed for the planner's
    /// lifetime; to change the schedule, build a new planner.
    pub fn new(graph: ScheduleGraph) -> Self {
        Self { graph }
    }

    /// Read access to the underlying graph, e.g. to resolve the `LegId`s
    /// of a returned itinerary into names and fares.
    pub fn graph(&self) -> &ScheduleGraph {
        &self.graph
    }

    /// Find the cheapest itinerary from `start` to `destination`.
    ///
    /// With `allow_transfer` false, only a single direct leg qualifies;
    /// otherwise the search may chain any number of legs.
    ///
    /// # Errors
    ///
    /// - [`PlannerError::InvalidInput`] — an endpoint name is empty.
    /// - [`PlannerError::UnknownPlace`] — `start` never departs anywhere,
    ///   or `destination` is never arrived at.  The checks are asymmetric
    ///   on purpose: a place that only ever appears as a destination is
    ///   not a valid trip start.
    /// - [`PlannerError::NoRouteFound`] — no qualifying leg sequence.
    pub fn plan(
        &self,
        start: &str,
        destination: &str,
        allow_transfer: bool,
    ) -> PlannerResult<Itinerary> {
        if start.is_empty() || destination.is_empty() {
            return Err(PlannerError::InvalidInput);
        }

        let start_id = self.resolve(start)?;
        let destination_id = self.resolve(destination)?;

        if self.graph.out_degree(start_id) == 0 {
            return Err(PlannerError::UnknownPlace(start.to_string()));
        }
        if self.graph.in_degree(destination_id) == 0 {
            return Err(PlannerError::UnknownPlace(destination.to_string()));
        }

        if allow_transfer {
            self.plan_with_transfers(start_id, destination_id)
        } else {
            self.plan_direct(start_id, destination_id)
        }
    }

    fn resolve(&self, name: &str) -> PlannerResult<PlaceId> {
        self.graph
            .place_id(name)
            .ok_or_else(|| PlannerError::UnknownPlace(name.to_string()))
    }

    /// Scan all direct legs start→destination and keep the cheapest by
    /// `leg_cost`.  On an exact cost tie the earlier schedule entry wins.
    fn plan_direct(&self, start: PlaceId, destination: PlaceId) -> PlannerResult<Itinerary> {
        let mut cheapest: Option<(LegId, Decimal)> = None;

        for leg in self.graph.out_legs(start) {
            if self.graph.leg_to[leg.index()] != destination {
                continue;
            }
            let c = cost::leg_cost(&self.graph, leg);
            match cheapest {
                Some((_, best)) if c >= best => {}
                _ => cheapest = Some((leg, c)),
            }
        }

        cheapest
            .map(|(leg, total_cost)| Itinerary {
                legs: vec![leg],
                total_cost,
            })
            .ok_or_else(|| self.no_route(start, destination))
    }

    fn plan_with_transfers(
        &self,
        start: PlaceId,
        destination: PlaceId,
    ) -> PlannerResult<Itinerary> {
        let legs = cheapest_path(&self.graph, start, destination)
            .ok_or_else(|| self.no_route(start, destination))?;
        let total_cost = legs
            .iter()
            .map(|&leg| cost::leg_cost(&self.graph, leg))
            .sum();
        Ok(Itinerary { legs, total_cost })
    }

    fn no_route(&self, start: PlaceId, destination: PlaceId) -> PlannerError {
        PlannerError::NoRouteFound {
            from: self.graph.place_name[start.index()].clone(),
            to: self.graph.place_name[destination.index()].clone(),
        }
    }
}
