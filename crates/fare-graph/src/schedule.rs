//! Schedule graph representation and builder.
//!
//! # Data layout
//!
//! The graph uses **Compressed Sparse Row (CSR)** format for outgoing legs.
//! Given a `PlaceId p`, its outgoing legs occupy the `LegId` range:
//!
//! ```text
//! place_out_start[p] .. place_out_start[p+1]
//! ```
//!
//! All leg arrays (`leg_mode`, `leg_from`, `leg_to`, `leg_fare`) are sorted
//! by origin place and indexed by `LegId`.  Iteration over a place's
//! outgoing legs is therefore a contiguous memory scan — ideal for the
//! search's expansion loop.  Within one origin, legs keep the order they
//! were added in, so `LegId` assignment is deterministic for a given
//! schedule.
//!
//! Places are interned by name at build time: the name is the identity key,
//! and every later lookup is a dense `PlaceId` index.

use std::collections::HashMap;

use rust_decimal::Decimal;

use fare_core::{LegId, PlaceId, PlanePoint, VehicleMode};

use crate::{GraphError, GraphResult};

// ── ScheduleGraph ─────────────────────────────────────────────────────────────

/// Immutable directed graph of scheduled legs in CSR format.
///
/// All SoA fields are `pub` for direct indexed access on hot paths.  Do not
/// construct directly; use [`ScheduleGraphBuilder`].
#[derive(Debug)]
pub struct ScheduleGraph {
    // ── Place data (indexed by PlaceId) ───────────────────────────────────
    /// Display name of each place.  Names are unique.
    pub place_name: Vec<String>,

    /// Plane position of each place.
    pub place_pos: Vec<PlanePoint>,

    /// Number of legs arriving at each place.  Used for the planner's
    /// destination-role validation.
    pub place_in_degree: Vec<u32>,

    // ── CSR leg adjacency ─────────────────────────────────────────────────
    /// CSR row pointer.  Outgoing legs of place `p` are at LegIds
    /// `place_out_start[p] .. place_out_start[p+1]`.
    /// Length = `place_count + 1`.
    pub place_out_start: Vec<u32>,

    // ── Leg data (indexed by LegId = position in sorted order) ────────────
    /// Vehicle mode of each leg.
    pub leg_mode: Vec<VehicleMode>,

    /// Origin place of each leg.  Redundant with CSR but required for
    /// efficient path reconstruction (trace `came_from` back to the origin).
    pub leg_from: Vec<PlaceId>,

    /// Destination place of each leg.
    pub leg_to: Vec<PlaceId>,

    /// Base fare of each leg, non-negative.
    pub leg_fare: Vec<Decimal>,

    // ── Name interning ────────────────────────────────────────────────────
    name_idx: HashMap<String, PlaceId>,
}

impl ScheduleGraph {
    /// Construct an empty graph with no places or legs.
    pub fn empty() -> Self {
        ScheduleGraphBuilder::new().build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn place_count(&self) -> usize {
        self.place_name.len()
    }

    pub fn leg_count(&self) -> usize {
        self.leg_to.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leg_to.is_empty()
    }

    // ── Place lookup ──────────────────────────────────────────────────────

    /// Resolve a place name to its dense id, if the place is known.
    pub fn place_id(&self, name: &str) -> Option<PlaceId> {
        self.name_idx.get(name).copied()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `LegId`s of all outgoing legs from `place`.
    ///
    /// This is a contiguous index range — no heap allocation.
    #[inline]
    pub fn out_legs(&self, place: PlaceId) -> impl Iterator<Item = LegId> + '_ {
        let start = self.place_out_start[place.index()] as usize;
        let end = self.place_out_start[place.index() + 1] as usize;
        (start..end).map(|i| LegId(i as u32))
    }

    /// Out-degree of `place` (number of outgoing legs).
    #[inline]
    pub fn out_degree(&self, place: PlaceId) -> usize {
        let start = self.place_out_start[place.index()] as usize;
        let end = self.place_out_start[place.index() + 1] as usize;
        end - start
    }

    /// In-degree of `place` (number of arriving legs).
    #[inline]
    pub fn in_degree(&self, place: PlaceId) -> usize {
        self.place_in_degree[place.index()] as usize
    }

    /// Iterator over all `LegId`s in the graph.
    pub fn legs(&self) -> impl Iterator<Item = LegId> + '_ {
        (0..self.leg_count()).map(|i| LegId(i as u32))
    }
}

// ── ScheduleGraphBuilder ──────────────────────────────────────────────────────

/// Construct a [`ScheduleGraph`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts places and directed legs in any order.  `build()`
/// sorts legs by origin place and constructs the CSR arrays.
///
/// # Example
///
/// ```
/// use fare_core::{PlanePoint, VehicleMode};
/// use fare_graph::ScheduleGraphBuilder;
/// use rust_decimal::Decimal;
///
/// let mut b = ScheduleGraphBuilder::new();
/// let sofia = b.add_place("Sofia", PlanePoint::new(0, 2000)).unwrap();
/// let plovdiv = b.add_place("Plovdiv", PlanePoint::new(4000, 1000)).unwrap();
/// b.add_leg(VehicleMode::Bus, sofia, plovdiv, Decimal::from(90)).unwrap();
/// let graph = b.build();
/// assert_eq!(graph.place_count(), 2);
/// assert_eq!(graph.leg_count(), 1); // directed: no return leg
/// ```
pub struct ScheduleGraphBuilder {
    names: Vec<String>,
    positions: Vec<PlanePoint>,
    name_idx: HashMap<String, PlaceId>,
    raw_legs: Vec<RawLeg>,
}

struct RawLeg {
    mode: VehicleMode,
    from: PlaceId,
    to: PlaceId,
    fare: Decimal,
}

impl ScheduleGraphBuilder {
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            positions: Vec::new(),
            name_idx: HashMap::new(),
            raw_legs: Vec::new(),
        }
    }

    /// Pre-allocate for the expected number of places and legs to reduce
    /// reallocations when bulk-loading from CSV.
    pub fn with_capacity(places: usize, legs: usize) -> Self {
        Self {
            names: Vec::with_capacity(places),
            positions: Vec::with_capacity(places),
            name_idx: HashMap::with_capacity(places),
            raw_legs: Vec::with_capacity(legs),
        }
    }

    /// Intern a place by name and return its `PlaceId` (sequential from 0).
    ///
    /// Adding the same name at the same position again is idempotent and
    /// returns the existing id.  The same name at a *different* position is
    /// rejected: the name is the identity key, so the two records would
    /// silently disagree about where the place is.
    pub fn add_place(&mut self, name: &str, pos: PlanePoint) -> GraphResult<PlaceId> {
        if name.is_empty() {
            return Err(GraphError::EmptyPlaceName);
        }
        if let Some(&id) = self.name_idx.get(name) {
            if self.positions[id.index()] != pos {
                return Err(GraphError::PlaceRedefined {
                    name: name.to_string(),
                });
            }
            return Ok(id);
        }
        let id = PlaceId(self.names.len() as u32);
        self.names.push(name.to_string());
        self.positions.push(pos);
        self.name_idx.insert(name.to_string(), id);
        Ok(id)
    }

    /// Add a **directed** leg from `from` to `to`.
    ///
    /// Reverse travel requires a separate leg.  Self-loops are accepted;
    /// they are never useful but nothing in the cost model breaks on them.
    pub fn add_leg(
        &mut self,
        mode: VehicleMode,
        from: PlaceId,
        to: PlaceId,
        fare: Decimal,
    ) -> GraphResult<()> {
        if fare < Decimal::ZERO {
            return Err(GraphError::NegativeFare(fare));
        }
        self.raw_legs.push(RawLeg {
            mode,
            from,
            to,
            fare,
        });
        Ok(())
    }

    pub fn place_count(&self) -> usize {
        self.names.len()
    }

    pub fn leg_count(&self) -> usize {
        self.raw_legs.len()
    }

    /// Consume the builder and produce a [`ScheduleGraph`].
    ///
    /// Time complexity: O(L log L) for the leg sort, where L = legs.
    pub fn build(self) -> ScheduleGraph {
        let place_count = self.names.len();
        let leg_count = self.raw_legs.len();

        // Stable sort: preserves schedule order within an origin, keeping
        // LegId assignment deterministic.
        let mut raw = self.raw_legs;
        raw.sort_by_key(|l| l.from.0);

        let leg_mode: Vec<VehicleMode> = raw.iter().map(|l| l.mode).collect();
        let leg_from: Vec<PlaceId> = raw.iter().map(|l| l.from).collect();
        let leg_to: Vec<PlaceId> = raw.iter().map(|l| l.to).collect();
        let leg_fare: Vec<Decimal> = raw.iter().map(|l| l.fare).collect();

        // Build CSR row pointer (place_out_start) and in-degrees.
        let mut place_out_start = vec![0u32; place_count + 1];
        let mut place_in_degree = vec![0u32; place_count];
        for l in &raw {
            place_out_start[l.from.index() + 1] += 1;
            place_in_degree[l.to.index()] += 1;
        }
        for i in 1..=place_count {
            place_out_start[i] += place_out_start[i - 1];
        }
        debug_assert_eq!(place_out_start[place_count] as usize, leg_count);

        ScheduleGraph {
            place_name: self.names,
            place_pos: self.positions,
            place_in_degree,
            place_out_start,
            leg_mode,
            leg_from,
            leg_to,
            leg_fare,
            name_idx: self.name_idx,
        }
    }
}

impl Default for ScheduleGraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}
