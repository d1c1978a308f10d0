//! Best-first cheapest-path search over scheduled legs.
//!
//! The frontier is a set of *legs*, not places: a leg enters the open set
//! as soon as its origin is settled (or is the start), and is settled
//! itself when it wins the selection scan.  Selection minimizes
//! `f = g + h`, where `g` is the leg's cost plus the accumulated cost of
//! the path that reached its origin, and `h` is the distance surcharge
//! from the leg's arrival point to the target.  With the symmetric
//! Manhattan metric `h` is consistent, so the first settled leg arriving
//! at the target is on a cost-optimal path.
//!
//! # Determinism
//!
//! Ties in `f` break by ascending destination-place name, then by
//! ascending `LegId`.  Identical queries on an unmodified graph always
//! return identical paths.
//!
//! # Bookkeeping
//!
//! All search state is local to one call — open/closed flags and running
//! costs keyed by `LegId`, back-pointers keyed by `PlaceId` — so a shared
//! graph can serve concurrent queries.  Each iteration settles exactly one
//! leg and settled legs never reopen, so the loop runs at most once per
//! leg in the schedule.

use rust_decimal::Decimal;

use fare_core::{LegId, PlaceId, PlanePoint};

use crate::cost;
use crate::ScheduleGraph;

/// Find the cheapest leg sequence from `start` to `destination`.
///
/// Returns the forward-ordered path, or `None` if the open set empties
/// before the destination is reached.  `start == destination` yields the
/// empty path.
pub fn cheapest_path(
    graph: &ScheduleGraph,
    start: PlaceId,
    destination: PlaceId,
) -> Option<Vec<LegId>> {
    if start == destination {
        return Some(Vec::new());
    }

    let leg_count = graph.leg_count();
    let target_pos = graph.place_pos[destination.index()];

    // open/closed membership flags, keyed by LegId.
    let mut open = vec![false; leg_count];
    let mut closed = vec![false; leg_count];
    let mut open_len = 0usize;

    // came_from[p] = leg that settled arriving at place p; INVALID for the
    // start place and anywhere not yet reached.
    let mut came_from = vec![LegId::INVALID; graph.place_count()];

    // running_cost[l] = accumulated path cost through leg l; valid only
    // once l is settled.
    let mut running_cost = vec![Decimal::ZERO; leg_count];

    // Seed the frontier with every leg departing the start place.
    for leg in graph.out_legs(start) {
        open[leg.index()] = true;
        open_len += 1;
    }

    while open_len > 0 {
        let Some((selected, g)) = select_cheapest(
            graph,
            &open,
            &came_from,
            &running_cost,
            target_pos,
        ) else {
            break;
        };

        let arrival = graph.leg_to[selected.index()];
        if arrival == destination {
            return Some(reconstruct(graph, &came_from, selected, start));
        }

        came_from[arrival.index()] = selected;
        open[selected.index()] = false;
        open_len -= 1;
        closed[selected.index()] = true;
        running_cost[selected.index()] = g;

        // Expand: every not-yet-settled leg departing the arrival place
        // joins the frontier.  Set semantics — re-adding is a no-op.
        for next in graph.out_legs(arrival) {
            let i = next.index();
            if !closed[i] && !open[i] {
                open[i] = true;
                open_len += 1;
            }
        }
    }

    None
}

/// Scan the open set for the leg minimizing `f = g + h`.
///
/// Returns the winning leg and its accumulated cost `g`.  Scanning in
/// ascending `LegId` order with strict comparisons gives the final
/// tie-break for free.
fn select_cheapest(
    graph: &ScheduleGraph,
    open: &[bool],
    came_from: &[LegId],
    running_cost: &[Decimal],
    target_pos: PlanePoint,
) -> Option<(LegId, Decimal)> {
    let mut best: Option<(LegId, Decimal, Decimal)> = None;

    for (i, &is_open) in open.iter().enumerate() {
        if !is_open {
            continue;
        }
        let leg = LegId(i as u32);

        let mut g = cost::leg_cost(graph, leg);
        let prev = came_from[graph.leg_from[i].index()];
        if prev != LegId::INVALID {
            g += running_cost[prev.index()];
        }
        let arrival_pos = graph.place_pos[graph.leg_to[i].index()];
        let f = g + cost::distance_cost(arrival_pos, target_pos);

        let better = match best {
            None => true,
            Some((best_leg, _, best_f)) => {
                f < best_f
                    || (f == best_f
                        && graph.place_name[graph.leg_to[i].index()]
                            < graph.place_name[graph.leg_to[best_leg.index()].index()])
            }
        };
        if better {
            best = Some((leg, g, f));
        }
    }

    best.map(|(leg, g, _)| (leg, g))
}

/// Walk `came_from` backwards from the winning leg's origin to `start`,
/// then reverse into the forward-ordered path.
fn reconstruct(
    graph: &ScheduleGraph,
    came_from: &[LegId],
    last: LegId,
    start: PlaceId,
) -> Vec<LegId> {
    let mut legs = vec![last];
    let mut cur = graph.leg_from[last.index()];
    while cur != start {
        let leg = came_from[cur.index()];
        debug_assert_ne!(leg, LegId::INVALID, "broken back-pointer chain");
        if leg == LegId::INVALID {
            break;
        }
        legs.push(leg);
        cur = graph.leg_from[leg.index()];
    }
    legs.reverse();
    legs
}
