//! Unit tests for fare-planner.
//!
//! Planner tests use hand-built graphs; loader tests feed CSV from an
//! in-memory cursor.  Expected costs are worked out from the cost model
//! (fare + green tax + 20 $/km Manhattan surcharge) before asserting.

#[cfg(test)]
mod helpers {
    use rust_decimal::Decimal;

    use fare_core::{PlanePoint, VehicleMode};
    use fare_graph::ScheduleGraphBuilder;

    use crate::Planner;

    /// Three places on a 1 km-spaced line.
    ///
    ///   A:(0,0)  B:(1000,0)  C:(2000,0)
    ///
    /// Legs (bus): A→B fare 20 (cost 42), B→C fare 20 (cost 42),
    /// A→C fare 50 (cost 95).  The two-leg path (84) beats the direct leg.
    pub fn line_planner() -> Planner {
        let mut b = ScheduleGraphBuilder::new();
        let a = b.add_place("A", PlanePoint::new(0, 0)).unwrap();
        let bp = b.add_place("B", PlanePoint::new(1000, 0)).unwrap();
        let c = b.add_place("C", PlanePoint::new(2000, 0)).unwrap();
        b.add_leg(VehicleMode::Bus, a, bp, Decimal::from(20)).unwrap();
        b.add_leg(VehicleMode::Bus, bp, c, Decimal::from(20)).unwrap();
        b.add_leg(VehicleMode::Bus, a, c, Decimal::from(50)).unwrap();
        Planner::new(b.build())
    }
}

// ── Planner facade ────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    use fare_core::{PlanePoint, VehicleMode};
    use fare_graph::ScheduleGraphBuilder;

    use crate::{Planner, PlannerError};

    #[test]
    fn direct_only_returns_single_cheapest_leg() {
        let planner = super::helpers::line_planner();
        let it = planner.plan("A", "C", false).unwrap();

        assert!(it.is_direct());
        assert_eq!(it.transfer_count(), 0);
        assert_eq!(it.total_cost, dec!(95));
        let graph = planner.graph();
        assert_eq!(graph.place_name[graph.leg_from[it.legs[0].index()].index()], "A");
        assert_eq!(graph.place_name[graph.leg_to[it.legs[0].index()].index()], "C");
    }

    #[test]
    fn direct_only_fails_without_direct_leg() {
        // Only A→B→C exists; the multi-leg path must not leak through.
        let mut b = ScheduleGraphBuilder::new();
        let a = b.add_place("A", PlanePoint::new(0, 0)).unwrap();
        let bp = b.add_place("B", PlanePoint::new(1000, 0)).unwrap();
        let c = b.add_place("C", PlanePoint::new(2000, 0)).unwrap();
        b.add_leg(VehicleMode::Bus, a, bp, Decimal::from(20)).unwrap();
        b.add_leg(VehicleMode::Bus, bp, c, Decimal::from(20)).unwrap();
        let planner = Planner::new(b.build());

        let err = planner.plan("A", "C", false).unwrap_err();
        assert!(matches!(err, PlannerError::NoRouteFound { from, to }
            if from == "A" && to == "C"));
        // The same query with transfers succeeds.
        assert!(planner.plan("A", "C", true).is_ok());
    }

    #[test]
    fn transfers_pick_cheaper_chain_over_direct() {
        let planner = super::helpers::line_planner();
        let it = planner.plan("A", "C", true).unwrap();

        assert_eq!(it.legs.len(), 2);
        assert_eq!(it.total_cost, dec!(84));

        // Contiguous chain from start to destination.
        let graph = planner.graph();
        assert_eq!(graph.place_name[graph.leg_from[it.legs[0].index()].index()], "A");
        for pair in it.legs.windows(2) {
            assert_eq!(
                graph.leg_to[pair[0].index()],
                graph.leg_from[pair[1].index()]
            );
        }
        assert_eq!(graph.place_name[graph.leg_to[it.legs[1].index()].index()], "C");
    }

    #[test]
    fn plan_is_idempotent() {
        let planner = super::helpers::line_planner();
        let first = planner.plan("A", "C", true).unwrap();
        let second = planner.plan("A", "C", true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unknown_place_rejected() {
        let planner = super::helpers::line_planner();
        let err = planner.plan("Atlantis", "C", true).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownPlace(name) if name == "Atlantis"));
    }

    #[test]
    fn empty_endpoint_is_invalid_input() {
        let planner = super::helpers::line_planner();
        assert!(matches!(
            planner.plan("", "C", true),
            Err(PlannerError::InvalidInput)
        ));
        assert!(matches!(
            planner.plan("A", "", false),
            Err(PlannerError::InvalidInput)
        ));
    }

    #[test]
    fn start_must_appear_as_an_origin() {
        // C only ever appears as a destination, so it cannot start a trip.
        let planner = super::helpers::line_planner();
        let err = planner.plan("C", "B", true).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownPlace(name) if name == "C"));
    }

    #[test]
    fn destination_must_appear_as_a_destination() {
        // A only ever appears as an origin.
        let planner = super::helpers::line_planner();
        let err = planner.plan("B", "A", true).unwrap_err();
        assert!(matches!(err, PlannerError::UnknownPlace(name) if name == "A"));
    }

    #[test]
    fn direct_cost_tie_keeps_earlier_schedule_entry() {
        // Bus fare 20 (+10 % tax) and train fare 22 (no tax) both cost 42
        // over the same kilometre; the bus was added first and wins.
        let mut b = ScheduleGraphBuilder::new();
        let x = b.add_place("X", PlanePoint::new(0, 0)).unwrap();
        let y = b.add_place("Y", PlanePoint::new(1000, 0)).unwrap();
        b.add_leg(VehicleMode::Bus, x, y, dec!(20)).unwrap();
        b.add_leg(VehicleMode::Train, x, y, dec!(22)).unwrap();
        let planner = Planner::new(b.build());

        let it = planner.plan("X", "Y", false).unwrap();
        assert_eq!(it.total_cost, dec!(42));
        assert_eq!(
            planner.graph().leg_mode[it.legs[0].index()],
            VehicleMode::Bus
        );
    }

    #[test]
    fn transfer_search_failure_is_no_route() {
        // Two disconnected islands: A→B and C→D.  D passes the
        // destination-role check but the search can never reach it from A.
        let mut b = ScheduleGraphBuilder::new();
        let a = b.add_place("A", PlanePoint::new(0, 0)).unwrap();
        let bp = b.add_place("B", PlanePoint::new(1000, 0)).unwrap();
        let c = b.add_place("C", PlanePoint::new(0, 5000)).unwrap();
        let d = b.add_place("D", PlanePoint::new(1000, 5000)).unwrap();
        b.add_leg(VehicleMode::Bus, a, bp, Decimal::from(20)).unwrap();
        b.add_leg(VehicleMode::Bus, c, d, Decimal::from(20)).unwrap();
        let planner = Planner::new(b.build());

        let err = planner.plan("A", "D", true).unwrap_err();
        assert!(matches!(err, PlannerError::NoRouteFound { from, to }
            if from == "A" && to == "D"));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use rust_decimal_macros::dec;

    use fare_core::VehicleMode;

    use crate::{load_schedule_reader, Planner, PlannerError};

    const SMALL_CSV: &str = "\
mode,from,from_x,from_y,to,to_x,to_y,fare\n\
bus,Sofia,0,2000,Plovdiv,4000,1000,90\n\
bus,Plovdiv,4000,1000,Sofia,0,2000,90\n\
plane,Sofia,0,2000,Varna,9000,3000,300\n\
";

    #[test]
    fn loads_embedded_schedule() {
        let graph = load_schedule_reader(Cursor::new(SMALL_CSV)).unwrap();
        assert_eq!(graph.place_count(), 3);
        assert_eq!(graph.leg_count(), 3);

        let planner = Planner::new(graph);
        // Sofia→Plovdiv direct: 90 + 9 tax + 5 km × 20 = 199.
        let it = planner.plan("Sofia", "Plovdiv", false).unwrap();
        assert_eq!(it.total_cost, dec!(199));
        assert_eq!(
            planner.graph().leg_mode[it.legs[0].index()],
            VehicleMode::Bus
        );
    }

    #[test]
    fn rejects_unknown_mode() {
        let csv = "\
mode,from,from_x,from_y,to,to_x,to_y,fare\n\
zeppelin,Sofia,0,2000,Plovdiv,4000,1000,90\n\
";
        let err = load_schedule_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, PlannerError::Parse(msg) if msg.contains("zeppelin")));
    }

    #[test]
    fn rejects_conflicting_coordinates() {
        let csv = "\
mode,from,from_x,from_y,to,to_x,to_y,fare\n\
bus,Sofia,0,2000,Plovdiv,4000,1000,90\n\
bus,Plovdiv,4000,9999,Sofia,0,2000,90\n\
";
        let err = load_schedule_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Graph(fare_graph::GraphError::PlaceRedefined { .. })
        ));
    }

    #[test]
    fn rejects_negative_fare() {
        let csv = "\
mode,from,from_x,from_y,to,to_x,to_y,fare\n\
bus,Sofia,0,2000,Plovdiv,4000,1000,-5\n\
";
        let err = load_schedule_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(
            err,
            PlannerError::Graph(fare_graph::GraphError::NegativeFare(_))
        ));
    }

    #[test]
    fn rejects_malformed_fare() {
        let csv = "\
mode,from,from_x,from_y,to,to_x,to_y,fare\n\
bus,Sofia,0,2000,Plovdiv,4000,1000,cheap\n\
";
        let err = load_schedule_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, PlannerError::Parse(_)));
    }
}
