//! Unit tests for fare-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LegId, PlaceId};

    #[test]
    fn index_roundtrip() {
        let id = PlaceId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PlaceId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PlaceId(0) < PlaceId(1));
        assert!(LegId(100) > LegId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PlaceId::INVALID.0, u32::MAX);
        assert_eq!(LegId::INVALID.0, u32::MAX);
        assert_eq!(LegId::default(), LegId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PlaceId(7).to_string(), "PlaceId(7)");
    }
}

#[cfg(test)]
mod plane {
    use crate::PlanePoint;

    #[test]
    fn zero_distance() {
        let p = PlanePoint::new(4000, 1000);
        assert_eq!(p.manhattan_m(p), 0);
    }

    #[test]
    fn manhattan_sums_both_axes() {
        let a = PlanePoint::new(0, 2000);
        let b = PlanePoint::new(4000, 1000);
        assert_eq!(a.manhattan_m(b), 5000);
        // Direction-independent.
        assert_eq!(b.manhattan_m(a), 5000);
    }

    #[test]
    fn negative_coordinates() {
        let a = PlanePoint::new(-3000, -500);
        let b = PlanePoint::new(1000, 500);
        assert_eq!(a.manhattan_m(b), 5000);
    }

    #[test]
    fn saturates_at_extremes() {
        let a = PlanePoint::new(i64::MIN, i64::MIN);
        let b = PlanePoint::new(i64::MAX, i64::MAX);
        assert_eq!(a.manhattan_m(b), u64::MAX);
    }
}

#[cfg(test)]
mod vehicle {
    use rust_decimal_macros::dec;

    use crate::{CoreError, VehicleMode};

    #[test]
    fn green_tax_table() {
        assert_eq!(VehicleMode::Bus.green_tax(), dec!(0.10));
        assert_eq!(VehicleMode::Car.green_tax(), dec!(0.05));
        assert_eq!(VehicleMode::Train.green_tax(), dec!(0));
        assert_eq!(VehicleMode::Plane.green_tax(), dec!(0.25));
    }

    #[test]
    fn taxes_are_non_negative() {
        for mode in [
            VehicleMode::Bus,
            VehicleMode::Car,
            VehicleMode::Train,
            VehicleMode::Plane,
        ] {
            assert!(mode.green_tax() >= dec!(0), "{mode}");
        }
    }

    #[test]
    fn parse_roundtrip() {
        for mode in [
            VehicleMode::Bus,
            VehicleMode::Car,
            VehicleMode::Train,
            VehicleMode::Plane,
        ] {
            assert_eq!(mode.as_str().parse::<VehicleMode>().unwrap(), mode);
        }
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "zeppelin".parse::<VehicleMode>().unwrap_err();
        assert!(matches!(err, CoreError::UnknownMode(s) if s == "zeppelin"));
    }

    #[test]
    fn display() {
        assert_eq!(VehicleMode::Plane.to_string(), "plane");
    }
}
