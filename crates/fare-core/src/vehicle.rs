//! Vehicle mode enum shared across all itinerary crates.
//!
//! The mode set is closed and small, so it is a plain enum with a
//! compile-time surcharge table rather than a runtime registry.  Each mode
//! carries a proportional "green tax" applied on top of a leg's base fare.

use rust_decimal::Decimal;

use crate::CoreError;

/// The means by which a scheduled leg is travelled.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VehicleMode {
    /// Intercity bus.
    Bus,
    /// Shared car ride.
    Car,
    /// Rail.
    Train,
    /// Aircraft.
    Plane,
}

impl VehicleMode {
    /// Proportional environmental surcharge on the base fare.
    ///
    /// | Mode  | Rate |
    /// |-------|------|
    /// | Bus   | 10 % |
    /// | Car   |  5 % |
    /// | Train |  0 % |
    /// | Plane | 25 % |
    #[inline]
    pub fn green_tax(self) -> Decimal {
        match self {
            VehicleMode::Bus => Decimal::from_parts(10, 0, 0, false, 2),
            VehicleMode::Car => Decimal::from_parts(5, 0, 0, false, 2),
            VehicleMode::Train => Decimal::ZERO,
            VehicleMode::Plane => Decimal::from_parts(25, 0, 0, false, 2),
        }
    }

    /// Human-readable label, also the accepted CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            VehicleMode::Bus => "bus",
            VehicleMode::Car => "car",
            VehicleMode::Train => "train",
            VehicleMode::Plane => "plane",
        }
    }
}

impl std::fmt::Display for VehicleMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for VehicleMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bus" => Ok(VehicleMode::Bus),
            "car" => Ok(VehicleMode::Car),
            "train" => Ok(VehicleMode::Train),
            "plane" => Ok(VehicleMode::Plane),
            other => Err(CoreError::UnknownMode(other.to_string())),
        }
    }
}
