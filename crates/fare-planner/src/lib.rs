//! `fare-planner` — query facade and schedule loading.
//!
//! # Crate layout
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`planner`] | `Planner` facade, `Itinerary` result                 |
//! | [`loader`]  | CSV schedule loading into a `ScheduleGraph`          |
//! | [`error`]   | `PlannerError`, `PlannerResult<T>`                   |
//!
//! # Typical use
//!
//! ```no_run
//! use fare_planner::{load_schedule_csv, Planner};
//!
//! # fn main() -> Result<(), fare_planner::PlannerError> {
//! let graph = load_schedule_csv(std::path::Path::new("schedule.csv"))?;
//! let planner = Planner::new(graph);
//! let itinerary = planner.plan("Sofia", "Varna", true)?;
//! println!("total: {}", itinerary.total_cost);
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod loader;
pub mod planner;

#[cfg(test)]
mod tests;

pub use error::{PlannerError, PlannerResult};
pub use loader::{load_schedule_csv, load_schedule_reader};
pub use planner::{Itinerary, Planner};
