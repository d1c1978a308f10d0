//! `fare-graph` — schedule graph, cost model, and cheapest-path search.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`schedule`] | `ScheduleGraph` (interned places + CSR legs), builder     |
//! | [`cost`]     | decimal cost model: fares, green tax, distance surcharge  |
//! | [`search`]   | best-first cheapest-path search over legs                 |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                            |

pub mod cost;
pub mod error;
pub mod schedule;
pub mod search;


pub use error::{GraphError, GraphResult};
pub use schedule::{ScheduleGraph, ScheduleGraphBuilder};
pub use search::cheapest_path;
