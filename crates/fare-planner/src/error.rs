//! Planner-subsystem error type.

use thiserror::Error;

use fare_graph::GraphError;

/// Errors produced by the planner facade and the schedule loader.
#[derive(Debug, Error)]
pub enum PlannerError {
    /// Start or destination reference is absent at the API boundary.
    #[error("start or destination is missing")]
    InvalidInput,

    /// Start never appears as an origin, or destination never appears as a
    /// destination, anywhere in the schedule.
    #[error("place {0:?} is not part of the schedule")]
    UnknownPlace(String),

    /// No direct leg exists (transfer disallowed), or the search exhausted
    /// its frontier (transfer allowed).
    #[error("no route from {from} to {to}")]
    NoRouteFound { from: String, to: String },

    #[error("schedule parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type PlannerResult<T> = Result<T, PlannerError>;
