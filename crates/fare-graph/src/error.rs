//! Graph-subsystem error type.

use rust_decimal::Decimal;
use thiserror::Error;

/// Errors produced while assembling a `ScheduleGraph`.
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("place name must not be empty")]
    EmptyPlaceName,

    #[error("place {name:?} redefined at a different position")]
    PlaceRedefined { name: String },

    #[error("fare must be non-negative, got {0}")]
    NegativeFare(Decimal),
}

pub type GraphResult<T> = Result<T, GraphError>;
