//! Graph error type.

use thiserror::Error;

use hm_core::LocalityId;

/// Errors produced by `hm-graph`.  All are recoverable.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("locality limit reached ({max} localities)")]
    CapacityExceeded { max: usize },

    #[error("locality {id} does not exist (registered: 1..={count})")]
    InvalidLocality { id: LocalityId, count: usize },

    #[error("no hospital reachable from locality {from}")]
    NoHospitalReachable { from: LocalityId },
}

pub type GraphResult<T> = Result<T, GraphError>;
