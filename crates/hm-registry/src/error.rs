use thiserror::Error;

use hm_core::{CoreError, LicenseNumber};
use hm_graph::GraphError;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("a professional named {0:?} is already registered")]
    DuplicateName(String),

    #[error("{0} is already registered")]
    DuplicateLicense(LicenseNumber),

    #[error(transparent)]
    Graph(#[from] GraphError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
