//! Professional record.

use crate::{Coord, LicenseNumber, Specialty};

/// A registered healthcare professional.
///
/// Immutable once registered.  Each ordered index holds its own copy, so the
/// type is `Clone` rather than shared behind a pointer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Professional {
    pub name:      String,
    pub specialty: Specialty,
    pub license:   LicenseNumber,
    pub position:  Coord,
}

impl Professional {
    pub fn new(
        name:      impl Into<String>,
        specialty: Specialty,
        license:   LicenseNumber,
        position:  Coord,
    ) -> Self {
        Self { name: name.into(), specialty, license, position }
    }
}
