//! Fixed-radius search over the name index.

use hm_core::{Coord, Professional};
use hm_index::ProfessionalIndex;

/// A professional found inside the search radius.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyMatch<'a> {
    pub professional: &'a Professional,
    /// Euclidean distance to the query point, in grid units.
    pub distance: f64,
}

/// Outcome of a radius search: matches in alphabetical order plus the count.
#[derive(Debug, Clone, PartialEq)]
pub struct NearbyReport<'a> {
    pub center:  Coord,
    pub radius:  f64,
    pub matches: Vec<NearbyMatch<'a>>,
    pub count:   usize,
}

/// Walk `index` in key order and keep professionals within `radius` of
/// `center` (boundary inclusive).
pub(crate) fn search(index: &ProfessionalIndex, center: Coord, radius: f64) -> NearbyReport<'_> {
    let matches: Vec<_> = index
        .iter()
        .filter_map(|e| {
            let distance = e.professional.position.distance(center);
            (distance <= radius).then_some(NearbyMatch { professional: &e.professional, distance })
        })
        .collect();

    NearbyReport { center, radius, count: matches.len(), matches }
}
