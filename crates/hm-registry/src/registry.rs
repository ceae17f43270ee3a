//! The `Registry`: two professional indices and the locality graph.
//!
//! # Canonical index
//!
//! The name index and the specialty index always hold the same set of
//! professionals; both are written only by `register_professional`, after
//! every check has passed.  Uniqueness of names and of license numbers is
//! therefore checked against the name index alone.

use tracing::{debug, info, warn};

use hm_core::{Coord, LicenseNumber, LocalityId, Professional, RegistryConfig, Specialty};
use hm_graph::{HospitalRoute, Locality, LocalityGraph};
use hm_index::ProfessionalIndex;

use crate::nearby::{self, NearbyReport};
use crate::{RegistryError, RegistryResult};

/// Single owner of all registry state.  Construct once and pass by reference.
#[derive(Debug)]
pub struct Registry {
    config:       RegistryConfig,
    graph:        LocalityGraph,
    by_name:      ProfessionalIndex,
    by_specialty: ProfessionalIndex,
}

impl Registry {
    /// Create an empty registry.  Fails only if `config` is invalid.
    pub fn new(config: RegistryConfig) -> RegistryResult<Self> {
        config.validate()?;
        Ok(Self {
            graph:        LocalityGraph::new(config.max_localities),
            by_name:      ProfessionalIndex::new(),
            by_specialty: ProfessionalIndex::new(),
            config,
        })
    }

    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn graph(&self) -> &LocalityGraph {
        &self.graph
    }

    // ── Localities & roads ────────────────────────────────────────────────

    pub fn add_locality(&mut self, name: impl Into<String>, has_hospital: bool) -> RegistryResult<LocalityId> {
        self.graph.add_locality(name, has_hospital).map_err(|e| {
            warn!(error = %e, "locality rejected");
            e.into()
        })
    }

    /// Record the one-way road `from → to`.  `Ok(false)` means it already
    /// existed.
    pub fn add_road(&mut self, from: LocalityId, to: LocalityId) -> RegistryResult<bool> {
        self.graph.add_road(from, to).map_err(|e| {
            warn!(error = %e, "road rejected");
            e.into()
        })
    }

    pub fn locality(&self, id: LocalityId) -> Option<&Locality> {
        self.graph.locality(id)
    }

    pub fn nearest_hospital(&self, start: LocalityId) -> RegistryResult<HospitalRoute> {
        Ok(self.graph.nearest_hospital(start)?)
    }

    // ── Professionals ─────────────────────────────────────────────────────

    /// Register a professional in both indices and return the stored record.
    ///
    /// Rejects a name already present (exact match) and a license number
    /// held by anyone, regardless of specialty or position.
    pub fn register_professional(
        &mut self,
        name:      impl Into<String>,
        specialty: Specialty,
        license:   LicenseNumber,
        position:  Coord,
    ) -> RegistryResult<&Professional> {
        let name = name.into();

        if self.by_name.contains_key(&name) {
            warn!(name = %name, "duplicate professional name");
            return Err(RegistryError::DuplicateName(name));
        }
        if self.by_name.contains_license(license) {
            warn!(%license, "duplicate license number");
            return Err(RegistryError::DuplicateLicense(license));
        }

        let professional = Professional::new(name, specialty, license, position);
        debug!(
            name = %professional.name,
            %specialty,
            %license,
            %position,
            "professional registered"
        );

        self.by_specialty.insert(specialty.as_str(), professional.clone());
        let entry = self.by_name.insert(professional.name.clone(), professional);
        Ok(&entry.professional)
    }

    pub fn professional(&self, name: &str) -> Option<&Professional> {
        self.by_name.find(name).map(|e| &e.professional)
    }

    pub fn professional_count(&self) -> usize {
        self.by_name.len()
    }

    /// Professionals in ascending name order.
    pub fn list_by_name(&self) -> impl Iterator<Item = &Professional> + '_ {
        self.by_name.iter().map(|e| &e.professional)
    }

    /// Professionals in ascending specialty-label order; within a specialty,
    /// in registration order.
    pub fn list_by_specialty(&self) -> impl Iterator<Item = &Professional> + '_ {
        self.by_specialty.iter().map(|e| &e.professional)
    }

    // ── Radius search ─────────────────────────────────────────────────────

    /// Professionals within the configured radius of `center`, in name order.
    pub fn nearby(&self, center: Coord) -> NearbyReport<'_> {
        self.nearby_within(center, self.config.nearby_radius)
    }

    /// Professionals within `radius` of `center` (inclusive), in name order.
    pub fn nearby_within(&self, center: Coord, radius: f64) -> NearbyReport<'_> {
        let report = nearby::search(&self.by_name, center, radius);
        debug!(%center, radius, count = report.count, "radius search");
        report
    }

    // ── Teardown ──────────────────────────────────────────────────────────

    /// Drop every professional and locality; the registry stays usable with
    /// the same configuration.
    pub fn clear(&mut self) {
        self.by_name.clear();
        self.by_specialty.clear();
        self.graph = LocalityGraph::new(self.config.max_localities);
    }

    /// Release all index and graph memory and consume the registry.
    pub fn shutdown(mut self) {
        info!(
            professionals = self.by_name.len(),
            localities    = self.graph.len(),
            "registry shutting down"
        );
        self.clear();
    }
}
