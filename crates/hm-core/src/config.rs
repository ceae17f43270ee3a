//! Registry configuration.

use crate::{CoreError, CoreResult};

/// Tunables for a `Registry` instance.
///
/// Typically built from defaults, optionally overlaid with a JSON file and
/// command-line flags by the application crate.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RegistryConfig {
    /// Maximum number of localities the graph accepts.  Default: 999.
    pub max_localities: usize,

    /// Radius used by `Registry::nearby`, in grid units.  Default: 100.
    pub nearby_radius: f64,
}

impl RegistryConfig {
    pub const DEFAULT_MAX_LOCALITIES: usize = 999;
    pub const DEFAULT_NEARBY_RADIUS:  f64   = 100.0;

    /// Reject values no registry can run with.
    pub fn validate(&self) -> CoreResult<()> {
        if self.max_localities == 0 {
            return Err(CoreError::Config("max_localities must be at least 1".into()));
        }
        if !self.nearby_radius.is_finite() || self.nearby_radius < 0.0 {
            return Err(CoreError::Config(format!(
                "nearby_radius must be a finite, non-negative number (got {})",
                self.nearby_radius
            )));
        }
        Ok(())
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_localities: Self::DEFAULT_MAX_LOCALITIES,
            nearby_radius:  Self::DEFAULT_NEARBY_RADIUS,
        }
    }
}
