//! Layered configuration: defaults ← JSON file ← command-line flags.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};

use hm_core::RegistryConfig;

/// Per-field overrides taken from the command line.
#[derive(Debug, Default, Clone, Copy)]
pub struct Overrides {
    pub max_localities: Option<usize>,
    pub nearby_radius:  Option<f64>,
}

/// Read a JSON config file.  Missing fields keep their defaults.
pub fn load_file(path: &Path) -> Result<RegistryConfig> {
    let file = File::open(path)
        .with_context(|| format!("opening config file {}", path.display()))?;
    serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing config file {}", path.display()))
}

/// Resolve the effective configuration and validate it.
pub fn resolve(path: Option<&Path>, overrides: Overrides) -> Result<RegistryConfig> {
    let mut config = match path {
        Some(p) => load_file(p)?,
        None    => RegistryConfig::default(),
    };
    if let Some(n) = overrides.max_localities {
        config.max_localities = n;
    }
    if let Some(r) = overrides.nearby_radius {
        config.nearby_radius = r;
    }
    config.validate().context("invalid configuration")?;
    Ok(config)
}
