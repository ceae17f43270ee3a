//! `hm-core` — foundational types for the `healthmap` registry.
//!
//! This crate is a dependency of every other `hm-*` crate.  It has no
//! `hm-*` dependencies and only `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module            | Contents                                            |
//! |-------------------|-----------------------------------------------------|
//! | [`ids`]           | `LocalityId`, `LicenseNumber`                       |
//! | [`geo`]           | `Coord`, planar Euclidean distance                  |
//! | [`specialty`]     | `Specialty` — the fixed set of eight specialties    |
//! | [`professional`]  | `Professional` record                               |
//! | [`config`]        | `RegistryConfig`                                    |
//! | [`error`]         | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod professional;
pub mod specialty;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::RegistryConfig;
pub use error::{CoreError, CoreResult};
pub use geo::Coord;
pub use ids::{LicenseNumber, LocalityId};
pub use professional::Professional;
pub use specialty::Specialty;
