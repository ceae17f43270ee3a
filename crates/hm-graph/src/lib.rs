//! `hm-graph` — locality graph and reachability search.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`network`]  | `Locality`, `LocalityGraph` (sorted adjacency lists)      |
//! | [`search`]   | `HospitalRoute`, breadth-first `nearest_hospital`         |
//! | [`error`]    | `GraphError`, `GraphResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod network;
pub mod search;

#[cfg(test)]
mod tests;

pub use error::{GraphError, GraphResult};
pub use network::{Locality, LocalityGraph};
pub use search::HospitalRoute;
