//! `hm-registry` — composition of the professional indices and the locality
//! graph behind a single owned instance.
//!
//! # Operations
//!
//! | Method                                  | Outcome                                   |
//! |-----------------------------------------|-------------------------------------------|
//! | `add_locality(name, has_hospital)`      | `LocalityId` / capacity error             |
//! | `add_road(from, to)`                    | new-or-existing / invalid locality        |
//! | `nearest_hospital(start)`               | `HospitalRoute` / not found / invalid     |
//! | `register_professional(..)`             | stored record / duplicate name or license |
//! | `list_by_name()` / `list_by_specialty()`| ordered professionals                     |
//! | `nearby(coord)` / `nearby_within(..)`   | `NearbyReport` (matches + count)          |
//! | `shutdown()`                            | releases both indices                     |
//!
//! # Quick-start
//!
//! ```rust
//! use hm_core::{Coord, LicenseNumber, RegistryConfig, Specialty};
//! use hm_registry::Registry;
//!
//! let mut reg = Registry::new(RegistryConfig::default()).unwrap();
//! let a = reg.add_locality("Centro", false).unwrap();
//! let b = reg.add_locality("Santa Casa", true).unwrap();
//! reg.add_road(a, b).unwrap();
//! assert_eq!(reg.nearest_hospital(a).unwrap().hospital, b);
//!
//! reg.register_professional("Ana", Specialty::Cardiologia, LicenseNumber(100), Coord::new(0, 0))
//!     .unwrap();
//! assert_eq!(reg.nearby(Coord::new(3, 4)).count, 1);
//! ```

pub mod error;
pub mod nearby;
pub mod registry;


pub use error::{RegistryError, RegistryResult};
pub use hm_graph::{HospitalRoute, Locality};
pub use nearby::{NearbyMatch, NearbyReport};
pub use registry::Registry;
