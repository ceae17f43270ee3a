//! Strongly typed identifier wrappers.
//!
//! Both IDs are `Copy + Ord + Hash` so they can be used as map keys and
//! compared without ceremony.  Locality ids are 1-based: id `0` is never
//! handed out, so `LocalityId::slot()` is the way to index a `Vec`.

use std::fmt;

/// Generate a typed wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// The wrapped integer.
            #[inline(always)]
            pub fn get(self) -> $inner {
                self.0
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(raw: $inner) -> $name {
                $name(raw)
            }
        }
    };
}

typed_id! {
    /// Identifier of a locality in the road network.  Assigned sequentially
    /// from 1 by `LocalityGraph::add_locality`.
    pub struct LocalityId(u32);
}

typed_id! {
    /// A professional's license ("CRM") number.  Unique across the registry.
    pub struct LicenseNumber(u32);
}

impl LocalityId {
    /// Zero-based position of this locality in per-locality `Vec`s.
    ///
    /// Returns `None` for the never-assigned id `0`.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        (self.0 as usize).checked_sub(1)
    }

    /// The id stored at zero-based `slot`.
    #[inline]
    pub fn from_slot(slot: usize) -> Option<LocalityId> {
        u32::try_from(slot + 1).ok().map(LocalityId)
    }
}

impl fmt::Display for LocalityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

impl fmt::Display for LicenseNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CRM {}", self.0)
    }
}
