//! Strongly typed, zero-cost identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  The inner integer is `pub` to allow
//! direct indexing into `Vec`s via `id.0 as usize`, but callers should prefer
//! the `.index()` helpers for clarity.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID" — equivalent to `u32::MAX`.
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Externally assigned package identifier.  Unique, never reused.
    pub struct PackageId(u32);
}

typed_id! {
    /// Vehicle identifier, assigned 1..=N at fleet creation and fixed.
    ///
    /// Note the 1-based numbering: `VehicleId(1)` is `vehicles[0]`.  Use
    /// [`VehicleId::slot`] when indexing an ordered fleet.
    pub struct VehicleId(u32);
}

typed_id! {
    /// Index of a distance-graph vertex, assigned in insertion order.
    /// Vertex 0 is the hub by convention.
    pub struct NodeId(u32);
}

impl VehicleId {
    /// Zero-based position of this vehicle in an ordered fleet.
    ///
    /// Returns `None` for id 0 or the `INVALID` sentinel.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        match self.0 {
            0 | u32::MAX => None,
            n => Some(n as usize - 1),
        }
    }
}
