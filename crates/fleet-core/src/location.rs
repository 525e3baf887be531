//! Delivery location with street/zip identity.

use std::fmt;
use std::hash::{Hash, Hasher};

/// A delivery address.
///
/// Identity is the `(street, zip)` pair: two locations with different
/// `name` or `city` fields but the same street and zip are the same place.
/// `name` is only a human-readable label used as a graph lookup key and may
/// be empty.  `PartialEq` and `Hash` are hand-written to enforce this.
#[derive(Clone, Debug, Default, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub name: String,
}

impl Location {
    pub fn new(street: &str, city: &str, state: &str, zip: &str) -> Self {
        Self {
            street: street.to_string(),
            city: city.to_string(),
            state: state.to_string(),
            zip: zip.to_string(),
            name: String::new(),
        }
    }

    /// Attach a graph-label name.
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

impl PartialEq for Location {
    fn eq(&self, other: &Self) -> bool {
        self.street == other.street && self.zip == other.zip
    }
}

impl Hash for Location {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.street.hash(state);
        self.zip.hash(state);
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, {}, {}",
            self.street, self.city, self.state, self.zip
        )
    }
}
