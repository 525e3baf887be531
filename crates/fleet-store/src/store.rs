//! `PackageStore` — open-addressed associative container keyed by package id.
//!
//! # Why not `HashMap`?
//!
//! The store is the single authority on package state for the whole run, and
//! its behavior is part of the system contract: linear probing with tombstone
//! deletion, automatic doubling when the load factor exceeds 0.75, and a
//! stable full traversal.  Owning the table keeps those guarantees explicit
//! and testable instead of delegating them to the standard library's
//! (unspecified) resize policy.
//!
//! Keys are hashed with `FxHasher` — integer keys hash in a couple of cycles,
//! and SipHash's DoS resistance buys nothing for internally generated ids.

use std::hash::{Hash, Hasher};

use rustc_hash::FxHasher;

use fleet_core::{Package, PackageId};

const INITIAL_BUCKETS: usize = 16;

// ── Bucket ────────────────────────────────────────────────────────────────────

/// One table slot.  `Tombstone` marks a removal: probe chains walk through it
/// but inserts may reclaim it.
#[derive(Debug)]
enum Bucket {
    Empty,
    Tombstone,
    Occupied(Package),
}

impl Bucket {
    fn as_package(&self) -> Option<&Package> {
        match self {
            Bucket::Occupied(p) => Some(p),
            _ => None,
        }
    }

    fn into_package(self) -> Option<Package> {
        match self {
            Bucket::Occupied(p) => Some(p),
            _ => None,
        }
    }
}

// ── PackageStore ──────────────────────────────────────────────────────────────

/// Open-addressed, linear-probing package table.
///
/// Lookup and insert are O(1) amortized.  Absent keys return `None` — a miss
/// is "no match", never an error.
#[derive(Debug)]
pub struct PackageStore {
    buckets: Vec<Bucket>,
    live: usize,
    tombstones: usize,
}

impl PackageStore {
    pub fn new() -> Self {
        Self::with_capacity(INITIAL_BUCKETS)
    }

    /// Pre-size the table for roughly `n` packages.
    pub fn with_capacity(n: usize) -> Self {
        let buckets = (n.max(INITIAL_BUCKETS) * 2).next_power_of_two();
        Self {
            buckets: (0..buckets).map(|_| Bucket::Empty).collect(),
            live: 0,
            tombstones: 0,
        }
    }

    /// Number of packages currently stored.
    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    #[inline]
    fn bucket_for(&self, id: PackageId) -> usize {
        let mut hasher = FxHasher::default();
        id.hash(&mut hasher);
        // Bucket count is always a power of two, so masking == modulo.
        (hasher.finish() as usize) & (self.buckets.len() - 1)
    }

    /// Insert a package, replacing (and returning) any existing entry with
    /// the same id.
    pub fn insert(&mut self, package: Package) -> Option<Package> {
        self.maybe_grow();

        let mask = self.buckets.len() - 1;
        let mut slot = self.bucket_for(package.id);
        let mut first_tombstone = None;

        for _ in 0..self.buckets.len() {
            match &self.buckets[slot] {
                Bucket::Empty => {
                    // Prefer reclaiming a tombstone passed on the way here.
                    let target = first_tombstone.unwrap_or(slot);
                    if first_tombstone.is_some() {
                        self.tombstones -= 1;
                    }
                    self.buckets[target] = Bucket::Occupied(package);
                    self.live += 1;
                    return None;
                }
                Bucket::Tombstone => {
                    first_tombstone.get_or_insert(slot);
                }
                Bucket::Occupied(existing) if existing.id == package.id => {
                    let old = std::mem::replace(&mut self.buckets[slot], Bucket::Occupied(package));
                    return old.into_package();
                }
                Bucket::Occupied(_) => {}
            }
            slot = (slot + 1) & mask;
        }

        // Every slot is occupied or a tombstone; growth above guarantees at
        // least one tombstone was seen.
        let target = first_tombstone.expect("probe exhausted a table with no free slot");
        self.tombstones -= 1;
        self.buckets[target] = Bucket::Occupied(package);
        self.live += 1;
        None
    }

    /// Look up a package by id.
    pub fn get(&self, id: PackageId) -> Option<&Package> {
        let mask = self.buckets.len() - 1;
        let mut slot = self.bucket_for(id);
        for _ in 0..self.buckets.len() {
            match &self.buckets[slot] {
                Bucket::Empty => return None,
                Bucket::Occupied(p) if p.id == id => return Some(p),
                _ => {}
            }
            slot = (slot + 1) & mask;
        }
        None
    }

    /// Mutable lookup by id.
    pub fn get_mut(&mut self, id: PackageId) -> Option<&mut Package> {
        let mask = self.buckets.len() - 1;
        let mut slot = self.bucket_for(id);
        for _ in 0..self.buckets.len() {
            match &self.buckets[slot] {
                Bucket::Empty => return None,
                Bucket::Occupied(p) if p.id == id => {
                    // Re-borrow mutably; the match above only had `&`.
                    return match &mut self.buckets[slot] {
                        Bucket::Occupied(p) => Some(p),
                        _ => unreachable!(),
                    };
                }
                _ => {}
            }
            slot = (slot + 1) & mask;
        }
        None
    }

    /// Remove and return a package, leaving a tombstone in its slot.
    pub fn remove(&mut self, id: PackageId) -> Option<Package> {
        let mask = self.buckets.len() - 1;
        let mut slot = self.bucket_for(id);
        for _ in 0..self.buckets.len() {
            match &self.buckets[slot] {
                Bucket::Empty => return None,
                Bucket::Occupied(p) if p.id == id => {
                    let old = std::mem::replace(&mut self.buckets[slot], Bucket::Tombstone);
                    self.live -= 1;
                    self.tombstones += 1;
                    return old.into_package();
                }
                _ => {}
            }
            slot = (slot + 1) & mask;
        }
        None
    }

    /// Iterate over all stored packages in bucket order.
    ///
    /// The order is stable between mutations but carries no meaning; use
    /// [`ids_sorted`](Self::ids_sorted) where determinism matters.
    pub fn iter(&self) -> impl Iterator<Item = &Package> {
        self.buckets.iter().filter_map(Bucket::as_package)
    }

    /// Mutable traversal in bucket order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Package> {
        self.buckets.iter_mut().filter_map(|b| match b {
            Bucket::Occupied(p) => Some(p),
            _ => None,
        })
    }

    /// Snapshot of all package ids in ascending order.
    ///
    /// This is the deterministic view the dispatcher's pending pool is built
    /// from — independent of hash geometry and insertion history.
    pub fn ids_sorted(&self) -> Vec<PackageId> {
        let mut ids: Vec<PackageId> = self.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        ids
    }

    // ── Growth ────────────────────────────────────────────────────────────

    /// Double the table when live entries plus tombstones push the load
    /// factor past 0.75.  Counting tombstones keeps probe chains short even
    /// under churn; rehashing drops them.
    fn maybe_grow(&mut self) {
        if (self.live + self.tombstones + 1) * 4 > self.buckets.len() * 3 {
            self.grow();
        }
    }

    fn grow(&mut self) {
        let doubled = self.buckets.len() * 2;
        let old = std::mem::replace(
            &mut self.buckets,
            (0..doubled).map(|_| Bucket::Empty).collect(),
        );
        self.live = 0;
        self.tombstones = 0;
        for bucket in old {
            if let Bucket::Occupied(p) = bucket {
                self.insert(p);
            }
        }
    }
}

impl Default for PackageStore {
    fn default() -> Self {
        Self::new()
    }
}
