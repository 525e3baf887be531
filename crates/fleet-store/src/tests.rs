//! Unit tests for the open-addressed package table.

use fleet_core::{Location, Package, PackageId, SpecialHandling};

use crate::PackageStore;

fn package(id: u32) -> Package {
    Package::new(
        PackageId(id),
        Location::new(&format!("{id} Test Ave"), "Salt Lake City", "UT", "84101"),
        3 * 3_600,
        1.0,
        SpecialHandling::None,
    )
}

#[test]
fn insert_then_get() {
    let mut store = PackageStore::new();
    assert!(store.insert(package(7)).is_none());
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(PackageId(7)).unwrap().id, PackageId(7));
    assert!(store.get(PackageId(8)).is_none());
}

#[test]
fn duplicate_id_replaces_and_returns_old() {
    let mut store = PackageStore::new();
    store.insert(package(3));
    let mut updated = package(3);
    updated.weight_kg = 9.0;
    let old = store.insert(updated).expect("old entry returned");
    assert_eq!(old.weight_kg, 1.0);
    assert_eq!(store.len(), 1);
    assert_eq!(store.get(PackageId(3)).unwrap().weight_kg, 9.0);
}

#[test]
fn remove_leaves_probe_chain_intact() {
    // Insert enough ids that some collide, remove one mid-chain, and verify
    // every other entry is still reachable through the tombstone.
    let mut store = PackageStore::new();
    for id in 0..12 {
        store.insert(package(id));
    }
    let removed = store.remove(PackageId(5)).expect("present");
    assert_eq!(removed.id, PackageId(5));
    assert!(store.get(PackageId(5)).is_none());
    assert!(store.remove(PackageId(5)).is_none(), "second remove is a miss");
    for id in (0..12).filter(|&id| id != 5) {
        assert!(store.get(PackageId(id)).is_some(), "lost package {id}");
    }
    assert_eq!(store.len(), 11);
}

#[test]
fn tombstone_slot_is_reclaimed() {
    let mut store = PackageStore::new();
    for id in 0..8 {
        store.insert(package(id));
    }
    store.remove(PackageId(2));
    store.insert(package(2));
    assert_eq!(store.len(), 8);
    assert!(store.get(PackageId(2)).is_some());
}

#[test]
fn growth_preserves_every_entry() {
    // 200 inserts force several doublings past the 0.75 load factor.
    let mut store = PackageStore::new();
    for id in 0..200 {
        store.insert(package(id));
    }
    assert_eq!(store.len(), 200);
    for id in 0..200 {
        assert_eq!(store.get(PackageId(id)).unwrap().id, PackageId(id));
    }
}

#[test]
fn get_mut_writes_through() {
    let mut store = PackageStore::new();
    store.insert(package(1));
    store.get_mut(PackageId(1)).unwrap().mark_delivered(42);
    assert_eq!(store.get(PackageId(1)).unwrap().delivered_at(), Some(42));
}

#[test]
fn traversal_visits_each_package_once() {
    let mut store = PackageStore::new();
    for id in 0..50 {
        store.insert(package(id));
    }
    let mut seen: Vec<u32> = store.iter().map(|p| p.id.0).collect();
    seen.sort_unstable();
    assert_eq!(seen, (0..50).collect::<Vec<_>>());
}

#[test]
fn ids_sorted_is_ascending_regardless_of_insert_order() {
    let mut store = PackageStore::new();
    for id in [9, 1, 40, 3, 22] {
        store.insert(package(id));
    }
    let ids: Vec<u32> = store.ids_sorted().into_iter().map(|id| id.0).collect();
    assert_eq!(ids, vec![1, 3, 9, 22, 40]);
}

#[test]
fn churn_does_not_wedge_the_table() {
    // Repeated insert/remove cycles accumulate tombstones; growth must keep
    // probes terminating and entries reachable.
    let mut store = PackageStore::with_capacity(4);
    for round in 0u32..20 {
        for id in 0..30 {
            store.insert(package(round * 100 + id));
        }
        for id in 0..30 {
            assert!(store.remove(PackageId(round * 100 + id)).is_some());
        }
    }
    assert!(store.is_empty());
    store.insert(package(7));
    assert!(store.get(PackageId(7)).is_some());
}
