//! Constraint-driven package-to-vehicle assignment.
//!
//! # The pass sequence
//!
//! Assignment is a fixed sequence of priority passes over a pending pool.
//! Each pass removes the packages it claims before the next pass runs, so a
//! later pass never sees a package a prior pass already placed:
//!
//! 1. co-delivery groups            → `vehicles[0]`
//! 2. wrong-address + pre-bound     → last vehicle
//! 3. delayed cargo                 → `vehicles[1]`
//! 4. pinned packages               → their named vehicle
//! 5. no-deadline packages          → last vehicle, spilling to second-to-last
//! 6. remainder                     → first three vehicles, tail-first
//!
//! The pending pool is the ascending-id snapshot of the store, so the
//! procedure is deterministic regardless of hash geometry.  The only fatal
//! condition is the remainder pass running out of room — capacity exhaustion
//! is surfaced immediately and never retried.

use fleet_core::{AddressCorrection, FleetConfig, PackageId, SpecialHandling, VehicleId};
use fleet_store::PackageStore;
use fleet_vehicle::Vehicle;

use crate::error::{DispatchError, DispatchResult};

/// Create the ordered fleet described by `config`: ids 1..=N, uniform
/// capacity and speed.  Index order is departure-priority order.
pub fn build_fleet(config: &FleetConfig) -> Vec<Vehicle> {
    (1..=config.num_vehicles as u32)
        .map(|n| Vehicle::new(VehicleId(n), config.vehicle_capacity, config.miles_per_sec()))
        .collect()
}

/// Partition every stored package across `vehicles`.
///
/// Postconditions: each package is on exactly one vehicle's load list, has
/// its owning vehicle recorded, and is `Assigned`; the pending pool is
/// empty.  `correction` (when scheduled) drives the pass-2 pre-binding.
pub fn assign_packages(
    store: &mut PackageStore,
    vehicles: &mut [Vehicle],
    config: &FleetConfig,
    correction: Option<&AddressCorrection>,
) -> DispatchResult<()> {
    if vehicles.len() < 3 {
        return Err(DispatchError::FleetTooSmall(vehicles.len()));
    }

    let end_of_day = config.end_of_day_secs();
    let cap = config.reference_capacity;
    let last = vehicles.len() - 1;

    let mut pending: Vec<PackageId> = store.ids_sorted();

    // ── Pass 1: co-delivery groups → vehicles[0] ──────────────────────────
    //
    // Seed with every package naming companions, close over the named ids,
    // then pull in same-destination packages that carry no constraint of
    // their own.
    let mut group: Vec<PackageId> = Vec::new();
    for &id in &pending {
        let Some(pkg) = store.get(id) else { continue };
        if let SpecialHandling::DeliverWith(companions) = &pkg.handling {
            let companions = companions.clone();
            push_unique(&mut group, id);
            for c in companions {
                push_unique(&mut group, c);
            }
        }
    }
    group.retain(|id| pending.contains(id));

    let group_destinations: Vec<_> = group
        .iter()
        .filter_map(|&id| store.get(id))
        .map(|p| p.destination.clone())
        .collect();
    for &id in &pending {
        if group.contains(&id) {
            continue;
        }
        let Some(pkg) = store.get(id) else { continue };
        if pkg.handling.is_none() && group_destinations.contains(&pkg.destination) {
            group.push(id);
        }
    }

    claim(store, vehicles, 0, &group);
    pending.retain(|id| !group.contains(id));

    // ── Pass 2: wrong-address packages → last vehicle ─────────────────────
    //
    // The correction's effect is pre-bound: packages already addressed to
    // the corrected destination with an end-of-day deadline ride the same
    // vehicle.  This predicate is policy — preserve it literally.
    let mut corrected: Vec<PackageId> = Vec::new();
    for &id in &pending {
        let Some(pkg) = store.get(id) else { continue };
        let wrong = matches!(pkg.handling, SpecialHandling::WrongAddress);
        let prebound = correction.is_some_and(|c| {
            pkg.destination == c.new_destination && pkg.deadline == end_of_day
        });
        if wrong || prebound {
            corrected.push(id);
        }
    }
    claim(store, vehicles, last, &corrected);
    pending.retain(|id| !corrected.contains(id));

    // ── Pass 3: delayed cargo → vehicles[1] ───────────────────────────────
    let delayed: Vec<PackageId> = pending
        .iter()
        .copied()
        .filter(|&id| {
            matches!(
                store.get(id).map(|p| &p.handling),
                Some(SpecialHandling::DelayedUntil(_))
            )
        })
        .collect();
    claim(store, vehicles, 1, &delayed);
    pending.retain(|id| !delayed.contains(id));

    // ── Pass 4: pinned packages → their named vehicle ─────────────────────
    let pinned: Vec<(PackageId, VehicleId)> = pending
        .iter()
        .filter_map(|&id| match store.get(id).map(|p| &p.handling) {
            Some(&SpecialHandling::OnlyVehicle(v)) => Some((id, v)),
            _ => None,
        })
        .collect();
    for (id, vehicle) in pinned {
        let slot = vehicle
            .slot()
            .filter(|&s| s < vehicles.len())
            .ok_or(DispatchError::UnknownVehicle { package: id, vehicle })?;
        claim(store, vehicles, slot, &[id]);
        pending.retain(|&p| p != id);
    }

    // ── Pass 5: no-deadline packages → last vehicle, spill to previous ────
    let undated: Vec<PackageId> = pending
        .iter()
        .copied()
        .filter(|&id| store.get(id).is_some_and(|p| p.deadline >= end_of_day))
        .collect();
    for id in undated {
        let slot = if vehicles[last].package_count() < cap { last } else { last - 1 };
        claim(store, vehicles, slot, &[id]);
        pending.retain(|&p| p != id);
    }

    // ── Pass 6: remainder → first three vehicles, tail-first ──────────────
    for slot in 0..3 {
        let room = cap.min(vehicles[slot].capacity);
        while vehicles[slot].package_count() < room {
            match pending.pop() {
                Some(id) => claim(store, vehicles, slot, &[id]),
                None => break,
            }
        }
    }
    if let Some(&id) = pending.last() {
        return Err(DispatchError::CapacityExceeded { package: id, capacity: cap });
    }

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn push_unique(ids: &mut Vec<PackageId>, id: PackageId) {
    if !ids.contains(&id) {
        ids.push(id);
    }
}

/// Load `ids` onto `vehicles[slot]` and record the owner on each package.
/// Callers drop the claimed ids from the pending pool.
fn claim(store: &mut PackageStore, vehicles: &mut [Vehicle], slot: usize, ids: &[PackageId]) {
    let owner = vehicles[slot].id;
    for &id in ids {
        vehicles[slot].load(id);
        if let Some(pkg) = store.get_mut(id) {
            pkg.assign_to(owner);
        }
    }
}
