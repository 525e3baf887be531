//! Package data model: lifecycle status and special-handling constraints.
//!
//! # Special handling
//!
//! Input data carries handling constraints as free text.  Rather than
//! re-matching string prefixes in every dispatcher pass, the text is parsed
//! **once at load time** into the closed [`SpecialHandling`] enum, so the
//! assignment passes can match exhaustively.  An unrecognized shape degrades
//! to `SpecialHandling::None` — loading never fails on instruction text.

use crate::ids::{PackageId, VehicleId};
use crate::location::Location;
use crate::time::DayClock;

// ── PackageStatus ─────────────────────────────────────────────────────────────

/// Lifecycle of a package through one simulated day.
///
/// The ordering is load-bearing: status only ever moves forward (see
/// [`Package::promote`]).
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PackageStatus {
    /// At the depot, not yet claimed by an assignment pass.
    #[default]
    Pending,
    /// Claimed by a vehicle, waiting for it to depart.
    Assigned,
    /// On a vehicle that has left the hub.
    EnRoute,
    /// Dropped at its destination.
    Delivered,
}

impl PackageStatus {
    /// Human-readable label, useful for CSV column values.
    pub fn as_str(self) -> &'static str {
        match self {
            PackageStatus::Pending => "pending",
            PackageStatus::Assigned => "assigned",
            PackageStatus::EnRoute => "en_route",
            PackageStatus::Delivered => "delivered",
        }
    }
}

// ── SpecialHandling ───────────────────────────────────────────────────────────

/// A package's hard assignment constraint, decided once at load time.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SpecialHandling {
    /// No constraint.
    #[default]
    None,
    /// Must be grouped with the named companion packages.
    DeliverWith(Vec<PackageId>),
    /// The listed destination is known to be wrong; a correction arrives
    /// mid-run.
    WrongAddress,
    /// Arrives at the depot late (elapsed seconds since start of day).
    DelayedUntil(u32),
    /// Must ride the named vehicle.
    OnlyVehicle(VehicleId),
}

impl SpecialHandling {
    /// Parse free-text instructions into a handling constraint.
    ///
    /// Recognized shapes (case-insensitive):
    ///
    /// | Text                              | Variant                  |
    /// |-----------------------------------|--------------------------|
    /// | *(empty)*                         | `None`                   |
    /// | `must ship with 13, 15`           | `DeliverWith([13, 15])`  |
    /// | `wrong address listed`            | `WrongAddress`           |
    /// | `delayed on flight until 9:05 AM` | `DelayedUntil(3900)`     |
    /// | `must be on vehicle 2`            | `OnlyVehicle(2)`         |
    ///
    /// Anything else is treated as "no special instruction" — the shape is
    /// malformed, not fatal.  `clock` anchors the delayed-until wall time.
    pub fn parse(text: &str, clock: &DayClock) -> SpecialHandling {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return SpecialHandling::None;
        }
        let lower = trimmed.to_ascii_lowercase();

        if let Some(rest) = lower.strip_prefix("must ship with") {
            let ids: Option<Vec<PackageId>> = rest
                .split(',')
                .map(|tok| tok.trim().parse::<u32>().ok().map(PackageId))
                .collect();
            return match ids {
                Some(ids) if !ids.is_empty() => SpecialHandling::DeliverWith(ids),
                _ => SpecialHandling::None,
            };
        }

        if lower == "wrong address listed" {
            return SpecialHandling::WrongAddress;
        }

        if let Some(rest) = lower.strip_prefix("delayed on flight until") {
            return match clock.parse(rest.trim()) {
                Ok(at) => SpecialHandling::DelayedUntil(at),
                Err(_) => SpecialHandling::None,
            };
        }

        if let Some(rest) = lower.strip_prefix("must be on vehicle") {
            return match rest.trim().parse::<u32>() {
                Ok(n) if n > 0 => SpecialHandling::OnlyVehicle(VehicleId(n)),
                _ => SpecialHandling::None,
            };
        }

        SpecialHandling::None
    }

    /// `true` when the package carries no constraint.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, SpecialHandling::None)
    }
}

// ── Package ───────────────────────────────────────────────────────────────────

/// One deliverable package.
///
/// The destination is deliberately a mutable owned `Location`: the
/// address-correction event swaps it mid-run without touching the distance
/// graph.  Status and delivery timestamp are private so their write-once /
/// forward-only invariants hold.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Package {
    pub id: PackageId,
    pub destination: Location,
    /// Delivery deadline, seconds since start of day.
    pub deadline: u32,
    pub weight_kg: f32,
    pub handling: SpecialHandling,
    status: PackageStatus,
    delivered_at: Option<u32>,
    assigned_vehicle: VehicleId,
}

impl Package {
    pub fn new(
        id: PackageId,
        destination: Location,
        deadline: u32,
        weight_kg: f32,
        handling: SpecialHandling,
    ) -> Self {
        Self {
            id,
            destination,
            deadline,
            weight_kg,
            handling,
            status: PackageStatus::Pending,
            delivered_at: None,
            assigned_vehicle: VehicleId::INVALID,
        }
    }

    #[inline]
    pub fn status(&self) -> PackageStatus {
        self.status
    }

    /// Move the status forward; a regression request is a no-op.
    pub fn promote(&mut self, next: PackageStatus) {
        self.status = self.status.max(next);
    }

    /// Record the owning vehicle — written exactly once, at assignment time.
    /// Also promotes the status to `Assigned`.
    pub fn assign_to(&mut self, vehicle: VehicleId) {
        if self.assigned_vehicle == VehicleId::INVALID {
            self.assigned_vehicle = vehicle;
        }
        self.promote(PackageStatus::Assigned);
    }

    /// The vehicle this package was placed on, or `None` before assignment.
    pub fn assigned_vehicle(&self) -> Option<VehicleId> {
        (self.assigned_vehicle != VehicleId::INVALID).then_some(self.assigned_vehicle)
    }

    /// Stamp the delivery.  The timestamp is immutable once set.
    pub fn mark_delivered(&mut self, now: u32) {
        if self.delivered_at.is_none() {
            self.delivered_at = Some(now);
        }
        self.promote(PackageStatus::Delivered);
    }

    #[inline]
    pub fn delivered_at(&self) -> Option<u32> {
        self.delivered_at
    }

    /// `true` when the package was delivered after its deadline.
    pub fn delivered_late(&self) -> bool {
        matches!(self.delivered_at, Some(at) if at > self.deadline)
    }
}
