//! Spatial bucket: the per-cell entity containers.

use skirmish_core::{CellIndex, FeatureHandle, UnitHandle, UnitId};

/// A fixed-size spatial bucket holding the entities whose position maps
/// into it.
///
/// Purely a container: an ordered feature-group list populated at theater
/// load, an ordered unit list mutated as units move, and the arena key of
/// the cell's [`ActiveCell`](crate::ActiveCell) while one exists. Cells are
/// created for every grid position at battlefield construction and live
/// until teardown.
///
/// List mutation ordering (walker notification before removal, after
/// append) is enforced by [`VirtualBattlefield`](crate::VirtualBattlefield)'s
/// insert/remove helpers — the only code paths permitted to mutate these
/// lists.
#[derive(Default)]
pub struct Cell {
    features: Vec<FeatureHandle>,
    units: Vec<UnitHandle>,
    active: Option<CellIndex>,
}

impl Cell {
    /// Create an empty cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a feature group. Features never change cells afterwards.
    pub fn add_feature_group(&mut self, feature: FeatureHandle) {
        self.features.push(feature);
    }

    /// The cell's feature groups, in insertion order.
    pub fn feature_groups(&self) -> &[FeatureHandle] {
        &self.features
    }

    /// Append a unit to the back of the unit list (the pending side of
    /// every walker partition).
    pub fn add_unit(&mut self, unit: UnitHandle) {
        self.units.push(unit);
    }

    /// Position of `unit` in the unit list, if present.
    pub fn unit_index(&self, unit: UnitId) -> Option<usize> {
        self.units.iter().position(|u| u.borrow().id() == unit)
    }

    /// Remove the unit at `index`, preserving list order.
    ///
    /// The caller must have routed the removal through the active cell's
    /// walkers first.
    pub fn remove_unit_at(&mut self, index: usize) -> UnitHandle {
        self.units.remove(index)
    }

    /// The cell's units, in list order.
    pub fn units(&self) -> &[UnitHandle] {
        &self.units
    }

    /// Attach or detach the arena key of this cell's active tracker.
    pub fn set_active(&mut self, active: Option<CellIndex>) {
        self.active = active;
    }

    /// Arena key of the attached [`ActiveCell`](crate::ActiveCell), if any.
    pub fn active(&self) -> Option<CellIndex> {
        self.active
    }

    /// Whether the cell holds no entities at all.
    pub fn is_empty(&self) -> bool {
        self.features.is_empty() && self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_test_utils::{feature, unit};
    use skirmish_core::{DetailClass, WorldPos};

    #[test]
    fn starts_empty_and_inactive() {
        let cell = Cell::new();
        assert!(cell.is_empty());
        assert!(cell.active().is_none());
        assert!(cell.units().is_empty());
        assert!(cell.feature_groups().is_empty());
    }

    #[test]
    fn units_keep_insertion_order() {
        let mut cell = Cell::new();
        let a = unit(UnitId(1), WorldPos::new(0.0, 0.0), DetailClass::Air);
        let b = unit(UnitId(2), WorldPos::new(0.0, 0.0), DetailClass::Mud);
        cell.add_unit(a);
        cell.add_unit(b);
        assert_eq!(cell.unit_index(UnitId(1)), Some(0));
        assert_eq!(cell.unit_index(UnitId(2)), Some(1));

        let removed = cell.remove_unit_at(0);
        assert_eq!(removed.borrow().id(), UnitId(1));
        assert_eq!(cell.unit_index(UnitId(2)), Some(0));
        assert_eq!(cell.unit_index(UnitId(1)), None);
    }

    #[test]
    fn features_and_active_key() {
        let mut cell = Cell::new();
        cell.add_feature_group(feature(WorldPos::new(5.0, 5.0)));
        assert!(!cell.is_empty());
        cell.set_active(Some(CellIndex(7)));
        assert_eq!(cell.active(), Some(CellIndex(7)));
        cell.set_active(None);
        assert!(cell.active().is_none());
    }
}
