//! Per-cell incremental transition state machine.

use crate::cell::Cell;
use crate::walker::ListWalker;
use skirmish_core::{CellIndex, DetailClass, Scene, SceneNodeId, WorldPos};

/// Progress counters returned from one [`ActiveCell::update`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WalkStats {
    /// Elements promoted (deaggregated or shown) this call.
    pub promoted: u32,
    /// Elements demoted (re-aggregated or hidden) this call.
    pub demoted: u32,
    /// Whether any walker still has work after this call.
    pub pending: bool,
}

/// The transient controller that exists while a cell lies inside at least
/// one bubble, driving its incremental aggregation transitions.
///
/// State machine: created when a cell's bubble count goes 0→1 (walkers
/// begin promoting), steady once exhausted, reversed when the count drops
/// back to 0 (walkers demote), and destroyable only when the count is zero
/// **and** every walker has fully unwound — so destruction never discards
/// partially-deaggregated state. The owning
/// [`VirtualBattlefield`](crate::VirtualBattlefield) stores active cells in
/// an arena keyed by [`CellIndex`]; the parent [`Cell`] holds only that key.
///
/// Five walkers share the cell's two lists: air-detail, mud-detail and
/// visual partitions over the unit list; detail and visual partitions over
/// the feature list. Each walker advances over the *whole* shared list and
/// acts only on elements of its class, so every divider remains a valid
/// partition of the same physical sequence.
pub struct ActiveCell {
    index: CellIndex,
    center: WorldPos,
    air_bubbles: u32,
    mud_bubbles: u32,
    visible: bool,
    air_units: ListWalker,
    mud_units: ListWalker,
    unit_visuals: ListWalker,
    features: ListWalker,
    feature_visuals: ListWalker,
    scene_node: Option<SceneNodeId>,
}

impl ActiveCell {
    /// Activate tracking for the cell at `index` with the given world
    /// center, attaching the cell's scene anchor node.
    ///
    /// All walkers start at the list front in the demote direction; the
    /// bubble-add call that triggered activation flips the relevant ones
    /// to promote.
    pub fn new(index: CellIndex, center: WorldPos, scene: &mut dyn Scene) -> Self {
        let node = SceneNodeId::next();
        scene.add_node(node);
        Self {
            index,
            center,
            air_bubbles: 0,
            mud_bubbles: 0,
            visible: false,
            air_units: ListWalker::new(),
            mud_units: ListWalker::new(),
            unit_visuals: ListWalker::new(),
            features: ListWalker::new(),
            feature_visuals: ListWalker::new(),
            scene_node: Some(node),
        }
    }

    /// Grid index of the tracked cell.
    pub fn index(&self) -> CellIndex {
        self.index
    }

    /// World center of the tracked cell.
    pub fn center(&self) -> WorldPos {
        self.center
    }

    /// Scene anchor node, present from creation until [`cleanup`](Self::cleanup).
    pub fn scene_node(&self) -> Option<SceneNodeId> {
        self.scene_node
    }

    // ── Bubble counting ─────────────────────────────────────────

    /// Count one more overlapping air bubble. A 0→1 transition turns the
    /// air-detail walker toward promotion.
    pub fn add_air_bubble(&mut self) {
        self.air_bubbles += 1;
        if self.air_bubbles == 1 {
            self.air_units.set_direction(true);
        }
    }

    /// Withdraw one air bubble. Only when the summed count returns to zero
    /// does the air-detail walker reverse into demotion — overlapping
    /// observers never cancel each other out.
    ///
    /// # Panics
    ///
    /// Panics if no air bubble is currently counted.
    pub fn remove_air_bubble(&mut self) {
        assert!(self.air_bubbles > 0, "air bubble count underflow");
        self.air_bubbles -= 1;
        if self.air_bubbles == 0 {
            self.air_units.set_direction(false);
        }
    }

    /// Count one more overlapping mud bubble. A 0→1 transition turns the
    /// mud-detail and feature-detail walkers toward promotion (features
    /// are ground content and follow the mud bubble).
    pub fn add_mud_bubble(&mut self) {
        self.mud_bubbles += 1;
        if self.mud_bubbles == 1 {
            self.mud_units.set_direction(true);
            self.features.set_direction(true);
        }
    }

    /// Withdraw one mud bubble; the summed count reaching zero reverses
    /// the mud-detail and feature-detail walkers.
    ///
    /// # Panics
    ///
    /// Panics if no mud bubble is currently counted.
    pub fn remove_mud_bubble(&mut self) {
        assert!(self.mud_bubbles > 0, "mud bubble count underflow");
        self.mud_bubbles -= 1;
        if self.mud_bubbles == 0 {
            self.mud_units.set_direction(false);
            self.features.set_direction(false);
        }
    }

    /// Whether at least one air bubble overlaps this cell.
    pub fn in_air_bubble(&self) -> bool {
        self.air_bubbles > 0
    }

    /// Whether at least one mud bubble overlaps this cell.
    pub fn in_mud_bubble(&self) -> bool {
        self.mud_bubbles > 0
    }

    /// Summed air and mud bubble count.
    pub fn bubble_count(&self) -> u32 {
        self.air_bubbles + self.mud_bubbles
    }

    // ── Visibility ──────────────────────────────────────────────

    /// Whether the cell's contents are being shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Steer the visual walkers toward showing or hiding the cell's
    /// contents. Returns whether visibility actually changed, so callers
    /// can skip redundant scene work.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        if visible == self.visible {
            return false;
        }
        self.visible = visible;
        self.unit_visuals.set_direction(visible);
        self.feature_visuals.set_direction(visible);
        true
    }

    // ── List mutation hooks ─────────────────────────────────────

    /// Route a unit append through every unit walker. Call after the unit
    /// has been pushed to the back of the cell's list.
    pub fn check_unit_added(&mut self, len: usize) {
        self.air_units.check_back(len);
        self.mud_units.check_back(len);
        self.unit_visuals.check_back(len);
    }

    /// Route a unit removal through every unit walker. Call **before** the
    /// element at `index` is removed from the cell's list.
    pub fn check_unit_removing(&mut self, index: usize, len: usize) {
        self.air_units.check_remove(index, len);
        self.mud_units.check_remove(index, len);
        self.unit_visuals.check_remove(index, len);
    }

    /// Route a feature-group append through the feature walkers. Call
    /// after the group has been pushed to the back of the cell's list.
    pub fn check_feature_added(&mut self, len: usize) {
        self.features.check_back(len);
        self.feature_visuals.check_back(len);
    }

    // ── Incremental work ────────────────────────────────────────

    /// Advance every walker that has pending work, each by at most
    /// `quantum` elements, and report progress.
    ///
    /// This is the amortization contract: one call does a bounded amount
    /// of work no matter how much is outstanding, so the battlefield's
    /// per-tick cost stays flat and a transition may simply span several
    /// ticks.
    pub fn update(&mut self, cell: &Cell, scene: &mut dyn Scene, quantum: usize) -> WalkStats {
        let mut stats = WalkStats::default();
        let units = cell.units();
        let features = cell.feature_groups();

        // Detail partitions: promote = deaggregate, demote = aggregate.
        for _ in 0..quantum {
            if !self.air_units.more(units.len()) {
                break;
            }
            let promote = self.air_units.is_forward();
            if let Some(u) = self.air_units.next(units) {
                if u.borrow().detail_class() == DetailClass::Air {
                    if promote {
                        u.borrow_mut().deaggregate();
                        stats.promoted += 1;
                    } else {
                        u.borrow_mut().aggregate();
                        stats.demoted += 1;
                    }
                }
            }
        }
        for _ in 0..quantum {
            if !self.mud_units.more(units.len()) {
                break;
            }
            let promote = self.mud_units.is_forward();
            if let Some(u) = self.mud_units.next(units) {
                if u.borrow().detail_class() == DetailClass::Mud {
                    if promote {
                        u.borrow_mut().deaggregate();
                        stats.promoted += 1;
                    } else {
                        u.borrow_mut().aggregate();
                        stats.demoted += 1;
                    }
                }
            }
        }
        for _ in 0..quantum {
            if !self.features.more(features.len()) {
                break;
            }
            let promote = self.features.is_forward();
            if let Some(f) = self.features.next(features) {
                if promote {
                    f.borrow_mut().deaggregate();
                    stats.promoted += 1;
                } else {
                    f.borrow_mut().aggregate();
                    stats.demoted += 1;
                }
            }
        }

        // Visual partitions: promote = show, demote = hide.
        for _ in 0..quantum {
            if !self.unit_visuals.more(units.len()) {
                break;
            }
            let show = self.unit_visuals.is_forward();
            if let Some(u) = self.unit_visuals.next(units) {
                let id = u.borrow().id();
                scene.set_near_object(id, show);
                if show {
                    stats.promoted += 1;
                } else {
                    stats.demoted += 1;
                }
            }
        }
        for _ in 0..quantum {
            if !self.feature_visuals.more(features.len()) {
                break;
            }
            let show = self.feature_visuals.is_forward();
            if let Some(f) = self.feature_visuals.next(features) {
                if let Some(node) = f.borrow().scene_node() {
                    if show {
                        scene.add_node(node);
                        stats.promoted += 1;
                    } else {
                        scene.remove_node(node);
                        stats.demoted += 1;
                    }
                }
            }
        }

        stats.pending = self.needs_update(cell);
        stats
    }

    /// Whether any walker still has elements to visit.
    pub fn needs_update(&self, cell: &Cell) -> bool {
        let units = cell.units().len();
        let features = cell.feature_groups().len();
        self.air_units.more(units)
            || self.mud_units.more(units)
            || self.unit_visuals.more(units)
            || self.features.more(features)
            || self.feature_visuals.more(features)
    }

    /// Whether this tracker is eligible for destruction: no bubbles remain
    /// and every walker has fully unwound.
    pub fn can_cleanup(&self, cell: &Cell) -> bool {
        self.bubble_count() == 0 && !self.visible && !self.needs_update(cell)
    }

    /// Detach from the scene ahead of destruction.
    ///
    /// The caller (the battlefield's cleanup pass) must have established
    /// [`can_cleanup`](Self::can_cleanup); destroying a tracker with
    /// pending work would strand partially-deaggregated entities.
    ///
    /// Unwinding only covers each walker's promoted prefix, so a unit that
    /// crossed in already expanded and sat pending when the direction
    /// flipped is still deaggregated here. The final sweep collapses and
    /// hides such stragglers before the tracker disappears.
    pub fn cleanup(&mut self, cell: &Cell, scene: &mut dyn Scene) {
        debug_assert!(self.can_cleanup(cell), "cleanup with pending work");
        for u in cell.units() {
            let mut unit = u.borrow_mut();
            if !unit.is_aggregated() {
                unit.aggregate();
            }
            scene.set_near_object(unit.id(), false);
        }
        if let Some(node) = self.scene_node.take() {
            scene.remove_node(node);
        }
    }
}
