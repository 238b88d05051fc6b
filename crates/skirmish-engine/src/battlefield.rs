//! The battlefield orchestrator: unit registry, bubble projection, and
//! the per-tick scheduling loop.

use std::error::Error;
use std::fmt;
use std::time::Instant;

use indexmap::IndexMap;
use smallvec::SmallVec;

use crate::active::ActiveCell;
use crate::cell::Cell;
use crate::config::{BattlefieldConfig, ConfigError};
use crate::metrics::UpdateMetrics;
use skirmish_core::{
    CellIndex, DetailClass, FeatureHandle, Scene, Terrain, TickId, UnitHandle, UnitId, WorldPos,
};
use skirmish_grid::BattleGrid;

/// Errors surfaced by battlefield registry operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BattlefieldError {
    /// A unit with this id is already registered.
    DuplicateUnit {
        /// The colliding id.
        id: UnitId,
    },
    /// No unit with this id is registered.
    UnknownUnit {
        /// The id looked up.
        id: UnitId,
    },
    /// The theater cannot be replaced while units are registered.
    TheaterChangeWithUnits {
        /// How many units are still registered.
        units: usize,
    },
}

impl fmt::Display for BattlefieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateUnit { id } => write!(f, "unit {id} is already registered"),
            Self::UnknownUnit { id } => write!(f, "unit {id} is not registered"),
            Self::TheaterChangeWithUnits { units } => {
                write!(f, "cannot replace theater while {units} units are registered")
            }
        }
    }
}

impl Error for BattlefieldError {}

/// A named theater: the static feature-group layout loaded into the grid.
///
/// Feature groups never move, so the theater is the single source of their
/// cell membership. Replacing the theater is only legal on an empty
/// battlefield (see [`VirtualBattlefield::set_theater`]).
#[derive(Clone, Default)]
pub struct Theater {
    name: String,
    features: Vec<FeatureHandle>,
}

impl Theater {
    /// Create an empty theater.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            features: Vec::new(),
        }
    }

    /// Create a theater pre-populated with feature groups.
    pub fn with_features(name: impl Into<String>, features: Vec<FeatureHandle>) -> Self {
        Self {
            name: name.into(),
            features,
        }
    }

    /// Append a feature group to the theater.
    pub fn add_feature_group(&mut self, feature: FeatureHandle) {
        self.features.push(feature);
    }

    /// Theater name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The theater's feature groups.
    pub fn feature_groups(&self) -> &[FeatureHandle] {
        &self.features
    }
}

/// Per-unit registry entry.
struct UnitRecord {
    handle: UnitHandle,
    cell: CellIndex,
    human: bool,
    marked_for_delete: bool,
    /// Cells this unit's air bubble currently overlaps, row-major.
    air_overlap: Vec<CellIndex>,
    /// Cells this unit's mud bubble currently overlaps, row-major.
    mud_overlap: Vec<CellIndex>,
}

/// The virtual battlefield: owns the cell grid, the unit registry, and the
/// arena of [`ActiveCell`] trackers, and drives all incremental transitions
/// from its tick loop.
///
/// Lifecycle per tick ([`on_update`](Self::on_update)):
///
/// 1. drain the queued unit moves, migrating cell membership and
///    re-projecting human bubble footprints;
/// 2. refresh each active cell's visibility against the camera and advance
///    its walkers by the configured quantum;
/// 3. destroy trackers that have fully unwound with no bubbles left.
///
/// Bubble projection is eager (footprints change the moment a human unit is
/// added, moved, or toggled) while the resulting aggregation work is lazy,
/// spread over subsequent ticks.
pub struct VirtualBattlefield {
    config: BattlefieldConfig,
    grid: BattleGrid,
    cells: Vec<Cell>,
    active: IndexMap<CellIndex, ActiveCell>,
    units: IndexMap<UnitId, UnitRecord>,
    pending_moves: Vec<(UnitId, WorldPos)>,
    scene: Box<dyn Scene>,
    terrain: Box<dyn Terrain>,
    theater: Theater,
    camera: Option<WorldPos>,
    origin: WorldPos,
    tick: TickId,
    /// Accumulates between ticks; finalized and swapped out by `on_update`.
    metrics: UpdateMetrics,
    last_metrics: UpdateMetrics,
}

impl VirtualBattlefield {
    /// Create a battlefield from a validated configuration.
    pub fn new(
        config: BattlefieldConfig,
        scene: Box<dyn Scene>,
        terrain: Box<dyn Terrain>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let grid = BattleGrid::new(config.cols, config.rows, config.cell_size_m)?;
        let cells = (0..grid.cell_count()).map(|_| Cell::new()).collect();
        Ok(Self {
            config,
            grid,
            cells,
            active: IndexMap::new(),
            units: IndexMap::new(),
            pending_moves: Vec::new(),
            scene,
            terrain,
            theater: Theater::default(),
            camera: None,
            origin: WorldPos::default(),
            tick: TickId(0),
            metrics: UpdateMetrics::default(),
            last_metrics: UpdateMetrics::default(),
        })
    }

    // ── Theater ─────────────────────────────────────────────────

    /// Replace the theater, clearing every cell and redistributing the new
    /// theater's feature groups by position.
    ///
    /// Fails if any units are registered. Trackers still unwinding from
    /// earlier bubbles are driven to completion first, so no scene state is
    /// stranded.
    pub fn set_theater(&mut self, theater: Theater) -> Result<(), BattlefieldError> {
        if !self.units.is_empty() {
            return Err(BattlefieldError::TheaterChangeWithUnits {
                units: self.units.len(),
            });
        }
        self.finish_active_cells();
        for cell in &mut self.cells {
            *cell = Cell::new();
        }
        for feature in theater.feature_groups() {
            let index = self.grid.cell_at(feature.borrow().position());
            self.cells[index.0 as usize].add_feature_group(feature.clone());
        }
        self.theater = theater;
        Ok(())
    }

    /// The current theater.
    pub fn theater(&self) -> &Theater {
        &self.theater
    }

    /// Insert one feature group into the current theater and its cell.
    ///
    /// If the target cell is already active the feature lands on the
    /// pending side of its walkers and will be promoted incrementally.
    pub fn add_feature_group(&mut self, feature: FeatureHandle) {
        let index = self.grid.cell_at(feature.borrow().position());
        let cell = &mut self.cells[index.0 as usize];
        cell.add_feature_group(feature.clone());
        if let Some(tracker) = self.active.get_mut(&index) {
            tracker.check_feature_added(cell.feature_groups().len());
        }
        self.theater.add_feature_group(feature);
    }

    // ── Unit registry ───────────────────────────────────────────

    /// Register a unit, inserting it into the cell containing its position.
    ///
    /// A human unit immediately projects its air and mud bubbles.
    ///
    /// # Panics
    ///
    /// Panics if the unit's position lies outside the grid.
    pub fn add_unit(&mut self, handle: UnitHandle) -> Result<(), BattlefieldError> {
        let (id, pos, human) = {
            let unit = handle.borrow();
            (unit.id(), unit.position(), unit.is_human())
        };
        if self.units.contains_key(&id) {
            return Err(BattlefieldError::DuplicateUnit { id });
        }
        let cell = self.grid.cell_at(pos);
        self.insert_unit_into_cell(cell, handle.clone());
        self.units.insert(
            id,
            UnitRecord {
                handle,
                cell,
                human,
                marked_for_delete: false,
                air_overlap: Vec::new(),
                mud_overlap: Vec::new(),
            },
        );
        if human {
            self.refresh_bubbles(id, pos);
        }
        Ok(())
    }

    /// Mark a unit for deletion. Its bubbles are withdrawn immediately; the
    /// unit itself stays in its cell list until
    /// [`remove_units_marked_for_delete`](Self::remove_units_marked_for_delete)
    /// sweeps it, so in-flight walks stay sound.
    ///
    /// Marking an already-marked unit is a no-op.
    pub fn delete_unit(&mut self, id: UnitId) -> Result<(), BattlefieldError> {
        let human = {
            let record = self
                .units
                .get_mut(&id)
                .ok_or(BattlefieldError::UnknownUnit { id })?;
            if record.marked_for_delete {
                return Ok(());
            }
            record.marked_for_delete = true;
            record.human
        };
        if human {
            self.withdraw_bubbles(id);
        }
        Ok(())
    }

    /// Sweep every unit marked for deletion out of its cell and the
    /// registry, routing each removal through the cell's walkers. A swept
    /// unit still deaggregated is re-aggregated on the spot.
    ///
    /// Returns how many units were removed.
    pub fn remove_units_marked_for_delete(&mut self) -> usize {
        let marked: Vec<UnitId> = self
            .units
            .iter()
            .filter(|(_, r)| r.marked_for_delete)
            .map(|(id, _)| *id)
            .collect();
        for id in &marked {
            self.remove_unit_now(*id);
        }
        marked.len()
    }

    /// Remove every registered unit, marked or not.
    pub fn remove_all_units(&mut self) {
        let ids: Vec<UnitId> = self.units.keys().copied().collect();
        for id in ids {
            self.withdraw_bubbles(id);
            self.remove_unit_now(id);
        }
        self.pending_moves.clear();
    }

    /// Tear the battlefield down: remove every registered unit, drive all
    /// remaining trackers to completion, and detach every scene node.
    ///
    /// The counterpart of [`new`](Self::new). The battlefield is empty but
    /// usable afterwards; the theater and its features stay loaded.
    pub fn cleanup(&mut self) {
        self.remove_all_units();
        self.finish_active_cells();
    }

    /// Toggle whether a unit is an observer. Turning a unit human projects
    /// its bubbles from its current position; turning it back withdraws
    /// them. A no-op on marked-for-delete units.
    pub fn set_human(&mut self, id: UnitId, human: bool) -> Result<(), BattlefieldError> {
        let pos = {
            let record = self
                .units
                .get_mut(&id)
                .ok_or(BattlefieldError::UnknownUnit { id })?;
            if record.marked_for_delete || record.human == human {
                return Ok(());
            }
            record.human = human;
            record.handle.borrow().position()
        };
        if human {
            self.refresh_bubbles(id, pos);
        } else {
            self.withdraw_bubbles(id);
        }
        Ok(())
    }

    /// Queue a unit move to `pos`. Cell migration and bubble re-projection
    /// happen on the next [`on_update`](Self::on_update); moves queued for a
    /// unit deleted in the meantime are dropped.
    pub fn move_unit(&mut self, id: UnitId, pos: WorldPos) -> Result<(), BattlefieldError> {
        if !self.units.contains_key(&id) {
            return Err(BattlefieldError::UnknownUnit { id });
        }
        self.pending_moves.push((id, pos));
        Ok(())
    }

    /// Shared handle to a registered unit.
    pub fn unit(&self, id: UnitId) -> Option<&UnitHandle> {
        self.units.get(&id).map(|r| &r.handle)
    }

    /// Grid index of the cell a unit currently occupies.
    pub fn unit_cell(&self, id: UnitId) -> Option<CellIndex> {
        self.units.get(&id).map(|r| r.cell)
    }

    /// Number of registered units, including those marked for deletion.
    pub fn unit_count(&self) -> usize {
        self.units.len()
    }

    // ── Tick loop ───────────────────────────────────────────────

    /// Advance the battlefield one tick.
    ///
    /// `_dt` is accepted for host frame-loop symmetry; transition work is
    /// quantized per element, not per second, so the value is not consumed.
    ///
    /// # Panics
    ///
    /// Panics if a queued move targets a position outside the grid.
    pub fn on_update(&mut self, _dt: f32) {
        let started = Instant::now();

        // Phase 1: queued moves.
        let moves = std::mem::take(&mut self.pending_moves);
        for (id, pos) in moves {
            let (old_cell, human, marked) = match self.units.get(&id) {
                Some(r) => (r.cell, r.human, r.marked_for_delete),
                None => continue,
            };
            if marked {
                continue;
            }
            let new_cell = self.grid.cell_at(pos);
            if new_cell != old_cell {
                if let Some(handle) = self.remove_unit_from_cell(old_cell, id) {
                    self.insert_unit_into_cell(new_cell, handle);
                }
                if let Some(record) = self.units.get_mut(&id) {
                    record.cell = new_cell;
                }
            }
            if human {
                self.refresh_bubbles(id, pos);
            }
            if new_cell != old_cell {
                // Reconcile the arriving unit with its new cell. The unit
                // lands on the pending side of the destination's walkers,
                // which only ever unwind their own promoted prefix: a cell
                // without the matching bubble class would never demote it,
                // and a hiding cell would never clear a near flag set by
                // the old cell. Both are settled here; a visible
                // destination re-shows the unit when its walker reaches it.
                let handle = self.units[&id].handle.clone();
                let mut unit = handle.borrow_mut();
                let covered = self.active.get(&new_cell).is_some_and(|t| {
                    match unit.detail_class() {
                        DetailClass::Air => t.in_air_bubble(),
                        DetailClass::Mud => t.in_mud_bubble(),
                    }
                });
                if !covered && !unit.is_aggregated() {
                    unit.aggregate();
                }
                self.scene.set_near_object(id, false);
            }
            self.metrics.moves_processed += 1;
        }

        // Phase 2: visibility and incremental walks.
        let quantum = self.config.walk_quantum;
        let camera = self.camera;
        let visual_radius = self.config.visual_radius_m;
        for (index, tracker) in self.active.iter_mut() {
            let cell = &self.cells[index.0 as usize];
            let show = tracker.bubble_count() > 0
                && camera.map_or(true, |c| tracker.center().distance(c) <= visual_radius);
            tracker.set_visible(show);
            let stats = tracker.update(cell, self.scene.as_mut(), quantum);
            self.metrics.promotions += stats.promoted;
            self.metrics.demotions += stats.demoted;
        }

        // Phase 3: destroy fully-unwound trackers.
        let mut done: SmallVec<[CellIndex; 8]> = SmallVec::new();
        for (index, tracker) in &self.active {
            if tracker.can_cleanup(&self.cells[index.0 as usize]) {
                done.push(*index);
            }
        }
        for index in done {
            if let Some(mut tracker) = self.active.shift_remove(&index) {
                tracker.cleanup(&self.cells[index.0 as usize], self.scene.as_mut());
                self.cells[index.0 as usize].set_active(None);
                self.metrics.cells_cleaned += 1;
            }
        }

        self.tick = TickId(self.tick.0 + 1);
        self.metrics.active_cells = self.active.len() as u32;
        self.metrics.total_us = started.elapsed().as_micros() as u64;
        self.last_metrics = std::mem::take(&mut self.metrics);
    }

    /// The tick counter: how many `on_update` calls have completed.
    pub fn current_tick(&self) -> TickId {
        self.tick
    }

    /// Metrics from the most recent completed tick.
    pub fn last_metrics(&self) -> &UpdateMetrics {
        &self.last_metrics
    }

    // ── Camera and origin ───────────────────────────────────────

    /// Set or clear the camera position gating cell visibility. With no
    /// camera, every in-bubble cell is shown.
    pub fn set_camera(&mut self, camera: Option<WorldPos>) {
        self.camera = camera;
    }

    /// The current camera position, if set.
    pub fn camera(&self) -> Option<WorldPos> {
        self.camera
    }

    /// Set the world-coordinate offset of the theater's anchor.
    ///
    /// Unit, camera, and cell positions are theater-relative and never
    /// rebased. Terrain queries arrive in the host's world coordinates
    /// (from flight and vehicle models) and are translated by this offset
    /// before reaching the terrain backend.
    pub fn update_origin(&mut self, origin: WorldPos) {
        self.origin = origin;
    }

    /// The recorded world-coordinate offset of the theater's anchor.
    pub fn origin(&self) -> WorldPos {
        self.origin
    }

    // ── Terrain and scene ───────────────────────────────────────

    /// Ground height at world `(x, y)`, meters. The query is rebased by
    /// the recorded origin, and degrades to sea level when the terrain
    /// backend has no data there.
    pub fn ground_elevation(&self, x: f32, y: f32) -> f32 {
        self.terrain
            .elevation(x - self.origin.x, y - self.origin.y)
            .unwrap_or(0.0)
    }

    /// Ground height plus surface normal at world `(x, y)`, degrading to a
    /// flat sea-level surface outside the terrain data.
    pub fn ground_elevation_and_normal(&self, x: f32, y: f32) -> (f32, [f32; 3]) {
        self.terrain
            .elevation_and_normal(x - self.origin.x, y - self.origin.y)
            .unwrap_or((0.0, [0.0, 0.0, 1.0]))
    }

    /// The attached scene graph.
    pub fn scene(&self) -> &dyn Scene {
        self.scene.as_ref()
    }

    /// Replace the scene graph, returning the previous one. Nodes attached
    /// so far stay in the old scene; intended for host setup before any
    /// cells activate.
    pub fn set_scene(&mut self, scene: Box<dyn Scene>) -> Box<dyn Scene> {
        std::mem::replace(&mut self.scene, scene)
    }

    // ── Grid and cell queries ───────────────────────────────────

    /// The battlefield grid.
    pub fn grid(&self) -> &BattleGrid {
        &self.grid
    }

    /// The configuration the battlefield was built from.
    pub fn config(&self) -> &BattlefieldConfig {
        &self.config
    }

    /// The cell at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of range.
    pub fn cell(&self, index: CellIndex) -> &Cell {
        &self.cells[index.0 as usize]
    }

    /// The active tracker for `index`, while one exists.
    pub fn active_cell(&self, index: CellIndex) -> Option<&ActiveCell> {
        self.active.get(&index)
    }

    /// Number of cells currently tracked by an [`ActiveCell`].
    pub fn active_cell_count(&self) -> usize {
        self.active.len()
    }

    /// Whether at least one air bubble overlaps the cell at `index`.
    pub fn in_air_bubble(&self, index: CellIndex) -> bool {
        self.active.get(&index).is_some_and(ActiveCell::in_air_bubble)
    }

    /// Whether at least one mud bubble overlaps the cell at `index`.
    pub fn in_mud_bubble(&self, index: CellIndex) -> bool {
        self.active.get(&index).is_some_and(ActiveCell::in_mud_bubble)
    }

    /// Whether the cell at `index` is currently being shown.
    pub fn is_cell_visible(&self, index: CellIndex) -> bool {
        self.active.get(&index).is_some_and(ActiveCell::is_visible)
    }

    // ── Internal: list mutation discipline ──────────────────────

    /// Append a unit to a cell's list, routing the append through the
    /// active tracker's walkers when one exists.
    fn insert_unit_into_cell(&mut self, index: CellIndex, handle: UnitHandle) {
        let cell = &mut self.cells[index.0 as usize];
        cell.add_unit(handle);
        if let Some(tracker) = self.active.get_mut(&index) {
            tracker.check_unit_added(cell.units().len());
        }
    }

    /// Remove a unit from a cell's list, routing the removal through the
    /// active tracker's walkers **before** the list shrinks.
    fn remove_unit_from_cell(&mut self, index: CellIndex, id: UnitId) -> Option<UnitHandle> {
        let cell = &mut self.cells[index.0 as usize];
        let at = cell.unit_index(id)?;
        if let Some(tracker) = self.active.get_mut(&index) {
            tracker.check_unit_removing(at, cell.units().len());
        }
        Some(cell.remove_unit_at(at))
    }

    /// Unconditional removal: withdraw bubbles, pull the unit from its
    /// cell, re-aggregate if needed, drop the registry entry.
    fn remove_unit_now(&mut self, id: UnitId) {
        self.withdraw_bubbles(id);
        let cell = match self.units.get(&id) {
            Some(r) => r.cell,
            None => return,
        };
        if let Some(handle) = self.remove_unit_from_cell(cell, id) {
            let mut unit = handle.borrow_mut();
            if !unit.is_aggregated() {
                unit.aggregate();
            }
        }
        self.scene.set_near_object(id, false);
        self.units.shift_remove(&id);
    }

    // ── Internal: bubble projection ─────────────────────────────

    /// Recompute both bubble footprints for the observer at `pos` and apply
    /// the symmetric difference against the previously projected cells.
    fn refresh_bubbles(&mut self, id: UnitId, pos: WorldPos) {
        let air_new = self.grid.cells_within(pos, self.config.air_bubble_radius_m);
        let mud_new = self.grid.cells_within(pos, self.config.mud_bubble_radius_m);
        let (air_old, mud_old) = {
            let record = self
                .units
                .get_mut(&id)
                .expect("bubble refresh for unregistered unit");
            (
                std::mem::replace(&mut record.air_overlap, air_new.clone()),
                std::mem::replace(&mut record.mud_overlap, mud_new.clone()),
            )
        };
        let (added, removed) = diff_sorted(&air_old, &air_new);
        for index in added {
            self.add_bubble(index, DetailClass::Air);
        }
        for index in removed {
            self.remove_bubble(index, DetailClass::Air);
        }
        let (added, removed) = diff_sorted(&mud_old, &mud_new);
        for index in added {
            self.add_bubble(index, DetailClass::Mud);
        }
        for index in removed {
            self.remove_bubble(index, DetailClass::Mud);
        }
    }

    /// Withdraw every cell overlap this unit has projected. Idempotent:
    /// the stored overlap lists are drained, so a second call is a no-op.
    fn withdraw_bubbles(&mut self, id: UnitId) {
        let (air, mud) = match self.units.get_mut(&id) {
            Some(record) => (
                std::mem::take(&mut record.air_overlap),
                std::mem::take(&mut record.mud_overlap),
            ),
            None => return,
        };
        for index in air {
            self.remove_bubble(index, DetailClass::Air);
        }
        for index in mud {
            self.remove_bubble(index, DetailClass::Mud);
        }
    }

    /// Count one bubble overlap on a cell, creating its tracker on the
    /// 0→1 activation edge.
    fn add_bubble(&mut self, index: CellIndex, class: DetailClass) {
        if !self.active.contains_key(&index) {
            let center = self.grid.center(index);
            let tracker = ActiveCell::new(index, center, self.scene.as_mut());
            self.active.insert(index, tracker);
            self.cells[index.0 as usize].set_active(Some(index));
            self.metrics.cells_activated += 1;
        }
        let tracker = self
            .active
            .get_mut(&index)
            .expect("tracker inserted above");
        match class {
            DetailClass::Air => tracker.add_air_bubble(),
            DetailClass::Mud => tracker.add_mud_bubble(),
        }
        self.metrics.bubbles_added += 1;
    }

    /// Withdraw one bubble overlap from a cell. Tracker destruction is
    /// deferred to the tick's cleanup pass so walkers unwind first.
    ///
    /// # Panics
    ///
    /// Panics if the cell has no tracker or no bubble of this class; a
    /// withdrawal without a matching projection is a bookkeeping bug.
    fn remove_bubble(&mut self, index: CellIndex, class: DetailClass) {
        let tracker = self
            .active
            .get_mut(&index)
            .expect("bubble withdrawn from inactive cell");
        match class {
            DetailClass::Air => tracker.remove_air_bubble(),
            DetailClass::Mud => tracker.remove_mud_bubble(),
        }
        self.metrics.bubbles_removed += 1;
    }

    /// Drive every remaining tracker to completion and destroy it.
    /// Requires all bubbles withdrawn (no registered units).
    fn finish_active_cells(&mut self) {
        let indices: Vec<CellIndex> = self.active.keys().copied().collect();
        for index in indices {
            if let Some(mut tracker) = self.active.shift_remove(&index) {
                tracker.set_visible(false);
                loop {
                    let cell = &self.cells[index.0 as usize];
                    if !tracker.needs_update(cell) {
                        break;
                    }
                    tracker.update(cell, self.scene.as_mut(), self.config.walk_quantum);
                }
                tracker.cleanup(&self.cells[index.0 as usize], self.scene.as_mut());
                self.cells[index.0 as usize].set_active(None);
            }
        }
    }
}

/// Diff two sorted index lists into `(added, removed)`: entries only in
/// `new`, and entries only in `old`.
fn diff_sorted(
    old: &[CellIndex],
    new: &[CellIndex],
) -> (SmallVec<[CellIndex; 16]>, SmallVec<[CellIndex; 16]>) {
    let mut added = SmallVec::new();
    let mut removed = SmallVec::new();
    let (mut i, mut j) = (0, 0);
    while i < old.len() && j < new.len() {
        match old[i].cmp(&new[j]) {
            std::cmp::Ordering::Less => {
                removed.push(old[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                added.push(new[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                i += 1;
                j += 1;
            }
        }
    }
    removed.extend_from_slice(&old[i..]);
    added.extend_from_slice(&new[j..]);
    (added, removed)
}
