//! Test utilities and mock types for Skirmish development.
//!
//! Provides mock implementations of the core collaborator traits
//! ([`Unit`], [`FeatureGroup`], [`Scene`], [`Terrain`]) plus handle
//! constructors for quickly populating cells and battlefields in tests.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use skirmish_core::{
    DetailClass, FeatureGroup, FeatureHandle, Scene, SceneNodeId, Terrain, Unit, UnitHandle,
    UnitId, WorldPos,
};

/// Mock implementation of [`Unit`].
///
/// All fields are public so tests can reposition units or flip the human
/// flag directly through the `Rc<RefCell<…>>` handle. The call counters
/// record every lifecycle callback, letting tests distinguish "left in the
/// right state" from "called exactly once".
pub struct TestUnit {
    pub id: UnitId,
    pub pos: WorldPos,
    pub class: DetailClass,
    pub human: bool,
    pub aggregated: bool,
    pub aggregate_calls: u32,
    pub deaggregate_calls: u32,
}

impl TestUnit {
    pub fn new(id: UnitId, pos: WorldPos, class: DetailClass) -> Self {
        Self {
            id,
            pos,
            class,
            human: false,
            aggregated: true,
            aggregate_calls: 0,
            deaggregate_calls: 0,
        }
    }

    /// A shared handle to a fresh unit, for tests that keep a concrete
    /// `TestUnit` reference alongside the trait-object handle.
    pub fn handle(id: UnitId, pos: WorldPos, class: DetailClass) -> Rc<RefCell<TestUnit>> {
        Rc::new(RefCell::new(Self::new(id, pos, class)))
    }
}

impl Unit for TestUnit {
    fn id(&self) -> UnitId {
        self.id
    }

    fn position(&self) -> WorldPos {
        self.pos
    }

    fn detail_class(&self) -> DetailClass {
        self.class
    }

    fn is_human(&self) -> bool {
        self.human
    }

    fn is_aggregated(&self) -> bool {
        self.aggregated
    }

    fn aggregate(&mut self) {
        self.aggregated = true;
        self.aggregate_calls += 1;
    }

    fn deaggregate(&mut self) {
        self.aggregated = false;
        self.deaggregate_calls += 1;
    }
}

/// A non-human unit handle.
pub fn unit(id: UnitId, pos: WorldPos, class: DetailClass) -> UnitHandle {
    TestUnit::handle(id, pos, class)
}

/// A human (observer) unit handle.
pub fn human_unit(id: UnitId, pos: WorldPos, class: DetailClass) -> UnitHandle {
    let u = TestUnit::handle(id, pos, class);
    u.borrow_mut().human = true;
    u
}

/// Mock implementation of [`FeatureGroup`] with a pre-allocated scene node.
pub struct TestFeature {
    pub pos: WorldPos,
    pub aggregated: bool,
    pub node: SceneNodeId,
}

impl TestFeature {
    pub fn new(pos: WorldPos) -> Self {
        Self {
            pos,
            aggregated: true,
            node: SceneNodeId::next(),
        }
    }
}

impl FeatureGroup for TestFeature {
    fn position(&self) -> WorldPos {
        self.pos
    }

    fn is_aggregated(&self) -> bool {
        self.aggregated
    }

    fn aggregate(&mut self) {
        self.aggregated = true;
    }

    fn deaggregate(&mut self) {
        self.aggregated = false;
    }

    fn scene_node(&self) -> Option<SceneNodeId> {
        Some(self.node)
    }
}

/// A feature-group handle at `pos`.
pub fn feature(pos: WorldPos) -> FeatureHandle {
    Rc::new(RefCell::new(TestFeature::new(pos)))
}

#[derive(Default)]
struct SceneState {
    nodes: HashSet<SceneNodeId>,
    near: HashMap<UnitId, bool>,
}

/// Mock implementation of [`Scene`] recording attach/detach and near/far
/// calls.
///
/// State is shared: cloning yields a second view of the same recording, so
/// a test can hand one clone to a battlefield (which takes the scene by
/// `Box`) and inspect through the other.
#[derive(Clone, Default)]
pub struct RecordingScene {
    state: Rc<RefCell<SceneState>>,
}

impl RecordingScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `node` is currently attached.
    pub fn has_node(&self, node: SceneNodeId) -> bool {
        self.state.borrow().nodes.contains(&node)
    }

    /// Number of currently attached nodes.
    pub fn node_count(&self) -> usize {
        self.state.borrow().nodes.len()
    }

    /// Whether `unit` was last marked near.
    pub fn is_near(&self, unit: UnitId) -> bool {
        self.state.borrow().near.get(&unit).copied().unwrap_or(false)
    }
}

impl Scene for RecordingScene {
    fn add_node(&mut self, node: SceneNodeId) {
        self.state.borrow_mut().nodes.insert(node);
    }

    fn remove_node(&mut self, node: SceneNodeId) {
        self.state.borrow_mut().nodes.remove(&node);
    }

    fn set_near_object(&mut self, unit: UnitId, near: bool) {
        self.state.borrow_mut().near.insert(unit, near);
    }
}

/// Mock implementation of [`Terrain`]: constant elevation over a square
/// extent anchored at the origin, no data outside it.
pub struct FlatTerrain {
    elevation_m: f32,
    extent_m: f32,
}

impl FlatTerrain {
    /// Constant elevation everywhere.
    pub fn new(elevation_m: f32) -> Self {
        Self {
            elevation_m,
            extent_m: f32::INFINITY,
        }
    }

    /// Constant elevation inside `[0, extent_m]²`, `None` outside.
    pub fn bounded(elevation_m: f32, extent_m: f32) -> Self {
        Self {
            elevation_m,
            extent_m,
        }
    }
}

impl Terrain for FlatTerrain {
    fn elevation(&self, x: f32, y: f32) -> Option<f32> {
        if (0.0..=self.extent_m).contains(&x) && (0.0..=self.extent_m).contains(&y) {
            Some(self.elevation_m)
        } else {
            None
        }
    }
}
