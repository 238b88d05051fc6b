//! Collaborator interfaces consumed by the scheduling engine.
//!
//! The battlefield core never owns entities, terrain, or the scene graph.
//! It talks to them through the narrow capability traits defined here, and
//! holds entities only as shared, reference-counted handles inside cell
//! lists. The engine is single-threaded and frame-stepped, so handles use
//! `Rc<RefCell<…>>` rather than atomics.

use crate::geom::WorldPos;
use crate::id::{SceneNodeId, UnitId};
use std::cell::RefCell;
use std::rc::Rc;

/// Which detail bubble governs an entity: air or ground ("mud").
///
/// An air bubble deaggregates air-class units; a mud bubble deaggregates
/// ground-class units and static feature groups.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DetailClass {
    /// Airborne entities (aircraft, missiles).
    Air,
    /// Ground entities (vehicles, battalions) and static features.
    Mud,
}

/// Capability interface for a simulated dynamic entity.
///
/// Implemented by whatever concrete unit types the host simulation has.
/// The scheduler consumes exactly this surface: a position for cell
/// mapping, a detail class for bubble routing, a human flag, and the
/// aggregate/deaggregate lifecycle callbacks.
///
/// # Idempotence
///
/// [`aggregate`](Unit::aggregate) and [`deaggregate`](Unit::deaggregate)
/// must tolerate redundant calls. A unit that crosses from one
/// deaggregated cell into another mid-walk is appended to the new cell's
/// pending side and will be promoted again.
pub trait Unit {
    /// Registry identifier for this unit.
    fn id(&self) -> UnitId;

    /// Current ground-plane position, meters.
    fn position(&self) -> WorldPos;

    /// Which bubble class controls this unit's level of detail.
    fn detail_class(&self) -> DetailClass;

    /// Whether a human is controlling this unit.
    fn is_human(&self) -> bool;

    /// Whether the unit is currently in its cheap, aggregated form.
    fn is_aggregated(&self) -> bool;

    /// Collapse to the cheap, low-detail representation.
    fn aggregate(&mut self);

    /// Expand to the fully-simulated representation.
    fn deaggregate(&mut self);
}

/// Shared, non-owning handle to a [`Unit`].
///
/// The object registry owns the entity; cell lists hold clones of this
/// handle only.
pub type UnitHandle = Rc<RefCell<dyn Unit>>;

/// Capability interface for a group of static scene features.
///
/// Feature groups never move, so they keep their cell membership for the
/// lifetime of the battlefield. The same idempotence requirement as
/// [`Unit`] applies to the lifecycle callbacks.
pub trait FeatureGroup {
    /// Ground-plane position of the group, meters.
    fn position(&self) -> WorldPos;

    /// Whether the group is currently in its aggregated form.
    fn is_aggregated(&self) -> bool;

    /// Collapse to the cheap representation.
    fn aggregate(&mut self);

    /// Expand to the fully-built representation.
    fn deaggregate(&mut self);

    /// Scene handle used to show or hide the group, if it has one.
    fn scene_node(&self) -> Option<SceneNodeId>;
}

/// Shared, non-owning handle to a [`FeatureGroup`].
pub type FeatureHandle = Rc<RefCell<dyn FeatureGroup>>;

/// Terrain elevation queries.
///
/// Advisory to unit movement, not correctness-critical to the scheduler:
/// out-of-bounds queries return `None` and callers degrade to a default
/// rather than failing.
pub trait Terrain {
    /// Ground height at `(x, y)`, meters, or `None` outside the data set.
    fn elevation(&self, x: f32, y: f32) -> Option<f32>;

    /// Ground height plus surface normal at `(x, y)`.
    ///
    /// The default implementation reports a flat up normal; terrain
    /// backends with slope data should override it.
    fn elevation_and_normal(&self, x: f32, y: f32) -> Option<(f32, [f32; 3])> {
        self.elevation(x, y).map(|h| (h, [0.0, 0.0, 1.0]))
    }
}

/// Scene-graph attach/detach surface.
///
/// Invoked by active cells when aggregation or visibility transitions
/// require scene work. Implementations must accept node handles they have
/// not seen before (attach) and handles attached earlier (detach).
pub trait Scene {
    /// Add a node to the scene graph.
    fn add_node(&mut self, node: SceneNodeId);

    /// Remove a previously added node from the scene graph.
    fn remove_node(&mut self, node: SceneNodeId);

    /// Mark a unit as near (fully rendered) or far.
    fn set_near_object(&mut self, unit: UnitId, near: bool);
}
