//! The lift effect: displacement state frozen at the moment of lift.
//!
//! Lifting an item out of its home list creates an implicit offset: every
//! sibling after it is holding a position that only exists because the
//! dragged item still occupies its resting spot. That set is captured once,
//! at lift, so later calculations can tell "was already part of the lift-time
//! layout" apart from "was displaced by this drag's movement".

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::dimension_map::DimensionMap;
use crate::displacement::{DisplacedBy, DisplacementGroup};
use crate::geometry::Point;
use crate::impact::{DragImpact, ImpactTarget, Location};
use crate::types::{DraggableId, DroppableId};

/// Displacement state captured at lift time. Immutable for the whole drag.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LiftEffect {
    pub home_id: DroppableId,
    /// The dragged item's resting index at lift.
    pub start_index: usize,
    /// Ids after the dragged item in its home list, in index order.
    pub effected: Vec<DraggableId>,
    /// The forward displacement the dragged item's presence accounts for.
    pub displaced_by: DisplacedBy,
}

impl LiftEffect {
    pub fn is_effected(&self, id: &DraggableId) -> bool {
        self.effected.contains(id)
    }
}

/// Captures the lift effect and the initial impact for a lifting draggable.
///
/// The initial impact targets the item's own resting location with no
/// displacement: at lift, every sibling is exactly where it was measured.
pub fn get_lift_effect(
    critical: &DraggableDimension,
    home: &DroppableDimension,
    dimensions: &DimensionMap,
) -> (LiftEffect, DragImpact) {
    let effected: Vec<DraggableId> = dimensions
        .draggables_in_list(&home.id)
        .into_iter()
        .filter(|sibling| sibling.index > critical.index)
        .map(|sibling| sibling.id.clone())
        .collect();

    let lift_effect = LiftEffect {
        home_id: home.id.clone(),
        start_index: critical.index,
        effected,
        displaced_by: DisplacedBy::new(home.axis, home.axis.main(critical.displace_by)),
    };

    let impact = DragImpact {
        movement: DisplacementGroup::none(),
        direction: Some(home.axis),
        target: Some(ImpactTarget::Reorder(Location {
            droppable_id: home.id.clone(),
            index: critical.index,
        })),
    };

    ddebug!(
        id = critical.id.as_str(),
        home = home.id.as_str(),
        index = critical.index,
        effected = lift_effect.effected.len(),
        "get_lift_effect"
    );

    (lift_effect, impact)
}

/// The translation an item should currently have, given the live impact and
/// the lift effect.
///
/// - An item displaced by the impact moves by the impact's displacement.
/// - An item captured at lift collapses backward into the vacated spot while
///   the drag is over some other list (the home gap closes).
/// - Everything else stays put.
pub fn current_offset_of(
    id: &DraggableId,
    impact: &DragImpact,
    lift_effect: &LiftEffect,
) -> Point {
    if impact.movement.is_displaced(id) {
        return impact.movement.displaced_by.point;
    }
    let over_home = impact.droppable_over() == Some(&lift_effect.home_id);
    if !over_home && impact.droppable_over().is_some() && lift_effect.is_effected(id) {
        return lift_effect.displaced_by.point.negate();
    }
    Point::ZERO
}
