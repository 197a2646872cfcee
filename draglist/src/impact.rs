use crate::axis::Axis;
use crate::displacement::DisplacementGroup;
use crate::types::{DraggableId, DroppableId, UserDirection};

/// A reorder landing spot: which list, and at what index.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub droppable_id: DroppableId,
    pub index: usize,
}

/// A merge target: the dragging item would combine with `draggable_id`
/// instead of reordering.
///
/// `when_entered` freezes the approach direction recorded when the dragging
/// item entered this candidate's zone. It stays frozen across frames for as
/// long as the candidate is held, so reversing direction inside the zone does
/// not flip the combine threshold.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combine {
    pub draggable_id: DraggableId,
    pub droppable_id: DroppableId,
    pub when_entered: UserDirection,
}

/// What the drag would do on drop: reorder into a location, or combine with
/// a single item. The two are mutually exclusive by construction.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ImpactTarget {
    Reorder(Location),
    Combine(Combine),
}

/// The computed result of a drag at a point in time.
///
/// `DragImpact::none()` is the "not over any valid target" sentinel: empty
/// movement, no direction, no target.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DragImpact {
    pub movement: DisplacementGroup,
    /// The main axis of the droppable in play, when there is one.
    pub direction: Option<Axis>,
    pub target: Option<ImpactTarget>,
}

impl DragImpact {
    /// The no-impact sentinel.
    pub fn none() -> Self {
        Self {
            movement: DisplacementGroup::none(),
            direction: None,
            target: None,
        }
    }

    pub fn destination(&self) -> Option<&Location> {
        match &self.target {
            Some(ImpactTarget::Reorder(location)) => Some(location),
            _ => None,
        }
    }

    pub fn combine_target(&self) -> Option<&Combine> {
        match &self.target {
            Some(ImpactTarget::Combine(combine)) => Some(combine),
            _ => None,
        }
    }

    /// The droppable the drag is currently over, whether reordering or
    /// combining.
    pub fn droppable_over(&self) -> Option<&DroppableId> {
        match &self.target {
            Some(ImpactTarget::Reorder(location)) => Some(&location.droppable_id),
            Some(ImpactTarget::Combine(combine)) => Some(&combine.droppable_id),
            None => None,
        }
    }
}
