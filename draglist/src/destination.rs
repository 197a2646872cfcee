//! Destination resolution: which droppable is the drag currently over?

use crate::dimension_map::DimensionMap;
use crate::geometry::Point;
use crate::types::{DroppableId, DroppableKind};

/// Finds the droppable whose clipped subject contains `target`.
///
/// Only enabled droppables of the dragging item's kind participate. The
/// previously hovered droppable is checked first so that a point near a
/// boundary keeps resolving to the list the user is already over (its
/// subject may also have been grown by a placeholder, which extends the
/// preference). When several subjects contain the point, the smallest area
/// wins, then the lexicographically smaller id, never map iteration order.
pub(crate) fn get_droppable_over(
    target: Point,
    home_kind: &DroppableKind,
    dimensions: &DimensionMap,
    previous_over: Option<&DroppableId>,
) -> Option<DroppableId> {
    if let Some(previous_id) = previous_over
        && let Some(previous) = dimensions.droppable(previous_id)
        && previous.is_enabled
        && &previous.kind == home_kind
        && previous
            .subject
            .active
            .is_some_and(|active| active.contains(target))
    {
        return Some(previous_id.clone());
    }

    dimensions
        .enabled_droppables()
        .into_iter()
        .filter(|droppable| &droppable.kind == home_kind)
        .filter_map(|droppable| {
            let active = droppable.subject.active?;
            active
                .contains(target)
                .then(|| (active.area(), droppable.id.clone()))
        })
        .min_by(|(area_a, id_a), (area_b, id_b)| {
            area_a.total_cmp(area_b).then_with(|| id_a.cmp(id_b))
        })
        .map(|(_, id)| id)
}
