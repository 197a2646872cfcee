//! Bulk re-publish normalization.
//!
//! When list contents change mid drag (virtualized lists, remote updates),
//! the provider re-measures and hands over a whole new snapshot. Items that
//! were displaced at measurement time were measured at their pushed
//! positions; the impact math works on resting geometry, so those
//! measurements are translated back before the snapshot replaces the old
//! one.

use crate::dimension_map::DimensionMap;
use crate::error::DragError;
use crate::impact::DragImpact;
use crate::lift::{LiftEffect, current_offset_of};
use crate::types::DraggableId;

/// Validates and normalizes a mid-drag dimension snapshot.
///
/// Each re-measured draggable is shifted back by whatever translation the
/// live impact and the lift effect say it currently carries, restoring the
/// unimpacted resting geometry the calculators expect. The dragging item
/// itself is expected to be measured at its resting placeholder.
///
/// Fatal conditions (the caller must abort the drag):
/// - the dragging item is missing from the new snapshot;
/// - its home droppable is missing.
///
/// A draggable referencing an unknown droppable violates the snapshot
/// provider's contract and is rejected the same way.
pub fn republish(
    mut dimensions: DimensionMap,
    critical_id: &DraggableId,
    lift_effect: &LiftEffect,
    previous_impact: &DragImpact,
) -> Result<DimensionMap, DragError> {
    if !dimensions.draggables.contains_key(critical_id) {
        return Err(DragError::MissingCritical(critical_id.clone()));
    }
    if !dimensions.droppables.contains_key(&lift_effect.home_id) {
        return Err(DragError::MissingHome(lift_effect.home_id.clone()));
    }
    for draggable in dimensions.draggables.values() {
        if !dimensions.droppables.contains_key(&draggable.droppable_id) {
            return Err(DragError::UnknownDroppable {
                draggable: draggable.id.clone(),
                droppable: draggable.droppable_id.clone(),
            });
        }
    }

    for draggable in dimensions.draggables.values_mut() {
        if draggable.id == *critical_id {
            continue;
        }
        let offset = current_offset_of(&draggable.id, previous_impact, lift_effect);
        if offset.is_zero() {
            continue;
        }
        let back = offset.negate();
        draggable.client = draggable.client.shift(back);
        draggable.page = draggable.page.shift(back);
    }

    ddebug!(
        draggables = dimensions.draggables.len(),
        droppables = dimensions.droppables.len(),
        "republish"
    );

    Ok(dimensions)
}
