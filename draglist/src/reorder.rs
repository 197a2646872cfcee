//! Reorder impacts: where would the dragging item land, and who moves aside.

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::displacement::{DisplacedBy, DisplacementArgs, DisplacementGroup, displacement_group};
use crate::geometry::Point;
use crate::impact::{DragImpact, ImpactTarget, Location};
use crate::lift::LiftEffect;
use crate::viewport::Viewport;

/// Shared inputs for the in-list calculations.
pub(crate) struct ListArgs<'a> {
    pub current_center: Point,
    pub draggable: &'a DraggableDimension,
    pub destination: &'a DroppableDimension,
    /// The destination's resting draggables in index order.
    pub insiders: &'a [&'a DraggableDimension],
    pub previous: &'a DisplacementGroup,
    pub viewport: &'a Viewport,
    pub lift_effect: &'a LiftEffect,
}

/// Impact within the dragging item's own list.
///
/// A sibling counts as passed once the dragging item's center crosses its
/// near edge; for equal-sized items that is half of the sibling's extent,
/// which keeps the index from flapping right at a boundary.
pub(crate) fn in_home_list(args: ListArgs<'_>) -> DragImpact {
    let ListArgs {
        current_center,
        draggable,
        destination,
        insiders,
        previous,
        viewport,
        lift_effect,
    } = args;
    let axis = destination.axis;

    let original_main = axis.main(draggable.page.border_box.center());
    let current_main = axis.main(current_center);
    let is_beyond_start = current_main > original_main;

    let displaced: Vec<&DraggableDimension> = insiders
        .iter()
        .filter(|sibling| sibling.id != draggable.id)
        .filter(|sibling| {
            let border_box = sibling.page.border_box;
            if is_beyond_start {
                // Moving forward: a sibling that started after the dragging
                // item is displaced once the current center passes its start.
                if axis.main(border_box.center()) <= original_main {
                    return false;
                }
                current_main > axis.start(border_box)
            } else {
                // Moving backward: mirrored against the sibling's end edge.
                if axis.main(border_box.center()) >= original_main {
                    return false;
                }
                current_main < axis.end(border_box)
            }
        })
        .copied()
        .collect();

    let index = if is_beyond_start {
        draggable.index + displaced.len()
    } else {
        draggable.index.saturating_sub(displaced.len())
    };

    let size = axis.main(draggable.displace_by);
    let displaced_by = if is_beyond_start {
        DisplacedBy::new(axis, -size)
    } else {
        DisplacedBy::new(axis, size)
    };

    let movement = displacement_group(DisplacementArgs {
        axis,
        displaced,
        displaced_by,
        will_displace_forward: !is_beyond_start,
        destination,
        viewport,
        previous,
        lift_effect,
        current_center,
    });

    DragImpact {
        movement,
        direction: Some(axis),
        target: Some(ImpactTarget::Reorder(Location {
            droppable_id: destination.id.clone(),
            index,
        })),
    }
}

/// Impact within a list the dragging item does not belong to.
///
/// Foreign lists only ever displace forward: the item lands before the first
/// sibling whose trailing edge is past the current center, and that sibling
/// and everything after it move toward the end.
pub(crate) fn in_foreign_list(args: ListArgs<'_>) -> DragImpact {
    let ListArgs {
        current_center,
        draggable,
        destination,
        insiders,
        previous,
        viewport,
        lift_effect,
    } = args;
    let axis = destination.axis;
    let current_main = axis.main(current_center);

    let displaced: Vec<&DraggableDimension> = insiders
        .iter()
        .filter(|sibling| current_main < axis.end(sibling.page.border_box))
        .copied()
        .collect();

    let index = insiders.len() - displaced.len();
    let displaced_by = DisplacedBy::new(axis, axis.main(draggable.displace_by));

    let movement = displacement_group(DisplacementArgs {
        axis,
        displaced,
        displaced_by,
        will_displace_forward: true,
        destination,
        viewport,
        previous,
        lift_effect,
        current_center,
    });

    DragImpact {
        movement,
        direction: Some(axis),
        target: Some(ImpactTarget::Reorder(Location {
            droppable_id: destination.id.clone(),
            index,
        })),
    }
}
