//! Combine impacts: merging the dragging item into a sibling instead of
//! reordering around it.

use crate::geometry::Point;
use crate::impact::{Combine, DragImpact, ImpactTarget};
use crate::reorder::ListArgs;
use crate::types::{Motion, UserDirection};

/// How much of a sibling's extent accepts a combine. Approaching forward,
/// the front two thirds combine and the back third reorders; approaching
/// backward it is mirrored.
pub(crate) const COMBINE_BAND: f64 = 2.0 / 3.0;

/// Looks for a combine target under the current center.
///
/// Siblings are tested at their displaced positions, so a sibling that has
/// already moved aside is combined with where it currently sits. The
/// approach direction is frozen per candidate: while the previous impact was
/// combining with the same sibling, its recorded `when_entered` keeps
/// deciding the threshold, so reversing direction inside the zone does not
/// flip it. The direction only re-records when the candidate changes.
///
/// Returns `None` when the destination does not combine, the center is over
/// no sibling, or the center sits in the reorder band.
pub(crate) fn try_combine(
    args: &ListArgs<'_>,
    user_direction: UserDirection,
    previous_impact: &DragImpact,
) -> Option<DragImpact> {
    if !args.destination.is_combine_enabled {
        return None;
    }

    let axis = args.destination.axis;
    let current_main = axis.main(args.current_center);

    for sibling in args.insiders {
        if sibling.id == args.draggable.id {
            continue;
        }

        let shift = if previous_impact.movement.is_displaced(&sibling.id) {
            previous_impact.movement.displaced_by.point
        } else {
            Point::ZERO
        };
        let border_box = sibling.page.border_box.shift(shift);
        let start = axis.start(border_box);
        let end = axis.end(border_box);
        if current_main < start || current_main > end {
            continue;
        }

        let when_entered = match previous_impact.combine_target() {
            Some(combine) if combine.draggable_id == sibling.id => combine.when_entered,
            _ => user_direction,
        };

        let band = axis.size(border_box) * COMBINE_BAND;
        let is_combining = match when_entered.along(axis) {
            Motion::Forward => current_main < start + band,
            Motion::Backward => current_main > end - band,
        };
        if !is_combining {
            return None;
        }

        return Some(DragImpact {
            // Combining adds no displacement beyond what the sibling's list
            // already had.
            movement: previous_impact.movement.clone(),
            direction: Some(axis),
            target: Some(ImpactTarget::Combine(Combine {
                draggable_id: sibling.id.clone(),
                droppable_id: args.destination.id.clone(),
                when_entered,
            })),
        });
    }

    None
}
