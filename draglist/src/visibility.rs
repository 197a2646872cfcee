//! Partial-visibility tests used by displacement animation and keyboard
//! stepping.
//!
//! "Visible" means overlapping with positive area; a rect that merely touches
//! an edge is not visible through it.

use crate::dimension::DroppableDimension;
use crate::geometry::Rect;
use crate::viewport::Viewport;

/// Is any part of `target` inside the droppable's clipped subject?
///
/// The target is corrected by the droppable's frame scroll first, so callers
/// can pass lift-time page geometry without re-deriving it after the frame
/// has scrolled.
pub fn is_partially_visible_in_droppable(target: Rect, droppable: &DroppableDimension) -> bool {
    let Some(active) = droppable.subject.active else {
        return false;
    };
    let shifted = match &droppable.frame {
        Some(frame) => target.shift(frame.scroll.diff.displacement),
        None => target,
    };
    shifted.overlaps(active)
}

/// Is any part of `target` inside the window?
pub fn is_partially_visible_in_viewport(target: Rect, viewport: &Viewport) -> bool {
    target.overlaps(viewport.frame)
}

/// Is any part of `target` inside both the droppable and the window?
pub fn is_partially_visible(
    target: Rect,
    droppable: &DroppableDimension,
    viewport: &Viewport,
) -> bool {
    is_partially_visible_in_droppable(target, droppable)
        && is_partially_visible_in_viewport(target, viewport)
}
