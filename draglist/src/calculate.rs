//! The central calculation: one frame's drag state in, one impact out.

use crate::combine::try_combine;
use crate::destination::get_droppable_over;
use crate::dimension::DraggableDimension;
use crate::dimension_map::DimensionMap;
use crate::geometry::Point;
use crate::impact::DragImpact;
use crate::lift::LiftEffect;
use crate::reorder::{ListArgs, in_foreign_list, in_home_list};
use crate::types::UserDirection;
use crate::viewport::Viewport;

/// Inputs for [`get_drag_impact`]. Everything is borrowed: the calculation
/// owns nothing and mutates nothing.
pub struct ImpactArgs<'a> {
    /// Where the dragging item's border-box center currently is, page space.
    pub page_border_box_center: Point,
    pub draggable: &'a DraggableDimension,
    pub dimensions: &'a DimensionMap,
    pub previous_impact: &'a DragImpact,
    pub viewport: &'a Viewport,
    pub user_direction: UserDirection,
    pub lift_effect: &'a LiftEffect,
}

/// Computes the impact of the current drag position.
///
/// Pure and total: for well-formed input this never panics, and identical
/// inputs produce equal impacts. Structurally impossible states (ids missing
/// from the dimension maps) degrade to [`DragImpact::none`] with a
/// diagnostic; a skipped frame beats a crash mid drag.
pub fn get_drag_impact(args: ImpactArgs<'_>) -> DragImpact {
    let ImpactArgs {
        page_border_box_center,
        draggable,
        dimensions,
        previous_impact,
        viewport,
        user_direction,
        lift_effect,
    } = args;

    let Some(home) = dimensions.droppable(&draggable.droppable_id) else {
        dwarn!(
            draggable = draggable.id.as_str(),
            droppable = draggable.droppable_id.as_str(),
            "get_drag_impact: home droppable missing"
        );
        return DragImpact::none();
    };

    let Some(over_id) = get_droppable_over(
        page_border_box_center,
        &home.kind,
        dimensions,
        previous_impact.droppable_over(),
    ) else {
        dtrace!(draggable = draggable.id.as_str(), "get_drag_impact: over nothing");
        return DragImpact::none();
    };

    let Some(destination) = dimensions.droppable(&over_id) else {
        dwarn!(
            droppable = over_id.as_str(),
            "get_drag_impact: resolved destination missing"
        );
        return DragImpact::none();
    };

    let insiders = dimensions.draggables_in_list(&over_id);
    let list_args = ListArgs {
        current_center: page_border_box_center,
        draggable,
        destination,
        insiders: &insiders,
        previous: &previous_impact.movement,
        viewport,
        lift_effect,
    };

    if let Some(combining) = try_combine(&list_args, user_direction, previous_impact) {
        return combining;
    }

    if over_id == draggable.droppable_id {
        in_home_list(list_args)
    } else {
        in_foreign_list(list_args)
    }
}
