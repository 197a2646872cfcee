//! Discrete keyboard movement: step to the next index, or hop to an
//! adjacent list.
//!
//! These are state transforms of an impact, not geometry scans: no pointer
//! position is consumed. Each call is independent given the previous impact.
//! When the computed landing spot is not visible, the selection stays put
//! and the caller receives a scroll-jump request instead, while the impact
//! is provisionally advanced. Browsers do not guarantee synchronous scroll
//! completion, so "logical index advanced" is decoupled from "visual
//! position settled".

use crate::axis::Axis;
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::dimension_map::DimensionMap;
use crate::displacement::{DisplacedBy, DisplacementArgs, DisplacementGroup, displacement_group};
use crate::error::DragError;
use crate::geometry::Point;
use crate::impact::{DragImpact, ImpactTarget, Location};
use crate::lift::LiftEffect;
use crate::types::DroppableId;
use crate::viewport::Viewport;
use crate::visibility::is_partially_visible;

/// The outcome of a keyboard step.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    /// The selection after the step. Unchanged when a scroll jump is
    /// requested.
    pub page_border_box_center: Point,
    pub impact: DragImpact,
    /// The delta the caller must scroll by to bring the target into view.
    /// `None` when the target was already visible and the selection moved.
    pub scroll_jump_request: Option<Point>,
}

/// Inputs shared by the keyboard transforms.
pub struct StepArgs<'a> {
    pub is_moving_forward: bool,
    /// The current selection (the dragging item's page border-box center).
    pub previous_page_border_box_center: Point,
    pub draggable: &'a DraggableDimension,
    pub dimensions: &'a DimensionMap,
    pub previous_impact: &'a DragImpact,
    pub viewport: &'a Viewport,
    pub lift_effect: &'a LiftEffect,
}

/// Steps the drag to the next or previous index in its current list.
///
/// Clamped to `[0, count - 1]` in the home list and `[0, count]` in a
/// foreign list (one past the end means "after the last item"); a step past
/// the clamp returns `Ok(None)`. Stepping from a combine continues from the
/// combined sibling's index. Calling this without any previous target is a
/// caller bug and is rejected with [`DragError::NoDestination`].
pub fn move_to_next_index(args: StepArgs<'_>) -> Result<Option<MoveResult>, DragError> {
    let location = current_location(args.previous_impact, args.dimensions)
        .ok_or(DragError::NoDestination)?;

    let Some(destination) = args.dimensions.droppable(&location.droppable_id) else {
        dwarn!(
            droppable = location.droppable_id.as_str(),
            "move_to_next_index: destination missing"
        );
        return Ok(None);
    };

    let insiders = args.dimensions.draggables_in_list(&destination.id);
    let is_home = destination.id == args.draggable.droppable_id;
    let upper = if is_home {
        insiders.len().saturating_sub(1)
    } else {
        insiders.len()
    };

    let proposed = if args.is_moving_forward {
        location.index + 1
    } else {
        match location.index.checked_sub(1) {
            Some(index) => index,
            None => return Ok(None),
        }
    };
    if proposed > upper {
        return Ok(None);
    }

    Ok(Some(resolve_step(&args, destination, &insiders, proposed)))
}

/// Moves the drag into the closest enabled same-kind list on the cross axis.
///
/// Returns `Ok(None)` when no list exists in that direction. The landing
/// index is the sibling whose center is closest to the current selection
/// (index 0 for an empty list). Calling this without any previous target is
/// rejected like [`move_to_next_index`].
pub fn move_cross_axis(args: StepArgs<'_>) -> Result<Option<MoveResult>, DragError> {
    let location = current_location(args.previous_impact, args.dimensions)
        .ok_or(DragError::NoDestination)?;

    let Some(source) = args.dimensions.droppable(&location.droppable_id) else {
        dwarn!(
            droppable = location.droppable_id.as_str(),
            "move_cross_axis: source missing"
        );
        return Ok(None);
    };

    let Some(target_id) = best_cross_axis_droppable(source, args.is_moving_forward, args.dimensions)
    else {
        return Ok(None);
    };
    let Some(destination) = args.dimensions.droppable(&target_id) else {
        return Ok(None);
    };

    let axis = destination.axis;
    let insiders = args.dimensions.draggables_in_list(&destination.id);
    let is_home = destination.id == args.draggable.droppable_id;
    let current_main = axis.main(args.previous_page_border_box_center);

    let proposed = match closest_sibling(axis, &insiders, args.draggable, current_main) {
        None => 0,
        Some(sibling) => {
            if is_home {
                sibling.index
            } else if current_main > axis.main(sibling.page.border_box.center()) {
                (sibling.index + 1).min(insiders.len())
            } else {
                sibling.index
            }
        }
    };

    Ok(Some(resolve_step(&args, destination, &insiders, proposed)))
}

/// The index the previous impact stands at: a reorder's location, or the
/// combined sibling's current index.
fn current_location(impact: &DragImpact, dimensions: &DimensionMap) -> Option<Location> {
    match &impact.target {
        Some(ImpactTarget::Reorder(location)) => Some(location.clone()),
        Some(ImpactTarget::Combine(combine)) => {
            let sibling = dimensions.draggable(&combine.draggable_id)?;
            Some(Location {
                droppable_id: combine.droppable_id.clone(),
                index: sibling.index,
            })
        }
        None => None,
    }
}

fn best_cross_axis_droppable(
    source: &DroppableDimension,
    is_moving_forward: bool,
    dimensions: &DimensionMap,
) -> Option<DroppableId> {
    let axis = source.axis;
    let source_cross = axis.cross(source.page.margin_box.center());

    dimensions
        .enabled_droppables()
        .into_iter()
        .filter(|candidate| candidate.id != source.id)
        .filter(|candidate| candidate.kind == source.kind)
        .filter(|candidate| candidate.subject.active.is_some())
        .filter_map(|candidate| {
            let cross = axis.cross(candidate.page.margin_box.center());
            let in_direction = if is_moving_forward {
                cross > source_cross
            } else {
                cross < source_cross
            };
            in_direction.then(|| ((cross - source_cross).abs(), candidate.id.clone()))
        })
        .min_by(|(distance_a, id_a), (distance_b, id_b)| {
            distance_a.total_cmp(distance_b).then_with(|| id_a.cmp(id_b))
        })
        .map(|(_, id)| id)
}

fn closest_sibling<'a>(
    axis: Axis,
    insiders: &[&'a DraggableDimension],
    draggable: &DraggableDimension,
    current_main: f64,
) -> Option<&'a DraggableDimension> {
    insiders
        .iter()
        .filter(|sibling| sibling.id != draggable.id)
        .min_by(|a, b| {
            let da = (current_main - axis.main(a.page.border_box.center())).abs();
            let db = (current_main - axis.main(b.page.border_box.center())).abs();
            da.total_cmp(&db).then(a.index.cmp(&b.index))
        })
        .copied()
}

/// Builds the advanced impact and landing center for `proposed`, then runs
/// the visibility gate.
fn resolve_step(
    args: &StepArgs<'_>,
    destination: &DroppableDimension,
    insiders: &[&DraggableDimension],
    proposed: usize,
) -> MoveResult {
    let axis = destination.axis;
    let draggable = args.draggable;
    let is_home = destination.id == draggable.droppable_id;
    let original_center = draggable.page.border_box.center();

    // Distances from the dragging item's own margin-box edges to its center,
    // so a landing spot can be expressed as a center point.
    let start_to_center =
        axis.main(original_center) - axis.start(draggable.page.margin_box);
    let center_to_end = axis.end(draggable.page.margin_box) - axis.main(original_center);

    let (displaced, displaced_by, will_displace_forward, new_main) = if is_home {
        let start = draggable.index;
        let size = axis.main(draggable.displace_by);
        if proposed > start {
            let displaced: Vec<&DraggableDimension> = insiders
                .iter()
                .filter(|sibling| sibling.index > start && sibling.index <= proposed)
                .copied()
                .collect();
            let landing = displaced
                .last()
                .map(|sibling| axis.end(sibling.page.margin_box) - center_to_end)
                .unwrap_or_else(|| axis.main(original_center));
            (displaced, DisplacedBy::new(axis, -size), false, landing)
        } else if proposed < start {
            let displaced: Vec<&DraggableDimension> = insiders
                .iter()
                .filter(|sibling| sibling.index >= proposed && sibling.index < start)
                .copied()
                .collect();
            let landing = displaced
                .first()
                .map(|sibling| axis.start(sibling.page.margin_box) + start_to_center)
                .unwrap_or_else(|| axis.main(original_center));
            (displaced, DisplacedBy::new(axis, size), true, landing)
        } else {
            (
                Vec::new(),
                DisplacedBy::ZERO,
                false,
                axis.main(original_center),
            )
        }
    } else {
        let size = axis.main(draggable.displace_by);
        let displaced: Vec<&DraggableDimension> = insiders
            .iter()
            .filter(|sibling| sibling.index >= proposed)
            .copied()
            .collect();
        let landing = if insiders.is_empty() {
            axis.start(destination.page.content_box) + start_to_center
        } else if proposed == insiders.len() {
            // One past the end: after the last item.
            axis.end(insiders[insiders.len() - 1].page.margin_box) + start_to_center
        } else {
            axis.start(insiders[proposed].page.margin_box) + start_to_center
        };
        (displaced, DisplacedBy::new(axis, size), true, landing)
    };

    let new_cross = if is_home {
        axis.cross(original_center)
    } else {
        axis.cross(destination.page.content_box.center())
    };
    let new_center = axis.point(new_main, new_cross);

    let movement = if displaced_by == DisplacedBy::ZERO {
        DisplacementGroup::none()
    } else {
        displacement_group(DisplacementArgs {
            axis,
            displaced,
            displaced_by,
            will_displace_forward,
            destination,
            viewport: args.viewport,
            previous: &args.previous_impact.movement,
            lift_effect: args.lift_effect,
            current_center: new_center,
        })
    };

    let impact = DragImpact {
        movement,
        direction: Some(axis),
        target: Some(ImpactTarget::Reorder(Location {
            droppable_id: destination.id.clone(),
            index: proposed,
        })),
    };

    let shifted = draggable
        .page
        .margin_box
        .shift(new_center.subtract(original_center));
    if is_partially_visible(shifted, destination, args.viewport) {
        MoveResult {
            page_border_box_center: new_center,
            impact,
            scroll_jump_request: None,
        }
    } else {
        MoveResult {
            page_border_box_center: args.previous_page_border_box_center,
            impact,
            scroll_jump_request: Some(
                new_center.subtract(args.previous_page_border_box_center),
            ),
        }
    }
}
