//! The displacement ledger: which items in the destination list are pushed
//! aside, in what order, and whether each push is visible and animated.

use crate::axis::Axis;
use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::geometry::Point;
use crate::lift::LiftEffect;
use crate::types::DraggableId;
use crate::viewport::Viewport;
use crate::visibility::is_partially_visible;

/// One affected draggable.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Displacement {
    pub draggable_id: DraggableId,
    /// False when the post-displacement position is off screen. The item is
    /// still logically displaced, but moving it should not animate: it would
    /// visibly jump when scrolled into view later.
    pub is_visible: bool,
    pub should_animate: bool,
}

/// How far, and which way, affected items are pushed on the main axis.
///
/// The magnitude is the dragging item's margin-box size; the sign is positive
/// when items move toward the end of the list.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplacedBy {
    pub value: f64,
    pub point: Point,
}

impl DisplacedBy {
    pub fn new(axis: Axis, value: f64) -> Self {
        Self {
            value,
            point: axis.unit(value),
        }
    }

    pub const ZERO: DisplacedBy = DisplacedBy {
        value: 0.0,
        point: Point::ZERO,
    };
}

/// The ordered set of displacements for the current destination.
///
/// `displaced` is ordered closest-to-the-dragging-item first (not list
/// order) so that animation staggering downstream reads correctly.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplacementGroup {
    pub displaced: Vec<Displacement>,
    pub displaced_by: DisplacedBy,
    pub will_displace_forward: bool,
}

impl DisplacementGroup {
    pub fn none() -> Self {
        Self {
            displaced: Vec::new(),
            displaced_by: DisplacedBy::ZERO,
            will_displace_forward: false,
        }
    }

    pub fn find(&self, id: &DraggableId) -> Option<&Displacement> {
        self.displaced
            .iter()
            .find(|displacement| &displacement.draggable_id == id)
    }

    pub fn is_displaced(&self, id: &DraggableId) -> bool {
        self.find(id).is_some()
    }
}

/// Inputs for [`displacement_group`].
pub struct DisplacementArgs<'a> {
    pub axis: Axis,
    /// The affected siblings, in any order.
    pub displaced: Vec<&'a DraggableDimension>,
    pub displaced_by: DisplacedBy,
    pub will_displace_forward: bool,
    pub destination: &'a DroppableDimension,
    pub viewport: &'a Viewport,
    /// The previous impact's group, for animation continuity.
    pub previous: &'a DisplacementGroup,
    pub lift_effect: &'a LiftEffect,
    /// The dragging item's current page border-box center, used for the
    /// closest-first ordering.
    pub current_center: Point,
}

/// Classifies the affected siblings into displacement records.
///
/// Displacement is always measured from the unimpacted resting position plus
/// the signed `displaced_by` vector. Visibility requires the pushed position
/// to overlap both the destination's clipped subject and the window.
///
/// Animation rules:
/// - invisible displacement never animates;
/// - a displacement carried over from the previous group animates;
/// - a displacement introduced this frame animates only for items captured
///   in the lift effect, whose motion origin is their lift-time resting
///   spot. Anything else (an item first tracked mid drag) has no trustworthy
///   prior position to animate from.
pub fn displacement_group(args: DisplacementArgs<'_>) -> DisplacementGroup {
    let DisplacementArgs {
        axis,
        mut displaced,
        displaced_by,
        will_displace_forward,
        destination,
        viewport,
        previous,
        lift_effect,
        current_center,
    } = args;

    let reference = axis.main(current_center);
    displaced.sort_by(|a, b| {
        let da = (axis.main(a.page.border_box.center()) - reference).abs();
        let db = (axis.main(b.page.border_box.center()) - reference).abs();
        da.total_cmp(&db).then(a.index.cmp(&b.index))
    });

    let displaced = displaced
        .into_iter()
        .map(|dimension| {
            let target = dimension.page.margin_box.shift(displaced_by.point);
            let is_visible = is_partially_visible(target, destination, viewport);
            let should_animate = if !is_visible {
                false
            } else if previous.find(&dimension.id).is_some() {
                true
            } else {
                lift_effect.is_effected(&dimension.id)
            };
            Displacement {
                draggable_id: dimension.id.clone(),
                is_visible,
                should_animate,
            }
        })
        .collect();

    DisplacementGroup {
        displaced,
        displaced_by,
        will_displace_forward,
    }
}
