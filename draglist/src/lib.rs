//! A headless drag-and-drop impact engine inspired by react-beautiful-dnd.
//!
//! For adapter-level utilities (frame-throttled auto scrolling, a drag session
//! controller), see the `draglist-adapter` crate.
//!
//! This crate focuses on the pure computation at the heart of list reordering:
//! given a snapshot of every draggable's and droppable's geometry, the dragged
//! item's current selection point, and the previously computed impact, it
//! decides which list is targeted, which index the item would land at, which
//! siblings are displaced (and whether that displacement should animate), or
//! whether the drag is combining with a single target item. It also contains
//! the auto-scroll physics (edge proximity into scroll velocity) and the
//! keyboard step-to-next-index transforms.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - measured border boxes, margins, and scroll frames for every entity
//! - a page-space selection point once per frame while dragging
//! - sinks that apply the scroll commands the engine asks for
//!
//! Everything here is side-effect free: calculators take the previous impact
//! as an argument and return a new value. Two calls with equal inputs return
//! equal outputs.
#![forbid(unsafe_code)]

#[macro_use]
mod macros;

mod autoscroll;
mod axis;
mod calculate;
mod combine;
mod destination;
mod dimension;
mod dimension_map;
mod displacement;
mod error;
mod geometry;
mod impact;
mod lift;
mod publish;
mod reorder;
mod scroll;
mod stepper;
mod types;
mod viewport;
mod visibility;


pub use autoscroll::{
    AutoScrollArgs, AutoScrollConfig, Ease, ScrollRequest, Thresholds, can_partially_scroll,
    get_scroll_request, required_scroll, truncate_scroll,
};
pub use axis::Axis;
pub use calculate::{ImpactArgs, get_drag_impact};
pub use dimension::{
    DraggableDimension, DroppableDimension, DroppableMeasurement, FrameMeasurement,
    PlaceholderInSubject, ScrollFrame, ScrollSize, Subject, add_placeholder, build_draggable,
    build_droppable, remove_placeholder, scroll_droppable,
};
pub use dimension_map::DimensionMap;
pub use displacement::{
    Displacement, DisplacementArgs, DisplacedBy, DisplacementGroup, displacement_group,
};
pub use error::DragError;
pub use geometry::{BoxModel, Point, Rect, Spacing};
pub use impact::{Combine, DragImpact, ImpactTarget, Location};
pub use lift::{LiftEffect, current_offset_of, get_lift_effect};
pub use publish::republish;
pub use scroll::{ScrollDetails, ScrollDiff};
pub use stepper::{MoveResult, StepArgs, move_cross_axis, move_to_next_index};
pub use types::{DraggableId, DroppableId, DroppableKind, Motion, UserDirection};
pub use viewport::{Viewport, scroll_viewport};
pub use visibility::{
    is_partially_visible, is_partially_visible_in_droppable, is_partially_visible_in_viewport,
};
