//! Auto-scroll physics: proximity to a container edge becomes scroll
//! velocity.
//!
//! Both the window and the destination droppable's scroll frame are
//! evaluated. Speed ramps from zero at `start_from` to the configured max at
//! `max_speed_at`, independently per axis and per edge, and the window takes
//! precedence: the droppable frame is only tried when the window cannot
//! move. The decisions here are pure; the once-per-frame throttling and the
//! actual scroll commands live in the adapter crate.

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::dimension_map::DimensionMap;
use crate::geometry::{Point, Rect};
use crate::scroll::ScrollDetails;
use crate::types::DroppableId;
use crate::viewport::Viewport;

/// The shape of the speed ramp between the two thresholds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ease {
    Linear,
    /// The tuned default: speed grows with the square of edge proximity.
    #[default]
    Quadratic,
    Cubic,
}

impl Ease {
    pub fn sample(self, t: f64) -> f64 {
        match self {
            Self::Linear => t,
            Self::Quadratic => t * t,
            Self::Cubic => t * t * t,
        }
    }
}

/// Auto-scroll tuning.
///
/// The defaults are long-standing tuned constants; change them from product
/// requirements, not from first principles.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AutoScrollConfig {
    /// Distance from an edge, as a fraction of container size, at which
    /// scrolling starts.
    pub start_from_percentage: f64,
    /// Distance from an edge, as a fraction of container size, at which the
    /// speed is pinned to `max_pixel_speed`.
    pub max_speed_at_percentage: f64,
    /// Pixels per frame at full speed.
    pub max_pixel_speed: f64,
    pub ease: Ease,
}

impl Default for AutoScrollConfig {
    fn default() -> Self {
        Self {
            start_from_percentage: 0.25,
            max_speed_at_percentage: 0.05,
            max_pixel_speed: 28.0,
            ease: Ease::Quadratic,
        }
    }
}

impl AutoScrollConfig {
    pub fn with_start_from_percentage(mut self, value: f64) -> Self {
        self.start_from_percentage = value;
        self
    }

    pub fn with_max_speed_at_percentage(mut self, value: f64) -> Self {
        self.max_speed_at_percentage = value;
        self
    }

    pub fn with_max_pixel_speed(mut self, value: f64) -> Self {
        self.max_pixel_speed = value;
        self
    }

    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    /// Pixel thresholds for a container of the given size on one axis.
    pub fn thresholds(&self, container_size: f64) -> Thresholds {
        Thresholds {
            start_scrolling_from: container_size * self.start_from_percentage,
            max_scroll_value_at: container_size * self.max_speed_at_percentage,
        }
    }
}

/// Pixel distances from an edge at which scrolling starts and maxes out.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    pub start_scrolling_from: f64,
    pub max_scroll_value_at: f64,
}

/// A scroll the engine wants performed this frame.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollRequest {
    Window(Point),
    Droppable(DroppableId, Point),
}

impl ScrollRequest {
    pub fn delta(&self) -> Point {
        match self {
            Self::Window(delta) => *delta,
            Self::Droppable(_, delta) => *delta,
        }
    }
}

/// Inputs for [`get_scroll_request`].
pub struct AutoScrollArgs<'a> {
    /// The current selection point, page space.
    pub selection: Point,
    pub dragged: &'a DraggableDimension,
    pub viewport: &'a Viewport,
    pub dimensions: &'a DimensionMap,
    /// The droppable the current impact is over, if any.
    pub over: Option<&'a DroppableId>,
    pub config: &'a AutoScrollConfig,
}

fn speed(config: &AutoScrollConfig, thresholds: Thresholds, distance_to_edge: f64) -> f64 {
    if distance_to_edge >= thresholds.start_scrolling_from {
        return 0.0;
    }
    if distance_to_edge <= thresholds.max_scroll_value_at {
        return config.max_pixel_speed;
    }
    let range = thresholds.start_scrolling_from - thresholds.max_scroll_value_at;
    let percentage = (thresholds.start_scrolling_from - distance_to_edge) / range;
    config.max_pixel_speed * config.ease.sample(percentage)
}

/// Signed speed on one axis, from the distances to its two edges.
///
/// An item larger than the container on this axis suppresses scrolling
/// entirely: there is no meaningful "closer to an edge" when the item spans
/// the whole container. The other axis is unaffected.
fn axis_speed(
    config: &AutoScrollConfig,
    distance_to_start: f64,
    distance_to_end: f64,
    container_size: f64,
    item_size: f64,
) -> f64 {
    if item_size > container_size {
        return 0.0;
    }
    let thresholds = config.thresholds(container_size);
    if distance_to_end < distance_to_start {
        speed(config, thresholds, distance_to_end)
    } else {
        -speed(config, thresholds, distance_to_start)
    }
}

/// The raw scroll velocity a container asks for, before checking whether the
/// container can actually move. `None` when both axes are still.
pub fn required_scroll(
    config: &AutoScrollConfig,
    container: Rect,
    center: Point,
    item_size: Point,
) -> Option<Point> {
    let x = axis_speed(
        config,
        center.x - container.left,
        container.right - center.x,
        container.width(),
        item_size.x,
    );
    let y = axis_speed(
        config,
        center.y - container.top,
        container.bottom - center.y,
        container.height(),
        item_size.y,
    );
    let scroll = Point::new(x, y);
    (!scroll.is_zero()).then_some(scroll)
}

/// The part of `change` the container can actually perform, given its
/// current scroll and bounds.
pub fn truncate_scroll(details: &ScrollDetails, change: Point) -> Point {
    let target = details
        .current
        .add(change)
        .clamp_each(Point::ZERO, details.max);
    target.subtract(details.current)
}

/// Can the container move at all in the direction of `change`?
pub fn can_partially_scroll(details: &ScrollDetails, change: Point) -> bool {
    !truncate_scroll(details, change).is_zero()
}

/// A droppable is a frame-scroll candidate when the selection is over its
/// *frame*, not its subject. A list scrolled fully out of view has no
/// active subject, but dragging over its frame must still allow scrolling it
/// back in.
fn best_scrollable_droppable<'a>(
    selection: Point,
    over: Option<&DroppableId>,
    dimensions: &'a DimensionMap,
) -> Option<&'a DroppableDimension> {
    if let Some(id) = over
        && let Some(droppable) = dimensions.droppable(id)
        && droppable.frame.is_some()
    {
        return Some(droppable);
    }

    dimensions
        .enabled_droppables()
        .into_iter()
        .filter(|droppable| {
            droppable
                .frame
                .as_ref()
                .is_some_and(|frame| frame.page_margin_box.contains(selection))
        })
        .min_by(|a, b| {
            let area_a = a.page.margin_box.area();
            let area_b = b.page.margin_box.area();
            area_a.total_cmp(&area_b).then_with(|| a.id.cmp(&b.id))
        })
}

/// Decides this frame's scroll, if any: the window when it can still move,
/// otherwise the best scrollable droppable frame.
pub fn get_scroll_request(args: AutoScrollArgs<'_>) -> Option<ScrollRequest> {
    let AutoScrollArgs {
        selection,
        dragged,
        viewport,
        dimensions,
        over,
        config,
    } = args;

    let item_size = Point::new(
        dragged.page.margin_box.width(),
        dragged.page.margin_box.height(),
    );

    if let Some(required) = required_scroll(config, viewport.frame, selection, item_size)
        && can_partially_scroll(&viewport.scroll, required)
    {
        return Some(ScrollRequest::Window(required));
    }

    let droppable = best_scrollable_droppable(selection, over, dimensions)?;
    let frame = droppable.frame.as_ref()?;
    let required = required_scroll(config, frame.page_margin_box, selection, item_size)?;
    can_partially_scroll(&frame.scroll, required)
        .then(|| ScrollRequest::Droppable(droppable.id.clone(), required))
}
