//! Builders that turn raw measured boxes into the dimension records the rest
//! of the engine consumes.
//!
//! A dimension is captured once per drag at lift time (and again at bulk
//! re-publish checkpoints) and is immutable between those points. Scroll is
//! folded in afterwards through [`scroll_droppable`] rather than by
//! re-measuring.

use crate::axis::Axis;
use crate::geometry::{BoxModel, Point, Rect, Spacing};
use crate::scroll::ScrollDetails;
use crate::types::{DraggableId, DroppableId, DroppableKind};

/// A single liftable item's measured geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggableDimension {
    pub id: DraggableId,
    /// The droppable this item rests in (its home list).
    pub droppable_id: DroppableId,
    /// Resting index within the home list.
    pub index: usize,
    /// Viewport-relative boxes.
    pub client: BoxModel,
    /// Scroll-adjusted (document-relative) boxes.
    pub page: BoxModel,
    /// How much room this item takes up when it pushes a neighbour aside:
    /// its margin-box size on each axis.
    pub displace_by: Point,
}

/// The measured content extent of a scroll container
/// (`scrollWidth`/`scrollHeight`).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollSize {
    pub width: f64,
    pub height: f64,
}

/// Raw measurement of a droppable's closest scroll container.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FrameMeasurement {
    /// The container's visible border box, viewport relative.
    pub client_border_box: Rect,
    pub scroll_size: ScrollSize,
    /// Scroll offset at measurement time.
    pub scroll: Point,
    /// Whether the container visually clips the droppable (`overflow` other
    /// than `visible`).
    pub should_clip_subject: bool,
}

/// A droppable's scrollable clipping ancestor, resolved into page space.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollFrame {
    /// The visible frame area in page coordinates.
    pub page_margin_box: Rect,
    /// The frame's border box as measured, viewport relative.
    pub frame_client: Rect,
    pub scroll_size: ScrollSize,
    pub should_clip_subject: bool,
    pub scroll: ScrollDetails,
}

/// A placeholder currently making room inside a droppable for a foreign
/// dragging item.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaceholderInSubject {
    /// The dragging item's margin-box size on each axis.
    pub placeholder_size: Point,
    /// How much the subject had to grow beyond its measured extent to fit
    /// the placeholder. `None` when the list already had room.
    pub increased_by: Option<Point>,
    /// The frame's max scroll before the growth, for restoring on exit.
    pub old_frame_max_scroll: Option<Point>,
}

/// What a droppable currently occupies, and how much of that is hittable.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Subject {
    /// The droppable's full page-space extent, ignoring any clipping.
    pub page_margin_box: Rect,
    pub with_placeholder: Option<PlaceholderInSubject>,
    /// The visible, hit-testable area: the full extent (grown by any
    /// placeholder, shifted by frame scroll) intersected with the frame.
    /// `None` when the droppable is fully scrolled out of view.
    pub active: Option<Rect>,
}

impl Subject {
    /// Recomputes the clipped subject from its parts.
    pub(crate) fn compute(
        page_margin_box: Rect,
        with_placeholder: Option<PlaceholderInSubject>,
        axis: Axis,
        frame: Option<&ScrollFrame>,
    ) -> Subject {
        let grown = match with_placeholder
            .as_ref()
            .and_then(|placeholder| placeholder.increased_by)
        {
            Some(increase) => axis.with_end(
                page_margin_box,
                axis.end(page_margin_box) + axis.main(increase),
            ),
            None => page_margin_box,
        };

        let active = match frame {
            None => Some(grown),
            Some(frame) => {
                let shifted = grown.shift(frame.scroll.diff.displacement);
                if frame.should_clip_subject {
                    frame.page_margin_box.intersect(shifted)
                } else {
                    Some(shifted)
                }
            }
        };

        Subject {
            page_margin_box,
            with_placeholder,
            active,
        }
    }
}

/// A container list's measured geometry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppableDimension {
    pub id: DroppableId,
    pub kind: DroppableKind,
    pub axis: Axis,
    pub is_enabled: bool,
    pub is_combine_enabled: bool,
    pub client: BoxModel,
    pub page: BoxModel,
    /// `None` when the droppable has no scrollable ancestor distinct from
    /// itself; the clipped subject then equals the full subject.
    pub frame: Option<ScrollFrame>,
    pub subject: Subject,
}

/// Raw measurement of a droppable, ready for [`build_droppable`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppableMeasurement {
    pub id: DroppableId,
    pub kind: DroppableKind,
    pub axis: Axis,
    pub is_enabled: bool,
    pub is_combine_enabled: bool,
    pub client_border_box: Rect,
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
    pub window_scroll: Point,
    pub frame: Option<FrameMeasurement>,
}

/// Builds a draggable dimension from a viewport-relative measurement.
pub fn build_draggable(
    id: DraggableId,
    droppable_id: DroppableId,
    index: usize,
    client_border_box: Rect,
    margin: Spacing,
    border: Spacing,
    padding: Spacing,
    window_scroll: Point,
) -> DraggableDimension {
    let client = BoxModel::from_border_box(client_border_box, margin, border, padding);
    let page = client.shift(window_scroll);
    let displace_by = Point::new(page.margin_box.width(), page.margin_box.height());
    DraggableDimension {
        id,
        droppable_id,
        index,
        client,
        page,
        displace_by,
    }
}

/// Builds a droppable dimension from a viewport-relative measurement.
///
/// When the droppable is its own scroll container (the measured frame is the
/// droppable's own border box), the visible border box under-reports the true
/// content extent, so the subject is sized from the frame's scroll size
/// instead.
pub fn build_droppable(measurement: DroppableMeasurement) -> DroppableDimension {
    let DroppableMeasurement {
        id,
        kind,
        axis,
        is_enabled,
        is_combine_enabled,
        client_border_box,
        margin,
        border,
        padding,
        window_scroll,
        frame,
    } = measurement;

    let client = BoxModel::from_border_box(client_border_box, margin, border, padding);
    let page = client.shift(window_scroll);

    let is_own_scroll_container = frame
        .as_ref()
        .is_some_and(|f| f.client_border_box == client_border_box);

    let frame = frame.map(|f| {
        let max = Point::new(
            (f.scroll_size.width - f.client_border_box.width()).max(0.0),
            (f.scroll_size.height - f.client_border_box.height()).max(0.0),
        );
        ScrollFrame {
            page_margin_box: f.client_border_box.shift(window_scroll),
            frame_client: f.client_border_box,
            scroll_size: f.scroll_size,
            should_clip_subject: f.should_clip_subject,
            scroll: ScrollDetails::new(f.scroll, max),
        }
    });

    let page_margin_box = match (&frame, is_own_scroll_container) {
        (Some(f), true) => Rect::from_point_and_size(
            page.margin_box.top_left(),
            f.scroll_size.width + margin.left + margin.right,
            f.scroll_size.height + margin.top + margin.bottom,
        ),
        _ => page.margin_box,
    };

    let subject = Subject::compute(page_margin_box, None, axis, frame.as_ref());

    DroppableDimension {
        id,
        kind,
        axis,
        is_enabled,
        is_combine_enabled,
        client,
        page,
        frame,
        subject,
    }
}

/// Applies a scroll to a droppable's frame, recomputing the clipped subject.
///
/// A no-op scroll (same offset) returns a value equal to the input, so
/// composing a zero delta is the identity. Scrolling a droppable without a
/// frame is structurally impossible for well-formed input and degrades to
/// returning the input unchanged.
pub fn scroll_droppable(droppable: &DroppableDimension, new_scroll: Point) -> DroppableDimension {
    let Some(frame) = &droppable.frame else {
        dwarn!(id = droppable.id.as_str(), "scroll_droppable: droppable has no frame");
        return droppable.clone();
    };

    if new_scroll == frame.scroll.current {
        return droppable.clone();
    }

    let frame = ScrollFrame {
        scroll: frame.scroll.with_current(new_scroll),
        ..frame.clone()
    };
    let subject = Subject::compute(
        droppable.subject.page_margin_box,
        droppable.subject.with_placeholder.clone(),
        droppable.axis,
        Some(&frame),
    );

    DroppableDimension {
        frame: Some(frame),
        subject,
        ..droppable.clone()
    }
}

/// Grows a droppable's hit area to make room for a foreign placeholder.
///
/// `insiders` are the droppable's resting draggables in index order. The
/// subject only grows by the shortfall between the placeholder size and the
/// room left after the last item; a list with space to spare keeps its
/// measured extent.
pub fn add_placeholder(
    droppable: &DroppableDimension,
    placeholder_size: Point,
    insiders: &[&DraggableDimension],
) -> DroppableDimension {
    let axis = droppable.axis;

    let content_end = insiders
        .last()
        .map(|last| axis.end(last.page.margin_box))
        .unwrap_or_else(|| axis.start(droppable.page.content_box));
    let available = axis.end(droppable.page.content_box) - content_end;
    let required = axis.main(placeholder_size) - available;
    let increased_by = (required > 0.0).then(|| axis.unit(required));

    let (frame, old_frame_max_scroll) = match (&droppable.frame, increased_by) {
        (Some(frame), Some(increase)) => {
            let old_max = frame.scroll.max;
            let frame = ScrollFrame {
                scroll: frame.scroll.with_max(old_max.add(increase)),
                ..frame.clone()
            };
            (Some(frame), Some(old_max))
        }
        (frame, _) => (frame.clone(), None),
    };

    let with_placeholder = Some(PlaceholderInSubject {
        placeholder_size,
        increased_by,
        old_frame_max_scroll,
    });
    let subject = Subject::compute(
        droppable.subject.page_margin_box,
        with_placeholder,
        axis,
        frame.as_ref(),
    );

    DroppableDimension {
        frame,
        subject,
        ..droppable.clone()
    }
}

/// Removes a previously added placeholder, restoring the measured extent and
/// any adjusted frame max scroll. A droppable without a placeholder is
/// returned unchanged.
pub fn remove_placeholder(droppable: &DroppableDimension) -> DroppableDimension {
    let Some(placeholder) = &droppable.subject.with_placeholder else {
        return droppable.clone();
    };

    let frame = match (&droppable.frame, placeholder.old_frame_max_scroll) {
        (Some(frame), Some(old_max)) => Some(ScrollFrame {
            scroll: frame.scroll.with_max(old_max),
            ..frame.clone()
        }),
        (frame, _) => frame.clone(),
    };

    let subject = Subject::compute(
        droppable.subject.page_margin_box,
        None,
        droppable.axis,
        frame.as_ref(),
    );

    DroppableDimension {
        frame,
        subject,
        ..droppable.clone()
    }
}
