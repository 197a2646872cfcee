use crate::geometry::{Point, Rect};
use crate::scroll::ScrollDetails;

/// The window: the outermost scrollable area, in page space.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Viewport {
    /// The visible window rect in page coordinates.
    pub frame: Rect,
    pub scroll: ScrollDetails,
}

impl Viewport {
    pub fn new(frame: Rect, scroll: Point, max_scroll: Point) -> Self {
        Self {
            frame,
            scroll: ScrollDetails::new(scroll, max_scroll),
        }
    }
}

/// Applies a window scroll to the viewport.
///
/// The frame is page-space, so scrolling the window slides the visible rect
/// across the document by the scroll delta. Composing a zero delta returns a
/// value equal to the input.
pub fn scroll_viewport(viewport: Viewport, new_scroll: Point) -> Viewport {
    let delta = new_scroll.subtract(viewport.scroll.current);
    if delta.is_zero() {
        return viewport;
    }
    Viewport {
        frame: viewport.frame.shift(delta),
        scroll: viewport.scroll.with_current(new_scroll),
    }
}
