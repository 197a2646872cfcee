use crate::geometry::{Point, Rect};

/// The main axis of a droppable list.
///
/// All index, displacement, and threshold math is written against an axis so
/// vertical and horizontal containers share a single algorithm. "Main" is the
/// direction items flow in; "cross" is the perpendicular.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    Vertical,
    Horizontal,
}

impl Axis {
    /// The main-axis component of a point.
    pub fn main(self, point: Point) -> f64 {
        match self {
            Axis::Vertical => point.y,
            Axis::Horizontal => point.x,
        }
    }

    /// The cross-axis component of a point.
    pub fn cross(self, point: Point) -> f64 {
        match self {
            Axis::Vertical => point.x,
            Axis::Horizontal => point.y,
        }
    }

    /// Assembles a point from main and cross components.
    pub fn point(self, main: f64, cross: f64) -> Point {
        match self {
            Axis::Vertical => Point::new(cross, main),
            Axis::Horizontal => Point::new(main, cross),
        }
    }

    /// A vector of `value` along the main axis, zero on the cross axis.
    pub fn unit(self, value: f64) -> Point {
        self.point(value, 0.0)
    }

    /// The rect edge where the main axis begins (top for vertical).
    pub fn start(self, rect: Rect) -> f64 {
        match self {
            Axis::Vertical => rect.top,
            Axis::Horizontal => rect.left,
        }
    }

    /// The rect edge where the main axis ends (bottom for vertical).
    pub fn end(self, rect: Rect) -> f64 {
        match self {
            Axis::Vertical => rect.bottom,
            Axis::Horizontal => rect.right,
        }
    }

    pub fn size(self, rect: Rect) -> f64 {
        self.end(rect) - self.start(rect)
    }

    pub fn cross_start(self, rect: Rect) -> f64 {
        match self {
            Axis::Vertical => rect.left,
            Axis::Horizontal => rect.top,
        }
    }

    pub fn cross_end(self, rect: Rect) -> f64 {
        match self {
            Axis::Vertical => rect.right,
            Axis::Horizontal => rect.bottom,
        }
    }

    pub fn cross_size(self, rect: Rect) -> f64 {
        self.cross_end(rect) - self.cross_start(rect)
    }

    /// Returns `rect` with its main-axis end edge moved to `end`.
    pub fn with_end(self, rect: Rect, end: f64) -> Rect {
        match self {
            Axis::Vertical => Rect { bottom: end, ..rect },
            Axis::Horizontal => Rect { right: end, ..rect },
        }
    }
}
