//! Immutable pixel geometry: points, spacings, rectangles, and the nested
//! margin/border/content box model.
//!
//! All coordinates are floating-point pixels. Values are page-space (document
//! relative, scroll included) unless a name says "client" (viewport relative).
//! Every transform returns a new value; inputs are never mutated.

/// A 2d position or translation vector.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(self, other: Point) -> Point {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }

    pub fn subtract(self, other: Point) -> Point {
        Point {
            x: self.x - other.x,
            y: self.y - other.y,
        }
    }

    pub fn negate(self) -> Point {
        Point {
            x: -self.x,
            y: -self.y,
        }
    }

    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Clamps each component into `[min, max]` independently.
    pub fn clamp_each(self, min: Point, max: Point) -> Point {
        Point {
            x: self.x.clamp(min.x, max.x),
            y: self.y.clamp(min.y, max.y),
        }
    }
}

/// Per-edge spacing (margins, borders, padding).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Spacing {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Spacing {
    pub const NONE: Spacing = Spacing {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Uniform spacing on every edge.
    pub fn all(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    pub fn add(self, other: Spacing) -> Spacing {
        Spacing {
            top: self.top + other.top,
            right: self.right + other.right,
            bottom: self.bottom + other.bottom,
            left: self.left + other.left,
        }
    }
}

/// An axis-aligned rectangle stored as its four edges.
///
/// Width/height/center are derived on demand rather than stored, so a `Rect`
/// can never carry stale derived fields.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Rect {
    pub fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Builds a rect from its top-left corner and a size.
    pub fn from_point_and_size(top_left: Point, width: f64, height: f64) -> Self {
        Self {
            top: top_left.y,
            right: top_left.x + width,
            bottom: top_left.y + height,
            left: top_left.x,
        }
    }

    pub fn width(self) -> f64 {
        self.right - self.left
    }

    pub fn height(self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(self) -> Point {
        Point {
            x: (self.left + self.right) / 2.0,
            y: (self.top + self.bottom) / 2.0,
        }
    }

    pub fn top_left(self) -> Point {
        Point {
            x: self.left,
            y: self.top,
        }
    }

    pub fn corners(self) -> [Point; 4] {
        [
            Point::new(self.left, self.top),
            Point::new(self.right, self.top),
            Point::new(self.right, self.bottom),
            Point::new(self.left, self.bottom),
        ]
    }

    /// Grows the rect outward by a spacing.
    pub fn expand(self, spacing: Spacing) -> Rect {
        Rect {
            top: self.top - spacing.top,
            right: self.right + spacing.right,
            bottom: self.bottom + spacing.bottom,
            left: self.left - spacing.left,
        }
    }

    /// Shrinks the rect inward by a spacing.
    pub fn contract(self, spacing: Spacing) -> Rect {
        Rect {
            top: self.top + spacing.top,
            right: self.right - spacing.right,
            bottom: self.bottom - spacing.bottom,
            left: self.left + spacing.left,
        }
    }

    /// Translates the rect by a vector.
    pub fn shift(self, delta: Point) -> Rect {
        Rect {
            top: self.top + delta.y,
            right: self.right + delta.x,
            bottom: self.bottom + delta.y,
            left: self.left + delta.x,
        }
    }

    /// Edge-inclusive point containment.
    pub fn contains(self, point: Point) -> bool {
        point.x >= self.left && point.x <= self.right && point.y >= self.top && point.y <= self.bottom
    }

    /// Strict-overlap intersection. Touching edges do not count: a shared
    /// boundary produces `None`, which keeps adjacent lists from both
    /// claiming a point on the seam.
    pub fn intersect(self, other: Rect) -> Option<Rect> {
        let top = self.top.max(other.top);
        let right = self.right.min(other.right);
        let bottom = self.bottom.min(other.bottom);
        let left = self.left.max(other.left);
        if left < right && top < bottom {
            Some(Rect {
                top,
                right,
                bottom,
                left,
            })
        } else {
            None
        }
    }

    /// True when the two rects overlap with positive area.
    pub fn overlaps(self, other: Rect) -> bool {
        self.intersect(other).is_some()
    }

    pub fn area(self) -> f64 {
        (self.width()).max(0.0) * (self.height()).max(0.0)
    }
}

/// The standard nested box model: margin box ⊇ border box ⊇ content box.
///
/// Invariants, maintained by construction:
/// - margin box = border box expanded by `margin`
/// - content box = border box contracted by `border + padding`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BoxModel {
    pub margin_box: Rect,
    pub border_box: Rect,
    pub content_box: Rect,
    pub margin: Spacing,
    pub border: Spacing,
    pub padding: Spacing,
}

impl BoxModel {
    /// Builds the three nested boxes from a measured border box.
    pub fn from_border_box(border_box: Rect, margin: Spacing, border: Spacing, padding: Spacing) -> Self {
        Self {
            margin_box: border_box.expand(margin),
            border_box,
            content_box: border_box.contract(border.add(padding)),
            margin,
            border,
            padding,
        }
    }

    /// Translates all three boxes by the same vector.
    pub fn shift(self, delta: Point) -> BoxModel {
        BoxModel {
            margin_box: self.margin_box.shift(delta),
            border_box: self.border_box.shift(delta),
            content_box: self.content_box.shift(delta),
            margin: self.margin,
            border: self.border,
            padding: self.padding,
        }
    }
}
