use core::fmt;

use crate::axis::Axis;
use crate::geometry::Point;

/// Stable identity of a single liftable item. Unique within a drag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DraggableId(pub String);

/// Stable identity of a container list. Unique within a drag.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppableId(pub String);

/// A droppable's kind. Only same-kind droppables are valid cross-list
/// targets for a draggable.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DroppableKind(pub String);

impl DraggableId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl DroppableId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for DraggableId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for DroppableId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl From<&str> for DroppableKind {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

impl fmt::Display for DraggableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for DroppableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Which way the user is moving along one axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Motion {
    Forward,
    Backward,
}

/// The user's movement direction on both axes, derived by comparing this
/// frame's selection point to the previous frame's.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserDirection {
    pub vertical: Motion,
    pub horizontal: Motion,
}

impl Default for UserDirection {
    fn default() -> Self {
        Self {
            vertical: Motion::Forward,
            horizontal: Motion::Forward,
        }
    }
}

impl UserDirection {
    /// Derives a direction from a frame-over-frame selection delta.
    ///
    /// An axis with no movement keeps that axis from `previous` so a
    /// stationary frame does not flip direction-sensitive decisions.
    pub fn from_movement(from: Point, to: Point, previous: UserDirection) -> UserDirection {
        let vertical = if to.y > from.y {
            Motion::Forward
        } else if to.y < from.y {
            Motion::Backward
        } else {
            previous.vertical
        };
        let horizontal = if to.x > from.x {
            Motion::Forward
        } else if to.x < from.x {
            Motion::Backward
        } else {
            previous.horizontal
        };
        UserDirection {
            vertical,
            horizontal,
        }
    }

    /// The motion component along a droppable's main axis.
    pub fn along(self, axis: Axis) -> Motion {
        match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
        }
    }
}
