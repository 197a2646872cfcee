use crate::types::{DraggableId, DroppableId};

/// Caller-contract and fatal mid-drag failures.
///
/// The pure calculators never return these: structurally impossible lookups
/// degrade to safe values instead. Errors are reserved for conditions that
/// indicate a caller bug (stepping with no destination, acting without an
/// active drag) or for publish-time invariant violations after which the
/// drag cannot continue and must be aborted.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DragError {
    #[error("impact has no target to step from")]
    NoDestination,
    #[error("no drag is active")]
    NotDragging,
    #[error("a drag is already active")]
    AlreadyDragging,
    #[error("draggable '{0}' is not registered")]
    UnknownDraggable(DraggableId),
    #[error("draggable '{draggable}' references unknown droppable '{droppable}'")]
    UnknownDroppable {
        draggable: DraggableId,
        droppable: DroppableId,
    },
    #[error("dragging item '{0}' is missing from the published dimensions")]
    MissingCritical(DraggableId),
    #[error("home droppable '{0}' is missing from the published dimensions")]
    MissingHome(DroppableId),
    #[error("destination droppable '{0}' disappeared during a publish")]
    DestinationLost(DroppableId),
}
