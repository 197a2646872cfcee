use std::collections::HashMap;

use crate::dimension::{DraggableDimension, DroppableDimension};
use crate::types::{DraggableId, DroppableId};

/// One consistent snapshot of every measured draggable and droppable.
///
/// Supplied whole at lift time and replaced whole at bulk re-publish
/// checkpoints; the impact calculations assume all entries were measured at
/// the same logical instant.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionMap {
    pub draggables: HashMap<DraggableId, DraggableDimension>,
    pub droppables: HashMap<DroppableId, DroppableDimension>,
}

impl DimensionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_draggable(&mut self, draggable: DraggableDimension) {
        self.draggables.insert(draggable.id.clone(), draggable);
    }

    pub fn insert_droppable(&mut self, droppable: DroppableDimension) {
        self.droppables.insert(droppable.id.clone(), droppable);
    }

    pub fn draggable(&self, id: &DraggableId) -> Option<&DraggableDimension> {
        self.draggables.get(id)
    }

    pub fn droppable(&self, id: &DroppableId) -> Option<&DroppableDimension> {
        self.droppables.get(id)
    }

    /// The resting draggables of a list, ordered by index.
    ///
    /// Re-derived on each call; the lists involved in a drag are small enough
    /// that a sort beats carrying a cache that must be invalidated on every
    /// publish.
    pub fn draggables_in_list(&self, droppable_id: &DroppableId) -> Vec<&DraggableDimension> {
        let mut insiders: Vec<&DraggableDimension> = self
            .draggables
            .values()
            .filter(|draggable| &draggable.droppable_id == droppable_id)
            .collect();
        insiders.sort_by_key(|draggable| draggable.index);
        insiders
    }

    /// Enabled droppables in deterministic (id) order.
    pub fn enabled_droppables(&self) -> Vec<&DroppableDimension> {
        let mut droppables: Vec<&DroppableDimension> = self
            .droppables
            .values()
            .filter(|droppable| droppable.is_enabled)
            .collect();
        droppables.sort_by(|a, b| a.id.cmp(&b.id));
        droppables
    }
}
