use draglist::{
    AutoScrollConfig, Combine, DimensionMap, DragError, DragImpact, DraggableId, DroppableId,
    ImpactArgs, LiftEffect, Location, Point, ScrollRequest, StepArgs, UserDirection, Viewport,
    add_placeholder, get_drag_impact, get_lift_effect, get_scroll_request, move_cross_axis,
    move_to_next_index, remove_placeholder, republish, scroll_droppable, scroll_viewport,
};

/// How the drag is currently being driven.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveMode {
    /// Pointer driven: the impact follows a selection point.
    Fluid,
    /// Keyboard driven: the impact was advanced by discrete steps and there
    /// is no pointer to re-derive it from.
    Snap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DropReason {
    Drop,
    Cancel,
}

/// The result handed to the consumer when a drag ends.
#[derive(Clone, Debug, PartialEq)]
pub struct DropOutcome {
    pub source: Location,
    pub destination: Option<Location>,
    pub combine: Option<Combine>,
    pub reason: DropReason,
}

#[derive(Clone, Debug)]
struct ActiveDrag {
    critical: DraggableId,
    source: Location,
    lift_effect: LiftEffect,
    impact: DragImpact,
    /// The dragging item's page border-box center.
    selection: Point,
    direction: UserDirection,
    mode: MoveMode,
    /// The foreign droppable currently holding a placeholder, if any.
    placeholder_on: Option<DroppableId>,
}

/// A framework-neutral controller that owns the explicit state passing
/// around the pure calculators.
///
/// Adapters drive it with measured snapshots and selection updates; every
/// transition delegates to `draglist` and stores the returned values. It
/// holds no UI objects and performs no side effects.
#[derive(Clone, Debug)]
pub struct DragSession {
    dimensions: DimensionMap,
    viewport: Viewport,
    drag: Option<ActiveDrag>,
}

impl DragSession {
    pub fn new(dimensions: DimensionMap, viewport: Viewport) -> Self {
        Self {
            dimensions,
            viewport,
            drag: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    pub fn impact(&self) -> Option<&DragImpact> {
        self.drag.as_ref().map(|drag| &drag.impact)
    }

    pub fn selection(&self) -> Option<Point> {
        self.drag.as_ref().map(|drag| drag.selection)
    }

    pub fn lift_effect(&self) -> Option<&LiftEffect> {
        self.drag.as_ref().map(|drag| &drag.lift_effect)
    }

    pub fn dimensions(&self) -> &DimensionMap {
        &self.dimensions
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Starts a drag on `id`. The initial impact targets the item's own
    /// resting location.
    pub fn lift(&mut self, id: &DraggableId) -> Result<&DragImpact, DragError> {
        if self.drag.is_some() {
            return Err(DragError::AlreadyDragging);
        }
        let Some(draggable) = self.dimensions.draggable(id) else {
            return Err(DragError::UnknownDraggable(id.clone()));
        };
        let Some(home) = self.dimensions.droppable(&draggable.droppable_id) else {
            return Err(DragError::UnknownDroppable {
                draggable: id.clone(),
                droppable: draggable.droppable_id.clone(),
            });
        };

        let (lift_effect, impact) = get_lift_effect(draggable, home, &self.dimensions);
        let drag = ActiveDrag {
            critical: id.clone(),
            source: Location {
                droppable_id: draggable.droppable_id.clone(),
                index: draggable.index,
            },
            lift_effect,
            impact,
            selection: draggable.page.border_box.center(),
            direction: UserDirection::default(),
            mode: MoveMode::Fluid,
            placeholder_on: None,
        };
        self.drag = Some(drag);
        self.current_impact()
    }

    /// Moves the selection to a new page-space point and recomputes the
    /// impact.
    pub fn move_to(&mut self, selection: Point) -> Result<&DragImpact, DragError> {
        self.recompute(selection)?;
        self.current_impact()
    }

    /// Folds a window scroll into the drag: the viewport and the selection
    /// both travel with the scroll, then the impact is recomputed.
    pub fn apply_window_scroll(&mut self, new_scroll: Point) -> Result<&DragImpact, DragError> {
        if self.drag.is_none() {
            return Err(DragError::NotDragging);
        }
        let delta = new_scroll.subtract(self.viewport.scroll.current);
        self.viewport = scroll_viewport(self.viewport, new_scroll);
        let selection = match &self.drag {
            Some(drag) => drag.selection.add(delta),
            None => return Err(DragError::NotDragging),
        };
        self.recompute(selection)?;
        self.current_impact()
    }

    /// Folds a droppable frame scroll into the drag and recomputes the
    /// impact. An id that no longer resolves degrades to a recompute with
    /// unchanged dimensions.
    pub fn apply_droppable_scroll(
        &mut self,
        id: &DroppableId,
        new_scroll: Point,
    ) -> Result<&DragImpact, DragError> {
        let selection = match &self.drag {
            Some(drag) => drag.selection,
            None => return Err(DragError::NotDragging),
        };
        if let Some(droppable) = self.dimensions.droppable(id) {
            let scrolled = scroll_droppable(droppable, new_scroll);
            self.dimensions.insert_droppable(scrolled);
        }
        self.recompute(selection)?;
        self.current_impact()
    }

    /// Steps to the next/previous index in the current list. Returns the
    /// scroll jump the caller must perform when the landing spot is not
    /// visible yet.
    pub fn keyboard_move(&mut self, forward: bool) -> Result<Option<Point>, DragError> {
        self.keyboard_step(forward, false)
    }

    /// Hops to the closest same-kind list on the cross axis.
    pub fn keyboard_cross_move(&mut self, forward: bool) -> Result<Option<Point>, DragError> {
        self.keyboard_step(forward, true)
    }

    /// Replaces the dimension snapshot mid drag.
    ///
    /// Fatal publish errors abort the drag before returning. In snap mode
    /// the previous destination must survive the publish: without a pointer
    /// there is nothing to re-derive the impact from, so losing it is fatal
    /// as well.
    pub fn republish(&mut self, dimensions: DimensionMap) -> Result<&DragImpact, DragError> {
        let (critical, selection, mode) = match &self.drag {
            Some(drag) => (drag.critical.clone(), drag.selection, drag.mode),
            None => return Err(DragError::NotDragging),
        };

        let normalized = {
            let drag = self.drag.as_ref().ok_or(DragError::NotDragging)?;
            republish(dimensions, &critical, &drag.lift_effect, &drag.impact)
        };
        let normalized = match normalized {
            Ok(normalized) => normalized,
            Err(error) => {
                self.drag = None;
                return Err(error);
            }
        };

        self.dimensions = normalized;
        if let Some(drag) = &mut self.drag {
            // The new snapshot was measured without our placeholder.
            drag.placeholder_on = None;
        }

        match mode {
            MoveMode::Snap => {
                let destination = self
                    .drag
                    .as_ref()
                    .and_then(|drag| drag.impact.destination().cloned());
                if let Some(location) = destination
                    && self.dimensions.droppable(&location.droppable_id).is_none()
                {
                    self.drag = None;
                    return Err(DragError::DestinationLost(location.droppable_id));
                }
                self.sync_placeholder();
            }
            MoveMode::Fluid => {
                self.recompute(selection)?;
            }
        }
        self.current_impact()
    }

    /// Ends the drag with a drop, reporting where the item went.
    pub fn complete(&mut self) -> Result<DropOutcome, DragError> {
        let drag = self.drag.take().ok_or(DragError::NotDragging)?;
        self.clear_placeholder(&drag);
        Ok(DropOutcome {
            source: drag.source,
            destination: drag.impact.destination().cloned(),
            combine: drag.impact.combine_target().cloned(),
            reason: DropReason::Drop,
        })
    }

    /// Ends the drag as if nothing happened.
    pub fn cancel(&mut self) -> Result<DropOutcome, DragError> {
        let drag = self.drag.take().ok_or(DragError::NotDragging)?;
        self.clear_placeholder(&drag);
        Ok(DropOutcome {
            source: drag.source,
            destination: None,
            combine: None,
            reason: DropReason::Cancel,
        })
    }

    /// This frame's auto-scroll decision for the current drag state.
    pub fn scroll_request(&self, config: &AutoScrollConfig) -> Option<ScrollRequest> {
        let drag = self.drag.as_ref()?;
        let dragged = self.dimensions.draggable(&drag.critical)?;
        get_scroll_request(draglist::AutoScrollArgs {
            selection: drag.selection,
            dragged,
            viewport: &self.viewport,
            dimensions: &self.dimensions,
            over: drag.impact.droppable_over(),
            config,
        })
    }

    fn current_impact(&self) -> Result<&DragImpact, DragError> {
        self.drag
            .as_ref()
            .map(|drag| &drag.impact)
            .ok_or(DragError::NotDragging)
    }

    fn recompute(&mut self, selection: Point) -> Result<(), DragError> {
        let Some(drag) = &self.drag else {
            return Err(DragError::NotDragging);
        };
        let direction = UserDirection::from_movement(drag.selection, selection, drag.direction);
        let Some(draggable) = self.dimensions.draggable(&drag.critical) else {
            return Err(DragError::UnknownDraggable(drag.critical.clone()));
        };
        let impact = get_drag_impact(ImpactArgs {
            page_border_box_center: selection,
            draggable,
            dimensions: &self.dimensions,
            previous_impact: &drag.impact,
            viewport: &self.viewport,
            user_direction: direction,
            lift_effect: &drag.lift_effect,
        });

        if let Some(drag) = &mut self.drag {
            drag.selection = selection;
            drag.direction = direction;
            drag.impact = impact;
            drag.mode = MoveMode::Fluid;
        }
        self.sync_placeholder();
        Ok(())
    }

    fn keyboard_step(&mut self, forward: bool, cross: bool) -> Result<Option<Point>, DragError> {
        let result = {
            let drag = self.drag.as_ref().ok_or(DragError::NotDragging)?;
            let Some(draggable) = self.dimensions.draggable(&drag.critical) else {
                return Err(DragError::UnknownDraggable(drag.critical.clone()));
            };
            let args = StepArgs {
                is_moving_forward: forward,
                previous_page_border_box_center: drag.selection,
                draggable,
                dimensions: &self.dimensions,
                previous_impact: &drag.impact,
                viewport: &self.viewport,
                lift_effect: &drag.lift_effect,
            };
            if cross {
                move_cross_axis(args)?
            } else {
                move_to_next_index(args)?
            }
        };

        let Some(result) = result else {
            return Ok(None);
        };
        let jump = result.scroll_jump_request;
        if let Some(drag) = &mut self.drag {
            drag.selection = result.page_border_box_center;
            drag.impact = result.impact;
            drag.mode = MoveMode::Snap;
        }
        self.sync_placeholder();
        Ok(jump)
    }

    /// Keeps exactly one foreign droppable grown by a placeholder: the one
    /// the impact is currently over, or none when over the home list.
    fn sync_placeholder(&mut self) {
        let Some(drag) = &self.drag else {
            return;
        };
        let home_id = drag.lift_effect.home_id.clone();
        let desired = drag
            .impact
            .droppable_over()
            .filter(|id| **id != home_id)
            .cloned();
        if desired == drag.placeholder_on {
            return;
        }
        let previous = drag.placeholder_on.clone();
        let critical = drag.critical.clone();

        if let Some(old_id) = &previous
            && let Some(droppable) = self.dimensions.droppable(old_id)
        {
            let restored = remove_placeholder(droppable);
            self.dimensions.insert_droppable(restored);
        }
        if let Some(new_id) = &desired {
            let size = self.dimensions.draggable(&critical).map(|d| d.displace_by);
            if let (Some(size), Some(droppable)) = (size, self.dimensions.droppable(new_id)) {
                let insiders = self.dimensions.draggables_in_list(new_id);
                let grown = add_placeholder(droppable, size, &insiders);
                self.dimensions.insert_droppable(grown);
            }
        }
        if let Some(drag) = &mut self.drag {
            drag.placeholder_on = desired;
        }
    }

    fn clear_placeholder(&mut self, drag: &ActiveDrag) {
        if let Some(id) = &drag.placeholder_on
            && let Some(droppable) = self.dimensions.droppable(id)
        {
            let restored = remove_placeholder(droppable);
            self.dimensions.insert_droppable(restored);
        }
    }
}
