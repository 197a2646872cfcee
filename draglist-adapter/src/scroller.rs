use core::fmt;

use draglist::{AutoScrollArgs, AutoScrollConfig, Point, ScrollRequest, get_scroll_request};

use crate::scheduler::FrameCoalescer;

/// Executes auto-scroll decisions through caller-provided sinks, at most one
/// per frame.
///
/// An adapter drives it by calling:
/// - `observe(args)` whenever drag state changes (any number of times per
///   frame)
/// - `tick()` once per animation frame
/// - `cancel_pending()` when the drag ends, to drop a scheduled but not yet
///   executed instruction
pub struct AutoScroller {
    config: AutoScrollConfig,
    pending: FrameCoalescer<ScrollRequest>,
    scroll_window: Box<dyn FnMut(Point)>,
    scroll_droppable: Box<dyn FnMut(&draglist::DroppableId, Point)>,
}

impl fmt::Debug for AutoScroller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AutoScroller")
            .field("config", &self.config)
            .field("pending", &self.pending)
            .finish_non_exhaustive()
    }
}

impl AutoScroller {
    pub fn new(
        config: AutoScrollConfig,
        scroll_window: impl FnMut(Point) + 'static,
        scroll_droppable: impl FnMut(&draglist::DroppableId, Point) + 'static,
    ) -> Self {
        Self {
            config,
            pending: FrameCoalescer::new(),
            scroll_window: Box::new(scroll_window),
            scroll_droppable: Box::new(scroll_droppable),
        }
    }

    pub fn config(&self) -> &AutoScrollConfig {
        &self.config
    }

    /// Evaluates the current drag state and schedules this frame's scroll,
    /// replacing anything scheduled earlier in the same frame. A state with
    /// nothing to scroll clears the slot.
    pub fn observe(&mut self, args: AutoScrollArgs<'_>) {
        let args = AutoScrollArgs {
            config: &self.config,
            ..args
        };
        match get_scroll_request(args) {
            Some(request) => self.pending.schedule(request),
            None => {
                self.pending.cancel();
            }
        }
    }

    /// Schedules an explicit request (e.g. a keyboard scroll jump routed
    /// through the same once-per-frame pipe).
    pub fn schedule(&mut self, request: ScrollRequest) {
        self.pending.schedule(request);
    }

    /// Fires the pending instruction through the matching sink. Call once
    /// per animation frame. Returns what was executed.
    pub fn tick(&mut self) -> Option<ScrollRequest> {
        let request = self.pending.fire()?;
        match &request {
            ScrollRequest::Window(delta) => (self.scroll_window)(*delta),
            ScrollRequest::Droppable(id, delta) => (self.scroll_droppable)(id, *delta),
        }
        Some(request)
    }

    /// Synchronously drops a scheduled-but-unexecuted instruction.
    /// Instructions already issued through a sink are not undone.
    pub fn cancel_pending(&mut self) -> bool {
        self.pending.cancel().is_some()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.has_pending()
    }
}
