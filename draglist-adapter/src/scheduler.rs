/// A single-slot holder that coalesces work scheduled within one frame.
///
/// Multiple `schedule` calls between two `fire`s collapse into the latest
/// value; `cancel` synchronously drops a pending value before it fires.
/// Values that have already fired are gone and cannot be undone.
#[derive(Clone, Debug, Default)]
pub struct FrameCoalescer<T> {
    pending: Option<T>,
}

impl<T> FrameCoalescer<T> {
    pub fn new() -> Self {
        Self { pending: None }
    }

    /// Replaces any pending value with `value`.
    pub fn schedule(&mut self, value: T) {
        self.pending = Some(value);
    }

    /// Drops the pending value, returning it for inspection.
    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take()
    }

    /// Takes the pending value for execution. Call once per frame tick.
    pub fn fire(&mut self) -> Option<T> {
        self.pending.take()
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}
