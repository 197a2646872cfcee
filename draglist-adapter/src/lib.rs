//! Adapter utilities for the `draglist` crate.
//!
//! The `draglist` crate is side-effect free and knows nothing about frames
//! or time. This crate provides the small, framework-neutral pieces an
//! adapter needs around it:
//!
//! - Frame-coalesced auto scrolling (at most one scroll command per
//!   animation frame, with synchronous cancellation)
//! - A `DragSession` controller that threads the previous impact through the
//!   pure calculators and manages placeholder growth, for adapters that do
//!   not want to hand-roll the state passing
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui
//! bindings).
#![forbid(unsafe_code)]

mod scheduler;
mod scroller;
mod session;


pub use scheduler::FrameCoalescer;
pub use scroller::AutoScroller;
pub use session::{DragSession, DropOutcome, DropReason, MoveMode};
