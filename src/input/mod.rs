//! Pointer and scroll input handling for the selection area.
//!
//! ## Architecture
//!
//! A single explicit state machine (`InputState`: Idle, Armed, Selecting)
//! tracks the gesture. Handlers are split by event:
//!
//! - `pointer_down` - arm a drag and snapshot item geometry
//! - `pointer_move` - record moves/scrolls, coalesce, recompute per frame
//! - `pointer_up` - teardown, click replay, cancel
//! - `coords` - viewport <-> content-space conversion
//! - `event` - pointer event types
//! - `state` - the state machine itself

pub mod coords;
mod event;
mod pointer_down;
mod pointer_move;
mod pointer_up;
mod state;

pub use event::{Modifiers, PointerButton, PointerEvent};
pub use state::{DragState, InputState};
