//! Marquee (rubber-band) multi-selection engine.
//!
//! A [`SelectionArea`] lets a user drag a rectangle over a dynamic collection
//! of independently rendered items and reports, at most once per frame, which
//! items the rectangle overlaps. A gesture that never moves past the threshold
//! is treated as a click and replayed to whatever sits under the pointer.
//!
//! ## Flow
//!
//! ```text
//! pointer_down  -> snapshot registry geometry (content space), capture pointer
//! pointer_move  \
//! scroll         > record latest position, request one frame
//! on_frame      -> threshold check, marquee, resolve, publish if changed
//! pointer_up    -> release capture, cancel frame, maybe replay click, end
//! ```
//!
//! The engine is UI-agnostic: the host implements [`Surface`] and
//! [`FrameScheduler`] and forwards events.

pub mod area;
pub mod cache;
pub mod callbacks;
pub mod compose;
pub mod config;
pub mod constants;
pub mod error;
pub mod geometry;
pub mod input;
pub mod marquee;
pub mod perf;
pub mod registry;
pub mod replay;
pub mod resolver;
pub mod schedule;
pub mod surface;

pub use area::SelectionArea;
pub use callbacks::SelectionCallbacks;
pub use compose::SelectionComposer;
pub use config::SelectionConfig;
pub use error::{ArmError, ConfigError};
pub use geometry::{Point, Rect};
pub use input::{Modifiers, PointerButton, PointerEvent};
pub use marquee::MarqueeStyle;
pub use registry::{RegistryHandle, Selectable, SelectableId};
pub use replay::SyntheticClick;
pub use schedule::{FrameScheduler, FrameToken, IntervalScheduler, ManualScheduler};
pub use surface::Surface;
