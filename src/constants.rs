//! Engine-wide constants.
//!
//! Centralizes magic numbers used by the input state machine, the geometry
//! cache and the default marquee styling.

// ============================================================================
// Gesture
// ============================================================================

/// Content-space displacement a drag must exceed before it becomes a selection
pub const SELECTION_THRESHOLD: f64 = 5.0;

/// Pointer button index treated as primary (left mouse / pen tip / touch)
pub const PRIMARY_BUTTON: u16 = 0;

// ============================================================================
// Frame Pacing
// ============================================================================

/// Target frame time for 60 FPS, in milliseconds
pub const TARGET_FRAME_MS: f64 = 16.67;

/// Interval used by the timer fallback scheduler, in microseconds
pub const FALLBACK_FRAME_INTERVAL_US: u64 = 16_667;

// ============================================================================
// Geometry Cache
// ============================================================================

/// Snapshots with at least this many entries get an R-tree pre-filter.
/// Below it a linear scan is faster than the tree walk.
pub const SPATIAL_INDEX_MIN_ITEMS: usize = 64;

// ============================================================================
// Marquee Defaults
// ============================================================================

/// Marquee fill colour (RGBA, 0-255 channels plus alpha 0.0-1.0)
pub const MARQUEE_FILL: (u8, u8, u8, f32) = (0, 123, 255, 0.2);

/// Marquee border colour
pub const MARQUEE_BORDER: (u8, u8, u8, f32) = (0, 123, 255, 0.5);

/// Marquee border width in pixels
pub const MARQUEE_BORDER_WIDTH: f32 = 1.0;

/// Stacking order of the marquee overlay above the items
pub const MARQUEE_Z_INDEX: i32 = 1000;
