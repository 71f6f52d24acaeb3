//! The selection area: one marquee engine instance.
//!
//! Owns the registry its children register into, the host surface and
//! scheduler, the gesture state machine and the last published selection.
//! Event handlers live in `input::{pointer_down, pointer_move, pointer_up}`.

use crate::cache::GeometryCache;
use crate::callbacks::SelectionCallbacks;
use crate::config::SelectionConfig;
use crate::geometry::Rect;
use crate::input::InputState;
use crate::marquee::{MarqueeGeometry, marquee_geometry};
use crate::perf::RecomputeStats;
use crate::registry::RegistryHandle;
use crate::schedule::{CoalescedTask, FrameScheduler};
use crate::surface::Surface;

pub struct SelectionArea<T, S: Surface, F: FrameScheduler> {
    pub(crate) config: SelectionConfig,
    pub(crate) surface: S,
    pub(crate) scheduler: F,
    pub(crate) registry: RegistryHandle<T, S::Element>,
    pub(crate) callbacks: SelectionCallbacks<T>,
    pub(crate) input_state: InputState,
    /// Snapshot for the current drag; `Some` only while a drag is active
    pub(crate) cache: Option<GeometryCache<T>>,
    pub(crate) frame: CoalescedTask,
    /// Whether we currently hold the host's pointer capture
    pub(crate) captured: bool,
    /// Last published selection
    pub(crate) selected: Vec<T>,
    pub(crate) stats: RecomputeStats,
}

impl<T, S: Surface, F: FrameScheduler> SelectionArea<T, S, F> {
    /// An invalid threshold in `config` is replaced by the default.
    pub fn new(surface: S, scheduler: F, config: SelectionConfig) -> Self {
        Self {
            config: config.sanitized(),
            surface,
            scheduler,
            registry: RegistryHandle::new(),
            callbacks: SelectionCallbacks::default(),
            input_state: InputState::Idle,
            cache: None,
            frame: CoalescedTask::new(),
            captured: false,
            selected: Vec::new(),
            stats: RecomputeStats::new(),
        }
    }

    pub fn with_callbacks(mut self, callbacks: SelectionCallbacks<T>) -> Self {
        self.callbacks = callbacks;
        self
    }

    pub fn set_callbacks(&mut self, callbacks: SelectionCallbacks<T>) {
        self.callbacks = callbacks;
    }

    /// Handle for children to register with. Each engine has its own.
    pub fn registry(&self) -> RegistryHandle<T, S::Element> {
        self.registry.clone()
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.config
    }

    /// Block (or unblock) new drags. A drag already in progress is not aborted;
    /// use [`SelectionArea::cancel`] for that.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.config.disabled = disabled;
    }

    pub fn set_fire_passthrough_click(&mut self, enabled: bool) {
        self.config.fire_passthrough_click = enabled;
    }

    pub fn input_state(&self) -> &InputState {
        &self.input_state
    }

    pub fn is_armed(&self) -> bool {
        self.input_state.is_armed()
    }

    pub fn is_selecting(&self) -> bool {
        self.input_state.is_selecting()
    }

    /// Current marquee rectangle in content space, `None` when hidden
    pub fn marquee(&self) -> Option<Rect> {
        self.input_state.marquee()
    }

    pub fn marquee_geometry(&self) -> Option<MarqueeGeometry> {
        marquee_geometry(&self.input_state)
    }

    /// Last published selection
    pub fn selected(&self) -> &[T] {
        &self.selected
    }

    /// Number of entries in the active snapshot, `None` outside a drag
    pub fn snapshot_len(&self) -> Option<usize> {
        self.cache.as_ref().map(|c| c.len())
    }

    pub fn stats(&self) -> &RecomputeStats {
        &self.stats
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    /// Give back everything acquired at pointer-down: pointer capture and the
    /// pending frame request.
    pub(crate) fn release_resources(&mut self) {
        if self.captured {
            self.surface.release_pointer();
            self.captured = false;
        }
        if self.frame.cancel(&mut self.scheduler) {
            tracing::trace!("Cancelled pending selection frame");
        }
    }
}

impl<T, S: Surface, F: FrameScheduler> Drop for SelectionArea<T, S, F> {
    fn drop(&mut self) {
        if self.input_state.is_active() {
            tracing::debug!("Selection area dropped mid-drag, releasing capture");
        }
        self.release_resources();
    }
}
