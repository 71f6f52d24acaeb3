//! Test helpers: a fake host surface and a harness that records callbacks.
//!
//! This module provides:
//! - `TestSurface` - in-memory `Surface` with a scrollable container
//! - `TestHarness` - builder for a `SelectionArea` wired to recorders
//! - `Recorded` - one observed callback, in order

use marquee::schedule::ManualScheduler;
use marquee::{
    MarqueeStyle, Point, PointerEvent, Rect, RegistryHandle, SelectableId, SelectionArea,
    SelectionCallbacks, SelectionConfig, Surface, SyntheticClick,
};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Element handle used by the fake surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ElementId(pub u32);

#[derive(Debug, Clone)]
struct LaidOut {
    id: ElementId,
    /// Box relative to the container's scrollable content
    content_rect: Rect,
    text_input: bool,
}

/// In-memory surface. Element geometry is laid out in content space and
/// reported in viewport space, so scrolling moves elements the way a real
/// scroll container would.
#[derive(Debug)]
pub struct TestSurface {
    pub container: Option<Rect>,
    pub scroll: Point,
    elements: Vec<LaidOut>,
    pub captured: bool,
    pub capture_calls: usize,
    pub release_calls: usize,
    pub clicks: Vec<(ElementId, SyntheticClick)>,
    pub marquee_renders: Vec<Option<Rect>>,
    /// Style passed with the most recent render
    pub marquee_style: Option<MarqueeStyle>,
    pub geometry_queries: Cell<usize>,
}

impl Default for TestSurface {
    fn default() -> Self {
        Self::new(Rect::new(0.0, 0.0, 1000.0, 1000.0))
    }
}

impl TestSurface {
    pub fn new(container: Rect) -> Self {
        Self {
            container: Some(container),
            scroll: Point::default(),
            elements: Vec::new(),
            captured: false,
            capture_calls: 0,
            release_calls: 0,
            clicks: Vec::new(),
            marquee_renders: Vec::new(),
            marquee_style: None,
            geometry_queries: Cell::new(0),
        }
    }

    /// Lay out an element at a content-space box
    pub fn place(&mut self, id: u32, content_rect: Rect) -> ElementId {
        self.place_element(id, content_rect, false)
    }

    pub fn place_text_input(&mut self, id: u32, content_rect: Rect) -> ElementId {
        self.place_element(id, content_rect, true)
    }

    fn place_element(&mut self, id: u32, content_rect: Rect, text_input: bool) -> ElementId {
        let element = ElementId(id);
        self.elements.retain(|e| e.id != element);
        self.elements.push(LaidOut {
            id: element,
            content_rect,
            text_input,
        });
        element
    }

    /// Move an already placed element (the registry is not told)
    pub fn relayout(&mut self, id: ElementId, content_rect: Rect) {
        if let Some(e) = self.elements.iter_mut().find(|e| e.id == id) {
            e.content_rect = content_rect;
        }
    }

    fn to_viewport(&self, rect: Rect) -> Rect {
        let origin = self.container.map(|c| c.origin()).unwrap_or_default();
        rect.translate(origin.x - self.scroll.x, origin.y - self.scroll.y)
    }

    pub fn marquee_visible(&self) -> bool {
        matches!(self.marquee_renders.last(), Some(Some(_)))
    }
}

impl Surface for TestSurface {
    type Element = ElementId;

    fn container_rect(&self) -> Option<Rect> {
        self.container
    }

    fn scroll_offset(&self) -> Point {
        self.scroll
    }

    fn element_rect(&self, element: &ElementId) -> Option<Rect> {
        self.geometry_queries.set(self.geometry_queries.get() + 1);
        self.elements
            .iter()
            .find(|e| e.id == *element)
            .map(|e| self.to_viewport(e.content_rect))
    }

    fn capture_pointer(&mut self) {
        self.captured = true;
        self.capture_calls += 1;
    }

    fn release_pointer(&mut self) {
        self.captured = false;
        self.release_calls += 1;
    }

    fn element_at(&self, position: Point) -> Option<ElementId> {
        self.elements
            .iter()
            .rev()
            .find(|e| self.to_viewport(e.content_rect).contains_point(position))
            .map(|e| e.id)
    }

    fn is_text_input(&self, element: &ElementId) -> bool {
        self.elements.iter().any(|e| e.id == *element && e.text_input)
    }

    fn dispatch_click(&mut self, target: &ElementId, click: &SyntheticClick) {
        self.clicks.push((*target, *click));
    }

    fn render_marquee(&mut self, rect: Option<Rect>, style: &MarqueeStyle) {
        self.marquee_renders.push(rect);
        self.marquee_style = Some(*style);
    }
}

/// One observed callback
#[derive(Debug, Clone, PartialEq)]
pub enum Recorded<T> {
    Started(PointerEvent),
    Changed(Vec<T>),
    Ended,
}

pub type TestArea<T> = SelectionArea<T, TestSurface, ManualScheduler>;

/// Owns a selection area plus the log of its callbacks.
pub struct TestHarness<T: 'static> {
    pub area: TestArea<T>,
    pub log: Rc<RefCell<Vec<Recorded<T>>>>,
}

impl<T: Clone + PartialEq + 'static> TestHarness<T> {
    pub fn new(surface: TestSurface) -> Self {
        Self::with_config(surface, SelectionConfig::default())
    }

    pub fn with_config(surface: TestSurface, config: SelectionConfig) -> Self {
        let log: Rc<RefCell<Vec<Recorded<T>>>> = Rc::new(RefCell::new(Vec::new()));

        let started = Rc::clone(&log);
        let changed = Rc::clone(&log);
        let ended = Rc::clone(&log);
        let callbacks = SelectionCallbacks::new()
            .on_started(move |event| started.borrow_mut().push(Recorded::Started(*event)))
            .on_changed(move |items: &[T]| changed.borrow_mut().push(Recorded::Changed(items.to_vec())))
            .on_ended(move || ended.borrow_mut().push(Recorded::Ended));

        let area = SelectionArea::new(surface, ManualScheduler::new(), config).with_callbacks(callbacks);
        Self { area, log }
    }

    pub fn registry(&self) -> RegistryHandle<T, ElementId> {
        self.area.registry()
    }

    /// Place an element and register it under the same numeric id
    pub fn add_item(&mut self, id: u32, content_rect: Rect, item: T) -> ElementId {
        let element = self.area.surface_mut().place(id, content_rect);
        self.registry()
            .register(SelectableId::new(format!("item-{id}")), element, item);
        element
    }

    /// Fire every queued frame. Returns how many fired.
    pub fn flush_frames(&mut self) -> usize {
        let tokens = self.area.scheduler_mut().take_queued();
        let fired = tokens.len();
        for token in tokens {
            self.area.on_frame(token);
        }
        fired
    }

    /// Pointer down, one move, one frame, pointer up
    pub fn drag(&mut self, from: (f64, f64), to: (f64, f64)) {
        self.area.pointer_down(&PointerEvent::primary(from.0, from.1));
        self.area.pointer_move(&PointerEvent::primary(to.0, to.1));
        self.flush_frames();
        self.area.pointer_up(&PointerEvent::primary(to.0, to.1));
    }

    pub fn recorded(&self) -> Vec<Recorded<T>> {
        self.log.borrow().clone()
    }

    pub fn changes(&self) -> Vec<Vec<T>> {
        self.log
            .borrow()
            .iter()
            .filter_map(|r| match r {
                Recorded::Changed(items) => Some(items.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&Recorded<T>) -> bool) -> usize {
        self.log.borrow().iter().filter(|r| pred(r)).count()
    }

    pub fn clear_log(&self) {
        self.log.borrow_mut().clear();
    }
}

/// Items A@(0,0,10,10), B@(20,20,30,30), C@(5,5,15,15), registered in that order.
pub fn abc_harness(config: SelectionConfig) -> TestHarness<&'static str> {
    let mut harness = TestHarness::with_config(TestSurface::default(), config);
    harness.add_item(1, Rect::new(0.0, 0.0, 10.0, 10.0), "A");
    harness.add_item(2, Rect::new(20.0, 20.0, 30.0, 30.0), "B");
    harness.add_item(3, Rect::new(5.0, 5.0, 15.0, 15.0), "C");
    harness
}

pub fn is_started<T>(r: &Recorded<T>) -> bool {
    matches!(r, Recorded::Started(_))
}

pub fn is_changed<T>(r: &Recorded<T>) -> bool {
    matches!(r, Recorded::Changed(_))
}

pub fn is_ended<T>(r: &Recorded<T>) -> bool {
    matches!(r, Recorded::Ended)
}

/// Install a tracing subscriber for the test binary (RUST_LOG controls it).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
