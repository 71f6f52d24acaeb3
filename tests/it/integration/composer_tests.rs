//! Shift-to-extend selection built on the engine's callbacks.

use crate::helpers::*;
use marquee::schedule::ManualScheduler;
use marquee::{
    Modifiers, PointerEvent, Rect, SelectionArea, SelectionCallbacks, SelectionComposer,
    SelectionConfig,
};
use std::cell::RefCell;
use std::rc::Rc;

fn composed_area(
    composer: &Rc<RefCell<SelectionComposer<&'static str>>>,
) -> TestArea<&'static str> {
    let on_start = Rc::clone(composer);
    let on_change = Rc::clone(composer);
    let callbacks = SelectionCallbacks::new()
        .on_started(move |event| on_start.borrow_mut().begin(event))
        .on_changed(move |items| {
            on_change.borrow_mut().update(items);
        });

    let mut surface = TestSurface::default();
    let a = surface.place(1, Rect::new(0.0, 0.0, 10.0, 10.0));
    let b = surface.place(2, Rect::new(100.0, 0.0, 110.0, 10.0));

    let area = SelectionArea::new(surface, ManualScheduler::new(), SelectionConfig::default())
        .with_callbacks(callbacks);
    let registry = area.registry();
    registry.register("a".into(), a, "A");
    registry.register("b".into(), b, "B");
    area
}

fn drag(area: &mut TestArea<&'static str>, from: (f64, f64), to: (f64, f64), modifiers: Modifiers) {
    area.pointer_down(&PointerEvent::primary(from.0, from.1).with_modifiers(modifiers));
    area.pointer_move(&PointerEvent::primary(to.0, to.1).with_modifiers(modifiers));
    for token in area.scheduler_mut().take_queued() {
        area.on_frame(token);
    }
    area.pointer_up(&PointerEvent::primary(to.0, to.1).with_modifiers(modifiers));
}

#[test]
fn test_plain_drag_replaces_selection() {
    let composer = Rc::new(RefCell::new(SelectionComposer::new()));
    let mut area = composed_area(&composer);

    drag(&mut area, (0.0, 0.0), (20.0, 20.0), Modifiers::NONE);
    drag(&mut area, (90.0, 0.0), (120.0, 20.0), Modifiers::NONE);

    assert_eq!(composer.borrow().selection(), &["B"]);
}

#[test]
fn test_shift_drag_extends_selection() {
    let composer = Rc::new(RefCell::new(SelectionComposer::new()));
    let mut area = composed_area(&composer);

    drag(&mut area, (0.0, 0.0), (20.0, 20.0), Modifiers::NONE);
    drag(&mut area, (90.0, 0.0), (120.0, 20.0), Modifiers::SHIFT);

    assert_eq!(composer.borrow().selection(), &["A", "B"]);
}

#[test]
fn test_plain_drag_over_nothing_clears_selection() {
    let composer = Rc::new(RefCell::new(SelectionComposer::new()));
    let mut area = composed_area(&composer);

    drag(&mut area, (0.0, 0.0), (20.0, 20.0), Modifiers::NONE);
    drag(&mut area, (300.0, 300.0), (400.0, 400.0), Modifiers::NONE);

    assert!(composer.borrow().selection().is_empty());
}

#[test]
fn test_shift_drag_over_nothing_keeps_selection() {
    let composer = Rc::new(RefCell::new(SelectionComposer::new()));
    let mut area = composed_area(&composer);

    drag(&mut area, (0.0, 0.0), (20.0, 20.0), Modifiers::NONE);
    drag(&mut area, (300.0, 300.0), (400.0, 400.0), Modifiers::SHIFT);

    assert_eq!(composer.borrow().selection(), &["A"]);
}
