use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, PointerEvent};
use yew::Callback;

use prints_core::drag::{grab_offset, DragModel, DragPhase};
use prints_core::grid::Slot;
use prints_core::layout::Placement;

const PIN_TRANSITION: &str = "transform 0.6s cubic-bezier(0.25, 0.1, 0.25, 1)";
const PIN_TRANSITION_MS: u32 = 600;
const LIFT_SHADOW: &str =
    "0 25px 50px -12px rgba(0, 0, 0, 0.5), 0 12px 24px -8px rgba(0, 0, 0, 0.3)";

pub(crate) fn viewport_size() -> (f64, f64) {
    let Some(window) = web_sys::window() else {
        return (0.0, 0.0);
    };
    let width = window
        .inner_width()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|value| value.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

fn listener_options() -> EventListenerOptions {
    EventListenerOptions {
        phase: EventListenerPhase::Bubble,
        passive: false,
    }
}

pub(crate) struct DragBinding {
    element: HtmlElement,
    model: RefCell<DragModel>,
    listeners: RefCell<Vec<EventListener>>,
    kickoff: RefCell<Option<AnimationFrame>>,
    settle: RefCell<Option<Timeout>>,
    slot: Cell<Option<Slot>>,
    on_bring_to_front: Callback<(), u32>,
    on_click: Callback<()>,
}

impl DragBinding {
    pub(crate) fn attach(
        element: HtmlElement,
        placement: Placement,
        on_bring_to_front: Callback<(), u32>,
        on_click: Callback<()>,
    ) -> Rc<Self> {
        let (vw, vh) = viewport_size();
        let x = placement.x * vw;
        let y = placement.y * vh;
        let binding = Rc::new(Self {
            element,
            model: RefCell::new(DragModel::new(x, y, placement.rotation)),
            listeners: RefCell::new(Vec::new()),
            kickoff: RefCell::new(None),
            settle: RefCell::new(None),
            slot: Cell::new(None),
            on_bring_to_front,
            on_click,
        });
        binding.write_transform((x, y, placement.rotation), false);
        binding.install_listeners();
        binding
    }

    fn install_listeners(self: &Rc<Self>) {
        let mut listeners = Vec::new();

        let binding = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.element,
            "pointerdown",
            listener_options(),
            move |event: &Event| binding.on_pointer_down(event),
        ));

        let binding = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.element,
            "pointermove",
            listener_options(),
            move |event: &Event| binding.on_pointer_move(event),
        ));

        let binding = Rc::clone(self);
        listeners.push(EventListener::new_with_options(
            &self.element,
            "pointerup",
            listener_options(),
            move |event: &Event| binding.on_pointer_up(event),
        ));

        let binding = Rc::clone(self);
        listeners.push(EventListener::new(
            &self.element,
            "pointercancel",
            move |event: &Event| binding.on_pointer_cancel(event),
        ));

        *self.listeners.borrow_mut() = listeners;
    }

    fn on_pointer_down(&self, event: &Event) {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        if event.button() != 0 {
            return;
        }
        if self.model.borrow().phase() == DragPhase::Pinned {
            // Pointer-up handles the tap; there is nothing to grab.
            return;
        }
        let rect = self.element.get_bounding_client_rect();
        let pointer_x = f64::from(event.client_x());
        let pointer_y = f64::from(event.client_y());
        let (grab_nx, grab_ny) = grab_offset(
            pointer_x,
            pointer_y,
            rect.left(),
            rect.top(),
            rect.width(),
            rect.height(),
        );
        if !self.model.borrow_mut().begin(pointer_x, pointer_y, grab_nx, grab_ny) {
            return;
        }
        let _ = self.element.set_pointer_capture(event.pointer_id());

        let rank = self.on_bring_to_front.emit(());
        let style = self.element.style();
        let _ = style.set_property("z-index", &rank.to_string());
        let _ = style.set_property("cursor", "grabbing");
        let _ = style.set_property("box-shadow", LIFT_SHADOW);
        self.apply_model_transform(true);
        event.prevent_default();
    }

    fn on_pointer_move(&self, event: &Event) {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let moved = self
            .model
            .borrow_mut()
            .update(f64::from(event.client_x()), f64::from(event.client_y()));
        if moved {
            self.apply_model_transform(true);
            event.prevent_default();
        }
    }

    fn on_pointer_up(&self, event: &Event) {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        let (end, pinned) = {
            let mut model = self.model.borrow_mut();
            let end = model.release(f64::from(event.client_x()), f64::from(event.client_y()));
            (end, model.phase() == DragPhase::Pinned)
        };
        let Some(end) = end else {
            return;
        };
        if !pinned {
            let _ = self.element.release_pointer_capture(event.pointer_id());
            let style = self.element.style();
            let _ = style.set_property("cursor", "grab");
            let _ = style.remove_property("box-shadow");
            self.apply_model_transform(false);
        }
        if end.tap {
            self.on_click.emit(());
        }
    }

    fn on_pointer_cancel(&self, event: &Event) {
        let Some(event) = event.dyn_ref::<PointerEvent>() else {
            return;
        };
        self.model.borrow_mut().cancel();
        let _ = self.element.release_pointer_capture(event.pointer_id());
        let style = self.element.style();
        let _ = style.set_property("cursor", "grab");
        let _ = style.remove_property("box-shadow");
        self.apply_model_transform(false);
    }

    // Pin to an externally computed slot or release back to the model's
    // last free position, animating either way. The target transform is
    // applied two frames after the transition style so the browser
    // commits the starting transform first.
    pub(crate) fn set_slot(self: &Rc<Self>, slot: Option<Slot>) {
        if self.slot.get() == slot {
            return;
        }
        self.slot.set(slot);
        {
            let mut model = self.model.borrow_mut();
            match slot {
                Some(_) => model.pin(),
                None => model.unpin(),
            }
        }
        let target = match slot {
            Some(slot) => slot,
            None => {
                let model = self.model.borrow();
                let (x, y) = model.position();
                (x, y, model.rotation())
            }
        };
        let style = self.element.style();
        let _ = style.set_property("transition", PIN_TRANSITION);
        let _ = style.set_property("cursor", if slot.is_some() { "pointer" } else { "grab" });
        let _ = style.remove_property("box-shadow");

        let binding = Rc::clone(self);
        let first = request_animation_frame(move |_| {
            let inner = Rc::clone(&binding);
            let second = request_animation_frame(move |_| {
                inner.write_transform(target, false);
                let settled = Rc::clone(&inner);
                *inner.settle.borrow_mut() = Some(Timeout::new(PIN_TRANSITION_MS, move || {
                    let _ = settled.element.style().remove_property("transition");
                }));
            });
            *binding.kickoff.borrow_mut() = Some(second);
        });
        *self.kickoff.borrow_mut() = Some(first);
    }

    fn apply_model_transform(&self, lifted: bool) {
        let model = self.model.borrow();
        let (x, y) = model.position();
        let rotation = model.rotation();
        drop(model);
        self.write_transform((x, y, rotation), lifted);
    }

    fn write_transform(&self, (x, y, rotation): Slot, lifted: bool) {
        let scale = if lifted { " scale(1.05)" } else { "" };
        let value = format!("translate({x}px, {y}px) rotate({rotation}deg){scale}");
        let _ = self.element.style().set_property("transform", &value);
    }
}
