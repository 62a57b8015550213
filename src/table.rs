use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;

use prints_core::gallery::{self, Photo};
use prints_core::grid::{grid_content_height, grid_slots, stack_content_height, stack_slots};
use prints_core::view::{
    effective_mode, Lightbox, RevealLimit, ViewMode, ZOrder, REVEAL_INTERVAL_MS,
};

use crate::draggable::viewport_size;
use crate::lightbox::LightboxView;
use crate::polaroid::Polaroid;

#[derive(Properties, PartialEq)]
pub(crate) struct TableProps {
    pub gallery: AttrValue,
    pub on_navigate_home: Callback<()>,
}

pub(crate) enum LightboxAction {
    Open(usize),
    Dismiss,
    Next,
    Previous,
    SlideStarted,
    SlideFinished,
}

#[derive(Clone, PartialEq)]
struct LightboxHandle(Lightbox);

impl Reducible for LightboxHandle {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut lightbox = self.0.clone();
        match action {
            LightboxAction::Open(index) => lightbox.open(index),
            LightboxAction::Dismiss => lightbox.dismiss(),
            LightboxAction::Next => {
                lightbox.next();
            }
            LightboxAction::Previous => {
                lightbox.previous();
            }
            LightboxAction::SlideStarted => lightbox.begin_animating(),
            LightboxAction::SlideFinished => lightbox.finish_transition(),
        }
        Rc::new(Self(lightbox))
    }
}

#[function_component(Table)]
pub(crate) fn table(props: &TableProps) -> Html {
    let photos: Rc<Vec<Photo>> =
        use_memo(props.gallery.clone(), |gallery| gallery::photos(gallery));
    let count = photos.len();

    let viewport = use_state(viewport_size);
    {
        let viewport = viewport.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "resize", move |_| viewport.set(viewport_size()))
            });
            move || drop(listener)
        });
    }
    let (viewport_w, _) = *viewport;

    let grid_requested = use_state(|| false);
    let mode = effective_mode(*grid_requested, viewport_w);
    let slots = match mode {
        ViewMode::Grid => grid_slots(count, viewport_w),
        ViewMode::Stack => stack_slots(count, viewport_w),
        ViewMode::Scattered => Vec::new(),
    };

    let z = use_mut_ref(|| ZOrder::new(count));

    let reveal = use_state(|| RevealLimit::new(count));
    {
        let reveal = reveal.clone();
        use_effect_with(*reveal, move |current| {
            let mut timer = None;
            if !current.done() {
                let mut advanced = *current;
                timer = Some(Timeout::new(REVEAL_INTERVAL_MS, move || {
                    advanced.advance();
                    reveal.set(advanced);
                }));
            }
            move || drop(timer)
        });
    }

    let lightbox = use_reducer(|| LightboxHandle(Lightbox::new(count)));
    {
        let dispatcher = lightbox.dispatcher();
        use_effect_with((), move |_| {
            let listener = web_sys::window()
                .and_then(|window| window.document())
                .map(|document| {
                    EventListener::new(&document, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        match event.key().as_str() {
                            "Escape" => dispatcher.dispatch(LightboxAction::Dismiss),
                            "ArrowRight" => dispatcher.dispatch(LightboxAction::Next),
                            "ArrowLeft" => dispatcher.dispatch(LightboxAction::Previous),
                            _ => {}
                        }
                    })
                });
            move || drop(listener)
        });
    }

    let home_click = {
        let on_navigate_home = props.on_navigate_home.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate_home.emit(());
        })
    };
    let toggle_grid = {
        let grid_requested = grid_requested.clone();
        Callback::from(move |_: MouseEvent| grid_requested.set(!*grid_requested))
    };

    let container_class = if mode.pinned() {
        "table scrolling"
    } else {
        "table"
    };
    let container_style = match mode {
        ViewMode::Grid => format!("min-height: {}px;", grid_content_height(count, viewport_w)),
        ViewMode::Stack => format!("min-height: {}px;", stack_content_height(count)),
        ViewMode::Scattered => String::new(),
    };

    let LightboxHandle(lightbox_state) = &*lightbox;

    html! {
        <div class={container_class} style={container_style}>
            <a class="dymo table-title" href="/" onclick={home_click}>
                { props.gallery.clone() }
            </a>
            { (mode != ViewMode::Stack).then(|| html! {
                <button class="dymo table-toggle" onclick={toggle_grid}>
                    { if mode == ViewMode::Grid { "scatter" } else { "sort" } }
                </button>
            }) }
            { for photos.iter().take(reveal.visible()).enumerate().map(|(i, photo)| {
                let bring = {
                    let z = z.clone();
                    Callback::from(move |_: ()| z.borrow_mut().bring_to_front(i))
                };
                let open = {
                    let dispatcher = lightbox.dispatcher();
                    Callback::from(move |_: ()| dispatcher.dispatch(LightboxAction::Open(i)))
                };
                html! {
                    <Polaroid
                        key={photo.src.clone()}
                        src={photo.src.clone()}
                        alt={photo.alt.clone()}
                        placement={photo.placement}
                        slot={slots.get(i).copied()}
                        z_index={(i + 1) as u32}
                        on_bring_to_front={bring}
                        on_open={open}
                    />
                }
            }) }
            { if let Some(index) = lightbox_state.enlarged() {
                let dispatcher = lightbox.dispatcher();
                let dismiss = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |_: ()| dispatcher.dispatch(LightboxAction::Dismiss))
                };
                let next = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |_: ()| dispatcher.dispatch(LightboxAction::Next))
                };
                let previous = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |_: ()| dispatcher.dispatch(LightboxAction::Previous))
                };
                let started = {
                    let dispatcher = dispatcher.clone();
                    Callback::from(move |_: ()| dispatcher.dispatch(LightboxAction::SlideStarted))
                };
                let finished = Callback::from(move |_: ()| {
                    dispatcher.dispatch(LightboxAction::SlideFinished)
                });
                html! {
                    <LightboxView
                        photo={photos[index].clone()}
                        transition={lightbox_state.transition()}
                        on_dismiss={dismiss}
                        on_next={next}
                        on_previous={previous}
                        on_slide_started={started}
                        on_slide_finished={finished}
                    />
                }
            } else {
                Html::default()
            } }
        </div>
    }
}
