use gloo::render::{request_animation_frame, AnimationFrame};
use yew::prelude::*;

use prints_core::gallery::Photo;
use prints_core::view::{SlideDirection, SlideTransition};

#[derive(Properties, PartialEq)]
pub(crate) struct LightboxProps {
    pub photo: Photo,
    pub transition: SlideTransition,
    pub on_dismiss: Callback<()>,
    pub on_next: Callback<()>,
    pub on_previous: Callback<()>,
    pub on_slide_started: Callback<()>,
    pub on_slide_finished: Callback<()>,
}

#[function_component(LightboxView)]
pub(crate) fn lightbox_view(props: &LightboxProps) -> Html {
    let kickoff = use_mut_ref(|| None::<AnimationFrame>);

    // The incoming frame renders offset with no transition; two frames
    // later the transitioning style is applied, otherwise the browser
    // would never animate.
    {
        let kickoff = kickoff.clone();
        let started = props.on_slide_started.clone();
        use_effect_with(props.transition, move |transition| {
            if matches!(transition, SlideTransition::Start(_)) {
                let cell = kickoff.clone();
                let first = request_animation_frame(move |_| {
                    let second = request_animation_frame(move |_| started.emit(()));
                    *cell.borrow_mut() = Some(second);
                });
                *kickoff.borrow_mut() = Some(first);
            }
            || ()
        });
    }

    let overlay_click = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| on_dismiss.emit(()))
    };
    let frame_click = Callback::from(|event: MouseEvent| event.stop_propagation());
    let prev_click = {
        let on_previous = props.on_previous.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_previous.emit(());
        })
    };
    let next_click = {
        let on_next = props.on_next.clone();
        Callback::from(move |event: MouseEvent| {
            event.stop_propagation();
            on_next.emit(());
        })
    };
    let finished = {
        let on_slide_finished = props.on_slide_finished.clone();
        Callback::from(move |_: TransitionEvent| on_slide_finished.emit(()))
    };

    let frame_class = match props.transition {
        SlideTransition::None => classes!("lightbox-frame"),
        SlideTransition::Start(SlideDirection::Next) => {
            classes!("lightbox-frame", "slide-in-right")
        }
        SlideTransition::Start(SlideDirection::Previous) => {
            classes!("lightbox-frame", "slide-in-left")
        }
        SlideTransition::Animating(_) => classes!("lightbox-frame", "sliding"),
    };

    html! {
        <div class="lightbox-overlay" onclick={overlay_click}>
            <button class="lightbox-nav lightbox-prev" onclick={prev_click}>{ "\u{2039}" }</button>
            <div class={frame_class} onclick={frame_click} ontransitionend={finished}>
                <img
                    class="lightbox-photo"
                    src={props.photo.src.clone()}
                    alt={props.photo.alt.clone()}
                    width={props.photo.width.to_string()}
                    height={props.photo.height.to_string()}
                />
            </div>
            <button class="lightbox-nav lightbox-next" onclick={next_click}>{ "\u{203a}" }</button>
        </div>
    }
}
