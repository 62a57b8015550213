use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use prints_core::grid::{Slot, FRAME_PAD, FRAME_PAD_BOTTOM, IMG_SIZE};
use prints_core::layout::Placement;

use crate::draggable::DragBinding;

#[derive(Properties, PartialEq)]
pub(crate) struct PolaroidProps {
    pub src: AttrValue,
    pub alt: AttrValue,
    pub placement: Placement,
    pub slot: Option<Slot>,
    pub z_index: u32,
    pub on_bring_to_front: Callback<(), u32>,
    pub on_open: Callback<()>,
}

#[function_component(Polaroid)]
pub(crate) fn polaroid(props: &PolaroidProps) -> Html {
    let node = use_node_ref();
    let binding = use_mut_ref(|| None::<Rc<DragBinding>>);
    let loaded = use_state(|| false);

    {
        let node = node.clone();
        let binding = binding.clone();
        let placement = props.placement;
        let bring = props.on_bring_to_front.clone();
        let open = props.on_open.clone();
        use_effect_with((), move |_| {
            if let Some(element) = node.cast::<HtmlElement>() {
                *binding.borrow_mut() = Some(DragBinding::attach(element, placement, bring, open));
            }
            move || {
                *binding.borrow_mut() = None;
            }
        });
    }

    {
        let binding = binding.clone();
        use_effect_with(props.slot, move |slot| {
            if let Some(binding) = binding.borrow().as_ref() {
                binding.set_slot(*slot);
            }
            || ()
        });
    }

    let onload = {
        let loaded = loaded.clone();
        Callback::from(move |_: Event| loaded.set(true))
    };

    let frame_style = format!(
        "z-index: {}; padding: {FRAME_PAD}px; padding-bottom: {FRAME_PAD_BOTTOM}px;",
        props.z_index
    );
    let img_style = format!(
        "width: {IMG_SIZE}px; height: {IMG_SIZE}px; opacity: {}; filter: {};",
        if *loaded { "1" } else { "0" },
        if *loaded {
            "saturate(1) brightness(1) blur(0px)"
        } else {
            "saturate(0) brightness(1.8) blur(2px)"
        },
    );

    html! {
        <div ref={node} class="polaroid" style={frame_style}>
            <img
                class="polaroid-photo"
                src={props.src.clone()}
                alt={props.alt.clone()}
                draggable="false"
                style={img_style}
                {onload}
            />
        </div>
    }
}
