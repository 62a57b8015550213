use std::rc::Rc;

use web_sys::HtmlElement;
use yew::prelude::*;

use prints_core::layout::{
    peek_placements, tab_offset, Placement, FOLDER_H, FOLDER_W, PEEK_H, PEEK_PAD, PEEK_PAD_BOTTOM,
    PEEK_W, TAB_H, TAB_W,
};

use crate::draggable::DragBinding;

#[derive(Properties, PartialEq)]
pub(crate) struct CardProps {
    pub name: AttrValue,
    pub placement: Placement,
    pub color: AttrValue,
    pub previews: Vec<String>,
    pub z_index: u32,
    pub on_bring_to_front: Callback<(), u32>,
    pub on_open: Callback<()>,
}

#[function_component(Card)]
pub(crate) fn card(props: &CardProps) -> Html {
    let node = use_node_ref();
    let binding = use_mut_ref(|| None::<Rc<DragBinding>>);

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

    let peeks = peek_placements(&props.name, props.previews.len());
    let tab_left = tab_offset(&props.name);

    let root_style = format!(
        "z-index: {}; width: {FOLDER_W}px; height: {}px;",
        props.z_index,
        FOLDER_H + TAB_H
    );
    let tab_style = format!(
        "left: {tab_left}px; width: {TAB_W}px; height: {}px; background: {};",
        TAB_H + 4.0,
        props.color
    );
    let body_style = format!(
        "top: {TAB_H}px; width: {FOLDER_W}px; height: {FOLDER_H}px; background-color: {};",
        props.color
    );

    html! {
        <div ref={node} class="card" style={root_style}>
            <div class="card-tab" style={tab_style}>
                <span class="card-tab-label">{ props.name.clone() }</span>
            </div>
            <div class="card-body" style={body_style}></div>
            { for peeks.iter().zip(props.previews.iter()).enumerate().map(|(i, (peek, src))| {
                let peek_style = format!(
                    "width: {PEEK_W}px; height: {PEEK_H}px; left: {}px; top: {}px; \
                     transform: rotate({}deg); \
                     padding: {PEEK_PAD}px {PEEK_PAD}px {PEEK_PAD_BOTTOM}px {PEEK_PAD}px; \
                     z-index: {};",
                    peek.x,
                    peek.y + TAB_H,
                    peek.rotation,
                    2 + i
                );
                let img_style = format!(
                    "width: {}px; height: {}px;",
                    PEEK_W - PEEK_PAD * 2.0,
                    PEEK_H - PEEK_PAD - PEEK_PAD_BOTTOM
                );
                html! {
                    <div class="card-peek" style={peek_style}>
                        <img src={src.clone()} alt="" draggable="false" style={img_style} />
                    </div>
                }
            }) }
        </div>
    }
}
