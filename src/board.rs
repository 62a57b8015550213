use yew::prelude::*;

use prints_core::content::{home_content, SITE};
use prints_core::gallery::{galleries, preview_photos};
use prints_core::layout::{card_placement, pick_color};
use prints_core::view::ZOrder;

use crate::card::Card;

#[derive(Properties, PartialEq)]
pub(crate) struct BoardProps {
    pub on_open_gallery: Callback<String>,
}

#[function_component(Board)]
pub(crate) fn board(props: &BoardProps) -> Html {
    let names = galleries();
    let count = names.len();
    let z = use_mut_ref(|| ZOrder::new(count));

    let home = home_content();
    let title = if home.title.is_empty() {
        SITE.title.to_string()
    } else {
        home.title
    };
    let description = if home.description.is_empty() {
        SITE.description.to_string()
    } else {
        home.description
    };

    html! {
        <div class="board">
            <div class="board-header">
                { logo() }
                <div class="board-labels">
                    <h1 class="dymo" style="font-size: 20px; transform: rotate(-1deg);">
                        { title }
                    </h1>
                    { (!description.is_empty()).then(|| html! {
                        <p class="dymo dymo-light" style="font-size: 12px; transform: rotate(0.5deg);">
                            { description }
                        </p>
                    }) }
                </div>
            </div>
            { for names.iter().enumerate().map(|(i, name)| {
                let bring = {
                    let z = z.clone();
                    Callback::from(move |_: ()| z.borrow_mut().bring_to_front(i))
                };
                let open = {
                    let on_open = props.on_open_gallery.clone();
                    let name = name.to_string();
                    Callback::from(move |_: ()| on_open.emit(name.clone()))
                };
                html! {
                    <Card
                        key={*name}
                        name={*name}
                        placement={card_placement(name, i, count)}
                        color={pick_color(name)}
                        previews={preview_photos(name)}
                        z_index={(i + 1) as u32}
                        on_bring_to_front={bring}
                        on_open={open}
                    />
                }
            }) }
            { (!SITE.instagram.is_empty()).then(|| {
                let handle = SITE.instagram.trim_start_matches('@');
                html! {
                    <a
                        class="dymo dymo-light board-credit"
                        href={format!("https://instagram.com/{handle}")}
                        target="_blank"
                        rel="noreferrer"
                    >
                        { SITE.instagram }
                    </a>
                }
            }) }
        </div>
    }
}

fn logo() -> Html {
    html! {
        <svg class="board-logo" viewBox="0 0 64 64" width="64" height="64" aria-hidden="true">
            <rect x="10" y="8" width="44" height="48" rx="2" fill="#f5f2ed" />
            <rect x="15" y="13" width="34" height="30" fill="#b08d6e" />
            <rect x="10" y="8" width="44" height="48" rx="2" fill="none"
                stroke="rgba(0,0,0,0.25)" stroke-width="1.5" />
        </svg>
    }
}
