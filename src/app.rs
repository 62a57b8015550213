use gloo::events::EventListener;
use yew::prelude::*;

use prints_core::content::{home_content, SITE};
use prints_core::gallery::photo_count;
use prints_core::gallery_by_name;

use crate::app_router::{self, Route};
use crate::board::Board;
use crate::table::Table;

#[function_component(App)]
pub(crate) fn app() -> Html {
    let route = use_state(app_router::current_route);

    {
        let route = route.clone();
        use_effect_with((), move |_| {
            let listener = web_sys::window().map(|window| {
                EventListener::new(&window, "popstate", move |_| {
                    route.set(app_router::current_route());
                })
            });
            move || drop(listener)
        });
    }

    let navigate = {
        let route = route.clone();
        Callback::from(move |next: Route| {
            app_router::push_route(&next);
            route.set(next);
        })
    };

    {
        let current = (*route).clone();
        use_effect_with(current, |route| {
            apply_document_metadata(route);
            || ()
        });
    }

    let open_gallery = {
        let navigate = navigate.clone();
        Callback::from(move |name: String| navigate.emit(Route::Gallery(name)))
    };
    let go_home = Callback::from(move |_: ()| navigate.emit(Route::Home));

    match &*route {
        Route::Home => html! { <Board on_open_gallery={open_gallery} /> },
        Route::Gallery(name) if gallery_by_name(name).is_some() => html! {
            <Table key={name.clone()} gallery={name.clone()} on_navigate_home={go_home} />
        },
        _ => html! { <NotFound on_navigate_home={go_home} /> },
    }
}

fn apply_document_metadata(route: &Route) {
    let home = home_content();
    let (title, description) = match route {
        Route::Home => (
            if home.title.is_empty() {
                SITE.title.to_string()
            } else {
                home.title.clone()
            },
            if home.description.is_empty() {
                SITE.description.to_string()
            } else {
                home.description.clone()
            },
        ),
        Route::Gallery(name) if gallery_by_name(name).is_some() => {
            let count = photo_count(name);
            let noun = if count == 1 { "memory" } else { "memories" };
            (
                format!("{name} | {}", SITE.title),
                format!("{name} - a collection of {count} polaroid {noun} from everyday life."),
            )
        }
        _ => (
            format!("Gallery not found | {}", SITE.title),
            SITE.description.to_string(),
        ),
    };
    app_router::set_document_title(&title);
    app_router::set_meta_named("description", &description);
    if !SITE.author.is_empty() {
        app_router::set_meta_named("author", SITE.author);
    }
    app_router::set_meta_property("og:site_name", SITE.name);
    app_router::set_meta_property("og:title", &title);
    app_router::set_meta_property("og:description", &description);
    app_router::set_meta_property(
        "og:url",
        &format!(
            "{}{}",
            SITE.url.trim_end_matches('/'),
            app_router::route_path(route)
        ),
    );
    app_router::set_meta_property("og:image", SITE.og_image);
    app_router::set_meta_property("og:image:width", &SITE.og_width.to_string());
    app_router::set_meta_property("og:image:height", &SITE.og_height.to_string());
}

#[derive(Properties, PartialEq)]
struct NotFoundProps {
    on_navigate_home: Callback<()>,
}

#[function_component(NotFound)]
fn not_found(props: &NotFoundProps) -> Html {
    let onclick = {
        let on_navigate_home = props.on_navigate_home.clone();
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            on_navigate_home.emit(());
        })
    };
    html! {
        <div class="not-found">
            <span class="dymo" style="font-size: 18px; transform: rotate(-2deg);">
                { "Gallery not found" }
            </span>
            <a class="dymo" href="/" {onclick} style="font-size: 13px; transform: rotate(1deg);">
                { "back to the pile" }
            </a>
        </div>
    }
}
