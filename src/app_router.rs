use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlMetaElement;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Route {
    Home,
    Gallery(String),
    NotFound,
}

/// One path segment names a gallery; anything deeper is nothing we serve.
pub(crate) fn parse_path(path: &str) -> Route {
    let trimmed = path.trim().trim_start_matches('/').trim_end_matches('/');
    if trimmed.is_empty() {
        return Route::Home;
    }
    if trimmed.contains('/') {
        return Route::NotFound;
    }
    Route::Gallery(trimmed.to_string())
}

pub(crate) fn current_route() -> Route {
    let Some(window) = web_sys::window() else {
        return Route::Home;
    };
    let path = window.location().pathname().unwrap_or_default();
    match parse_path(&path) {
        Route::Gallery(raw) => Route::Gallery(decode_segment(&raw)),
        route => route,
    }
}

pub(crate) fn route_path(route: &Route) -> String {
    match route {
        Route::Home | Route::NotFound => "/".to_string(),
        Route::Gallery(name) => format!("/{}", encode_segment(name)),
    }
}

pub(crate) fn push_route(route: &Route) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Ok(history) = window.history() else {
        return;
    };
    let _ = history.push_state_with_url(&JsValue::NULL, "", Some(&route_path(route)));
}

fn decode_segment(raw: &str) -> String {
    js_sys::decode_uri_component(raw)
        .ok()
        .and_then(|decoded| decoded.as_string())
        .unwrap_or_else(|| raw.to_string())
}

fn encode_segment(raw: &str) -> String {
    String::from(js_sys::encode_uri_component(raw))
}

pub(crate) fn set_document_title(title: &str) {
    if let Some(document) = web_sys::window().and_then(|window| window.document()) {
        document.set_title(title);
    }
}

pub(crate) fn set_meta_named(name: &str, text: &str) {
    upsert_meta("name", name, text);
}

pub(crate) fn set_meta_property(property: &str, text: &str) {
    upsert_meta("property", property, text);
}

fn upsert_meta(attr: &str, key: &str, text: &str) {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return;
    };
    let selector = format!("meta[{attr}='{key}']");
    let existing = document
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|element| element.dyn_into::<HtmlMetaElement>().ok());
    match existing {
        Some(meta) => meta.set_content(text),
        None => {
            let Some(head) = document.head() else {
                return;
            };
            let Ok(element) = document.create_element("meta") else {
                return;
            };
            let _ = element.set_attribute(attr, key);
            let _ = element.set_attribute("content", text);
            let _ = head.append_child(&element);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_and_trailing_slashes_are_home() {
        assert_eq!(parse_path("/"), Route::Home);
        assert_eq!(parse_path(""), Route::Home);
        assert_eq!(parse_path("//"), Route::Home);
    }

    #[test]
    fn single_segment_names_a_gallery() {
        assert_eq!(parse_path("/alps"), Route::Gallery("alps".to_string()));
        assert_eq!(parse_path("/alps/"), Route::Gallery("alps".to_string()));
        assert_eq!(
            parse_path("/summer%202024"),
            Route::Gallery("summer%202024".to_string())
        );
    }

    #[test]
    fn deeper_paths_are_not_found() {
        assert_eq!(parse_path("/alps/extra"), Route::NotFound);
    }
}
