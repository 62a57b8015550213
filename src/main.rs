mod app;
mod app_router;
mod board;
mod card;
mod draggable;
mod lightbox;
mod polaroid;
mod table;

fn main() {
    gloo::console::log!(format!(
        "pile of prints: {} galleries",
        prints_core::GALLERY_CATALOG.len()
    ));
    yew::Renderer::<app::App>::new().render();
}
