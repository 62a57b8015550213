pub mod catalog;
pub mod content;
pub mod drag;
pub mod gallery;
pub mod grid;
pub mod layout;
pub mod view;

pub use catalog::{gallery_by_name, GalleryEntry, PhotoEntry, GALLERY_CATALOG};
pub use content::{home_content, parse_home_content, HomeContent, SiteConfig, SITE};
pub use gallery::Photo;
pub use layout::{hash_string, pick_color, Placement, SeededRandom};
