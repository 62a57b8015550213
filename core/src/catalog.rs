#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GalleryEntry {
    pub name: &'static str,
    pub photos: &'static [PhotoEntry],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhotoEntry {
    pub file: &'static str,
    pub width: u32,
    pub height: u32,
}

include!(concat!(env!("OUT_DIR"), "/gallery_catalog.rs"));

pub fn gallery_by_name(name: &str) -> Option<&'static GalleryEntry> {
    let trimmed = name.trim();
    GALLERY_CATALOG
        .iter()
        .find(|entry| entry.name.eq_ignore_ascii_case(trimmed))
}
