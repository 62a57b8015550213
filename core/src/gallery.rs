use crate::catalog::{gallery_by_name, GalleryEntry, GALLERY_CATALOG};
use crate::layout::{hash_string, photo_placement, Placement, SeededRandom};

pub const PHOTO_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "avif"];
pub const PREVIEW_COUNT: usize = 5;

pub fn is_photo_file(name: &str) -> bool {
    let Some((stem, ext)) = name.rsplit_once('.') else {
        return false;
    };
    !stem.is_empty()
        && PHOTO_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
}

#[derive(Clone, Debug, PartialEq)]
pub struct Photo {
    pub src: String,
    pub alt: String,
    pub width: u32,
    pub height: u32,
    pub placement: Placement,
}

pub fn galleries() -> Vec<&'static str> {
    GALLERY_CATALOG.iter().map(|entry| entry.name).collect()
}

pub fn photo_src(gallery: &str, file: &str) -> String {
    format!("photos/{gallery}/{file}")
}

pub fn alt_text(file: &str) -> String {
    let stem = file.rsplit_once('.').map(|(stem, _)| stem).unwrap_or(file);
    stem.replace(['-', '_'], " ")
}

// Filename order, each photo carrying the placement derived solely from
// its filename. Unknown gallery yields an empty list.
pub fn photos(gallery: &str) -> Vec<Photo> {
    let Some(entry) = gallery_by_name(gallery) else {
        return Vec::new();
    };
    entry
        .photos
        .iter()
        .map(|photo| Photo {
            src: photo_src(entry.name, photo.file),
            alt: alt_text(photo.file),
            width: photo.width,
            height: photo.height,
            placement: photo_placement(photo.file),
        })
        .collect()
}

pub fn photo_count(gallery: &str) -> usize {
    gallery_by_name(gallery)
        .map(|entry| entry.photos.len())
        .unwrap_or(0)
}

// Seeded Fisher-Yates, so the same previews peek out on every visit.
pub fn preview_photos(gallery: &str) -> Vec<String> {
    let Some(entry) = gallery_by_name(gallery) else {
        return Vec::new();
    };
    preview_indices(entry)
        .into_iter()
        .map(|i| photo_src(entry.name, entry.photos[i].file))
        .collect()
}

fn preview_indices(entry: &GalleryEntry) -> Vec<usize> {
    let total = entry.photos.len();
    let mut order: Vec<usize> = (0..total).collect();
    let mut rand = SeededRandom::new(hash_string(&format!("{}previews", entry.name)));
    for i in (1..order.len()).rev() {
        let j = (rand.next() * (i as f64 + 1.0)) as usize;
        order.swap(i, j);
    }
    order.truncate(PREVIEW_COUNT);
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn photo_extension_match_is_case_insensitive() {
        assert!(is_photo_file("a.jpg"));
        assert!(is_photo_file("b.JPEG"));
        assert!(is_photo_file("c.WebP"));
        assert!(is_photo_file("d.avif"));
        assert!(!is_photo_file("notes.txt"));
        assert!(!is_photo_file("jpg"));
        assert!(!is_photo_file(".jpg"));
    }

    #[test]
    fn alt_text_strips_extension_and_separators() {
        assert_eq!(alt_text("morning-coffee_01.jpg"), "morning coffee 01");
        assert_eq!(alt_text("plain.png"), "plain");
    }

    #[test]
    fn unknown_gallery_is_empty_not_an_error() {
        assert!(photos("no-such-gallery").is_empty());
        assert_eq!(photo_count("no-such-gallery"), 0);
        assert!(preview_photos("no-such-gallery").is_empty());
    }

    #[test]
    fn src_is_rooted_under_photos() {
        assert_eq!(photo_src("alps", "a.png"), "photos/alps/a.png");
    }
}
