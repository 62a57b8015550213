use prints_core::gallery::{photos, preview_photos, PREVIEW_COUNT};
use prints_core::layout::{card_placement, photo_placement, pick_color, CARD_COLORS};
use prints_core::{gallery_by_name, GALLERY_CATALOG};

#[test]
fn catalog_galleries_and_photos_are_in_name_order() {
    let names: Vec<&str> = GALLERY_CATALOG.iter().map(|entry| entry.name).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);

    for entry in GALLERY_CATALOG {
        let files: Vec<&str> = entry.photos.iter().map(|photo| photo.file).collect();
        let mut sorted = files.clone();
        sorted.sort();
        assert_eq!(files, sorted, "gallery {}", entry.name);
        for photo in entry.photos {
            assert!(photo.width > 0 && photo.height > 0);
        }
    }
}

#[test]
fn sample_gallery_orders_by_filename_across_extensions() {
    // photos/alps holds b.jpg and a.png; alphabetical order wins over
    // extension or probe order.
    let photos = photos("alps");
    assert_eq!(photos.len(), 2);
    assert_eq!(photos[0].src, "photos/alps/a.png");
    assert_eq!(photos[1].src, "photos/alps/b.jpg");
    assert_eq!(photos[0].alt, "a");
}

#[test]
fn placements_derive_solely_from_the_filename() {
    for entry in GALLERY_CATALOG {
        let listed = photos(entry.name);
        for (photo, raw) in listed.iter().zip(entry.photos) {
            assert_eq!(photo.placement, photo_placement(raw.file));
            assert!((0.05..0.75).contains(&photo.placement.x));
            assert!((0.05..0.65).contains(&photo.placement.y));
            assert!(photo.placement.rotation.abs() < 12.0 + 1e-9);
        }
        // Same name, same placement, on every derivation.
        assert_eq!(listed, photos(entry.name));
    }
}

#[test]
fn board_inputs_are_deterministic_per_gallery() {
    let count = GALLERY_CATALOG.len();
    for (i, entry) in GALLERY_CATALOG.iter().enumerate() {
        assert_eq!(
            card_placement(entry.name, i, count),
            card_placement(entry.name, i, count)
        );
        assert!(CARD_COLORS.contains(&pick_color(entry.name)));

        let previews = preview_photos(entry.name);
        assert!(previews.len() <= PREVIEW_COUNT);
        assert_eq!(previews, preview_photos(entry.name));
        for src in &previews {
            assert!(entry
                .photos
                .iter()
                .any(|photo| src.ends_with(photo.file)));
        }
    }
}

#[test]
fn lookup_is_trimmed_and_case_insensitive() {
    assert!(gallery_by_name("alps").is_some());
    assert!(gallery_by_name(" ALPS ").is_some());
    assert!(gallery_by_name("nowhere").is_none());
}
