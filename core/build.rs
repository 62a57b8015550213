use std::env;
use std::fmt::Write;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

#[derive(Deserialize)]
struct SiteFile {
    name: Option<String>,
    title: Option<String>,
    description: Option<String>,
    url: Option<String>,
    author: Option<AuthorEntry>,
    og: Option<OgEntry>,
}

#[derive(Deserialize)]
struct AuthorEntry {
    name: Option<String>,
    instagram: Option<String>,
}

#[derive(Deserialize)]
struct OgEntry {
    image: Option<String>,
    width: Option<u32>,
    height: Option<u32>,
}

const DEFAULT_SITE_NAME: &str = "Pile of Prints";
const DEFAULT_SITE_TITLE: &str = "Pile of Prints";
const DEFAULT_SITE_DESCRIPTION: &str = "A shoebox of daily moments worth keeping.";
const DEFAULT_SITE_URL: &str = "https://prints.example.com";
const DEFAULT_AUTHOR_NAME: &str = "";
const DEFAULT_AUTHOR_INSTAGRAM: &str = "";
const DEFAULT_OG_IMAGE: &str = "og-image.jpg";
const DEFAULT_OG_WIDTH: u32 = 1200;
const DEFAULT_OG_HEIGHT: u32 = 630;

const PHOTO_EXTENSIONS: [&str; 5] = ["jpg", "jpeg", "png", "webp", "avif"];

fn main() {
    let manifest_dir =
        PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("missing CARGO_MANIFEST_DIR"));
    let workspace_root = manifest_dir.parent().unwrap_or(&manifest_dir).to_path_buf();
    let env_path = workspace_root.join(".env");
    let env_local_path = workspace_root.join(".env.local");

    let _ = dotenvy::from_filename(&env_local_path);
    let _ = dotenvy::from_filename(&env_path);

    println!("cargo:rerun-if-env-changed=PHOTOS_DIR");
    println!("cargo:rerun-if-env-changed=SITE_CONFIG_PATH");
    println!("cargo:rerun-if-changed={}", env_path.display());
    println!("cargo:rerun-if-changed={}", env_local_path.display());

    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("missing OUT_DIR"));

    let catalog = generate_catalog(&workspace_root);
    fs::write(out_dir.join("gallery_catalog.rs"), catalog)
        .unwrap_or_else(|err| panic!("failed to write gallery_catalog.rs: {err}"));

    let site = generate_site(&workspace_root);
    fs::write(out_dir.join("site_config.rs"), site)
        .unwrap_or_else(|err| panic!("failed to write site_config.rs: {err}"));
}

fn resolve_photos_root(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("PHOTOS_DIR").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("photos"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn is_photo_file(name: &str) -> bool {
    let Some((_, ext)) = name.rsplit_once('.') else {
        return false;
    };
    PHOTO_EXTENSIONS
        .iter()
        .any(|known| ext.eq_ignore_ascii_case(known))
}

fn generate_catalog(workspace_root: &Path) -> String {
    let photos_root = resolve_photos_root(workspace_root);
    println!("cargo:rerun-if-changed={}", photos_root.display());

    let mut output = String::new();
    writeln!(&mut output, "pub const GALLERY_CATALOG: &[GalleryEntry] = &[").unwrap();

    // A missing photo root is an empty site, not a build failure.
    let mut gallery_dirs: Vec<PathBuf> = match fs::read_dir(&photos_root) {
        Ok(entries) => entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .collect(),
        Err(_) => Vec::new(),
    };
    gallery_dirs.sort();

    for dir in &gallery_dirs {
        let Some(name) = dir.file_name().and_then(|n| n.to_str()) else {
            panic!("gallery directory {} has a non-UTF-8 name", dir.display());
        };
        println!("cargo:rerun-if-changed={}", dir.display());

        let mut files: Vec<String> = match fs::read_dir(dir) {
            Ok(entries) => entries
                .filter_map(|entry| entry.ok())
                .filter(|entry| entry.path().is_file())
                .filter_map(|entry| entry.file_name().into_string().ok())
                .filter(|file| is_photo_file(file))
                .collect(),
            Err(_) => Vec::new(),
        };
        files.sort();

        writeln!(&mut output, "    GalleryEntry {{").unwrap();
        writeln!(&mut output, "        name: {},", rust_string(name)).unwrap();
        writeln!(&mut output, "        photos: &[").unwrap();
        for file in &files {
            let path = dir.join(file);
            println!("cargo:rerun-if-changed={}", path.display());
            let size = imagesize::size(&path).unwrap_or_else(|err| {
                panic!("failed to read image size for {}: {err}", path.display())
            });
            if size.width == 0 || size.height == 0 {
                panic!(
                    "{} has invalid dimensions {}x{}",
                    path.display(),
                    size.width,
                    size.height
                );
            }
            writeln!(&mut output, "            PhotoEntry {{").unwrap();
            writeln!(&mut output, "                file: {},", rust_string(file)).unwrap();
            writeln!(&mut output, "                width: {},", size.width).unwrap();
            writeln!(&mut output, "                height: {},", size.height).unwrap();
            writeln!(&mut output, "            }},").unwrap();
        }
        writeln!(&mut output, "        ],").unwrap();
        writeln!(&mut output, "    }},").unwrap();
    }

    writeln!(&mut output, "];").unwrap();
    output
}

fn generate_site(workspace_root: &Path) -> String {
    let site_path = resolve_site_path(workspace_root);
    println!("cargo:rerun-if-changed={}", site_path.display());

    let site: SiteFile = match fs::read_to_string(&site_path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_else(|err| {
            panic!("failed to parse site config at {}: {err}", site_path.display())
        }),
        Err(_) => SiteFile {
            name: None,
            title: None,
            description: None,
            url: None,
            author: None,
            og: None,
        },
    };

    let author = site.author.unwrap_or(AuthorEntry {
        name: None,
        instagram: None,
    });
    let og = site.og.unwrap_or(OgEntry {
        image: None,
        width: None,
        height: None,
    });

    let home_path = workspace_root.join("content").join("home.md");
    println!("cargo:rerun-if-changed={}", home_path.display());
    let home_raw = fs::read_to_string(&home_path).unwrap_or_default();

    let mut output = String::new();
    writeln!(&mut output, "pub const SITE: SiteConfig = SiteConfig {{").unwrap();
    writeln!(
        &mut output,
        "    name: {},",
        rust_string(site.name.as_deref().unwrap_or(DEFAULT_SITE_NAME))
    )
    .unwrap();
    writeln!(
        &mut output,
        "    title: {},",
        rust_string(site.title.as_deref().unwrap_or(DEFAULT_SITE_TITLE))
    )
    .unwrap();
    writeln!(
        &mut output,
        "    description: {},",
        rust_string(site.description.as_deref().unwrap_or(DEFAULT_SITE_DESCRIPTION))
    )
    .unwrap();
    writeln!(
        &mut output,
        "    url: {},",
        rust_string(site.url.as_deref().unwrap_or(DEFAULT_SITE_URL))
    )
    .unwrap();
    writeln!(
        &mut output,
        "    author: {},",
        rust_string(author.name.as_deref().unwrap_or(DEFAULT_AUTHOR_NAME))
    )
    .unwrap();
    writeln!(
        &mut output,
        "    instagram: {},",
        rust_string(author.instagram.as_deref().unwrap_or(DEFAULT_AUTHOR_INSTAGRAM))
    )
    .unwrap();
    writeln!(
        &mut output,
        "    og_image: {},",
        rust_string(og.image.as_deref().unwrap_or(DEFAULT_OG_IMAGE))
    )
    .unwrap();
    writeln!(&mut output, "    og_width: {},", og.width.unwrap_or(DEFAULT_OG_WIDTH)).unwrap();
    writeln!(&mut output, "    og_height: {},", og.height.unwrap_or(DEFAULT_OG_HEIGHT)).unwrap();
    writeln!(&mut output, "}};").unwrap();
    writeln!(&mut output).unwrap();
    writeln!(&mut output, "pub const HOME_RAW: &str = {};", rust_string(&home_raw)).unwrap();
    output
}

fn resolve_site_path(workspace_root: &Path) -> PathBuf {
    let env_value = env::var("SITE_CONFIG_PATH").ok();
    let raw_path = match env_value {
        Some(value) if !value.trim().is_empty() => PathBuf::from(value),
        _ => workspace_root.join("site.toml"),
    };
    if raw_path.is_relative() {
        workspace_root.join(raw_path)
    } else {
        raw_path
    }
}

fn rust_string(value: &str) -> String {
    format!("{:?}", value)
}
