#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    pub name: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub url: &'static str,
    pub author: &'static str,
    pub instagram: &'static str,
    pub og_image: &'static str,
    pub og_width: u32,
    pub og_height: u32,
}

include!(concat!(env!("OUT_DIR"), "/site_config.rs"));

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HomeContent {
    pub title: String,
    pub description: String,
}

// First non-blank line (leading #s stripped) is the title; the remaining
// non-blank lines joined with spaces form the description.
pub fn parse_home_content(raw: &str) -> HomeContent {
    let lines: Vec<&str> = raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    let title = lines
        .first()
        .map(|line| line.trim_start_matches('#').trim_start().to_string())
        .unwrap_or_default();
    let description = lines.get(1..).unwrap_or_default().join(" ");
    HomeContent { title, description }
}

pub fn home_content() -> HomeContent {
    parse_home_content(HOME_RAW)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_title_and_joined_description() {
        let content = parse_home_content("# Pile of Prints\n\nSmall moments.\nWorth keeping.\n");
        assert_eq!(content.title, "Pile of Prints");
        assert_eq!(content.description, "Small moments. Worth keeping.");
    }

    #[test]
    fn absent_content_yields_empty_strings() {
        let content = parse_home_content("");
        assert_eq!(content.title, "");
        assert_eq!(content.description, "");
    }

    #[test]
    fn plain_first_line_works_without_heading_marker() {
        let content = parse_home_content("Prints\n");
        assert_eq!(content.title, "Prints");
        assert_eq!(content.description, "");
    }
}
