use crate::document::{FeaturedImage, Metadata};

const CONTENT_MARKER: &str = "Content";

const TARGET_KEYWORD: &str = "Target Keyword:";
const TARGET_GEO: &str = "Target Geo:";
const URL_SLUG: &str = "URL Slug:";
const META_TITLE: &str = "Meta Title";
const META_DESCRIPTION: &str = "Meta Description";
const NOTES: &str = "Notes for MJ:";
const FEATURED_IMAGE: &str = "Featured image:";
const SEO_TITLE: &str = "SEO Title:";
const ALT_TAG: &str = "ALT Tag:";

/// Labels that end a free-text notes block.
const FIELD_PREFIXES: &[&str] = &[
    TARGET_KEYWORD,
    TARGET_GEO,
    URL_SLUG,
    META_TITLE,
    META_DESCRIPTION,
    NOTES,
    FEATURED_IMAGE,
];

pub struct Header {
    pub metadata: Metadata,
    /// First body line after the `Content` marker, if the marker was found.
    pub cursor: Option<usize>,
}

/// Scan header fields from the top of the file down to the `Content` marker.
pub fn scan_header(lines: &[&str], image_window: usize) -> Header {
    let mut metadata = Metadata::default();
    let mut cursor = None;
    let mut i = 0;

    while i < lines.len() {
        let line = lines[i].trim();

        if line == CONTENT_MARKER {
            cursor = Some(i + 1);
            break;
        }

        // ── Same-line fields ──
        if let Some(value) = line.strip_prefix(TARGET_KEYWORD) {
            metadata.target_keyword = value.trim().to_string();
            i += 1;
            continue;
        }
        if let Some(value) = line.strip_prefix(TARGET_GEO) {
            metadata.target_geo = value.trim().to_string();
            i += 1;
            continue;
        }

        // ── Next-line fields ──
        let next_line_target = if line == URL_SLUG {
            Some(&mut metadata.url_slug)
        } else if line.starts_with(META_TITLE) {
            Some(&mut metadata.meta_title)
        } else if line.starts_with(META_DESCRIPTION) {
            Some(&mut metadata.meta_description)
        } else {
            None
        };
        if let Some(target) = next_line_target {
            let (value, next) = next_value(lines, i + 1);
            *target = value;
            i = next;
            continue;
        }

        // ── Lookahead fields ──
        if line.starts_with(NOTES) {
            let (notes, next) = consume_notes(lines, i + 1);
            metadata.notes = notes;
            i = next;
            continue;
        }
        if line.starts_with(FEATURED_IMAGE) {
            let (image, next) = consume_featured_image(lines, i, image_window);
            metadata.featured_image = image;
            i = next;
            continue;
        }

        i += 1;
    }

    Header { metadata, cursor }
}

fn is_field_label(line: &str) -> bool {
    FIELD_PREFIXES.iter().any(|p| line.starts_with(p))
}

/// First non-empty line at or after `start`, without crossing the `Content` marker.
/// Returns the value and the index to resume scanning from.
fn next_value(lines: &[&str], start: usize) -> (String, usize) {
    let mut j = start;
    while j < lines.len() {
        let l = lines[j].trim();
        if l == CONTENT_MARKER {
            return (String::new(), j);
        }
        if !l.is_empty() {
            return (l.to_string(), j + 1);
        }
        j += 1;
    }
    (String::new(), j)
}

fn consume_notes(lines: &[&str], start: usize) -> (String, usize) {
    let mut j = start;
    while j < lines.len() {
        let l = lines[j].trim();
        if l == CONTENT_MARKER || is_field_label(l) {
            break;
        }
        j += 1;
    }
    let notes = lines[start.min(j)..j].join("\n").trim().to_string();
    (notes, j)
}

/// `label` is the index of the `Featured image:` line. The description is the
/// first line of the block that follows it; `SEO Title:` and `ALT Tag:` are
/// looked up within `window` lines counted from the label.
fn consume_featured_image(
    lines: &[&str],
    label: usize,
    window: usize,
) -> (Option<FeaturedImage>, usize) {
    let mut j = label + 1;
    while j < lines.len() && lines[j].trim().is_empty() {
        j += 1;
    }

    let mut description_lines = Vec::new();
    while j < lines.len() {
        let l = lines[j].trim();
        if l.is_empty() || l == CONTENT_MARKER || l.starts_with(SEO_TITLE) || is_field_label(l) {
            break;
        }
        description_lines.push(l);
        j += 1;
    }

    let mut image = FeaturedImage {
        description: description_lines.first().map(|d| d.to_string()).unwrap_or_default(),
        ..Default::default()
    };

    let end = label.saturating_add(window).min(lines.len());
    for l in lines[label..end].iter().map(|l| l.trim()) {
        if l == CONTENT_MARKER {
            break;
        }
        if let Some(v) = l.strip_prefix(SEO_TITLE) {
            image.seo_title = v.trim().to_string();
        } else if let Some(v) = l.strip_prefix(ALT_TAG) {
            image.alt_tag = v.trim().to_string();
        }
    }

    let found = !image.description.is_empty()
        || !image.seo_title.is_empty()
        || !image.alt_tag.is_empty();
    (found.then_some(image), j)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn scan(text: &str) -> Header {
        let lines: Vec<&str> = text.lines().collect();
        scan_header(&lines, 10)
    }

    #[test]
    fn same_line_fields() {
        let h = scan("Target Keyword: best crypto casinos\nTarget Geo:  UK \nContent");
        assert_eq!(h.metadata.target_keyword, "best crypto casinos");
        assert_eq!(h.metadata.target_geo, "UK");
        assert_eq!(h.cursor, Some(3));
    }

    #[test]
    fn next_line_fields() {
        let h = scan(
            "URL Slug:\n/crypto-casinos/\nMeta Title (60 chars)\n\nBest Crypto Casinos 2025\nMeta Description\nCompare the top sites.\nContent\n",
        );
        assert_eq!(h.metadata.url_slug, "/crypto-casinos/");
        assert_eq!(h.metadata.meta_title, "Best Crypto Casinos 2025");
        assert_eq!(h.metadata.meta_description, "Compare the top sites.");
    }

    #[test]
    fn next_line_field_does_not_swallow_content_marker() {
        let h = scan("Meta Title\n\nContent\nIntro (h1)");
        assert_eq!(h.metadata.meta_title, "");
        assert_eq!(h.cursor, Some(3));
    }

    #[test]
    fn notes_stop_at_next_field() {
        let h = scan("Notes for MJ:\nUse a friendly tone.\n\nLink the review pages.\nTarget Geo: UK\nContent");
        assert_eq!(h.metadata.notes, "Use a friendly tone.\n\nLink the review pages.");
        assert_eq!(h.metadata.target_geo, "UK");
    }

    #[test]
    fn notes_stop_at_content() {
        let h = scan("Notes for MJ:\nKeep it short.\nContent\nTitle (h1)");
        assert_eq!(h.metadata.notes, "Keep it short.");
        assert_eq!(h.cursor, Some(3));
    }

    #[test]
    fn featured_image_block() {
        let h = scan(
            "Featured image:\nA neon casino lobby at night\nSEO Title: crypto-casino-lobby\nALT Tag: Neon casino lobby\nContent",
        );
        let image = h.metadata.featured_image.unwrap();
        assert_eq!(image.description, "A neon casino lobby at night");
        assert_eq!(image.seo_title, "crypto-casino-lobby");
        assert_eq!(image.alt_tag, "Neon casino lobby");
    }

    #[test]
    fn featured_image_window_is_bounded() {
        let mut text = String::from("Featured image:\nLobby\n");
        for _ in 0..12 {
            text.push_str("filler\n");
        }
        text.push_str("ALT Tag: too far\nContent");
        let lines: Vec<&str> = text.lines().collect();
        let image = scan_header(&lines, 10).metadata.featured_image.unwrap();
        assert_eq!(image.description, "Lobby");
        assert_eq!(image.alt_tag, "");
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let h = scan("Content\nIntro (h1)");
        assert_eq!(h.metadata, Metadata::default());
        assert_eq!(h.cursor, Some(1));
    }

    #[test]
    fn missing_content_marker_leaves_cursor_unset() {
        let h = scan("Target Keyword: x\nIntro (h1)\nBody");
        assert_eq!(h.metadata.target_keyword, "x");
        assert!(h.cursor.is_none());
    }
}
