pub mod classify;
pub mod extract;
pub mod metadata;
pub mod sections;

use tracing::{debug, warn};

use crate::document::{Document, Section};
use crate::options::ParseOptions;

/// Four-stage pipeline: header fields → sections → section types → sub-parsed payloads.
pub fn parse_document(text: &str, opts: &ParseOptions) -> Document {
    structure(text, opts).0
}

/// Same as [`parse_document`], also reporting whether the `Content` marker was seen.
pub(crate) fn structure(text: &str, opts: &ParseOptions) -> (Document, bool) {
    let lines: Vec<&str> = text.lines().collect();
    let header = metadata::scan_header(&lines, opts.featured_image_window);

    let Some(cursor) = header.cursor else {
        warn!("no `Content` marker in {} lines, body left unstructured", lines.len());
        let document = Document {
            metadata: header.metadata,
            sections: Vec::new(),
            header_span: 0..lines.len(),
            preamble_span: lines.len()..lines.len(),
        };
        return (document, false);
    };

    let (raw, first_marker) = sections::segment(&lines, cursor);
    let sections = raw
        .into_iter()
        .map(|s| {
            let kind = classify::classify(&s.heading, &s.content);
            debug!(heading_level = s.level, %kind, heading = %s.heading, "classified section");
            let data = extract::extract(kind, &s.heading, &s.content);
            Section {
                heading: s.heading,
                level: s.level,
                content: s.content,
                kind,
                data,
                lines: s.lines,
            }
        })
        .collect();

    let document = Document {
        metadata: header.metadata,
        sections,
        header_span: 0..cursor,
        preamble_span: cursor..first_marker,
    };
    (document, true)
}

// ── Tests ──
