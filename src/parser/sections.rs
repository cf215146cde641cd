use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

static MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(.+?)\s*\(h([1-6])\)$").unwrap());

/// A heading-delimited block before classification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSection {
    pub heading: String,
    pub level: u8,
    pub content: String,
    pub lines: Range<usize>,
}

/// `(heading, level)` when the line is a `(hN)` marker.
pub fn parse_marker(line: &str) -> Option<(String, u8)> {
    let caps = MARKER_RE.captures(line.trim())?;
    let level = caps[2].parse::<u8>().ok()?;
    Some((caps[1].trim().to_string(), level))
}

/// Split `lines[start..]` into marker-delimited sections.
///
/// Lines ahead of the first marker are not emitted; the returned index is
/// where the first section begins (or `lines.len()` when there is none).
pub fn segment(lines: &[&str], start: usize) -> (Vec<RawSection>, usize) {
    let mut sections = Vec::new();
    let mut current: Option<(String, u8, usize)> = None;
    let mut first_marker = lines.len();

    for (i, line) in lines.iter().enumerate().skip(start) {
        let Some((heading, level)) = parse_marker(line) else {
            continue;
        };
        match current.take() {
            Some(open) => sections.push(close(lines, open, i)),
            None => first_marker = i,
        }
        current = Some((heading, level, i));
    }

    if let Some(open) = current {
        sections.push(close(lines, open, lines.len()));
    }

    (sections, first_marker)
}

fn close(lines: &[&str], (heading, level, at): (String, u8, usize), end: usize) -> RawSection {
    RawSection {
        heading,
        level,
        content: lines[at + 1..end].join("\n").trim().to_string(),
        lines: at..end,
    }
}

// ── Tests ──
