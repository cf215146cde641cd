use std::sync::LazyLock;

use regex::Regex;

use crate::document::PlatformReview;

static TITLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+\.\s+(.+?)\s+-\s+(.+)$").unwrap());
static NUMBER_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+").unwrap());

const BULLET: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Part {
    Intro,
    Pros,
    Cons,
    Details,
    Verdict,
}

impl Part {
    /// The part a marker line switches to, if the line is a marker.
    fn from_marker(line: &str) -> Option<Part> {
        if line.starts_with("Pros:") {
            Some(Part::Pros)
        } else if line.starts_with("Cons:") {
            Some(Part::Cons)
        } else if line.contains("Compatibility:") || line.contains("Compliance:") {
            Some(Part::Details)
        } else if line.starts_with("Verdict:") {
            Some(Part::Verdict)
        } else {
            None
        }
    }
}

pub fn extract(heading: &str, content: &str) -> PlatformReview {
    let (platform_name, tagline) = split_title(heading);
    let mut review = PlatformReview {
        platform_name,
        tagline,
        ..Default::default()
    };

    let mut part = Part::Intro;
    let mut intro: Vec<&str> = Vec::new();
    let mut verdict: Vec<&str> = Vec::new();

    for line in content.lines().map(str::trim) {
        if let Some(next) = Part::from_marker(line) {
            part = next;
            continue;
        }

        if let Some(item) = line.strip_prefix(BULLET) {
            let item = item.trim().to_string();
            match part {
                Part::Pros => review.pros.push(item),
                Part::Cons => review.cons.push(item),
                _ => {}
            }
            continue;
        }

        if line.is_empty() {
            continue;
        }

        match part {
            Part::Intro => intro.push(line),
            Part::Verdict => verdict.push(line),
            Part::Details => {
                if let Some((key, value)) = line.split_once(':') {
                    review.details.insert(key.trim().to_string(), value.trim().to_string());
                }
            }
            Part::Pros | Part::Cons => {}
        }
    }

    review.intro = intro.join(" ");
    review.verdict = verdict.join(" ").trim().to_string();
    review
}

/// `"1. Casumo - Play More"` → `("Casumo", "Play More")`.
fn split_title(heading: &str) -> (String, String) {
    let heading = heading.trim();
    if let Some(caps) = TITLE_RE.captures(heading) {
        return (caps[1].trim().to_string(), caps[2].trim().to_string());
    }
    let name = NUMBER_RE.replace(heading, "");
    (name.trim().to_string(), String::new())
}
