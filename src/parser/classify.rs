use std::sync::LazyLock;

use regex::Regex;

use crate::document::SectionType;

static NUMBERED_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d+\.\s+\w").unwrap());

struct Probe<'a> {
    heading: &'a str,
    heading_lower: String,
    content: &'a str,
}

impl Probe<'_> {
    fn heading_has(&self, needles: &[&str]) -> bool {
        needles.iter().any(|n| self.heading_lower.contains(n))
    }
}

type Rule = (fn(&Probe) -> bool, SectionType);

/// Checked top to bottom; the first matching rule decides the type.
const RULES: &[Rule] = &[
    (is_disclaimer, SectionType::Disclaimer),
    (is_csv_table, SectionType::ComparisonTable),
    (is_faq, SectionType::FaqSection),
    (is_numbered, SectionType::PlatformReview),
    (is_verdict, SectionType::Verdict),
];

fn is_disclaimer(p: &Probe) -> bool {
    p.heading_has(&["notice", "disclaimer"])
}

fn is_csv_table(p: &Probe) -> bool {
    p.content.trim().starts_with("csv")
}

fn is_faq(p: &Probe) -> bool {
    p.heading_has(&["faq", "frequently asked"])
}

// Also catches numbered headings that are not reviews; renderers rely on it.
fn is_numbered(p: &Probe) -> bool {
    NUMBERED_RE.is_match(p.heading)
}

fn is_verdict(p: &Probe) -> bool {
    p.heading_has(&["verdict", "conclusion"])
}

pub fn classify(heading: &str, content: &str) -> SectionType {
    let probe = Probe {
        heading,
        heading_lower: heading.to_lowercase(),
        content,
    };
    RULES
        .iter()
        .find(|(matches, _)| matches(&probe))
        .map(|(_, kind)| *kind)
        .unwrap_or(SectionType::Standard)
}
