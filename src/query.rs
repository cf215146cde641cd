//! Read-only lookups over a structured document.
//!
//! These mirror what page builders pull out of a [`Document`] before
//! rendering: the article header, FAQ pairs, platform names and the closing
//! verdict.

use serde::Serialize;

use crate::document::{Document, Section, SectionType, TypeData};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArticleHeader {
    pub heading: String,
    pub intro_paragraphs: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

pub fn sections_of(document: &Document, kind: SectionType) -> impl Iterator<Item = &Section> {
    document.sections.iter().filter(move |s| s.kind == kind)
}

/// The leading level-1 section with its first two non-empty lines.
pub fn article_header(document: &Document) -> Option<ArticleHeader> {
    let first = document.sections.first().filter(|s| s.level == 1)?;
    let intro_paragraphs = first
        .content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(2)
        .map(str::to_string)
        .collect();
    Some(ArticleHeader {
        heading: first.heading.clone(),
        intro_paragraphs,
    })
}

/// Platform names in document order: a review contributes its heading name,
/// a comparison table its `Casino` (or `Platform`) column. First occurrence wins.
pub fn platform_names(document: &Document) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    let mut push = |name: &str| {
        let name = name.trim();
        if !name.is_empty() && !names.iter().any(|n| n == name) {
            names.push(name.to_string());
        }
    };

    for section in &document.sections {
        match &section.data {
            Some(TypeData::Review(r)) => push(&r.platform_name),
            Some(TypeData::Table(rows)) => {
                for row in rows {
                    if let Some(name) = row.get("Casino").or_else(|| row.get("Platform")) {
                        push(name);
                    }
                }
            }
            _ => {}
        }
    }
    names
}

/// Questions and answers belonging to the first FAQ section.
///
/// Level-3 sections following the FAQ heading are the entries, up to the next
/// level-2 section. Without such children the FAQ body itself is read as
/// alternating question lines (containing `?`) and answer lines.
pub fn faqs(document: &Document) -> Vec<FaqEntry> {
    let Some(at) = document
        .sections
        .iter()
        .position(|s| s.kind == SectionType::FaqSection)
    else {
        return Vec::new();
    };

    let children: Vec<FaqEntry> = document.sections[at + 1..]
        .iter()
        .take_while(|s| s.level != 2)
        .filter(|s| s.level == 3 && !s.heading.is_empty())
        .map(|s| FaqEntry {
            question: s.heading.clone(),
            answer: s.content.clone(),
        })
        .collect();

    if children.is_empty() {
        inline_faqs(&document.sections[at].content)
    } else {
        children
    }
}

fn inline_faqs(content: &str) -> Vec<FaqEntry> {
    let mut entries = Vec::new();
    let mut question: Option<&str> = None;
    let mut answer: Vec<&str> = Vec::new();

    for line in content.lines().map(str::trim) {
        if line.contains('?') && !line.starts_with('•') {
            if let Some(q) = question.replace(line) {
                entries.push(FaqEntry {
                    question: q.to_string(),
                    answer: answer.join(" "),
                });
            }
            answer.clear();
        } else if !line.is_empty() && question.is_some() {
            answer.push(line);
        }
    }
    if let Some(q) = question {
        entries.push(FaqEntry {
            question: q.to_string(),
            answer: answer.join(" "),
        });
    }
    entries
}

/// First section headed `Final Verdict` or `Conclusion`.
pub fn conclusion(document: &Document) -> Option<&Section> {
    document
        .sections
        .iter()
        .find(|s| s.heading.contains("Final Verdict") || s.heading.contains("Conclusion"))
}

// ── Tests ──
