use std::collections::BTreeMap;
use std::ops::Range;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A fully structured input file: header metadata plus the ordered sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub metadata: Metadata,
    pub sections: Vec<Section>,
    /// Source lines scanned as metadata, including the `Content` marker.
    pub header_span: Range<usize>,
    /// Lines between the `Content` marker and the first heading marker.
    pub preamble_span: Range<usize>,
}

impl Document {
    /// Every raw line range in source order: header, preamble, then one per section.
    pub fn spans(&self) -> impl Iterator<Item = Range<usize>> + '_ {
        [self.header_span.clone(), self.preamble_span.clone()]
            .into_iter()
            .chain(self.sections.iter().map(|s| s.lines.clone()))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub target_keyword: String,
    pub target_geo: String,
    pub url_slug: String,
    pub meta_title: String,
    pub meta_description: String,
    pub notes: String,
    pub featured_image: Option<FeaturedImage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedImage {
    pub description: String,
    pub seo_title: String,
    pub alt_tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub heading: String,
    pub level: u8,
    pub content: String,
    #[serde(rename = "type")]
    pub kind: SectionType,
    #[serde(rename = "type_data", skip_serializing_if = "Option::is_none", default)]
    pub data: Option<TypeData>,
    /// Marker line through the end of the content span.
    pub lines: Range<usize>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionType {
    Disclaimer,
    ComparisonTable,
    PlatformReview,
    FaqSection,
    Verdict,
    Standard,
}

impl SectionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionType::Disclaimer => "disclaimer",
            SectionType::ComparisonTable => "comparison_table",
            SectionType::PlatformReview => "platform_review",
            SectionType::FaqSection => "faq_section",
            SectionType::Verdict => "verdict",
            SectionType::Standard => "standard",
        }
    }
}

impl std::fmt::Display for SectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Sub-parsed payload attached to table, review and disclaimer sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeData {
    Table(Vec<TableRow>),
    Review(PlatformReview),
    Disclaimer(DisclaimerBlock),
}

/// Column header → cell, in header order.
pub type TableRow = IndexMap<String, String>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlatformReview {
    pub platform_name: String,
    pub tagline: String,
    pub intro: String,
    pub pros: Vec<String>,
    pub cons: Vec<String>,
    pub details: BTreeMap<String, String>,
    pub verdict: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclaimerBlock {
    pub groups: Vec<DisclaimerGroup>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisclaimerGroup {
    pub title: String,
    pub lines: Vec<String>,
}
