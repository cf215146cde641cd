pub mod disclaimer;
pub mod review;
pub mod table;

use crate::document::{SectionType, TypeData};

/// Sub-parse a classified section. Only tables, reviews and disclaimers carry a payload.
pub fn extract(kind: SectionType, heading: &str, content: &str) -> Option<TypeData> {
    match kind {
        SectionType::ComparisonTable => Some(TypeData::Table(table::extract(content))),
        SectionType::PlatformReview => Some(TypeData::Review(review::extract(heading, content))),
        SectionType::Disclaimer => Some(TypeData::Disclaimer(disclaimer::extract(content))),
        SectionType::FaqSection | SectionType::Verdict | SectionType::Standard => None,
    }
}
