use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Lines searched from the `Featured image:` label for its sub-markers.
pub const FEATURED_IMAGE_WINDOW: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParseOptions {
    pub featured_image_window: usize,
    /// Reject files whose metadata header has no `Content` line.
    pub strict: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            featured_image_window: FEATURED_IMAGE_WINDOW,
            strict: false,
        }
    }
}

impl ParseOptions {
    /// Load options from a JSON file; missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|source| Error::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| Error::Options {
            path: path.to_path_buf(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_keeps_defaults() {
        let opts: ParseOptions = serde_json::from_str(r#"{"strict": true}"#).unwrap();
        assert!(opts.strict);
        assert_eq!(opts.featured_image_window, FEATURED_IMAGE_WINDOW);
    }

    #[test]
    fn empty_object_is_default() {
        let opts: ParseOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts, ParseOptions::default());
    }
}
