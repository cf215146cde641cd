use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::info;

use crate::document::Document;
use crate::error::{Error, Result};
use crate::options::ParseOptions;
use crate::parser;

/// Read and structure one file.
///
/// Unreadable or non-UTF-8 files are errors. A missing `Content` marker is an
/// error only with `strict`; otherwise the document simply has no sections.
pub fn load_document(path: &Path, opts: &ParseOptions) -> Result<Document> {
    let bytes = std::fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let text = String::from_utf8(bytes).map_err(|_| Error::Utf8 {
        path: path.to_path_buf(),
    })?;

    let (document, has_content) = parser::structure(&text, opts);
    if !has_content && opts.strict {
        return Err(Error::MissingContent {
            path: path.to_path_buf(),
        });
    }

    info!(
        "Parsed {}: {} sections",
        path.display(),
        document.sections.len()
    );
    Ok(document)
}

/// Structure several files in parallel; results keep the input order.
pub fn parse_files(paths: &[PathBuf], opts: &ParseOptions) -> Vec<(PathBuf, Result<Document>)> {
    paths
        .par_iter()
        .map(|p| (p.clone(), load_document(p, opts)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loads_fixture() {
        let doc = load_document(Path::new("tests/fixtures/crypto_casinos.txt"), &ParseOptions::default()).unwrap();
        assert_eq!(doc.sections.len(), 9);
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = load_document(Path::new("tests/fixtures/nope.txt"), &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Read { .. }));
        assert!(err.to_string().contains("nope.txt"));
    }

    #[test]
    fn strict_rejects_missing_content_marker() {
        let path = Path::new("tests/fixtures/no_content_marker.txt");
        let lenient = load_document(path, &ParseOptions::default()).unwrap();
        assert!(lenient.sections.is_empty());

        let strict = ParseOptions {
            strict: true,
            ..Default::default()
        };
        let err = load_document(path, &strict).unwrap_err();
        assert!(matches!(err, Error::MissingContent { .. }));
        assert!(err.to_string().contains("no_content_marker.txt"));
    }

    #[test]
    fn non_utf8_is_rejected() {
        let err = load_document(Path::new("tests/fixtures/latin1.txt"), &ParseOptions::default()).unwrap_err();
        assert!(matches!(err, Error::Utf8 { .. }));
    }

    #[test]
    fn parallel_results_keep_order() {
        let paths = vec![
            PathBuf::from("tests/fixtures/casumo_review.txt"),
            PathBuf::from("tests/fixtures/missing.txt"),
            PathBuf::from("tests/fixtures/crypto_casinos.txt"),
        ];
        let results = parse_files(&paths, &ParseOptions::default());
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].0, paths[0]);
        assert!(results[0].1.is_ok());
        assert!(results[1].1.is_err());
        assert_eq!(results[2].1.as_ref().unwrap().sections.len(), 9);
    }
}
