use tracing::debug;

use crate::document::TableRow;

/// Parse a `csv`-tagged block into header-keyed rows.
///
/// Short rows get empty cells for the missing columns and cells past the last
/// header are dropped. Records the reader rejects are skipped.
pub fn extract(content: &str) -> Vec<TableRow> {
    let body = strip_csv_tag(content);

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = match reader.headers() {
        Ok(h) => h.clone(),
        Err(e) => {
            debug!("unreadable csv header: {}", e);
            return Vec::new();
        }
    };

    let mut rows = Vec::new();
    for (n, record) in reader.records().enumerate() {
        let record = match record {
            Ok(r) => r,
            Err(e) => {
                debug!("skipping csv record {}: {}", n + 1, e);
                continue;
            }
        };
        let row: TableRow = headers
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                (column.to_string(), record.get(idx).unwrap_or("").to_string())
            })
            .collect();
        rows.push(row);
    }
    rows
}

fn strip_csv_tag(content: &str) -> &str {
    match content.split_once('\n') {
        Some((first, rest)) if first.trim() == "csv" => rest,
        None if content.trim() == "csv" => "",
        _ => content,
    }
}
