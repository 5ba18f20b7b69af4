// src/parse.rs

use csv::{ReaderBuilder, StringRecord, Trim};
use std::{collections::HashSet, sync::Arc};
use tracing::{debug, warn};

use crate::config::ParseOptions;
use crate::record::{Dataset, Record};

/// Parse a delimited document whose first line is the header row.
///
/// Empty lines are skipped, so a zero-byte body or a lone header gives an
/// empty dataset. The body must be UTF-8; anything else is a parse error. A
/// leading UTF-8 BOM is dropped.
pub fn parse_dataset(body: &[u8], options: &ParseOptions) -> Result<Dataset, csv::Error> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .delimiter(options.delimiter)
        .quote(options.quote)
        .flexible(options.flexible)
        .trim(if options.trim { Trim::All } else { Trim::None })
        .from_reader(body);

    let headers = unique_headers(rdr.headers()?);
    debug!(columns = headers.len(), "parsed header row");

    let mut out = Vec::new();
    let mut ragged = 0usize;
    for row in rdr.records() {
        let row = row?;
        if row.len() != headers.len() {
            ragged += 1;
        }
        out.push(Record::new(
            Arc::clone(&headers),
            row.iter().map(str::to_string).collect(),
        ));
    }

    if ragged > 0 {
        warn!(rows = ragged, columns = headers.len(), "rows with mismatched field count");
    }
    Ok(out)
}

/// Rename repeated header names `a`, `a` → `a`, `a_1`, skipping names already
/// present in the row.
fn unique_headers(raw: &StringRecord) -> Arc<[String]> {
    let taken: HashSet<&str> = raw.iter().collect();
    let mut seen: HashSet<String> = HashSet::with_capacity(raw.len());
    let mut out = Vec::with_capacity(raw.len());

    for name in raw.iter() {
        let mut candidate = name.to_string();
        let mut n = 1;
        while seen.contains(&candidate) {
            candidate = format!("{}_{}", name, n);
            n += 1;
            // a later column owns this name
            if taken.contains(candidate.as_str()) {
                candidate = name.to_string();
            }
        }
        seen.insert(candidate.clone());
        out.push(candidate);
    }
    out.into()
}
