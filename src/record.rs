// src/record.rs

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::sync::Arc;

/// Ordered rows of one document.
pub type Dataset = Vec<Record>;

/// One data row, keyed by the header row. All records of a dataset share the
/// same header allocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    headers: Arc<[String]>,
    values: Vec<String>,
}

impl Record {
    pub(crate) fn new(headers: Arc<[String]>, values: Vec<String>) -> Self {
        Record { headers, values }
    }

    /// Build a record from `(key, value)` pairs; the pair order becomes the
    /// header order.
    pub fn from_pairs<K, V, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let (headers, values): (Vec<String>, Vec<String>) = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .unzip();
        Record::new(headers.into(), values)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        let idx = self.headers.iter().position(|h| h == key)?;
        self.values.get(idx).map(String::as_str)
    }

    /// Header/value pairs in header order. A short row stops early.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .zip(self.values.iter())
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.iter().map(|(k, _)| k)
    }

    /// The full header row, including keys this row has no value for.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of keyed values present.
    pub fn len(&self) -> usize {
        self.values.len().min(self.headers.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Values past the last header column.
    pub fn extra(&self) -> &[String] {
        self.values.get(self.headers.len()..).unwrap_or(&[])
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
