//! Schema-less row types for the verification lookup.
//!
//! The backing worksheet has no fixed schema: columns are whatever the
//! document configurator wrote, in whatever order. A [`Record`] is therefore
//! an ordered mapping of column name to cell value rather than a typed
//! struct, and every column is optional.

use chrono::{DateTime, Utc};

/// One row from the backing worksheet, in sheet column order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    columns: Vec<(String, String)>,
}

impl Record {
    pub fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self { columns: pairs }
    }

    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.columns.push((name.into(), value.into()));
    }

    /// Returns the value of the first column with the given name, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(col, _)| col == name)
            .map(|(_, val)| val.as_str())
    }

    /// Iterates `(column, value)` pairs in sheet column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns.iter().map(|(c, v)| (c.as_str(), v.as_str()))
    }

    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// True if every cell in the row is blank after trimming.
    pub fn is_blank(&self) -> bool {
        self.columns.iter().all(|(_, v)| v.trim().is_empty())
    }
}

impl FromIterator<(String, String)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}

/// The full row set as of the last successful fetch.
///
/// Exactly one live snapshot exists per service instance; it is replaced
/// wholesale on the next successful fetch (no per-row updates).
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub rows: Vec<Record>,
    /// `None` until the first fetch succeeds.
    pub fetched_at: Option<DateTime<Utc>>,
}

impl Snapshot {
    /// The snapshot served before any fetch has succeeded.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn new(rows: Vec<Record>) -> Self {
        Self {
            rows,
            fetched_at: Some(Utc::now()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_first_occurrence_in_order() {
        let mut r = Record::new();
        r.push("estado", "pendiente");
        r.push("estado", "verificado");
        assert_eq!(r.get("estado"), Some("pendiente"));
        assert_eq!(r.get("missing"), None);
    }

    #[test]
    fn iter_preserves_column_order() {
        let r = Record::from_pairs(vec![
            ("b".into(), "2".into()),
            ("a".into(), "1".into()),
            ("c".into(), "3".into()),
        ]);
        let cols: Vec<&str> = r.iter().map(|(c, _)| c).collect();
        assert_eq!(cols, vec!["b", "a", "c"]);
    }

    #[test]
    fn blank_rows_are_detected() {
        let r = Record::from_pairs(vec![("a".into(), "  ".into()), ("b".into(), "".into())]);
        assert!(r.is_blank());
        let r = Record::from_pairs(vec![("a".into(), " x ".into())]);
        assert!(!r.is_blank());
    }

    #[test]
    fn empty_snapshot_has_no_timestamp() {
        let s = Snapshot::empty();
        assert!(s.rows.is_empty());
        assert!(s.fetched_at.is_none());
        assert!(Snapshot::new(vec![Record::new()]).fetched_at.is_some());
    }
}
