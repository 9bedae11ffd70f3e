//! Code lookup and field projection.
//!
//! Pure functions over the in-memory row set; no I/O. The matching rule and
//! the verdict derivation are the contract the verification page exposes, so
//! both are kept exactly as the sheet-driven workflow defines them.

use crate::domain::record::Record;
use crate::domain::resolve::{
    FIELD_LABELS, HIDDEN_COLUMNS, QR_MIN_LEN, STATUS_COLUMNS, VERIFIED_TOKENS,
};

/// The outcome of resolving a code against a snapshot. Derived per request,
/// never cached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    /// Whether any row matched the code.
    pub matched: bool,
    /// Whether the matched row's status value is in the verified set.
    /// Meaningless (always `false`) when `matched` is `false`.
    pub verified: bool,
    /// Display fields as ordered `(label, value)` pairs. Empty when no match.
    pub fields: Vec<(String, String)>,
    /// Base64 PNG payload for the embedded QR image, when the row carries a
    /// plausible one.
    pub qr_base64: Option<String>,
}

impl Verdict {
    pub fn not_found() -> Self {
        Self {
            matched: false,
            verified: false,
            fields: Vec::new(),
            qr_base64: None,
        }
    }
}

/// Resolves a user-supplied code against the row set.
///
/// A row matches if any cell value equals the code after trimming, or
/// contains the code as a substring. Rows are scanned in sheet order and the
/// first match wins; scanning stops there. The substring arm means a short
/// code can match inside an unrelated cell of an earlier row — that lenient
/// behavior is what deployed documents rely on, so it is preserved.
pub fn resolve(code: &str, rows: &[Record]) -> Verdict {
    let row = match rows.iter().find(|row| row_matches(row, code)) {
        Some(row) => row,
        None => return Verdict::not_found(),
    };

    Verdict {
        matched: true,
        verified: is_verified(row),
        fields: project_fields(row),
        qr_base64: qr_payload(row),
    }
}

fn row_matches(row: &Record, code: &str) -> bool {
    row.values().any(|v| v.trim() == code || v.contains(code))
}

/// Reads the status from the first present candidate column and tests it
/// against the verified token set. An absent status column yields an empty
/// string, which is simply not in the set.
fn is_verified(row: &Record) -> bool {
    let status = STATUS_COLUMNS
        .iter()
        .find_map(|col| row.get(col))
        .unwrap_or("");
    VERIFIED_TOKENS.contains(&status.trim())
}

/// Projects the row into labeled display fields, in sheet column order.
///
/// Hidden/technical columns are dropped, as are blank cells and the literal
/// `"0"` (the configurator pads empty numeric cells with 0).
fn project_fields(row: &Record) -> Vec<(String, String)> {
    row.iter()
        .filter(|(col, _)| !HIDDEN_COLUMNS.contains(col))
        .filter(|(_, val)| {
            let trimmed = val.trim();
            !trimmed.is_empty() && *val != "0"
        })
        .map(|(col, val)| (label_for(col), val.to_string()))
        .collect()
}

fn qr_payload(row: &Record) -> Option<String> {
    let raw = row.get("qr_base64")?.trim();
    if raw.len() < QR_MIN_LEN {
        return None;
    }
    Some(raw.to_string())
}

fn label_for(column: &str) -> String {
    FIELD_LABELS
        .iter()
        .find(|(col, _)| *col == column)
        .map(|(_, label)| (*label).to_string())
        .unwrap_or_else(|| humanize(column))
}

/// Default label for unconfigured columns: underscores to spaces, each word
/// title-cased.
fn humanize(column: &str) -> String {
    column
        .split('_')
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
