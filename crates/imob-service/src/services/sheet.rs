//! Tabular sheet codec and reconciliation summary types
//!
//! Bulk import/export moves through a header-row + data-rows CSV sheet. The
//! parser lower-cases column names so imports are header-case-insensitive,
//! and exposes each data row as a field map keyed by column name.

use std::collections::HashMap;

use serde::Serialize;

/// Sheet codec errors
#[derive(Debug, thiserror::Error)]
pub enum SheetError {
    #[error("unreadable sheet: {0}")]
    Unreadable(String),

    #[error("missing header row")]
    MissingHeader,

    #[error("sheet write error: {0}")]
    Write(String),
}

/// One data row as a column-name -> cell map
#[derive(Debug, Clone, Default)]
pub struct Row {
    fields: HashMap<String, String>,
}

impl Row {
    /// Get a cell by lower-cased column name; blank cells count as absent
    pub fn get(&self, column: &str) -> Option<&str> {
        self.fields
            .get(column)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Get a cell as an owned String
    pub fn get_owned(&self, column: &str) -> Option<String> {
        self.get(column).map(str::to_string)
    }

    #[cfg(test)]
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self {
            fields: pairs
                .iter()
                .map(|(k, v)| ((*k).to_lowercase(), (*v).to_string()))
                .collect(),
        }
    }
}

/// Parse CSV bytes into data rows keyed by the lower-cased header
///
/// # Errors
/// Fails atomically on unreadable input or a missing header row; no partial
/// rows are returned.
pub fn parse_rows(bytes: &[u8]) -> Result<Vec<Row>, SheetError> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| SheetError::Unreadable(e.to_string()))?
        .iter()
        .map(|header| header.trim().to_lowercase())
        .collect();

    if headers.iter().all(String::is_empty) {
        return Err(SheetError::MissingHeader);
    }

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| SheetError::Unreadable(e.to_string()))?;

        let mut fields = HashMap::new();
        for (index, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = record.get(index).unwrap_or("").trim().to_string();
            fields.insert(header.clone(), value);
        }
        rows.push(Row { fields });
    }

    Ok(rows)
}

/// Serialize a header row plus data rows into CSV bytes
///
/// # Errors
/// Returns an error if the underlying writer fails
pub fn write_sheet(headers: &[&str], rows: &[Vec<String>]) -> Result<Vec<u8>, SheetError> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    writer
        .write_record(headers)
        .map_err(|e| SheetError::Write(e.to_string()))?;
    for row in rows {
        writer
            .write_record(row)
            .map_err(|e| SheetError::Write(e.to_string()))?;
    }

    writer
        .into_inner()
        .map_err(|e| SheetError::Write(e.to_string()))
}

/// Human label for a lifecycle flag in exported sheets
#[must_use]
pub fn status_label(is_disabled: bool) -> &'static str {
    if is_disabled {
        "Inativo"
    } else {
        "Ativo"
    }
}

// ============================================================================
// Reconciliation summary
// ============================================================================

/// Outcome of one import row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowStatus {
    Created,
    Updated,
    Ignored,
}

/// Per-row detail entry in the import summary
#[derive(Debug, Clone, Serialize)]
pub struct RowDetail {
    /// Natural key fields of the row
    pub key: String,
    pub status: RowStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Aggregate result of a bulk import
#[derive(Debug, Default, Serialize)]
pub struct ImportSummary {
    pub message: String,
    pub created: u64,
    pub updated: u64,
    pub deactivated: u64,
    pub ignored: u64,
    pub details: Vec<RowDetail>,
}

impl ImportSummary {
    /// Tally a created row
    pub fn record_created(&mut self, key: impl Into<String>) {
        self.created += 1;
        self.details.push(RowDetail {
            key: key.into(),
            status: RowStatus::Created,
            reason: None,
        });
    }

    /// Tally an updated (re-activated) row
    pub fn record_updated(&mut self, key: impl Into<String>) {
        self.updated += 1;
        self.details.push(RowDetail {
            key: key.into(),
            status: RowStatus::Updated,
            reason: None,
        });
    }

    /// Tally an ignored row with its reason
    pub fn record_ignored(&mut self, key: impl Into<String>, reason: impl Into<String>) {
        self.ignored += 1;
        self.details.push(RowDetail {
            key: key.into(),
            status: RowStatus::Ignored,
            reason: Some(reason.into()),
        });
    }

    /// Compose the final human-readable message
    pub fn finish(&mut self, family: &str) {
        self.message = format!(
            "Import finished: {} {} created, {} updated (and re-activated), \
             {} deactivated, {} ignored.",
            self.created, family, self.updated, self.deactivated, self.ignored
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lowercases_headers() {
        let csv = b"Name,EMAIL\nMaria,maria@example.com\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), Some("Maria"));
        assert_eq!(rows[0].get("email"), Some("maria@example.com"));
    }

    #[test]
    fn test_parse_blank_cells_are_absent() {
        let csv = b"name,email\n,x@y.com\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows[0].get("name"), None);
        assert_eq!(rows[0].get("email"), Some("x@y.com"));
    }

    #[test]
    fn test_parse_trims_cells() {
        let csv = b"name\n  Maria  \n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows[0].get("name"), Some("Maria"));
    }

    #[test]
    fn test_parse_short_rows_tolerated() {
        let csv = b"name,email,phone\nMaria,x@y.com\n";
        let rows = parse_rows(csv).unwrap();
        assert_eq!(rows[0].get("phone"), None);
    }

    #[test]
    fn test_parse_missing_header() {
        assert!(matches!(parse_rows(b""), Err(SheetError::MissingHeader)));
        assert!(matches!(parse_rows(b",,\n"), Err(SheetError::MissingHeader)));
    }

    #[test]
    fn test_parse_rejects_binary_garbage() {
        // Invalid UTF-8 in a quoted field surfaces as an unreadable sheet
        let bytes = b"name\n\"\xff\xfe\x00\x01\n";
        assert!(parse_rows(bytes).is_err());
    }

    #[test]
    fn test_write_then_parse_roundtrip() {
        let bytes = write_sheet(
            &["name", "email"],
            &[vec!["Maria".to_string(), "maria@example.com".to_string()]],
        )
        .unwrap();

        let rows = parse_rows(&bytes).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].get("name"), Some("Maria"));
    }

    #[test]
    fn test_status_label() {
        assert_eq!(status_label(false), "Ativo");
        assert_eq!(status_label(true), "Inativo");
    }

    #[test]
    fn test_summary_tallies() {
        let mut summary = ImportSummary::default();
        summary.record_created("a@b.com");
        summary.record_updated("c@d.com");
        summary.record_ignored("(missing email)", "email column empty");
        summary.deactivated = 3;
        summary.finish("users");

        assert_eq!(summary.created, 1);
        assert_eq!(summary.updated, 1);
        assert_eq!(summary.ignored, 1);
        assert_eq!(summary.details.len(), 3);
        assert!(summary.message.contains("3 deactivated"));
    }
}
