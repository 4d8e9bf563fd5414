//! Export/import serialization for the shape document.
//!
//! The export format is a bare JSON array of `{id, type, x, y}` objects in
//! store order, with no wrapper object and no schema version. Import
//! accepts any JSON document whose top-level value is an array; elements are
//! read leniently (see [`Shape::from_json`]) so a malformed entry still lands
//! in the store rather than rejecting the file.

#[cfg(test)]
#[path = "ser_test.rs"]
mod ser_test;

use crate::consts::DEFAULT_EXPORT_STEM;
use crate::doc::Shape;

/// Why an import was rejected. The display string is shown to the user
/// verbatim by the host; the store is left untouched in both cases.
#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    /// The file's text is not valid JSON.
    #[error("Failed to load shapes: {0}")]
    Parse(#[from] serde_json::Error),
    /// The text parsed, but the top-level value is not an array.
    #[error("Invalid file format")]
    NotAnArray,
}

/// Serialize the shape sequence for download. Pretty-printed; the output is
/// a user-facing file.
///
/// # Errors
///
/// Returns `Err` if JSON serialization fails.
pub fn export_document(shapes: &[Shape]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(shapes)
}

/// Parse an imported document into a shape sequence.
///
/// Succeeds only when the text parses as JSON and the top-level value is an
/// array. Elements get no further validation.
///
/// # Errors
///
/// [`ImportError::Parse`] when the text is not JSON; [`ImportError::NotAnArray`]
/// when the parsed value has a non-array top level.
pub fn import_document(text: &str) -> Result<Vec<Shape>, ImportError> {
    let value: serde_json::Value = serde_json::from_str(text)?;
    let Some(items) = value.as_array() else {
        return Err(ImportError::NotAnArray);
    };
    Ok(items.iter().map(Shape::from_json).collect())
}

/// File name for an export, derived from the user-entered title.
///
/// The title is trimmed and falls back to the default stem when blank.
#[must_use]
pub fn export_file_name(title: &str) -> String {
    let stem = title.trim();
    let stem = if stem.is_empty() { DEFAULT_EXPORT_STEM } else { stem };
    format!("{stem}.json")
}
