use std::fs;
use std::path::Path;

use crate::{Checklist, ChecklistError};

/// Load a checklist from a JSON file on disk.
pub fn checklist_from_file(path: &Path) -> Result<Checklist, ChecklistError> {
    let data = fs::read_to_string(path)?;
    let checklist = checklist_from_str(&data)?;
    tracing::info!(
        path = %path.display(),
        items = checklist.len(),
        "loaded checklist"
    );
    Ok(checklist)
}

/// Load a checklist from an in-memory JSON string.
pub fn checklist_from_str(input: &str) -> Result<Checklist, ChecklistError> {
    Ok(serde_json::from_str(input)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_items_and_defaults_missing_fields() {
        let checklist = checklist_from_str(
            r#"{ "name": "Shift start", "items": [ { "name": "Badge in" }, { "name": "Gloves", "description": "Nitrile" } ] }"#,
        )
        .expect("valid checklist");
        assert_eq!(checklist.name, "Shift start");
        assert_eq!(checklist.description, "");
        assert_eq!(checklist.items[0].name, "Badge in");
        assert_eq!(checklist.items[0].description, "");
        assert_eq!(checklist.items[1].description, "Nitrile");
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let err = checklist_from_str("{ items: ").unwrap_err();
        assert!(matches!(err, ChecklistError::Parse(_)));
        assert!(err.to_string().starts_with("failed to parse checklist"));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let path = std::env::temp_dir().join("archecklist-missing-checklist.json");
        let _ = fs::remove_file(&path);
        let err = checklist_from_file(&path).unwrap_err();
        assert!(matches!(err, ChecklistError::Io(_)));
    }

    #[test]
    fn reads_checklist_from_disk() {
        let path = std::env::temp_dir().join("archecklist-loader-roundtrip.json");
        fs::write(&path, r#"{ "items": [ { "name": "Only" } ] }"#).expect("write checklist");
        let checklist = checklist_from_file(&path).expect("load checklist");
        assert_eq!(checklist.items.len(), 1);
        assert_eq!(checklist.items[0].name, "Only");
    }
}
