use std::path::Path;

use tracing::{debug, info};

use crate::errors::{validation, Result, VvsrtError};
use crate::vvproj::structs::Project;

/// Load a project file and validate its structure.
///
/// Structural problems (unreadable file, malformed JSON, missing talk
/// section, ordering keys without records) are fatal; anything recoverable
/// is left for the assembler to skip per utterance.
pub fn load_project(path: &Path) -> Result<Project> {
    let raw = std::fs::read_to_string(path)?;
    parse_project(&raw)
}

/// Parse and validate project JSON.
pub fn parse_project(raw: &str) -> Result<Project> {
    let project: Project = serde_json::from_str(raw)
        .map_err(|e| VvsrtError::project(format!("malformed project file: {}", e)))?;

    if project.talk.audio_keys.is_empty() {
        return Err(VvsrtError::project(
            "audioKeys is empty: nothing to convert",
        ));
    }

    validation::validate_key_sets(&project)?;

    let unreachable = project
        .talk
        .audio_items
        .keys()
        .filter(|key| !project.talk.audio_keys.contains(*key))
        .count();
    if unreachable > 0 {
        debug!(
            count = unreachable,
            "audioItems records absent from audioKeys are unreachable and will be ignored"
        );
    }

    info!(
        keys = project.talk.audio_keys.len(),
        items = project.talk.audio_items.len(),
        "project parsed"
    );

    Ok(project)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_project(keys: &str, items: &str) -> String {
        format!(
            r#"{{"talk": {{"audioKeys": {}, "audioItems": {}}}}}"#,
            keys, items
        )
    }

    #[test]
    fn test_parse_valid_project() {
        let raw = minimal_project(r#"["k1"]"#, r#"{"k1": {"text": "テスト"}}"#);
        let project = parse_project(&raw).unwrap();
        assert_eq!(project.talk.audio_keys, vec!["k1"]);
    }

    #[test]
    fn test_missing_talk_section_fatal() {
        let err = parse_project(r#"{"song": {}}"#).unwrap_err();
        assert!(matches!(err, VvsrtError::Project(_)));
    }

    #[test]
    fn test_key_without_record_fatal() {
        let raw = minimal_project(r#"["k1", "k2"]"#, r#"{"k1": {"text": "テスト"}}"#);
        let err = parse_project(&raw).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("k2"), "diagnostic should name the key: {}", message);
    }

    #[test]
    fn test_unreachable_record_is_not_fatal() {
        let raw = minimal_project(
            r#"["k1"]"#,
            r#"{"k1": {"text": "読む"}, "orphan": {"text": "読まない"}}"#,
        );
        assert!(parse_project(&raw).is_ok());
    }

    #[test]
    fn test_empty_key_list_fatal() {
        let raw = minimal_project(r#"[]"#, r#"{}"#);
        assert!(parse_project(&raw).is_err());
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_project(Path::new("/nonexistent/x.vvproj")).unwrap_err();
        assert!(matches!(err, VvsrtError::Io(_)));
    }
}
