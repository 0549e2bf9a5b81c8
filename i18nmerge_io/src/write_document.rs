use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use i18nmerge_core::{Error, MergedDocument, Result};
use tracing::info;

/// Encode without whitespace between tokens. Non-ASCII text is written as is,
/// never as `\u` escapes.
pub fn to_compact_json(document: &MergedDocument) -> Result<String> {
    serde_json::to_string(document).map_err(Error::Serialize)
}

/// Write the merged document, creating parent directories as needed.
///
/// The content goes to a sibling temp file first and is renamed over the
/// destination, so readers see either the old file or the complete new one.
pub fn write_merged(path: impl AsRef<Path>, document: &MergedDocument) -> Result<()> {
    let path = path.as_ref();
    let content = to_compact_json(document)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
    }

    info!(entries = document.len(), "Writing file: {}", path.display());
    let staging = staging_path(path);
    if let Err(e) = std::fs::write(&staging, content) {
        let _ = std::fs::remove_file(&staging);
        return Err(Error::io(&staging, e));
    }
    std::fs::rename(&staging, path).map_err(|e| {
        let _ = std::fs::remove_file(&staging);
        Error::io(path, e)
    })
}

fn staging_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_else(|| OsStr::new("merged")));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use i18nmerge_core::{CombinedEntry, EntryId, IconId};

    fn entry(de: &str, fr: &str, icon: i64) -> CombinedEntry {
        CombinedEntry {
            de: de.to_string(),
            fr: fr.to_string(),
            icon: IconId::Number(icon),
        }
    }

    fn document() -> MergedDocument {
        MergedDocument::new(
            [
                (EntryId::from("1"), entry("Hallo", "Bonjour", 5)),
                (EntryId::from("2"), entry("Schlüssel", "Clé", 77)),
            ]
            .into_iter()
            .collect(),
        )
    }

    #[test]
    fn test_compact_json_keeps_unicode_literal() {
        let json = to_compact_json(&document()).unwrap();
        assert_eq!(
            json,
            r#"{"entries":{"1":{"de":"Hallo","fr":"Bonjour","icon":5},"2":{"de":"Schlüssel","fr":"Clé","icon":77}},"languages":["de","fr"]}"#
        );
        assert!(!json.contains("\\u"));
    }

    #[test]
    fn test_write_merged_creates_parent_dirs() {
        let dir = std::env::temp_dir().join(format!("i18nmerge_wd_{}", uuid::Uuid::now_v7()));
        let file = dir.join("frontend/src/assets/de-fr.i18n.json");

        write_merged(&file, &document()).unwrap();

        let content = std::fs::read_to_string(&file).unwrap();
        assert!(content.starts_with(r#"{"entries":{"1":"#));
        assert!(content.contains("Schlüssel"));

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_merged_replaces_existing_file_without_leftovers() {
        let dir = std::env::temp_dir().join(format!("i18nmerge_wd_{}", uuid::Uuid::now_v7()));
        std::fs::create_dir_all(&dir).unwrap();
        let file = dir.join("de-fr.i18n.json");
        std::fs::write(&file, "stale content that is longer than nothing at all").unwrap();

        write_merged(&file, &MergedDocument::new(std::iter::empty().collect())).unwrap();

        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            r#"{"entries":{},"languages":["de","fr"]}"#
        );
        let names: Vec<_> = std::fs::read_dir(&dir)
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, [OsString::from("de-fr.i18n.json")]);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_write_merged_failure_leaves_destination_untouched() {
        let dir = std::env::temp_dir().join(format!("i18nmerge_wd_{}", uuid::Uuid::now_v7()));
        let target = dir.join("out.json");
        std::fs::create_dir_all(target.join("occupied")).unwrap();

        let err = write_merged(&target, &document()).unwrap_err();

        assert!(matches!(err, Error::Io { .. }));
        assert!(target.join("occupied").is_dir());
        assert!(!dir.join(".out.json.tmp").exists());

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_staging_path_is_a_hidden_sibling() {
        assert_eq!(
            staging_path(Path::new("frontend/assets/de-fr.i18n.json")),
            PathBuf::from("frontend/assets/.de-fr.i18n.json.tmp")
        );
    }
}
