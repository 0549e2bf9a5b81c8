//! Documents read and written by the merge.

use std::borrow::Borrow;
use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier shared by the localization documents and the item catalog.
///
/// Localization documents key their entries by string, so this is the
/// canonical form. Catalog `name-id` values are converted into it through
/// `From<&NameId>` when the icon index is built, and nowhere else.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for EntryId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for EntryId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// `name-id` as it appears in the catalog.
///
/// Any JSON value is accepted so one odd record never fails the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl From<&NameId> for EntryId {
    fn from(name_id: &NameId) -> Self {
        match name_id {
            NameId::Number(n) => Self(n.to_string()),
            NameId::Text(s) => Self(s.clone()),
            NameId::Other(value) => Self(value.to_string()),
        }
    }
}

/// `icon-id` as it appears in the catalog. Written back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IconId {
    Number(i64),
    Text(String),
    Other(Value),
}

impl IconId {
    /// Zero marks an item without an icon, whether written `0`, `0.0` or
    /// `false`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn is_none(&self) -> bool {
        match self {
            Self::Number(n) => *n == 0,
            Self::Text(_) => false,
            Self::Other(Value::Number(n)) => n.as_f64() == Some(0.0),
            Self::Other(value) => *value == Value::Bool(false),
        }
    }
}

/// One record of the item catalog. Fields other than these two are ignored,
/// and an explicit `null` reads the same as an absent field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    #[serde(rename = "name-id", default, skip_serializing_if = "Option::is_none")]
    pub name_id: Option<NameId>,
    #[serde(rename = "icon-id", default, skip_serializing_if = "Option::is_none")]
    pub icon_id: Option<IconId>,
}

impl ItemRecord {
    #[must_use]
    pub const fn new(name_id: NameId, icon_id: IconId) -> Self {
        Self {
            name_id: Some(name_id),
            icon_id: Some(icon_id),
        }
    }
}

/// A single-language dictionary of localized strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizationDocument {
    pub entries: IndexMap<EntryId, String>,
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocalizationDocument {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (EntryId::new(k), v.into()))
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    #[serde(rename = "de")]
    German,
    #[serde(rename = "fr")]
    French,
}

impl Language {
    /// Languages carried by every combined entry, in output order.
    pub const ALL: [Self; 2] = [Self::German, Self::French];

    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::German => "de",
            Self::French => "fr",
        }
    }

    #[must_use]
    pub fn text(self, entry: &CombinedEntry) -> &str {
        match self {
            Self::German => &entry.de,
            Self::French => &entry.fr,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombinedEntry {
    pub de: String,
    pub fr: String,
    pub icon: IconId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergedDocument {
    pub entries: IndexMap<EntryId, CombinedEntry>,
    pub languages: Vec<Language>,
}

impl MergedDocument {
    #[must_use]
    pub fn new(entries: IndexMap<EntryId, CombinedEntry>) -> Self {
        Self {
            entries,
            languages: Language::ALL.to_vec(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn name_id_converts_to_entry_id() {
        assert_eq!(EntryId::from(&NameId::Number(42)).as_str(), "42");
        assert_eq!(EntryId::from(&NameId::Number(-7)).as_str(), "-7");
        assert_eq!(EntryId::from(&NameId::Text("abc".into())).as_str(), "abc");
    }

    #[test]
    fn only_numeric_zero_means_no_icon() {
        assert!(IconId::Number(0).is_none());
        assert!(!IconId::Number(5).is_none());
        assert!(!IconId::Text("0".into()).is_none());
        assert!(IconId::Other(json!(0.0)).is_none());
        assert!(!IconId::Other(json!(3.5)).is_none());
        assert!(!IconId::Other(json!(u64::MAX)).is_none());
    }

    #[test]
    fn unusual_ids_decode_instead_of_failing() {
        let records: Vec<ItemRecord> = serde_json::from_value(json!([
            {"name-id": 2.0, "icon-id": 3},
            {"name-id": 4, "icon-id": u64::MAX},
            {"name-id": true, "icon-id": [1, 2]}
        ]))
        .unwrap();

        assert_eq!(records[0].name_id, Some(NameId::Other(json!(2.0))));
        assert_eq!(records[1].icon_id, Some(IconId::Other(json!(u64::MAX))));
        assert_eq!(records[2].icon_id, Some(IconId::Other(json!([1, 2]))));
        assert_eq!(
            EntryId::from(records[0].name_id.as_ref().unwrap()).as_str(),
            "2.0"
        );
    }

    #[test]
    fn item_record_tolerates_missing_null_and_extra_fields() {
        let records: Vec<ItemRecord> = serde_json::from_value(json!([
            {"name-id": 1, "icon-id": 5, "level": 200},
            {"name-id": "sword"},
            {"icon-id": null},
            {}
        ]))
        .unwrap();

        assert_eq!(records[0], ItemRecord::new(NameId::Number(1), IconId::Number(5)));
        assert_eq!(records[1].name_id, Some(NameId::Text("sword".into())));
        assert_eq!(records[1].icon_id, None);
        assert_eq!(records[2], ItemRecord::default());
        assert_eq!(records[3], ItemRecord::default());
    }

    #[test]
    fn localization_document_keeps_source_order() {
        let doc: LocalizationDocument =
            serde_json::from_str(r#"{"entries": {"10": "Zehn", "2": "Zwei", "1": "Eins"}}"#)
                .unwrap();
        let keys: Vec<&str> = doc.entries.keys().map(EntryId::as_str).collect();
        assert_eq!(keys, ["10", "2", "1"]);
    }

    #[test]
    fn merged_document_serializes_languages_as_codes() {
        let doc = MergedDocument::new(IndexMap::new());
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({"entries": {}, "languages": ["de", "fr"]})
        );
    }
}
