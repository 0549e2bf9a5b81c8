//! The join, filter and augment pass over the three input documents.

use indexmap::IndexMap;

use crate::index::IconIndex;
use crate::types::{CombinedEntry, ItemRecord, LocalizationDocument, MergedDocument};

/// Sizes observed during one merge, for the summary log line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub german_entries: usize,
    pub french_entries: usize,
    /// Identifiers translated in both languages.
    pub shared_entries: usize,
    pub indexed_icons: usize,
    pub kept_entries: usize,
}

/// Combine German and French entries that belong to a catalog item with an
/// icon.
///
/// An identifier is kept if and only if it is present in both documents and
/// in the icon index. Everything else is dropped silently. The result follows
/// the German document's entry order.
#[must_use]
pub fn merge(
    german: &LocalizationDocument,
    french: &LocalizationDocument,
    catalog: &[ItemRecord],
) -> MergedDocument {
    merge_with_stats(german, french, catalog).0
}

#[must_use]
pub fn merge_with_stats(
    german: &LocalizationDocument,
    french: &LocalizationDocument,
    catalog: &[ItemRecord],
) -> (MergedDocument, MergeStats) {
    let index = IconIndex::from_catalog(catalog);

    let mut shared_entries = 0;
    let mut entries = IndexMap::new();
    for (id, de) in &german.entries {
        let Some(fr) = french.entries.get(id) else {
            continue;
        };
        shared_entries += 1;

        let Some(icon) = index.get(id.as_str()) else {
            continue;
        };
        entries.insert(
            id.clone(),
            CombinedEntry {
                de: de.clone(),
                fr: fr.clone(),
                icon: icon.clone(),
            },
        );
    }

    let stats = MergeStats {
        german_entries: german.entries.len(),
        french_entries: french.entries.len(),
        shared_entries,
        indexed_icons: index.len(),
        kept_entries: entries.len(),
    };

    (MergedDocument::new(entries), stats)
}
