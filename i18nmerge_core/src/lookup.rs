//! Text search over a merged document, the way the overlay frontend queries
//! the generated file.

use crate::types::{CombinedEntry, EntryId, Language, MergedDocument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Match<'a> {
    pub id: &'a EntryId,
    pub entry: &'a CombinedEntry,
}

impl MergedDocument {
    /// Entries whose text in `language` contains `term`, ignoring case and
    /// surrounding whitespace of the term.
    #[must_use]
    pub fn search(&self, language: Language, term: &str) -> Vec<Match<'_>> {
        self.matching(language, term, |text, needle| text.contains(needle))
    }

    /// Entries whose text in `language` starts with `term`, ignoring case.
    #[must_use]
    pub fn prefix_search(&self, language: Language, term: &str) -> Vec<Match<'_>> {
        self.matching(language, term, |text, needle| text.starts_with(needle))
    }

    fn matching(
        &self,
        language: Language,
        term: &str,
        accept: impl Fn(&str, &str) -> bool,
    ) -> Vec<Match<'_>> {
        let needle = term.trim().to_lowercase();
        self.entries
            .iter()
            .filter(|(_, entry)| accept(&language.text(entry).to_lowercase(), &needle))
            .map(|(id, entry)| Match { id, entry })
            .collect()
    }
}
