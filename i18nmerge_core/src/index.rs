//! Identifier → icon lookup built from the item catalog.

use std::collections::HashMap;

use tracing::debug;

use crate::types::{EntryId, IconId, ItemRecord};

/// Catalog items that have both a `name-id` and a real icon.
///
/// This is the gate for output inclusion: an entry survives the merge only if
/// its identifier is indexed here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconIndex {
    icons: HashMap<EntryId, IconId>,
}

impl IconIndex {
    /// Scan the catalog once, in order.
    ///
    /// Records missing either field, or whose icon is the zero sentinel, are
    /// skipped. When several records share a `name-id` the last one wins.
    #[must_use]
    pub fn from_catalog(catalog: &[ItemRecord]) -> Self {
        let mut icons = HashMap::with_capacity(catalog.len());
        let mut overwritten = 0_usize;

        for record in catalog {
            let (Some(name_id), Some(icon_id)) = (&record.name_id, &record.icon_id) else {
                continue;
            };
            if icon_id.is_none() {
                continue;
            }
            if icons
                .insert(EntryId::from(name_id), icon_id.clone())
                .is_some()
            {
                overwritten += 1;
            }
        }

        // Last-write-wins falls out of the single pass. Worth revisiting if
        // real catalogs turn out to carry duplicates.
        if overwritten > 0 {
            debug!(overwritten, "Duplicate name-id values in catalog, later records kept");
        }
        debug!(
            indexed = icons.len(),
            records = catalog.len(),
            "Built icon index"
        );

        Self { icons }
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&IconId> {
        self.icons.get(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.icons.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }
}
