#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod index;
pub mod lookup;
pub mod merge;
pub mod types;

pub use error::{Error, Result};
pub use index::IconIndex;
pub use lookup::Match;
pub use merge::{MergeStats, merge, merge_with_stats};
pub use types::{
    CombinedEntry, EntryId, IconId, ItemRecord, Language, LocalizationDocument, MergedDocument,
    NameId,
};
