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

//! Whole-document loading and writing for the merge.
//!
//! Inputs are read completely and decoded in one step; the output is encoded
//! in memory before the destination is touched, so a failed run never leaves
//! a partial file behind.

pub mod read_document;
pub mod write_document;

pub use read_document::{decode_catalog, decode_localization, load_catalog, load_localization};
pub use write_document::{to_compact_json, write_merged};
