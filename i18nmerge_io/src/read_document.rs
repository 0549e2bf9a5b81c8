use std::path::Path;

use i18nmerge_core::{Error, ItemRecord, LocalizationDocument, Result};
use serde::de::DeserializeOwned;
use tracing::info;

const BOM: &[u8] = b"\xef\xbb\xbf";

pub fn load_localization(path: impl AsRef<Path>) -> Result<LocalizationDocument> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let document: LocalizationDocument = decode(&bytes, &path.display().to_string())?;
    info!(entries = document.entries.len(), "Loaded {}", path.display());
    Ok(document)
}

pub fn load_catalog(path: impl AsRef<Path>) -> Result<Vec<ItemRecord>> {
    let path = path.as_ref();
    let bytes = read_bytes(path)?;
    let catalog: Vec<ItemRecord> = decode(&bytes, &path.display().to_string())?;
    info!(records = catalog.len(), "Loaded {}", path.display());
    Ok(catalog)
}

/// Decode a localization document. `source_name` only labels errors.
pub fn decode_localization(text: &str, source_name: &str) -> Result<LocalizationDocument> {
    decode(text.as_bytes(), source_name)
}

/// Decode an item catalog, which must be a JSON array of objects.
pub fn decode_catalog(text: &str, source_name: &str) -> Result<Vec<ItemRecord>> {
    decode(text.as_bytes(), source_name)
}

// Decoding from bytes lets serde_json reject invalid UTF-8 as a parse error.
fn decode<T: DeserializeOwned>(bytes: &[u8], source_name: &str) -> Result<T> {
    let bytes = bytes.strip_prefix(BOM).unwrap_or(bytes);
    serde_json::from_slice(bytes).map_err(|e| Error::decode(source_name, e))
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    info!("Reading file: {}", path.display());
    std::fs::read(path).map_err(|e| Error::io(path, e))
}
