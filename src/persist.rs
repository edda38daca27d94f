//! JSON persistence of frequency tables.
//!
//! A persisted table is a flat JSON object from symbol key to count,
//! pretty-printed with keys in descending-count order. The ordering is for
//! human inspection only; loading accepts any key order.

use crate::error::{Error, Result};
use crate::table::FrequencyTable;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

/// Loads a frequency table from a JSON document.
pub fn load_frequency_table(path: &Path) -> Result<FrequencyTable> {
    let text = fs::read_to_string(path).map_err(|e| Error::from_io(e, path))?;
    let counts: HashMap<String, u64> = serde_json::from_str(&text)
        .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    Ok(FrequencyTable::from_counts(counts))
}

/// Saves a frequency table as pretty-printed JSON, sorted by descending count.
pub fn save_frequency_table(table: &FrequencyTable, path: &Path) -> Result<()> {
    let mut doc = serde_json::Map::new();
    for (key, count) in table.sorted_entries() {
        doc.insert(key.to_string(), serde_json::Value::from(count));
    }

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(doc))
        .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))?;
    fs::write(path, json).map_err(|e| Error::from_io(e, path))?;
    Ok(())
}
