//! # Freqcode - Frequency-Driven Prefix Codes
//!
//! Builds prefix-free symbol codes from empirically observed text frequencies
//! and evaluates coding efficiency.
//!
//! Two coding schemes share one tree-construction core:
//! 1. **Standard**: a classic Huffman code over single characters, with a
//!    bit-walk decoder.
//! 2. **Compact**: a mixed alphabet of single characters plus a bounded
//!    number of high-frequency digrams, encoded with a greedy one-step
//!    lookahead (no decoder; the bitstream is not self-delimiting).
//!
//! Frequencies come from a chunked streaming counter that realigns chunk
//! boundaries on whitespace, so adjacent-pair counts survive splits inside
//! words. Per-file tables can be merged and persisted as JSON, and a
//! comparator measures which scheme produces shorter output over a corpus.
//!
//! ## Example
//!
//! ```
//! use freqcode::{FrequencyCounter, Comparator};
//! use std::io::Cursor;
//!
//! let text = "the weather these days, rather the tether of the heathen";
//! let table = FrequencyCounter::new()
//!     .count_stream(Cursor::new(text.as_bytes().to_vec()))
//!     .unwrap();
//!
//! let comparator = Comparator::new(&table);
//! let report = comparator.compare_lines([text]).unwrap();
//! println!("compact saved {} bits", report.total_saved_bits);
//! ```

mod compact;
mod compare;
mod counter;
mod error;
mod persist;
mod standard;
mod symbol;
mod table;
mod tree;

#[cfg(test)]
mod tests;

pub use compact::{CompactCodec, CompactEncoding, DEFAULT_DIGRAM_CAP};
pub use compare::{Comparator, ComparisonReport, LineComparison};
pub use counter::{FrequencyCounter, DEFAULT_CHUNK_SIZE};
pub use error::{Error, Result};
pub use persist::{load_frequency_table, save_frequency_table};
pub use standard::StandardCodec;
pub use symbol::Symbol;
pub use table::{aggregate, FrequencyTable};
pub use tree::{CodeTable, HuffmanTree};
