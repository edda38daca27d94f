//! The compact codec: single characters mixed with high-frequency digrams.

use crate::symbol::Symbol;
use crate::table::FrequencyTable;
use crate::tree::{CodeTable, HuffmanTree};
use log::warn;

/// Default cap on how many digrams join the alphabet.
pub const DEFAULT_DIGRAM_CAP: usize = 20;

/// Prefix codec over a mixed alphabet of single characters and at most
/// `digram_cap` of the highest-frequency digrams.
///
/// Encoding uses a greedy one-step lookahead: at each position, the digram
/// formed with the next character is emitted only when its code is strictly
/// shorter than the two single-character codes combined. The decision is
/// local, so the result is a heuristic rather than a globally optimal merge.
/// A bitstream built this way is not self-delimiting, so no decoder exists
/// for this variant.
#[derive(Debug, Clone)]
pub struct CompactCodec {
    codes: CodeTable,
}

/// Result of one compact encoding pass.
#[derive(Debug, Clone, Default)]
pub struct CompactEncoding {
    /// The '0'/'1' output.
    pub bits: String,
    /// Characters that had no code and were omitted, in input order.
    pub skipped: Vec<char>,
}

impl CompactCodec {
    /// Builds the codec with the default digram cap.
    pub fn from_table(table: &FrequencyTable) -> Self {
        Self::with_digram_cap(table, DEFAULT_DIGRAM_CAP)
    }

    /// Builds the codec keeping at most `digram_cap` digrams.
    ///
    /// All entries are sorted by descending count (ascending key among equal
    /// counts); every single-character key is kept regardless of count, and
    /// the first `digram_cap` two-character keys survive in that order.
    pub fn with_digram_cap(table: &FrequencyTable, digram_cap: usize) -> Self {
        let mut digrams_kept = 0usize;
        let leaves: Vec<(Symbol, u64)> = table
            .sorted_entries()
            .into_iter()
            .filter_map(|(key, count)| match Symbol::from_key(key)? {
                symbol @ Symbol::Char(_) => Some((symbol, count)),
                symbol @ Symbol::Digram(..) => {
                    if digrams_kept < digram_cap {
                        digrams_kept += 1;
                        Some((symbol, count))
                    } else {
                        None
                    }
                }
            })
            .collect();

        let tree = HuffmanTree::build(leaves);
        if !tree.has_internal_root() {
            warn!("compact codec built over a degenerate alphabet, codes are empty");
        }
        Self {
            codes: tree.code_table(),
        }
    }

    /// The derived code table.
    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }

    /// Encodes `input` left to right with greedy digram lookahead.
    ///
    /// Characters without a code are skipped and reported per occurrence;
    /// encoding continues with the rest of the input.
    pub fn encode(&self, input: &str) -> CompactEncoding {
        let chars: Vec<char> = input.chars().collect();
        let mut out = CompactEncoding::default();

        let mut i = 0;
        while i < chars.len() {
            let c = chars[i];
            let single = self.codes.code(Symbol::Char(c));

            if let Some(&next) = chars.get(i + 1) {
                if let Some(pair_code) = self.codes.code(Symbol::Digram(c, next)) {
                    let merge = match (single, self.codes.code(Symbol::Char(next))) {
                        (Some(c_code), Some(next_code)) => {
                            c_code.len() + next_code.len() > pair_code.len()
                        }
                        // A half without a single code (noise-key removal can
                        // strip bare '\n'/'\r') is only reachable through the
                        // digram.
                        _ => true,
                    };
                    if merge {
                        out.bits.push_str(pair_code);
                        i += 2;
                        continue;
                    }
                }
            }

            match single {
                Some(code) => out.bits.push_str(code),
                None => {
                    warn!("no code for {c:?}, skipping");
                    out.skipped.push(c);
                }
            }
            i += 1;
        }

        out
    }
}
