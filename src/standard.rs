//! The classic single-character Huffman codec.

use crate::error::{Error, Result};
use crate::symbol::Symbol;
use crate::table::FrequencyTable;
use crate::tree::{CodeTable, HuffmanTree, NodeKind};
use log::warn;

/// Prefix codec over single characters only.
///
/// Built once from a frequency table; the tree and code table are immutable
/// afterwards. Multi-character keys in the input table cannot be represented
/// here and are silently ignored.
#[derive(Debug, Clone)]
pub struct StandardCodec {
    tree: HuffmanTree,
    codes: CodeTable,
}

impl StandardCodec {
    /// Builds the codec from a frequency table.
    ///
    /// Leaves are seeded in descending-count order (ascending key among equal
    /// counts), which together with the tree's FIFO merge rule makes code
    /// assignment deterministic.
    pub fn from_table(table: &FrequencyTable) -> Self {
        let leaves = table
            .sorted_entries()
            .into_iter()
            .filter_map(|(key, count)| match Symbol::from_key(key) {
                Some(symbol @ Symbol::Char(_)) => Some((symbol, count)),
                _ => None,
            });

        let tree = HuffmanTree::build(leaves);
        if !tree.has_internal_root() {
            warn!("standard codec built over a degenerate alphabet, codes are empty");
        }
        let codes = tree.code_table();
        Self { tree, codes }
    }

    /// The derived code table.
    pub fn code_table(&self) -> &CodeTable {
        &self.codes
    }

    /// Encodes `input` by concatenating each character's code.
    ///
    /// Fails with [`Error::MissingSymbol`] on the first character that has no
    /// code; general text may contain out-of-alphabet symbols.
    pub fn encode(&self, input: &str) -> Result<String> {
        let mut bits = String::new();
        for c in input.chars() {
            match self.codes.code(Symbol::Char(c)) {
                Some(code) => bits.push_str(code),
                None => {
                    return Err(Error::MissingSymbol {
                        symbol: c.to_string(),
                    })
                }
            }
        }
        Ok(bits)
    }

    /// Decodes a bit string by walking the tree, emitting a symbol and
    /// restarting at the root on every leaf.
    ///
    /// There is no end-of-stream marker: trailing bits that do not complete a
    /// code are dropped, so callers must supply exactly the encoded sequence.
    /// Decoding non-empty input against a degenerate tree fails with
    /// [`Error::DegenerateAlphabet`].
    pub fn decode(&self, bits: &str) -> Result<String> {
        if bits.is_empty() {
            return Ok(String::new());
        }
        if !self.tree.has_internal_root() {
            return Err(Error::DegenerateAlphabet);
        }
        let Some(root) = self.tree.root else {
            return Err(Error::DegenerateAlphabet);
        };

        let mut decoded = String::new();
        let mut current = root;
        for bit in bits.chars() {
            debug_assert!(bit == '0' || bit == '1', "bit strings are '0'/'1' only");

            if let NodeKind::Internal { left, right } = &self.tree.nodes[current].kind {
                current = if bit == '1' { *right } else { *left };
            }

            if let NodeKind::Leaf(symbol) = &self.tree.nodes[current].kind {
                match symbol {
                    Symbol::Char(c) => decoded.push(*c),
                    Symbol::Digram(a, b) => {
                        decoded.push(*a);
                        decoded.push(*b);
                    }
                }
                current = root;
            }
        }
        Ok(decoded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn abc_table() -> FrequencyTable {
        FrequencyTable::from_counts([("a", 5), ("b", 3), ("c", 1)])
    }

    #[test]
    fn test_encode_decode_roundtrip() {
        let codec = StandardCodec::from_table(&abc_table());
        let bits = codec.encode("abc").unwrap();
        assert_eq!(codec.decode(&bits).unwrap(), "abc");
    }

    #[test]
    fn test_most_frequent_symbol_shortest() {
        let codec = StandardCodec::from_table(&abc_table());
        let codes = codec.code_table();

        assert_eq!(codes.code(Symbol::Char('a')).map(str::len), Some(1));
        assert_eq!(codes.code(Symbol::Char('b')).map(str::len), Some(2));
        assert_eq!(codes.code(Symbol::Char('c')).map(str::len), Some(2));
    }

    #[test]
    fn test_digram_keys_ignored() {
        let table = FrequencyTable::from_counts([("a", 5), ("b", 3), ("ab", 100)]);
        let codec = StandardCodec::from_table(&table);

        assert_eq!(codec.code_table().len(), 2);
        assert_eq!(codec.code_table().code(Symbol::Digram('a', 'b')), None);
    }

    #[test]
    fn test_encode_missing_symbol_fails() {
        let codec = StandardCodec::from_table(&abc_table());
        let err = codec.encode("abz").unwrap_err();
        assert!(matches!(err, Error::MissingSymbol { symbol } if symbol == "z"));
    }

    #[test]
    fn test_decode_empty_is_empty() {
        let codec = StandardCodec::from_table(&abc_table());
        assert_eq!(codec.decode("").unwrap(), "");
    }

    #[test]
    fn test_decode_degenerate_alphabet_fails() {
        let table = FrequencyTable::from_counts([("a", 5)]);
        let codec = StandardCodec::from_table(&table);

        assert_eq!(codec.encode("aaa").unwrap(), "");
        assert!(matches!(
            codec.decode("0"),
            Err(Error::DegenerateAlphabet)
        ));
    }

    #[test]
    fn test_trailing_bits_dropped() {
        let codec = StandardCodec::from_table(&abc_table());
        let mut bits = codec.encode("ab").unwrap();
        // One dangling bit cannot complete a code.
        bits.push('0');
        assert_eq!(codec.decode(&bits).unwrap(), "ab");
    }

    #[test]
    fn test_longer_roundtrip() {
        let table = FrequencyTable::from_counts([
            ("e", 120),
            ("t", 90),
            ("a", 80),
            (" ", 200),
            ("n", 70),
            ("z", 2),
        ]);
        let codec = StandardCodec::from_table(&table);

        let input = "etna tea zen ante";
        let bits = codec.encode(input).unwrap();
        assert_eq!(codec.decode(&bits).unwrap(), input);
    }
}
