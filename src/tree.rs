//! Huffman tree construction over a node arena, and derived code tables.

use crate::symbol::Symbol;
use ahash::AHashMap as HashMap;
use slotmap::{DefaultKey, SlotMap};

/// A node is either a leaf carrying one symbol or an internal node carrying
/// only the summed frequency of its two children.
#[derive(Debug, Clone)]
pub(crate) enum NodeKind {
    Leaf(Symbol),
    Internal { left: DefaultKey, right: DefaultKey },
}

#[derive(Debug, Clone)]
pub(crate) struct HuffmanNode {
    pub(crate) freq: u64,
    pub(crate) kind: NodeKind,
}

/// A binary prefix-code tree.
///
/// Nodes live in a slotmap arena and reference children by key, so the tree
/// needs no pointer graph and no back-references; encode and decode never
/// walk upward. Immutable once built.
#[derive(Debug, Clone)]
pub struct HuffmanTree {
    pub(crate) nodes: SlotMap<DefaultKey, HuffmanNode>,
    pub(crate) root: Option<DefaultKey>,
}

impl HuffmanTree {
    /// Builds a tree by repeatedly merging the two lowest-frequency nodes.
    ///
    /// Each round re-sorts the pending list with a stable ascending sort and
    /// appends the merged node at the back, so equal-frequency nodes merge in
    /// insertion (FIFO) order. Seed the leaves in a deterministic order and
    /// the whole tree is deterministic.
    ///
    /// Zero leaves yield a rootless tree; one leaf becomes the root with no
    /// code bits assigned.
    pub(crate) fn build<I>(leaves: I) -> Self
    where
        I: IntoIterator<Item = (Symbol, u64)>,
    {
        let mut nodes = SlotMap::new();
        let mut pending: Vec<DefaultKey> = leaves
            .into_iter()
            .map(|(symbol, freq)| {
                nodes.insert(HuffmanNode {
                    freq,
                    kind: NodeKind::Leaf(symbol),
                })
            })
            .collect();

        while pending.len() > 1 {
            pending.sort_by_key(|&key| nodes[key].freq);
            let left = pending.remove(0);
            let right = pending.remove(0);

            let merged = nodes.insert(HuffmanNode {
                freq: nodes[left].freq + nodes[right].freq,
                kind: NodeKind::Internal { left, right },
            });
            pending.push(merged);
        }

        let root = pending.pop();
        Self { nodes, root }
    }

    /// Derives the code table: depth-first from the root, appending '0'
    /// descending left and '1' descending right. Only leaves get entries.
    pub(crate) fn code_table(&self) -> CodeTable {
        let mut codes = HashMap::default();
        if let Some(root) = self.root {
            self.assign_codes(root, String::new(), &mut codes);
        }
        CodeTable { codes }
    }

    fn assign_codes(&self, key: DefaultKey, prefix: String, codes: &mut HashMap<Symbol, String>) {
        match &self.nodes[key].kind {
            NodeKind::Leaf(symbol) => {
                codes.insert(*symbol, prefix);
            }
            NodeKind::Internal { left, right } => {
                let mut zero = prefix.clone();
                zero.push('0');
                self.assign_codes(*left, zero, codes);

                let mut one = prefix;
                one.push('1');
                self.assign_codes(*right, one, codes);
            }
        }
    }

    /// Returns true when the root is an internal node, i.e. the alphabet had
    /// at least two symbols and every leaf carries a non-empty code.
    pub(crate) fn has_internal_root(&self) -> bool {
        self.root
            .is_some_and(|key| matches!(self.nodes[key].kind, NodeKind::Internal { .. }))
    }
}

/// Mapping from symbol to its '0'/'1' code string.
///
/// Prefix-freeness follows from the tree shape and is not checked separately.
#[derive(Debug, Clone, Default)]
pub struct CodeTable {
    pub(crate) codes: HashMap<Symbol, String>,
}

impl CodeTable {
    /// Looks up the code for a symbol.
    pub fn code(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Returns true if no symbol has a code.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterates over (symbol, code) pairs in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.codes.iter().map(|(&s, c)| (s, c.as_str()))
    }
}
