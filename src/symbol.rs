//! Symbol types for the coding alphabets.

use std::fmt;

/// An atomic unit of the coding alphabet.
///
/// The standard codec only ever sees single characters; the compact codec
/// mixes single characters with two-character digrams. Both are keyed in
/// frequency tables by their 1- or 2-character string form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A single character.
    Char(char),

    /// An ordered pair of adjacent characters treated as one unit.
    Digram(char, char),
}

impl Symbol {
    /// Parses a frequency-table key into a symbol.
    ///
    /// Returns `None` for keys that are not exactly one or two characters
    /// long; such keys cannot appear in either alphabet.
    pub fn from_key(key: &str) -> Option<Symbol> {
        let mut chars = key.chars();
        let first = chars.next()?;
        match chars.next() {
            None => Some(Symbol::Char(first)),
            Some(second) => match chars.next() {
                None => Some(Symbol::Digram(first, second)),
                Some(_) => None,
            },
        }
    }

    /// Returns the string key form, as used in frequency tables.
    pub fn key(&self) -> String {
        match self {
            Symbol::Char(c) => c.to_string(),
            Symbol::Digram(a, b) => {
                let mut s = String::with_capacity(8);
                s.push(*a);
                s.push(*b);
                s
            }
        }
    }

    /// Number of input characters this symbol consumes when encoding.
    pub fn width(&self) -> usize {
        match self {
            Symbol::Char(_) => 1,
            Symbol::Digram(..) => 2,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Char(c) => write!(f, "{c}"),
            Symbol::Digram(a, b) => write!(f, "{a}{b}"),
        }
    }
}
