//! Line-by-line comparison of the standard and compact codecs over a corpus.

use crate::compact::CompactCodec;
use crate::error::Result;
use crate::standard::StandardCodec;
use crate::symbol::Symbol;
use crate::table::FrequencyTable;
use std::io::BufRead;

/// Characters allowed through legalization besides letters, digits, and
/// whitespace.
const COMMON_PUNCTUATION: &str = ".,;:!?'\"()-";

/// Runs both coding schemes over corpus lines and tallies which one produces
/// shorter output.
#[derive(Debug, Clone)]
pub struct Comparator {
    standard: StandardCodec,
    compact: CompactCodec,
}

impl Comparator {
    /// Builds both codecs from one frequency table with the default digram cap.
    pub fn new(table: &FrequencyTable) -> Self {
        Self {
            standard: StandardCodec::from_table(table),
            compact: CompactCodec::from_table(table),
        }
    }

    /// Builds both codecs with an explicit digram cap for the compact side.
    pub fn with_digram_cap(table: &FrequencyTable, digram_cap: usize) -> Self {
        Self {
            standard: StandardCodec::from_table(table),
            compact: CompactCodec::with_digram_cap(table, digram_cap),
        }
    }

    /// Strips characters the trees may lack codes for: anything outside the
    /// letter/digit/punctuation/whitespace whitelist, plus whatever still has
    /// no single-character code. Both codecs then see the same symbol stream.
    fn legalize(&self, line: &str) -> String {
        line.chars()
            .filter(|&c| {
                c.is_alphanumeric() || c.is_whitespace() || COMMON_PUNCTUATION.contains(c)
            })
            .filter(|&c| self.standard.code_table().code(Symbol::Char(c)).is_some())
            .collect()
    }

    /// Encodes one legalized line with both schemes.
    pub fn compare_line(&self, line: &str) -> Result<LineComparison> {
        let text = self.legalize(line);
        let standard_bits = self.standard.encode(&text)?;
        let compact = self.compact.encode(&text);

        Ok(LineComparison {
            standard_bits: standard_bits.len(),
            compact_bits: compact.bits.len(),
        })
    }

    /// Compares every line of a corpus and accumulates the tallies.
    pub fn compare_lines<'a, I>(&self, lines: I) -> Result<ComparisonReport>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut report = ComparisonReport::default();
        for line in lines {
            report.tally(self.compare_line(line)?);
        }
        Ok(report)
    }

    /// Compares every line read from `reader`.
    pub fn compare_reader<R: BufRead>(&self, reader: R) -> Result<ComparisonReport> {
        let mut report = ComparisonReport::default();
        for line in reader.lines() {
            report.tally(self.compare_line(&line?)?);
        }
        Ok(report)
    }
}

/// Bit lengths both schemes produced for one line.
#[derive(Debug, Clone, Copy)]
pub struct LineComparison {
    pub standard_bits: usize,
    pub compact_bits: usize,
}

impl LineComparison {
    /// True when the compact output is strictly shorter.
    pub fn compact_shorter(&self) -> bool {
        self.compact_bits < self.standard_bits
    }

    /// Standard length minus compact length; positive means compact saved.
    pub fn saved_bits(&self) -> i64 {
        self.standard_bits as i64 - self.compact_bits as i64
    }
}

/// Accumulated comparison tallies over a corpus.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComparisonReport {
    /// Lines compared.
    pub lines: usize,
    /// Lines where the compact output was strictly shorter.
    pub compact_shorter: usize,
    /// Lines where it was not.
    pub compact_not_shorter: usize,
    /// Summed standard-minus-compact length difference.
    pub total_saved_bits: i64,
}

impl ComparisonReport {
    fn tally(&mut self, line: LineComparison) {
        self.lines += 1;
        if line.compact_shorter() {
            self.compact_shorter += 1;
        } else {
            self.compact_not_shorter += 1;
        }
        self.total_saved_bits += line.saved_bits();
    }

    /// Overall verdict: compact is smaller on average iff it won more lines
    /// than it lost.
    pub fn compact_wins(&self) -> bool {
        self.compact_shorter > self.compact_not_shorter
    }

    /// Average per-line length difference (standard minus compact).
    pub fn average_saved_bits(&self) -> f64 {
        if self.lines == 0 {
            0.0
        } else {
            self.total_saved_bits as f64 / self.lines as f64
        }
    }
}
