//! Streaming frequency analysis of text sources.

use crate::error::{Error, Result};
use crate::table::FrequencyTable;
use log::debug;
use std::fs::File;
use std::io::{self, Read, Seek, SeekFrom};
use std::path::Path;

/// Default chunk size, 64 MiB. Large enough to keep the read loop off the
/// hot path for multi-gigabyte corpora, small enough to stay resident.
pub const DEFAULT_CHUNK_SIZE: usize = 64 * 1024 * 1024;

/// Counts single characters and adjacent character pairs over a text stream.
///
/// The stream is consumed in fixed-size chunks. When a full chunk ends in the
/// middle of a word, the counter truncates the processed text at the last
/// space and seeks the stream back so the cut-off tail is re-read at the
/// start of the next chunk. Pairs are only tallied within one processed
/// chunk, so realignment keeps within-word pairs from being split or counted
/// twice.
///
/// After the scan completes, the whitespace noise keys (`"  "`, `"\n"`,
/// `"\r"`, `"\r\n"`) are dropped from the result.
#[derive(Debug, Clone)]
pub struct FrequencyCounter {
    chunk_size: usize,
}

impl FrequencyCounter {
    /// Creates a counter with the default 64 MiB chunk size.
    pub fn new() -> Self {
        Self::with_chunk_size(DEFAULT_CHUNK_SIZE)
    }

    /// Creates a counter with an explicit chunk size.
    ///
    /// The size must hold at least one maximal UTF-8 sequence, or a split
    /// character could stall the scan.
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        assert!(chunk_size >= 4, "chunk size must hold one UTF-8 character");
        Self { chunk_size }
    }

    /// Analyzes the file at `path`.
    ///
    /// A missing file reports as [`Error::NotFound`]; every other fault is
    /// generic I/O. The handle is scoped to this call and released on every
    /// exit path.
    pub fn count_file(&self, path: &Path) -> Result<FrequencyTable> {
        let file = File::open(path).map_err(|e| Error::from_io(e, path))?;
        self.count_stream(file)
    }

    /// Analyzes an arbitrary seekable stream of UTF-8 text.
    pub fn count_stream<R: Read + Seek>(&self, mut reader: R) -> Result<FrequencyTable> {
        let mut table = FrequencyTable::new();
        let mut buf = vec![0u8; self.chunk_size];

        loop {
            let filled = fill_chunk(&mut reader, &mut buf)?;
            if filled == 0 {
                break;
            }
            let full = filled == self.chunk_size;

            let mut text = decode_chunk(&mut reader, &buf[..filled], full)?;

            // A full chunk ending mid-word may have split a pair. Realign on
            // the last space: keep everything through it, re-read the rest.
            if full && !text.chars().next_back().is_some_and(char::is_whitespace) {
                if let Some(space) = text.rfind(' ') {
                    let tail = text.len() - (space + 1);
                    reader.seek(SeekFrom::Current(-(tail as i64)))?;
                    text = &text[..=space];
                }
            }

            debug!("processing chunk: {} of {} bytes", text.len(), filled);
            tally_chunk(&mut table, text);
        }

        table.remove_noise_keys();
        Ok(table)
    }
}

impl Default for FrequencyCounter {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads until `buf` is full or the stream ends.
///
/// A single `read` may return short even mid-stream; chunk-boundary handling
/// needs "full" to mean the buffer really was exhausted.
fn fill_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Decodes a chunk as UTF-8.
///
/// A full chunk may end inside a multi-byte sequence; those trailing bytes
/// are seeked back and re-read with the next chunk. Any other decoding fault
/// is real data corruption and reports as generic I/O.
fn decode_chunk<'a, R: Seek>(reader: &mut R, chunk: &'a [u8], full: bool) -> Result<&'a str> {
    match std::str::from_utf8(chunk) {
        Ok(text) => Ok(text),
        Err(e) if full && e.error_len().is_none() => {
            let valid = e.valid_up_to();
            let split = chunk.len() - valid;
            reader.seek(SeekFrom::Current(-(split as i64)))?;
            std::str::from_utf8(&chunk[..valid])
                .map_err(|e| Error::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
        }
        Err(e) => Err(Error::Io(io::Error::new(io::ErrorKind::InvalidData, e))),
    }
}

/// Tallies every character and every adjacent pair within one processed chunk.
fn tally_chunk(table: &mut FrequencyTable, text: &str) {
    let mut key = String::with_capacity(8);
    let mut prev: Option<char> = None;

    for c in text.chars() {
        key.clear();
        key.push(c);
        table.record(&key);

        if let Some(p) = prev {
            key.clear();
            key.push(p);
            key.push(c);
            table.record(&key);
        }
        prev = Some(c);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn count_with_chunk_size(input: &str, chunk_size: usize) -> FrequencyTable {
        FrequencyCounter::with_chunk_size(chunk_size)
            .count_stream(Cursor::new(input.as_bytes().to_vec()))
            .unwrap()
    }

    #[test]
    fn test_singles_and_pairs() {
        let table = count_with_chunk_size("abab", 1024);

        assert_eq!(table.count("a"), 2);
        assert_eq!(table.count("b"), 2);
        assert_eq!(table.count("ab"), 2);
        assert_eq!(table.count("ba"), 1);
    }

    #[test]
    fn test_noise_keys_removed() {
        let table = count_with_chunk_size("  \r\n", 1024);

        for key in ["  ", "\n", "\r", "\r\n"] {
            assert!(!table.contains(key), "noise key {key:?} survived");
        }
        // Content around the noise keys is still counted.
        assert_eq!(table.count(" "), 2);
        assert_eq!(table.count(" \r"), 1);
    }

    #[test]
    fn test_boundary_realignment_inside_word() {
        // The first 16-byte chunk ends inside "cccccc"; realignment rewinds
        // to the last space so the whole word lands in the second chunk and
        // its pairs match a single-chunk scan exactly.
        let input = "aaaa bbbb cccccc dddd";
        let chunked = count_with_chunk_size(input, 16);
        let reference = count_with_chunk_size(input, 1024);

        let total_chars = input.chars().count() as u64;
        let chunked_chars: u64 = chunked
            .iter()
            .filter(|(k, _)| k.chars().count() == 1)
            .map(|(_, c)| c)
            .sum();
        assert_eq!(chunked_chars, total_chars);

        for pair in ["aa", "bb", "cc", "dd"] {
            assert_eq!(
                chunked.count(pair),
                reference.count(pair),
                "pair {pair:?} miscounted across chunk boundary"
            );
        }
        assert_eq!(chunked.count("cc"), 5);
    }

    #[test]
    fn test_no_space_in_full_chunk_is_accepted() {
        // Degenerate long-token case: nothing to realign on, chunk is
        // processed as-is.
        let input = "abcdefghijklmnop";
        let table = count_with_chunk_size(input, 8);

        assert_eq!(table.count("a"), 1);
        assert_eq!(table.count("p"), 1);
        // The pair at the 8-byte boundary is split; both halves keep their
        // inner pairs.
        assert_eq!(table.count("gh"), 1);
        assert_eq!(table.count("ij"), 1);
        assert_eq!(table.count("hi"), 0);
    }

    #[test]
    fn test_multibyte_character_split_at_boundary() {
        // 'é' is two bytes; a 4-byte chunk lands inside it. The split bytes
        // are re-read, so no character is lost or mangled.
        let input = "aàé è";
        let chunked = count_with_chunk_size(input, 4);
        let reference = count_with_chunk_size(input, 1024);

        for (key, count) in reference.iter() {
            if key.chars().count() == 1 {
                assert_eq!(chunked.count(key), count, "character {key:?} miscounted");
            }
        }
    }

    #[test]
    fn test_missing_file_is_not_found() {
        let counter = FrequencyCounter::new();
        let err = counter
            .count_file(Path::new("definitely/not/here.txt"))
            .unwrap_err();
        assert!(matches!(err, Error::NotFound { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_io_error() {
        let counter = FrequencyCounter::with_chunk_size(1024);
        let err = counter
            .count_stream(Cursor::new(vec![b'a', 0xFF, b'b']))
            .unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_counter_reusable_after_failure() {
        let counter = FrequencyCounter::with_chunk_size(1024);
        let _ = counter
            .count_file(Path::new("definitely/not/here.txt"))
            .unwrap_err();

        let table = counter.count_stream(Cursor::new(b"ok".to_vec())).unwrap();
        assert_eq!(table.count("ok"), 1);
    }
}
