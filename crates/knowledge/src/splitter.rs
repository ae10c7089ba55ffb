//! Character-based text splitting.
//!
//! The document is split on a separator (paragraph breaks by default) and the
//! pieces are merged back into chunks of bounded size. Consecutive chunks
//! share trailing pieces up to the overlap budget, so context that straddles
//! a chunk boundary is still retrievable. All sizes are in characters.

use std::collections::VecDeque;

use crate::error::{KnowledgeError, Result};

/// Default maximum chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 500;

/// Default overlap between consecutive chunks in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 50;

/// Default separator between pieces.
pub const DEFAULT_SEPARATOR: &str = "\n\n";

/// Splits text into overlapping chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextSplitter {
    chunk_size: usize,
    chunk_overlap: usize,
    separator: String,
}

impl Default for TextSplitter {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl TextSplitter {
    /// Create a splitter with the default separator.
    ///
    /// The overlap must be smaller than the chunk size.
    pub fn new(chunk_size: usize, chunk_overlap: usize) -> Result<Self> {
        if chunk_size == 0 {
            return Err(KnowledgeError::InvalidConfig(
                "chunk_size must be greater than zero".to_string(),
            ));
        }
        if chunk_overlap >= chunk_size {
            return Err(KnowledgeError::InvalidConfig(format!(
                "chunk_overlap ({}) must be smaller than chunk_size ({})",
                chunk_overlap, chunk_size
            )));
        }
        Ok(Self {
            chunk_size,
            chunk_overlap,
            separator: DEFAULT_SEPARATOR.to_string(),
        })
    }

    /// Use a different separator.
    pub fn with_separator(mut self, separator: impl Into<String>) -> Self {
        self.separator = separator.into();
        self
    }

    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn chunk_overlap(&self) -> usize {
        self.chunk_overlap
    }

    /// Split `text` into trimmed, non-empty chunks.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut pieces = Vec::new();
        for piece in text.split(self.separator.as_str()) {
            let piece = piece.trim();
            if piece.is_empty() {
                continue;
            }
            if char_len(piece) > self.chunk_size {
                pieces.extend(sliding_window(piece, self.chunk_size, self.chunk_overlap));
            } else {
                pieces.push(piece.to_string());
            }
        }

        self.merge(pieces)
    }

    fn merge(&self, pieces: Vec<String>) -> Vec<String> {
        let sep_len = char_len(&self.separator);
        let mut chunks = Vec::new();
        let mut current: VecDeque<(String, usize)> = VecDeque::new();
        let mut total = 0usize;

        for piece in pieces {
            let len = char_len(&piece);
            let joined_len = |total: usize, has_any: bool| {
                total + len + if has_any { sep_len } else { 0 }
            };

            if !current.is_empty() && joined_len(total, true) > self.chunk_size {
                self.emit(&current, &mut chunks);

                // Keep a tail of at most `chunk_overlap` chars that still
                // leaves room for the incoming piece.
                while let Some((_, front_len)) = current.front() {
                    let fits = joined_len(total, true) <= self.chunk_size;
                    if total <= self.chunk_overlap && fits {
                        break;
                    }
                    total -= front_len + if current.len() > 1 { sep_len } else { 0 };
                    current.pop_front();
                }
            }

            total = joined_len(total, !current.is_empty());
            current.push_back((piece, len));
        }

        self.emit(&current, &mut chunks);
        chunks
    }

    fn emit(&self, current: &VecDeque<(String, usize)>, chunks: &mut Vec<String>) {
        if current.is_empty() {
            return;
        }
        let joined = current
            .iter()
            .map(|(text, _)| text.as_str())
            .collect::<Vec<_>>()
            .join(&self.separator);
        let joined = joined.trim();
        if !joined.is_empty() {
            chunks.push(joined.to_string());
        }
    }
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Cut `text` into windows of `size` chars, each starting `overlap` chars
/// before the previous one ended.
fn sliding_window(text: &str, size: usize, overlap: usize) -> Vec<String> {
    let size = size.max(1);
    let overlap = overlap.min(size.saturating_sub(1));
    let chars: Vec<char> = text.chars().collect();
    let mut windows = Vec::new();
    let mut start = 0usize;

    while start < chars.len() {
        let end = (start + size).min(chars.len());
        let window: String = chars[start..end].iter().collect();
        let window = window.trim();
        if !window.is_empty() {
            windows.push(window.to_string());
        }
        if end == chars.len() {
            break;
        }
        start = end.saturating_sub(overlap);
    }

    windows
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_one_chunk() {
        let splitter = TextSplitter::default();
        let chunks = splitter.split("Hello world.\n\nSecond paragraph.");
        assert_eq!(chunks, vec!["Hello world.\n\nSecond paragraph."]);
    }

    #[test]
    fn test_blank_text_has_no_chunks() {
        let splitter = TextSplitter::default();
        assert!(splitter.split("  \n\n \n\n").is_empty());
    }

    #[test]
    fn test_paragraphs_respect_chunk_size() {
        let splitter = TextSplitter::new(30, 10).unwrap();
        let text = "alpha beta gamma\n\ndelta epsilon\n\nzeta eta theta\n\niota kappa";

        let chunks = splitter.split(text);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 30, "chunk too long: {chunk:?}");
            assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn test_small_paragraphs_carry_overlap() {
        let splitter = TextSplitter::new(20, 8).unwrap();
        let chunks = splitter.split("aaaa\n\nbbbb\n\ncccc\n\ndddd\n\neeee");
        assert_eq!(chunks.len(), 2);

        // Each chunk after the first starts with the last piece of the one before.
        for pair in chunks.windows(2) {
            let last_piece = pair[0].rsplit("\n\n").next().unwrap();
            assert!(
                pair[1].starts_with(last_piece),
                "{:?} should start with {:?}",
                pair[1],
                last_piece
            );
        }
    }

    #[test]
    fn test_long_piece_uses_sliding_window() {
        let splitter = TextSplitter::new(10, 3).unwrap();
        let text = "abcdefghijklmnopqrstuvwxyz";

        let chunks = splitter.split(text);
        assert_eq!(chunks[0], "abcdefghij");
        assert_eq!(chunks[1], "hijklmnopq");
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 10);
        }
        for pair in chunks.windows(2) {
            let tail: String = pair[0].chars().rev().take(3).collect::<Vec<_>>().into_iter().rev().collect();
            assert!(pair[1].starts_with(&tail));
        }
        assert!(chunks.last().unwrap().ends_with('z'));
    }

    #[test]
    fn test_multibyte_text_counts_chars() {
        let splitter = TextSplitter::new(5, 1).unwrap();
        let chunks = splitter.split("ééééééééé");
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 5);
        }
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            TextSplitter::new(10, 10),
            Err(KnowledgeError::InvalidConfig(_))
        ));
        assert!(matches!(
            TextSplitter::new(0, 0),
            Err(KnowledgeError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_custom_separator() {
        let splitter = TextSplitter::new(8, 3).unwrap().with_separator("|");
        let chunks = splitter.split("aaa|bbb|ccc");
        assert_eq!(chunks, vec!["aaa|bbb", "bbb|ccc"]);
    }
}
