//! Text utilities for position conversion and identifier lookup.
//!
//! LSP positions count columns in UTF-16 code units; everything else in the
//! server works on byte offsets into the source.

use std::ops::Range;

use tower_lsp::lsp_types::{Position, Range as LspRange};

/// Pre-computed line index for efficient position lookups.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset where each line starts.
    line_starts: Vec<usize>,
    source: String,
}

impl LineIndex {
    pub fn new(source: String) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();

        Self {
            line_starts,
            source,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Convert a byte offset to an LSP position.
    pub fn offset_to_position(&self, offset: usize) -> Position {
        let line = match self.line_starts.binary_search(&offset) {
            Ok(line) => line,
            Err(line) => line.saturating_sub(1),
        };

        let line_start = self.line_starts[line];
        let end = offset.min(self.source.len());
        let col: usize = self.source[line_start..end]
            .chars()
            .map(char::len_utf16)
            .sum();

        Position::new(line as u32, col as u32)
    }

    /// Convert an LSP position to a byte offset.
    ///
    /// Columns past the end of a line clamp to the line end. Returns None when
    /// the line does not exist.
    pub fn position_to_offset(&self, position: Position) -> Option<usize> {
        let line = position.line as usize;
        let line_start = *self.line_starts.get(line)?;
        let line_end = self
            .line_starts
            .get(line + 1)
            .map(|&next| next - 1)
            .unwrap_or(self.source.len());

        let mut utf16_col = 0u32;
        for (i, c) in self.source[line_start..line_end].char_indices() {
            if utf16_col >= position.character {
                return Some(line_start + i);
            }
            utf16_col += c.len_utf16() as u32;
        }

        Some(line_end)
    }

    pub fn span_to_range(&self, span: &Range<usize>) -> LspRange {
        LspRange::new(
            self.offset_to_position(span.start),
            self.offset_to_position(span.end),
        )
    }

    /// Byte range of the AutoIt identifier touching `offset`, if any.
    ///
    /// The cursor may sit on any character of the identifier or directly after
    /// its last character. Variables (`$name`) and macros (`@name`) are not
    /// identifiers for this purpose.
    pub fn identifier_at(&self, offset: usize) -> Option<Range<usize>> {
        let bytes = self.source.as_bytes();
        let offset = offset.min(bytes.len());

        let start = offset - bytes[..offset]
            .iter()
            .rev()
            .take_while(|b| is_identifier_byte(**b))
            .count();
        let end = offset
            + bytes[offset..]
                .iter()
                .take_while(|b| is_identifier_byte(**b))
                .count();

        if start == end || matches!(start.checked_sub(1).map(|i| bytes[i]), Some(b'$' | b'@')) {
            return None;
        }
        Some(start..end)
    }
}

fn is_identifier_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_line() {
        let idx = LineIndex::new("hello world".to_string());
        assert_eq!(idx.offset_to_position(0), Position::new(0, 0));
        assert_eq!(idx.offset_to_position(5), Position::new(0, 5));
        assert_eq!(idx.offset_to_position(11), Position::new(0, 11));
    }

    #[test]
    fn multi_line() {
        let idx = LineIndex::new("hello\nworld\ntest".to_string());
        assert_eq!(idx.offset_to_position(5), Position::new(0, 5));
        assert_eq!(idx.offset_to_position(6), Position::new(1, 0));
        assert_eq!(idx.offset_to_position(12), Position::new(2, 0));
        assert_eq!(idx.position_to_offset(Position::new(1, 5)), Some(11));
        assert_eq!(idx.position_to_offset(Position::new(2, 2)), Some(14));
    }

    #[test]
    fn utf16_columns() {
        let idx = LineIndex::new("a😀b".to_string());
        assert_eq!(idx.offset_to_position(5), Position::new(0, 3));
        assert_eq!(idx.position_to_offset(Position::new(0, 3)), Some(5));
    }

    #[test]
    fn column_past_line_end_clamps() {
        let idx = LineIndex::new("abc\ndef".to_string());
        assert_eq!(idx.position_to_offset(Position::new(0, 40)), Some(3));
        assert_eq!(idx.position_to_offset(Position::new(1, 40)), Some(7));
        assert_eq!(idx.position_to_offset(Position::new(5, 0)), None);
    }

    #[test]
    fn identifier_under_cursor() {
        let src = "Local $h = _WinAPI_GetFocus()";
        let idx = LineIndex::new(src.to_string());
        let start = src.find("_WinAPI").unwrap();
        let end = start + "_WinAPI_GetFocus".len();
        assert_eq!(idx.identifier_at(start), Some(start..end));
        assert_eq!(idx.identifier_at(start + 4), Some(start..end));
        assert_eq!(idx.identifier_at(end), Some(start..end));
        assert_eq!(idx.identifier_at(end + 1), None);
    }

    #[test]
    fn variables_and_macros_are_not_identifiers() {
        let src = "$hWnd @error";
        let idx = LineIndex::new(src.to_string());
        assert_eq!(idx.identifier_at(2), None);
        assert_eq!(idx.identifier_at(8), None);
    }

    #[test]
    fn identifier_runs_past_cursor() {
        let src = "x = _WinAPI_GetFocXYZ";
        let idx = LineIndex::new(src.to_string());
        assert_eq!(idx.identifier_at(src.find("XYZ").unwrap()), Some(4..src.len()));
        assert_eq!(idx.identifier_at(3), None);
    }
}
