//! Lexical state of an AutoIt source up to a cursor.
//!
//! The scan walks the source from the top, line by line, and keeps just enough
//! state to answer two questions: is the cursor in code (not in a string or a
//! comment), and which parentheses and brackets are open around it.
//!
//! AutoIt statements end at a line break unless the line ends with the ` _`
//! continuation marker. `;` starts a comment that runs to the end of the line,
//! and `#cs`/`#ce` (or `#comments-start`/`#comments-end`) at the start of a
//! line open and close a block comment. Block comments nest.

/// An open `(` or `[` before the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Frame {
    /// Byte offset of the opening character.
    pub open: usize,
    /// True for `(`, false for `[`.
    pub paren: bool,
    /// Commas seen directly inside this frame.
    pub commas: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive {
    CommentStart,
    CommentEnd,
}

/// State at the end of a scan.
#[derive(Debug, Default)]
pub(crate) struct Scan {
    /// Open frames in the current statement, outermost first.
    pub stack: Vec<Frame>,
    quote: Option<char>,
    line_comment: bool,
    block_depth: usize,
    // Last non-blank char on the current line and the one before it, for the
    // ` _` continuation marker.
    last: Option<char>,
    before_last: Option<char>,
    prev: Option<char>,
}

impl Scan {
    /// Scan `source` up to the byte `offset`.
    pub fn new(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let mut scan = Self::default();
        let mut line_start = 0;
        for line in source.split_inclusive('\n') {
            if line_start > offset {
                break;
            }
            let upto = (offset - line_start).min(line.len());
            scan.line(line, line_start, upto);
            line_start += line.len();
        }
        scan
    }

    /// True when the cursor is outside strings and comments.
    pub fn in_code(&self) -> bool {
        self.quote.is_none() && !self.line_comment && self.block_depth == 0
    }

    /// The innermost open `(`, skipping any `[` opened inside it.
    pub fn innermost_paren(&self) -> Option<&Frame> {
        self.stack.iter().rev().find(|frame| frame.paren)
    }

    /// Consume `line[..upto]`; `base` is the line's offset in the source.
    fn line(&mut self, line: &str, base: usize, upto: usize) {
        let ends_here = upto == line.len() && line.ends_with('\n');

        // A directive line belongs to the comment block as a whole, so the
        // full line is inspected even when the cursor sits inside it.
        match directive(line) {
            Some(Directive::CommentStart) => {
                self.block_depth += 1;
                self.comment_line(ends_here);
                return;
            }
            Some(Directive::CommentEnd) if self.block_depth > 0 => {
                self.block_depth -= 1;
                self.comment_line(ends_here);
                return;
            }
            _ if self.block_depth > 0 => {
                self.comment_line(ends_here);
                return;
            }
            _ => {}
        }

        for (i, c) in line[..upto].char_indices() {
            self.char(base + i, c);
        }
    }

    fn comment_line(&mut self, ends_here: bool) {
        self.line_comment = !ends_here;
    }

    fn char(&mut self, i: usize, c: char) {
        if c == '\n' {
            self.end_line();
            return;
        }
        if self.line_comment {
            return;
        }

        if let Some(q) = self.quote {
            if c == q {
                self.quote = None;
            }
        } else {
            match c {
                ';' => {
                    self.line_comment = true;
                    return;
                }
                '"' | '\'' => self.quote = Some(c),
                '(' | '[' => self.stack.push(Frame {
                    open: i,
                    paren: c == '(',
                    commas: 0,
                }),
                ')' | ']' => {
                    self.stack.pop();
                }
                ',' => {
                    if let Some(frame) = self.stack.last_mut() {
                        frame.commas += 1;
                    }
                }
                _ => {}
            }
        }

        if !c.is_whitespace() {
            self.before_last = self.prev;
            self.last = Some(c);
        }
        self.prev = Some(c);
    }

    fn end_line(&mut self) {
        let continued =
            self.last == Some('_') && self.before_last.is_some_and(char::is_whitespace);
        if !continued {
            self.stack.clear();
        }
        self.quote = None;
        self.line_comment = false;
        self.last = None;
        self.before_last = None;
        self.prev = None;
    }
}

fn directive(line: &str) -> Option<Directive> {
    let word = line
        .trim_start()
        .split(|c: char| c.is_whitespace() || c == ';')
        .next()?;
    if word.eq_ignore_ascii_case("#cs") || word.eq_ignore_ascii_case("#comments-start") {
        Some(Directive::CommentStart)
    } else if word.eq_ignore_ascii_case("#ce") || word.eq_ignore_ascii_case("#comments-end") {
        Some(Directive::CommentEnd)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn in_code(source: &str) -> bool {
        Scan::new(source, source.len()).in_code()
    }

    #[test]
    fn strings_and_line_comments() {
        assert!(in_code("_WinAPI_GetFocus("));
        assert!(!in_code("$s = \"_WinAPI_"));
        assert!(!in_code("$s = '_WinAPI_"));
        assert!(in_code("$s = \"a\" & _WinAPI_"));
        assert!(!in_code("; _WinAPI_"));
        assert!(in_code("; comment\n_WinAPI_"));
    }

    #[test]
    fn block_comments() {
        assert!(!in_code("#cs\n_WinAPI_"));
        assert!(!in_code("#comments-start\n_WinAPI_"));
        assert!(!in_code("  #CS ; notes\nfoo(\n_WinAPI_"));
        assert!(in_code("#cs\nfoo\n#ce\n_WinAPI_"));
        assert!(in_code("#comments-start\nfoo\n#comments-end\n_WinAPI_"));
        assert!(!in_code("#cs"));
        assert!(!in_code("#cs\n#ce"));
    }

    #[test]
    fn block_comments_nest() {
        assert!(!in_code("#cs\n#cs\n#ce\n_WinAPI_"));
        assert!(in_code("#cs\n#cs\n#ce\n#ce\n_WinAPI_"));
        // A stray end marker outside a block is ignored.
        assert!(in_code("#ce\n_WinAPI_"));
    }

    #[test]
    fn hash_directives_are_not_comments() {
        assert!(in_code("#include <WinAPI.au3>\n_WinAPI_"));
        assert!(in_code("#csx\n_WinAPI_"));
    }

    #[test]
    fn frames_track_parens_and_brackets() {
        let source = "_WinAPI_LineTo($hDC, $a[1, ";
        let scan = Scan::new(source, source.len());
        assert_eq!(scan.stack.len(), 2);
        assert!(!scan.stack[1].paren);
        assert_eq!(scan.stack[1].commas, 1);
        let paren = scan.innermost_paren().unwrap();
        assert_eq!(paren.open, source.find('(').unwrap());
        assert_eq!(paren.commas, 1);
    }

    #[test]
    fn block_comment_does_not_end_a_continued_statement() {
        let source = "_WinAPI_LineTo($hDC, _\n#cs\n(\n#ce\n    $iX, ";
        let scan = Scan::new(source, source.len());
        assert!(scan.in_code());
        assert_eq!(scan.innermost_paren().unwrap().commas, 2);
    }

    #[test]
    fn scan_stops_at_offset() {
        let source = "_WinAPI_MoveWindow($h, 1, 2)";
        let scan = Scan::new(source, source.find('1').unwrap());
        assert_eq!(scan.innermost_paren().unwrap().commas, 1);
    }
}
