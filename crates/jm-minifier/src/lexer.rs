//! Single-pass tokenizer that strips comments and protects literals.
//!
//! Code is lexed by the loop in `run`; the other states are IN_STRING,
//! IN_TEMPLATE, IN_LINE_COMMENT, IN_BLOCK_COMMENT and IN_REGEX. Only code is handed on to the whitespace layer; strings,
//! templates and regex literals go into the [`PlaceholderTable`] verbatim.
//!
//! All delimiters are ASCII, so the scan walks bytes and only ever slices the
//! source at ASCII positions.

use crate::layer2_literals::PlaceholderTable;

/// Keywords after which a `/` opens a regex literal rather than dividing.
const REGEX_PRECEDING_KEYWORDS: &[&str] = &[
    "return", "typeof", "instanceof", "in", "of", "new", "delete", "void",
    "throw", "case", "do", "else", "yield", "await",
];

/// Kind of region the scanner is in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexState {
    InString(u8),
    InTemplate,
    InLineComment,
    InBlockComment,
    InRegex,
}

/// Output of [`tokenize`]: code with placeholders, plus the captured literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Tokenized {
    pub code: String,
    pub literals: PlaceholderTable,
    pub comments_removed: usize,
}

struct Lexer<'a> {
    src: &'a str,
    bytes: &'a [u8],
    pos: usize,
    code_start: usize,
    /// First offset with no `*/` anywhere after it.
    unclosed_block_from: Option<usize>,
    out: Tokenized,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self {
            src,
            bytes: src.as_bytes(),
            pos: 0,
            code_start: 0,
            unclosed_block_from: None,
            out: Tokenized {
                code: String::with_capacity(src.len()),
                ..Default::default()
            },
        }
    }

    fn peek(&self, offset: usize) -> Option<u8> {
        self.bytes.get(self.pos + offset).copied()
    }

    /// Move pending code `[code_start, pos)` into the output.
    fn flush_code(&mut self) {
        self.out.code.push_str(&self.src[self.code_start..self.pos]);
        self.code_start = self.pos;
    }

    /// Capture `[pos, end)` as a literal and resume code at `end`.
    fn emit_literal(&mut self, end: usize) {
        let token = self.out.literals.push(&self.src[self.pos..end]);
        self.out.code.push_str(&token);
        self.pos = end;
        self.code_start = end;
    }

    /// Skip `[pos, end)` without emitting it. A comment spanning lines
    /// leaves a line break, as a real one would; otherwise identifiers on
    /// either side are kept from fusing together.
    fn drop_comment(&mut self, end: usize) {
        let before = self.out.code.chars().next_back();
        let after = self.src[end..].chars().next();
        if self.src[self.pos..end].contains('\n') {
            self.out.code.push('\n');
        } else if before.is_some_and(is_ident_char) && after.is_some_and(is_ident_char) {
            self.out.code.push(' ');
        }
        self.out.comments_removed += 1;
        self.pos = end;
        self.code_start = end;
    }

    fn run(mut self) -> Tokenized {
        while let Some(b) = self.peek(0) {
            match (b, self.peek(1)) {
                (b'\'' | b'"', _) => {
                    self.flush_code();
                    let end = self.scan(LexState::InString(b)).unwrap_or(self.bytes.len());
                    self.emit_literal(end);
                }
                (b'`', _) => {
                    self.flush_code();
                    let end = self.scan(LexState::InTemplate).unwrap_or(self.bytes.len());
                    self.emit_literal(end);
                }
                (b'/', Some(b'/')) => {
                    self.flush_code();
                    let end = self.scan(LexState::InLineComment).unwrap_or(self.bytes.len());
                    self.drop_comment(end);
                }
                (b'/', Some(b'*')) => match self.block_comment_end() {
                    Some(end) => {
                        self.flush_code();
                        self.drop_comment(end);
                    }
                    // Unclosed: leave `/*` in the code and keep lexing after it.
                    None => self.pos += 2,
                },
                (b'/', _) => {
                    self.flush_code();
                    if regex_allowed(&self.out.code) {
                        if let Some(end) = self.scan(LexState::InRegex) {
                            self.emit_literal(end);
                            continue;
                        }
                    }
                    self.pos += 1;
                }
                _ => self.pos += 1,
            }
        }
        self.flush_code();
        self.out
    }

    /// Like `scan(InBlockComment)`, but each stretch of input is searched
    /// for `*/` at most once.
    fn block_comment_end(&mut self) -> Option<usize> {
        if self.unclosed_block_from.is_some_and(|from| self.pos >= from) {
            return None;
        }
        let end = self.scan(LexState::InBlockComment);
        if end.is_none() {
            self.unclosed_block_from = Some(self.pos);
        }
        end
    }

    /// End offset (exclusive) of the region opening at `pos`. `None` when
    /// the region does not close: an unterminated block comment, or a `/`
    /// that turns out not to start a regex. Strings and templates run to end
    /// of input instead.
    fn scan(&self, state: LexState) -> Option<usize> {
        let len = self.bytes.len();
        let start = self.pos;
        let mut j = start + 1;
        match state {
            LexState::InString(quote) => {
                while j < len {
                    match self.bytes[j] {
                        b'\\' => j += 2,
                        b'\n' => return Some(j),
                        c if c == quote => return Some(j + 1),
                        _ => j += 1,
                    }
                }
                Some(len)
            }
            LexState::InTemplate => {
                while j < len {
                    match self.bytes[j] {
                        b'\\' => j += 2,
                        b'`' => return Some(j + 1),
                        _ => j += 1,
                    }
                }
                Some(len)
            }
            LexState::InLineComment => Some(self.src[start..].find('\n').map_or(len, |n| start + n)),
            LexState::InBlockComment => self.src[start + 2..].find("*/").map(|n| start + 2 + n + 2),
            LexState::InRegex => {
                let mut in_class = false;
                while j < len {
                    match self.bytes[j] {
                        b'\\' if matches!(self.bytes.get(j + 1).copied(), Some(b'\n' | b'\r') | None) => return None,
                        b'\\' => j += 2,
                        b'\n' | b'\r' => return None,
                        b'[' => { in_class = true; j += 1; }
                        b']' => { in_class = false; j += 1; }
                        b'/' if !in_class => {
                            j += 1;
                            while j < len && is_ident_byte(self.bytes[j]) {
                                j += 1;
                            }
                            return Some(j);
                        }
                        _ => j += 1,
                    }
                }
                None
            }
        }
    }
}

/// Strip comments and replace string, template and regex literals with
/// placeholders in one left-to-right scan.
pub fn tokenize(source: &str) -> Tokenized {
    Lexer::new(source).run()
}

/// Whether a `/` following `code` starts a regex literal. Code ending in an
/// expression (a name, a number, a placeholder, `)`, `]`, postfix `++`/`--`)
/// is followed by division.
pub fn regex_allowed(code: &str) -> bool {
    let trimmed = code.trim_end();
    if trimmed.ends_with("++") || trimmed.ends_with("--") {
        return false;
    }
    match trimmed.chars().next_back() {
        None => true,
        Some(')' | ']') => false,
        Some(c) if is_ident_char(c) => {
            let word_start = trimmed
                .char_indices()
                .rev()
                .take_while(|(_, c)| is_ident_char(*c))
                .last()
                .map_or(trimmed.len(), |(i, _)| i);
            REGEX_PRECEDING_KEYWORDS.contains(&&trimmed[word_start..])
        }
        Some(_) => true,
    }
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

fn is_ident_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_' || b == b'$'
}
