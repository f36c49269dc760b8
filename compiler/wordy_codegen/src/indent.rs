//! Line-prefixing writer.
//!
//! [`IndentingWriter`] wraps another [`fmt::Write`] and puts a fixed prefix
//! in front of every line written through it. Code generation for a block
//! body wraps its output in one and never tracks columns itself; nested
//! blocks wrap again, so prefixes accumulate with depth.

use std::fmt;

/// Writer decorator that prefixes every non-empty line.
///
/// The prefix is written lazily, just before the first text of a line, so
/// it appears once per line no matter how many writes make up that line.
///
/// Blank lines stay blank: a line with no text before its newline, including
/// `println("")`, gets no prefix, so generated output never carries trailing
/// whitespace. Code generation never emits blank lines itself, so this only
/// shows up when a caller writes one through the writer directly.
pub struct IndentingWriter<W> {
    inner: W,
    prefix: String,
    indent_pending: bool,
}

impl<W: fmt::Write> IndentingWriter<W> {
    pub fn new(inner: W, prefix: impl Into<String>) -> Self {
        IndentingWriter {
            inner,
            prefix: prefix.into(),
            indent_pending: true,
        }
    }

    /// Write `text` followed by a newline.
    pub fn println(&mut self, text: &str) -> fmt::Result {
        fmt::Write::write_str(self, text)?;
        fmt::Write::write_char(self, '\n')
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}

impl<W: fmt::Write> fmt::Write for IndentingWriter<W> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for piece in s.split_inclusive('\n') {
            let line_end = piece.strip_suffix('\n');
            let text = line_end.unwrap_or(piece);
            if self.indent_pending && !text.is_empty() {
                self.inner.write_str(&self.prefix)?;
                self.indent_pending = false;
            }
            self.inner.write_str(piece)?;
            if line_end.is_some() {
                self.indent_pending = true;
            }
        }
        Ok(())
    }
}
