use std::io::BufRead;

use crate::error::Result;

/// Line-at-a-time reader that tracks 1-based line numbers for diagnostics.
pub struct LineReader<R> {
    inner: R,
    buf: String,
    line: usize,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            buf: String::with_capacity(128),
            line: 0,
        }
    }

    /// Next line with trailing whitespace (including `\r\n`) removed,
    /// or `None` at end of stream.
    pub fn next_line(&mut self) -> Result<Option<(usize, &str)>> {
        self.buf.clear();
        if self.inner.read_line(&mut self.buf)? == 0 {
            return Ok(None);
        }
        self.line += 1;
        Ok(Some((self.line, self.buf.trim_end())))
    }

    /// Number of lines consumed so far.
    pub fn line_number(&self) -> usize {
        self.line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn numbers_lines_and_strips_crlf() {
        let mut lines = LineReader::new(Cursor::new("ply\r\nformat ascii 1.0  \n\nend"));
        assert_eq!(lines.next_line().unwrap(), Some((1, "ply")));
        assert_eq!(lines.next_line().unwrap(), Some((2, "format ascii 1.0")));
        assert_eq!(lines.next_line().unwrap(), Some((3, "")));
        assert_eq!(lines.next_line().unwrap(), Some((4, "end")));
        assert_eq!(lines.next_line().unwrap(), None);
        assert_eq!(lines.line_number(), 4);
    }
}
