use super::types::{Span, SpanKind};

const SLASH: u8 = b'/';
const STAR: u8 = b'*';
const BACKSLASH: u8 = b'\\';
const SINGLE_QUOTE: u8 = b'\'';
const DOUBLE_QUOTE: u8 = b'"';
const NEWLINE: u8 = b'\n';
const CARRIAGE_RETURN: u8 = b'\r';

// All delimiters are ASCII, so every offset we stop at is a char boundary even though
// we scan bytes. UTF-8 continuation bytes can never be mistaken for a delimiter.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum SeekMode {
    LineComment,
    BlockComment,
    Quoted(u8),
}

impl SeekMode {
    /// The mode opened at `pos`, trying the alternatives in priority order. This only looks
    /// at the opener: whether the span can actually be closed is up to `seek_end()`.
    fn opened_at(bytes: &[u8], pos: usize) -> Option<Self> {
        match (bytes[pos], bytes.get(pos + 1).copied()) {
            (SLASH, Some(SLASH)) => Some(SeekMode::LineComment),
            (SLASH, Some(STAR)) => Some(SeekMode::BlockComment),
            (SINGLE_QUOTE, _) => Some(SeekMode::Quoted(SINGLE_QUOTE)),
            (DOUBLE_QUOTE, _) => Some(SeekMode::Quoted(DOUBLE_QUOTE)),
            _ => None,
        }
    }

    fn kind(self) -> SpanKind {
        match self {
            SeekMode::LineComment => SpanKind::LineComment,
            SeekMode::BlockComment => SpanKind::BlockComment,
            SeekMode::Quoted(SINGLE_QUOTE) => SpanKind::SingleQuoted,
            SeekMode::Quoted(_) => SpanKind::DoubleQuoted,
        }
    }

    /// Given a span of this mode opened at `start`, yields the (exclusive) end of the
    /// span, or `None` if the span is never closed.
    fn seek_end(self, bytes: &[u8], start: usize) -> Option<usize> {
        match self {
            SeekMode::LineComment => Some(seek_line_end(bytes, start + 2)),
            SeekMode::BlockComment => bytes[start + 2..]
                .windows(2)
                .position(|w| w[0] == STAR && w[1] == SLASH)
                .map(|idx| start + 2 + idx + 2),
            SeekMode::Quoted(quote) => {
                let mut pos = start + 1;
                while pos < bytes.len() {
                    match bytes[pos] {
                        BACKSLASH if pos + 1 < bytes.len() => pos += 2,
                        BACKSLASH => return None,
                        c if c == quote => return Some(pos + 1),
                        _ => pos += 1,
                    }
                }
                None
            }
        }
    }
}

/// The line terminator itself is not part of a line comment. A `\r\n` pair counts as
/// one terminator.
fn seek_line_end(bytes: &[u8], from: usize) -> usize {
    match bytes[from..].iter().position(|&c| c == NEWLINE) {
        None => bytes.len(),
        Some(idx) => {
            let nl = from + idx;
            if nl > from && bytes[nl - 1] == CARRIAGE_RETURN {
                nl - 1
            } else {
                nl
            }
        }
    }
}

/// Splits a source text into contiguous `Span`s, left to right. At each position a line
/// comment, a block comment, a character literal and a string literal are tried in that
/// order; the first which can be completed wins. Everything else is `PlainText`.
pub struct Lexer<'a> {
    source: &'a str,
    pos: usize,
    pending: Option<Span>,

    // Once a `/*` fails to find a closing `*/`, so will every later one.
    block_unterminated: bool,
}

impl<'a> Lexer<'a> {
    pub fn new(source: &'a str) -> Self {
        Lexer {
            source,
            pos: 0,
            pending: None,
            block_unterminated: false,
        }
    }

    fn match_at(&mut self, pos: usize) -> Option<Span> {
        let bytes = self.source.as_bytes();
        let mode = SeekMode::opened_at(bytes, pos)?;

        if mode == SeekMode::BlockComment && self.block_unterminated {
            return None;
        }

        match mode.seek_end(bytes, pos) {
            Some(end) => Some(Span::new(mode.kind(), pos, end)),
            None => {
                if mode == SeekMode::BlockComment {
                    self.block_unterminated = true;
                }
                None
            }
        }
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        if let Some(span) = self.pending.take() {
            return Some(span);
        }

        let len = self.source.len();
        if self.pos >= len {
            return None;
        }

        let plain_start = self.pos;
        let mut pos = self.pos;
        while pos < len {
            if let Some(span) = self.match_at(pos) {
                self.pos = span.end;
                if pos == plain_start {
                    return Some(span);
                }

                self.pending = Some(span);
                return Some(Span::new(SpanKind::PlainText, plain_start, pos));
            }
            pos += 1;
        }

        self.pos = len;
        Some(Span::new(SpanKind::PlainText, plain_start, len))
    }
}

pub fn lex(source: &str) -> Lexer<'_> {
    Lexer::new(source)
}

pub fn spans(source: &str) -> Vec<Span> {
    lex(source).collect()
}

#[cfg(test)]
mod tests {
    use super::super::types::{Span, SpanKind};
    use super::spans;

    fn kinds(source: &str) -> Vec<(SpanKind, &str)> {
        spans(source)
            .into_iter()
            .map(|span| (span.kind, span.slice(source)))
            .collect()
    }

    #[test]
    fn empty_source_has_no_spans() {
        assert_eq!(spans(""), vec![]);
    }

    #[test]
    fn plain_only() {
        assert_eq!(
            spans("int x = 1;\n"),
            vec![Span::new(SpanKind::PlainText, 0, 11)]
        );
    }

    #[test]
    fn line_comment_stops_before_newline() {
        assert_eq!(
            kinds("a // b\nc"),
            vec![
                (SpanKind::PlainText, "a "),
                (SpanKind::LineComment, "// b"),
                (SpanKind::PlainText, "\nc"),
            ]
        );
    }

    #[test]
    fn line_comment_at_end_of_text() {
        assert_eq!(
            kinds("x //"),
            vec![(SpanKind::PlainText, "x "), (SpanKind::LineComment, "//")]
        );
    }

    #[test]
    fn line_comment_keeps_crlf() {
        assert_eq!(
            kinds("a // b\r\nc"),
            vec![
                (SpanKind::PlainText, "a "),
                (SpanKind::LineComment, "// b"),
                (SpanKind::PlainText, "\r\nc"),
            ]
        );
    }

    #[test]
    fn block_comment_is_non_greedy() {
        assert_eq!(
            kinds("/* a */ b /* c */"),
            vec![
                (SpanKind::BlockComment, "/* a */"),
                (SpanKind::PlainText, " b "),
                (SpanKind::BlockComment, "/* c */"),
            ]
        );
    }

    #[test]
    fn block_comment_does_not_close_on_its_own_star() {
        assert_eq!(
            kinds("/*/ x */"),
            vec![(SpanKind::BlockComment, "/*/ x */")]
        );
    }

    #[test]
    fn line_comment_beats_block_opener() {
        assert_eq!(
            kinds("//* x */\ny"),
            vec![
                (SpanKind::LineComment, "//* x */"),
                (SpanKind::PlainText, "\ny"),
            ]
        );
    }

    #[test]
    fn unterminated_block_comment_is_plain() {
        assert_eq!(
            kinds("a /* b // c"),
            vec![
                (SpanKind::PlainText, "a /* b "),
                (SpanKind::LineComment, "// c"),
            ]
        );
    }

    #[test]
    fn literals_hide_comment_markers() {
        assert_eq!(
            kinds(r#"s = "// not /* a */ comment"; c = '/';"#),
            vec![
                (SpanKind::PlainText, "s = "),
                (SpanKind::DoubleQuoted, r#""// not /* a */ comment""#),
                (SpanKind::PlainText, "; c = "),
                (SpanKind::SingleQuoted, "'/'"),
                (SpanKind::PlainText, ";"),
            ]
        );
    }

    #[test]
    fn escaped_quote_does_not_close_literal() {
        assert_eq!(
            kinds(r#""a\"b" // c"#),
            vec![
                (SpanKind::DoubleQuoted, r#""a\"b""#),
                (SpanKind::PlainText, " "),
                (SpanKind::LineComment, "// c"),
            ]
        );
    }

    #[test]
    fn escaped_backslash_then_quote_closes_literal() {
        assert_eq!(
            kinds(r"'\\' x"),
            vec![(SpanKind::SingleQuoted, r"'\\'"), (SpanKind::PlainText, " x")]
        );
    }

    #[test]
    fn unterminated_literal_is_plain() {
        assert_eq!(
            kinds("don't // x"),
            vec![
                (SpanKind::PlainText, "don't "),
                (SpanKind::LineComment, "// x"),
            ]
        );
    }

    #[test]
    fn trailing_backslash_leaves_literal_unterminated() {
        assert_eq!(kinds("\"ab\\"), vec![(SpanKind::PlainText, "\"ab\\")]);
    }

    #[test]
    fn literal_spans_lines() {
        assert_eq!(
            kinds("\"a\n// b\" c"),
            vec![
                (SpanKind::DoubleQuoted, "\"a\n// b\""),
                (SpanKind::PlainText, " c"),
            ]
        );
    }

    #[test]
    fn multibyte_text_is_sliced_on_char_boundaries() {
        assert_eq!(
            kinds("\"\\é\" ü /* ß */ ø"),
            vec![
                (SpanKind::DoubleQuoted, "\"\\é\""),
                (SpanKind::PlainText, " ü "),
                (SpanKind::BlockComment, "/* ß */"),
                (SpanKind::PlainText, " ø"),
            ]
        );
    }

    #[test]
    fn spans_cover_source_contiguously() {
        let source = "a/*b*/c'd'\"e\"//f\ng /* h";
        let all = spans(source);
        assert_eq!(all.first().map(|span| span.start), Some(0));
        assert_eq!(all.last().map(|span| span.end), Some(source.len()));
        for pair in all.windows(2) {
            assert_eq!(pair[0].end, pair[1].start);
            assert!(!pair[0].is_empty());
        }
    }
}
