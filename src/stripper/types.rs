use derive_more::Constructor;
use std::ops::Range;
use strum_macros::{Display, EnumIter};

#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, EnumIter)]
pub enum SpanKind {
    #[strum(serialize = "line comment")]
    LineComment,
    #[strum(serialize = "block comment")]
    BlockComment,
    #[strum(serialize = "character literal")]
    SingleQuoted,
    #[strum(serialize = "string literal")]
    DoubleQuoted,
    #[strum(serialize = "plain text")]
    PlainText,
}

impl SpanKind {
    pub fn is_comment(self) -> bool {
        match self {
            SpanKind::LineComment | SpanKind::BlockComment => true,
            SpanKind::SingleQuoted | SpanKind::DoubleQuoted | SpanKind::PlainText => false,
        }
    }
}

/// A classified byte range `start..end` of a source text.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Constructor)]
pub struct Span {
    pub kind: SpanKind,
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn slice<'a>(&self, source: &'a str) -> &'a str {
        &source[self.range()]
    }
}

/// 1-based line and column (in chars) of a position in a source text.
#[derive(Debug, PartialEq, Clone, Copy, Eq, Constructor)]
pub struct Loc {
    line: usize,
    col: usize,
}

impl Loc {
    pub fn of_offset(source: &str, offset: usize) -> Self {
        let before = &source[..offset];
        let line_start = before.rfind('\n').map_or(0, |idx| idx + 1);
        Loc::new(
            before.matches('\n').count() + 1,
            before[line_start..].chars().count() + 1,
        )
    }
}

impl std::fmt::Display for Loc {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(line: {}, col: {})", self.line, self.col)
    }
}
