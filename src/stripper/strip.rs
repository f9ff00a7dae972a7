use super::lex::lex;
use super::types::Loc;

/// What every comment is replaced by. Never the empty string: that could fuse the
/// tokens on either side of the comment.
pub const COMMENT_REPLACEMENT: &str = " ";

#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Stripped {
    pub text: String,
    pub changed: bool,
    pub comments: usize,
}

pub fn strip(source: &str) -> Stripped {
    let mut text = String::with_capacity(source.len());
    let mut comments = 0;

    for span in lex(source) {
        if span.kind.is_comment() {
            log::trace!(
                "removing {} @{} ({} bytes)",
                span.kind,
                Loc::of_offset(source, span.start),
                span.len()
            );
            text.push_str(COMMENT_REPLACEMENT);
            comments += 1;
        } else {
            text.push_str(span.slice(source));
        }
    }

    // Comments are at least two bytes and shrink to one, so any removal changes the text.
    Stripped {
        text,
        changed: comments > 0,
        comments,
    }
}

pub fn strip_comments(source: &str) -> String {
    strip(source).text
}
