pub mod lex;
pub mod strip;
pub mod types;

pub use lex::{lex, spans, Lexer};
pub use strip::{strip, strip_comments, Stripped};
pub use types::{Loc, Span, SpanKind};
