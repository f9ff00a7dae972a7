pub mod stripper;

pub mod frontend;

pub mod cli;

pub use stripper::{strip, strip_comments};
