pub mod config;
pub mod discover;
pub mod error;
pub mod process;

pub use config::{Config, Pattern};
pub use discover::discover;
pub use error::Error;
pub use process::{inspect_file, process_file, run, Outcome, Summary};
