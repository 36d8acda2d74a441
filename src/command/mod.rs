pub mod args;
pub mod definition;
pub mod executor;
pub mod parser;
pub mod tokenizer;
pub mod usage;

pub use definition::{Command, CommandResult};
pub use parser::parse;
