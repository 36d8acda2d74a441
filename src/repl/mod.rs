pub mod completion;
pub mod engine;
pub mod prompt;
