pub mod index;
pub mod keywords;
pub mod note;
pub mod person;
pub mod task;
