pub mod assistants;
pub mod catalog;
