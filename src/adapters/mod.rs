// Adapters layer: concrete implementations of the domain ports.

pub mod json_store;

pub use json_store::{JsonFileStore, DEFAULT_FILE_NAME};
