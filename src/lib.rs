pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::JsonFileStore;
pub use app::Presenter;
pub use config::RegistryConfig;
pub use crate::core::{menu::MenuChoice, session::RegistrationSession};
pub use domain::model::Student;
pub use utils::error::{RegistryError, Result};
