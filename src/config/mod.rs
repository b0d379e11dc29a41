pub mod toml_config;

pub use toml_config::RegistryConfig;

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "course-registry")]
#[command(about = "Register students for courses and keep the enrollments in a JSON file")]
pub struct CliConfig {
    /// Enrollment file to load at startup and write on save
    #[arg(long)]
    pub file: Option<String>,

    /// Optional TOML configuration file
    #[arg(long)]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// 命令列的 `--file` 優先於 TOML 的 `storage.file_name`
    pub fn resolve(&self, mut config: RegistryConfig) -> RegistryConfig {
        if let Some(file) = &self.file {
            config.storage.file_name = file.clone();
        }
        config
    }
}
