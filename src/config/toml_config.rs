use crate::adapters::DEFAULT_FILE_NAME;
use crate::app::presenter::DEFAULT_SEPARATOR_WIDTH;
use crate::utils::error::{RegistryError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, validate_range, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RegistryConfig {
    pub storage: StorageConfig,
    pub display: DisplayConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StorageConfig {
    pub file_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct DisplayConfig {
    pub separator_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_name: DEFAULT_FILE_NAME.to_string(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            separator_width: DEFAULT_SEPARATOR_WIDTH,
        }
    }
}

impl RegistryConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(RegistryError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| RegistryError::ConfigError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${ENROLLMENT_FILE})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| RegistryError::ConfigError {
            field: "toml_parsing".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn file_name(&self) -> &str {
        &self.storage.file_name
    }

    pub fn separator_width(&self) -> usize {
        self.display.separator_width
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().map(|l| l.level.as_str())
    }
}

impl Validate for RegistryConfig {
    fn validate(&self) -> Result<()> {
        validate_path("storage.file_name", &self.storage.file_name)?;
        validate_range("display.separator_width", self.display.separator_width, 1, 200)?;

        if let Some(logging) = &self.logging {
            validate_non_empty_string("logging.level", &logging.level)?;
            if !LOG_LEVELS.contains(&logging.level.as_str()) {
                return Err(RegistryError::ConfigError {
                    field: "logging.level".to_string(),
                    message: format!(
                        "Unsupported level '{}'. Valid levels: {}",
                        logging.level,
                        LOG_LEVELS.join(", ")
                    ),
                });
            }
        }

        Ok(())
    }
}
