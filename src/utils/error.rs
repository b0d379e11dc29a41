use std::fmt;
use std::io::ErrorKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("{message}")]
    Validation { field: String, message: String },

    #[error("No such file: {path} ({source})")]
    FileNotFound {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not write {path}: {source}")]
    Write {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Configuration error in {field}: {message}")]
    ConfigError { field: String, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    MissingFile,
    Corruption,
    Write,
    Input,
    Io,
    Config,
}

impl ErrorCategory {
    /// 給使用者看的類別說明
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCategory::Validation => "A value did not satisfy the field's format rules.",
            ErrorCategory::MissingFile => "The requested file could not be found.",
            ErrorCategory::Corruption => "The file content is not a valid enrollment list.",
            ErrorCategory::Write => "The file could not be written.",
            ErrorCategory::Input => "The console input could not be used.",
            ErrorCategory::Io => "An operating system I/O operation failed.",
            ErrorCategory::Config => "The configuration is invalid.",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorCategory::Validation => "ValidationError",
            ErrorCategory::MissingFile => "FileNotFoundError",
            ErrorCategory::Corruption => "CorruptFileError",
            ErrorCategory::Write => "WriteError",
            ErrorCategory::Input => "InputError",
            ErrorCategory::Io => "IoError",
            ErrorCategory::Config => "ConfigError",
        };
        f.write_str(name)
    }
}

impl RegistryError {
    pub fn validation(field: &str, message: impl Into<String>) -> Self {
        RegistryError::Validation {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            RegistryError::Validation { .. } => ErrorCategory::Validation,
            RegistryError::FileNotFound { .. } => ErrorCategory::MissingFile,
            RegistryError::Parse { .. } => ErrorCategory::Corruption,
            RegistryError::Read { source, .. } if source.kind() == ErrorKind::InvalidData => {
                ErrorCategory::Corruption
            }
            RegistryError::Read { .. } => ErrorCategory::Io,
            RegistryError::Write { .. } => ErrorCategory::Write,
            RegistryError::InvalidInput { .. } => ErrorCategory::Input,
            RegistryError::IoError(_) | RegistryError::SerializationError(_) => ErrorCategory::Io,
            RegistryError::ConfigError { .. } => ErrorCategory::Config,
        }
    }

    /// 對使用者顯示的簡短訊息，技術細節另外輸出
    pub fn user_friendly_message(&self) -> String {
        match self {
            RegistryError::Validation { .. } => {
                "One of the values was the incorrect type of data!".to_string()
            }
            RegistryError::FileNotFound { .. } => "Error: The file does not exist.".to_string(),
            RegistryError::Parse { .. } | RegistryError::Read { .. } => {
                "Error: There was a problem with reading the file.".to_string()
            }
            RegistryError::Write { .. } => {
                "Error: There was a problem with writing to the file.\n\
                 Please check that the file is not open by another program."
                    .to_string()
            }
            RegistryError::InvalidInput { .. } => {
                "Error: There was a problem with your entered data.".to_string()
            }
            RegistryError::IoError(_) | RegistryError::SerializationError(_) => {
                "Error: An unexpected file system problem occurred.".to_string()
            }
            RegistryError::ConfigError { .. } => {
                "Error: The configuration could not be used.".to_string()
            }
        }
    }

    /// Console stream failures end the session, everything else is reported and survived.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, RegistryError::IoError(_))
    }
}

pub type Result<T> = std::result::Result<T, RegistryError>;
