use crate::utils::error::{RegistryError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// 名字欄位：不可為空，且只能包含字母
pub fn validate_alphabetic(field_name: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(RegistryError::validation(
            field_name,
            format!("{} cannot be empty.", field_name),
        ));
    }

    if !value.chars().all(char::is_alphabetic) {
        return Err(RegistryError::validation(
            field_name,
            format!("{} may only contain alphabetic characters.", field_name),
        ));
    }

    Ok(())
}

/// 課程名稱必須以空白分隔（例如 "Python 100"）
pub fn validate_contains_space(field_name: &str, value: &str) -> Result<()> {
    if !value.contains(' ') {
        return Err(RegistryError::validation(
            field_name,
            format!(
                "{} must contain a separating space (e.g., a label followed by a number).",
                field_name
            ),
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(RegistryError::ConfigError {
            field: field_name.to_string(),
            message: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(RegistryError::ConfigError {
            field: field_name.to_string(),
            message: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(RegistryError::ConfigError {
            field: field_name.to_string(),
            message: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(RegistryError::ConfigError {
            field: field_name.to_string(),
            message: format!("Value {} must be between {} and {}", value, min, max),
        });
    }
    Ok(())
}
