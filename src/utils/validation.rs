use crate::utils::error::{SortError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(SortError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(SortError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SortError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 儲存鍵會直接變成檔名，只允許安全字元
pub fn validate_storage_key(field_name: &str, key: &str) -> Result<()> {
    validate_non_empty_string(field_name, key)?;

    if let Some(bad) = key
        .chars()
        .find(|c| !(c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.')))
    {
        return Err(SortError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: format!("Unsupported character '{}' (use letters, digits, '-', '_' or '.')", bad),
        });
    }

    if key.starts_with('.') {
        return Err(SortError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: key.to_string(),
            reason: "Key cannot start with '.'".to_string(),
        });
    }

    Ok(())
}

pub fn validate_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(SortError::IndexOutOfBounds { index, len });
    }
    Ok(())
}
