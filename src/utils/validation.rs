use crate::utils::error::{ConvError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(ConvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(ConvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(ConvError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_placeholders(field_name: &str, template: &str, placeholders: &[&str]) -> Result<()> {
    let missing: Vec<&str> = placeholders
        .iter()
        .copied()
        .filter(|p| !template.contains(p))
        .collect();

    if !missing.is_empty() {
        return Err(ConvError::ConfigValidationError {
            field: field_name.to_string(),
            message: format!("template must contain {}", missing.join(", ")),
        });
    }
    Ok(())
}
