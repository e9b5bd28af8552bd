use crate::server::error::AppError;

/// Ensures an identifier refers to a row the store could have assigned.
///
/// # Returns
/// - `Ok(id)` - The ID is greater than zero
/// - `Err(AppError::InvalidArgument)` - The ID is zero or negative
pub fn require_positive_id(id: i32) -> Result<i32, AppError> {
    if id <= 0 {
        return Err(AppError::InvalidArgument(format!(
            "ID must be greater than zero, got {}",
            id
        )));
    }

    Ok(id)
}

/// Ensures a text field contains at least one non-whitespace character.
///
/// # Arguments
/// - `value` - The text to check
/// - `field` - Field name reported in the error message
pub fn require_non_blank(value: &str, field: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::InvalidArgument(format!(
            "{} must not be blank",
            field
        )));
    }

    Ok(())
}
