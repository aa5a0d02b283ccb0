use crate::error::AppError;

/// Strips executable markup from user input. Harmless formatting tags survive,
/// scripts, event handlers and `javascript:` links do not.
pub fn sanitize(input: &str) -> String {
    ammonia::clean(input).trim().to_string()
}

/// Sanitizes a field that must still carry text afterwards.
pub fn sanitize_required(field: &str, input: &str) -> Result<String, AppError> {
    let clean = sanitize(input);
    if clean.is_empty() {
        return Err(AppError::Validation(format!("{field} is required")));
    }
    Ok(clean)
}

/// Blank optional fields are stored as NULL.
pub fn sanitize_optional(input: Option<&str>) -> Option<String> {
    input.map(sanitize).filter(|clean| !clean.is_empty())
}
