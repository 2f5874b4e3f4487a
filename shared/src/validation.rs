use validator::ValidationError;

/// Trims a participant name, rejecting blank or whitespace-only input.
pub fn validate_name(raw: &str) -> Result<&str, ValidationError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(ValidationError::new("blank_name"));
    }
    Ok(name)
}

/// Trims a host-key attempt, rejecting blank input before any comparison happens.
pub fn validate_host_key(attempt: &str) -> Result<&str, ValidationError> {
    let key = attempt.trim();
    if key.is_empty() {
        return Err(ValidationError::new("blank_key"));
    }
    Ok(key)
}
