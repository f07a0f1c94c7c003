//! Allow-list text sanitizer for user-supplied names and addresses.

/// Characters kept besides alphanumerics.
const EXTRA_ALLOWED: &str = " -_.,()#";

/// Strip everything outside the allow-list, truncate to `max_length`
/// characters, trim surrounding whitespace. Total: never fails, the result
/// may be empty.
pub fn sanitize_input(text: &str, max_length: usize) -> String {
    let sanitized: String = text
        .chars()
        .filter(|c| c.is_alphanumeric() || EXTRA_ALLOWED.contains(*c))
        .take(max_length)
        .collect();
    sanitized.trim().to_string()
}
