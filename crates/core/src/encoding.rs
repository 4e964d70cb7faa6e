/// Returns `true` when every character of `value` fits in a single Latin-1 byte.
///
/// HTTP/1.1 header fields are historically Latin-1, so credentials and header
/// entries that fail this check cannot be sent on the wire as-is.
///
/// # Examples
///
/// ```
/// use apicheck_core::encoding::is_latin_1_encodable;
///
/// assert!(is_latin_1_encodable("Café"));
/// assert!(is_latin_1_encodable("ÿ"));
/// assert!(!is_latin_1_encodable("Ā"));
/// ```
#[must_use]
pub fn is_latin_1_encodable(value: &str) -> bool {
    value.chars().all(|c| u32::from(c) <= 0xFF)
}
