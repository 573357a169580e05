/// Returns true if `key` is non-empty and made only of ASCII letters, digits and underscores.
///
/// Matching is case-sensitive at the store level, so `Note` and `note` are distinct keys.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
