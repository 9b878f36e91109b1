//! Variable name validation.
//!
//! Secret identifiers such as `prod/db-password` cannot be used as shell
//! variable names. This module checks names against the POSIX rules and
//! rewrites them when needed.

/// Check whether a name is a POSIX-compliant environment variable name.
///
/// Valid names:
/// - Only A-Z, 0-9, and underscore
/// - Cannot start with a digit
/// - Cannot be empty
pub fn is_posix_name(name: &str) -> bool {
    match name.chars().next() {
        None => false,
        Some(first) if first.is_ascii_digit() => false,
        Some(_) => name
            .chars()
            .all(|ch| ch.is_ascii_uppercase() || ch.is_ascii_digit() || ch == '_'),
    }
}

/// Rewrite a name into a POSIX-compliant environment variable name.
///
/// A leading digit gets an underscore prefix, every character other than an
/// ASCII letter, digit or underscore becomes an underscore, and the result
/// is uppercased. Applying it twice gives the same result as applying it once.
///
/// # Arguments
///
/// * `name` - The name to rewrite
///
/// # Examples
///
/// ```
/// use sm_inject::core::validation::to_posix_name;
///
/// assert_eq!(to_posix_name("9abc"), "_9ABC");
/// assert_eq!(to_posix_name("my-secret.name"), "MY_SECRET_NAME");
/// ```
pub fn to_posix_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 1);

    if name.starts_with(|ch: char| ch.is_ascii_digit()) {
        out.push('_');
    }

    for ch in name.chars() {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            out.push(ch.to_ascii_uppercase());
        } else {
            out.push('_');
        }
    }

    out
}
