//! Redaction helpers for logging configuration.

/// Masks a secret for display, keeping only its last four characters.
///
/// Short secrets are masked entirely so nothing useful leaks.
///
/// - `dub_1234567890abcd` → `***abcd`
/// - `abc` → `***`
pub fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }

    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Describes an optional secret for the configuration summary.
pub fn describe_secret(secret: Option<&str>) -> String {
    match secret {
        Some(s) if !s.is_empty() => format!("{} (set)", mask_secret(s)),
        _ => "not set".to_string(),
    }
}
