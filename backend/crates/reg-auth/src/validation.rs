//! Input policies applied before anything touches the store.
//!
//! Both checks follow ECMAScript regex semantics: whitespace is the `\s`
//! class and credential length is counted in UTF-16 code units.

/// Minimum credential length, in UTF-16 code units
pub const MIN_CREDENTIAL_LENGTH: usize = 6;

/// A credential must contain at least one of these
pub const CREDENTIAL_SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// Whether `candidate` is shaped like `local@domain.tld`.
///
/// Exactly one `@`, no whitespace, a non-empty local part, and a domain with
/// at least one `.` that has text on both sides. Deliverability is not checked.
pub fn validate_identity(candidate: &str) -> bool {
    let Some((local, domain)) = candidate.split_once('@') else {
        return false;
    };

    if local.is_empty() || local.chars().any(is_whitespace) {
        return false;
    }

    if domain.contains('@') || domain.chars().any(is_whitespace) {
        return false;
    }

    domain
        .char_indices()
        .any(|(i, c)| c == '.' && i > 0 && i + 1 < domain.len())
}

/// Whether `candidate` is at least [`MIN_CREDENTIAL_LENGTH`] code units long
/// and contains an ASCII digit and one of [`CREDENTIAL_SYMBOLS`].
pub fn validate_credential_strength(candidate: &str) -> bool {
    if candidate.chars().any(is_line_terminator) {
        return false;
    }

    candidate.encode_utf16().count() >= MIN_CREDENTIAL_LENGTH
        && candidate.chars().any(|c| c.is_ascii_digit())
        && candidate.chars().any(|c| CREDENTIAL_SYMBOLS.contains(c))
}

/// The ECMAScript `\s` class: WhiteSpace plus LineTerminator.
fn is_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    ) || is_line_terminator(c)
}

fn is_line_terminator(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\u{2028}' | '\u{2029}')
}
