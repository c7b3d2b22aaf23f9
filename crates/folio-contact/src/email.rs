//! Email validation functions

use once_cell::sync::Lazy;
use regex::Regex;

// ECMAScript `\s`: differs from the Unicode class on U+0085 and U+FEFF.
const NOT_WS_OR_AT: &str =
    r"[^\t\n\x0B\x0C\r \u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}@]";

// One `@`, and a domain holding at least one `.` with text on both sides.
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let part = NOT_WS_OR_AT;
    Regex::new(&format!(r"^{part}+@{part}+\.{part}+$")).expect("email pattern is valid")
});

/// Validates basic email shape
///
/// Accepts `local@domain.tld` where every part is one or more characters that
/// are neither whitespace (as browsers define it for `\s`) nor `@`.
///
/// This is a sanity check, not RFC 5322 validation. It accepts strings such as
/// `a@b..c` or `"x"@y.z!` and rejects valid addresses like `user@localhost` or
/// quoted local parts containing spaces. Callers needing strict parsing should
/// not rely on it.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
