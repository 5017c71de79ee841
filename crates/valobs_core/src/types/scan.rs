//! Strict scanners shared by the canonical-string parsers.

/// Reads a field of exactly `width` ASCII digits.
pub(crate) fn fixed_digits(field: &str, width: usize) -> Option<u32> {
    if field.len() != width || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Reads a non-empty run of ASCII digits with an optional leading `+` or `-`.
pub(crate) fn signed_digits(field: &str) -> Option<(bool, &str)> {
    let (negative, digits) = match field.as_bytes().first() {
        Some(b'-') => (true, &field[1..]),
        Some(b'+') => (false, &field[1..]),
        _ => (false, field),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some((negative, digits))
}

/// Reads an integer in its one canonical spelling: an optional `-`, no `+`,
/// no leading zeros and no negative zero.
pub(crate) fn canonical_integer(field: &str) -> Option<(bool, &str)> {
    if field.starts_with('+') {
        return None;
    }
    let (negative, digits) = signed_digits(field)?;
    if digits.len() > 1 && digits.starts_with('0') {
        return None;
    }
    if negative && digits == "0" {
        return None;
    }
    Some((negative, digits))
}

/// `true` if a run of digits has no superfluous leading zero.
pub(crate) fn no_leading_zero(digits: &str) -> bool {
    digits.len() == 1 || !digits.starts_with('0')
}
