/// Parses a token as an unsigned decimal number.
///
/// Unlike [`str::parse`], sign characters are rejected so that tokens
/// such as `+5` or `-3` never pass as plain numbers.
pub(crate) fn parse_number(token: &str) -> Option<u32> {
    if token.is_empty() || !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }

    token.parse().ok()
}

/// Whether a token is a plain number within the inclusive bounds
pub(crate) fn is_in_range(token: &str, min: u32, max: u32) -> bool {
    parse_number(token).is_some_and(|value| (min..=max).contains(&value))
}

/// Whether a token is an all-digit number strictly greater than zero.
///
/// Unlike [`parse_number`], the value is never materialized, so tokens
/// beyond the `u32` range still pass as long as one digit is nonzero.
pub(crate) fn is_positive_number(token: &str) -> bool {
    !token.is_empty()
        && token.bytes().all(|byte| byte.is_ascii_digit())
        && token.bytes().any(|byte| byte != b'0')
}

/// Whether a token is the wildcard `*`
pub(crate) fn is_wildcard(token: &str) -> bool {
    token == "*"
}

/// Whether a token is the blank-day marker `?`
pub(crate) fn is_blank_day(token: &str) -> bool {
    token == "?"
}
