//! Stream-extraction style token helpers shared by the date and input readers.

/// Drop leading ASCII whitespace. Other Unicode spaces are left in place.
pub(crate) fn skip_ascii_ws(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_ascii_whitespace())
}

/// Split an optionally signed run of ASCII digits off the front of `text`.
///
/// Returns the integer text and the remainder, or `None` if `text` does not
/// start with a digit (after an optional sign). No whitespace is skipped.
pub(crate) fn split_int(text: &str) -> Option<(&str, &str)> {
    let bytes = text.as_bytes();
    let sign_len = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    let digits = bytes[sign_len..]
        .iter()
        .take_while(|b| b.is_ascii_digit())
        .count();
    if digits == 0 {
        return None;
    }
    Some(text.split_at(sign_len + digits))
}
