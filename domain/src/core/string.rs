//! Helpers for quoting user input in messages.

use std::borrow::Cow;

const ELLIPSIS: &str = "...";

/// Shorten `s` to at most `max_len` bytes for use inside an error message.
///
/// The cut lands on a character boundary and is marked with `...`; input
/// that already fits is borrowed as is.
pub fn clip(s: &str, max_len: usize) -> Cow<'_, str> {
    if s.len() <= max_len {
        return Cow::Borrowed(s);
    }

    let budget = max_len.saturating_sub(ELLIPSIS.len());
    let end = s
        .char_indices()
        .map(|(start, c)| start + c.len_utf8())
        .take_while(|&end| end <= budget)
        .last()
        .unwrap_or(0);
    Cow::Owned(format!("{}{}", &s[..end], ELLIPSIS))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_input_is_borrowed() {
        assert!(matches!(clip("rotor", 10), Cow::Borrowed("rotor")));
    }

    #[test]
    fn test_clip_ascii() {
        assert_eq!(clip("rotor thrust", 8), "rotor...");
        assert_eq!(clip("rotor thrust", 2), "...");
    }

    #[test]
    fn test_clip_multibyte() {
        // '旋' and '翼' are 3 bytes each
        assert_eq!(clip("旋翼", 10), "旋翼");
        assert_eq!(clip("旋翼旋翼", 9), "旋翼...");
        assert_eq!(clip("旋翼旋翼", 8), "旋...");
    }
}
