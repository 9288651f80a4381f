//! Length-capped truncation with an ellipsis marker.

use std::borrow::Cow;

/// Cap `text` at `max_len` characters.
///
/// Text that already fits is returned untouched. Longer text keeps its
/// first `max_len - marker` characters followed by `ellipsis`, so the
/// result is exactly `max_len` characters long. When the cap is not wider
/// than the marker there is no room for both, and the text is cut hard at
/// `max_len` characters with no marker.
///
/// Lengths are counted in `char`s; a character is never split.
pub fn abbreviate<'a>(text: &'a str, max_len: usize, ellipsis: &str) -> Cow<'a, str> {
    let len = text.chars().count();
    if len <= max_len {
        return Cow::Borrowed(text);
    }

    let marker = ellipsis.chars().count();
    if max_len <= marker {
        return Cow::Borrowed(char_prefix(text, max_len));
    }

    let mut out = String::with_capacity(max_len + ellipsis.len());
    out.push_str(char_prefix(text, max_len - marker));
    out.push_str(ellipsis);
    Cow::Owned(out)
}

fn char_prefix(text: &str, chars: usize) -> &str {
    match text.char_indices().nth(chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
