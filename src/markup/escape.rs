//! Escaping untrusted text for inclusion in HTML

use std::borrow::Cow;
use std::ops::Range;

fn entity(c: char) -> Option<&'static str> {
    match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Replace the five HTML-significant characters with entity references in
/// a single pass. Running this twice encodes the `&` of every entity again,
/// so it must happen exactly once, before any markup is introduced.
pub fn escape(raw: &str) -> Cow<'_, str> {
    if !raw.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(raw);
    }

    let mut result = String::with_capacity(raw.len() + 16);
    for c in raw.chars() {
        match entity(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Escape a fragment of text that may already have been through
/// [`escape`]. Ampersands that open a well-formed entity reference are
/// kept, everything else is escaped as usual.
pub fn escape_fragment(text: &str) -> Cow<'_, str> {
    if !text.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(text);
    }

    let re = regex!(r"^&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);");

    let mut result = String::with_capacity(text.len() + 16);
    for (i, c) in text.char_indices() {
        if c == '&' && re.is_match(&text[i..]) {
            result.push(c);
            continue;
        }
        match entity(c) {
            Some(replacement) => result.push_str(replacement),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

/// Byte ranges of the entity references (`&amp;`, `&#39;`, `&#x27;`, ...)
/// present in a piece of escaped text.
pub fn entity_ranges(text: &str) -> Vec<Range<usize>> {
    let re = regex!(r"&(?:[A-Za-z][A-Za-z0-9]*|#[0-9]+|#[xX][0-9A-Fa-f]+);");

    re.find_iter(text)
        .map(|m| m.range())
        .collect()
}
