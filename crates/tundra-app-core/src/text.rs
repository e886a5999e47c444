// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! String helpers for asset paths and labels.

/// Replaces occurrences of `find` with `replace`, working from the back.
///
/// After each replacement the scan resumes strictly left of where the last
/// match started, so text produced by a replacement together with what
/// precedes it is replaced too (`"aaab"`, `"ab"` → `"b"` gives `"b"`), while
/// the match start keeps moving left and the call ends after at most one
/// replacement per starting position. An empty `find` is a no-op.
pub fn replace_all(source: &mut String, find: &str, replace: &str) {
    if find.is_empty() {
        return;
    }
    let mut next = source.rfind(find);
    while let Some(at) = next {
        source.replace_range(at..at + find.len(), replace);
        next = (0..at)
            .rev()
            .find(|&i| source.is_char_boundary(i) && source[i..].starts_with(find));
    }
}

/// Piece of `original` after the last `separator`.
///
/// Returns the whole string when the separator is empty or absent.
pub fn last_segment<'a>(original: &'a str, separator: &str) -> &'a str {
    if separator.is_empty() {
        return original;
    }
    original
        .rfind(separator)
        .map_or(original, |at| &original[at + separator.len()..])
}

/// Text after the last `.`; the file extension for asset paths.
pub fn extension(path: &str) -> &str {
    last_segment(path, ".")
}
