//! Text normalization shared by keyword matching.

/// Characters kept verbatim besides lowercase letters and digits. They carry meaning in
/// technical vocabulary (`c++`, `c#`, `.net`, `node.js`).
const KEPT_SYMBOLS: &[char] = &['+', '.', '#', ' '];

/// Lower-cases `text` and replaces every character that is not a lowercase letter, digit,
/// `+`, `.`, `#` or space with a single space.
///
/// Runs of separators are not collapsed: each replaced character becomes exactly one space.
pub fn normalize(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase() || c.is_ascii_digit() || KEPT_SYMBOLS.contains(&c) {
                c
            } else {
                ' '
            }
        })
        .collect()
}
