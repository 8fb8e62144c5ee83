/// Characters stripped before comparing spoken and reference words.
pub const STRIPPED_PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`',
    '~', '(', ')',
];

pub fn is_stripped(c: char) -> bool {
    STRIPPED_PUNCTUATION.contains(&c)
}

/// Lower-cased, punctuation-free form of a single fragment. Empty when the
/// fragment holds nothing but stripped punctuation.
pub fn normalize_word(fragment: &str) -> String {
    fragment
        .chars()
        .filter(|&c| !is_stripped(c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Comparison words for a passage or transcript. Never rendered.
pub fn normalize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(normalize_word)
        .filter(|w| !w.is_empty())
        .collect()
}

/// Single-space join of [`normalize`], stable under re-normalization.
pub fn normalize_to_string(text: &str) -> String {
    normalize(text).join(" ")
}
