use crate::types::Line;

pub const SENTENCE_DELIMITERS: [char; 3] = ['.', '!', '?'];

fn is_delimiter(c: char) -> bool {
    SENTENCE_DELIMITERS.contains(&c)
}

/// Splits a passage into sentence lines. A line ends after a run of `.`, `!`
/// or `?` that follows other text; the run stays attached to the line.
///
/// Every input character lands in exactly one line: delimiters leading the
/// passage stay on the first line, an unterminated tail becomes the last
/// line, and a whitespace-only tail is folded into the line before it.
pub fn segment(reference_text: &str) -> Vec<Line> {
    let mut texts: Vec<&str> = Vec::new();
    let mut start = 0usize;
    let mut seen_content = false;
    let mut in_delimiters = false;

    for (offset, c) in reference_text.char_indices() {
        if is_delimiter(c) {
            if seen_content {
                in_delimiters = true;
            }
            continue;
        }
        if in_delimiters {
            texts.push(&reference_text[start..offset]);
            start = offset;
            in_delimiters = false;
        }
        seen_content = true;
    }

    let tail = &reference_text[start..];
    let mut lines: Vec<String> = texts.into_iter().map(str::to_string).collect();
    match lines.last_mut() {
        Some(last) if !in_delimiters && !tail.is_empty() && tail.trim().is_empty() => {
            last.push_str(tail);
        }
        Some(_) if tail.is_empty() => {}
        _ => lines.push(tail.to_string()),
    }

    lines
        .into_iter()
        .enumerate()
        .map(|(index, text)| Line { index, text })
        .collect()
}
