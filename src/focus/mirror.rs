use std::ops::Range;

/// Letters that readers with dyslexia commonly flip or rotate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MirrorGroup {
    /// `m`, `n`, `u`
    Arch,
    /// `b`, `d`, `p`, `q`
    Stem,
}

pub fn mirror_group(c: char) -> Option<MirrorGroup> {
    match c.to_ascii_lowercase() {
        'm' | 'n' | 'u' => Some(MirrorGroup::Arch),
        'b' | 'd' | 'p' | 'q' => Some(MirrorGroup::Stem),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MirrorSpan {
    /// Byte range of the letter within the marked text.
    pub range: Range<usize>,
    pub group: MirrorGroup,
}

/// Marks every confusable letter. Accented forms such as `ư` or `đ` are
/// distinct letters and are left unmarked.
pub fn mark_mirror_letters(text: &str) -> Vec<MirrorSpan> {
    text.char_indices()
        .filter_map(|(offset, c)| {
            mirror_group(c).map(|group| MirrorSpan {
                range: offset..offset + c.len_utf8(),
                group,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_are_case_insensitive() {
        assert_eq!(mirror_group('N'), Some(MirrorGroup::Arch));
        assert_eq!(mirror_group('Q'), Some(MirrorGroup::Stem));
        assert_eq!(mirror_group('a'), None);
    }

    #[test]
    fn marks_byte_ranges_in_vietnamese_text() {
        let text = "bướm đẹp";
        let spans = mark_mirror_letters(text);
        let marked: Vec<(&str, MirrorGroup)> = spans
            .iter()
            .map(|s| (&text[s.range.clone()], s.group))
            .collect();
        assert_eq!(
            marked,
            [
                ("b", MirrorGroup::Stem),
                ("m", MirrorGroup::Arch),
                ("p", MirrorGroup::Stem),
            ]
        );
    }

    #[test]
    fn accented_letters_are_not_marked() {
        assert!(mark_mirror_letters("ưđ").is_empty());
    }
}
