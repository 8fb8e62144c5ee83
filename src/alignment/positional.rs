use crate::alignment::normalization::normalize;
use crate::alignment::tokenization::tokenize;
use crate::types::TokenSequence;

/// Furthest normalized-word index where transcript and reference agree at
/// the same position. Scanning continues past mismatches, so a later
/// coincidental agreement is still credited.
pub fn best_positional_match(reference: &[String], transcript: &[String]) -> Option<usize> {
    let mut best = None;
    for (i, spoken) in transcript.iter().enumerate() {
        if reference.get(i) == Some(spoken) {
            best = Some(i);
        }
    }
    best
}

/// Display-token index of the reference word the speaker has reached.
/// `None` means nothing matched and no word should be highlighted.
pub fn align(reference_text: &str, live_transcript: &str) -> Option<usize> {
    let tokens = tokenize(reference_text);
    align_tokens(&tokens, &normalize(reference_text), live_transcript).highlighted_token_index
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlignmentOutcome {
    pub matched_word_index: Option<usize>,
    pub highlighted_token_index: Option<usize>,
}

pub(crate) fn align_tokens(
    tokens: &TokenSequence,
    reference_words: &[String],
    live_transcript: &str,
) -> AlignmentOutcome {
    let spoken = normalize(live_transcript);
    let matched_word_index = best_positional_match(reference_words, &spoken);
    let highlighted_token_index = matched_word_index.and_then(|i| tokens.word_token_index(i));
    AlignmentOutcome {
        matched_word_index,
        highlighted_token_index,
    }
}

/// Read-along progress for one speaking session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AlignmentCursor {
    pub matched_word_count: usize,
    pub highlighted_token_index: Option<usize>,
}

impl AlignmentCursor {
    pub fn apply(&mut self, outcome: AlignmentOutcome) {
        self.matched_word_count = outcome.matched_word_index.map_or(0, |i| i + 1);
        self.highlighted_token_index = outcome.highlighted_token_index;
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `-1` when nothing is highlighted, matching what view layers expect.
    pub fn highlight_or_sentinel(&self) -> i64 {
        self.highlighted_token_index.map_or(-1, |i| i as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(s: &str) -> Vec<String> {
        s.split(' ').map(str::to_string).collect()
    }

    #[test]
    fn happy_path_highlights_last_spoken_word() {
        // tokens: con, _, bướm, _, bay, _, cao
        assert_eq!(align("con bướm bay cao", "con bướm bay"), Some(4));
    }

    #[test]
    fn scan_continues_past_a_mismatch() {
        let reference = words("một hai ba bốn");
        assert_eq!(
            best_positional_match(&reference, &words("một ba ba bốn")),
            Some(3)
        );
        assert_eq!(
            best_positional_match(&reference, &words("một ba")),
            Some(0)
        );
        assert_eq!(align("một hai ba bốn", "một ba ba bốn"), Some(6));
    }

    #[test]
    fn shifted_words_are_not_credited() {
        // A dropped word shifts everything after it off position.
        assert_eq!(align("một hai ba bốn", "một ba bốn"), Some(0));
    }

    #[test]
    fn empty_inputs_never_match() {
        assert_eq!(align("con bướm", ""), None);
        assert_eq!(align("", "con bướm"), None);
        assert_eq!(align("", ""), None);
    }

    #[test]
    fn transcript_longer_than_reference() {
        assert_eq!(align("con bướm", "con bướm bay cao"), Some(2));
    }

    #[test]
    fn case_and_punctuation_insensitive() {
        // The lone dash is a punctuation token and is not counted as a word.
        let reference = "Con bướm, - bay.";
        assert_eq!(align(reference, "con BƯỚM bay"), Some(6));
    }

    #[test]
    fn cursor_tracks_matched_count() {
        let tokens = tokenize("con bướm bay");
        let reference = normalize("con bướm bay");
        let mut cursor = AlignmentCursor::default();
        assert_eq!(cursor.highlight_or_sentinel(), -1);

        cursor.apply(align_tokens(&tokens, &reference, "con bướm"));
        assert_eq!(cursor.matched_word_count, 2);
        assert_eq!(cursor.highlighted_token_index, Some(2));
        assert_eq!(cursor.highlight_or_sentinel(), 2);

        cursor.apply(align_tokens(&tokens, &reference, "xin"));
        assert_eq!(cursor.matched_word_count, 0);
        assert_eq!(cursor.highlighted_token_index, None);

        cursor.apply(align_tokens(&tokens, &reference, "con"));
        cursor.reset();
        assert_eq!(cursor, AlignmentCursor::default());
    }
}
