use crate::types::{ReviewMarks, ScoringReport, TokenSequence};

/// Pairs per-word scores with the passage's non-whitespace tokens in order.
/// Surplus scores or tokens are left unmarked.
pub fn classify_word_scores(
    tokens: &TokenSequence,
    report: &ScoringReport,
    word_score_threshold: f32,
    pass_accuracy: f32,
) -> ReviewMarks {
    let mut marks = ReviewMarks {
        accuracy: report.accuracy,
        passed: report.accuracy.map(|a| a >= pass_accuracy),
        ..ReviewMarks::default()
    };

    let scorable: Vec<usize> = tokens
        .tokens
        .iter()
        .filter(|t| !t.text.trim().is_empty())
        .map(|t| t.index)
        .collect();
    if scorable.len() != report.word_scores.len() {
        tracing::debug!(
            tokens = scorable.len(),
            scores = report.word_scores.len(),
            "scorer word count differs from passage; surplus entries ignored"
        );
    }

    for (&token_index, score) in scorable.iter().zip(&report.word_scores) {
        if score.pronunciation_score < word_score_threshold {
            marks.incorrect.push(token_index);
        } else {
            marks.correct.push(token_index);
        }
    }
    marks
}

#[cfg(test)]
mod tests {
    use crate::alignment::tokenization::tokenize;
    use crate::types::WordScore;

    use super::*;

    fn score(word: &str, value: f32) -> WordScore {
        WordScore {
            word: word.to_string(),
            pronunciation_score: value,
        }
    }

    #[test]
    fn splits_scores_at_threshold() {
        let tokens = tokenize("con bướm bay");
        let report = ScoringReport {
            accuracy: Some(66.0),
            word_scores: vec![score("con", 95.0), score("bướm", 40.0), score("bay", 80.0)],
        };
        let marks = classify_word_scores(&tokens, &report, 80.0, 80.0);
        assert_eq!(marks.correct, [0, 4]);
        assert_eq!(marks.incorrect, [2]);
        assert_eq!(marks.passed, Some(false));
        assert!(marks.is_incorrect(2));
    }

    #[test]
    fn punctuation_tokens_consume_scores() {
        // Non-whitespace tokens are paired positionally, dash included.
        let tokens = tokenize("một - hai");
        let report = ScoringReport {
            accuracy: None,
            word_scores: vec![score("một", 90.0), score("hai", 10.0)],
        };
        let marks = classify_word_scores(&tokens, &report, 80.0, 80.0);
        assert_eq!(marks.correct, [0]);
        assert_eq!(marks.incorrect, [2]);
        assert_eq!(marks.passed, None);
    }

    #[test]
    fn short_score_list_leaves_tail_unmarked() {
        let tokens = tokenize("một hai ba");
        let report = ScoringReport {
            accuracy: Some(100.0),
            word_scores: vec![score("một", 99.0)],
        };
        let marks = classify_word_scores(&tokens, &report, 80.0, 80.0);
        assert_eq!(marks.correct, [0]);
        assert!(marks.incorrect.is_empty());
        assert_eq!(marks.passed, Some(true));
    }
}
