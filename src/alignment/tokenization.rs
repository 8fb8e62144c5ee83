use crate::alignment::normalization::normalize_word;
use crate::types::{Token, TokenKind, TokenSequence};

/// Splits on whitespace runs while keeping each run as its own token, so the
/// sequence rejoins to the input byte for byte.
pub fn tokenize(text: &str) -> TokenSequence {
    let mut tokens = Vec::new();
    let mut start = 0usize;
    let mut in_space: Option<bool> = None;

    for (offset, c) in text.char_indices() {
        let space = c.is_whitespace();
        match in_space {
            Some(prev) if prev != space => {
                push_token(&mut tokens, &text[start..offset], prev);
                start = offset;
            }
            _ => {}
        }
        in_space = Some(space);
    }
    if let Some(space) = in_space {
        push_token(&mut tokens, &text[start..], space);
    }

    debug_assert_eq!(
        tokens.iter().map(|t| t.text.as_str()).collect::<String>(),
        text,
        "tokenization must be lossless"
    );

    TokenSequence { tokens }
}

fn push_token(tokens: &mut Vec<Token>, fragment: &str, whitespace: bool) {
    let kind = if whitespace {
        TokenKind::Whitespace
    } else if normalize_word(fragment).is_empty() {
        TokenKind::Punctuation
    } else {
        TokenKind::Word
    };
    tokens.push(Token {
        index: tokens.len(),
        text: fragment.to_string(),
        kind,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(seq: &TokenSequence) -> Vec<&str> {
        seq.tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn empty_text_has_no_tokens() {
        assert!(tokenize("").is_empty());
    }

    #[test]
    fn keeps_whitespace_runs() {
        let seq = tokenize("con  bướm\tbay");
        assert_eq!(texts(&seq), ["con", "  ", "bướm", "\t", "bay"]);
        assert_eq!(seq.tokens[1].kind, TokenKind::Whitespace);
        assert_eq!(seq.word_count(), 3);
    }

    #[test]
    fn leading_and_trailing_whitespace_are_tokens() {
        let seq = tokenize(" a ");
        assert_eq!(texts(&seq), [" ", "a", " "]);
        assert_eq!(seq.tokens[1].index, 1);
    }

    #[test]
    fn punctuation_stays_attached() {
        let seq = tokenize("sắc. Đôi -");
        assert_eq!(texts(&seq), ["sắc.", " ", "Đôi", " ", "-"]);
        assert_eq!(seq.tokens[0].kind, TokenKind::Word);
        assert_eq!(seq.tokens[4].kind, TokenKind::Punctuation);
        assert_eq!(seq.word_count(), 2);
    }

    #[test]
    fn word_token_index_skips_whitespace_and_punctuation() {
        let seq = tokenize("một -- hai ba");
        assert_eq!(seq.word_token_index(0), Some(0));
        assert_eq!(seq.word_token_index(1), Some(4));
        assert_eq!(seq.word_token_index(2), Some(6));
        assert_eq!(seq.word_token_index(3), None);
    }

    #[test]
    fn rejoin_is_lossless() {
        let text = "  Con bướm đáp nhẹ nhàng.\nĐôi cánh…  ";
        assert_eq!(tokenize(text).rejoin(), text);
    }
}
