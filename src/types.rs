use serde::{Deserialize, Serialize};

/// One sentence-level line of a passage, trailing punctuation included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Line {
    pub index: usize,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenKind {
    Whitespace,
    /// Normalizes to exactly one comparison word.
    Word,
    /// Non-whitespace fragment that normalizes to nothing, e.g. a lone dash.
    Punctuation,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub index: usize,
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }
}

/// Lossless display tokenization of a passage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TokenSequence {
    pub tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    /// Display index of the `word_index`-th word token.
    pub fn word_token_index(&self, word_index: usize) -> Option<usize> {
        self.tokens
            .iter()
            .filter(|t| t.is_word())
            .nth(word_index)
            .map(|t| t.index)
    }

    pub fn word_count(&self) -> usize {
        self.tokens.iter().filter(|t| t.is_word()).count()
    }

    pub fn rejoin(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordScore {
    pub word: String,
    pub pronunciation_score: f32,
}

/// What the external scoring collaborator returns at the end of a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoringReport {
    #[serde(default)]
    pub accuracy: Option<f32>,
    #[serde(default)]
    pub word_scores: Vec<WordScore>,
}

/// Display-token indices tagged after scoring.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ReviewMarks {
    pub correct: Vec<usize>,
    pub incorrect: Vec<usize>,
    pub accuracy: Option<f32>,
    pub passed: Option<bool>,
}

impl ReviewMarks {
    pub fn is_incorrect(&self, token_index: usize) -> bool {
        self.incorrect.contains(&token_index)
    }
}
