use serde::Serialize;

use crate::alignment::normalization::normalize;
use crate::alignment::positional::{align_tokens, AlignmentCursor};
use crate::alignment::tokenization::tokenize;
use crate::focus::segmentation::segment;
use crate::types::{Line, TokenSequence};

const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub schema_version: u32,
    pub meta: Meta,
    pub lines: Vec<Line>,
    pub snapshots: Vec<SnapshotReport>,
    pub summary: ProgressSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct Meta {
    pub generated_at: String,
    pub passage_path: String,
    pub line_count: usize,
    pub token_count: usize,
    pub word_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SnapshotReport {
    pub position: usize,
    pub transcript: String,
    pub spoken_word_count: usize,
    pub matched_word_count: usize,
    pub highlighted_token_index: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlighted_token: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ProgressSummary {
    pub snapshot_count: usize,
    pub final_matched_word_count: usize,
    /// Share of reference words credited by the last snapshot.
    pub coverage_ratio: f32,
    /// Snapshots whose matched count went down relative to the previous one.
    pub regressions: usize,
    pub notes: Vec<String>,
}

/// Replays cumulative transcript snapshots against a passage in delivery order.
pub fn compute_snapshot_reports(tokens: &TokenSequence, snapshots: &[String]) -> Vec<SnapshotReport> {
    let reference_words = normalize(&tokens.rejoin());
    let mut cursor = AlignmentCursor::default();

    snapshots
        .iter()
        .enumerate()
        .map(|(position, transcript)| {
            cursor.apply(align_tokens(tokens, &reference_words, transcript));
            SnapshotReport {
                position,
                transcript: transcript.clone(),
                spoken_word_count: normalize(transcript).len(),
                matched_word_count: cursor.matched_word_count,
                highlighted_token_index: cursor.highlighted_token_index,
                highlighted_token: cursor
                    .highlighted_token_index
                    .and_then(|i| tokens.get(i))
                    .map(|t| t.text.clone()),
            }
        })
        .collect()
}

pub fn summarize(tokens: &TokenSequence, snapshots: &[SnapshotReport]) -> ProgressSummary {
    let mut notes = Vec::new();
    let word_count = tokens.word_count();
    let final_matched_word_count = snapshots.last().map_or(0, |s| s.matched_word_count);

    let regressions = snapshots
        .windows(2)
        .filter(|pair| pair[1].matched_word_count < pair[0].matched_word_count)
        .count();

    if snapshots.is_empty() {
        notes.push("no_snapshots".to_string());
    }
    if word_count == 0 {
        notes.push("empty_passage".to_string());
    }
    if regressions > 0 {
        notes.push(format!("highlight_regressions={regressions}"));
    }
    let overrun = snapshots
        .iter()
        .filter(|s| s.spoken_word_count > word_count)
        .count();
    if overrun > 0 {
        notes.push(format!("transcript_longer_than_passage={overrun}"));
    }

    let coverage_ratio = if word_count == 0 {
        0.0
    } else {
        final_matched_word_count as f32 / word_count as f32
    };

    ProgressSummary {
        snapshot_count: snapshots.len(),
        final_matched_word_count,
        coverage_ratio,
        regressions,
        notes,
    }
}

pub fn build_report(
    passage_path: &str,
    passage: &str,
    snapshots: &[String],
    generated_at: String,
) -> Report {
    let lines = segment(passage);
    let tokens = tokenize(passage);
    let snapshot_reports = compute_snapshot_reports(&tokens, snapshots);
    let summary = summarize(&tokens, &snapshot_reports);

    Report {
        schema_version: SCHEMA_VERSION,
        meta: Meta {
            generated_at,
            passage_path: passage_path.to_string(),
            line_count: lines.len(),
            token_count: tokens.len(),
            word_count: tokens.word_count(),
        },
        lines,
        snapshots: snapshot_reports,
        summary,
    }
}
