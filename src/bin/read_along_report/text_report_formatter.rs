use std::fmt::Write;

use readalong_rs::{ReadingSession, Report};

pub fn render(report: &Report, focus: Option<&ReadingSession>) -> String {
    let mut out = String::new();
    let meta = &report.meta;
    let _ = writeln!(
        out,
        "passage: {} ({} lines, {} words)",
        meta.passage_path, meta.line_count, meta.word_count
    );

    for line in &report.lines {
        let opacity = focus.map_or(1.0, |session| session.opacity(line.index));
        let _ = writeln!(
            out,
            "  [{:>3}] {:>4.2} {}",
            line.index,
            opacity,
            line.text.trim()
        );
    }

    if report.snapshots.is_empty() {
        return out;
    }
    out.push('\n');
    for snapshot in &report.snapshots {
        let highlight = match (&snapshot.highlighted_token, snapshot.highlighted_token_index) {
            (Some(token), Some(index)) => format!("#{index} {token}"),
            _ => "-".to_string(),
        };
        let _ = writeln!(
            out,
            "  snapshot {:>3}: matched {:>3}/{} highlight {}",
            snapshot.position, snapshot.matched_word_count, meta.word_count, highlight
        );
    }

    let summary = &report.summary;
    let _ = writeln!(
        out,
        "\ncoverage {:.1}% regressions {}",
        summary.coverage_ratio * 100.0,
        summary.regressions
    );
    for note in &summary.notes {
        let _ = writeln!(out, "  note: {note}");
    }
    out
}
