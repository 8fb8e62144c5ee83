use std::fs;
use std::path::Path;

use readalong_rs::Report;

pub fn render(report: &Report) -> Result<String, String> {
    serde_json::to_string_pretty(report)
        .map_err(|err| format!("Failed to serialize report JSON: {err}"))
}

/// Writes the rendered report plus a trailing newline, creating missing
/// parent directories.
pub fn write_report(path: &Path, report: &Report) -> Result<(), String> {
    let mut rendered = render(report)?;
    rendered.push('\n');

    if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|err| format!("Failed to create '{}': {err}", dir.display()))?;
    }
    fs::write(path, rendered)
        .map_err(|err| format!("Failed to write report '{}': {err}", path.display()))
}

#[cfg(test)]
mod tests {
    use readalong_rs::build_report;

    use super::*;

    #[test]
    fn written_report_matches_render_and_creates_dirs() {
        let report = build_report(
            "story.txt",
            "Con bướm bay. Nó đẹp quá!",
            &["con bướm".to_string()],
            "2026-01-01T00:00:00Z".to_string(),
        );
        let dir = std::env::temp_dir().join("readalong_rs_json_report");
        let _ = fs::remove_dir_all(&dir);
        let path = dir.join("nested").join("report.json");

        write_report(&path, &report).expect("write report");
        let written = fs::read_to_string(&path).expect("read report");
        assert_eq!(written, format!("{}\n", render(&report).expect("render")));
        let _ = fs::remove_dir_all(&dir);
    }
}
