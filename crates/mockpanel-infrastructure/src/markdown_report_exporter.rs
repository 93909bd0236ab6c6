//! Markdown rendering of interview reports.

use mockpanel_core::error::{PanelError, Result};
use mockpanel_core::report::{InterviewReport, MAX_SCORE, ReportExporter};
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Writes `<slug>-<date>.md` into the destination directory.
#[derive(Debug, Default, Clone)]
pub struct MarkdownReportExporter;

impl MarkdownReportExporter {
    pub fn new() -> Self {
        Self
    }

    /// Renders the document body.
    pub fn render(&self, report: &InterviewReport) -> String {
        let mut out = String::new();
        // Writing to a String cannot fail.
        let _ = writeln!(out, "# {}", report.title);
        let _ = writeln!(out);
        let _ = writeln!(out, "- **Date:** {}", report.date.format("%Y-%m-%d"));
        let _ = writeln!(out, "- **Type:** {}", report.kind);
        let _ = writeln!(out, "- **Score:** {}/{}", report.score, MAX_SCORE);
        render_section(&mut out, "Strengths", &report.strengths);
        render_section(&mut out, "Areas for Improvement", &report.improvements);
        out
    }
}

fn render_section(out: &mut String, heading: &str, items: &[String]) {
    let _ = writeln!(out);
    let _ = writeln!(out, "## {}", heading);
    let _ = writeln!(out);
    if items.is_empty() {
        let _ = writeln!(out, "_None recorded._");
    }
    for item in items {
        let _ = writeln!(out, "- {}", item);
    }
}

impl ReportExporter for MarkdownReportExporter {
    fn export(&self, report: &InterviewReport, destination: &Path) -> Result<PathBuf> {
        report.validate()?;

        fs::create_dir_all(destination).map_err(|e| {
            PanelError::export(format!("Failed to create {:?}: {}", destination, e))
        })?;

        let path = destination.join(format!("{}.md", report.file_stem()));
        fs::write(&path, self.render(report))
            .map_err(|e| PanelError::export(format!("Failed to write {:?}: {}", path, e)))?;

        info!(path = %path.display(), "Exported interview report");
        Ok(path)
    }
}
