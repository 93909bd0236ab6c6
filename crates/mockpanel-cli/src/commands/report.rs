use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;
use mockpanel_core::report::{InterviewReport, ReportExporter};
use mockpanel_infrastructure::MarkdownReportExporter;

use super::translator;

pub fn run(input: &Path, out: &Path) -> Result<()> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read report file {:?}", input))?;
    let report: InterviewReport = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse report file {:?}", input))?;

    let path = MarkdownReportExporter::new().export(&report, out)?;

    let t = translator(None);
    let path = path.display().to_string();
    println!("{}", t.t("report.exported", &[("path", &path)]).bright_green());
    Ok(())
}
