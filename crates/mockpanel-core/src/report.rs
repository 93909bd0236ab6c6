//! Interview report model and exporter interface.

use crate::error::{PanelError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Highest score a report may carry.
pub const MAX_SCORE: u8 = 100;

/// Feedback summary for one practice interview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InterviewReport {
    pub title: String,
    pub date: NaiveDate,
    /// Overall score out of 100
    pub score: u8,
    /// Interview type, e.g. "Panel" or "Technical"
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub improvements: Vec<String>,
}

impl InterviewReport {
    /// Builds a report, rejecting an empty title or an out-of-range score.
    pub fn new(
        title: impl Into<String>,
        date: NaiveDate,
        score: u8,
        kind: impl Into<String>,
        strengths: Vec<String>,
        improvements: Vec<String>,
    ) -> Result<Self> {
        let report = Self {
            title: title.into(),
            date,
            score,
            kind: kind.into(),
            strengths,
            improvements,
        };
        report.validate()?;
        Ok(report)
    }

    /// Re-checks the construction rules, e.g. after deserializing.
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(PanelError::validation("report title must not be empty"));
        }
        if self.score > MAX_SCORE {
            return Err(PanelError::validation(format!(
                "report score {} exceeds {}",
                self.score, MAX_SCORE
            )));
        }
        Ok(())
    }

    /// File-name stem: lowercase title slug plus the ISO date.
    pub fn file_stem(&self) -> String {
        let mut slug = String::new();
        for c in self.title.chars() {
            if c.is_alphanumeric() {
                slug.extend(c.to_lowercase());
            } else if !slug.ends_with('-') && !slug.is_empty() {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        format!("{}-{}", slug, self.date.format("%Y-%m-%d"))
    }
}

/// Renders a report into a downloadable document.
pub trait ReportExporter: Send + Sync {
    /// Writes the document into the `destination` directory and returns the
    /// path of the written file.
    fn export(&self, report: &InterviewReport, destination: &Path) -> Result<PathBuf>;
}
