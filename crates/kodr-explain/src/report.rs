//! Plain-text explanation reports.
//!
//! A report is a header naming the language, a `=` rule, one three-line block per annotation and
//! a footer with the generation time and the product attribution. Given the same annotations and
//! [`ReportStamp`] the output is byte-for-byte identical.

use crate::classify::Annotation;
use kodr_lang::Language;
use std::time::{SystemTime, UNIX_EPOCH};

/// Width of the `=` rule under the header.
pub const RULE_WIDTH: usize = 50;

/// Last line of every report.
pub const ATTRIBUTION: &str = "Powered by Kodr AI";

/// Report export failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExportError {
    /// The annotation list is empty.
    #[error("No explanations to download!")]
    NothingToExport,
}

/// When a report was generated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportStamp {
    label: String,
    unix_millis: u128,
}

impl ReportStamp {
    /// A stamp with an explicit display label.
    pub fn new(label: impl Into<String>, unix_millis: u128) -> Self {
        Self {
            label: label.into(),
            unix_millis,
        }
    }

    /// A stamp for `time`, labelled `YYYY-MM-DD HH:MM:SS UTC`.
    ///
    /// Times before the Unix epoch are treated as the epoch.
    pub fn from_system_time(time: SystemTime) -> Self {
        let since_epoch = time.duration_since(UNIX_EPOCH).unwrap_or_default();
        let secs = since_epoch.as_secs();
        let (year, month, day) = civil_from_days(secs / 86_400);
        let rem = secs % 86_400;
        let label = format!(
            "{year:04}-{month:02}-{day:02} {:02}:{:02}:{:02} UTC",
            rem / 3_600,
            rem % 3_600 / 60,
            rem % 60
        );
        Self::new(label, since_epoch.as_millis())
    }

    /// A stamp for the current time.
    pub fn now() -> Self {
        Self::from_system_time(SystemTime::now())
    }

    /// Display label used in the `Generated on:` line.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Milliseconds since the Unix epoch.
    pub fn unix_millis(&self) -> u128 {
        self.unix_millis
    }

    /// Download file name for a report generated at this stamp.
    pub fn file_name(&self) -> String {
        format!("kodr-explanation-{}.txt", self.unix_millis)
    }
}

/// Render the text report for `annotations` of `language` source.
///
/// Fails with [`ExportError::NothingToExport`] when there is nothing to report.
pub fn render_report(
    language: Language,
    annotations: &[Annotation],
    stamp: &ReportStamp,
) -> Result<String, ExportError> {
    if annotations.is_empty() {
        return Err(ExportError::NothingToExport);
    }

    let mut lines = Vec::with_capacity(annotations.len() + 6);
    lines.push(format!(
        "Code Explanation - {}",
        language.id().to_uppercase()
    ));
    lines.push("=".repeat(RULE_WIDTH));
    lines.push(String::new());
    // Each block carries its own trailing newline, which leaves a blank line between blocks.
    lines.extend(annotations.iter().map(|annotation| {
        format!(
            "Line {}: {}\nCode: {}\nType: {} | Difficulty: {}\n",
            annotation.line_number,
            annotation.explanation(),
            annotation.code,
            annotation.category,
            annotation.difficulty()
        )
    }));
    lines.push(String::new());
    lines.push(format!("Generated on: {}", stamp.label()));
    lines.push(ATTRIBUTION.to_string());

    Ok(lines.join("\n"))
}

/// Days since 1970-01-01 to a proleptic Gregorian `(year, month, day)`.
fn civil_from_days(days: u64) -> (u64, u64, u64) {
    let z = days + 719_468;
    let era = z / 146_097;
    let doe = z % 146_097;
    let yoe = (doe - doe / 1_460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let day = doy - (153 * mp + 2) / 5 + 1;
    let month = if mp < 10 { mp + 3 } else { mp - 9 };
    let year = yoe + era * 400 + u64::from(month <= 2);
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_stamp_formatting() {
        let stamp = ReportStamp::from_system_time(UNIX_EPOCH);
        assert_eq!(stamp.label(), "1970-01-01 00:00:00 UTC");
        assert_eq!(stamp.file_name(), "kodr-explanation-0.txt");

        let stamp =
            ReportStamp::from_system_time(UNIX_EPOCH + Duration::from_millis(1_700_000_000_123));
        assert_eq!(stamp.label(), "2023-11-14 22:13:20 UTC");
        assert_eq!(stamp.unix_millis(), 1_700_000_000_123);
    }

    #[test]
    fn test_civil_from_days_leap_years() {
        assert_eq!(civil_from_days(0), (1970, 1, 1));
        // 2000-02-29
        assert_eq!(civil_from_days(11_016), (2000, 2, 29));
        // 2024-12-31
        assert_eq!(civil_from_days(20_088), (2024, 12, 31));
    }

    #[test]
    fn test_empty_report_is_rejected() {
        let stamp = ReportStamp::new("now", 1);
        assert_eq!(
            render_report(Language::Python, &[], &stamp),
            Err(ExportError::NothingToExport)
        );
        assert_eq!(
            ExportError::NothingToExport.to_string(),
            "No explanations to download!"
        );
    }
}
