// src/gui/view_model.rs
//! CoverageView: every string the Coverage tab shows, in one value.
//!
//! The page only renders it; actions swap it out wholesale on each
//! transition (initial → checking → result / failed, and back on Clear).
//! Nothing here touches egui state except the severity color lookup.

use eframe::egui::Color32;

use crate::{
    core::NormalizedUrl,
    inspect::{InspectionResult, Severity},
    report,
};

pub const STATUS_READY: &str = "Ready to inspect URLs";
pub const STATUS_COMPLETE: &str = "Inspection complete";
pub const STATUS_FAILED: &str = "Inspection failed";

pub const CHECKING: &str = "Checking...";
const NOT_CHECKED_YET: &str = "Not checked yet";
const NOT_CHECKED: &str = "Not checked";
const NOT_AVAILABLE: &str = "Not available";
const ERROR: &str = "Error";
const RESULTS_PLACEHOLDER: &str = "Inspection results will appear here";

pub fn status_checking(url: &NormalizedUrl) -> String {
    format!("Checking: {url}")
}

pub fn severity_color(s: Severity) -> Color32 {
    match s {
        Severity::Success => Color32::from_rgb(0x1e, 0x8e, 0x3e),
        Severity::Warning => Color32::from_rgb(0xf2, 0x99, 0x00),
        Severity::Error => Color32::from_rgb(0xd9, 0x30, 0x25),
    }
}

/// How a run of troubleshooting text is styled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextRole {
    Plain,
    Header,
    Label,
    Status(Severity),
    Footer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Segment {
    pub role: TextRole,
    pub text: String,
}

impl Segment {
    fn new(role: TextRole, text: impl Into<String>) -> Self {
        Self { role, text: text.into() }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DetailRow {
    pub section: &'static str,
    pub field: &'static str,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CoverageView {
    pub indexing_status: String,
    pub severity: Option<Severity>,
    pub crawl_date: String,
    pub rendered: String,
    pub robots: String,
    pub canonical: String,
    pub indexing_allowed: String,
    pub noindex: String,
    pub troubleshooting: Vec<Segment>,
    /// Plain-text report for "Copy report"; only set once a result is in.
    pub report: Option<String>,
}

impl Default for CoverageView {
    fn default() -> Self {
        Self::initial()
    }
}

impl CoverageView {
    pub fn initial() -> Self {
        Self {
            indexing_status: s!(NOT_CHECKED_YET),
            severity: None,
            crawl_date: s!(NOT_AVAILABLE),
            rendered: s!(NOT_AVAILABLE),
            robots: s!(NOT_CHECKED),
            canonical: s!(NOT_CHECKED),
            indexing_allowed: s!(NOT_CHECKED),
            noindex: s!(NOT_CHECKED),
            troubleshooting: vec![Segment::new(TextRole::Plain, RESULTS_PLACEHOLDER)],
            report: None,
        }
    }

    pub fn checking(url: &str) -> Self {
        Self {
            indexing_status: s!(CHECKING),
            severity: None,
            crawl_date: s!(CHECKING),
            rendered: s!(CHECKING),
            robots: s!(CHECKING),
            canonical: s!(CHECKING),
            indexing_allowed: s!(CHECKING),
            noindex: s!(CHECKING),
            troubleshooting: vec![Segment::new(
                TextRole::Plain,
                format!("Running inspection for: {url}\n\nPlease wait..."),
            )],
            report: None,
        }
    }

    pub fn from_result(url: &NormalizedUrl, r: &InspectionResult) -> Self {
        Self {
            indexing_status: r.indexing_status.clone(),
            severity: Some(r.severity),
            crawl_date: r.crawl_date.to_string(),
            rendered: r.rendered.clone(),
            robots: r.robots.clone(),
            canonical: r.canonical.clone(),
            indexing_allowed: r.indexing_allowed.to_string(),
            noindex: r.noindex.to_string(),
            troubleshooting: vec![
                Segment::new(TextRole::Header, format!("Inspection results for: {url}\n\n")),
                Segment::new(TextRole::Label, "Indexing status: "),
                Segment::new(
                    TextRole::Status(r.severity),
                    format!("{}\n\n", r.indexing_status),
                ),
                Segment::new(TextRole::Plain, r.troubleshooting.as_str()),
                Segment::new(TextRole::Footer, join!("\n\n", report::SIMULATED_NOTE)),
            ],
            report: Some(report::render(url, r)),
        }
    }

    pub fn failed(msg: &str) -> Self {
        Self {
            indexing_status: s!(STATUS_FAILED),
            severity: Some(Severity::Error),
            crawl_date: s!(ERROR),
            rendered: s!(ERROR),
            robots: s!(ERROR),
            canonical: s!(ERROR),
            indexing_allowed: s!(ERROR),
            noindex: s!(ERROR),
            troubleshooting: vec![Segment::new(
                TextRole::Plain,
                format!("Inspection failed:\n\n{msg}\n\nPlease check the URL and try again."),
            )],
            report: None,
        }
    }

    pub fn details(&self) -> Vec<DetailRow> {
        let row = |section, field, value: &String| DetailRow { section, field, value: value.clone() };
        vec![
            row("Last crawl", "Date", &self.crawl_date),
            row("Last crawl", "Rendered version", &self.rendered),
            row("Page availability", "Robots.txt", &self.robots),
            row("Page availability", "Canonical", &self.canonical),
            row("Indexing allowed", "Indexing", &self.indexing_allowed),
            row("Indexing allowed", "Noindex directive", &self.noindex),
        ]
    }

    pub fn troubleshooting_text(&self) -> String {
        self.troubleshooting.iter().map(|s| s.text.as_str()).collect()
    }

    /// True while any field still shows the in-flight placeholder.
    pub fn is_checking(&self) -> bool {
        self.indexing_status == CHECKING || self.details().iter().any(|r| r.value == CHECKING)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize;
    use crate::inspect::{CrawlDate, Outcome, template};

    #[test]
    fn initial_placeholders() {
        let v = CoverageView::initial();
        assert_eq!(v.indexing_status, "Not checked yet");
        assert_eq!(v.crawl_date, "Not available");
        assert_eq!(v.noindex, "Not checked");
        assert_eq!(v.troubleshooting_text(), "Inspection results will appear here");
        assert!(v.severity.is_none());
        assert!(!v.is_checking());
    }

    #[test]
    fn checking_fills_every_field() {
        let v = CoverageView::checking("https://example.com");
        assert!(v.is_checking());
        assert!(v.details().iter().all(|r| r.value == CHECKING));
        assert!(v.troubleshooting_text().starts_with("Running inspection for: https://example.com"));
    }

    #[test]
    fn result_view_is_fully_populated() {
        let url = normalize("example.com").unwrap();
        for o in Outcome::ALL {
            let r = template(o, CrawlDate::NotCrawled);
            let v = CoverageView::from_result(&url, &r);
            assert!(!v.is_checking(), "{o:?}");
            assert_eq!(v.severity, Some(r.severity));
            assert_eq!(v.troubleshooting[2].role, TextRole::Status(r.severity));
            assert!(v.troubleshooting_text().contains(&r.troubleshooting));
            assert!(v.troubleshooting_text().ends_with(report::SIMULATED_NOTE));
            assert!(v.report.is_some());
        }
    }

    #[test]
    fn failed_view_uses_error_sentinel() {
        let v = CoverageView::failed("Invalid URL format - missing domain");
        assert_eq!(v.indexing_status, STATUS_FAILED);
        assert_eq!(v.severity, Some(Severity::Error));
        assert!(v.details().iter().all(|r| r.value == "Error"));
        assert_eq!(
            v.troubleshooting_text(),
            "Inspection failed:\n\nInvalid URL format - missing domain\n\nPlease check the URL and try again."
        );
    }

    #[test]
    fn colors_differ_per_severity() {
        let c = [Severity::Success, Severity::Warning, Severity::Error].map(severity_color);
        assert_ne!(c[0], c[1]);
        assert_ne!(c[1], c[2]);
        assert_ne!(c[0], c[2]);
    }
}
