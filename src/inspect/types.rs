// src/inspect/types.rs
use std::fmt;

use chrono::NaiveDateTime;

use crate::config::consts::CRAWL_DATE_FMT;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
    Indexed,
    BlockedByRobots,
    NoindexTag,
    NotFound404,
    DiscoveredNotIndexed,
}

impl Outcome {
    pub const ALL: [Outcome; 5] = [
        Outcome::Indexed,
        Outcome::BlockedByRobots,
        Outcome::NoindexTag,
        Outcome::NotFound404,
        Outcome::DiscoveredNotIndexed,
    ];

    /// Whether Googlebot is supposed to have fetched the page.
    pub fn was_crawled(self) -> bool {
        matches!(self, Outcome::Indexed | Outcome::NoindexTag | Outcome::NotFound404)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Severity {
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Yes / No / Not applicable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Flag {
    Yes,
    No,
    NotApplicable,
}

impl fmt::Display for Flag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Flag::Yes => "Yes",
            Flag::No => "No",
            Flag::NotApplicable => "Not applicable",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CrawlDate {
    Crawled(NaiveDateTime),
    NotCrawled,
    NotCrawledYet,
}

impl fmt::Display for CrawlDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CrawlDate::Crawled(ts) => write!(f, "{}", ts.format(CRAWL_DATE_FMT)),
            CrawlDate::NotCrawled => f.write_str("Not crawled"),
            CrawlDate::NotCrawledYet => f.write_str("Not crawled yet"),
        }
    }
}

/// One inspection's answer. Built once, never mutated; the next
/// inspection (or Clear) replaces it wholesale.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InspectionResult {
    pub outcome: Outcome,
    pub indexing_status: String,
    pub severity: Severity,
    pub crawl_date: CrawlDate,
    pub rendered: String,
    pub robots: String,
    pub canonical: String,
    pub indexing_allowed: Flag,
    pub noindex: Flag,
    pub troubleshooting: String,
}
