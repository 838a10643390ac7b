// src/inspect/outcomes.rs
//
// The five canned answers.

use super::types::{CrawlDate, Flag, InspectionResult, Outcome, Severity};

const ALLOWED: &str = "Allowed by robots.txt";
const SELF_CANONICAL: &str = "Self-referential canonical";
const NOT_AVAILABLE: &str = "Not available";
const NOT_RENDERED: &str = "Not rendered";

fn troubleshooting(items: String) -> String {
    join!("Troubleshooting:\n\n", &items)
}

/// Full record for `outcome`. `crawl` is only used by outcomes that were
/// crawled; the others carry their fixed sentinel.
pub fn template(outcome: Outcome, crawl: CrawlDate) -> InspectionResult {
    match outcome {
        Outcome::Indexed => InspectionResult {
            outcome,
            indexing_status: s!("URL is on Google"),
            severity: Severity::Success,
            crawl_date: crawl,
            rendered: s!("Successfully rendered"),
            robots: s!(ALLOWED),
            canonical: s!(SELF_CANONICAL),
            indexing_allowed: Flag::Yes,
            noindex: Flag::No,
            troubleshooting: s!("No issues detected. This URL is properly indexed by Google."),
        },
        Outcome::BlockedByRobots => InspectionResult {
            outcome,
            indexing_status: s!("URL is not on Google: Blocked by robots.txt"),
            severity: Severity::Error,
            crawl_date: CrawlDate::NotCrawled,
            rendered: s!(NOT_RENDERED),
            robots: s!("Blocked by robots.txt"),
            canonical: s!(NOT_AVAILABLE),
            indexing_allowed: Flag::No,
            noindex: Flag::NotApplicable,
            troubleshooting: troubleshooting(bullets![
                "This URL is blocked by robots.txt",
                "Googlebot cannot crawl this page",
                "Solution: Update your robots.txt file to allow access",
            ]),
        },
        Outcome::NoindexTag => InspectionResult {
            outcome,
            indexing_status: s!("URL is not on Google: Noindex tag detected"),
            severity: Severity::Warning,
            crawl_date: crawl,
            rendered: s!("Rendered but not indexed"),
            robots: s!(ALLOWED),
            canonical: s!(SELF_CANONICAL),
            indexing_allowed: Flag::No,
            noindex: Flag::Yes,
            troubleshooting: troubleshooting(bullets![
                "This page has a 'noindex' directive",
                "Google found the page but was told not to index it",
                "Solution: Remove noindex meta tag if you want it indexed",
            ]),
        },
        Outcome::NotFound404 => InspectionResult {
            outcome,
            indexing_status: s!("URL is not on Google: Page not found (404)"),
            severity: Severity::Error,
            crawl_date: crawl,
            rendered: s!("Error during rendering"),
            robots: s!(ALLOWED),
            canonical: s!(NOT_AVAILABLE),
            indexing_allowed: Flag::No,
            noindex: Flag::NotApplicable,
            troubleshooting: troubleshooting(bullets![
                "This URL returns a 404 (Not Found) error",
                "The page may have been moved or deleted",
                "Solution: Fix the URL or implement a proper redirect",
            ]),
        },
        Outcome::DiscoveredNotIndexed => InspectionResult {
            outcome,
            indexing_status: s!("URL is not on Google: Discovered - currently not indexed"),
            severity: Severity::Warning,
            crawl_date: CrawlDate::NotCrawledYet,
            rendered: s!(NOT_RENDERED),
            robots: s!(ALLOWED),
            canonical: s!(NOT_AVAILABLE),
            indexing_allowed: Flag::Yes,
            noindex: Flag::No,
            troubleshooting: troubleshooting(bullets![
                "Google has discovered this URL but hasn't crawled it yet",
                "This is common for new or low-priority pages",
                "Solution: Request indexing in GSC or improve internal linking",
            ]),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ts() -> CrawlDate {
        CrawlDate::Crawled(
            NaiveDate::from_ymd_opt(2026, 10, 1).unwrap().and_hms_opt(12, 30, 5).unwrap(),
        )
    }

    #[test]
    fn table_matches_labels() {
        let r = template(Outcome::BlockedByRobots, ts());
        assert_eq!(r.robots, "Blocked by robots.txt");
        assert_eq!(r.severity, Severity::Error);
        assert_eq!(r.noindex, Flag::NotApplicable);
        assert_eq!(r.indexing_allowed, Flag::No);

        let r = template(Outcome::NoindexTag, ts());
        assert_eq!(r.severity, Severity::Warning);
        assert_eq!(r.noindex, Flag::Yes);
        assert_eq!(r.robots, ALLOWED);

        let r = template(Outcome::DiscoveredNotIndexed, ts());
        assert_eq!(r.indexing_allowed, Flag::Yes);
        assert_eq!(r.noindex, Flag::No);
    }

    #[test]
    fn uncrawled_outcomes_ignore_timestamp() {
        assert_eq!(template(Outcome::BlockedByRobots, ts()).crawl_date, CrawlDate::NotCrawled);
        assert_eq!(
            template(Outcome::DiscoveredNotIndexed, ts()).crawl_date,
            CrawlDate::NotCrawledYet
        );
        assert_eq!(template(Outcome::Indexed, ts()).crawl_date, ts());
        assert_eq!(template(Outcome::NotFound404, ts()).crawl_date.to_string(), "2026-10-01 12:30:05");
    }

    #[test]
    fn troubleshooting_is_bulleted() {
        let r = template(Outcome::NotFound404, ts());
        assert_eq!(
            r.troubleshooting,
            "Troubleshooting:\n\n\
             • This URL returns a 404 (Not Found) error\n\
             • The page may have been moved or deleted\n\
             • Solution: Fix the URL or implement a proper redirect"
        );
    }
}
