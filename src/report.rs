// src/report.rs
//
// Plain-text report of one inspection: CLI output and the GUI "Copy report".

use std::fmt::Write;

use crate::{
    core::{NormalizedUrl, deeplink::gsc_inspect_link},
    inspect::InspectionResult,
};

pub const SIMULATED_NOTE: &str =
    "Note: This is a simulated inspection. For accurate results, use Google Search Console.";

pub fn render(url: &NormalizedUrl, r: &InspectionResult) -> String {
    let mut out = String::with_capacity(512);

    let _ = writeln!(out, "Inspection results for: {url}");
    let _ = writeln!(out);
    let _ = writeln!(out, "Indexing status:    {} [{}]", r.indexing_status, r.severity.label());
    let _ = writeln!(out, "Last crawl:         {}", r.crawl_date);
    let _ = writeln!(out, "Rendered version:   {}", r.rendered);
    let _ = writeln!(out, "Robots.txt:         {}", r.robots);
    let _ = writeln!(out, "Canonical:          {}", r.canonical);
    let _ = writeln!(out, "Indexing allowed:   {}", r.indexing_allowed);
    let _ = writeln!(out, "Noindex directive:  {}", r.noindex);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", r.troubleshooting);
    let _ = writeln!(out);
    let _ = writeln!(out, "Open in Search Console: {}", gsc_inspect_link(url));
    let _ = writeln!(out);
    out.push_str(SIMULATED_NOTE);
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::normalize;
    use crate::inspect::{CrawlDate, Outcome, template};

    #[test]
    fn report_lists_every_field() {
        let url = normalize("example.com/page").unwrap();
        let r = template(Outcome::BlockedByRobots, CrawlDate::NotCrawled);
        let txt = render(&url, &r);

        assert!(txt.starts_with("Inspection results for: https://example.com/page\n"));
        assert!(txt.contains("URL is not on Google: Blocked by robots.txt [error]"));
        assert!(txt.contains("Last crawl:         Not crawled"));
        assert!(txt.contains("Noindex directive:  Not applicable"));
        assert!(txt.contains("• Googlebot cannot crawl this page"));
        assert!(txt.contains("resource_id=https%3A%2F%2Fexample.com%2Fpage"));
        assert!(txt.trim_end().ends_with(SIMULATED_NOTE));
    }
}
