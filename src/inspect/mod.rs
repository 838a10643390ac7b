// src/inspect/mod.rs
//
// The inspection seam. The GUI and CLI only ever talk to `dyn Inspector`;
// the simulated one can be swapped for a real fetch + robots + meta scan.

mod outcomes;
mod simulated;
mod types;

pub use outcomes::template;
pub use simulated::{SimulatedInspector, random_crawl_date, simulate};
pub use types::{CrawlDate, Flag, InspectionResult, Outcome, Severity};

use crate::core::NormalizedUrl;

pub trait Inspector: Send + Sync + 'static {
    /// Short label for logs.
    fn name(&self) -> &'static str;

    /// Blocking; callers run this off the UI thread.
    fn inspect(&self, url: &NormalizedUrl) -> InspectionResult;
}
