// src/inspect/simulated.rs
use std::{thread, time::Duration};

use chrono::{Local, NaiveDateTime, TimeDelta, Timelike};
use rand::Rng;

use crate::config::{
    consts::{CRAWL_DAYS_MAX, CRAWL_DAYS_MIN},
    options::InspectOptions,
};
use crate::core::NormalizedUrl;

use super::{Inspector, outcomes::template, types::*};

/// Stand-in inspector: waits, then picks one of the five canned outcomes
/// uniformly at random. Holds no state between calls.
#[derive(Clone, Debug)]
pub struct SimulatedInspector {
    delay: Duration,
}

impl SimulatedInspector {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn from_options(opts: &InspectOptions) -> Self {
        Self::new(opts.delay())
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedInspector {
    fn default() -> Self {
        Self::from_options(&InspectOptions::default())
    }
}

impl Inspector for SimulatedInspector {
    fn name(&self) -> &'static str {
        "simulated"
    }

    fn inspect(&self, url: &NormalizedUrl) -> InspectionResult {
        if !self.delay.is_zero() {
            thread::sleep(self.delay);
        }
        let result = simulate(&mut rand::thread_rng(), Local::now().naive_local());
        logd!("Inspect: {} → {:?}", url, result.outcome);
        result
    }
}

/// Uniform pick among `Outcome::ALL`, filled in from its template.
pub fn simulate<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> InspectionResult {
    let outcome = Outcome::ALL[rng.gen_range(0..Outcome::ALL.len())];
    let crawl = if outcome.was_crawled() {
        CrawlDate::Crawled(random_crawl_date(rng, now))
    } else {
        CrawlDate::NotCrawled
    };
    template(outcome, crawl)
}

/// `now` minus 1..=30 whole days, truncated to the second.
pub fn random_crawl_date<R: Rng + ?Sized>(rng: &mut R, now: NaiveDateTime) -> NaiveDateTime {
    let days = rng.gen_range(CRAWL_DAYS_MIN..=CRAWL_DAYS_MAX);
    let now = now.with_nanosecond(0).unwrap_or(now);
    now - TimeDelta::days(days)
}
