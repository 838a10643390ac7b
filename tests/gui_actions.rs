// tests/gui_actions.rs
//
// Button handlers driven against App without opening a window.
//
use std::{
    sync::{Arc, Mutex, mpsc},
    time::{Duration, Instant},
};

use gsc_inspect::{
    config::{options::PageKind, state::AppState},
    core::NormalizedUrl,
    gui::{
        actions,
        app::App,
        router,
        view_model::{CHECKING, STATUS_COMPLETE, STATUS_FAILED, STATUS_READY},
    },
    inspect::{CrawlDate, InspectionResult, Inspector, Outcome, Severity, template},
};

struct Fixed(Outcome);

impl Inspector for Fixed {
    fn name(&self) -> &'static str { "fixed" }

    fn inspect(&self, _url: &NormalizedUrl) -> InspectionResult {
        template(self.0, CrawlDate::NotCrawledYet)
    }
}

/// Holds each inspection until the test sends on the gate.
struct Gated {
    outcome: Outcome,
    gate: Mutex<mpsc::Receiver<()>>,
}

impl Inspector for Gated {
    fn name(&self) -> &'static str { "gated" }

    fn inspect(&self, _url: &NormalizedUrl) -> InspectionResult {
        let _ = self.gate.lock().unwrap().recv_timeout(Duration::from_secs(5));
        template(self.outcome, CrawlDate::NotCrawled)
    }
}

fn gated_app(outcome: Outcome) -> (App, mpsc::Sender<()>) {
    let (tx, rx) = mpsc::channel();
    let app = App::with_inspector(
        AppState::default(),
        Arc::new(Gated { outcome, gate: Mutex::new(rx) }),
    );
    (app, tx)
}

fn app_with(outcome: Outcome) -> App {
    App::with_inspector(AppState::default(), Arc::new(Fixed(outcome)))
}

/// Poll like the frame loop would, until the runner hands something back.
fn pump(app: &mut App) {
    let deadline = Instant::now() + Duration::from_secs(5);
    while !actions::poll(app) {
        assert!(Instant::now() < deadline, "inspection never finished");
        std::thread::sleep(Duration::from_millis(5));
    }
}

#[test]
fn starts_in_ready_state() {
    let app = app_with(Outcome::Indexed);
    assert_eq!(app.status, STATUS_READY);
    assert_eq!(app.view.indexing_status, "Not checked yet");
    assert_eq!(app.current_page_kind(), PageKind::Coverage);
    assert!(!app.runner.is_running());
}

#[test]
fn inspect_then_result() {
    let mut app = app_with(Outcome::DiscoveredNotIndexed);
    app.state.gui.url_text = "example.com".into();
    app.set_current_index(router::index_of(PageKind::Enhancements));

    actions::inspect(&mut app, || {});
    assert_eq!(app.status, "Checking: https://example.com");
    assert_eq!(app.view.crawl_date, CHECKING);
    assert!(app.view.is_checking());

    pump(&mut app);
    assert_eq!(app.status, STATUS_COMPLETE);
    assert!(!app.view.is_checking());
    assert_eq!(app.view.indexing_status, "URL is not on Google: Discovered - currently not indexed");
    assert_eq!(app.view.crawl_date, "Not crawled yet");
    assert_eq!(app.view.severity, Some(Severity::Warning));
    assert_eq!(app.current_page_kind(), PageKind::Coverage, "result switches to Coverage");
    assert!(app.view.report.as_deref().unwrap().contains("https://example.com"));
}

#[test]
fn empty_box_warns_and_does_not_inspect() {
    let mut app = app_with(Outcome::Indexed);
    app.state.gui.url_text = "   ".into();

    actions::inspect(&mut app, || {});
    assert_eq!(app.state.gui.warning.as_deref(), Some("Please enter a URL to inspect"));
    assert!(!app.runner.is_running());
    assert_eq!(app.status, STATUS_READY);
    assert_eq!(app.view.indexing_status, "Not checked yet");
    assert!(!actions::poll(&mut app));
}

#[test]
fn invalid_url_shows_failure_state() {
    let mut app = app_with(Outcome::Indexed);
    app.state.gui.url_text = "https://".into();

    actions::inspect(&mut app, || {});
    assert!(!app.runner.is_running());
    assert_eq!(app.status, STATUS_FAILED);
    assert_eq!(app.view.indexing_status, "Inspection failed");
    assert_eq!(app.view.robots, "Error");
    assert!(app.view.troubleshooting_text().contains("Invalid URL format - missing domain"));
    assert!(app.state.gui.warning.is_none());
}

#[test]
fn clear_resets_everything() {
    let mut app = app_with(Outcome::BlockedByRobots);
    app.state.gui.url_text = "example.com".into();
    actions::inspect(&mut app, || {});
    pump(&mut app);
    assert_eq!(app.view.robots, "Blocked by robots.txt");

    actions::clear(&mut app);
    assert!(app.state.gui.url_text.is_empty());
    assert_eq!(app.status, STATUS_READY);
    assert_eq!(app.view.robots, "Not checked");
    assert!(app.view.report.is_none());
}

#[test]
fn gsc_link_follows_url_box() {
    let mut app = app_with(Outcome::Indexed);
    assert!(actions::gsc_link_for(&app).is_err());

    app.state.gui.url_text = " example.com/page?x=1 ".into();
    let link = actions::gsc_link_for(&app).unwrap();
    assert!(link.ends_with("?resource_id=https%3A%2F%2Fexample.com%2Fpage%3Fx%3D1"), "{link}");
}

#[test]
fn open_in_gsc_with_empty_box_warns() {
    let mut app = app_with(Outcome::Indexed);
    actions::open_in_gsc(&mut app);
    assert_eq!(app.state.gui.warning.as_deref(), Some("No URL to open in GSC"));
}

#[test]
fn second_inspect_while_running_changes_nothing() {
    let (mut app, release) = gated_app(Outcome::NotFound404);
    app.state.gui.url_text = "example.com".into();
    actions::inspect(&mut app, || {});
    let checking_view = app.view.clone();
    let checking_status = app.status.clone();

    app.state.gui.url_text = "other.org".into();
    actions::inspect(&mut app, || {});
    assert_eq!(app.view, checking_view);
    assert_eq!(app.status, checking_status);
    assert_eq!(app.status, "Checking: https://example.com");
    assert!(app.state.gui.warning.is_none());

    release.send(()).unwrap();
    pump(&mut app);
    assert_eq!(app.view.indexing_status, "URL is not on Google: Page not found (404)");
    assert!(app.view.report.as_deref().unwrap().contains("https://example.com"));
    assert!(!app.view.report.as_deref().unwrap().contains("other.org"));
}

#[test]
fn result_arriving_after_clear_still_lands() {
    let (mut app, release) = gated_app(Outcome::Indexed);
    app.state.gui.url_text = "example.com".into();
    actions::inspect(&mut app, || {});

    actions::clear(&mut app);
    assert!(app.state.gui.url_text.is_empty());
    assert_eq!(app.status, STATUS_READY);
    assert!(app.runner.is_running());

    release.send(()).unwrap();
    pump(&mut app);
    assert_eq!(app.status, STATUS_COMPLETE);
    assert_eq!(app.view.indexing_status, "URL is on Google");
    assert!(!app.runner.is_running());
}
