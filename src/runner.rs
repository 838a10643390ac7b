// src/runner.rs
//
// Owns the one in-flight inspection. The UI thread calls `start` on click
// and `poll` every frame; the worker thread only ever sends one message.

use std::{
    any::Any,
    panic::{self, AssertUnwindSafe},
    sync::{
        Arc,
        mpsc::{self, Receiver, TryRecvError},
    },
    thread,
    time::{Duration, Instant},
};

use crate::{
    core::{NormalizedUrl, ValidationError, normalize},
    inspect::{InspectionResult, Inspector},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RunState {
    Idle,
    Running { url: NormalizedUrl, since: Instant },
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Start {
    Started(NormalizedUrl),
    /// Already running; the request was dropped.
    Busy,
}

#[derive(Clone, Debug)]
pub struct Completed {
    pub url: NormalizedUrl,
    pub result: InspectionResult,
    pub elapsed: Duration,
}

#[derive(Clone, Debug)]
pub enum Finished {
    Done(Completed),
    Failed(String),
}

pub struct Runner {
    inspector: Arc<dyn Inspector>,
    state: RunState,
    rx: Option<Receiver<Finished>>,
}

impl Runner {
    pub fn new(inspector: Arc<dyn Inspector>) -> Self {
        Self { inspector, state: RunState::Idle, rx: None }
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    #[inline]
    pub fn is_running(&self) -> bool {
        matches!(self.state, RunState::Running { .. })
    }

    /// The URL being inspected and how long it has been running.
    pub fn in_flight(&self) -> Option<(&NormalizedUrl, Duration)> {
        match &self.state {
            RunState::Running { url, since } => Some((url, since.elapsed())),
            RunState::Idle => None,
        }
    }

    pub fn inspector_name(&self) -> &'static str {
        self.inspector.name()
    }

    /// Validate `raw` and kick off a background inspection.
    /// `notify` runs on the worker after the result is queued (GUI: request a repaint).
    pub fn start<F>(&mut self, raw: &str, notify: F) -> Result<Start, ValidationError>
    where
        F: FnOnce() + Send + 'static,
    {
        if raw.trim().is_empty() {
            return Err(ValidationError::Empty);
        }
        if self.is_running() {
            logd!("Runner: busy, ignoring request for {:?}", raw.trim());
            return Ok(Start::Busy);
        }

        let url = normalize(raw)?;
        let (tx, rx) = mpsc::channel();
        let inspector = Arc::clone(&self.inspector);
        let worker_url = url.clone();

        logf!("Runner: start {} (inspector={})", url, inspector.name());

        thread::spawn(move || {
            let t0 = Instant::now();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| inspector.inspect(&worker_url)));
            let msg = match outcome {
                Ok(result) => Finished::Done(Completed {
                    url: worker_url,
                    result,
                    elapsed: t0.elapsed(),
                }),
                Err(payload) => Finished::Failed(panic_message(payload)),
            };
            // Receiver gone means the app is shutting down; nothing to do.
            let _ = tx.send(msg);
            notify();
        });

        self.rx = Some(rx);
        self.state = RunState::Running { url: url.clone(), since: Instant::now() };
        Ok(Start::Started(url))
    }

    /// Non-blocking. `Some` exactly once per started inspection.
    pub fn poll(&mut self) -> Option<Finished> {
        let rx = self.rx.as_ref()?;
        let finished = match rx.try_recv() {
            Ok(f) => f,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Finished::Failed(s!(WORKER_GONE)),
        };
        self.settle(&finished);
        Some(finished)
    }

    /// Blocking variant of `poll` for headless callers.
    pub fn wait(&mut self) -> Option<Finished> {
        let rx = self.rx.as_ref()?;
        let finished = rx.recv().unwrap_or_else(|_| Finished::Failed(s!(WORKER_GONE)));
        self.settle(&finished);
        Some(finished)
    }

    fn settle(&mut self, finished: &Finished) {
        match finished {
            Finished::Done(c) => logf!(
                "Runner: done {} → {:?} in {} ms",
                c.url,
                c.result.outcome,
                c.elapsed.as_millis()
            ),
            Finished::Failed(e) => loge!("Runner: failed: {}", e),
        }
        self.rx = None;
        self.state = RunState::Idle;
    }
}

const WORKER_GONE: &str = "Inspection worker stopped unexpectedly";

fn panic_message(payload: Box<dyn Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s!(*s)
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        s!(WORKER_GONE)
    }
}
