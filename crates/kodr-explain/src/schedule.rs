//! Debounced, cancelable analysis passes.
//!
//! Classification results are surfaced after a short delay. Each new request cancels the
//! previous one (last write wins, no backlog): its [`CancellationToken`] is tripped, and
//! [`AnalysisScheduler::complete`] refuses any result that does not belong to the most recently
//! scheduled pass. At most one pass is live at a time.
//!
//! A handed-out pass stays live while its [`ScheduledPass`] or [`CompletedPass`] exists. A host
//! that drops one without calling [`AnalysisScheduler::complete`] simply ends the pass.
//!
//! Time is injected as [`Instant`] values, so hosts drive the scheduler from their own event loop
//! and tests stay deterministic.
//!
//! ```rust
//! use kodr_explain::{AnalysisScheduler, Classifier};
//! use std::time::{Duration, Instant};
//!
//! let mut scheduler = AnalysisScheduler::new(Duration::from_millis(1500));
//! let t0 = Instant::now();
//!
//! scheduler.schedule("x = 1", t0);
//! scheduler.schedule("return x", t0 + Duration::from_millis(200));
//!
//! let classifier = Classifier::new();
//! assert!(scheduler.poll(t0 + Duration::from_millis(1500), &classifier).is_none());
//! let annotations = scheduler
//!     .poll(t0 + Duration::from_millis(1700), &classifier)
//!     .unwrap();
//! assert_eq!(annotations[0].code, "return x");
//! ```

use crate::classify::{Annotation, Classifier};
use std::sync::{Arc, Weak};
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

/// Shared cancellation flag handed to a scheduled pass.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    cancelled: Arc<AtomicBool>,
}

impl CancellationToken {
    /// A fresh, live token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel every clone of this token.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns `true` once [`cancel`](Self::cancel) was called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}

/// Identifier of one scheduled pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PassId(u64);

/// Handle returned by [`AnalysisScheduler::schedule`].
#[derive(Debug, Clone)]
pub struct PassTicket {
    id: PassId,
    due: Instant,
    token: CancellationToken,
}

impl PassTicket {
    /// Pass identifier.
    pub fn id(&self) -> PassId {
        self.id
    }

    /// When the pass becomes due.
    pub fn due(&self) -> Instant {
        self.due
    }

    /// The pass's cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }
}

/// A due pass, ready to run on any executor.
#[derive(Debug, Clone)]
pub struct ScheduledPass {
    id: PassId,
    source: String,
    token: CancellationToken,
    lease: Arc<()>,
}

impl ScheduledPass {
    /// Pass identifier.
    pub fn id(&self) -> PassId {
        self.id
    }

    /// Text to classify.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The pass's cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Classify the source unless the pass was cancelled.
    pub fn run(self, classifier: &Classifier) -> Option<CompletedPass> {
        if self.token.is_cancelled() {
            return None;
        }
        let annotations = classifier.classify(&self.source);
        if self.token.is_cancelled() {
            return None;
        }
        Some(CompletedPass {
            id: self.id,
            annotations,
            lease: self.lease,
        })
    }
}

/// The result of [`ScheduledPass::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletedPass {
    id: PassId,
    annotations: Vec<Annotation>,
    lease: Arc<()>,
}

impl CompletedPass {
    /// Pass identifier.
    pub fn id(&self) -> PassId {
        self.id
    }

    /// The annotations produced.
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }
}

#[derive(Debug)]
struct PendingPass {
    id: PassId,
    due: Instant,
    source: String,
    token: CancellationToken,
}

/// Live pass: either waiting for its delay, or handed out and running.
#[derive(Debug)]
enum LivePass {
    Waiting(PendingPass),
    Running {
        id: PassId,
        token: CancellationToken,
        /// Alive while the handed-out pass (or its result) exists.
        lease: Weak<()>,
    },
}

impl LivePass {
    fn id(&self) -> PassId {
        match self {
            LivePass::Waiting(pending) => pending.id,
            LivePass::Running { id, .. } => *id,
        }
    }

    fn token(&self) -> &CancellationToken {
        match self {
            LivePass::Waiting(pending) => &pending.token,
            LivePass::Running { token, .. } => token,
        }
    }
}

/// Debounces classification requests for one buffer.
#[derive(Debug)]
pub struct AnalysisScheduler {
    delay: Duration,
    next_id: u64,
    live: Option<LivePass>,
}

impl AnalysisScheduler {
    /// A scheduler that delays every pass by `delay`.
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            next_id: 0,
            live: None,
        }
    }

    /// Configured delay.
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Returns `true` while a pass is waiting, or running and not yet dropped.
    pub fn is_pending(&self) -> bool {
        match &self.live {
            Some(LivePass::Waiting(_)) => true,
            Some(LivePass::Running { lease, .. }) => lease.strong_count() > 0,
            None => false,
        }
    }

    /// Due time of the waiting pass, if any.
    pub fn due_at(&self) -> Option<Instant> {
        match &self.live {
            Some(LivePass::Waiting(pending)) => Some(pending.due),
            Some(LivePass::Running { .. }) | None => None,
        }
    }

    /// Schedule a pass over `source`, cancelling whichever pass was live.
    pub fn schedule(&mut self, source: impl Into<String>, now: Instant) -> PassTicket {
        self.cancel();

        self.next_id += 1;
        let id = PassId(self.next_id);
        let due = now + self.delay;
        let token = CancellationToken::new();
        self.live = Some(LivePass::Waiting(PendingPass {
            id,
            due,
            source: source.into(),
            token: token.clone(),
        }));
        tracing::debug!(pass = id.0, delay_ms = self.delay.as_millis(), "analysis scheduled");

        PassTicket { id, due, token }
    }

    /// Cancel the live pass, if any. Its result will be refused.
    pub fn cancel(&mut self) {
        if let Some(live) = self.live.take() {
            live.token().cancel();
            tracing::debug!(pass = live.id().0, "analysis cancelled");
        }
    }

    /// Hand out the waiting pass once `now` reaches its due time.
    pub fn take_due(&mut self, now: Instant) -> Option<ScheduledPass> {
        match self.live.take() {
            Some(LivePass::Waiting(pending)) if now >= pending.due => {
                let lease = Arc::new(());
                self.live = Some(LivePass::Running {
                    id: pending.id,
                    token: pending.token.clone(),
                    lease: Arc::downgrade(&lease),
                });
                Some(ScheduledPass {
                    id: pending.id,
                    source: pending.source,
                    token: pending.token,
                    lease,
                })
            }
            other => {
                self.live = other;
                None
            }
        }
    }

    /// Accept a finished pass if it is the live one; stale results are dropped.
    pub fn complete(&mut self, pass: CompletedPass) -> Option<Vec<Annotation>> {
        let is_live = matches!(
            &self.live,
            Some(LivePass::Running { id, token, .. }) if *id == pass.id && !token.is_cancelled()
        );
        if !is_live {
            tracing::debug!(pass = pass.id.0, "discarding stale analysis result");
            return None;
        }

        self.live = None;
        tracing::debug!(
            pass = pass.id.0,
            annotations = pass.annotations.len(),
            "analysis completed"
        );
        Some(pass.annotations)
    }

    /// Run the due pass (if any) on the caller's thread and return its annotations.
    pub fn poll(&mut self, now: Instant, classifier: &Classifier) -> Option<Vec<Annotation>> {
        let pass = self.take_due(now)?;
        let completed = pass.run(classifier)?;
        self.complete(completed)
    }
}
