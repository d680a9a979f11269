//! Deadline and cancellation shared by every pipeline stage.
//!
//! Stages poll [`Deadline::expired`] at seed or row granularity and return
//! the results gathered so far once it trips. Nothing is rolled back.
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cloneable flag that cancels every run holding a clone of it.
#[derive(Clone, Debug, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Optional wall-clock limit plus optional cancellation token.
#[derive(Clone, Debug)]
pub struct Deadline {
    started: Instant,
    limit: Option<Duration>,
    cancel: Option<CancelToken>,
}

impl Deadline {
    /// A deadline that never expires.
    pub fn none() -> Self {
        Self {
            started: Instant::now(),
            limit: None,
            cancel: None,
        }
    }

    /// Expires `limit` after construction.
    pub fn after(limit: Duration) -> Self {
        Self {
            limit: Some(limit),
            ..Self::none()
        }
    }

    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[inline]
    pub fn expired(&self) -> bool {
        if self.cancel.as_ref().is_some_and(CancelToken::is_cancelled) {
            return true;
        }
        match self.limit {
            Some(limit) => self.started.elapsed() >= limit,
            None => false,
        }
    }
}

impl Default for Deadline {
    fn default() -> Self {
        Self::none()
    }
}
