//! Login context
//!
//! Carries the caller's cancellation signal and deadline into a login
//! attempt. Every network step of the attempt is raced against it.

use std::future::{Future, pending};
use std::time::Duration;
use tokio::sync::watch;
use tokio::time::{Instant, sleep_until};

use crate::error::ConnectorError;

/// Cancellation and deadline for one login attempt.
///
/// Cloning is cheap; clones observe the same cancellation signal.
#[derive(Debug, Clone, Default)]
pub struct LoginContext {
    cancel: Option<watch::Receiver<bool>>,
    deadline: Option<Instant>,
}

/// Cancels every [`LoginContext`] derived from the same `cancellable()` call.
#[derive(Debug)]
pub struct CancelHandle {
    tx: watch::Sender<bool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }
}

impl LoginContext {
    /// A context that is never cancelled and has no deadline.
    pub fn background() -> Self {
        Self::default()
    }

    /// Returns a copy of this context that can be cancelled through the
    /// returned handle. The deadline is kept.
    pub fn cancellable(self) -> (Self, CancelHandle) {
        let (tx, rx) = watch::channel(false);
        let ctx = Self {
            cancel: Some(rx),
            deadline: self.deadline,
        };
        (ctx, CancelHandle { tx })
    }

    /// Sets the deadline, keeping an earlier one if already set.
    pub fn with_deadline(mut self, deadline: Instant) -> Self {
        self.deadline = Some(match self.deadline {
            Some(current) if current < deadline => current,
            _ => deadline,
        });
        self
    }

    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.as_ref().is_some_and(|rx| *rx.borrow())
    }

    pub fn is_expired(&self) -> bool {
        self.deadline.is_some_and(|d| Instant::now() >= d)
    }

    /// Drives `fut` to completion unless the context is cancelled or its
    /// deadline passes first, in which case `fut` is dropped.
    pub async fn run<F, T>(&self, fut: F) -> Result<T, ConnectorError>
    where
        F: Future<Output = Result<T, ConnectorError>>,
    {
        tokio::select! {
            biased;
            _ = self.cancelled() => Err(ConnectorError::Cancelled),
            _ = self.expired() => Err(ConnectorError::DeadlineExceeded),
            res = fut => res,
        }
    }

    /// Resolves once the context is cancelled. Never resolves if it cannot
    /// be cancelled.
    async fn cancelled(&self) {
        let Some(rx) = &self.cancel else {
            return pending().await;
        };
        let mut rx = rx.clone();
        let fired = rx.wait_for(|cancelled| *cancelled).await.is_ok();
        if !fired {
            // Handle dropped without cancelling.
            pending::<()>().await;
        }
    }

    async fn expired(&self) {
        match self.deadline {
            Some(deadline) => sleep_until(deadline).await,
            None => pending().await,
        }
    }
}
