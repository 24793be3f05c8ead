//! Cancellation and deadline scope for a single probe
//!
//! A [`Context`] carries an optional deadline and a cancellation token.
//! Derived contexts inherit the parent's cancellation and never extend
//! its deadline.

use crate::error::{ProbeError, Result};
use std::future::Future;
use std::time::Duration;
use tokio::time::{sleep_until, Instant};
use tokio_util::sync::CancellationToken;

/// Execution context handed to [`Resource::test`](crate::Resource::test)
#[derive(Debug, Clone)]
pub struct Context {
    deadline: Option<Instant>,
    token: CancellationToken,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    #[must_use]
    pub fn background() -> Self {
        Self {
            deadline: None,
            token: CancellationToken::new(),
        }
    }

    /// Derive a context that expires after `timeout`
    #[must_use]
    pub fn with_timeout(self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    /// Derive a context that expires at `deadline`, keeping the earlier of the two
    #[must_use]
    pub fn with_deadline(self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(current) if current <= deadline => current,
            _ => deadline,
        };
        Self {
            deadline: Some(deadline),
            token: self.token.child_token(),
        }
    }

    /// Derive a cancellable context
    ///
    /// Cancelling the returned token cancels the new context and anything
    /// derived from it, but not the parent.
    #[must_use]
    pub fn with_cancel(self) -> (Self, CancellationToken) {
        let token = self.token.child_token();
        let ctx = Self {
            deadline: self.deadline,
            token: token.clone(),
        };
        (ctx, token)
    }

    /// The deadline, if any
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Time left before the deadline; `None` when there is no deadline
    #[must_use]
    pub fn remaining(&self) -> Option<Duration> {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
    }

    /// Why the context is done, or `None` while it is still live
    #[must_use]
    pub fn err(&self) -> Option<ProbeError> {
        if self.token.is_cancelled() {
            return Some(ProbeError::Canceled);
        }
        match self.deadline {
            Some(deadline) if Instant::now() >= deadline => Some(ProbeError::DeadlineExceeded),
            _ => None,
        }
    }

    /// Drive `fut` until it completes or the context is done
    ///
    /// When the context wins, `fut` is dropped before returning so anything it
    /// owns is released.
    pub async fn run<T, F>(&self, fut: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        if let Some(err) = self.err() {
            return Err(err);
        }

        let expired = async {
            match self.deadline {
                Some(deadline) => sleep_until(deadline).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            biased;
            () = self.token.cancelled() => Err(ProbeError::Canceled),
            () = expired => Err(ProbeError::DeadlineExceeded),
            res = fut => res,
        }
    }
}

impl Default for Context {
    fn default() -> Self {
        Self::background()
    }
}
