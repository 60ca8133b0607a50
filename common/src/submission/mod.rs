//! Submission state machine shared by the brochure and job application
//! flows, plus the seams through which the flows reach the browser.
//!
//! ```text
//! Idle -> Validating -> Rejected(error)
//!                    -> Submitting -> Succeeded | Failed(error)
//! ```
//!
//! Terminal phases go back to `Idle` on the next trigger or on [`SubmissionGate::reset`].

pub mod application;
pub mod lead;

use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use async_trait::async_trait;

use crate::errors::{SubmissionError, ValidationError};

/// A detached unit of work on the single-threaded event loop.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Runs a future to completion without the caller awaiting it.
pub trait Spawner {
    fn spawn(&self, task: LocalTask);
}

/// Fixed-duration suspension.
#[async_trait(?Send)]
pub trait Timer {
    async fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Rejected(ValidationError),
    Submitting,
    Succeeded,
    Failed(SubmissionError),
}

impl Phase {
    pub fn is_busy(&self) -> bool {
        matches!(self, Phase::Validating | Phase::Submitting)
    }
}

/// Guards one flow instance so at most one attempt is in flight.
#[derive(Debug, Default)]
pub struct SubmissionGate {
    phase: RefCell<Phase>,
}

impl SubmissionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        self.phase.borrow().clone()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.borrow().is_busy()
    }

    /// Enters `Validating` unless an attempt is already running.
    pub fn try_begin(&self) -> bool {
        let mut phase = self.phase.borrow_mut();
        if phase.is_busy() {
            return false;
        }
        *phase = Phase::Validating;
        true
    }

    pub fn reject(&self, error: ValidationError) {
        self.set(Phase::Rejected(error));
    }

    pub fn start(&self) {
        self.set(Phase::Submitting);
    }

    pub fn succeed(&self) {
        self.set(Phase::Succeeded);
    }

    pub fn fail(&self, error: SubmissionError) {
        self.set(Phase::Failed(error));
    }

    pub fn reset(&self) {
        self.set(Phase::Idle);
    }

    fn set(&self, next: Phase) {
        *self.phase.borrow_mut() = next;
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Success,
    Error,
}

/// A message shown next to a form for a fixed time without blocking it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub duration: Duration,
}

impl Notice {
    pub fn info(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
            duration,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gate_refuses_a_second_attempt_while_busy() {
        let gate = SubmissionGate::new();
        assert!(gate.try_begin());
        assert!(!gate.try_begin());
        gate.start();
        assert!(!gate.try_begin());
        assert_eq!(gate.phase(), Phase::Submitting);
    }

    #[test]
    fn terminal_phases_accept_the_next_trigger() {
        let gate = SubmissionGate::new();
        assert!(gate.try_begin());
        gate.reject(ValidationError::MissingFields);
        assert!(!gate.is_busy());
        assert!(gate.try_begin());
        gate.start();
        gate.fail(SubmissionError::Timeout);
        assert_eq!(gate.phase(), Phase::Failed(SubmissionError::Timeout));
        assert!(gate.try_begin());
        gate.start();
        gate.succeed();
        gate.reset();
        assert_eq!(gate.phase(), Phase::Idle);
    }
}
