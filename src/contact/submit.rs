//! Submission lifecycle.
//!
//! Delivery runs on a worker thread and reports back over a channel; the
//! UI polls [`Submission::poll`] once per frame. While a submission is in
//! flight the submit control is disabled and further submits are rejected,
//! never queued. There is no cancel path.

use std::fmt;
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::time::Duration;

use super::ContactMessage;

pub const SENT_MESSAGE: &str = "Message sent successfully! I'll get back to you soon.";
pub const FAILED_MESSAGE: &str = "Failed to send message. Please try again.";

/// Delivery backend for contact messages (email relay, ticketing API, ...).
pub trait Submitter: Send + Sync {
    fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmitError {
    pub message: String,
}

impl SubmitError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for SubmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "submission failed: {}", self.message)
    }
}

impl std::error::Error for SubmitError {}

/// Logs the message and reports success after an optional delay.
/// Stands in for a real backend in the desktop build.
#[derive(Debug, Clone, Default)]
pub struct LogSubmitter {
    pub delay: Duration,
}

impl Submitter for LogSubmitter {
    fn submit(&self, message: &ContactMessage) -> Result<(), SubmitError> {
        if !self.delay.is_zero() {
            std::thread::sleep(self.delay);
        }
        log::info!(
            "Contact message from {} <{}>: {} chars",
            message.name,
            message.email,
            message.message.chars().count()
        );
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionStatus {
    Idle,
    Sending,
    Sent,
    Failed(SubmitError),
}

/// Tracks at most one in-flight submission.
pub struct Submission {
    status: SubmissionStatus,
    rx: Option<Receiver<Result<(), SubmitError>>>,
}

impl Default for Submission {
    fn default() -> Self {
        Self::new()
    }
}

impl Submission {
    pub fn new() -> Self {
        Self {
            status: SubmissionStatus::Idle,
            rx: None,
        }
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmissionStatus::Sending
    }

    /// Hand `message` to `submitter` on a worker thread. `wake` runs on
    /// that thread once the result is ready (egui: `ctx.request_repaint`).
    ///
    /// Returns `false` without doing anything if a submission is already
    /// in flight.
    pub fn start<F>(&mut self, message: ContactMessage, submitter: Arc<dyn Submitter>, wake: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if self.is_sending() {
            log::debug!("Submit ignored: already sending");
            return false;
        }

        let (tx, rx) = mpsc::channel();
        self.rx = Some(rx);
        self.status = SubmissionStatus::Sending;

        std::thread::spawn(move || {
            let result = submitter.submit(&message);
            let _ = tx.send(result);
            wake();
        });
        true
    }

    /// Collect a finished result. Returns it exactly once.
    pub fn poll(&mut self) -> Option<Result<(), SubmitError>> {
        let rx = self.rx.as_ref()?;
        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Disconnected) => Err(SubmitError::new("worker exited without a result")),
        };
        self.rx = None;
        self.status = match &result {
            Ok(()) => SubmissionStatus::Sent,
            Err(e) => {
                log::warn!("{}", e);
                SubmissionStatus::Failed(e.clone())
            }
        };
        Some(result)
    }

    /// Block until the in-flight submission finishes.
    pub fn wait(&mut self) -> Option<Result<(), SubmitError>> {
        let rx = self.rx.take()?;
        let result = rx
            .recv()
            .unwrap_or_else(|_| Err(SubmitError::new("worker exited without a result")));
        self.status = match &result {
            Ok(()) => SubmissionStatus::Sent,
            Err(e) => SubmissionStatus::Failed(e.clone()),
        };
        Some(result)
    }
}


#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;

    fn message() -> ContactMessage {
        ContactMessage {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            subject: None,
            message: "hello".into(),
        }
    }

    #[test]
    fn second_submit_rejected_while_sending() {
        let gate = Arc::new(GatedSubmitter::default());
        let mut sub = Submission::new();

        assert!(sub.start(message(), gate.clone(), || {}));
        assert!(sub.is_sending());
        assert!(!sub.start(message(), gate.clone(), || {}));
        assert_eq!(sub.poll(), None);

        gate.release();
        assert_eq!(sub.wait(), Some(Ok(())));
        assert_eq!(sub.status(), &SubmissionStatus::Sent);
        assert!(sub.start(message(), gate, || {}));
    }

    #[test]
    fn failure_is_reported_once() {
        let mut sub = Submission::new();
        sub.start(message(), Arc::new(FailingSubmitter), || {});
        let result = sub.wait().unwrap();
        assert_eq!(result, Err(SubmitError::new("relay unavailable")));
        assert!(matches!(sub.status(), SubmissionStatus::Failed(_)));
        assert_eq!(sub.poll(), None);
    }

    #[test]
    fn wake_called_from_worker() {
        let (tx, rx) = mpsc::channel();
        let mut sub = Submission::new();
        sub.start(message(), Arc::new(LogSubmitter::default()), move || {
            let _ = tx.send(());
        });
        rx.recv_timeout(Duration::from_secs(5)).unwrap();
        assert_eq!(sub.poll(), Some(Ok(())));
    }
}
