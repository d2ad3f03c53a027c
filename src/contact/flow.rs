//! The contact form as a whole: typed fields, validation, delivery and the
//! notifications each outcome raises.

use std::sync::Arc;
use std::time::Instant;

use super::notify::NotificationCenter;
use super::submit::{SubmissionStatus, SubmitError, Submission, Submitter, FAILED_MESSAGE, SENT_MESSAGE};
use super::{ContactForm, Field};

pub struct ContactFlow {
    form: ContactForm,
    submission: Submission,
    submitter: Arc<dyn Submitter>,
}

impl ContactFlow {
    pub fn new(submitter: Arc<dyn Submitter>) -> Self {
        Self {
            form: ContactForm::default(),
            submission: Submission::new(),
            submitter,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn field_mut(&mut self, field: Field) -> &mut String {
        self.form.field_mut(field)
    }

    pub fn is_sending(&self) -> bool {
        self.submission.is_sending()
    }

    pub fn status(&self) -> &SubmissionStatus {
        self.submission.status()
    }

    /// Validate the form and start delivery.
    ///
    /// Invalid input raises an error notification and sends nothing. A
    /// submit while one is in flight is ignored. Returns `true` when a
    /// submission was started.
    pub fn submit<F>(&mut self, notifications: &mut NotificationCenter, now: Instant, wake: F) -> bool
    where
        F: FnOnce() + Send + 'static,
    {
        if self.submission.is_sending() {
            log::debug!("Contact submit ignored: already sending");
            return false;
        }
        let message = match self.form.validate() {
            Ok(message) => message,
            Err(e) => {
                log::debug!("Contact form invalid: {}", e);
                notifications.error(e.to_string(), now);
                return false;
            }
        };
        let started = self.submission.start(message, Arc::clone(&self.submitter), wake);
        if started {
            log::info!("Contact submission started");
        }
        started
    }

    /// Collect a finished submission. Success clears the form; failure
    /// keeps it as typed. Returns `true` if a result was collected.
    pub fn poll(&mut self, notifications: &mut NotificationCenter, now: Instant) -> bool {
        let result = self.submission.poll();
        self.finish(result, notifications, now)
    }

    /// Block until the in-flight submission finishes, then handle it like
    /// [`poll`](Self::poll).
    pub fn wait(&mut self, notifications: &mut NotificationCenter, now: Instant) -> bool {
        let result = self.submission.wait();
        self.finish(result, notifications, now)
    }

    fn finish(
        &mut self,
        result: Option<Result<(), SubmitError>>,
        notifications: &mut NotificationCenter,
        now: Instant,
    ) -> bool {
        match result {
            Some(Ok(())) => {
                self.form.reset();
                notifications.success(SENT_MESSAGE, now);
                true
            }
            Some(Err(e)) => {
                log::warn!("Contact submission failed: {}", e);
                notifications.error(FAILED_MESSAGE, now);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::submit::testing::{FailingSubmitter, GatedSubmitter};
    use crate::contact::{LogSubmitter, NotificationKind};
    use std::time::Duration;

    fn filled(submitter: Arc<dyn Submitter>) -> ContactFlow {
        let mut flow = ContactFlow::new(submitter);
        *flow.field_mut(Field::Name) = "Ada".into();
        *flow.field_mut(Field::Email) = "ada@example.com".into();
        *flow.field_mut(Field::Subject) = "Hello".into();
        *flow.field_mut(Field::Message) = "Nice portfolio".into();
        flow
    }

    fn center() -> NotificationCenter {
        NotificationCenter::new(Duration::from_secs(5))
    }

    #[test]
    fn invalid_input_notifies_and_sends_nothing() {
        let mut notes = center();
        let mut flow = ContactFlow::new(Arc::new(FailingSubmitter));
        *flow.field_mut(Field::Name) = "Ada".into();

        assert!(!flow.submit(&mut notes, Instant::now(), || {}));
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
        assert!(!flow.is_sending());
        let n = notes.current().unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, "Please fill in: email, message");
        assert_eq!(flow.form().name, "Ada");

        *flow.field_mut(Field::Email) = "not-an-email".into();
        *flow.field_mut(Field::Message) = "hi".into();
        assert!(!flow.submit(&mut notes, Instant::now(), || {}));
        assert_eq!(notes.current().unwrap().message, "Please enter a valid email address");
        assert_eq!(flow.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn failure_keeps_form_contents() {
        let mut notes = center();
        let mut flow = filled(Arc::new(FailingSubmitter));
        let before = flow.form().clone();

        assert!(flow.submit(&mut notes, Instant::now(), || {}));
        assert!(flow.wait(&mut notes, Instant::now()));

        assert_eq!(flow.form(), &before);
        assert!(matches!(flow.status(), SubmissionStatus::Failed(_)));
        let n = notes.current().unwrap();
        assert_eq!(n.kind, NotificationKind::Error);
        assert_eq!(n.message, FAILED_MESSAGE);
    }

    #[test]
    fn success_clears_form() {
        let mut notes = center();
        let mut flow = filled(Arc::new(LogSubmitter::default()));

        assert!(flow.submit(&mut notes, Instant::now(), || {}));
        assert!(flow.wait(&mut notes, Instant::now()));

        assert_eq!(flow.form(), &ContactForm::default());
        assert_eq!(flow.status(), &SubmissionStatus::Sent);
        let n = notes.current().unwrap();
        assert_eq!(n.kind, NotificationKind::Success);
        assert_eq!(n.message, SENT_MESSAGE);
        assert!(!flow.poll(&mut notes, Instant::now()));
    }

    #[test]
    fn resubmit_ignored_while_sending() {
        let mut notes = center();
        let gate = Arc::new(GatedSubmitter::default());
        let mut flow = filled(gate.clone());

        assert!(flow.submit(&mut notes, Instant::now(), || {}));
        assert!(!flow.submit(&mut notes, Instant::now(), || {}));
        assert!(notes.current().is_none());
        assert!(!flow.poll(&mut notes, Instant::now()));

        gate.release();
        assert!(flow.wait(&mut notes, Instant::now()));
        assert_eq!(flow.form(), &ContactForm::default());
    }
}
