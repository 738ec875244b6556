//! Contact form state and the simulated delivery.
//!
//! Nothing is sent anywhere: submitting waits a fixed delay on a tokio task
//! and then always reports success back to the UI loop.

use std::time::{Duration, Instant};

use tokio::sync::mpsc;

/// Pause before a submitted message is reported as sent
pub const SUBMIT_DELAY: Duration = Duration::from_millis(1500);
/// How long the success banner stays up
pub const SUCCESS_DISPLAY: Duration = Duration::from_millis(3000);
/// How long the "copied" mark stays next to a contact card
pub const COPY_FEEDBACK: Duration = Duration::from_millis(2000);

/// Form fields, in focus order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub const ALL: [FormField; 4] = [
        FormField::Name,
        FormField::Email,
        FormField::Subject,
        FormField::Message,
    ];

    pub fn label_key(&self) -> &'static str {
        match self {
            FormField::Name => "contact.name",
            FormField::Email => "contact.email",
            FormField::Subject => "contact.subject",
            FormField::Message => "contact.message",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email@example.com",
            FormField::Subject => "Project discussion",
            FormField::Message => "Tell me about your project...",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Subject,
            FormField::Subject => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Subject => FormField::Email,
            FormField::Message => FormField::Subject,
        }
    }
}

/// Why a field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIssue {
    Required,
    InvalidEmail,
}

impl FieldIssue {
    pub fn message_key(&self) -> &'static str {
        match self {
            FieldIssue::Required => "contact.required",
            FieldIssue::InvalidEmail => "contact.invalidEmail",
        }
    }
}

/// Submission lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Sending,
    Sent { at: Instant },
}

/// Message sent back by the delivery task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Delivered;

#[derive(Debug, Default)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub focus: FormField,
    pub status: SubmitStatus,
    pub issues: Vec<(FormField, FieldIssue)>,
}

impl ContactForm {
    pub fn value(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn value_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn push_char(&mut self, c: char) {
        let field = self.focus;
        self.value_mut(field).push(c);
        self.issues.retain(|(f, _)| *f != field);
    }

    pub fn backspace(&mut self) {
        let field = self.focus;
        self.value_mut(field).pop();
    }

    pub fn issue_for(&self, field: FormField) -> Option<FieldIssue> {
        self.issues
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, issue)| *issue)
    }

    /// All fields are required; the email needs an `@` followed by a dotted domain.
    pub fn validate(&self) -> Vec<(FormField, FieldIssue)> {
        let mut issues = Vec::new();
        for field in FormField::ALL {
            if self.value(field).trim().is_empty() {
                issues.push((field, FieldIssue::Required));
            }
        }
        let email = self.email.trim();
        if !email.is_empty() && !is_plausible_email(email) {
            issues.push((FormField::Email, FieldIssue::InvalidEmail));
        }
        issues
    }

    pub fn is_sending(&self) -> bool {
        self.status == SubmitStatus::Sending
    }

    /// Validate and, when clean, switch to `Sending`. Returns whether the
    /// caller should start delivery.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_sending() {
            return false;
        }
        self.issues = self.validate();
        if !self.issues.is_empty() {
            return false;
        }
        self.status = SubmitStatus::Sending;
        true
    }

    /// Delivery finished: reset the fields and show the success banner.
    pub fn complete(&mut self, now: Instant) {
        *self = ContactForm {
            status: SubmitStatus::Sent { at: now },
            ..ContactForm::default()
        };
    }

    /// Drop the success banner once it has been shown long enough.
    pub fn expire_success(&mut self, now: Instant) {
        if let SubmitStatus::Sent { at } = self.status {
            if now.duration_since(at) >= SUCCESS_DISPLAY {
                self.status = SubmitStatus::Idle;
            }
        }
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain
                    .split_once('.')
                    .is_some_and(|(host, tld)| !host.is_empty() && !tld.is_empty())
        }
        None => false,
    }
}

/// Spawn the simulated delivery. It always succeeds after `delay`.
pub fn spawn_delivery(tx: mpsc::UnboundedSender<Delivered>, delay: Duration) {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(Delivered).is_err() {
            tracing::debug!("contact form closed before delivery finished");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            subject: "Hello".to_string(),
            message: "Let's build something".to_string(),
            ..ContactForm::default()
        }
    }

    #[test]
    fn test_validate_all_required() {
        let form = ContactForm::default();
        let issues = form.validate();
        assert_eq!(issues.len(), 4);
        assert!(issues.iter().all(|(_, issue)| *issue == FieldIssue::Required));
    }

    #[test]
    fn test_validate_email_shape() {
        let mut form = filled();
        assert!(form.validate().is_empty());

        for bad in ["ada", "ada@", "@example.com", "ada@example", "a@b@c.com", "ada@.com"] {
            form.email = bad.to_string();
            assert_eq!(
                form.validate(),
                vec![(FormField::Email, FieldIssue::InvalidEmail)],
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_typing_edits_focused_field_and_clears_issue() {
        let mut form = ContactForm::default();
        form.begin_submit();
        assert_eq!(form.issue_for(FormField::Name), Some(FieldIssue::Required));

        form.push_char('A');
        form.push_char('x');
        form.backspace();
        assert_eq!(form.name, "A");
        assert_eq!(form.issue_for(FormField::Name), None);
        assert_eq!(form.issue_for(FormField::Email), Some(FieldIssue::Required));
    }

    #[test]
    fn test_focus_cycles() {
        assert_eq!(FormField::Message.next(), FormField::Name);
        assert_eq!(FormField::Name.prev(), FormField::Message);
    }

    #[test]
    fn test_submit_lifecycle() {
        let mut form = filled();
        assert!(form.begin_submit());
        assert!(form.is_sending());
        assert!(!form.begin_submit(), "second submit while sending is ignored");

        let now = Instant::now();
        form.complete(now);
        assert_eq!(form.status, SubmitStatus::Sent { at: now });
        assert!(form.name.is_empty());

        form.expire_success(now + Duration::from_millis(100));
        assert!(matches!(form.status, SubmitStatus::Sent { .. }));
        form.expire_success(now + SUCCESS_DISPLAY);
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut form = ContactForm::default();
        assert!(!form.begin_submit());
        assert_eq!(form.status, SubmitStatus::Idle);
    }

    #[tokio::test]
    async fn test_spawn_delivery_reports_success() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        spawn_delivery(tx, Duration::from_millis(10));
        assert_eq!(rx.recv().await, Some(Delivered));
    }
}
