// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Contact and newsletter forms.
//!
//! Forms only validate their fields and signal a submission. Delivering the
//! message is left to whatever mail service replaces the log line.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Message => "message",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    #[error("Please fill in your {0}")]
    MissingField(Field),

    #[error("'{0}' is not a valid email address")]
    InvalidEmail(String),
}

/// A validated message, ready to hand to a mail service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub name: String,
    pub email: String,
    pub message: String,
}

/// Loose address check: one `@` with text on both sides and a dotted domain.
pub fn validate_email(email: &str) -> Result<(), ContactError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ContactError::MissingField(Field::Email));
    }
    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.split('.').count() >= 2
                && domain.split('.').all(|part| !part.is_empty())
        }
        None => false,
    };
    if valid {
        Ok(())
    } else {
        Err(ContactError::InvalidEmail(email.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum FormState {
    Editing,
    Sent { at: Instant },
}

#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub message: String,
    state: FormState,
    error: Option<ContactError>,
    reset_after: Duration,
}

impl ContactForm {
    pub fn new(reset_after: Duration) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            state: FormState::Editing,
            error: None,
            reset_after,
        }
    }

    pub fn validate(&self) -> Result<Submission, ContactError> {
        if self.name.trim().is_empty() {
            return Err(ContactError::MissingField(Field::Name));
        }
        validate_email(&self.email)?;
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingField(Field::Message));
        }
        Ok(Submission {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            message: self.message.trim().to_string(),
        })
    }

    /// Validate and, on success, enter the "sent" state.
    pub fn submit(&mut self, now: Instant) -> Option<Submission> {
        if self.is_sent() {
            return None;
        }
        match self.validate() {
            Ok(submission) => {
                log::info!(
                    "Contact form submitted by {} <{}> ({} chars)",
                    submission.name,
                    submission.email,
                    submission.message.len()
                );
                self.error = None;
                self.state = FormState::Sent { at: now };
                Some(submission)
            }
            Err(e) => {
                log::debug!("Contact form rejected: {}", e);
                self.error = Some(e);
                None
            }
        }
    }

    /// Clear the form once the confirmation has been shown long enough.
    /// Returns true when the form was reset.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.state {
            FormState::Sent { at } if now.saturating_duration_since(at) >= self.reset_after => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                self.state = FormState::Editing;
                true
            }
            _ => false,
        }
    }

    pub fn is_sent(&self) -> bool {
        matches!(self.state, FormState::Sent { .. })
    }

    pub fn error(&self) -> Option<&ContactError> {
        self.error.as_ref()
    }

    /// Time left before the confirmation is cleared.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        match self.state {
            FormState::Sent { at } => {
                Some(self.reset_after.saturating_sub(now.saturating_duration_since(at)))
            }
            FormState::Editing => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct NewsletterForm {
    pub email: String,
    subscribed: Vec<String>,
    error: Option<ContactError>,
}

impl NewsletterForm {
    pub fn subscribe(&mut self) -> bool {
        match validate_email(&self.email) {
            Ok(()) => {
                let email = self.email.trim().to_string();
                log::info!("Newsletter subscription for {}", email);
                if !self.subscribed.contains(&email) {
                    self.subscribed.push(email);
                }
                self.email.clear();
                self.error = None;
                true
            }
            Err(e) => {
                self.error = Some(e);
                false
            }
        }
    }

    pub fn subscribed(&self) -> &[String] {
        &self.subscribed
    }

    pub fn error(&self) -> Option<&ContactError> {
        self.error.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        let mut form = ContactForm::new(Duration::from_secs(3));
        form.name = "Ada".to_string();
        form.email = "ada@example.com".to_string();
        form.message = "Booking for March".to_string();
        form
    }

    #[test]
    fn test_blank_fields_are_rejected_in_order() {
        let mut form = filled();
        form.name = "   ".to_string();
        form.message.clear();
        assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Name)));

        form.name = "Ada".to_string();
        assert_eq!(form.validate(), Err(ContactError::MissingField(Field::Message)));
    }

    #[test]
    fn test_email_validation() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email(" a@b.co ").is_ok());
        assert_eq!(
            validate_email(""),
            Err(ContactError::MissingField(Field::Email))
        );
        for bad in ["ab.co", "@b.co", "a@b", "a@b.", "a@@b.co", "a@.co"] {
            assert!(validate_email(bad).is_err(), "{} should be rejected", bad);
        }
    }

    #[test]
    fn test_submit_then_reset() {
        let mut form = filled();
        let now = Instant::now();

        let submission = form.submit(now).unwrap();
        assert_eq!(submission.name, "Ada");
        assert!(form.is_sent());
        assert!(form.submit(now).is_none());

        assert!(!form.tick(now + Duration::from_secs(2)));
        assert!(form.is_sent());

        assert!(form.tick(now + Duration::from_secs(3)));
        assert!(!form.is_sent());
        assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    }

    #[test]
    fn test_failed_submit_keeps_fields() {
        let mut form = filled();
        form.email = "not-an-address".to_string();
        assert!(form.submit(Instant::now()).is_none());
        assert!(!form.is_sent());
        assert_eq!(form.name, "Ada");
        assert!(matches!(form.error(), Some(ContactError::InvalidEmail(_))));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            ContactError::MissingField(Field::Message).to_string(),
            "Please fill in your message"
        );
    }

    #[test]
    fn test_newsletter_deduplicates() {
        let mut form = NewsletterForm::default();
        form.email = "fan@example.com".to_string();
        assert!(form.subscribe());
        form.email = "fan@example.com ".to_string();
        assert!(form.subscribe());
        assert_eq!(form.subscribed(), ["fan@example.com".to_string()]);

        form.email = "nope".to_string();
        assert!(!form.subscribe());
        assert!(form.error().is_some());
    }
}
