//! Contact form record, validation, and status-message lifecycle.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission never leaves the browser. A valid submission clears the form
//! and shows a success notice that expires after [`SUCCESS_CLEAR_DELAY`].
//!
//! DESIGN
//! ======
//! The expiry timer lives in the component; this module only hands out a
//! [`NoticeTicket`] per success. Expiring a ticket clears the notice only if
//! it is still the current one, so a timer from an earlier submission cannot
//! clear a newer message.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::time::Duration;

use crate::util::email::is_valid_email;

/// Delay before a success notice clears itself.
pub const SUCCESS_CLEAR_DELAY: Duration = Duration::from_millis(6000);

pub const SUCCESS_MESSAGE: &str = "Thanks! Your message has been sent. We'll get back to you soon.";

/// Locally recovered rejection of form input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A field is empty after trimming.
    #[error("Please fill in all fields.")]
    MissingField,

    /// The email does not match the address pattern.
    #[error("Please provide a valid email address.")]
    BadEmail,
}

impl ValidationError {
    /// Stable machine-readable kind.
    pub fn kind(self) -> &'static str {
        match self {
            Self::MissingField => "missing-field",
            Self::BadEmail => "bad-email",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Message,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactRecord {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Message => self.message = value,
        }
    }

    /// Check completeness first, then the email shape.
    ///
    /// # Errors
    ///
    /// [`ValidationError::MissingField`] if any field is blank,
    /// [`ValidationError::BadEmail`] if the email fails the pattern.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let blank = [&self.name, &self.email, &self.message]
            .iter()
            .any(|value| value.trim().is_empty());
        if blank {
            return Err(ValidationError::MissingField);
        }
        if !is_valid_email(&self.email) {
            return Err(ValidationError::BadEmail);
        }
        Ok(())
    }
}

/// The single message shown under the submit button.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormStatus {
    #[default]
    Idle,
    Error(ValidationError),
    Success,
}

impl FormStatus {
    pub fn error_text(self) -> String {
        match self {
            Self::Error(err) => err.to_string(),
            Self::Idle | Self::Success => String::new(),
        }
    }

    pub fn success_text(self) -> &'static str {
        match self {
            Self::Success => SUCCESS_MESSAGE,
            Self::Idle | Self::Error(_) => "",
        }
    }
}

/// Handle for one scheduled success-notice expiry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NoticeTicket(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub record: ContactRecord,
    pub status: FormStatus,
    notice_seq: u64,
    pending_notice: Option<u64>,
}

impl ContactFormState {
    pub fn edit(&mut self, field: ContactField, value: String) {
        self.record.set(field, value);
    }

    /// Validate and "send" the current record.
    ///
    /// Any earlier message is cleared first. On success the record is reset
    /// and the returned ticket must be expired after [`SUCCESS_CLEAR_DELAY`].
    ///
    /// # Errors
    ///
    /// Returns the validation failure, which is also stored in `status`. The
    /// record is left untouched.
    pub fn submit(&mut self) -> Result<NoticeTicket, ValidationError> {
        self.status = FormStatus::Idle;
        self.pending_notice = None;

        if let Err(err) = self.record.validate() {
            log::debug!("contact form rejected: {}", err.kind());
            self.status = FormStatus::Error(err);
            return Err(err);
        }

        self.record = ContactRecord::default();
        self.status = FormStatus::Success;
        self.notice_seq += 1;
        self.pending_notice = Some(self.notice_seq);
        log::debug!("contact form accepted; notice {}", self.notice_seq);
        Ok(NoticeTicket(self.notice_seq))
    }

    /// Clear the success notice if `ticket` is still the pending one.
    ///
    /// Returns `true` when the notice was cleared.
    pub fn expire_notice(&mut self, ticket: NoticeTicket) -> bool {
        if self.pending_notice != Some(ticket.0) {
            return false;
        }
        self.pending_notice = None;
        if self.status == FormStatus::Success {
            self.status = FormStatus::Idle;
        }
        true
    }

    /// Drop the pending expiry without touching the visible message.
    pub fn cancel_notice(&mut self) {
        self.pending_notice = None;
    }

    pub fn pending_notice(&self) -> Option<NoticeTicket> {
        self.pending_notice.map(NoticeTicket)
    }
}
