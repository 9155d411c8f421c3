//! Contact form fields and the submission lifecycle.
//!
//! DESIGN
//! ======
//! `ContactFlow` is a synchronous state machine. `submit` drives one attempt
//! through it: `begin`, the relay call, `complete`, then `expire` scheduled
//! after `AUTO_DISMISS_MS`. The flow is reached through `FlowCell`, so the
//! component runs it against its signal and tests against a plain cell.
//! Every attempt gets an `AttemptId`, and completion and
//! expiry only apply to the attempt that is current, so a late auto-reset
//! from an earlier attempt cannot clear the status of a newer one.
//!
//! ERROR HANDLING
//! ==============
//! Validation failures change no state; `ContactForm::first_invalid` names
//! the offending field so the form can flag it. Relay failures become
//! `SubmissionState::Failed` with a user-facing reason and keep the form
//! contents for a manual retry.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use leptos::prelude::{RwSignal, Update as _};

use crate::net::relay::{ContactMessage, Relay, RelayError};
use crate::util::task::TaskGuard;

/// Time a success or failure banner stays up before returning to idle.
pub const AUTO_DISMISS_MS: u32 = 5000;

pub const REQUIRED_REASON: &str = "Please fill out this field.";
pub const EMAIL_REASON: &str = "Please enter a valid email address.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    /// Form order.
    pub const ALL: [Self; 4] = [Self::Name, Self::Email, Self::Subject, Self::Message];

    /// Value of the control's `name` attribute.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Subject => "subject",
            Self::Message => "message",
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    #[must_use]
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Subject => self.subject = value,
            ContactField::Message => self.message = value,
        }
    }

    /// First field, in form order, that blocks submission, with the reason
    /// to show on it. Whitespace-only values count as empty.
    #[must_use]
    pub fn first_invalid(&self) -> Option<(ContactField, &'static str)> {
        ContactField::ALL.into_iter().find_map(|field| {
            let value = self.field(field).trim();
            if value.is_empty() {
                Some((field, REQUIRED_REASON))
            } else if field == ContactField::Email && !is_plausible_email(value) {
                Some((field, EMAIL_REASON))
            } else {
                None
            }
        })
    }

    /// Validate and build the relay payload with every field trimmed.
    #[must_use]
    pub fn to_message(&self) -> Option<ContactMessage> {
        if self.first_invalid().is_some() {
            return None;
        }
        Some(ContactMessage {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            subject: self.subject.trim().to_owned(),
            message: self.message.trim().to_owned(),
        })
    }
}

fn is_plausible_email(email: &str) -> bool {
    match email.split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Succeeded,
    Failed(String),
}

/// Identifies one submission attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AttemptId(u64);

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFlow {
    form: ContactForm,
    state: SubmissionState,
    attempt: u64,
}

impl ContactFlow {
    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    #[must_use]
    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    pub fn set_field(&mut self, field: ContactField, value: String) {
        self.form.set_field(field, value);
    }

    /// Start an attempt: `Sending`, plus the payload to hand to the relay.
    ///
    /// Returns `None` without any state change when a submission is already
    /// in flight or the form does not validate.
    pub fn begin(&mut self) -> Option<(AttemptId, ContactMessage)> {
        if self.is_sending() {
            return None;
        }
        let message = self.form.to_message()?;
        self.attempt += 1;
        self.state = SubmissionState::Sending;
        Some((AttemptId(self.attempt), message))
    }

    /// Apply the relay outcome. Returns `false` if `attempt` is stale or
    /// the flow is not sending.
    pub fn complete(&mut self, attempt: AttemptId, outcome: Result<(), RelayError>) -> bool {
        if !self.is_current(attempt) || !self.is_sending() {
            return false;
        }
        match outcome {
            Ok(()) => {
                self.state = SubmissionState::Succeeded;
                self.form = ContactForm::default();
            }
            Err(err) => self.state = SubmissionState::Failed(err.user_reason()),
        }
        true
    }

    /// Auto-dismiss after `AUTO_DISMISS_MS`. Only a settled state of the
    /// same attempt returns to `Idle`.
    pub fn expire(&mut self, attempt: AttemptId) -> bool {
        if !self.is_current(attempt) || !self.is_settled() {
            return false;
        }
        self.state = SubmissionState::Idle;
        true
    }

    /// Manually dismiss a success or failure banner.
    pub fn dismiss(&mut self) {
        if self.is_settled() {
            self.state = SubmissionState::Idle;
        }
    }

    fn is_current(&self, attempt: AttemptId) -> bool {
        attempt.0 == self.attempt
    }

    fn is_settled(&self) -> bool {
        matches!(self.state, SubmissionState::Succeeded | SubmissionState::Failed(_))
    }
}

/// Shared access to a `ContactFlow`. Returns `None` once the owner is gone.
pub trait FlowCell: Clone + 'static {
    fn with_flow<T>(&self, f: impl FnOnce(&mut ContactFlow) -> T) -> Option<T>;
}

impl FlowCell for RwSignal<ContactFlow> {
    fn with_flow<T>(&self, f: impl FnOnce(&mut ContactFlow) -> T) -> Option<T> {
        self.try_update(f)
    }
}

/// Run one submission attempt end to end.
///
/// Starts the attempt, awaits `relay`, applies the outcome, and hands
/// `schedule` the auto-dismiss callback with its delay. Nothing is applied
/// after the relay returns if `guard` was cancelled meanwhile. Returns the
/// attempt id, or `None` when the flow refused to start (already sending or
/// invalid form).
pub async fn submit<F, R, S>(flow: F, relay: &R, guard: &TaskGuard, schedule: S) -> Option<AttemptId>
where
    F: FlowCell,
    R: Relay,
    S: FnOnce(u32, Box<dyn FnOnce()>),
{
    let (attempt, message) = flow.with_flow(ContactFlow::begin).flatten()?;

    let outcome = relay.send_message(&message).await;
    #[cfg(feature = "hydrate")]
    match &outcome {
        Ok(()) => log::info!("contact message delivered"),
        Err(e) => log::warn!("contact message failed: {e}"),
    }
    if !guard.is_alive() {
        return Some(attempt);
    }

    flow.with_flow(|f| f.complete(attempt, outcome));
    let expiring = flow.clone();
    schedule(
        AUTO_DISMISS_MS,
        Box::new(move || {
            expiring.with_flow(|f| f.expire(attempt));
        }),
    );
    Some(attempt)
}
