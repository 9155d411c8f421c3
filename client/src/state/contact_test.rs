use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::executor::block_on;

use super::*;
use crate::net::relay::FALLBACK_FAILURE_REASON;

/// Relay stub that answers with a scripted outcome and counts calls.
struct StubRelay {
    outcome: Result<(), RelayError>,
    calls: Cell<usize>,
    last: RefCell<Option<ContactMessage>>,
}

impl StubRelay {
    fn new(outcome: Result<(), RelayError>) -> Self {
        Self { outcome, calls: Cell::new(0), last: RefCell::new(None) }
    }
}

impl Relay for StubRelay {
    async fn send_message(&self, message: &ContactMessage) -> Result<(), RelayError> {
        self.calls.set(self.calls.get() + 1);
        *self.last.borrow_mut() = Some(message.clone());
        self.outcome.clone()
    }
}

#[derive(Clone, Default)]
struct SharedFlow(Rc<RefCell<ContactFlow>>);

impl FlowCell for SharedFlow {
    fn with_flow<T>(&self, f: impl FnOnce(&mut ContactFlow) -> T) -> Option<T> {
        Some(f(&mut self.0.borrow_mut()))
    }
}

type Timer = (u32, Box<dyn FnOnce()>);

/// Flow cell plus a manual timer queue standing in for the browser clock.
struct Harness {
    flow: SharedFlow,
    guard: TaskGuard,
    timers: Rc<RefCell<Vec<Timer>>>,
}

impl Harness {
    fn filled() -> Self {
        let flow = SharedFlow::default();
        *flow.0.borrow_mut() = filled_flow();
        Self { flow, guard: TaskGuard::new(), timers: Rc::default() }
    }

    fn submit(&self, relay: &StubRelay) -> Option<AttemptId> {
        let timers = Rc::clone(&self.timers);
        block_on(submit(self.flow.clone(), relay, &self.guard, move |delay_ms, expire| {
            timers.borrow_mut().push((delay_ms, expire));
        }))
    }

    /// Fire every pending timer, returning their delays.
    fn elapse(&self) -> Vec<u32> {
        let pending: Vec<Timer> = self.timers.borrow_mut().drain(..).collect();
        pending
            .into_iter()
            .map(|(delay_ms, expire)| {
                expire();
                delay_ms
            })
            .collect()
    }

    fn state(&self) -> SubmissionState {
        self.flow.0.borrow().state().clone()
    }

    fn form(&self) -> ContactForm {
        self.flow.0.borrow().form().clone()
    }

    fn with<T>(&self, f: impl FnOnce(&mut ContactFlow) -> T) -> T {
        f(&mut self.flow.0.borrow_mut())
    }
}

fn filled_flow() -> ContactFlow {
    let mut flow = ContactFlow::default();
    flow.set_field(ContactField::Name, "A".to_owned());
    flow.set_field(ContactField::Email, "a@b.com".to_owned());
    flow.set_field(ContactField::Subject, "S".to_owned());
    flow.set_field(ContactField::Message, "M".to_owned());
    flow
}

/// Relay that checks the flow is `Sending` while the request is in flight.
struct ObservingRelay {
    flow: SharedFlow,
    seen: RefCell<Option<SubmissionState>>,
}

impl Relay for ObservingRelay {
    async fn send_message(&self, _message: &ContactMessage) -> Result<(), RelayError> {
        *self.seen.borrow_mut() = Some(self.flow.0.borrow().state().clone());
        Ok(())
    }
}

// =============================================================
// Success path
// =============================================================

#[test]
fn success_clears_form_then_expires_to_idle() {
    let relay = StubRelay::new(Ok(()));
    let h = Harness::filled();
    assert_eq!(h.state(), SubmissionState::Idle);

    assert!(h.submit(&relay).is_some());
    assert_eq!(h.state(), SubmissionState::Succeeded);
    assert_eq!(h.form(), ContactForm::default());
    assert_eq!(relay.calls.get(), 1);
    assert_eq!(
        relay.last.borrow().as_ref().map(|m| m.email.clone()),
        Some("a@b.com".to_owned())
    );

    assert_eq!(h.elapse(), vec![AUTO_DISMISS_MS]);
    assert_eq!(h.state(), SubmissionState::Idle);
}

#[test]
fn flow_is_sending_while_relay_is_in_flight() {
    let h = Harness::filled();
    let relay = ObservingRelay { flow: h.flow.clone(), seen: RefCell::new(None) };
    let timers = Rc::clone(&h.timers);
    block_on(submit(h.flow.clone(), &relay, &h.guard, move |delay_ms, expire| {
        timers.borrow_mut().push((delay_ms, expire));
    }));
    assert_eq!(*relay.seen.borrow(), Some(SubmissionState::Sending));
    assert_eq!(h.state(), SubmissionState::Succeeded);
}

// =============================================================
// Failure path
// =============================================================

#[test]
fn failure_keeps_form_then_expires_to_idle() {
    let relay = StubRelay::new(Err(RelayError::Rejected { status: 400, body: "x".to_owned() }));
    let h = Harness::filled();

    h.submit(&relay).unwrap();
    assert_eq!(h.state(), SubmissionState::Failed("x".to_owned()));
    assert_eq!(&h.form(), filled_flow().form());

    assert_eq!(h.elapse(), vec![AUTO_DISMISS_MS]);
    assert_eq!(h.state(), SubmissionState::Idle);
    assert_eq!(&h.form(), filled_flow().form());
}

#[test]
fn opaque_failure_uses_fallback_reason() {
    let relay = StubRelay::new(Err(RelayError::Transport("offline".to_owned())));
    let h = Harness::filled();
    h.submit(&relay);
    assert_eq!(h.state(), SubmissionState::Failed(FALLBACK_FAILURE_REASON.to_owned()));
}

#[test]
fn retry_after_failure_is_independent_attempt() {
    let failing = StubRelay::new(Err(RelayError::Unavailable));
    let h = Harness::filled();
    let first = h.submit(&failing).unwrap();
    h.elapse();

    let working = StubRelay::new(Ok(()));
    let second = h.submit(&working).unwrap();
    assert_ne!(first, second);
    assert_eq!(h.state(), SubmissionState::Succeeded);
    assert_eq!(working.calls.get(), 1);
}

// =============================================================
// Sending guard
// =============================================================

#[test]
fn submit_while_sending_is_noop() {
    let relay = StubRelay::new(Ok(()));
    let h = Harness::filled();
    let (attempt, _message) = h.with(ContactFlow::begin).unwrap();
    let before = h.with(|f| f.clone());

    assert!(h.submit(&relay).is_none());
    assert_eq!(h.with(|f| f.clone()), before);
    assert_eq!(relay.calls.get(), 0);
    assert!(h.timers.borrow().is_empty());

    assert!(h.with(|f| f.complete(attempt, Ok(()))));
    assert_eq!(h.state(), SubmissionState::Succeeded);
}

#[test]
fn expire_while_sending_does_nothing() {
    let mut flow = filled_flow();
    let (attempt, _) = flow.begin().unwrap();
    assert!(!flow.expire(attempt));
    assert!(flow.is_sending());
}

#[test]
fn cancelled_guard_drops_late_outcome() {
    let relay = StubRelay::new(Ok(()));
    let h = Harness::filled();
    h.guard.cancel();

    assert!(h.submit(&relay).is_some());
    assert_eq!(relay.calls.get(), 1);
    assert_eq!(h.state(), SubmissionState::Sending);
    assert!(h.timers.borrow().is_empty());
}

// =============================================================
// Stale completions and timers
// =============================================================

#[test]
fn stale_auto_reset_does_not_clear_newer_attempt() {
    let failing = StubRelay::new(Err(RelayError::Rejected { status: 400, body: "x".to_owned() }));
    let h = Harness::filled();
    h.submit(&failing).unwrap();
    let stale_timers: Vec<Timer> = h.timers.borrow_mut().drain(..).collect();

    // Resubmit while the failure banner is still up.
    let working = StubRelay::new(Ok(()));
    h.submit(&working).unwrap();
    assert_eq!(h.state(), SubmissionState::Succeeded);

    for (_, expire) in stale_timers {
        expire();
    }
    assert_eq!(h.state(), SubmissionState::Succeeded);

    h.elapse();
    assert_eq!(h.state(), SubmissionState::Idle);
}

#[test]
fn stale_expire_during_newer_send_is_ignored() {
    let mut flow = filled_flow();
    let (first, _) = flow.begin().unwrap();
    assert!(flow.complete(first, Err(RelayError::Unavailable)));
    let (second, _) = flow.begin().unwrap();
    assert!(!flow.expire(first));
    assert!(flow.is_sending());
    assert!(flow.complete(second, Ok(())));
}

#[test]
fn complete_with_stale_attempt_is_ignored() {
    let mut flow = filled_flow();
    let (first, _) = flow.begin().unwrap();
    assert!(flow.complete(first, Err(RelayError::Unavailable)));
    let (second, _) = flow.begin().unwrap();
    assert!(!flow.complete(first, Ok(())));
    assert!(flow.is_sending());
    assert!(flow.complete(second, Ok(())));
}

#[test]
fn dismiss_returns_settled_state_to_idle() {
    let relay = StubRelay::new(Err(RelayError::Unavailable));
    let h = Harness::filled();
    let attempt = h.submit(&relay).unwrap();
    h.with(ContactFlow::dismiss);
    assert_eq!(h.state(), SubmissionState::Idle);
    assert!(!h.with(|f| f.expire(attempt)));
}

#[test]
fn dismiss_does_not_interrupt_sending() {
    let mut flow = filled_flow();
    flow.begin().unwrap();
    flow.dismiss();
    assert!(flow.is_sending());
}

// =============================================================
// Validation
// =============================================================

#[test]
fn invalid_form_never_reaches_relay() {
    let relay = StubRelay::new(Ok(()));
    let h = Harness::filled();
    h.with(|f| f.set_field(ContactField::Subject, "   ".to_owned()));
    assert!(h.submit(&relay).is_none());
    assert_eq!(relay.calls.get(), 0);
    assert_eq!(h.state(), SubmissionState::Idle);
}

#[test]
fn empty_field_blocks_submission() {
    for field in ContactField::ALL {
        let mut flow = filled_flow();
        flow.set_field(field, "   ".to_owned());
        assert!(flow.begin().is_none(), "{field:?} blank");
        assert_eq!(flow.state(), &SubmissionState::Idle);
    }
}

#[test]
fn whitespace_only_field_is_reported() {
    for field in ContactField::ALL {
        let mut flow = filled_flow();
        flow.set_field(field, " \t ".to_owned());
        assert_eq!(flow.form().first_invalid(), Some((field, REQUIRED_REASON)), "{field:?}");
    }
}

#[test]
fn first_invalid_follows_form_order() {
    let mut flow = filled_flow();
    flow.set_field(ContactField::Message, String::new());
    flow.set_field(ContactField::Email, "nope".to_owned());
    assert_eq!(flow.form().first_invalid(), Some((ContactField::Email, EMAIL_REASON)));
    assert_eq!(filled_flow().form().first_invalid(), None);
}

#[test]
fn malformed_email_blocks_submission() {
    for email in ["ab.com", "@b.com", "a@", "a@b@c"] {
        let mut flow = filled_flow();
        flow.set_field(ContactField::Email, email.to_owned());
        assert!(flow.begin().is_none(), "{email} accepted");
        assert_eq!(flow.form().first_invalid(), Some((ContactField::Email, EMAIL_REASON)));
    }
}

#[test]
fn payload_is_trimmed() {
    let mut flow = filled_flow();
    flow.set_field(ContactField::Name, "  Ada  ".to_owned());
    let (_, message) = flow.begin().unwrap();
    assert_eq!(message.name, "Ada");
    assert_eq!(message.subject, "S");
}

#[test]
fn field_names_match_controls() {
    let names: Vec<_> = ContactField::ALL.iter().map(|f| f.name()).collect();
    assert_eq!(names, vec!["name", "email", "subject", "message"]);
}

#[test]
fn field_accessor_round_trips() {
    let flow = filled_flow();
    assert_eq!(flow.form().field(ContactField::Name), "A");
    assert_eq!(flow.form().field(ContactField::Email), "a@b.com");
    assert_eq!(flow.form().field(ContactField::Subject), "S");
    assert_eq!(flow.form().field(ContactField::Message), "M");
}
