use std::collections::BTreeMap;
use std::fmt;
use std::future::Future;
use std::sync::LazyLock;
use std::time::Duration;

use rand::Rng;
use regex::Regex;
use thiserror::Error;

use crate::notice::{Notice, Severity};

/// Delay before a resolved submission flips back to [`SubmissionState::Idle`].
pub const REVERT_DELAY: Duration = Duration::from_millis(3000);

const BASE_LATENCY_MS: u64 = 2000;
const LATENCY_JITTER_MS: u64 = 1000;

const UNAVAILABLE_DOMAIN: &str = "error.com";
const TIMEOUT_DOMAIN: &str = "timeout.com";
const BLOCKED_KEYWORD: &str = "spam";

static EMAIL_SHAPE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Email, Field::Subject, Field::Message];

    pub fn id(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Subject => "subject",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactForm {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Subject => &mut self.subject,
            Field::Message => &mut self.message,
        };
        *slot = value.into();
    }

    /// Length of the message in characters, not bytes.
    pub fn message_len(&self) -> usize {
        self.message.chars().count()
    }

    /// Lowercased text after the first `@`, if any.
    pub fn email_domain(&self) -> Option<String> {
        self.email
            .split_once('@')
            .map(|(_, domain)| domain.to_lowercase())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }

    pub fn clear(&mut self, field: Field) {
        self.0.remove(&field);
    }

    fn insert(&mut self, field: Field, message: &str) {
        self.0.insert(field, message.to_string());
    }
}

/// Strips whitespace and stray byte-order marks pasted in with the text.
fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

fn check_min_len(
    errors: &mut FieldErrors,
    field: Field,
    value: &str,
    min: usize,
    required: &str,
    too_short: &str,
) {
    let trimmed = trim_input(value);
    if trimmed.is_empty() {
        errors.insert(field, required);
    } else if trimmed.chars().count() < min {
        errors.insert(field, too_short);
    }
}

/// Checks every field independently. An empty result means the form can be sent.
pub fn validate(form: &ContactForm) -> FieldErrors {
    let mut errors = FieldErrors::default();

    check_min_len(
        &mut errors,
        Field::Name,
        &form.name,
        2,
        "Name is required",
        "Name must be at least 2 characters",
    );

    if trim_input(&form.email).is_empty() {
        errors.insert(Field::Email, "Email is required");
    } else if !EMAIL_SHAPE.is_match(&form.email) {
        errors.insert(Field::Email, "Please enter a valid email address");
    }

    check_min_len(
        &mut errors,
        Field::Subject,
        &form.subject,
        5,
        "Subject is required",
        "Subject must be at least 5 characters",
    );
    check_min_len(
        &mut errors,
        Field::Message,
        &form.message,
        10,
        "Message is required",
        "Message must be at least 10 characters",
    );

    errors
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionReply {
    pub success: bool,
    pub message: String,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("The server can't handle your request right now, please try again later")]
    ServerUnavailable,
    #[error("The request timed out, please check your network connection")]
    TimedOut,
}

/// Suspends the caller for a while. The browser build backs this with a timer.
pub trait Delay {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

pub trait ContactDispatcher {
    fn dispatch(
        &self,
        form: &ContactForm,
    ) -> impl Future<Output = Result<SubmissionReply, SubmissionError>>;
}

/// Maps any sample to a latency in `[2000ms, 3000ms)`.
pub fn simulated_latency(sample: u64) -> Duration {
    Duration::from_millis(BASE_LATENCY_MS + sample % LATENCY_JITTER_MS)
}

/// Stand-in for a contact endpoint. Picks its outcome from the email domain
/// and message body after a fake network delay.
#[derive(Debug, Clone)]
pub struct SimulatedDispatcher<D> {
    delay: D,
    jitter: fn() -> u64,
}

impl<D: Delay> SimulatedDispatcher<D> {
    pub fn new(delay: D) -> Self {
        Self {
            delay,
            jitter: random_jitter,
        }
    }

    pub fn with_jitter(mut self, jitter: fn() -> u64) -> Self {
        self.jitter = jitter;
        self
    }

    pub fn outcome(form: &ContactForm) -> Result<SubmissionReply, SubmissionError> {
        match form.email_domain().as_deref() {
            Some(UNAVAILABLE_DOMAIN) => return Err(SubmissionError::ServerUnavailable),
            Some(TIMEOUT_DOMAIN) => return Err(SubmissionError::TimedOut),
            _ => {}
        }

        if form.message.to_lowercase().contains(BLOCKED_KEYWORD) {
            return Ok(SubmissionReply {
                success: false,
                message: "Suspicious content detected, please revise your message and try again"
                    .to_string(),
            });
        }

        Ok(SubmissionReply {
            success: true,
            message: "Thanks for your message! I'll get back to you within 24 hours.".to_string(),
        })
    }
}

impl<D: Delay> ContactDispatcher for SimulatedDispatcher<D> {
    async fn dispatch(&self, form: &ContactForm) -> Result<SubmissionReply, SubmissionError> {
        self.delay.sleep(simulated_latency((self.jitter)())).await;
        Self::outcome(form)
    }
}

fn random_jitter() -> u64 {
    rand::rng().random_range(0..LATENCY_JITTER_MS)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }
}

/// Identifies one scheduled revert. Only the most recently issued ticket is honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevertTicket(u64);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitDecision {
    /// A submission is already in flight.
    Ignored,
    Rejected(Notice),
    Dispatch(ContactForm),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub state: SubmissionState,
    pub notice: Notice,
    pub revert: RevertTicket,
}

#[derive(Debug, Clone, Default)]
pub struct ContactSession {
    form: ContactForm,
    errors: FieldErrors,
    state: SubmissionState,
    generation: u64,
}

impl ContactSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) {
        self.form.set(field, value);
        self.errors.clear(field);
    }

    pub fn submit(&mut self) -> SubmitDecision {
        if self.state.is_submitting() {
            return SubmitDecision::Ignored;
        }

        let errors = validate(&self.form);
        if !errors.is_empty() {
            self.errors = errors;
            return SubmitDecision::Rejected(Notice::new(
                "Validation failed",
                "Please check and correct the errors in the form",
                Severity::Destructive,
            ));
        }

        self.errors = FieldErrors::default();
        self.cancel_pending_revert();
        self.state = SubmissionState::Submitting;
        SubmitDecision::Dispatch(self.form.clone())
    }

    /// Applies a dispatcher result. Returns `None` when nothing is in flight.
    pub fn resolve(
        &mut self,
        outcome: Result<SubmissionReply, SubmissionError>,
    ) -> Option<Resolution> {
        if !self.state.is_submitting() {
            return None;
        }

        let notice = match outcome {
            Ok(reply) if reply.success => {
                self.state = SubmissionState::Success;
                self.form = ContactForm::default();
                Notice::new("Message sent!", reply.message, Severity::Success)
            }
            Ok(reply) => {
                self.state = SubmissionState::Error;
                Notice::new("Failed to send", reply.message, Severity::Destructive)
            }
            Err(err) => {
                self.state = SubmissionState::Error;
                Notice::new("Failed to send", err.to_string(), Severity::Destructive)
            }
        };

        self.generation += 1;
        Some(Resolution {
            state: self.state,
            notice,
            revert: RevertTicket(self.generation),
        })
    }

    /// Returns true if the ticket was current and the session went back to idle.
    pub fn revert(&mut self, ticket: RevertTicket) -> bool {
        if ticket.0 != self.generation {
            return false;
        }
        match self.state {
            SubmissionState::Success | SubmissionState::Error => {
                self.state = SubmissionState::Idle;
                true
            }
            _ => false,
        }
    }

    pub fn cancel_pending_revert(&mut self) {
        self.generation += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct RecordingDelay {
        slept: RefCell<Vec<Duration>>,
    }

    impl Delay for &RecordingDelay {
        async fn sleep(&self, duration: Duration) {
            self.slept.borrow_mut().push(duration);
        }
    }

    fn form(name: &str, email: &str, subject: &str, message: &str) -> ContactForm {
        ContactForm {
            name: name.to_string(),
            email: email.to_string(),
            subject: subject.to_string(),
            message: message.to_string(),
        }
    }

    fn valid_form() -> ContactForm {
        form(
            "Jia",
            "jia@test.com",
            "Project inquiry",
            "I would like to discuss a project",
        )
    }

    fn failing(errors: &FieldErrors) -> Vec<Field> {
        errors.fields().collect()
    }

    #[test]
    fn test_valid_form_has_no_errors() {
        assert!(validate(&valid_form()).is_empty());
    }

    #[test]
    fn test_only_failing_fields_reported() {
        let mut f = valid_form();
        f.subject = "Hey".to_string();
        assert_eq!(failing(&validate(&f)), vec![Field::Subject]);

        let f = form("", "nope", "Project inquiry", "short");
        assert_eq!(
            failing(&validate(&f)),
            vec![Field::Name, Field::Email, Field::Message]
        );

        let f = ContactForm::default();
        assert_eq!(failing(&validate(&f)), Field::ALL.to_vec());
    }

    #[test]
    fn test_blank_and_short_messages_differ() {
        let errors = validate(&form("   ", "", "    ", "tiny"));
        assert_eq!(errors.get(Field::Name), Some("Name is required"));
        assert_eq!(errors.get(Field::Email), Some("Email is required"));
        assert_eq!(errors.get(Field::Subject), Some("Subject is required"));
        assert_eq!(
            errors.get(Field::Message),
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn test_trimming_before_length() {
        let mut f = valid_form();
        f.name = "  Al  ".to_string();
        assert!(!validate(&f).contains(Field::Name));

        f.name = " A ".to_string();
        assert_eq!(
            validate(&f).get(Field::Name),
            Some("Name must be at least 2 characters")
        );
    }

    #[test]
    fn test_byte_order_mark_is_trimmed() {
        let mut f = valid_form();
        f.name = "\u{feff}A".to_string();
        assert_eq!(
            validate(&f).get(Field::Name),
            Some("Name must be at least 2 characters")
        );

        f.name = "\u{feff} \u{feff}".to_string();
        assert_eq!(validate(&f).get(Field::Name), Some("Name is required"));

        f.name = "\u{feff}Al".to_string();
        assert!(!validate(&f).contains(Field::Name));
    }

    #[test]
    fn test_email_shape() {
        let mut f = valid_form();
        f.email = "a@b.c".to_string();
        assert!(!validate(&f).contains(Field::Email));

        for bad in ["abc", "a@b", "a b@c.d", "a@@b.c"] {
            f.email = bad.to_string();
            assert_eq!(
                validate(&f).get(Field::Email),
                Some("Please enter a valid email address"),
                "{bad} should be rejected"
            );
        }
    }

    #[test]
    fn test_validation_is_idempotent() {
        let f = form("A", "x@y", "Hi", "");
        assert_eq!(validate(&f), validate(&f));
    }

    #[test]
    fn test_email_domain_lowercased() {
        let f = form("Al", "Someone@Error.COM", "", "");
        assert_eq!(f.email_domain().as_deref(), Some("error.com"));
        assert_eq!(form("", "abc", "", "").email_domain(), None);
    }

    #[test]
    fn test_message_len_counts_chars() {
        let f = form("", "", "", "héllo 你好");
        assert_eq!(f.message_len(), 8);
        assert!(f.message.len() > f.message_len());
    }

    #[test]
    fn test_latency_range() {
        assert_eq!(simulated_latency(0), Duration::from_millis(2000));
        assert_eq!(simulated_latency(999), Duration::from_millis(2999));
        assert_eq!(simulated_latency(1000), Duration::from_millis(2000));
        assert!(simulated_latency(u64::MAX) < Duration::from_millis(3000));
    }

    #[test]
    fn test_random_jitter_varies_within_range() {
        let samples: Vec<u64> = (0..1000).map(|_| random_jitter()).collect();
        assert!(samples.iter().all(|&j| j < LATENCY_JITTER_MS));

        let mut distinct = samples.clone();
        distinct.sort_unstable();
        distinct.dedup();
        assert!(distinct.len() > 1, "back-to-back jitter never changed");
    }

    #[test]
    fn test_dispatch_waits_before_answering() {
        let delay = RecordingDelay::default();
        let dispatcher = SimulatedDispatcher::new(&delay).with_jitter(|| 250);
        let reply = block_on(dispatcher.dispatch(&valid_form())).unwrap();
        assert!(reply.success);
        assert_eq!(*delay.slept.borrow(), vec![Duration::from_millis(2250)]);
    }

    #[test]
    fn test_dispatch_outcome_order() {
        let mut f = valid_form();
        f.email = "x@error.com".to_string();
        f.message = "spam spam spam spam".to_string();
        assert_eq!(
            SimulatedDispatcher::<&RecordingDelay>::outcome(&f),
            Err(SubmissionError::ServerUnavailable)
        );

        f.email = "x@timeout.com".to_string();
        assert_eq!(
            SimulatedDispatcher::<&RecordingDelay>::outcome(&f),
            Err(SubmissionError::TimedOut)
        );

        f.email = "x@test.com".to_string();
        f.message = "This looks like SPAM content".to_string();
        let reply = SimulatedDispatcher::<&RecordingDelay>::outcome(&f).unwrap();
        assert!(!reply.success);
        assert!(reply.message.contains("Suspicious content"));
    }

    fn run(session: &mut ContactSession, f: ContactForm) -> Option<Resolution> {
        for field in Field::ALL {
            session.set_field(field, f.get(field));
        }
        let SubmitDecision::Dispatch(snapshot) = session.submit() else {
            panic!("expected a dispatch");
        };
        assert_eq!(session.state(), SubmissionState::Submitting);
        let delay = RecordingDelay::default();
        let outcome = block_on(SimulatedDispatcher::new(&delay).dispatch(&snapshot));
        session.resolve(outcome)
    }

    #[test]
    fn test_server_unavailable_scenario() {
        let mut session = ContactSession::new();
        let f = form(
            "Al",
            "x@error.com",
            "Hello there",
            "This is a long enough message",
        );
        let res = run(&mut session, f.clone()).unwrap();
        assert_eq!(res.state, SubmissionState::Error);
        assert_eq!(res.notice.severity, Severity::Destructive);
        assert_eq!(
            res.notice.description,
            SubmissionError::ServerUnavailable.to_string()
        );
        assert_eq!(session.form(), &f);

        assert!(session.revert(res.revert));
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_timeout_scenario() {
        let mut session = ContactSession::new();
        let f = form(
            "Al",
            "x@timeout.com",
            "Hello there",
            "This is a long enough message",
        );
        let res = run(&mut session, f.clone()).unwrap();
        assert_eq!(res.state, SubmissionState::Error);
        assert_eq!(session.state(), SubmissionState::Error);
        assert_eq!(res.notice.severity, Severity::Destructive);
        assert_eq!(
            res.notice.description,
            SubmissionError::TimedOut.to_string()
        );
        assert_eq!(session.form(), &f);

        assert!(session.revert(res.revert));
        assert_eq!(session.state(), SubmissionState::Idle);
        assert_eq!(session.form(), &f);
    }

    #[test]
    fn test_soft_failure_keeps_fields() {
        let mut session = ContactSession::new();
        let mut f = valid_form();
        f.message = "this looks like spam content".to_string();
        let res = run(&mut session, f.clone()).unwrap();
        assert_eq!(res.state, SubmissionState::Error);
        assert!(res.notice.description.contains("Suspicious content"));
        assert_eq!(session.form(), &f);
        assert!(session.revert(res.revert));
        assert_eq!(session.form(), &f);
    }

    #[test]
    fn test_success_clears_fields() {
        let mut session = ContactSession::new();
        let res = run(&mut session, valid_form()).unwrap();
        assert_eq!(res.state, SubmissionState::Success);
        assert_eq!(res.notice.severity, Severity::Success);
        assert_eq!(session.form(), &ContactForm::default());
        assert!(session.revert(res.revert));
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_submit_while_submitting_is_ignored() {
        let mut session = ContactSession::new();
        for field in Field::ALL {
            session.set_field(field, valid_form().get(field));
        }
        assert!(matches!(session.submit(), SubmitDecision::Dispatch(_)));
        assert_eq!(session.submit(), SubmitDecision::Ignored);
        assert_eq!(session.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_invalid_submit_stays_idle() {
        let mut session = ContactSession::new();
        session.set_field(Field::Name, "A");
        let decision = session.submit();
        assert!(matches!(decision, SubmitDecision::Rejected(ref n) if n.severity == Severity::Destructive));
        assert_eq!(session.state(), SubmissionState::Idle);
        assert_eq!(session.errors().len(), 4);

        session.set_field(Field::Name, "Alice");
        assert!(!session.errors().contains(Field::Name));
        assert_eq!(session.errors().len(), 3);
    }

    #[test]
    fn test_invalid_resubmit_after_success_keeps_revert() {
        let mut session = ContactSession::new();
        let res = run(&mut session, valid_form()).unwrap();
        assert_eq!(session.state(), SubmissionState::Success);

        // the form was cleared, so this submit fails validation
        assert!(matches!(session.submit(), SubmitDecision::Rejected(_)));
        assert_eq!(session.state(), SubmissionState::Success);
        assert_eq!(session.errors().len(), 4);

        assert!(session.revert(res.revert));
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_invalid_resubmit_after_error_keeps_revert() {
        let mut session = ContactSession::new();
        let f = form(
            "Al",
            "x@error.com",
            "Hello there",
            "This is a long enough message",
        );
        let res = run(&mut session, f).unwrap();
        assert_eq!(session.state(), SubmissionState::Error);

        session.set_field(Field::Subject, "Hey");
        assert!(matches!(session.submit(), SubmitDecision::Rejected(_)));
        assert_eq!(session.state(), SubmissionState::Error);
        assert_eq!(failing(session.errors()), vec![Field::Subject]);

        assert!(session.revert(res.revert));
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_resolve_without_submission() {
        let mut session = ContactSession::new();
        assert!(session.resolve(Err(SubmissionError::TimedOut)).is_none());
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_stale_revert_is_ignored() {
        let mut session = ContactSession::new();
        let first = run(&mut session, valid_form()).unwrap();

        // resubmitting from success invalidates the first revert
        let second = run(&mut session, valid_form()).unwrap();
        assert!(!session.revert(first.revert));
        assert_eq!(session.state(), SubmissionState::Success);
        assert!(session.revert(second.revert));
        assert_eq!(session.state(), SubmissionState::Idle);
    }

    #[test]
    fn test_revert_ignored_while_submitting() {
        let mut session = ContactSession::new();
        let res = run(&mut session, valid_form()).unwrap();
        for field in Field::ALL {
            session.set_field(field, valid_form().get(field));
        }
        assert!(matches!(session.submit(), SubmitDecision::Dispatch(_)));
        assert!(!session.revert(res.revert));
        assert_eq!(session.state(), SubmissionState::Submitting);
    }

    #[test]
    fn test_cancelled_revert() {
        let mut session = ContactSession::new();
        let res = run(&mut session, valid_form()).unwrap();
        session.cancel_pending_revert();
        assert!(!session.revert(res.revert));
        assert_eq!(session.state(), SubmissionState::Success);
    }
}
