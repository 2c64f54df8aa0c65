//! Outgoing reporting event vocabulary.
//!
//! Each variant of [`AllureEvent`] corresponds to one call a reporting sink
//! consumes: suite and test case boundaries, step boundaries, failures
//! carried as data, and binary attachments. Suite and test start events are
//! built up through decorator functions, so both expose the
//! [`AnnotatedEvent`] seam.

use serde::Serialize;
use thiserror::Error;

/// Severity attached to a test case or suite through a label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Breaks the product outright.
    Blocker,
    /// Breaks a core flow.
    Critical,
    /// Default severity.
    Normal,
    /// Cosmetic or low-impact.
    Minor,
    /// Negligible impact.
    Trivial,
}

impl Severity {
    /// Returns the lowercase wire label for the severity.
    ///
    /// # Examples
    /// ```
    /// use allure_report::event::Severity;
    ///
    /// assert_eq!(Severity::Critical.label(), "critical");
    /// ```
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Blocker => "blocker",
            Self::Critical => "critical",
            Self::Normal => "normal",
            Self::Minor => "minor",
            Self::Trivial => "trivial",
        }
    }
}

/// A key/value label enriching a suite or test case event.
///
/// # Examples
/// ```
/// use allure_report::event::Label;
///
/// let label = Label::issue("PROJ-42");
/// assert_eq!(label.name(), "issue");
/// assert_eq!(label.value(), "PROJ-42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Label {
    name: &'static str,
    value: String,
}

impl Label {
    /// Creates an issue-tracker reference label.
    #[must_use]
    pub fn issue(value: impl Into<String>) -> Self {
        Self {
            name: "issue",
            value: value.into(),
        }
    }

    /// Creates a story label.
    #[must_use]
    pub fn story(value: impl Into<String>) -> Self {
        Self {
            name: "story",
            value: value.into(),
        }
    }

    /// Creates a feature label.
    #[must_use]
    pub fn feature(value: impl Into<String>) -> Self {
        Self {
            name: "feature",
            value: value.into(),
        }
    }

    /// Creates a severity label.
    #[must_use]
    pub fn severity(severity: Severity) -> Self {
        Self {
            name: "severity",
            value: severity.label().to_string(),
        }
    }

    /// Returns the label key.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the label value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Failure information carried by test and step failure events.
///
/// The cause is data, not a live error: the adapter captures whatever the
/// runner reported and forwards it without re-raising.
///
/// # Examples
/// ```
/// use allure_report::event::FailureCause;
///
/// let cause = FailureCause::new("AssertionError", "expected 2, got 3");
/// assert_eq!(cause.to_string(), "AssertionError: expected 2, got 3");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Error)]
#[error("{error_type}: {message}")]
pub struct FailureCause {
    error_type: String,
    message: String,
}

impl FailureCause {
    /// Creates a cause from the runner's error type and message.
    #[must_use]
    pub fn new(error_type: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error_type: error_type.into(),
            message: message.into(),
        }
    }

    /// Returns the reported error type.
    #[must_use]
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Returns the reported message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Mutation seam used by annotation decorators on start events.
pub trait AnnotatedEvent {
    /// Sets the display title shown instead of the raw name.
    fn set_title(&mut self, title: impl Into<String>);
    /// Sets the long-form description.
    fn set_description(&mut self, description: impl Into<String>);
    /// Appends a label.
    fn push_label(&mut self, label: Label);
}

/// Event announcing a freshly started test suite.
///
/// # Examples
/// ```
/// use allure_report::event::SuiteStartedEvent;
///
/// let event = SuiteStartedEvent::new("uid-1", "LoginSuite");
/// assert_eq!(event.uid(), "uid-1");
/// assert_eq!(event.name(), "LoginSuite");
/// assert!(event.labels().is_empty());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SuiteStartedEvent {
    uid: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    labels: Vec<Label>,
}

impl SuiteStartedEvent {
    /// Creates an undecorated suite start event.
    #[must_use]
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            title: None,
            description: None,
            labels: Vec::new(),
        }
    }

    /// Returns the generated suite uid.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns the suite name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display title applied so far, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description applied so far, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the labels applied so far.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl AnnotatedEvent for SuiteStartedEvent {
    fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    fn push_label(&mut self, label: Label) {
        self.labels.push(label);
    }
}

/// Event announcing a freshly started test case within the current suite.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TestStartedEvent {
    uid: String,
    name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    labels: Vec<Label>,
}

impl TestStartedEvent {
    /// Creates an undecorated test start event keyed by the suite uid.
    #[must_use]
    pub fn new(uid: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            name: name.into(),
            title: None,
            description: None,
            labels: Vec::new(),
        }
    }

    /// Returns the owning suite uid.
    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Returns the raw test name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the display title applied so far, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description applied so far, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the labels applied so far.
    #[must_use]
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }
}

impl AnnotatedEvent for TestStartedEvent {
    fn set_title(&mut self, title: impl Into<String>) {
        self.title = Some(title.into());
    }

    fn set_description(&mut self, description: impl Into<String>) {
        self.description = Some(description.into());
    }

    fn push_label(&mut self, label: Label) {
        self.labels.push(label);
    }
}

/// Binary attachment fired alongside a step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AttachmentEvent {
    #[serde(skip_serializing)]
    content: Vec<u8>,
    title: String,
    mime_type: String,
}

impl AttachmentEvent {
    /// Creates an attachment from raw content.
    ///
    /// The binary content is omitted from the JSON rendering; only the
    /// title and MIME type appear there.
    #[must_use]
    pub fn new(content: Vec<u8>, title: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            content,
            title: title.into(),
            mime_type: mime_type.into(),
        }
    }

    /// Returns the raw attachment bytes.
    #[must_use]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Returns the attachment title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the attachment MIME type.
    #[must_use]
    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// The tagged union of every event a reporting adapter can fire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum AllureEvent {
    /// A suite began, carrying its generated uid and decorations.
    SuiteStarted(SuiteStartedEvent),
    /// The suite identified by `uid` ended.
    SuiteFinished {
        /// Uid generated when the suite started.
        uid: String,
    },
    /// A test case began within the current suite.
    TestStarted(TestStartedEvent),
    /// The current test case failed; fired before its finish event.
    TestFailure {
        /// The underlying cause, carried as data.
        cause: FailureCause,
    },
    /// The current test case ended.
    TestFinished,
    /// The current test case was canceled with an explanation.
    TestCanceled {
        /// Human-readable cancellation reason.
        message: String,
    },
    /// The current test case is pending implementation.
    TestPending,
    /// A step began within the current test case.
    StepStarted {
        /// Step display title.
        title: String,
    },
    /// The current step failed; fired before its finish event.
    StepFailure {
        /// The underlying cause, carried as data.
        cause: FailureCause,
    },
    /// The current step was canceled.
    StepCanceled,
    /// The current step is pending implementation.
    StepPending,
    /// The current step ended.
    StepFinished,
    /// Binary content attached to the current step.
    Attachment(AttachmentEvent),
}

#[cfg(test)]
mod tests {
    use super::{AllureEvent, AnnotatedEvent, FailureCause, Label, Severity, SuiteStartedEvent};

    #[test]
    fn severity_labels_are_lowercase() {
        for severity in [
            Severity::Blocker,
            Severity::Critical,
            Severity::Normal,
            Severity::Minor,
            Severity::Trivial,
        ] {
            assert_eq!(severity.label(), severity.label().to_lowercase());
        }
    }

    #[test]
    fn severity_label_round_trips_through_label_value() {
        let label = Label::severity(Severity::Minor);
        assert_eq!(label.name(), "severity");
        assert_eq!(label.value(), "minor");
    }

    #[test]
    fn failure_cause_displays_type_and_message() {
        let cause = FailureCause::new("TimeoutError", "page did not load");
        assert_eq!(cause.error_type(), "TimeoutError");
        assert_eq!(cause.message(), "page did not load");
        assert_eq!(cause.to_string(), "TimeoutError: page did not load");
    }

    #[test]
    fn decorations_accumulate_on_suite_event() {
        let mut event = SuiteStartedEvent::new("uid", "Suite");
        event.set_title("Display title");
        event.set_description("What the suite covers");
        event.push_label(Label::issue("PROJ-1"));
        event.push_label(Label::feature("login"));
        assert_eq!(event.title(), Some("Display title"));
        assert_eq!(event.description(), Some("What the suite covers"));
        assert_eq!(event.labels().len(), 2);
    }

    #[test]
    fn events_compare_by_payload() {
        let left = AllureEvent::StepStarted {
            title: "open page".to_string(),
        };
        let right = AllureEvent::StepStarted {
            title: "open page".to_string(),
        };
        assert_eq!(left, right);
        assert_ne!(left, AllureEvent::StepFinished);
    }
}
