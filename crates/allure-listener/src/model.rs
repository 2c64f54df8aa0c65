//! Payload types delivered by the test runner's notification source.
//!
//! The runner describes suites, tests, and steps with these structures.
//! Metadata that other stacks read from annotations at runtime arrives here
//! as an explicit [`TestMeta`] value on each payload.

use allure_report::event::{FailureCause, Severity};

/// Metadata attached to a suite, story, or test payload.
///
/// # Examples
/// ```
/// use allure_listener::model::TestMeta;
/// use allure_report::event::Severity;
///
/// let meta = TestMeta::new()
///     .with_severity(Severity::Critical)
///     .with_issue("PROJ-7");
/// assert_eq!(meta.severity(), Some(Severity::Critical));
/// assert_eq!(meta.issues(), ["PROJ-7"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestMeta {
    title: Option<String>,
    description: Option<String>,
    severity: Option<Severity>,
    issues: Vec<String>,
    stories: Vec<String>,
}

impl TestMeta {
    /// Creates empty metadata.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an explicit display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Sets a long-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the severity.
    #[must_use]
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// Appends an issue-tracker reference.
    #[must_use]
    pub fn with_issue(mut self, reference: impl Into<String>) -> Self {
        self.issues.push(reference.into());
        self
    }

    /// Appends a story name.
    #[must_use]
    pub fn with_story(mut self, story: impl Into<String>) -> Self {
        self.stories.push(story.into());
        self
    }

    /// Returns the explicit title, if any.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the severity, if any.
    #[must_use]
    pub const fn severity(&self) -> Option<Severity> {
        self.severity
    }

    /// Returns the raw issue references in declaration order.
    #[must_use]
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Returns the story names in declaration order.
    #[must_use]
    pub fn stories(&self) -> &[String] {
        &self.stories
    }
}

/// Class payload of the suite-started notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestClass {
    simple_name: String,
    meta: TestMeta,
}

impl TestClass {
    /// Creates a class payload with empty metadata.
    #[must_use]
    pub fn new(simple_name: impl Into<String>) -> Self {
        Self {
            simple_name: simple_name.into(),
            meta: TestMeta::default(),
        }
    }

    /// Attaches metadata to the payload.
    #[must_use]
    pub fn with_meta(mut self, meta: TestMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Returns the class's simple name.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        &self.simple_name
    }

    /// Returns the attached metadata.
    #[must_use]
    pub const fn meta(&self) -> &TestMeta {
        &self.meta
    }
}

/// Story payload of the suite-started notification.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Story {
    name: String,
    meta: TestMeta,
}

impl Story {
    /// Creates a story payload with empty metadata.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: TestMeta::default(),
        }
    }

    /// Attaches metadata to the payload.
    #[must_use]
    pub fn with_meta(mut self, meta: TestMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Returns the story name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attached metadata.
    #[must_use]
    pub const fn meta(&self) -> &TestMeta {
        &self.meta
    }
}

/// Name and metadata describing a started test.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TestDescription {
    name: String,
    meta: TestMeta,
}

impl TestDescription {
    /// Creates a description with empty metadata.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meta: TestMeta::default(),
        }
    }

    /// Attaches metadata to the description.
    #[must_use]
    pub fn with_meta(mut self, meta: TestMeta) -> Self {
        self.meta = meta;
        self
    }

    /// Returns the raw test name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the attached metadata.
    #[must_use]
    pub const fn meta(&self) -> &TestMeta {
        &self.meta
    }
}

/// Final classification of a completed test.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TestResult {
    /// The test passed.
    Success,
    /// An assertion failed.
    Failure,
    /// The test raised an unexpected error.
    Error,
    /// The test is pending implementation.
    Pending,
    /// The test was marked as ignored.
    Ignored,
    /// The test was skipped by the runner.
    Skipped,
}

/// Outcome payload of the test-finished notification.
///
/// # Examples
/// ```
/// use allure_listener::model::{TestOutcome, TestResult};
/// use allure_report::event::FailureCause;
///
/// let outcome = TestOutcome::with_failure(
///     TestResult::Failure,
///     FailureCause::new("AssertionError", "totals differ"),
/// );
/// assert!(outcome.is_failure());
/// assert!(!outcome.is_error());
/// assert!(outcome.failure_cause().is_some());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TestOutcome {
    result: TestResult,
    failure: Option<FailureCause>,
}

impl TestOutcome {
    /// Creates an outcome without a failure cause.
    #[must_use]
    pub const fn new(result: TestResult) -> Self {
        Self {
            result,
            failure: None,
        }
    }

    /// Creates an outcome carrying the runner's failure cause.
    #[must_use]
    pub const fn with_failure(result: TestResult, cause: FailureCause) -> Self {
        Self {
            result,
            failure: Some(cause),
        }
    }

    /// Convenience constructor for a passing outcome.
    #[must_use]
    pub const fn success() -> Self {
        Self::new(TestResult::Success)
    }

    /// Returns the final classification.
    #[must_use]
    pub const fn result(&self) -> TestResult {
        self.result
    }

    /// Whether the runner classified the outcome as an assertion failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self.result, TestResult::Failure)
    }

    /// Whether the runner classified the outcome as an unexpected error.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.result, TestResult::Error)
    }

    /// Returns the recorded failure cause, if any.
    #[must_use]
    pub const fn failure_cause(&self) -> Option<&FailureCause> {
        self.failure.as_ref()
    }
}

/// Title payload of the step-started notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutedStepDescription {
    title: String,
}

impl ExecutedStepDescription {
    /// Creates a step description.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }

    /// Returns the step display title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}

/// Failure payload of the step-failed notifications.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StepFailure {
    message: String,
    cause: FailureCause,
}

impl StepFailure {
    /// Creates a step failure from the runner's message and cause.
    #[must_use]
    pub fn new(message: impl Into<String>, cause: FailureCause) -> Self {
        Self {
            message: message.into(),
            cause,
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the underlying cause.
    #[must_use]
    pub const fn cause(&self) -> &FailureCause {
        &self.cause
    }
}

/// Example rows payload of the data-table notifications.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DataTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl DataTable {
    /// Creates a table from headers and rows.
    #[must_use]
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Returns the header row.
    #[must_use]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Returns the data rows.
    #[must_use]
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }
}
