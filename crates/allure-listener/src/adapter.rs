//! The translator between runner callbacks and reporting events.

use std::collections::BTreeMap;

use uuid::Uuid;

use allure_report::environment;
use allure_report::event::{
    AllureEvent, AttachmentEvent, FailureCause, SuiteStartedEvent, TestStartedEvent,
};
use allure_report::sink::EventSink;

use crate::annotations;
use crate::issue::{ClassIssueProcessor, IssueProcessor, StoryIssueProcessor};
use crate::listener::{ListenerError, StepListener};
use crate::model::{
    DataTable, ExecutedStepDescription, Story, StepFailure, TestClass, TestDescription,
    TestOutcome,
};
use crate::screenshot::{NullScreenshotSource, PNG_MIME, ScreenshotSource};

/// Message attached to the canceled event fired for ignored tests.
pub const IGNORED_MESSAGE: &str = "Test was marked as ignored";

/// Translates step listener callbacks into Allure reporting events.
///
/// One listener instance serves a whole run. Session state is limited to
/// the current suite uid, the title-transformation flag, and the issue
/// processor derived from the suite payload. Callbacks are expected to
/// arrive serially in suite → test → step nesting order; the translator
/// performs no locking of its own.
///
/// # Examples
/// ```
/// use allure_listener::adapter::AllureStepListener;
/// use allure_listener::listener::StepListener;
/// use allure_listener::model::TestClass;
/// use allure_report::sink::CollectingSink;
///
/// let sink = CollectingSink::new();
/// let mut listener = AllureStepListener::new(&sink);
/// listener.test_suite_started(&TestClass::new("LoginSuite"))?;
/// listener.test_suite_finished();
/// assert_eq!(sink.len(), 2);
/// # Ok::<(), allure_listener::ListenerError>(())
/// ```
pub struct AllureStepListener<S, C = NullScreenshotSource> {
    sink: S,
    screenshots: C,
    suite_uid: String,
    title_transformation_required: bool,
    issue_processor: Option<Box<dyn IssueProcessor>>,
}

impl<S: EventSink> AllureStepListener<S> {
    /// Creates a listener without screenshot capture.
    ///
    /// Construction registers the environment description once per
    /// process.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self::with_screenshots(sink, NullScreenshotSource)
    }
}

impl<S: EventSink, C: ScreenshotSource> AllureStepListener<S, C> {
    /// Creates a listener that captures screenshots from `screenshots`.
    ///
    /// Construction registers the environment description once per
    /// process.
    #[must_use]
    pub fn with_screenshots(sink: S, screenshots: C) -> Self {
        environment::register();
        Self {
            sink,
            screenshots,
            suite_uid: String::new(),
            title_transformation_required: true,
            issue_processor: None,
        }
    }

    /// Returns the sink events are fired into.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the uid of the most recently started suite.
    ///
    /// Empty before the first suite starts.
    #[must_use]
    pub fn suite_uid(&self) -> &str {
        &self.suite_uid
    }

    /// Whether description-only test starts receive a derived title.
    ///
    /// True by default; cleared while a story-variant suite is running.
    #[must_use]
    pub const fn title_transformation_required(&self) -> bool {
        self.title_transformation_required
    }

    fn fresh_suite_uid(&mut self) -> String {
        self.suite_uid = Uuid::new_v4().to_string();
        self.suite_uid.clone()
    }

    fn make_attachment_if_possible(&self, title: &str) {
        if let Some(content) = self.screenshots.capture() {
            self.sink.fire(AllureEvent::Attachment(AttachmentEvent::new(
                content, title, PNG_MIME,
            )));
        }
    }
}

impl<S: EventSink, C: ScreenshotSource> StepListener for AllureStepListener<S, C> {
    fn test_suite_started(&mut self, class: &TestClass) -> Result<(), ListenerError> {
        let processor = ClassIssueProcessor::new(class)?;
        let event = SuiteStartedEvent::new(self.fresh_suite_uid(), class.simple_name());
        let event = annotations::with_issues(event, &processor);
        let event = annotations::with_class(event, class);
        self.issue_processor = Some(Box::new(processor));
        self.sink.fire(AllureEvent::SuiteStarted(event));
        Ok(())
    }

    fn test_suite_started_for_story(&mut self, story: &Story) -> Result<(), ListenerError> {
        let processor = StoryIssueProcessor::new(story)?;
        let event = SuiteStartedEvent::new(self.fresh_suite_uid(), story.name());
        let event = annotations::with_story(event, story);
        self.issue_processor = Some(Box::new(processor));
        self.sink.fire(AllureEvent::SuiteStarted(event));
        self.title_transformation_required = false;
        Ok(())
    }

    fn test_suite_finished(&mut self) {
        self.sink.fire(AllureEvent::SuiteFinished {
            uid: self.suite_uid.clone(),
        });
        self.title_transformation_required = true;
    }

    fn test_started(&mut self, description: &TestDescription) {
        let event = TestStartedEvent::new(self.suite_uid.clone(), description.name());
        let mut event = annotations::with_essential_info(event, description);
        if self.title_transformation_required {
            event = annotations::with_title(event);
        }
        if let Some(processor) = self.issue_processor.as_deref() {
            event = annotations::with_issues(event, processor);
        }
        self.sink.fire(AllureEvent::TestStarted(event));
    }

    fn test_started_with_id(&mut self, description: &TestDescription, _id: &str) {
        let mut event = TestStartedEvent::new(self.suite_uid.clone(), description.name());
        if let Some(processor) = self.issue_processor.as_deref() {
            event = annotations::with_issues(event, processor);
        }
        let event = annotations::with_essential_info(event, description);
        self.sink.fire(AllureEvent::TestStarted(event));
    }

    fn test_finished(&mut self, outcome: &TestOutcome) {
        if outcome.is_error() || outcome.is_failure() {
            let cause = outcome.failure_cause().cloned().unwrap_or_else(|| {
                FailureCause::new("UnknownFailure", "failing outcome reported without a cause")
            });
            self.sink.fire(AllureEvent::TestFailure { cause });
        }
        self.sink.fire(AllureEvent::TestFinished);
    }

    fn test_retried(&mut self) {
        // TODO: map retried tests onto a retry event once the vocabulary has one.
    }

    fn test_failed(&mut self, _outcome: &TestOutcome, _cause: &FailureCause) {
        // Failures are reported from test_finished, where the outcome is final.
    }

    fn test_ignored(&mut self) {
        self.sink.fire(AllureEvent::TestCanceled {
            message: IGNORED_MESSAGE.to_string(),
        });
        self.sink.fire(AllureEvent::TestFinished);
    }

    fn test_skipped(&mut self) {
        // TODO: decide whether runner-level skips should surface as canceled tests.
    }

    fn test_pending(&mut self) {
        self.sink.fire(AllureEvent::TestPending);
    }

    fn test_is_manual(&mut self) {
        // Manual tests have no reporting representation.
    }

    fn step_started(&mut self, description: &ExecutedStepDescription) {
        self.sink.fire(AllureEvent::StepStarted {
            title: description.title().to_string(),
        });
        self.make_attachment_if_possible("Step started");
    }

    fn skipped_step_started(&mut self, description: &ExecutedStepDescription) {
        self.sink.fire(AllureEvent::StepStarted {
            title: description.title().to_string(),
        });
    }

    fn step_failed(&mut self, failure: &StepFailure) {
        self.sink.fire(AllureEvent::StepFailure {
            cause: failure.cause().clone(),
        });
        self.make_attachment_if_possible(&format!("Step failed: {}", failure.message()));
        self.sink.fire(AllureEvent::StepFinished);
    }

    fn last_step_failed(&mut self, _failure: &StepFailure) {
        // The same failure arrives again through step_failed.
    }

    fn step_ignored(&mut self) {
        self.sink.fire(AllureEvent::StepCanceled);
        self.sink.fire(AllureEvent::StepFinished);
    }

    fn step_pending(&mut self) {
        self.sink.fire(AllureEvent::StepPending);
        self.sink.fire(AllureEvent::StepFinished);
    }

    fn step_pending_with_message(&mut self, _message: &str) {
        self.sink.fire(AllureEvent::StepPending);
        self.sink.fire(AllureEvent::StepFinished);
    }

    fn step_finished(&mut self) {
        self.make_attachment_if_possible("Step finished");
        self.sink.fire(AllureEvent::StepFinished);
    }

    fn notify_screen_change(&mut self) {}

    fn use_examples_from(&mut self, _table: &DataTable) {}

    fn add_new_examples_from(&mut self, _table: &DataTable) {}

    fn example_started(&mut self, _data: &BTreeMap<String, String>) {}

    fn example_finished(&mut self) {}

    fn assumption_violated(&mut self, _message: &str) {}

    fn test_run_finished(&mut self) {}
}
