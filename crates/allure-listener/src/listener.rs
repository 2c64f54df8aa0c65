//! The inbound notification interface delivered by the test runner.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::issue::IssueError;
use crate::model::{
    DataTable, ExecutedStepDescription, Story, StepFailure, TestClass, TestDescription,
    TestOutcome,
};
use allure_report::event::FailureCause;

/// Error surfaced by a fallible listener callback.
///
/// Collaborator failures are not caught or classified here; they propagate
/// to the notification source, which owns failure policy for the run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ListenerError {
    /// Issue metadata on the suite payload was malformed.
    #[error(transparent)]
    Issue(#[from] IssueError),
}

/// Lifecycle callbacks a test runner delivers, in suite → test → step
/// nesting order.
///
/// The callback set is fixed by the runner. Implementations translate each
/// notification into zero or more outgoing effects; the two suite-started
/// callbacks return a [`ListenerError`] because deriving issue references
/// from the payload can reject malformed metadata.
pub trait StepListener {
    /// A suite derived from a test class began.
    ///
    /// # Errors
    /// Returns an error when the class's issue metadata is malformed.
    fn test_suite_started(&mut self, class: &TestClass) -> Result<(), ListenerError>;

    /// A suite derived from a story began.
    ///
    /// # Errors
    /// Returns an error when the story's issue metadata is malformed.
    fn test_suite_started_for_story(&mut self, story: &Story) -> Result<(), ListenerError>;

    /// The current suite ended.
    fn test_suite_finished(&mut self);

    /// A test began, identified by its description alone.
    fn test_started(&mut self, description: &TestDescription);

    /// A test began with an external identifier assigned by the runner.
    fn test_started_with_id(&mut self, description: &TestDescription, id: &str);

    /// The current test ended with the given outcome.
    fn test_finished(&mut self, outcome: &TestOutcome);

    /// The runner retried the current test.
    fn test_retried(&mut self);

    /// The runner reported a failure eagerly, before the final outcome.
    fn test_failed(&mut self, outcome: &TestOutcome, cause: &FailureCause);

    /// The current test was marked as ignored.
    fn test_ignored(&mut self);

    /// The current test was skipped.
    fn test_skipped(&mut self);

    /// The current test is pending implementation.
    fn test_pending(&mut self);

    /// The current test requires manual execution.
    fn test_is_manual(&mut self);

    /// A step began within the current test.
    fn step_started(&mut self, description: &ExecutedStepDescription);

    /// A step began that the runner already decided to skip.
    fn skipped_step_started(&mut self, description: &ExecutedStepDescription);

    /// The current step failed.
    fn step_failed(&mut self, failure: &StepFailure);

    /// The final step of the test failed.
    fn last_step_failed(&mut self, failure: &StepFailure);

    /// The current step was ignored.
    fn step_ignored(&mut self);

    /// The current step is pending implementation.
    fn step_pending(&mut self);

    /// The current step is pending, with an explanation.
    fn step_pending_with_message(&mut self, message: &str);

    /// The current step ended.
    fn step_finished(&mut self);

    /// The runner observed a screen change.
    fn notify_screen_change(&mut self);

    /// The runner loaded an example table for the current scenario.
    fn use_examples_from(&mut self, table: &DataTable);

    /// The runner appended rows to the current example table.
    fn add_new_examples_from(&mut self, table: &DataTable);

    /// An example row began.
    fn example_started(&mut self, data: &BTreeMap<String, String>);

    /// The current example row ended.
    fn example_finished(&mut self);

    /// A runtime assumption was violated.
    fn assumption_violated(&mut self, message: &str);

    /// The whole run ended.
    fn test_run_finished(&mut self);
}
