//! Decorator functions enriching outgoing events with payload metadata.
//!
//! Each decorator takes an event and returns the enriched copy, so call
//! sites read as a pipeline: build, decorate, fire.

use convert_case::{Boundary, Case, Casing};

use allure_report::event::{AnnotatedEvent, Label, SuiteStartedEvent, TestStartedEvent};

use crate::issue::IssueProcessor;
use crate::model::{Story, TestClass, TestDescription, TestMeta};

/// Appends one issue label per reference held by the processor.
#[must_use]
pub fn with_issues<E: AnnotatedEvent>(mut event: E, processor: &dyn IssueProcessor) -> E {
    for reference in processor.issues() {
        event.push_label(Label::issue(reference.as_str()));
    }
    event
}

/// Applies the class payload's metadata to a suite event.
#[must_use]
pub fn with_class(event: SuiteStartedEvent, class: &TestClass) -> SuiteStartedEvent {
    apply_meta(event, class.meta())
}

/// Applies the story payload's metadata to a suite event, plus a story
/// label carrying the story's own name.
#[must_use]
pub fn with_story(mut event: SuiteStartedEvent, story: &Story) -> SuiteStartedEvent {
    event.push_label(Label::story(story.name()));
    apply_meta(event, story.meta())
}

/// Applies the test payload's explicit title, description, and severity.
#[must_use]
pub fn with_essential_info(
    event: TestStartedEvent,
    description: &TestDescription,
) -> TestStartedEvent {
    apply_meta(event, description.meta())
}

/// Fills a missing title with one derived from the raw test name.
///
/// Camel-case humps and underscores split the name into words; the first
/// word is capitalised and the rest lowercased. An explicit title already
/// present on the event wins over the derivation.
///
/// # Examples
/// ```
/// use allure_listener::annotations::with_title;
/// use allure_report::event::TestStartedEvent;
///
/// let event = with_title(TestStartedEvent::new("uid", "shouldLoginSuccessfully"));
/// assert_eq!(event.title(), Some("Should login successfully"));
/// ```
#[must_use]
pub fn with_title(mut event: TestStartedEvent) -> TestStartedEvent {
    if event.title().is_none() {
        let derived = humanise(event.name());
        if !derived.is_empty() {
            event.set_title(derived);
        }
    }
    event
}

fn apply_meta<E: AnnotatedEvent>(mut event: E, meta: &TestMeta) -> E {
    if let Some(title) = meta.title() {
        event.set_title(title);
    }
    if let Some(description) = meta.description() {
        event.set_description(description);
    }
    if let Some(severity) = meta.severity() {
        event.push_label(Label::severity(severity));
    }
    for story in meta.stories() {
        event.push_label(Label::story(story.as_str()));
    }
    event
}

/// Splits a raw test name into space-separated lowercase words and
/// capitalises the first.
///
/// Digit boundaries are excluded so names like `login_with_2fa` keep the
/// digit glued to its word; the acronym boundary keeps runs of capitals
/// together instead of splitting them into single letters.
fn humanise(name: &str) -> String {
    let lowered = name
        .with_boundaries(&[
            Boundary::Underscore,
            Boundary::Hyphen,
            Boundary::Space,
            Boundary::LowerUpper,
            Boundary::Acronym,
        ])
        .to_case(Case::Lower);
    capitalise_first(&lowered)
}

fn capitalise_first(text: &str) -> String {
    let mut chars = text.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
mod tests {
    use super::{with_class, with_essential_info, with_issues, with_story, with_title};
    use crate::issue::{IssueProcessor, StoryIssueProcessor};
    use crate::model::{Story, TestClass, TestDescription, TestMeta};
    use allure_report::event::{Label, Severity, SuiteStartedEvent, TestStartedEvent};

    struct FixedIssues(Vec<String>);

    impl IssueProcessor for FixedIssues {
        fn issues(&self) -> &[String] {
            &self.0
        }
    }

    #[test]
    fn issues_become_labels_in_order() {
        let processor = FixedIssues(vec!["PROJ-1".to_string(), "PROJ-2".to_string()]);
        let event = with_issues(SuiteStartedEvent::new("uid", "Suite"), &processor);
        assert_eq!(
            event.labels(),
            [Label::issue("PROJ-1"), Label::issue("PROJ-2")]
        );
    }

    #[test]
    fn class_metadata_decorates_the_suite_event() {
        let class = TestClass::new("CheckoutSuite").with_meta(
            TestMeta::new()
                .with_title("Checkout")
                .with_description("Covers the payment flow")
                .with_severity(Severity::Critical)
                .with_story("payments"),
        );
        let event = with_class(SuiteStartedEvent::new("uid", "CheckoutSuite"), &class);
        assert_eq!(event.title(), Some("Checkout"));
        assert_eq!(event.description(), Some("Covers the payment flow"));
        assert_eq!(
            event.labels(),
            [Label::severity(Severity::Critical), Label::story("payments")]
        );
    }

    #[test]
    fn story_decoration_starts_with_the_story_name() {
        let story = Story::new("Password reset");
        let event = with_story(SuiteStartedEvent::new("uid", "Password reset"), &story);
        assert_eq!(event.labels(), [Label::story("Password reset")]);
    }

    #[test]
    fn essential_info_applies_test_metadata() {
        let description = TestDescription::new("resets_password")
            .with_meta(TestMeta::new().with_severity(Severity::Normal));
        let event =
            with_essential_info(TestStartedEvent::new("uid", "resets_password"), &description);
        assert_eq!(event.labels(), [Label::severity(Severity::Normal)]);
    }

    #[test]
    fn title_derivation_splits_camel_case_and_underscores() {
        let camel = with_title(TestStartedEvent::new("uid", "shouldLoginSuccessfully"));
        assert_eq!(camel.title(), Some("Should login successfully"));

        let snake = with_title(TestStartedEvent::new("uid", "login_with_2fa"));
        assert_eq!(snake.title(), Some("Login with 2fa"));
    }

    #[test]
    fn title_derivation_keeps_acronyms_as_one_word() {
        let event = with_title(TestStartedEvent::new("uid", "parseHTTPResponse"));
        assert_eq!(event.title(), Some("Parse http response"));

        let leading = with_title(TestStartedEvent::new("uid", "HTTPClientReconnects"));
        assert_eq!(leading.title(), Some("Http client reconnects"));
    }

    #[test]
    fn explicit_title_wins_over_derivation() {
        let mut event = TestStartedEvent::new("uid", "raw_name");
        let description =
            TestDescription::new("raw_name").with_meta(TestMeta::new().with_title("Chosen"));
        event = with_essential_info(event, &description);
        event = with_title(event);
        assert_eq!(event.title(), Some("Chosen"));
    }

    #[test]
    fn empty_name_derives_no_title() {
        let event = with_title(TestStartedEvent::new("uid", ""));
        assert_eq!(event.title(), None);
    }

    #[test]
    fn validated_story_issues_flow_through_decoration() {
        let story = Story::new("Checkout").with_meta(TestMeta::new().with_issue("PROJ-3"));
        let Ok(processor) = StoryIssueProcessor::new(&story) else {
            panic!("references should validate");
        };
        let event = with_issues(TestStartedEvent::new("uid", "pays"), &processor);
        assert_eq!(event.labels(), [Label::issue("PROJ-3")]);
    }
}
