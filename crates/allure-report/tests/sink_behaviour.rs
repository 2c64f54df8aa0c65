//! Behavioural tests for sink composition and event rendering.

use allure_report::event::{AllureEvent, FailureCause, SuiteStartedEvent, TestStartedEvent};
use allure_report::sink::{CollectingSink, EventSink, LoggingSink};
use allure_report::json;
use rstest::{fixture, rstest};

#[fixture]
fn suite_events() -> Vec<AllureEvent> {
    vec![
        AllureEvent::SuiteStarted(SuiteStartedEvent::new("uid-7", "CheckoutSuite")),
        AllureEvent::TestStarted(TestStartedEvent::new("uid-7", "pays_with_card")),
        AllureEvent::TestFailure {
            cause: FailureCause::new("AssertionError", "card declined"),
        },
        AllureEvent::TestFinished,
        AllureEvent::SuiteFinished {
            uid: "uid-7".to_string(),
        },
    ]
}

#[rstest]
fn collecting_sink_replays_a_whole_suite(suite_events: Vec<AllureEvent>) {
    let sink = CollectingSink::new();
    for event in suite_events.clone() {
        sink.fire(event);
    }
    assert_eq!(sink.snapshot(), suite_events);
    assert_eq!(sink.drain(), suite_events);
    assert!(sink.is_empty());
}

#[rstest]
fn logging_sink_is_transparent_to_the_buffer(suite_events: Vec<AllureEvent>) {
    let sink = LoggingSink::new(CollectingSink::new());
    for event in suite_events.clone() {
        sink.fire(event);
    }
    assert_eq!(sink.into_inner().drain(), suite_events);
}

#[rstest]
fn drained_events_render_as_a_json_stream(suite_events: Vec<AllureEvent>) {
    let sink = CollectingSink::new();
    for event in suite_events {
        sink.fire(event);
    }
    let Ok(text) = json::to_string(&sink.drain()) else {
        panic!("drained events should serialize");
    };
    assert!(text.starts_with('['));
    assert!(text.contains("\"event\":\"suite-started\""));
    assert!(text.contains("\"event\":\"test-failure\""));
}
