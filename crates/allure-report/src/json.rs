//! JSON rendering for fired events.
//!
//! The rendering is a diagnostic view of the event stream: each event keeps
//! its tag under the `event` key, and attachment bodies are elided. Sinks
//! that buffer events can hand their snapshot to [`write`] or [`to_string`].

use std::io::Write;

use crate::event::AllureEvent;

/// Serializes the events into the writer as a JSON array.
///
/// # Examples
/// ```
/// use allure_report::event::AllureEvent;
/// use allure_report::json;
///
/// let events = vec![AllureEvent::TestFinished];
/// let mut buffer = Vec::new();
/// json::write(&mut buffer, &events).unwrap();
/// let rendered = String::from_utf8(buffer).unwrap();
/// assert!(rendered.contains("\"event\":\"test-finished\""));
/// ```
///
/// # Errors
/// Returns an error when serialization fails or the writer rejects output.
pub fn write<W: Write>(writer: &mut W, events: &[AllureEvent]) -> serde_json::Result<()> {
    serde_json::to_writer(writer, events)
}

/// Renders the events as a JSON string.
///
/// # Errors
/// Returns an error when serialization fails.
pub fn to_string(events: &[AllureEvent]) -> serde_json::Result<String> {
    serde_json::to_string(events)
}
