//! Event vocabulary and sink contracts for Allure-style test reporting.
//!
//! The crate defines the outgoing side of a reporting bridge: the tagged
//! [`AllureEvent`] vocabulary, decorator seams for enriching suite and test
//! start events, the [`EventSink`] handle events are fired into, a JSON
//! rendering of fired events, and the one-time environment description
//! registration performed when a report producer is constructed.

pub mod environment;
pub mod event;
pub mod json;
pub mod sink;

pub use event::{
    AllureEvent, AnnotatedEvent, AttachmentEvent, FailureCause, Label, Severity,
    SuiteStartedEvent, TestStartedEvent,
};
pub use sink::{CollectingSink, EventSink, LoggingSink};
