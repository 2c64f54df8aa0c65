//! Sink contracts consuming fired events.
//!
//! A sink handle replaces the process-wide lifecycle singleton of other
//! reporting stacks: it is constructed once and passed explicitly to
//! whichever adapter produces events.

use std::sync::{Mutex, MutexGuard};

use crate::event::AllureEvent;

/// Consumes reporting events fired by an adapter.
pub trait EventSink {
    /// Accepts one fired event.
    fn fire(&self, event: AllureEvent);
}

impl<S: EventSink + ?Sized> EventSink for &S {
    fn fire(&self, event: AllureEvent) {
        (**self).fire(event);
    }
}

/// Buffering sink that retains every fired event in order.
///
/// # Examples
/// ```
/// use allure_report::event::AllureEvent;
/// use allure_report::sink::{CollectingSink, EventSink};
///
/// let sink = CollectingSink::new();
/// sink.fire(AllureEvent::StepFinished);
/// assert_eq!(sink.drain(), vec![AllureEvent::StepFinished]);
/// assert!(sink.is_empty());
/// ```
#[derive(Debug, Default)]
pub struct CollectingSink {
    events: Mutex<Vec<AllureEvent>>,
}

impl CollectingSink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Vec<AllureEvent>> {
        match self.events.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }

    /// Clones the events fired so far without clearing them.
    #[must_use]
    pub fn snapshot(&self) -> Vec<AllureEvent> {
        self.lock().clone()
    }

    /// Removes and returns every fired event.
    #[must_use]
    pub fn drain(&self) -> Vec<AllureEvent> {
        self.lock().drain(..).collect()
    }

    /// Returns the number of events fired so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// Returns whether nothing has been fired yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}

impl EventSink for CollectingSink {
    fn fire(&self, event: AllureEvent) {
        self.lock().push(event);
    }
}

/// Decorator that logs each event at debug level before forwarding it.
#[derive(Debug, Default)]
pub struct LoggingSink<S> {
    inner: S,
}

impl<S: EventSink> LoggingSink<S> {
    /// Wraps an inner sink.
    #[must_use]
    pub fn new(inner: S) -> Self {
        Self { inner }
    }

    /// Returns the wrapped sink.
    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    /// Unwraps the decorator, returning the inner sink.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }
}

impl<S: EventSink> EventSink for LoggingSink<S> {
    fn fire(&self, event: AllureEvent) {
        log::debug!(target: "allure", "fired {event:?}");
        self.inner.fire(event);
    }
}
