//! Step listener adapter translating BDD runner lifecycle callbacks into
//! Allure-style reporting events.
//!
//! The runner delivers suite, test, and step notifications through the
//! [`StepListener`] trait; [`AllureStepListener`] re-emits each one as the
//! semantically corresponding [`allure_report`] event, enriched with
//! metadata decorations, issue references, and best-effort screenshot
//! attachments.

pub mod adapter;
pub mod annotations;
pub mod issue;
pub mod listener;
pub mod model;
pub mod screenshot;

pub use adapter::{AllureStepListener, IGNORED_MESSAGE};
pub use listener::{ListenerError, StepListener};
