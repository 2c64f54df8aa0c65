//! Issue-tracker reference resolution for suite payloads.
//!
//! One processor is derived per suite start and lives until the suite ends.
//! Construction validates every reference up front so that malformed
//! metadata surfaces immediately, at the suite boundary, rather than on the
//! first decorated test.

use thiserror::Error;

use crate::model::{Story, TestClass};

/// Errors raised while deriving issue references from payload metadata.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum IssueError {
    /// A reference was empty after trimming.
    #[error("issue reference on '{source_name}' is empty")]
    EmptyReference {
        /// Name of the suite payload carrying the reference.
        source_name: String,
    },
    /// A reference contains interior whitespace.
    #[error("issue reference '{reference}' on '{source_name}' contains whitespace")]
    MalformedReference {
        /// The offending reference, trimmed.
        reference: String,
        /// Name of the suite payload carrying the reference.
        source_name: String,
    },
}

/// Produces the issue references attached to the current suite.
pub trait IssueProcessor {
    /// Returns the validated references in declaration order.
    fn issues(&self) -> &[String];
}

/// Issue references resolved from a class payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassIssueProcessor {
    issues: Vec<String>,
}

impl ClassIssueProcessor {
    /// Validates and collects the class's issue references.
    ///
    /// # Errors
    /// Returns an error when a reference is empty or contains whitespace.
    pub fn new(class: &TestClass) -> Result<Self, IssueError> {
        Ok(Self {
            issues: validated(class.meta().issues(), class.simple_name())?,
        })
    }
}

impl IssueProcessor for ClassIssueProcessor {
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

/// Issue references resolved from a story payload.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoryIssueProcessor {
    issues: Vec<String>,
}

impl StoryIssueProcessor {
    /// Validates and collects the story's issue references.
    ///
    /// # Errors
    /// Returns an error when a reference is empty or contains whitespace.
    pub fn new(story: &Story) -> Result<Self, IssueError> {
        Ok(Self {
            issues: validated(story.meta().issues(), story.name())?,
        })
    }
}

impl IssueProcessor for StoryIssueProcessor {
    fn issues(&self) -> &[String] {
        &self.issues
    }
}

/// Trims, rejects malformed references, and deduplicates preserving order.
fn validated(references: &[String], source_name: &str) -> Result<Vec<String>, IssueError> {
    let mut kept: Vec<String> = Vec::with_capacity(references.len());
    for raw in references {
        let reference = raw.trim();
        if reference.is_empty() {
            return Err(IssueError::EmptyReference {
                source_name: source_name.to_string(),
            });
        }
        if reference.chars().any(char::is_whitespace) {
            return Err(IssueError::MalformedReference {
                reference: reference.to_string(),
                source_name: source_name.to_string(),
            });
        }
        if !kept.iter().any(|seen| seen.as_str() == reference) {
            kept.push(reference.to_string());
        }
    }
    Ok(kept)
}

#[cfg(test)]
mod tests {
    use super::{ClassIssueProcessor, IssueError, IssueProcessor, StoryIssueProcessor};
    use crate::model::{Story, TestClass, TestMeta};

    #[test]
    fn class_references_are_trimmed_and_deduplicated() {
        let class = TestClass::new("LoginSuite").with_meta(
            TestMeta::new()
                .with_issue("  PROJ-1 ")
                .with_issue("PROJ-2")
                .with_issue("PROJ-1"),
        );
        let Ok(processor) = ClassIssueProcessor::new(&class) else {
            panic!("references should validate");
        };
        assert_eq!(processor.issues(), ["PROJ-1", "PROJ-2"]);
    }

    #[test]
    fn empty_reference_fails_construction() {
        let class =
            TestClass::new("LoginSuite").with_meta(TestMeta::new().with_issue("   "));
        assert_eq!(
            ClassIssueProcessor::new(&class),
            Err(IssueError::EmptyReference {
                source_name: "LoginSuite".to_string(),
            })
        );
    }

    #[test]
    fn interior_whitespace_fails_construction() {
        let story = Story::new("Checkout").with_meta(TestMeta::new().with_issue("PROJ 9"));
        assert_eq!(
            StoryIssueProcessor::new(&story),
            Err(IssueError::MalformedReference {
                reference: "PROJ 9".to_string(),
                source_name: "Checkout".to_string(),
            })
        );
    }

    #[test]
    fn story_without_references_yields_an_empty_processor() {
        let story = Story::new("Checkout");
        let Ok(processor) = StoryIssueProcessor::new(&story) else {
            panic!("empty metadata should validate");
        };
        assert!(processor.issues().is_empty());
    }
}
