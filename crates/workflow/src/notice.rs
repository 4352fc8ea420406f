//! Transient status notices.
//!
//! A notice is the single human-readable message shown after an operation
//! outcome. It replaces any prior message and expires on its own after a
//! fixed delay unless superseded first.

use std::time::Duration;

/// How long an error or generic status notice stays visible.
pub const NOTICE_TTL: Duration = Duration::from_secs(5);

/// How long the post-submit success confirmation stays visible.
pub const SUBMIT_SUCCESS_TTL: Duration = Duration::from_secs(3);

/// Banner text shown after a successful report submission.
pub const SUBMIT_SUCCESS_MESSAGE: &str = "Issue report submitted successfully!";

/// Whether a notice reports a failure or a success.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Error,
    Success,
}

/// A transient status message for the user interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    /// Build an error notice.
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }

    /// Build a success notice.
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }
}
