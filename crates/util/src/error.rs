//! Errors raised at the fallible edges of the value model.
//!
//! Merging itself never fails; only building a [`RegExp`](crate::RegExp)
//! and exporting to JSON can.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    #[error("invalid regular expression /{pattern}/: {reason}")]
    InvalidPattern { pattern: String, reason: String },
    #[error("invalid regular expression flag '{0}'")]
    InvalidFlag(char),
    #[error("duplicate regular expression flag '{0}'")]
    DuplicateFlag(char),
    #[error("{0} cannot be represented as JSON")]
    NotRepresentable(&'static str),
}
