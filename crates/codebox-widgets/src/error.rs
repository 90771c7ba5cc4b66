//! Errors reported to callers of the code input widget.
//!
//! Rejected user input is not an error: the widget resets the affected box
//! and carries on.

/// Misuse of the code input API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodeInputError {
    /// A focus request named a box past the end of the code.
    #[error("focus index {index} is out of range for a code length of {code_length}")]
    FieldOutOfRange {
        /// The requested box index.
        index: usize,
        /// The configured number of boxes.
        code_length: usize,
    },
}
