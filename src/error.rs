//! Error types for prompts and themed output

use thiserror::Error;

/// Result type alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// All errors a prompt or themed write can surface
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors, raised before anything is rendered
    #[error("a choice prompt needs at least one choice")]
    NoChoices,

    #[error("choices {first:?} and {second:?} share the same value")]
    DuplicateChoice { first: String, second: String },

    // Terminal errors
    #[error("input ended before an answer was given")]
    EndOfInput,

    #[error("prompt interrupted")]
    Interrupted,

    #[error("terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Whether this error is a caller mistake in how the prompt was built
    pub fn is_configuration(&self) -> bool {
        matches!(self, Error::NoChoices | Error::DuplicateChoice { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn configuration_errors() {
        assert!(Error::NoChoices.is_configuration());
        assert!(Error::DuplicateChoice {
            first: "X".into(),
            second: "Y".into()
        }
        .is_configuration());
        assert!(!Error::EndOfInput.is_configuration());
        assert!(!Error::Interrupted.is_configuration());
    }

    #[test]
    fn duplicate_message_names_both_labels() {
        let err = Error::DuplicateChoice {
            first: "X".into(),
            second: "Y".into(),
        };
        assert_eq!(err.to_string(), "choices \"X\" and \"Y\" share the same value");
    }
}
