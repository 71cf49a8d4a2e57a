//! Error type for the progression core.

use thiserror::Error;

/// Misuse and configuration errors raised by the progression core.
///
/// A call that returns one of these leaves the session untouched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("session has no current task; call start() first")]
    NotStarted,

    #[error("session already started")]
    AlreadyStarted,

    #[error("answer already submitted; waiting for the next task")]
    AnswerPending,

    #[error("session has been disposed")]
    Disposed,

    #[error("unknown task category: {0}")]
    UnknownCategory(String),

    #[error("task catalog is empty")]
    EmptyCatalog,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_problem() {
        assert!(GameError::NotStarted.to_string().contains("start()"));
        assert_eq!(
            GameError::UnknownCategory("chess".to_string()).to_string(),
            "unknown task category: chess"
        );
    }
}
