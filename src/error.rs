//! Client Errors

use thiserror::Error;

/// Everything that can stop an interaction short of a server response
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error("Passwords do not match.")]
    PasswordMismatch,
    #[error("Invalid or expired reset link.")]
    MissingResetToken,
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    #[error("network error: {0}")]
    Network(String),
    #[error("failed to build request: {0}")]
    RequestBuild(String),
}

impl ClientError {
    /// Validation errors are shown to the user; the rest only reach the log
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::PasswordMismatch | Self::MissingResetToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages_are_user_facing() {
        assert!(ClientError::PasswordMismatch.is_user_facing());
        assert_eq!(ClientError::PasswordMismatch.to_string(), "Passwords do not match.");
        assert!(ClientError::MissingResetToken.is_user_facing());
        assert!(!ClientError::Network("offline".into()).is_user_facing());
        assert!(!ClientError::MissingElement("body").is_user_facing());
    }
}
