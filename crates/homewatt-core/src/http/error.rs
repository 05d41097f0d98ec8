use thiserror::Error;

/// Failure surfaced to API callers.
///
/// The display string is the user-facing message; side effects (clearing the
/// token, navigating to login) have already happened when a caller sees one.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("{message}")]
    Unauthorized { message: String },

    /// Any other non-2xx status, or a transport failure (`status` is `None`)
    #[error("{message}")]
    Request {
        status: Option<u16>,
        message: String,
    },
}

impl ApiError {
    pub fn message(&self) -> &str {
        match self {
            ApiError::Unauthorized { message } | ApiError::Request { message, .. } => message,
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized { .. } => Some(401),
            ApiError::Request { status, .. } => *status,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Unauthorized { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_plain_message() {
        let err = ApiError::Request {
            status: Some(404),
            message: "Device not found".to_string(),
        };
        assert_eq!(err.to_string(), "Device not found");
        assert_eq!(err.message(), "Device not found");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_status() {
        let err = ApiError::Unauthorized {
            message: "expired".to_string(),
        };
        assert_eq!(err.status(), Some(401));
        assert!(err.is_unauthorized());
    }
}
