use std::fmt;

/// Result type for roster-client construction
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building a client (never by a request)
#[derive(Debug)]
pub enum Error {
    /// Base URL could not be parsed or is not http(s)
    InvalidBaseUrl(String),

    /// Underlying HTTP client could not be constructed
    Build(reqwest::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidBaseUrl(msg) => write!(f, "Invalid base URL: {}", msg),
            Error::Build(err) => write!(f, "HTTP client error: {}", err),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Build(err) => Some(err),
            Error::InvalidBaseUrl(_) => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Build(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::InvalidBaseUrl(err.to_string())
    }
}

/// Failure of a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    /// No response was received
    Transport(String),

    /// The server answered with a non-success status; `message` is the body text
    Rejected { status: u16, message: String },

    /// The body was not the JSON we expected
    Parse(String),
}

impl RequestError {
    /// Message as carried by the failure, verbatim.
    pub fn message(&self) -> &str {
        match self {
            RequestError::Transport(msg) => msg,
            RequestError::Rejected { message, .. } => message,
            RequestError::Parse(msg) => msg,
        }
    }

    /// Message suitable for a status line: one surrounding quote character
    /// removed from each end. `None` when nothing is left.
    pub fn user_message(&self) -> Option<String> {
        let stripped = strip_quotes(self.message());
        if stripped.is_empty() {
            None
        } else {
            Some(stripped.to_string())
        }
    }

    pub fn status(&self) -> Option<u16> {
        match self {
            RequestError::Rejected { status, .. } => Some(*status),
            RequestError::Transport(_) | RequestError::Parse(_) => None,
        }
    }
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            RequestError::Rejected { status, message } => {
                write!(f, "Server rejected request ({}): {}", status, message)
            }
            RequestError::Parse(msg) => write!(f, "Invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for RequestError {}

/// Drop a leading and a trailing `"` if present.
pub fn strip_quotes(text: &str) -> &str {
    let text = text.strip_prefix('"').unwrap_or(text);
    text.strip_suffix('"').unwrap_or(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_quotes() {
        assert_eq!(
            strip_quotes("\"Cannot delete: department has employees\""),
            "Cannot delete: department has employees"
        );
        assert_eq!(strip_quotes("plain"), "plain");
        assert_eq!(strip_quotes("\"left"), "left");
        assert_eq!(strip_quotes("say \"hi\""), "say \"hi");
        assert_eq!(strip_quotes("\"\""), "");
    }

    #[test]
    fn test_user_message_empty_after_strip() {
        let err = RequestError::Rejected {
            status: 400,
            message: "\"\"".to_string(),
        };
        assert_eq!(err.user_message(), None);
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn test_transport_message_is_verbatim() {
        let err = RequestError::Transport("connection refused".to_string());
        assert_eq!(err.message(), "connection refused");
        assert_eq!(err.user_message().as_deref(), Some("connection refused"));
        assert_eq!(err.status(), None);
    }
}
