//! Ampio client error types.

/// Errors that can occur when reading a station from the Ampio API.
///
/// The station reader treats every variant as a soft miss; callers that
/// need to know why a read came back empty use `AmpioSmog::try_fetch`.
#[derive(Debug, thiserror::Error)]
pub enum AmpioError {
    /// HTTP request failed (connection refused, DNS, timeout, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body is not valid JSON
    #[error("JSON parse error: {message}")]
    Json {
        message: String,
        body: Option<String>,
    },

    /// Valid JSON, but neither a summary object nor a list of readings
    #[error("unexpected response shape: {0}")]
    UnexpectedShape(&'static str),

    /// The station returned an empty list of readings
    #[error("station returned no readings")]
    EmptyResult,

    /// Endpoint configuration cannot produce a request URL
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AmpioError {
    /// Whether the request never produced a response body.
    pub fn is_transport(&self) -> bool {
        matches!(self, AmpioError::Http(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AmpioError::EmptyResult;
        assert_eq!(err.to_string(), "station returned no readings");

        let err = AmpioError::UnexpectedShape("number");
        assert_eq!(err.to_string(), "unexpected response shape: number");

        let err = AmpioError::Json {
            message: "expected value at line 1 column 1".into(),
            body: Some("Hello, world".into()),
        };
        assert!(err.to_string().contains("JSON parse error"));
        assert!(err.to_string().contains("expected value"));

        let err = AmpioError::InvalidConfig("path template must contain {id}".into());
        assert_eq!(
            err.to_string(),
            "invalid configuration: path template must contain {id}"
        );
    }

    #[test]
    fn payload_errors_are_not_transport() {
        assert!(!AmpioError::EmptyResult.is_transport());
        assert!(!AmpioError::UnexpectedShape("null").is_transport());
    }
}
