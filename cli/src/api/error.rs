use thiserror::Error;

/// Shape of a failed call to the flight API, classified at the transport boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// The server answered with a non-2xx status.
    #[error("HTTP {code} {text}")]
    Status { code: u16, text: String },

    /// The request went out but nothing came back.
    #[error("{message}")]
    NoResponse { message: String },

    /// The request could not be built or sent as configured.
    #[error("{message}")]
    Setup { message: String },

    #[error("{message}")]
    Unknown { message: String },
}

impl FetchError {
    pub fn status(code: u16, text: impl Into<String>) -> Self {
        Self::Status {
            code,
            text: text.into(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();

        if let Some(status) = err.status() {
            Self::status(status.as_u16(), status.canonical_reason().unwrap_or(""))
        } else if err.is_builder() || err.is_redirect() {
            Self::Setup { message }
        } else if err.is_decode() {
            Self::Unknown { message }
        } else if err.is_connect() || err.is_timeout() || err.is_request() || err.is_body() {
            Self::NoResponse { message }
        } else {
            Self::Unknown { message }
        }
    }
}
