use crate::api::FetchError;

pub const NOT_FOUND_MESSAGE: &str =
    "Flight details are unavailable (404). Please check the flight ID.";
pub const RATE_LIMIT_MESSAGE: &str = "API rate limit exceeded. Please try again later.";
pub const SERVER_ERROR_MESSAGE: &str = "Internal server error. Please try again later.";
pub const NETWORK_MESSAGE: &str =
    "Network error: Please check your internet connection or try again later.";
pub const UNKNOWN_MESSAGE: &str = "An unknown error occurred.";

/// Maps a failed board fetch to the message shown in place of the table.
pub fn classify(failure: &FetchError) -> String {
    match failure {
        FetchError::Status { code: 404, .. } => NOT_FOUND_MESSAGE.to_string(),
        FetchError::Status { code: 429, .. } => RATE_LIMIT_MESSAGE.to_string(),
        FetchError::Status { code: 500, .. } => SERVER_ERROR_MESSAGE.to_string(),
        FetchError::Status { code, text } => format!("Error: {} - {}", code, text),
        FetchError::NoResponse { .. } => NETWORK_MESSAGE.to_string(),
        FetchError::Setup { message } => format!("Error: {}", message),
        FetchError::Unknown { .. } => UNKNOWN_MESSAGE.to_string(),
    }
}
