pub mod client;
pub mod fallback;
pub mod parser;
pub mod prompt;
pub mod types;

pub use client::*;
pub use fallback::*;
pub use parser::*;
pub use prompt::*;
pub use types::*;

use std::time::Duration;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReasoningError {
    #[error("Reasoning service unreachable: {0}")]
    Transport(String),

    #[error("Reasoning service timed out after {0:?}")]
    Timeout(Duration),

    #[error("Reasoning service returned error (status {status}): {body}")]
    Status { status: u16, body: String },

    #[error("Reasoning service returned no content")]
    EmptyResponse,

    #[error("Malformed response envelope: {0}")]
    Envelope(String),

    #[error("Malformed verdict: {0}")]
    Verdict(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_keeps_sub_second_precision() {
        let err = ReasoningError::Timeout(Duration::from_millis(50));
        assert_eq!(err.to_string(), "Reasoning service timed out after 50ms");

        let err = ReasoningError::Timeout(Duration::from_secs(8));
        assert_eq!(err.to_string(), "Reasoning service timed out after 8s");
    }
}
