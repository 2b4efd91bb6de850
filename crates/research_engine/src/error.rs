use crate::{UpstreamError, ValidationFailure};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EngineError {
    #[error("upstream error: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("malformed response: {0}")]
    MalformedResponse(#[from] ValidationFailure),
    #[error("no sources to build a script from")]
    InsufficientSources,
}

impl EngineError {
    /// One-line message suitable for showing in place of the current view.
    pub fn user_message(&self) -> String {
        match self {
            EngineError::Upstream(err) => {
                format!("The research backend could not complete the request ({err}).")
            }
            EngineError::MalformedResponse(failure) => {
                format!("The research backend returned data in an unexpected shape ({failure}).")
            }
            EngineError::InsufficientSources => {
                "Search for a topic first: a script needs at least one source.".to_string()
            }
        }
    }
}
