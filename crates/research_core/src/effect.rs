use crate::{RequestId, SourceRecord};

/// Work the controller asks the outside world to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the backend for a fresh batch of sources on `topic`.
    FindSources {
        request_id: RequestId,
        topic: String,
        purpose: FindPurpose,
    },
    /// Ask the backend for a narrative script built from `sources`.
    SynthesizeScript {
        request_id: RequestId,
        topic: String,
        sources: Vec<SourceRecord>,
    },
}

/// Why a batch of sources is requested. Both issue the same request; only the
/// way the result lands in the list differs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindPurpose {
    Search,
    NextPage,
}
