//! Research hub engine: generative backend calls and effect execution.
mod backend;
mod engine;
mod error;
mod finder;
mod prompt;
mod schema;
mod synth;
mod types;

pub use backend::{BackendSettings, GeminiBackend, GenerateRequest, GenerativeBackend};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use error::EngineError;
pub use finder::SourceFinder;
pub use prompt::{
    enumerate_sources, script_request_prompt, source_request_prompt, SCRIPT_MAX_CHARS,
    SCRIPT_MIN_CHARS, SOURCES_PER_REQUEST,
};
pub use schema::{source_list_schema, validate_source_list, ElementDefect, ValidationFailure};
pub use synth::{ScriptSettings, ScriptSynthesizer};
pub use types::{EngineEvent, UpstreamError, UpstreamKind};
