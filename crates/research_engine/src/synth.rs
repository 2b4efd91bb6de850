use std::sync::Arc;

use hub_logging::hub_debug;
use research_core::SourceRecord;

use crate::prompt::script_request_prompt;
use crate::{EngineError, GenerateRequest, GenerativeBackend, UpstreamError, UpstreamKind};

pub const DEFAULT_SCRIPT_LANGUAGE: &str = "Bahasa Indonesia";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptSettings {
    /// Language the script is written in, named the way a person would say it.
    pub language: String,
}

impl Default for ScriptSettings {
    fn default() -> Self {
        Self {
            language: DEFAULT_SCRIPT_LANGUAGE.to_string(),
        }
    }
}

/// Turns a topic and its sources into one narrative paragraph.
#[derive(Clone)]
pub struct ScriptSynthesizer {
    backend: Arc<dyn GenerativeBackend>,
    settings: ScriptSettings,
}

impl ScriptSynthesizer {
    pub fn new(backend: Arc<dyn GenerativeBackend>, settings: ScriptSettings) -> Self {
        Self { backend, settings }
    }

    /// The length bounds in the prompt are only a request to the backend; the
    /// reply is not measured or re-requested.
    pub async fn synthesize_script(
        &self,
        topic: &str,
        sources: &[SourceRecord],
    ) -> Result<String, EngineError> {
        if sources.is_empty() {
            return Err(EngineError::InsufficientSources);
        }

        let prompt = script_request_prompt(topic, sources, &self.settings.language);
        let raw = self.backend.generate(GenerateRequest::text(prompt)).await?;
        let script = raw.trim();
        if script.is_empty() {
            return Err(UpstreamError::new(UpstreamKind::EmptyResponse, "script is blank").into());
        }
        hub_debug!(
            "Script for {:?} from {} sources: {} chars",
            topic,
            sources.len(),
            script.chars().count()
        );
        Ok(script.to_string())
    }
}
