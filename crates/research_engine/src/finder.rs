use std::sync::Arc;

use hub_logging::{hub_debug, hub_warn};
use research_core::SourceRecord;

use crate::prompt::source_request_prompt;
use crate::schema::{source_list_schema, validate_source_list};
use crate::{EngineError, GenerateRequest, GenerativeBackend};

/// Asks the backend for a batch of web sources on a topic.
///
/// Every call is an independent request; there is no paging cursor, so
/// repeated calls for one topic may overlap.
#[derive(Clone)]
pub struct SourceFinder {
    backend: Arc<dyn GenerativeBackend>,
}

impl SourceFinder {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self { backend }
    }

    pub async fn find_sources(&self, topic: &str) -> Result<Vec<SourceRecord>, EngineError> {
        let request = GenerateRequest::structured(source_request_prompt(topic), source_list_schema());
        let raw = self.backend.generate(request).await?;
        let sources = validate_source_list(&raw).inspect_err(|failure| {
            hub_warn!("Rejected source reply for {:?}: {}", topic, failure);
        })?;
        hub_debug!("Found {} sources for {:?}", sources.len(), topic);
        Ok(sources)
    }
}
