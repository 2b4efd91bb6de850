use std::sync::{mpsc, Arc};

use hub_logging::{hub_info, hub_warn};
use research_core::{Effect, FindPurpose, Msg};
use research_engine::{EngineEvent, EngineHandle, EventSink, GenerativeBackend, ScriptSettings};

use crate::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        backend: Arc<dyn GenerativeBackend>,
        script: ScriptSettings,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> std::io::Result<Self> {
        let sink = Arc::new(MsgSink { tx: event_tx });
        let engine = EngineHandle::new(backend, script, sink)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FindSources {
                    request_id,
                    topic,
                    purpose,
                } => {
                    let label = match purpose {
                        FindPurpose::Search => "search",
                        FindPurpose::NextPage => "next page",
                    };
                    hub_info!("FindSources ({}) request_id={} topic={:?}", label, request_id, topic);
                    self.engine.find_sources(request_id, topic);
                }
                Effect::SynthesizeScript {
                    request_id,
                    topic,
                    sources,
                } => {
                    hub_info!(
                        "SynthesizeScript request_id={} sources={}",
                        request_id,
                        sources.len()
                    );
                    self.engine.synthesize_script(request_id, topic, sources);
                }
            }
        }
    }
}

/// Feeds engine completions back into the app loop as controller messages.
struct MsgSink {
    tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(AppEvent::Core(to_msg(event)));
    }
}

/// Errors become the single user-facing message the controller shows.
pub fn to_msg(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::SourcesFound { request_id, result } => Msg::SourcesFound {
            request_id,
            result: result.map_err(|err| {
                hub_warn!("Sources request {} failed: {}", request_id, err);
                err.user_message()
            }),
        },
        EngineEvent::ScriptGenerated { request_id, result } => Msg::ScriptGenerated {
            request_id,
            result: result.map_err(|err| {
                hub_warn!("Script request {} failed: {}", request_id, err);
                err.user_message()
            }),
        },
    }
}
