use std::sync::{mpsc, Arc};
use std::thread;

use hub_logging::{hub_info, hub_warn};
use research_core::{RequestId, SourceRecord};

use crate::{EngineEvent, GenerativeBackend, ScriptSettings, ScriptSynthesizer, SourceFinder};

/// Receives completions from the engine thread.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    FindSources {
        request_id: RequestId,
        topic: String,
    },
    SynthesizeScript {
        request_id: RequestId,
        topic: String,
        sources: Vec<SourceRecord>,
    },
}

/// Runs backend calls on a dedicated thread with its own tokio runtime.
///
/// Each command is one attempt: no retry, no cancellation. Dropping the handle
/// stops the thread and abandons calls still in flight.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(
        backend: Arc<dyn GenerativeBackend>,
        script: ScriptSettings,
        sink: Arc<dyn EventSink>,
    ) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let finder = SourceFinder::new(backend.clone());
        let synthesizer = ScriptSynthesizer::new(backend, script);

        thread::spawn(move || {
            while let Ok(command) = cmd_rx.recv() {
                let finder = finder.clone();
                let synthesizer = synthesizer.clone();
                let sink = sink.clone();
                runtime.spawn(async move {
                    let event = handle_command(&finder, &synthesizer, command).await;
                    sink.emit(event);
                });
            }
        });

        Ok(Self { cmd_tx })
    }

    pub fn find_sources(&self, request_id: RequestId, topic: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::FindSources {
            request_id,
            topic: topic.into(),
        });
    }

    pub fn synthesize_script(
        &self,
        request_id: RequestId,
        topic: impl Into<String>,
        sources: Vec<SourceRecord>,
    ) {
        let _ = self.cmd_tx.send(EngineCommand::SynthesizeScript {
            request_id,
            topic: topic.into(),
            sources,
        });
    }
}

async fn handle_command(
    finder: &SourceFinder,
    synthesizer: &ScriptSynthesizer,
    command: EngineCommand,
) -> EngineEvent {
    match command {
        EngineCommand::FindSources { request_id, topic } => {
            hub_info!("FindSources request_id={} topic={:?}", request_id, topic);
            let result = finder.find_sources(&topic).await;
            if let Err(err) = &result {
                hub_warn!("FindSources request_id={} failed: {}", request_id, err);
            }
            EngineEvent::SourcesFound { request_id, result }
        }
        EngineCommand::SynthesizeScript {
            request_id,
            topic,
            sources,
        } => {
            hub_info!(
                "SynthesizeScript request_id={} topic={:?} sources={}",
                request_id,
                topic,
                sources.len()
            );
            let result = synthesizer.synthesize_script(&topic, &sources).await;
            if let Err(err) = &result {
                hub_warn!("SynthesizeScript request_id={} failed: {}", request_id, err);
            }
            EngineEvent::ScriptGenerated { request_id, result }
        }
    }
}
