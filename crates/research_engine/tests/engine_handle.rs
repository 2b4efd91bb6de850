mod support;

use std::sync::{mpsc, Arc};
use std::time::Duration;

use research_core::SourceRecord;
use research_engine::{ChannelEventSink, EngineError, EngineEvent, EngineHandle, ScriptSettings};

use support::{sources_reply, ScriptedBackend};

const WAIT: Duration = Duration::from_secs(5);

fn engine_with(backend: ScriptedBackend) -> (EngineHandle, mpsc::Receiver<EngineEvent>) {
    let (tx, rx) = mpsc::channel();
    let engine = EngineHandle::new(
        Arc::new(backend),
        ScriptSettings::default(),
        Arc::new(ChannelEventSink::new(tx)),
    )
    .expect("engine starts");
    (engine, rx)
}

#[test]
fn find_sources_completion_carries_request_id() {
    let (engine, events) = engine_with(ScriptedBackend::new().reply_text(sources_reply("a", 3)));

    engine.find_sources(42, "volcanoes");

    match events.recv_timeout(WAIT).expect("event") {
        EngineEvent::SourcesFound { request_id, result } => {
            assert_eq!(request_id, 42);
            assert_eq!(result.expect("sources").len(), 3);
        }
        other => panic!("unexpected event {other:?}"),
    }
}

#[test]
fn synthesis_with_no_sources_fails_fast() {
    let (engine, events) = engine_with(ScriptedBackend::new());

    engine.synthesize_script(7, "volcanoes", Vec::new());

    assert_eq!(
        events.recv_timeout(WAIT).expect("event"),
        EngineEvent::ScriptGenerated {
            request_id: 7,
            result: Err(EngineError::InsufficientSources),
        }
    );
}

#[test]
fn synthesis_returns_script() {
    let (engine, events) = engine_with(ScriptedBackend::new().reply_text("A story."));

    engine.synthesize_script(
        3,
        "volcanoes",
        vec![SourceRecord::new("t", "https://t.example.com", "s")],
    );

    assert_eq!(
        events.recv_timeout(WAIT).expect("event"),
        EngineEvent::ScriptGenerated {
            request_id: 3,
            result: Ok("A story.".to_string()),
        }
    );
}
