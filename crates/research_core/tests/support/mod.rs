#![allow(dead_code)]

use std::sync::Once;

use research_core::{update, AppState, Effect, FindPurpose, Msg, RequestId, SourceRecord};

pub fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(hub_logging::initialize_for_tests);
}

pub fn batch(tag: &str, count: usize) -> Vec<SourceRecord> {
    (1..=count)
        .map(|n| {
            SourceRecord::new(
                format!("{tag} source {n}"),
                format!("https://{tag}.example.com/{n}"),
                format!("Summary of {tag} source {n}."),
            )
        })
        .collect()
}

pub fn find_request(effects: &[Effect]) -> (RequestId, String, FindPurpose) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::FindSources {
                request_id,
                topic,
                purpose,
            } => Some((*request_id, topic.clone(), *purpose)),
            _ => None,
        })
        .expect("find sources effect")
}

pub fn script_request(effects: &[Effect]) -> (RequestId, Vec<SourceRecord>) {
    effects
        .iter()
        .find_map(|effect| match effect {
            Effect::SynthesizeScript {
                request_id,
                sources,
                ..
            } => Some((*request_id, sources.clone())),
            _ => None,
        })
        .expect("synthesize effect")
}

/// Runs a search for `topic` and answers it with `records`.
pub fn searched(topic: &str, records: Vec<SourceRecord>) -> AppState {
    let (state, effects) = update(AppState::new(), Msg::SearchSubmitted(topic.to_string()));
    let (request_id, _, _) = find_request(&effects);
    let (state, _) = update(
        state,
        Msg::SourcesFound {
            request_id,
            result: Ok(records),
        },
    );
    state
}
