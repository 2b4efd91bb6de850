use crate::{AppState, Effect, FindPurpose, Msg, View};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::SearchSubmitted(raw) => {
            let topic = raw.trim();
            // A blank topic or a search already in flight leaves state untouched.
            if topic.is_empty() || state.is_searching() {
                return (state, Vec::new());
            }
            let topic = topic.to_owned();
            let request_id = state.begin_search(topic.clone());
            vec![Effect::FindSources {
                request_id,
                topic,
                purpose: FindPurpose::Search,
            }]
        }
        Msg::ViewSelected(view) => {
            state.select_view(view);
            if view == View::Script && state.needs_script() {
                vec![synthesize(&mut state)]
            } else {
                Vec::new()
            }
        }
        Msg::LoadMoreClicked => {
            if !state.can_load_more() {
                return (state, Vec::new());
            }
            let request_id = state.begin_next_page();
            vec![Effect::FindSources {
                request_id,
                topic: state.query().to_owned(),
                purpose: FindPurpose::NextPage,
            }]
        }
        Msg::SourcesFound { request_id, result } => {
            if state.is_pending_search(request_id) {
                state.apply_search_result(request_id, result);
            } else {
                // Unknown ids belong to a superseded search and are dropped.
                state.apply_page_result(request_id, result);
            }
            resynthesize_for_open_view(&mut state)
        }
        Msg::ScriptGenerated { request_id, result } => {
            state.apply_script_result(request_id, result);
            // A result for an older revision was dropped; the open script view
            // still needs one for the current list.
            resynthesize_for_open_view(&mut state)
        }
    };

    (state, effects)
}

fn synthesize(state: &mut AppState) -> Effect {
    let (request_id, sources) = state.begin_synthesis();
    Effect::SynthesizeScript {
        request_id,
        topic: state.query().to_owned(),
        sources,
    }
}

fn resynthesize_for_open_view(state: &mut AppState) -> Vec<Effect> {
    if state.script_view_needs_script() {
        vec![synthesize(state)]
    } else {
        Vec::new()
    }
}
