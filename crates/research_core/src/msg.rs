use crate::{RequestId, SourceRecord, View};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User submitted a topic from the search box.
    SearchSubmitted(String),
    /// User switched between the sources and script views.
    ViewSelected(View),
    /// User clicked "Next Page" under the source list.
    LoadMoreClicked,
    /// Engine completion for a source request.
    SourcesFound {
        request_id: RequestId,
        result: Result<Vec<SourceRecord>, String>,
    },
    /// Engine completion for a script request.
    ScriptGenerated {
        request_id: RequestId,
        result: Result<String, String>,
    },
}
