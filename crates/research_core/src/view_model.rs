use crate::View;

/// Coarse state of the session, derived from the busy flags and contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    SourcesReady,
    Paginating,
    Synthesizing,
    ScriptReady,
    Errored,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub query: String,
    pub active_view: View,
    pub phase: Phase,
    pub sources: Vec<SourceRowView>,
    pub script: Option<String>,
    pub searching: bool,
    pub paginating: bool,
    pub synthesizing: bool,
    pub can_load_more: bool,
    pub error: Option<String>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceRowView {
    /// 1-based position in the list; with `url` this identifies the row.
    pub position: usize,
    pub title: String,
    pub url: String,
    pub summary: String,
}
