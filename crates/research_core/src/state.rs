use crate::source::{Revision, ScriptText, SourceList, SourceRecord};
use crate::view_model::{AppViewModel, Phase, SourceRowView};

pub type RequestId = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Sources,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PendingScript {
    request_id: RequestId,
    revision: Revision,
}

/// Session state for one user. Reset on every new search.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    query: String,
    view: View,
    sources: SourceList,
    script: Option<ScriptText>,
    pending_search: Option<RequestId>,
    pending_page: Option<RequestId>,
    pending_script: Option<PendingScript>,
    error: Option<String>,
    next_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let sources = self
            .sources
            .records()
            .iter()
            .enumerate()
            .map(|(index, record)| SourceRowView {
                position: index + 1,
                title: record.title.clone(),
                url: record.url.clone(),
                summary: record.summary.clone(),
            })
            .collect();

        AppViewModel {
            query: self.query.clone(),
            active_view: self.view,
            phase: self.phase(),
            sources,
            script: self.current_script().map(ToOwned::to_owned),
            searching: self.is_searching(),
            paginating: self.is_paginating(),
            synthesizing: self.is_synthesizing(),
            can_load_more: self.can_load_more(),
            error: self.error.clone(),
            dirty: self.dirty,
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn active_view(&self) -> View {
        self.view
    }

    pub fn sources(&self) -> &SourceList {
        &self.sources
    }

    /// The script for the current source list, if one has been generated.
    pub fn current_script(&self) -> Option<&str> {
        self.script
            .as_ref()
            .filter(|script| script.is_current_for(&self.sources))
            .map(ScriptText::text)
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn is_searching(&self) -> bool {
        self.pending_search.is_some()
    }

    pub fn is_paginating(&self) -> bool {
        self.pending_page.is_some()
    }

    pub fn is_synthesizing(&self) -> bool {
        self.pending_script.is_some()
    }

    pub fn can_load_more(&self) -> bool {
        !self.query.is_empty()
            && self.view == View::Sources
            && !self.sources.is_empty()
            && !self.is_searching()
            && !self.is_paginating()
    }

    pub fn phase(&self) -> Phase {
        if self.error.is_some() {
            Phase::Errored
        } else if self.is_searching() {
            Phase::Searching
        } else if self.is_synthesizing() {
            Phase::Synthesizing
        } else if self.is_paginating() {
            Phase::Paginating
        } else if self.query.is_empty() {
            Phase::Idle
        } else if self.view == View::Script && self.current_script().is_some() {
            Phase::ScriptReady
        } else {
            Phase::SourcesReady
        }
    }

    /// Returns whether anything changed since the last call and clears the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Starts a new search: everything from the previous one is dropped,
    /// including in-flight requests whose completions will now be ignored.
    pub(crate) fn begin_search(&mut self, topic: String) -> RequestId {
        let request_id = self.allocate_request_id();
        self.query = topic;
        self.view = View::Sources;
        self.sources.clear();
        self.script = None;
        self.error = None;
        self.pending_search = Some(request_id);
        self.pending_page = None;
        self.pending_script = None;
        self.mark_dirty();
        request_id
    }

    pub(crate) fn begin_next_page(&mut self) -> RequestId {
        let request_id = self.allocate_request_id();
        self.error = None;
        self.pending_page = Some(request_id);
        self.mark_dirty();
        request_id
    }

    /// Starts a synthesis and returns its id with a snapshot of the sources
    /// it is built from. Replaces any synthesis still pending for an older
    /// revision.
    pub(crate) fn begin_synthesis(&mut self) -> (RequestId, Vec<SourceRecord>) {
        let request_id = self.allocate_request_id();
        self.error = None;
        self.pending_script = Some(PendingScript {
            request_id,
            revision: self.sources.revision(),
        });
        self.mark_dirty();
        (request_id, self.sources.records().to_vec())
    }

    /// True when the current list has no script and no synthesis is running
    /// for this revision. A synthesis started for an older revision does not
    /// count: its result will be discarded.
    pub(crate) fn needs_script(&self) -> bool {
        let in_flight_for_current = self
            .pending_script
            .is_some_and(|pending| pending.revision == self.sources.revision());
        !self.query.is_empty()
            && !self.sources.is_empty()
            && self.current_script().is_none()
            && !in_flight_for_current
    }

    /// Like [`Self::needs_script`], but only while the script view is open
    /// and no error is shown, so failures are never retried automatically.
    pub(crate) fn script_view_needs_script(&self) -> bool {
        self.view == View::Script && self.error.is_none() && self.needs_script()
    }

    pub(crate) fn select_view(&mut self, view: View) {
        if self.view != view {
            self.view = view;
            self.mark_dirty();
        }
    }

    /// Applies a search completion. Returns `false` when the completion does
    /// not belong to the pending search.
    pub(crate) fn apply_search_result(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<SourceRecord>, String>,
    ) -> bool {
        if self.pending_search != Some(request_id) {
            return false;
        }
        self.pending_search = None;
        match result {
            Ok(batch) => self.sources.append(batch),
            Err(message) => self.error = Some(message),
        }
        self.mark_dirty();
        true
    }

    /// Applies a page completion. A failed page keeps the existing list.
    pub(crate) fn apply_page_result(
        &mut self,
        request_id: RequestId,
        result: Result<Vec<SourceRecord>, String>,
    ) -> bool {
        if self.pending_page != Some(request_id) {
            return false;
        }
        self.pending_page = None;
        match result {
            Ok(batch) => {
                self.sources.append(batch);
                self.script = None;
            }
            Err(message) => self.error = Some(message),
        }
        self.mark_dirty();
        true
    }

    /// Applies a script completion. A script built from an older revision of
    /// the list is discarded.
    pub(crate) fn apply_script_result(
        &mut self,
        request_id: RequestId,
        result: Result<String, String>,
    ) -> bool {
        let Some(pending) = self.pending_script else {
            return false;
        };
        if pending.request_id != request_id {
            return false;
        }
        self.pending_script = None;
        match result {
            Ok(text) if pending.revision == self.sources.revision() => {
                self.script = Some(ScriptText::new(text, pending.revision));
            }
            Ok(_) => {}
            Err(message) => self.error = Some(message),
        }
        self.mark_dirty();
        true
    }

    pub(crate) fn is_pending_search(&self, request_id: RequestId) -> bool {
        self.pending_search == Some(request_id)
    }
}
