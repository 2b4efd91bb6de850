//! Research hub core: pure session state machine and view-model helpers.
mod effect;
mod msg;
mod source;
mod state;
mod update;
mod view_model;

pub use effect::{Effect, FindPurpose};
pub use msg::Msg;
pub use source::{RecordDefect, Revision, ScriptText, SourceField, SourceList, SourceRecord};
pub use state::{AppState, RequestId, View};
pub use update::update;
pub use view_model::{AppViewModel, Phase, SourceRowView};
