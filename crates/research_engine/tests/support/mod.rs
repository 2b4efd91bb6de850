#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use research_engine::{GenerateRequest, GenerativeBackend, UpstreamError};
use serde_json::json;

/// Backend double that replays canned replies and records every request.
#[derive(Default)]
pub struct ScriptedBackend {
    replies: Mutex<VecDeque<Result<String, UpstreamError>>>,
    requests: Mutex<Vec<GenerateRequest>>,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply(self, reply: Result<String, UpstreamError>) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }

    pub fn reply_text(self, text: impl Into<String>) -> Self {
        self.reply(Ok(text.into()))
    }

    pub fn requests(&self) -> Vec<GenerateRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl GenerativeBackend for ScriptedBackend {
    async fn generate(&self, request: GenerateRequest) -> Result<String, UpstreamError> {
        self.requests.lock().unwrap().push(request);
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .expect("no scripted reply left")
    }
}

/// A structured reply with `count` well-formed sources tagged with `tag`.
pub fn sources_reply(tag: &str, count: usize) -> String {
    let items: Vec<_> = (1..=count)
        .map(|n| {
            json!({
                "title": format!("{tag} {n}"),
                "url": format!("https://{tag}.example.com/{n}"),
                "summary": format!("Why {tag} {n} matters."),
            })
        })
        .collect();
    serde_json::Value::Array(items).to_string()
}
