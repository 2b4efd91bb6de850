use research_core::{Msg, View};

use crate::app::AppEvent;

pub const HELP: &str = "\
Commands:
  <topic>             search for sources on a topic
  /search <topic>     same as above
  /sources            show the source list
  /script             show the generated script (written on first view)
  /more               fetch the next page of sources
  /help               show this help
  /quit               exit";

/// Maps one line of user input to an event. Blank lines map to nothing.
pub fn parse(line: &str) -> Option<AppEvent> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }
    if !line.starts_with('/') {
        return Some(AppEvent::Core(Msg::SearchSubmitted(line.to_string())));
    }

    let (command, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
    let event = match command.to_ascii_lowercase().as_str() {
        "/search" => AppEvent::Core(Msg::SearchSubmitted(rest.to_string())),
        "/sources" | "/websites" => AppEvent::Core(Msg::ViewSelected(View::Sources)),
        "/script" | "/content" => AppEvent::Core(Msg::ViewSelected(View::Script)),
        "/more" | "/next" => AppEvent::Core(Msg::LoadMoreClicked),
        "/help" | "/?" => AppEvent::Help,
        "/quit" | "/exit" => AppEvent::Quit,
        _ => AppEvent::Unknown(command.to_string()),
    };
    Some(event)
}
