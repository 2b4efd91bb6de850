use std::fmt::Write;

use research_core::{AppViewModel, Phase, View};

const RULE: &str = "------------------------------------------------------------";

/// Renders the whole screen as plain text.
pub fn render(view: &AppViewModel) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "\n{RULE}");
    let _ = writeln!(out, "Content Creator's Research Hub");
    let _ = writeln!(out, "Find websites and generate scripts for your next masterpiece.");
    let _ = writeln!(out, "{RULE}");
    let _ = writeln!(out, "{}", tab_bar(view));

    if view.searching {
        let _ = writeln!(out, "\nSearching for sources on {:?}...", view.query);
    } else if let Some(error) = &view.error {
        let _ = writeln!(out, "\nOops! Something went wrong.");
        let _ = writeln!(out, "{error}");
    } else if view.query.is_empty() {
        let _ = writeln!(out, "\nEnter a topic above to start your research.");
    } else {
        match view.active_view {
            View::Sources => render_sources(&mut out, view),
            View::Script => render_script(&mut out, view),
        }
    }

    out
}

fn tab_bar(view: &AppViewModel) -> String {
    let (sources, script) = match view.active_view {
        View::Sources => ("[Websites]", " Content "),
        View::Script => (" Websites ", "[Content]"),
    };
    let status = match view.phase {
        Phase::Idle => "idle",
        Phase::Searching => "searching",
        Phase::SourcesReady => "ready",
        Phase::Paginating => "loading more",
        Phase::Synthesizing => "writing script",
        Phase::ScriptReady => "script ready",
        Phase::Errored => "error",
    };
    if view.query.is_empty() {
        format!("{sources} {script}  ({status})")
    } else {
        format!(
            "{sources} {script}  topic: {}  sources: {}  ({status})",
            view.query,
            view.sources.len()
        )
    }
}

fn render_sources(out: &mut String, view: &AppViewModel) {
    if view.sources.is_empty() {
        let _ = writeln!(out, "\nNo websites found for this topic.");
        return;
    }
    for row in &view.sources {
        let _ = writeln!(out, "\n{:>3}. {}", row.position, row.title);
        let _ = writeln!(out, "     {}", row.url);
        let _ = writeln!(out, "     {}", row.summary);
    }
    if view.paginating {
        let _ = writeln!(out, "\nLoading...");
    } else if view.can_load_more {
        let _ = writeln!(out, "\nType /more for the next page.");
    }
}

fn render_script(out: &mut String, view: &AppViewModel) {
    if let Some(script) = &view.script {
        let _ = writeln!(out, "\n{script}");
        let _ = writeln!(out, "\n({} characters)", script.chars().count());
    } else if view.sources.is_empty() {
        let _ = writeln!(out, "\nNo sources yet: search for a topic first.");
    } else {
        // A script that exists is always for the current sources, so anything
        // else is a synthesis on its way.
        let _ = writeln!(out, "\nWriting the script from {} sources...", view.sources.len());
    }
}
