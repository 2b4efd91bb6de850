use std::io::{self, BufRead, Write};
use std::sync::{mpsc, Arc};
use std::thread;

use anyhow::Context;
use hub_logging::{hub_error, hub_info, hub_trace};
use research_core::{update, AppState, Msg};
use research_engine::GeminiBackend;

use crate::config::AppConfig;
use crate::effects::EffectRunner;
use crate::{commands, render};

/// Everything the app loop reacts to: controller messages from the user or
/// the engine, plus front-end-only commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Core(Msg),
    Help,
    Unknown(String),
    Quit,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    hub_info!(
        "Starting research hub with model {} at {}",
        config.backend.model,
        config.backend.base_url
    );
    let backend = GeminiBackend::new(config.backend).context("building backend client")?;
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let runner = EffectRunner::new(Arc::new(backend), config.script, event_tx.clone())
        .context("starting engine runtime")?;

    spawn_input_reader(event_tx);

    let mut out = io::stdout().lock();
    let mut state = AppState::new();
    write!(out, "{}", render::render(&state.view()))?;
    writeln!(out, "{}", commands::HELP)?;
    out.flush()?;

    for event in event_rx {
        match event {
            AppEvent::Core(msg) => {
                let (next, effects) = update(state, msg);
                state = next;
                hub_trace!("Update produced {} effects", effects.len());
                runner.enqueue(effects);
                if state.consume_dirty() {
                    write!(out, "{}", render::render(&state.view()))?;
                }
            }
            AppEvent::Help => writeln!(out, "{}", commands::HELP)?,
            AppEvent::Unknown(command) => {
                writeln!(out, "Unknown command {command}. Type /help for the list.")?
            }
            AppEvent::Quit => break,
        }
        out.flush()?;
    }

    hub_info!("Research hub exiting");
    Ok(())
}

/// Reads stdin line by line on its own thread. End of input quits.
fn spawn_input_reader(tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    hub_error!("Reading input failed: {}", err);
                    break;
                }
            };
            if let Some(event) = commands::parse(&line) {
                let quit = event == AppEvent::Quit;
                if tx.send(event).is_err() || quit {
                    return;
                }
            }
        }
        let _ = tx.send(AppEvent::Quit);
    });
}
