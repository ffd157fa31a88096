//! Non-interactive mode: run one workflow, print its regions, exit.

use std::sync::{mpsc, Arc};

use anyhow::Context;
use console_core::markup::{to_html, to_text};
use console_core::{
    update, AppState, AppViewModel, Msg, RegionContent, RegionId, RequestState, ServiceHealth,
};
use console_engine::{ApiSettings, ChannelEventSink, EngineEvent, EngineHandle};

use super::effects::{command_for, event_to_msg};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Search { term: String },
    Crawl { url: String },
    Reset,
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

/// Runs `command` to completion and prints the resulting regions to stdout.
/// Returns whether the workflow succeeded.
pub fn run(settings: ApiSettings, command: Command, format: OutputFormat) -> anyhow::Result<bool> {
    let (tx, rx) = mpsc::channel::<EngineEvent>();
    let engine = EngineHandle::new(settings, Arc::new(ChannelEventSink::new(tx)))
        .context("starting request engine")?;

    let mut state = AppState::new();
    for msg in messages_for(&command) {
        let (next, effects) = update(state, msg);
        state = next;
        for effect in effects {
            if let Some(command) = command_for(effect) {
                engine.submit(command);
            }
        }
    }

    let event = rx.recv().context("request engine stopped before replying")?;
    let (state, _) = update(state, event_to_msg(event));
    let view = state.view();

    let output = match command {
        Command::Search { .. } => render_regions(&view, &[RegionId::SearchResults], format),
        Command::Crawl { .. } => render_regions(
            &view,
            &[RegionId::IndexResults, RegionId::IndexErrors],
            format,
        ),
        Command::Reset => render_regions(&view, &[RegionId::ResetResults], format),
        Command::Health => render_status(&view, format),
    };
    println!("{output}");

    Ok(succeeded(&state, &command))
}

fn messages_for(command: &Command) -> Vec<Msg> {
    match command {
        Command::Search { term } => vec![
            Msg::SearchTermChanged(term.clone()),
            Msg::SearchSubmitted,
        ],
        Command::Crawl { url } => vec![Msg::IndexUrlChanged(url.clone()), Msg::CrawlSubmitted],
        Command::Reset => vec![Msg::ResetClicked],
        Command::Health => vec![Msg::Bootstrap],
    }
}

fn succeeded(state: &AppState, command: &Command) -> bool {
    match command {
        Command::Search { .. } => matches!(state.search_state(), RequestState::Succeeded(_)),
        Command::Crawl { .. } => matches!(state.crawl_state(), RequestState::Succeeded(_)),
        Command::Reset => matches!(state.reset_state(), RequestState::Succeeded(_)),
        Command::Health => state.view().health == ServiceHealth::Online,
    }
}

/// The status line, as a `<p>` element in HTML mode.
pub fn render_status(view: &AppViewModel, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => view.status_line(),
        OutputFormat::Html => format!(
            "<p>{}</p>",
            to_html(&RegionContent::text(view.status_line()))
        ),
    }
}

/// Non-empty regions in order, one per line.
pub fn render_regions(view: &AppViewModel, regions: &[RegionId], format: OutputFormat) -> String {
    regions
        .iter()
        .map(|id| view.region(*id))
        .filter(|content| !content.is_empty())
        .map(|content| match format {
            OutputFormat::Text => to_text(content),
            OutputFormat::Html => to_html(content),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
