use console_core::{AppViewModel, Msg, Panel, RegionContent};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press asks the event loop to do.
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    Dispatch(Msg),
    SelectPrevious,
    SelectNext,
    Quit,
    None,
}

pub fn map_key(key: KeyEvent, view: &AppViewModel, selected: Option<usize>) -> UiAction {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let panel = view.active_panel.unwrap_or(Panel::Search);

    match key.code {
        KeyCode::Esc => UiAction::Quit,
        KeyCode::Char('c') if ctrl => UiAction::Quit,
        KeyCode::F(1) => activate(Panel::Search),
        KeyCode::F(2) => activate(Panel::CrawlIndex),
        KeyCode::Tab | KeyCode::BackTab => activate(match panel {
            Panel::Search => Panel::CrawlIndex,
            Panel::CrawlIndex => Panel::Search,
        }),
        KeyCode::Char('r') if ctrl && panel == Panel::CrawlIndex => {
            UiAction::Dispatch(Msg::ResetClicked)
        }
        KeyCode::Char('o') if ctrl && panel == Panel::Search => match selected {
            Some(row) => UiAction::Dispatch(Msg::ResultOpened { row }),
            None => UiAction::None,
        },
        KeyCode::Up if panel == Panel::Search => UiAction::SelectPrevious,
        KeyCode::Down if panel == Panel::Search => UiAction::SelectNext,
        KeyCode::Enter => UiAction::Dispatch(match panel {
            Panel::Search => Msg::SearchSubmitted,
            Panel::CrawlIndex => Msg::CrawlSubmitted,
        }),
        KeyCode::Backspace => {
            let mut value = input_value(view, panel).to_string();
            if value.pop().is_none() {
                return UiAction::None;
            }
            edit(panel, value)
        }
        KeyCode::Char(ch) if !ctrl => {
            let mut value = input_value(view, panel).to_string();
            value.push(ch);
            edit(panel, value)
        }
        _ => UiAction::None,
    }
}

/// Row count of the search results table, zero when no table is shown.
pub fn result_rows(view: &AppViewModel) -> usize {
    match &view.search_results {
        RegionContent::Table(table) => table.rows.len(),
        _ => 0,
    }
}

pub fn step_selection(selected: Option<usize>, rows: usize, forward: bool) -> Option<usize> {
    if rows == 0 {
        return None;
    }
    let last = rows - 1;
    Some(match (selected, forward) {
        (None, _) => 0,
        (Some(row), true) => (row + 1).min(last),
        (Some(row), false) => row.saturating_sub(1).min(last),
    })
}

fn activate(panel: Panel) -> UiAction {
    UiAction::Dispatch(Msg::TabActivated {
        panel,
        origin: Some(panel.link()),
    })
}

fn input_value(view: &AppViewModel, panel: Panel) -> &str {
    match panel {
        Panel::Search => &view.search_term,
        Panel::CrawlIndex => &view.index_url,
    }
}

fn edit(panel: Panel, value: String) -> UiAction {
    UiAction::Dispatch(match panel {
        Panel::Search => Msg::SearchTermChanged(value),
        Panel::CrawlIndex => Msg::IndexUrlChanged(value),
    })
}
