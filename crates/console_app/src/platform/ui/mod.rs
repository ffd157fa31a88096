pub mod constants;
pub mod input;
pub mod layout;
pub mod render;

use console_core::TabLink;
use ratatui::layout::Rect;

/// Terminal-only state that the core does not track.
#[derive(Debug, Default)]
pub struct UiState {
    /// Highlighted row of the search results table.
    pub selected_row: Option<usize>,
    /// Tab hit areas from the last frame, for mouse clicks.
    pub tab_areas: Vec<(TabLink, Rect)>,
}
