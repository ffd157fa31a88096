use console_core::{AppViewModel, CellView, Panel, RegionContent, TableView};
use ratatui::layout::{Constraint, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Cell, Paragraph, Row, Table, TableState, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout;
use super::UiState;

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &mut UiState) {
    let screen = layout::screen(frame.area());

    draw_tab_strip(frame, screen.tab_strip, view, ui);

    match view.active_panel {
        Some(Panel::Search) => draw_search_panel(frame, screen.body, view, ui),
        Some(Panel::CrawlIndex) => draw_crawl_panel(frame, screen.body, view),
        None => {}
    }

    frame.render_widget(
        Paragraph::new(view.status_line()).style(Style::default().fg(Color::Gray)),
        screen.status,
    );
    let hints = match view.active_panel {
        Some(Panel::CrawlIndex) => CRAWL_HINTS,
        _ => SEARCH_HINTS,
    };
    frame.render_widget(
        Paragraph::new(hints).style(Style::default().fg(Color::DarkGray)),
        screen.hints,
    );
}

fn draw_tab_strip(frame: &mut Frame, area: Rect, view: &AppViewModel, ui: &mut UiState) {
    frame.render_widget(Block::bordered().title(APP_TITLE), area);

    ui.tab_areas = layout::tab_areas(area, &view.tabs);
    for (link, rect) in &ui.tab_areas {
        let Some(tab) = view.tabs.iter().find(|tab| tab.link == *link) else {
            continue;
        };
        let style = if tab.active {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let padding = " ".repeat(TAB_PADDING as usize);
        frame.render_widget(
            Paragraph::new(format!("{padding}{}{padding}", tab.title)).style(style),
            *rect,
        );
    }
}

fn draw_search_panel(frame: &mut Frame, body: Rect, view: &AppViewModel, ui: &UiState) {
    let panel = layout::search_panel(body);
    draw_input(frame, panel.input, SEARCH_INPUT_TITLE, &view.search_term);

    let mut table_state = TableState::default();
    table_state.select(ui.selected_row);
    draw_region(
        frame,
        panel.results,
        SEARCH_RESULTS_TITLE,
        &view.search_results,
        &mut table_state,
    );
}

fn draw_crawl_panel(frame: &mut Frame, body: Rect, view: &AppViewModel) {
    let panel = layout::crawl_panel(body);
    draw_input(frame, panel.input, INDEX_INPUT_TITLE, &view.index_url);

    let mut unselected = TableState::default();
    draw_region(
        frame,
        panel.results,
        INDEX_RESULTS_TITLE,
        &view.index_results,
        &mut unselected,
    );
    draw_region(
        frame,
        panel.errors,
        INDEX_ERRORS_TITLE,
        &view.index_errors,
        &mut unselected,
    );
    draw_region(
        frame,
        panel.reset,
        RESET_TITLE,
        &view.reset_results,
        &mut unselected,
    );
}

fn draw_input(frame: &mut Frame, area: Rect, title: &str, value: &str) {
    let block = Block::bordered().title(title.to_string());
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(value.to_string()).block(block), area);

    if inner.width > 0 && inner.height > 0 {
        let offset = (value.chars().count() as u16).min(inner.width - 1);
        frame.set_cursor_position(Position::new(inner.x + offset, inner.y));
    }
}

fn draw_region(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    content: &RegionContent,
    table_state: &mut TableState,
) {
    let block = Block::bordered().title(title.to_string());
    match content {
        RegionContent::Empty => frame.render_widget(block, area),
        RegionContent::Text(text) => frame.render_widget(
            Paragraph::new(text.clone())
                .wrap(Wrap { trim: false })
                .block(block),
            area,
        ),
        RegionContent::Table(table) => {
            frame.render_stateful_widget(region_table(table).block(block), area, table_state);
        }
    }
}

fn region_table(table: &TableView) -> Table<'static> {
    let header = Row::new(table.headers.iter().cloned().map(Cell::from))
        .style(Style::default().add_modifier(Modifier::BOLD))
        .bottom_margin(1);
    let rows = table
        .rows
        .iter()
        .map(|row| Row::new(row.iter().map(region_cell)));
    let widths = column_widths(table.headers.len());

    Table::new(rows, widths)
        .header(header)
        .column_spacing(2)
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
        .highlight_symbol("> ")
}

fn region_cell(cell: &CellView) -> Cell<'static> {
    match cell {
        CellView::Text(text) => Cell::from(text.clone()),
        CellView::Link { text, .. } => Cell::from(Line::from(Span::styled(
            text.clone(),
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::UNDERLINED),
        ))),
    }
}

fn column_widths(columns: usize) -> Vec<Constraint> {
    match columns {
        0 | 1 => vec![Constraint::Fill(1)],
        n => {
            let mut widths = vec![Constraint::Fill(3)];
            widths.extend(std::iter::repeat(Constraint::Fill(1)).take(n - 1));
            widths
        }
    }
}
