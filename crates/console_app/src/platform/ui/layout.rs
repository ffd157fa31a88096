use console_core::{TabLink, TabView};
use ratatui::layout::{Constraint, Layout, Rect};

use super::constants::TAB_PADDING;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub tab_strip: Rect,
    pub body: Rect,
    pub status: Rect,
    pub hints: Rect,
}

pub fn screen(area: Rect) -> ScreenLayout {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .split(area);
    ScreenLayout {
        tab_strip: chunks[0],
        body: chunks[1],
        status: chunks[2],
        hints: chunks[3],
    }
}

/// Screen cells of each tab title inside the bordered tab strip.
pub fn tab_areas(strip: Rect, tabs: &[TabView]) -> Vec<(TabLink, Rect)> {
    let inner_y = strip.y.saturating_add(1);
    let mut x = strip.x.saturating_add(1);
    let right = strip.right().saturating_sub(1);
    let mut areas = Vec::with_capacity(tabs.len());
    for tab in tabs {
        let width = tab.title.len() as u16 + TAB_PADDING * 2;
        if x >= right {
            break;
        }
        let width = width.min(right - x);
        areas.push((
            tab.link,
            Rect {
                x,
                y: inner_y,
                width,
                height: 1,
            },
        ));
        x = x.saturating_add(width + 1);
    }
    areas
}

pub fn tab_at(areas: &[(TabLink, Rect)], column: u16, row: u16) -> Option<TabLink> {
    areas
        .iter()
        .find(|(_, rect)| {
            column >= rect.x && column < rect.right() && row >= rect.y && row < rect.bottom()
        })
        .map(|(link, _)| *link)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPanelLayout {
    pub input: Rect,
    pub results: Rect,
}

pub fn search_panel(body: Rect) -> SearchPanelLayout {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).split(body);
    SearchPanelLayout {
        input: chunks[0],
        results: chunks[1],
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlPanelLayout {
    pub input: Rect,
    pub results: Rect,
    pub errors: Rect,
    pub reset: Rect,
}

pub fn crawl_panel(body: Rect) -> CrawlPanelLayout {
    let chunks = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(5),
        Constraint::Min(3),
        Constraint::Length(3),
    ])
    .split(body);
    CrawlPanelLayout {
        input: chunks[0],
        results: chunks[1],
        errors: chunks[2],
        reset: chunks[3],
    }
}
