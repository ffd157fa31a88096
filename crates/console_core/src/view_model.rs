use crate::{Panel, RegionContent, RegionId, ServiceHealth, TabLink};

#[derive(Debug, Clone, PartialEq, Default)]
pub struct AppViewModel {
    pub active_panel: Option<Panel>,
    pub panels: Vec<PanelView>,
    pub tabs: Vec<TabView>,
    pub search_term: String,
    pub index_url: String,
    pub search_results: RegionContent,
    pub index_results: RegionContent,
    pub index_errors: RegionContent,
    pub reset_results: RegionContent,
    pub health: ServiceHealth,
    pub last_search_seconds: Option<f64>,
    pub dirty: bool,
}

impl AppViewModel {
    pub fn region(&self, id: RegionId) -> &RegionContent {
        match id {
            RegionId::SearchResults => &self.search_results,
            RegionId::IndexResults => &self.index_results,
            RegionId::IndexErrors => &self.index_errors,
            RegionId::ResetResults => &self.reset_results,
        }
    }

    pub fn visible_panel_count(&self) -> usize {
        self.panels.iter().filter(|panel| panel.visible).count()
    }

    pub fn active_tab_count(&self) -> usize {
        self.tabs.iter().filter(|tab| tab.active).count()
    }

    pub fn status_line(&self) -> String {
        let service = match self.health {
            ServiceHealth::Unknown => "unknown",
            ServiceHealth::Checking => "checking...",
            ServiceHealth::Online => "online",
            ServiceHealth::Offline => "offline",
        };
        match self.last_search_seconds {
            Some(seconds) => format!("Service: {service} | Last search took {seconds:.3}s"),
            None => format!("Service: {service}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub panel: Panel,
    pub title: &'static str,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabView {
    pub link: TabLink,
    pub title: &'static str,
    pub active: bool,
}
