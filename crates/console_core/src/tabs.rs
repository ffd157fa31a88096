/// Content panels hosted by the console. Exactly one is shown at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Panel {
    Search,
    CrawlIndex,
}

impl Panel {
    pub const ALL: [Panel; 2] = [Panel::Search, Panel::CrawlIndex];

    pub fn title(self) -> &'static str {
        match self {
            Panel::Search => "Search",
            Panel::CrawlIndex => "Crawl/Index",
        }
    }

    /// Tab-strip control that conventionally opens this panel.
    pub fn link(self) -> TabLink {
        match self {
            Panel::Search => TabLink::SearchTab,
            Panel::CrawlIndex => TabLink::CrawlTab,
        }
    }

    fn index(self) -> usize {
        match self {
            Panel::Search => 0,
            Panel::CrawlIndex => 1,
        }
    }
}

/// Controls in the tab strip. One of them carries the active marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TabLink {
    SearchTab,
    CrawlTab,
}

impl TabLink {
    pub const ALL: [TabLink; 2] = [TabLink::SearchTab, TabLink::CrawlTab];

    pub fn panel(self) -> Panel {
        match self {
            TabLink::SearchTab => Panel::Search,
            TabLink::CrawlTab => Panel::CrawlIndex,
        }
    }

    fn index(self) -> usize {
        match self {
            TabLink::SearchTab => 0,
            TabLink::CrawlTab => 1,
        }
    }
}

/// Visibility of the content panels and the active marker of the tab strip.
///
/// Before bootstrap nothing is shown. After the first activation exactly one
/// panel is visible and exactly one link is marked active.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabController {
    visible: [bool; 2],
    active_links: [bool; 2],
}

impl TabController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows `panel` and hides the rest.
    ///
    /// `origin` is the tab link the user interacted with. Programmatic
    /// activation passes `None`, in which case the Search link is marked,
    /// whichever panel is being shown.
    pub fn activate(&mut self, panel: Panel, origin: Option<TabLink>) {
        self.visible = [false; 2];
        self.active_links = [false; 2];
        self.visible[panel.index()] = true;
        let link = origin.unwrap_or(TabLink::SearchTab);
        self.active_links[link.index()] = true;
    }

    /// Bootstrap selection: Search panel shown, Search link active.
    pub fn select_default(&mut self) {
        self.activate(Panel::Search, Some(TabLink::SearchTab));
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible[panel.index()]
    }

    pub fn is_link_active(&self, link: TabLink) -> bool {
        self.active_links[link.index()]
    }

    pub fn active_panel(&self) -> Option<Panel> {
        Panel::ALL.into_iter().find(|panel| self.is_visible(*panel))
    }

    pub fn active_link(&self) -> Option<TabLink> {
        TabLink::ALL.into_iter().find(|link| self.is_link_active(*link))
    }

    pub fn visible_count(&self) -> usize {
        self.visible.iter().filter(|shown| **shown).count()
    }

    pub fn active_link_count(&self) -> usize {
        self.active_links.iter().filter(|active| **active).count()
    }
}
