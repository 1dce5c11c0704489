//! Content tabs of the project page

/// Two mutually exclusive content tabs. Never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageTab {
    #[default]
    Pool,
    Investments,
}

impl PageTab {
    pub const ALL: [PageTab; 2] = [PageTab::Pool, PageTab::Investments];

    pub fn label(&self) -> &'static str {
        match self {
            PageTab::Pool => "Pool details",
            PageTab::Investments => "My investments",
        }
    }

    /// Whether the tab can be selected in the given session
    pub fn is_enabled(&self, has_account: bool) -> bool {
        match self {
            PageTab::Pool => true,
            PageTab::Investments => has_account,
        }
    }

    pub fn other(&self) -> PageTab {
        match self {
            PageTab::Pool => PageTab::Investments,
            PageTab::Investments => PageTab::Pool,
        }
    }
}
