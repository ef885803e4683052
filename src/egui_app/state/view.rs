/// Sections reachable from the sidebar.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AppSection {
    #[default]
    Dashboard,
    Dataset,
    Eda,
    Models,
    Predict,
    Roadmap,
}

impl AppSection {
    pub const ALL: [Self; 6] = [
        Self::Dashboard,
        Self::Dataset,
        Self::Eda,
        Self::Models,
        Self::Predict,
        Self::Roadmap,
    ];

    /// Sidebar label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::Dataset => "Dataset Viewer",
            Self::Eda => "Exploratory Analysis",
            Self::Models => "Model Laboratory",
            Self::Predict => "Yield Predictor",
            Self::Roadmap => "ML Roadmap",
        }
    }
}

/// Active section and the Dataset Explorer's search text.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ViewState {
    pub active: AppSection,
    pub search: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    /// Replace the active section. Always succeeds.
    Navigate(AppSection),
    /// Replace the search text; the active section is untouched.
    Search(String),
}

pub fn reduce(state: ViewState, action: NavAction) -> ViewState {
    match action {
        NavAction::Navigate(active) => ViewState { active, ..state },
        NavAction::Search(search) => ViewState { search, ..state },
    }
}
