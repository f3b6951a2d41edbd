//! Navigation tabs

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewId {
    Dashboard,
    Create,
    ViewRecipe,
    Collaborations,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTab {
    Dashboard,
    CreateRecipe,
    Collaborations,
}

impl NavTab {
    pub fn all() -> [NavTab; 3] {
        [NavTab::Dashboard, NavTab::CreateRecipe, NavTab::Collaborations]
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavTab::Dashboard => "Dashboard",
            NavTab::CreateRecipe => "Create Recipe",
            NavTab::Collaborations => "Collaborations",
        }
    }

    pub fn target(&self) -> ViewId {
        match self {
            NavTab::Dashboard => ViewId::Dashboard,
            NavTab::CreateRecipe => ViewId::Create,
            NavTab::Collaborations => ViewId::Collaborations,
        }
    }

    /// The recipe viewer has no tab of its own and lights up nothing.
    pub fn is_active(&self, current: ViewId) -> bool {
        self.target() == current
    }
}

/// Tabs to show; none without a signed-in user.
pub fn visible_tabs(signed_in: bool) -> Vec<NavTab> {
    if signed_in {
        NavTab::all().to_vec()
    } else {
        Vec::new()
    }
}
