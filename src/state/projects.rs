#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

/// Filter value that matches every project card.
pub const ALL_FILTER: &str = "all";

/// Project-grid filter state. Exactly one filter is active at a time.
#[derive(Clone, Debug)]
pub struct ProjectsState {
    pub active_filter: String,
}

impl Default for ProjectsState {
    fn default() -> Self {
        Self { active_filter: ALL_FILTER.to_owned() }
    }
}

impl ProjectsState {
    /// Whether a card with `category` is shown under the active filter.
    #[must_use]
    pub fn shows(&self, category: &str) -> bool {
        self.active_filter == ALL_FILTER || self.active_filter == category
    }

    pub fn set_filter(&mut self, filter: &str) {
        self.active_filter = filter.to_owned();
    }
}
