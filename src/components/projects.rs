//! Filterable project grid.

use leptos::prelude::*;

use crate::state::config::Project;
use crate::state::projects::{ALL_FILTER, ProjectsState};

/// Filter buttons shown above the grid.
pub const PROJECT_FILTERS: &[(&str, &str)] = &[
    (ALL_FILTER, "All"),
    ("web", "Web"),
    ("app", "Apps"),
    ("design", "Design"),
];

/// Filter button row. Exactly one button is active at a time.
#[component]
pub fn ProjectFilters() -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();

    view! {
        <div class="project-filters">
            {PROJECT_FILTERS
                .iter()
                .map(|(filter, label)| {
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || projects.get().active_filter == *filter
                            on:click=move |_| projects.update(|p| p.set_filter(filter))
                        >
                            {*label}
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// Card grid. Cards outside the active filter get the `hidden` class so
/// CSS can transition them out.
#[component]
pub fn ProjectGrid(items: Vec<Project>) -> impl IntoView {
    let projects = expect_context::<RwSignal<ProjectsState>>();

    view! {
        <div class="project-grid">
            {items
                .into_iter()
                .map(|project| {
                    let category = project.category.clone();
                    let shown = move || projects.get().shows(&category);
                    view! {
                        <article
                            class="project-card"
                            class:visible=shown.clone()
                            class:hidden=move || !shown()
                        >
                            <h3 class="project-card__title">{project.title}</h3>
                            <p class="project-card__description">{project.description}</p>
                            <div class="project-card__footer">
                                <span class="project-card__category">{project.category}</span>
                                <a href=project.link class="project-card__link">
                                    "View"
                                </a>
                            </div>
                        </article>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
