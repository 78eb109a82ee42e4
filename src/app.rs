//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::home::HomePage;
use crate::state::config::SiteConfig;
use crate::state::contact::ContactState;
use crate::state::projects::ProjectsState;
use crate::state::ui::UiState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides all shared state contexts, applies the persisted theme, and
/// sets up routing for the single page.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::default();
    let ui = RwSignal::new(UiState::default());
    let contact = RwSignal::new(ContactState::default());
    let projects = RwSignal::new(ProjectsState::default());

    provide_context(config);
    provide_context(ui);
    provide_context(contact);
    provide_context(projects);

    // Re-apply the persisted theme before anything renders dark-aware UI.
    #[cfg(feature = "hydrate")]
    {
        let theme = crate::util::theme::read_preference();
        crate::util::theme::apply(theme);
        ui.update(|u| u.theme = theme);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/portfolio-ui.css"/>
        <Title text="Portfolio"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
