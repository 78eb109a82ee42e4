//! The portfolio page: section composition and global scroll wiring.

use leptos::prelude::*;

use crate::components::back_to_top::BackToTop;
use crate::components::contact_form::ContactForm;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::preloader::Preloader;
use crate::components::projects::{ProjectFilters, ProjectGrid};
use crate::components::reveal::RevealSection;
use crate::components::skills::SkillList;
use crate::components::stats::StatsRow;
use crate::state::config::SiteConfig;

/// The single page. One window scroll listener keeps the scroll-derived
/// UI flags and the active nav section current; individual sections
/// handle their own reveal animations.
#[component]
pub fn HomePage() -> impl IntoView {
    let config = expect_context::<SiteConfig>();

    #[cfg(feature = "hydrate")]
    {
        use crate::components::header::NAV_SECTIONS;
        use crate::state::ui::UiState;
        use crate::util::scroll;

        let ui = expect_context::<RwSignal<UiState>>();
        let _handle = window_event_listener(leptos::ev::scroll, move |_| {
            let y = scroll::scroll_y();
            let ids = NAV_SECTIONS.iter().map(|(id, _)| *id).collect::<Vec<_>>();
            let sections = scroll::measure_sections(&ids);
            ui.update(|u| {
                u.scrolled = scroll::header_scrolled(y);
                u.back_to_top_visible = scroll::show_back_to_top(y);
                u.active_section = scroll::active_section(y, &sections).map(ToOwned::to_owned);
            });
        });
    }

    let show_preloader = config.show_preloader;

    view! {
        <Show when=move || show_preloader>
            <Preloader/>
        </Show>

        <Header/>

        <main>
            <RevealSection id="home" class="hero">
                <Hero/>
            </RevealSection>

            <RevealSection id="about" class="about">
                <h2 class="section-title">"About Me"</h2>
                <p class="about__text">
                    "I design and build fast, accessible interfaces, and I care as much "
                    "about the last 5% of polish as the first 95% of function."
                </p>
                <StatsRow stats=config.stats.clone() animate=config.show_counters/>
            </RevealSection>

            <RevealSection id="skills" class="skills">
                <h2 class="section-title">"Skills"</h2>
                <SkillList skills=config.skills.clone()/>
            </RevealSection>

            <RevealSection id="projects" class="projects">
                <h2 class="section-title">"Projects"</h2>
                <ProjectFilters/>
                <ProjectGrid items=config.projects.clone()/>
            </RevealSection>

            <RevealSection id="contact" class="contact">
                <h2 class="section-title">"Get in Touch"</h2>
                <ContactForm/>
            </RevealSection>
        </main>

        <footer class="footer">
            <p>{format!("\u{a9} 2026 {}", config.owner_name)}</p>
        </footer>

        <BackToTop/>
    }
}
