//! Skill bars with reveal-triggered fill animation.

use leptos::prelude::*;

use crate::state::config::Skill;

/// Delay between a bar entering the viewport and its fill starting, so
/// the CSS width transition has a frame to latch onto.
#[cfg(feature = "hydrate")]
const FILL_DELAY_MS: u64 = 100;

/// The skill list.
#[component]
pub fn SkillList(skills: Vec<Skill>) -> impl IntoView {
    view! {
        <div class="skill-list">
            {skills
                .into_iter()
                .map(|skill| view! { <SkillBar name=skill.name level=skill.level/> })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// One skill bar. The fill animates from zero to the configured level on
/// first reveal and never re-triggers.
#[component]
fn SkillBar(name: String, level: u8) -> impl IntoView {
    let width = RwSignal::new(0_u8);
    let started = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    crate::util::scroll::watch_reveal(
        move || node.get().map(web_sys::Element::from),
        move || {
            if started.get_untracked() {
                return;
            }
            started.set(true);
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(FILL_DELAY_MS)).await;
                width.set(level);
            });
        },
    );

    view! {
        <div class="skill">
            <div class="skill-header">
                <span class="skill-name">{name}</span>
                <span class="skill-level">{format!("{level}%")}</span>
            </div>
            <div class="skill-bar" node_ref=node>
                <div
                    class="skill-progress"
                    class:animated=move || started.get()
                    style:width=move || format!("{}%", width.get())
                    aria-valuenow=level.to_string()
                ></div>
            </div>
        </div>
    }
}
