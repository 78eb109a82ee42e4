//! Stat counters for the about section.

use leptos::prelude::*;

use crate::state::config::Stat;
#[cfg(feature = "hydrate")]
use crate::util::counter::{CountUp, STEP_DELAY_MS};

/// Row of stats. With `animate` off the targets render as plain numbers;
/// with it on each counter steps up when first revealed.
#[component]
pub fn StatsRow(stats: Vec<Stat>, animate: bool) -> impl IntoView {
    view! {
        <div class="stats">
            {stats
                .into_iter()
                .map(|stat| {
                    view! { <StatCounter label=stat.label target=stat.target animate=animate/> }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}

/// One stat. The count-up starts on first reveal and runs once.
#[component]
fn StatCounter(label: String, target: u32, animate: bool) -> impl IntoView {
    let value = RwSignal::new(if animate { 0 } else { target });
    let started = RwSignal::new(false);
    let node = NodeRef::<leptos::html::Div>::new();

    #[cfg(feature = "hydrate")]
    {
        if animate {
            crate::util::scroll::watch_reveal(
                move || node.get().map(web_sys::Element::from),
                move || {
                    if started.get_untracked() {
                        return;
                    }
                    started.set(true);
                    leptos::task::spawn_local(async move {
                        for step in CountUp::new(target) {
                            value.set(step);
                            gloo_timers::future::sleep(std::time::Duration::from_millis(
                                u64::from(STEP_DELAY_MS),
                            ))
                            .await;
                        }
                    });
                },
            );
        }
    }

    view! {
        <div class="stat" node_ref=node>
            <span class="stat-number" class:animated=move || started.get()>
                {move || value.get()}
            </span>
            <span class="stat-label">{label}</span>
        </div>
    }
}
