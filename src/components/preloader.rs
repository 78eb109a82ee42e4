//! Full-page preloader overlay, hidden shortly after startup.

use leptos::prelude::*;

/// How long the overlay stays up after the page becomes interactive.
#[cfg(feature = "hydrate")]
const HIDE_DELAY_MS: u64 = 500;

#[component]
pub fn Preloader() -> impl IntoView {
    let hidden = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(HIDE_DELAY_MS)).await;
        hidden.set(true);
    });

    view! {
        <div class="preloader" class:hidden=move || hidden.get()>
            <div class="preloader__spinner"></div>
        </div>
    }
}
