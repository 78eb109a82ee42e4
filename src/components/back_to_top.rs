//! Back-to-top button, visible once the page is scrolled far enough.

use leptos::prelude::*;

use crate::state::ui::UiState;

#[component]
pub fn BackToTop() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |_| {
        #[cfg(feature = "hydrate")]
        crate::util::scroll::scroll_to_top();
    };

    view! {
        <button
            id="back-to-top"
            class="back-to-top"
            class:visible=move || ui.get().back_to_top_visible
            aria-label="Back to top"
            on:click=on_click
        >
            "\u{2191}"
        </button>
    }
}
