//! Fixed page header with navigation, theme toggle, and mobile menu.

use leptos::prelude::*;

use crate::state::ui::UiState;

/// Section ids and nav labels, in page order.
pub const NAV_SECTIONS: &[(&str, &str)] = &[
    ("home", "Home"),
    ("about", "About"),
    ("skills", "Skills"),
    ("projects", "Projects"),
    ("contact", "Contact"),
];

/// Page header: logo, section links, theme toggle, and the mobile menu
/// button. Gains the `scrolled` class past the shadow threshold.
#[component]
pub fn Header() -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_toggle_menu = move |_| ui.update(|u| u.menu_open = !u.menu_open);

    let on_toggle_theme = move |_| {
        let current = ui.get().theme;
        let next = crate::util::theme::toggle(current);
        ui.update(|u| u.theme = next);
    };

    view! {
        <header class="header" class:scrolled=move || ui.get().scrolled>
            <nav class="nav">
                <a href="#home" class="nav-logo">"Portfolio"</a>

                <ul class="nav-menu" id="nav-menu" class:active=move || ui.get().menu_open>
                    {NAV_SECTIONS
                        .iter()
                        .map(|(id, label)| view! { <NavLink id=*id label=*label/> })
                        .collect::<Vec<_>>()}
                </ul>

                <button
                    class="theme-toggle"
                    title="Toggle dark mode"
                    on:click=on_toggle_theme
                >
                    {move || if ui.get().theme.is_dark() { "\u{2600}\u{fe0f}" } else { "\u{1f319}" }}
                </button>

                <button
                    class="mobile-menu-toggle"
                    class:active=move || ui.get().menu_open
                    aria-label="Toggle navigation"
                    aria-expanded=move || ui.get().menu_open.to_string()
                    on:click=on_toggle_menu
                >
                    <span class="mobile-menu-toggle__bar"></span>
                    <span class="mobile-menu-toggle__bar"></span>
                    <span class="mobile-menu-toggle__bar"></span>
                </button>
            </nav>
        </header>
    }
}

/// One nav link. Activating it closes the mobile menu and smooth-scrolls
/// to its section instead of jumping.
#[component]
fn NavLink(id: &'static str, label: &'static str) -> impl IntoView {
    let ui = expect_context::<RwSignal<UiState>>();

    let on_click = move |ev: leptos::ev::MouseEvent| {
        ev.prevent_default();
        ui.update(|u| u.menu_open = false);
        #[cfg(feature = "hydrate")]
        crate::util::scroll::scroll_to_section(id);
    };

    view! {
        <li class="nav-item">
            <a
                href=format!("#{id}")
                class="nav-link"
                class:active=move || ui.get().active_section.as_deref() == Some(id)
                on:click=on_click
            >
                {label}
            </a>
        </li>
    }
}
