//! Section wrapper that gains the `visible` class on first reveal.

use leptos::prelude::*;

/// A page `<section>` revealed once it scrolls into view. The class is
/// never removed again, so the entrance transition runs once.
#[component]
pub fn RevealSection(
    id: &'static str,
    #[prop(optional)] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node = NodeRef::<leptos::html::Section>::new();
    let revealed = RwSignal::new(false);

    #[cfg(feature = "hydrate")]
    crate::util::scroll::watch_reveal(
        move || node.get().map(web_sys::Element::from),
        move || revealed.set(true),
    );

    view! {
        <section id=id class=class class:visible=move || revealed.get() node_ref=node>
            {children()}
        </section>
    }
}
