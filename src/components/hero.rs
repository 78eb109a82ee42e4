//! Hero section content with the typing subtitle.

use leptos::prelude::*;

use crate::state::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::util::typing::{START_DELAY_MS, TypingLoop};

/// Hero content: name, typing (or static) subtitle, and the contact
/// call-to-action.
#[component]
pub fn Hero() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let subtitle = if config.typing_roles.is_empty() {
        view! { <span class="hero-subtitle__text">{config.tagline.clone()}</span> }.into_any()
    } else {
        view! { <TypingText roles=config.typing_roles.clone()/> }.into_any()
    };

    view! {
        <div class="hero-content">
            <h1 class="hero-title">{config.owner_name.clone()}</h1>
            <p class="hero-subtitle">{subtitle}</p>
            <a href="#contact" class="btn btn--primary hero-cta">
                "Get in Touch"
            </a>
        </div>
    }
}

/// Cycles the subtitle through the configured roles with a type/delete
/// animation. The loop runs for the lifetime of the page.
#[component]
fn TypingText(roles: Vec<String>) -> impl IntoView {
    let text = RwSignal::new(String::new());

    #[cfg(feature = "hydrate")]
    {
        if let Some(mut machine) = TypingLoop::new(roles) {
            leptos::task::spawn_local(async move {
                gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                    START_DELAY_MS,
                )))
                .await;
                loop {
                    let frame = machine.tick();
                    text.set(frame.text);
                    gloo_timers::future::sleep(std::time::Duration::from_millis(u64::from(
                        frame.delay_ms,
                    )))
                    .await;
                }
            });
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = roles;
    }

    view! { <span class="typing-text">{move || text.get()}</span> }
}
