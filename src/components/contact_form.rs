//! Contact form with its transient status-message lifecycle.

use leptos::prelude::*;

use crate::net::types::ContactSubmission;
#[cfg(feature = "hydrate")]
use crate::net::types::SubmitOutcome;
use crate::state::config::SiteConfig;
#[cfg(feature = "hydrate")]
use crate::state::contact::STATUS_CLEAR_DELAY_MS;
use crate::state::contact::{ContactState, StatusKind};

/// The contact form. Submitting posts the field values to the configured
/// endpoint and walks the status message from sending to settled to
/// cleared. A second submission is not serialized against the first; the
/// epoch guard in [`ContactState`] only keeps a superseded clear timer
/// from wiping the newer message.
#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let contact = expect_context::<RwSignal<ContactState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());

    let action = config.contact_endpoint.clone();
    let method = config.contact_method.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let submission = ContactSubmission {
            action: action.clone(),
            method: method.clone(),
            fields: vec![
                ("name".to_owned(), name.get()),
                ("email".to_owned(), email.get()),
                ("message".to_owned(), message.get()),
            ],
        };
        contact.update(|c| {
            c.begin_sending();
        });

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let outcome = crate::net::contact::submit(&submission).await;
            if outcome == SubmitOutcome::Accepted {
                name.set(String::new());
                email.set(String::new());
                message.set(String::new());
            }
            let token = contact.try_update(|c| c.resolve(&outcome)).unwrap_or_default();

            gloo_timers::future::sleep(std::time::Duration::from_millis(STATUS_CLEAR_DELAY_MS))
                .await;
            contact.update(|c| c.clear_if_current(token));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = submission;
    };

    let status = move || contact.get().status;

    view! {
        <form class="contact-form" id="contact-form" on:submit=on_submit>
            <label class="contact-form__label">
                "Name"
                <input
                    class="contact-form__input"
                    type="text"
                    name="name"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__label">
                "Email"
                <input
                    class="contact-form__input"
                    type="email"
                    name="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </label>
            <label class="contact-form__label">
                "Message"
                <textarea
                    class="contact-form__input contact-form__textarea"
                    name="message"
                    placeholder="What can I build for you?"
                    prop:value=move || message.get()
                    on:input=move |ev| message.set(event_target_value(&ev))
                ></textarea>
            </label>

            <button class="btn btn--primary" type="submit">
                "Send Message"
            </button>

            <p
                id="form-status"
                class="form-status"
                class:visible=move || status().visible
                class:sending=move || status().kind == Some(StatusKind::Sending)
                class:success=move || status().kind == Some(StatusKind::Success)
                class:error=move || status().kind == Some(StatusKind::Error)
            >
                {move || status().text}
            </p>
        </form>
    }
}
