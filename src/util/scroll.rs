//! Scroll thresholds, section math, and browser scroll helpers.
//!
//! DESIGN
//! ======
//! The decision math (thresholds, active-section selection) is pure and
//! tested natively; DOM measurement and smooth scrolling are gated behind
//! `hydrate` like the rest of the browser glue.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast;

/// Scroll depth past which the header gets its shadow.
pub const HEADER_SHADOW_THRESHOLD: f64 = 50.0;

/// Scroll depth past which the back-to-top button appears.
pub const BACK_TO_TOP_THRESHOLD: f64 = 300.0;

/// A section is revealed once its top is this far above the viewport
/// bottom.
pub const REVEAL_MARGIN: f64 = 100.0;

/// Offset added to the scroll position when probing for the active
/// section, so the link flips slightly before the section reaches the
/// very top.
pub const NAV_PROBE_OFFSET: f64 = 100.0;

/// Measured page geometry for one `section[id]`.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionMetrics {
    pub id: String,
    pub top: f64,
    pub height: f64,
}

#[must_use]
pub fn header_scrolled(scroll_y: f64) -> bool {
    scroll_y > HEADER_SHADOW_THRESHOLD
}

#[must_use]
pub fn show_back_to_top(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Whether an element whose bounding-box top is `top` has entered the
/// reveal zone of a viewport `viewport_height` tall.
#[must_use]
pub fn section_revealed(top: f64, viewport_height: f64) -> bool {
    top < viewport_height - REVEAL_MARGIN
}

/// The section whose `[top, top + height)` range contains the probe
/// position. Later sections win when ranges overlap, matching document
/// order scanning.
#[must_use]
pub fn active_section(scroll_y: f64, sections: &[SectionMetrics]) -> Option<&str> {
    let probe = scroll_y + NAV_PROBE_OFFSET;
    let mut current = None;
    for section in sections {
        if probe >= section.top && probe < section.top + section.height {
            current = Some(section.id.as_str());
        }
    }
    current
}

/// Current vertical scroll position.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn scroll_y() -> f64 {
    web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

/// Current viewport height.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn viewport_height() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

/// Measure offset geometry for each of `ids`, skipping any that are not
/// in the document.
#[cfg(feature = "hydrate")]
#[must_use]
pub fn measure_sections(ids: &[&str]) -> Vec<SectionMetrics> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };

    ids.iter()
        .filter_map(|id| {
            let element = document.get_element_by_id(id)?;
            let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
            Some(SectionMetrics {
                id: (*id).to_owned(),
                top: f64::from(element.offset_top()),
                height: f64::from(element.offset_height()),
            })
        })
        .collect()
}

/// Run `on_reveal` once the target element scrolls into the reveal zone.
///
/// Checks once after mount and again on every scroll event; `on_reveal`
/// may fire repeatedly, so one-shot callers keep their own latch.
#[cfg(feature = "hydrate")]
pub fn watch_reveal(
    target: impl Fn() -> Option<web_sys::Element> + Clone + 'static,
    on_reveal: impl Fn() + Clone + 'static,
) {
    let check = move || {
        if let Some(element) = target()
            && section_revealed(element.get_bounding_client_rect().top(), viewport_height())
        {
            on_reveal();
        }
    };

    {
        let check = check.clone();
        leptos::prelude::Effect::new(move || check());
    }
    let _handle = leptos::prelude::window_event_listener(leptos::ev::scroll, move |_| check());
}

/// Smooth-scroll back to the top of the page.
#[cfg(feature = "hydrate")]
pub fn scroll_to_top() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let options = web_sys::ScrollToOptions::new();
    options.set_top(0.0);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Smooth-scroll the section with `id` into view.
#[cfg(feature = "hydrate")]
pub fn scroll_to_section(id: &str) {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    let Some(element) = document.get_element_by_id(id) else {
        return;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    element.scroll_into_view_with_scroll_into_view_options(&options);
}
