//! Viewport scroll reads and section anchor measurement.

#[cfg(test)]
#[path = "scroll_test.rs"]
mod scroll_test;

#[cfg(feature = "hydrate")]
use wasm_bindgen::JsCast as _;

use crate::content::NavLink;
use crate::state::nav::SectionAnchor;

/// Current vertical scroll offset of the window, `0.0` outside a browser.
#[must_use]
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Measure the document top offset of each linked section. Sections whose
/// element is missing come back with `top: None`.
#[must_use]
pub fn measure_anchors(links: &[NavLink]) -> Vec<SectionAnchor> {
    #[cfg(feature = "hydrate")]
    let document = web_sys::window().and_then(|w| w.document());

    links
        .iter()
        .map(|link| {
            #[cfg(feature = "hydrate")]
            let top = document
                .as_ref()
                .and_then(|doc| doc.get_element_by_id(link.id))
                .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|el| f64::from(el.offset_top()));
            #[cfg(not(feature = "hydrate"))]
            let top = None;
            SectionAnchor { id: link.id, top }
        })
        .collect()
}

/// Smooth-scroll the window back to the top.
pub fn scroll_to_top() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let options = web_sys::ScrollToOptions::new();
            options.set_top(0.0);
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        }
    }
}
