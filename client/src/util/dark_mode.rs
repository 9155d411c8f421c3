//! Theme marker on the document element.
//!
//! Adds or removes the `dark` class on `<html>` so stylesheet rules keyed on
//! `.dark` follow the theme flag. Requires a browser environment.
//!
//! TRADE-OFFS
//! ==========
//! The preference is not persisted; every page load starts from the default
//! theme. SSR paths no-op to keep server rendering deterministic.

#[cfg(test)]
#[path = "dark_mode_test.rs"]
mod dark_mode_test;

/// Class applied to the document element while dark mode is on.
pub const DARK_CLASS: &str = "dark";

/// Class list for the server-rendered `<html>` element, so the first paint
/// already matches the theme flag.
#[must_use]
pub fn root_class(enabled: bool) -> &'static str {
    if enabled { DARK_CLASS } else { "" }
}

/// Apply or remove the `dark` class on the `<html>` element.
pub fn apply(enabled: bool) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(el) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.document_element()) {
            let classes = el.class_list();
            let _ = if enabled { classes.add_1(DARK_CLASS) } else { classes.remove_1(DARK_CLASS) };
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = enabled;
    }
}
