//! Navigation bar state: active section tracking, compact mode, mobile menu.
//!
//! DESIGN
//! ======
//! The active section is derived from the scroll offset and the measured
//! top offsets of the section anchors. Anchors are scanned from the last
//! declared to the first, so the lowest section the viewport has passed
//! wins. Declaration order is authoritative even if measured offsets are
//! not increasing.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// Distance below the viewport top at which a section counts as reached.
pub const LOOKAHEAD_OFFSET: f64 = 100.0;

/// Scroll offset past which the navbar switches to its compact style.
pub const SCROLLED_THRESHOLD: f64 = 50.0;

/// A measured section anchor. `top` is `None` when the section element is
/// not in the document.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionAnchor {
    pub id: &'static str,
    pub top: Option<f64>,
}

/// Return the id of the last declared anchor whose top offset is at or
/// above `offset_y + LOOKAHEAD_OFFSET`, skipping missing anchors.
#[must_use]
pub fn resolve_active_section(anchors: &[SectionAnchor], offset_y: f64) -> Option<&'static str> {
    let threshold = offset_y + LOOKAHEAD_OFFSET;
    anchors
        .iter()
        .rev()
        .find(|anchor| anchor.top.is_some_and(|top| top <= threshold))
        .map(|anchor| anchor.id)
}

#[derive(Clone, Debug, PartialEq)]
pub struct NavState {
    pub active_section: &'static str,
    pub scrolled: bool,
    pub menu_open: bool,
}

impl NavState {
    /// Start with `first_section` active, at the top of the page.
    #[must_use]
    pub fn new(first_section: &'static str) -> Self {
        Self { active_section: first_section, scrolled: false, menu_open: false }
    }

    /// Recompute derived flags for a new scroll sample. The active section
    /// is left untouched when no anchor qualifies.
    pub fn observe_scroll(&mut self, offset_y: f64, anchors: &[SectionAnchor]) {
        self.scrolled = offset_y > SCROLLED_THRESHOLD;
        if let Some(id) = resolve_active_section(anchors, offset_y) {
            self.active_section = id;
        }
    }

    #[must_use]
    pub fn is_active(&self, id: &str) -> bool {
        self.active_section == id
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
