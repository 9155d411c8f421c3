//! Site-wide light/dark theme flag.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Theme preference owned by the root component and shared via context.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeState {
    pub dark_mode: bool,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self { dark_mode: true }
    }
}

impl ThemeState {
    /// Flip the flag and return the new value.
    pub fn toggle(&mut self) -> bool {
        self.dark_mode = !self.dark_mode;
        self.dark_mode
    }

    /// Accessible label for the toggle button in the current state.
    #[must_use]
    pub fn toggle_label(self) -> &'static str {
        if self.dark_mode { "Switch to light theme" } else { "Switch to dark theme" }
    }
}
