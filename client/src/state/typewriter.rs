//! Typewriter animation over a fixed, cyclic list of titles.
//!
//! DESIGN
//! ======
//! One timer drives the machine. Each `tick` performs exactly one step and
//! `next_delay_ms` tells the driver how long to wait before the next one,
//! so typing, the pause, and deleting all share a single scheduled task.
//! The visible text is stored as a character count into the current title,
//! which keeps it a prefix of that title by construction.

#[cfg(test)]
#[path = "typewriter_test.rs"]
mod typewriter_test;

/// Delay between appended characters.
pub const TYPE_TICK_MS: u32 = 100;
/// Delay between removed characters.
pub const DELETE_TICK_MS: u32 = 60;
/// Dwell time on a fully typed title.
pub const PAUSE_MS: u32 = 1200;
/// Marker shown after a fully typed title while pausing.
pub const ELLIPSIS: &str = "...";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TypewriterMode {
    #[default]
    Typing,
    Pausing,
    Deleting,
}

/// The single step a tick performed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickAction {
    AppendChar,
    BeginPause,
    BeginDelete,
    RemoveChar,
    AdvanceIndex,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Typewriter {
    titles: &'static [&'static str],
    index: usize,
    visible_chars: usize,
    mode: TypewriterMode,
}

impl Typewriter {
    #[must_use]
    pub fn new(titles: &'static [&'static str]) -> Self {
        Self { titles, index: 0, visible_chars: 0, mode: TypewriterMode::Typing }
    }

    #[must_use]
    pub fn mode(&self) -> TypewriterMode {
        self.mode
    }

    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    fn current_title(&self) -> Option<&'static str> {
        self.titles.get(self.index).copied()
    }

    /// Advance the machine by one step. Returns `None` for an empty title
    /// list, which never changes state.
    pub fn tick(&mut self) -> Option<TickAction> {
        let title = self.current_title()?;
        let action = match self.mode {
            TypewriterMode::Typing if self.visible_chars >= title.chars().count() => {
                self.mode = TypewriterMode::Pausing;
                TickAction::BeginPause
            }
            TypewriterMode::Typing => {
                self.visible_chars += 1;
                TickAction::AppendChar
            }
            TypewriterMode::Pausing => {
                self.mode = TypewriterMode::Deleting;
                TickAction::BeginDelete
            }
            TypewriterMode::Deleting if self.visible_chars == 0 => {
                self.index = (self.index + 1) % self.titles.len();
                self.mode = TypewriterMode::Typing;
                TickAction::AdvanceIndex
            }
            TypewriterMode::Deleting => {
                self.visible_chars -= 1;
                TickAction::RemoveChar
            }
        };
        Some(action)
    }

    /// Wait before the next tick, or `None` when there is nothing to animate.
    #[must_use]
    pub fn next_delay_ms(&self) -> Option<u32> {
        self.current_title()?;
        Some(match self.mode {
            TypewriterMode::Typing => TYPE_TICK_MS,
            TypewriterMode::Pausing => PAUSE_MS,
            TypewriterMode::Deleting => DELETE_TICK_MS,
        })
    }

    /// The typed prefix of the current title.
    #[must_use]
    pub fn visible_text(&self) -> &'static str {
        let Some(title) = self.current_title() else {
            return "";
        };
        title.char_indices().nth(self.visible_chars).map_or(title, |(end, _)| &title[..end])
    }

    /// Text to render: the typed prefix, plus the ellipsis while pausing.
    #[must_use]
    pub fn display_text(&self) -> String {
        let visible = self.visible_text();
        if self.mode == TypewriterMode::Pausing {
            format!("{visible}{ELLIPSIS}")
        } else {
            visible.to_owned()
        }
    }
}
