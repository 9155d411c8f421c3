//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (DOM access, clock,
//! timers) from component logic. Each helper has a non-browser fallback so
//! SSR and native tests stay deterministic.

pub mod clock;
pub mod dark_mode;
pub mod scroll;
pub mod task;
