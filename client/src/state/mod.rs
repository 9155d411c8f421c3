//! Client-side interactive state.
//!
//! DESIGN
//! ======
//! Each module owns one section's state slice as a plain struct with no
//! browser dependency. Components hold these inside `RwSignal`s and drive
//! them from DOM events and timers, which keeps every transition testable
//! natively.

pub mod contact;
pub mod nav;
pub mod skills;
pub mod theme;
pub mod typewriter;
