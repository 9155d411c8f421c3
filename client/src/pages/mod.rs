//! Page modules.
//!
//! ARCHITECTURE
//! ============
//! The site is a single page; `home` composes the section components in
//! document order.

pub mod home;
