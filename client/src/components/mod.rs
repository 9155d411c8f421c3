//! Page section components.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each component renders one section of the page and owns that section's
//! state slice in a local signal. Only the theme flag is shared, through the
//! context provided by `app::App`.

pub mod contact;
pub mod footer;
pub mod hero;
pub mod link_button;
pub mod navbar;
pub mod projects;
pub mod skills;
