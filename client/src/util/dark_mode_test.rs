use super::*;
use crate::state::theme::ThemeState;

#[test]
fn root_class_follows_flag() {
    assert_eq!(root_class(true), DARK_CLASS);
    assert_eq!(root_class(false), "");
}

#[test]
fn default_theme_renders_dark_root() {
    assert_eq!(root_class(ThemeState::default().dark_mode), "dark");
}
