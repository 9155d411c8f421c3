//! Fixed navigation bar with scroll-tracked section highlighting.
//!
//! SYSTEM CONTEXT
//! ==============
//! Scroll events are coalesced to one recomputation per animation frame.
//! Each recomputation measures the section anchors and feeds them to
//! `NavState::observe_scroll`, which decides the active link.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, OWNER_FIRST_NAME, SOCIAL_LINKS};
use crate::state::nav::NavState;
use crate::state::theme::ThemeState;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();
    let nav = RwSignal::new(NavState::new(NAV_LINKS[0].id));

    #[cfg(feature = "hydrate")]
    {
        let frame_pending = RwSignal::new(false);
        let recompute = move || {
            let offset = crate::util::scroll::scroll_y();
            let anchors = crate::util::scroll::measure_anchors(NAV_LINKS);
            nav.try_update(|s| s.observe_scroll(offset, &anchors));
        };
        Effect::new(move || recompute());
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            if frame_pending.get_untracked() {
                return;
            }
            frame_pending.set(true);
            request_animation_frame(move || {
                frame_pending.try_set(false);
                recompute();
            });
        });
        on_cleanup(move || handle.remove());
    }

    let desktop_links = NAV_LINKS
        .iter()
        .map(|link| {
            let id = link.id;
            view! {
                <a
                    class="navbar__link"
                    class:navbar__link--active=move || nav.with(|s| s.is_active(id))
                    href=link.href()
                >
                    {link.label}
                    <Show when=move || nav.with(|s| s.is_active(id))>
                        <span class="navbar__underline"></span>
                    </Show>
                </a>
            }
        })
        .collect_view();

    view! {
        <nav class="navbar" class:navbar--scrolled=move || nav.with(|s| s.scrolled)>
            <div class="navbar__inner">
                <a class="navbar__brand" href="#home">
                    <span class="navbar__brand-mark">"<"</span>
                    <span>{OWNER_FIRST_NAME}</span>
                    <span class="navbar__brand-mark">"/>"</span>
                </a>
                <div class="navbar__links">{desktop_links}</div>
                <div class="navbar__actions">
                    <button
                        class="navbar__theme-toggle"
                        type="button"
                        title=move || theme.get().toggle_label()
                        aria-label=move || theme.get().toggle_label()
                        on:click=move |_| {
                            theme.update(|t| {
                                t.toggle();
                            });
                        }
                    >
                        {move || if theme.get().dark_mode { "☀" } else { "☾" }}
                    </button>
                    <button
                        class="navbar__menu-button"
                        type="button"
                        aria-label="Toggle menu"
                        aria-expanded=move || nav.with(|s| s.menu_open.to_string())
                        on:click=move |_| nav.update(NavState::toggle_menu)
                    >
                        {move || if nav.with(|s| s.menu_open) { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>
            <Show when=move || nav.with(|s| s.menu_open)>
                <MobileMenu nav/>
            </Show>
        </nav>
    }
}

/// Collapsible link list for narrow viewports. Clicking any link closes it.
#[component]
fn MobileMenu(nav: RwSignal<NavState>) -> impl IntoView {
    let links = NAV_LINKS
        .iter()
        .map(|link| {
            let id = link.id;
            view! {
                <a
                    class="navbar__mobile-link"
                    class:navbar__mobile-link--active=move || nav.with(|s| s.is_active(id))
                    href=link.href()
                    on:click=move |_| nav.update(NavState::close_menu)
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();

    let social = SOCIAL_LINKS
        .iter()
        .filter(|link| link.is_external())
        .take(2)
        .map(|link| {
            view! {
                <a
                    class="navbar__social"
                    href=link.href
                    target="_blank"
                    rel="noopener noreferrer"
                    on:click=move |_| nav.update(NavState::close_menu)
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <div class="navbar__mobile-menu">
            {links}
            <div class="navbar__mobile-social">{social}</div>
        </div>
    }
}
