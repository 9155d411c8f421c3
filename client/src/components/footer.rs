//! Page footer: back-to-top, quick links, socials, copyright.

use leptos::prelude::*;

use crate::content::{NAV_LINKS, OWNER_EMAIL, OWNER_NAME, SOCIAL_LINKS};
use crate::util::clock::current_year;
use crate::util::scroll::scroll_to_top;

#[component]
pub fn Footer() -> impl IntoView {
    let year = current_year();

    let quick_links = NAV_LINKS
        .iter()
        .map(|link| view! { <li><a href=link.href()>{link.label}</a></li> })
        .collect_view();

    let social = SOCIAL_LINKS
        .iter()
        .map(|link| {
            let external = link.is_external();
            view! {
                <a
                    class="footer__social"
                    href=link.href
                    aria-label=link.label
                    target=external.then_some("_blank")
                    rel=external.then_some("noopener noreferrer")
                >
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <footer class="footer">
            <button class="footer__top" type="button" aria-label="Back to top" on:click=move |_| scroll_to_top()>
                "↑"
            </button>
            <div class="footer__brand">
                <h2 class="footer__name">{OWNER_NAME}</h2>
                <p class="footer__tagline">"Building digital experiences with creativity and code."</p>
            </div>
            <div class="footer__socials">{social}</div>
            <div class="footer__columns">
                <div class="footer__column">
                    <h3>"About"</h3>
                    <p>"Full stack developer focused on fast, friendly, and well-crafted web applications."</p>
                </div>
                <div class="footer__column">
                    <h3>"Quick Links"</h3>
                    <ul>{quick_links}</ul>
                </div>
                <div class="footer__column">
                    <h3>"Contact"</h3>
                    <a href=format!("mailto:{OWNER_EMAIL}")>{OWNER_EMAIL}</a>
                </div>
            </div>
            <p class="footer__copyright">{format!("© {year} {OWNER_NAME}. All rights reserved.")}</p>
        </footer>
    }
}
