//! Anchor styled as a call-to-action button.

use leptos::prelude::*;

#[component]
pub fn LinkButton(
    href: &'static str,
    #[prop(optional)] secondary: bool,
    #[prop(optional)] download: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            class="link-button"
            class:link-button--secondary=secondary
            href=href
            download=download.then_some("")
        >
            {children()}
        </a>
    }
}
