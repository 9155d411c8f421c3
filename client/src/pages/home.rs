//! The single portfolio page.

use leptos::prelude::*;

use crate::components::{
    contact::Contact, footer::Footer, hero::Hero, navbar::Navbar, projects::Projects, skills::Skills,
};
use crate::state::theme::ThemeState;

/// Navbar, the four navigable sections in `NAV_LINKS` order, and the footer.
#[component]
pub fn HomePage() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    view! {
        <div class="page" class:page--dark=move || theme.get().dark_mode>
            <Navbar/>
            <main>
                <Hero/>
                <Skills/>
                <Projects/>
                <Contact/>
            </main>
            <Footer/>
        </div>
    }
}
