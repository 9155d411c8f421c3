//! Hero section: greeting, typewriter job titles, and calls to action.

use leptos::prelude::*;

use crate::components::link_button::LinkButton;
use crate::content::{JOB_TITLES, OWNER_FIRST_NAME, OWNER_LAST_NAME, OWNER_NAME, PROFILE_IMAGE_SRC, RESUME_HREF, SOCIAL_LINKS};
use crate::state::typewriter::Typewriter;

#[component]
pub fn Hero() -> impl IntoView {
    let typewriter = RwSignal::new(Typewriter::new(JOB_TITLES));

    // One repeating task drives the machine until the section unmounts.
    #[cfg(feature = "hydrate")]
    {
        use crate::util::task::{TaskGuard, schedule_repeating};

        let guard = TaskGuard::new();
        if let Some(first_delay) = typewriter.with_untracked(Typewriter::next_delay_ms) {
            schedule_repeating(&guard, first_delay, move || {
                typewriter
                    .try_update(|t| {
                        t.tick();
                        t.next_delay_ms()
                    })
                    .flatten()
            });
        }
        on_cleanup(move || guard.cancel());
    }

    let social = SOCIAL_LINKS
        .iter()
        .filter(|link| link.is_external())
        .take(3)
        .map(|link| {
            view! {
                <a class="hero__social" href=link.href target="_blank" rel="noopener noreferrer">
                    {link.label}
                </a>
            }
        })
        .collect_view();

    view! {
        <section id="home" class="hero">
            <div class="hero__inner">
                <div class="hero__copy">
                    <div class="hero__greeting">"Hello World, I'm"</div>
                    <h1 class="hero__name">
                        {OWNER_FIRST_NAME}
                        " "
                        <span class="hero__name-accent">{OWNER_LAST_NAME}</span>
                    </h1>
                    <div class="hero__role">
                        <span>"I'm a"</span>
                        <span class="hero__typewriter">
                            <span>{move || typewriter.with(Typewriter::display_text)}</span>
                            <span class="hero__cursor"></span>
                        </span>
                    </div>
                    <p class="hero__blurb">
                        "I build modern web applications with cutting-edge technologies. "
                        "Passionate about creating elegant solutions to complex problems "
                        "and delivering exceptional user experiences."
                    </p>
                    <div class="hero__actions">
                        <LinkButton href=RESUME_HREF download=true>"Download Resume"</LinkButton>
                        <LinkButton href="#contact" secondary=true>"Contact Me"</LinkButton>
                    </div>
                    <div class="hero__socials">{social}</div>
                </div>
                <div class="hero__portrait">
                    <div class="hero__portrait-frame">
                        <img src=PROFILE_IMAGE_SRC alt=OWNER_NAME/>
                    </div>
                </div>
            </div>
            <a class="hero__scroll-hint" href="#skills" aria-label="Scroll to skills">"⌄"</a>
        </section>
    }
}
