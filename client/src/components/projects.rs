//! Project gallery. Fixed content, no interactive state.

use leptos::prelude::*;

use crate::content::{PROJECTS, Project};

#[component]
pub fn Projects() -> impl IntoView {
    let cards = PROJECTS.iter().map(|project| view! { <ProjectCard project/> }).collect_view();

    view! {
        <section id="projects" class="projects">
            <div class="section__header">
                <h2 class="section__title">"Featured Projects"</h2>
                <div class="section__rule"></div>
                <p class="section__lede">"A selection of things I have designed, built, and shipped."</p>
            </div>
            <div class="projects__grid">{cards}</div>
        </section>
    }
}

#[component]
fn ProjectCard(project: &'static Project) -> impl IntoView {
    let tags = project.tags.iter().map(|tag| view! { <li class="project-card__tag">{*tag}</li> }).collect_view();
    let source = project.source_href.map(|href| {
        view! {
            <a class="project-card__link" href=href target="_blank" rel="noopener noreferrer">
                "Source"
            </a>
        }
    });
    let live = project.live_href.map(|href| {
        view! { <a class="project-card__link project-card__link--live" href=href>"Live"</a> }
    });

    view! {
        <article class="project-card">
            <h3 class="project-card__title">{project.title}</h3>
            <p class="project-card__summary">{project.summary}</p>
            <ul class="project-card__tags">{tags}</ul>
            <div class="project-card__links">{source} {live}</div>
        </article>
    }
}
