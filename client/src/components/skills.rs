//! Skills section: category filter, skill grid, detail card, summary stats.

use leptos::prelude::*;

use crate::content::{LEARNING_STATS, SKILLS};
use crate::state::skills::{CategoryFilter, SkillEntry, SkillFilter, years_of_experience};
use crate::util::clock::current_year;

#[component]
pub fn Skills() -> impl IntoView {
    let filter = RwSignal::new(SkillFilter::new(SKILLS));
    let on_close = Callback::new(move |()| filter.update(SkillFilter::clear_selection));

    let filter_buttons = CategoryFilter::ALL
        .into_iter()
        .map(|category| {
            view! {
                <button
                    class="skills__filter"
                    class:skills__filter--active=move || filter.with(|f| f.active() == category)
                    type="button"
                    on:click=move |_| filter.update(|f| f.set_filter(category))
                >
                    {category.label()}
                </button>
            }
        })
        .collect_view();

    let stats = LEARNING_STATS
        .iter()
        .map(|stat| {
            view! {
                <div class="skills__stat">
                    <div class="skills__stat-value">{stat.value}</div>
                    <div class="skills__stat-label">{stat.label}</div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="skills" class="skills">
            <div class="section__header">
                <h2 class="section__title">"Technical Skills"</h2>
                <div class="section__rule"></div>
                <p class="section__lede">
                    "Here are the technologies I work with to bring ideas to life. "
                    "Click on any skill to learn more about my experience."
                </p>
            </div>
            <div class="skills__filters">{filter_buttons}</div>
            <div class="skills__grid">
                <For
                    each=move || filter.with(SkillFilter::visible)
                    key=|entry| entry.name
                    children=move |entry: &'static SkillEntry| {
                        view! {
                            <button
                                class="skill-tile"
                                type="button"
                                on:click=move |_| {
                                    filter.update(|f| {
                                        f.select(entry.name);
                                    });
                                }
                            >
                                <SkillMark entry/>
                                <span class="skill-tile__name">{entry.name}</span>
                            </button>
                        }
                    }
                />
            </div>
            {move || {
                filter
                    .with(SkillFilter::selected)
                    .map(|entry| {
                        view! {
                            <div class="skill-modal" on:click=move |_| on_close.run(())>
                                <div class="skill-modal__body" on:click=|ev| ev.stop_propagation()>
                                    <SkillDetailCard entry on_close/>
                                </div>
                            </div>
                        }
                    })
            }}
            <div class="skills__journey">
                <h3 class="skills__journey-title">"My Learning Journey"</h3>
                <div class="skills__stats">{stats}</div>
                <p class="skills__journey-note">"Always growing, always learning - the journey never ends!"</p>
            </div>
        </section>
    }
}

/// Monogram badge in the skill's brand colour.
#[component]
fn SkillMark(entry: &'static SkillEntry) -> impl IntoView {
    view! {
        <span class="skill-mark" style:color=entry.accent style:border-color=entry.accent>
            {entry.mark}
        </span>
    }
}

/// Detail view for one skill. Rendered from the selection alone, so it does
/// not depend on the active filter.
#[component]
fn SkillDetailCard(entry: &'static SkillEntry, on_close: Callback<()>) -> impl IntoView {
    let years = years_of_experience(entry.year_started, current_year());
    let related = (!entry.related_skills.is_empty()).then(|| {
        let items = entry
            .related_skills
            .iter()
            .map(|name| view! { <span class="skill-detail__related-item">{*name}</span> })
            .collect_view();
        view! {
            <div class="skill-detail__related">
                <h5>"Related Skills:"</h5>
                <div class="skill-detail__related-list">{items}</div>
            </div>
        }
    });

    view! {
        <div class="skill-detail">
            <div class="skill-detail__header">
                <SkillMark entry/>
                <div>
                    <h4 class="skill-detail__name">{entry.name}</h4>
                    <div class="skill-detail__meta">
                        <span class=format!("skill-badge {}", entry.level.badge_modifier())>
                            {entry.level.label()}
                        </span>
                        <span class="skill-detail__years">{format!("{years}+ years")}</span>
                    </div>
                </div>
                <button
                    class="skill-detail__close"
                    type="button"
                    aria-label="Close"
                    on:click=move |_| on_close.run(())
                >
                    "✕"
                </button>
            </div>
            <p class="skill-detail__description">{entry.description}</p>
            {related}
            <div class="skill-detail__hint">"Click on any skill to view details"</div>
        </div>
    }
}
