//! Expandable concept cards and a suggested learning path.

#[cfg(test)]
#[path = "concepts_test.rs"]
mod concepts_test;

use leptos::prelude::*;

use crate::components::code_block::CodeBlock;
use crate::components::page_nav::PageNav;
use crate::content::{ADVANCED_PATH, CONCEPTS, FOUNDATION_PATH};

/// Flip `id` in the open set. Any number of cards may be open.
pub fn toggle_open(open: &mut Vec<&'static str>, id: &'static str) {
    if let Some(index) = open.iter().position(|candidate| *candidate == id) {
        open.remove(index);
    } else {
        open.push(id);
    }
}

#[component]
pub fn ConceptsPage() -> impl IntoView {
    let open = RwSignal::new(Vec::<&'static str>::new());

    let cards = CONCEPTS
        .iter()
        .map(|concept| {
            let id = concept.id;
            let is_open = move || open.with(|ids| ids.contains(&id));
            view! {
                <div class="card concept" class:concept--open=is_open>
                    <button
                        class="concept__head"
                        aria-expanded=move || is_open().to_string()
                        on:click=move |_| open.update(|ids| toggle_open(ids, id))
                    >
                        <span class="concept__icon">{concept.icon}</span>
                        <div class="concept__heading">
                            <h3 class="concept__title">{concept.title}</h3>
                            <p class="concept__summary">{concept.summary}</p>
                        </div>
                        <span class="concept__chevron">{move || if is_open() { "\u{25B2}" } else { "\u{25BC}" }}</span>
                    </button>
                    <Show when=is_open>
                        <div class="concept__body">
                            <h4>"Formula/Process"</h4>
                            <p class="concept__formula">{concept.example}</p>
                            <h4>"Code Example"</h4>
                            <CodeBlock code=concept.code />
                            <h4>"Explanation"</h4>
                            <p>{concept.explanation}</p>
                        </div>
                    </Show>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let path = |items: &'static [&'static str], offset: usize| {
        items
            .iter()
            .enumerate()
            .map(|(i, item)| view! { <li>{format!("{}. {item}", offset + i + 1)}</li> })
            .collect::<Vec<_>>()
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Concept Learning"</h1>
                <p class="page__lead">"Master the key concepts behind our machine learning model"</p>
            </header>

            <div class="concepts">{cards}</div>

            <div class="callout">
                <h3 class="callout__title">"Learning Path Recommendation"</h3>
                <div class="grid grid--2">
                    <div>
                        <h4 class="text-purple">"Foundation (Start Here)"</h4>
                        <ul class="bullets">{path(FOUNDATION_PATH, 0)}</ul>
                    </div>
                    <div>
                        <h4 class="text-blue">"Advanced (Build Upon)"</h4>
                        <ul class="bullets">{path(ADVANCED_PATH, FOUNDATION_PATH.len())}</ul>
                    </div>
                </div>
            </div>

            <PageNav current="/concepts" />
        </section>
    }
}
