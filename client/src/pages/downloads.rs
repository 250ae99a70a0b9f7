//! Downloadable resources and dataset details.

use leptos::prelude::*;

use crate::components::page_nav::PageNav;
use crate::content::{
    CODE_HIGHLIGHTS, DATASET_COLUMNS, DOWNLOADS, REPOSITORY_AUDIENCE, REPOSITORY_CONTENTS, REPOSITORY_URL,
};

fn bullets(items: &'static [&'static str]) -> Vec<AnyView> {
    items.iter().map(|item| view! { <li>{*item}</li> }.into_any()).collect()
}

#[component]
pub fn DownloadsPage() -> impl IntoView {
    let cards = DOWNLOADS
        .iter()
        .map(|item| {
            let action = if item.kind.is_direct() {
                view! {
                    <a href=item.url class="btn btn--primary btn--block" download="">
                        "\u{2B07} Download "
                        {item.title}
                    </a>
                }
                .into_any()
            } else {
                view! {
                    <a href=item.url class="btn btn--primary btn--block" target="_blank" rel="noopener noreferrer">
                        "View on GitHub"
                    </a>
                }
                .into_any()
            };
            view! {
                <div class="card download">
                    <h3 class="card__title">{item.title}</h3>
                    <p class="card__subtitle">{item.description}</p>
                    <div class="download__size">
                        <span>"File Size:"</span>
                        <span class="badge badge--outline">{item.size}</span>
                    </div>
                    <h4>"Includes:"</h4>
                    <ul class="bullets">{bullets(item.features)}</ul>
                    {action}
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Download Resources"</h1>
                <p class="page__lead">"Get the actual dataset, source code, and documentation used in this project"</p>
            </header>

            <div class="grid grid--2">{cards}</div>

            <div class="card">
                <h3 class="card__title">"Dataset Information"</h3>
                <p class="card__subtitle">"Housing.csv - Real estate data for price prediction"</p>
                <div class="grid grid--2">
                    <div>
                        <h4>"Dataset Features"</h4>
                        <div class="column-grid">
                            {DATASET_COLUMNS.iter().map(|c| view! { <span class="column-grid__cell">{*c}</span> }).collect::<Vec<_>>()}
                        </div>
                    </div>
                    <div>
                        <h4>"Code Highlights"</h4>
                        <ul class="bullets">{bullets(CODE_HIGHLIGHTS)}</ul>
                    </div>
                </div>
            </div>

            <div class="callout">
                <h3 class="callout__title">"Complete Project Repository"</h3>
                <div class="grid grid--2">
                    <div>
                        <h4 class="text-blue">"Repository Contents"</h4>
                        <ul class="bullets">{bullets(REPOSITORY_CONTENTS)}</ul>
                    </div>
                    <div>
                        <h4 class="text-purple">"Perfect For"</h4>
                        <ul class="bullets">{bullets(REPOSITORY_AUDIENCE)}</ul>
                    </div>
                </div>
                <a href=REPOSITORY_URL class="btn btn--primary btn--lg" target="_blank" rel="noopener noreferrer">
                    "View Repository on GitHub"
                </a>
            </div>

            <PageNav current="/downloads" />
        </section>
    }
}
