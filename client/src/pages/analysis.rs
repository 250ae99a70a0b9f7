//! Exploratory data analysis: one tab per plot plus the key insights.

use leptos::prelude::*;

use crate::components::page_nav::PageNav;
use crate::content::{DATA_QUALITY, PLOT_PLACEHOLDER, STRONG_PREDICTORS, VISUALIZATIONS};

#[component]
pub fn AnalysisPage() -> impl IntoView {
    let selected = RwSignal::new(0_usize);

    let tabs = VISUALIZATIONS
        .iter()
        .enumerate()
        .map(|(i, vis)| {
            view! {
                <button
                    class="tabs__tab"
                    class:tabs__tab--active=move || selected.get() == i
                    role="tab"
                    on:click=move |_| selected.set(i)
                >
                    {vis.tab}
                </button>
            }
        })
        .collect::<Vec<_>>();

    let panel = move || {
        VISUALIZATIONS.get(selected.get()).map(|vis| {
            view! {
                <div class="card" role="tabpanel">
                    <h3 class="card__title">{vis.title}</h3>
                    <p class="card__subtitle">{vis.subtitle}</p>
                    <img class="plot" src=PLOT_PLACEHOLDER alt=vis.alt />
                    <p class="insight">{vis.insight}</p>
                </div>
            }
        })
    };

    let bullets = |items: &'static [&'static str]| {
        items.iter().map(|item| view! { <li>{*item}</li> }).collect::<Vec<_>>()
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Exploratory Data Analysis"</h1>
                <p class="page__lead">"Understanding patterns and relationships in our housing data"</p>
            </header>

            <div class="tabs">
                <div class="tabs__list" role="tablist">{tabs}</div>
                {panel}
            </div>

            <div class="callout">
                <h3 class="callout__title">"Key Insights from EDA"</h3>
                <div class="grid grid--2">
                    <div>
                        <h4 class="text-blue">"Strong Predictors"</h4>
                        <ul class="bullets">{bullets(STRONG_PREDICTORS)}</ul>
                    </div>
                    <div>
                        <h4 class="text-green">"Data Quality"</h4>
                        <ul class="bullets">{bullets(DATA_QUALITY)}</ul>
                    </div>
                </div>
            </div>

            <PageNav current="/analysis" />
        </section>
    }
}
