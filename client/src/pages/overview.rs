//! Problem statement, dataset features, and tooling.

use leptos::prelude::*;

use crate::components::page_nav::PageNav;
use crate::content::{DATASET_FEATURES, TOOLS};

#[component]
pub fn OverviewPage() -> impl IntoView {
    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Project Overview"</h1>
                <p class="page__lead">
                    "Understanding the real estate market through data-driven insights and machine learning"
                </p>
            </header>

            <div class="grid grid--3">
                <div class="card">
                    <h3 class="card__title">"\u{1F3AF} Problem Statement"</h3>
                    <p class="card__text">
                        "Predict house prices based on various property features using Linear Regression. Help buyers and sellers make informed decisions in the real estate market."
                    </p>
                </div>
                <div class="card">
                    <h3 class="card__title">"\u{1F5C4} Dataset Features"</h3>
                    <ul class="badge-list">
                        {DATASET_FEATURES.iter().map(|f| view! { <li class="badge">{*f}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
                <div class="card">
                    <h3 class="card__title">"\u{26A1} Tools Used"</h3>
                    <ul class="badge-list">
                        {TOOLS.iter().map(|t| view! { <li class="badge badge--outline">{*t}</li> }).collect::<Vec<_>>()}
                    </ul>
                </div>
            </div>

            <div class="callout">
                <h3 class="callout__title">"Why Linear Regression?"</h3>
                <p>
                    "Linear Regression is perfect for this problem because house prices typically have linear relationships with features like area, number of rooms, and location. It's interpretable, fast to train, and provides clear insights into which features most influence price predictions."
                </p>
            </div>

            <PageNav current="/overview" />
        </section>
    }
}
