//! Landing page: hero with calls to action and a card per section.

use leptos::prelude::*;

use crate::content::SECTION_CARDS;

#[component]
pub fn HomePage() -> impl IntoView {
    let cards = SECTION_CARDS
        .iter()
        .map(|card| {
            view! {
                <a href=card.href class="card card--link home__card">
                    <div class="home__card-head">
                        <span class="home__card-icon">{card.icon}</span>
                        <span class="home__card-arrow">"\u{2192}"</span>
                    </div>
                    <h3 class="home__card-title">{card.title}</h3>
                    <p class="home__card-text">{card.description}</p>
                </a>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="hero">
            <div class="hero__inner">
                <h1 class="hero__title">
                    <span class="hero__accent">"\u{1F3E0} House Price Prediction"</span>
                </h1>
                <p class="hero__lead">
                    "Explore how Linear Regression can predict house prices using real estate data."
                    <br />
                    "A comprehensive journey through data science and machine learning."
                </p>
                <div class="hero__actions">
                    <a href="/overview" class="btn btn--primary btn--lg">"\u{25B6} Start Learning"</a>
                    <a href="/results" class="btn btn--outline btn--lg">"\u{1F4C8} View Results"</a>
                </div>
            </div>

            <div class="home__explore">
                <h2 class="section-title">"Explore the Project"</h2>
                <div class="grid grid--4">{cards}</div>
            </div>
        </section>
    }
}
