//! Author profile and contact links.

use leptos::prelude::*;

use crate::components::page_nav::PageNav;
use crate::content::{
    ABOUT_PARAGRAPHS, AUTHOR_NAME, AUTHOR_ROLE, COLLABORATION, CONTACT_EMAIL, GITHUB_PROFILE_URL, LINKEDIN_URL,
    PROJECT_HIGHLIGHTS,
};

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"About Me"</h1>
                <p class="page__lead">"Get to know the person behind this machine learning project"</p>
            </header>

            <div class="grid grid--about">
                <div class="card">
                    <div class="profile">
                        <span class="profile__avatar">"AZ"</span>
                        <div>
                            <h2 class="profile__name">{AUTHOR_NAME}</h2>
                            <p class="profile__role">{AUTHOR_ROLE}</p>
                        </div>
                    </div>
                    {ABOUT_PARAGRAPHS.iter().map(|p| view! { <p class="profile__text">{*p}</p> }).collect::<Vec<_>>()}
                    <h4>"Project Highlights"</h4>
                    <ul class="bullets">
                        {PROJECT_HIGHLIGHTS.iter().map(|h| view! { <li>{*h}</li> }).collect::<Vec<_>>()}
                    </ul>
                    <div class="profile__status">
                        <span>"\u{1F4CD} Available Worldwide"</span>
                        <span>"\u{1F4BC} Open to opportunities"</span>
                    </div>
                </div>

                <div class="card">
                    <h3 class="card__title">"Connect With Me"</h3>
                    <p class="card__subtitle">"Let's discuss data science and machine learning"</p>
                    <a href=GITHUB_PROFILE_URL class="btn btn--outline btn--block" target="_blank" rel="noopener noreferrer">
                        "GitHub Profile"
                    </a>
                    <a href=LINKEDIN_URL class="btn btn--outline btn--block" target="_blank" rel="noopener noreferrer">
                        "LinkedIn Profile"
                    </a>
                    <a href=CONTACT_EMAIL class="btn btn--outline btn--block">"Send Email"</a>
                </div>
            </div>

            <div class="callout">
                <h3 class="callout__title">"Let's Work Together"</h3>
                <p>"Interested in collaborating on data science projects?"</p>
                <div class="hero__actions">
                    <a href=CONTACT_EMAIL class="btn btn--primary">"Get In Touch"</a>
                    <a href=GITHUB_PROFILE_URL class="btn btn--outline" target="_blank" rel="noopener noreferrer">
                        "View My Work"
                    </a>
                </div>
                <div class="grid grid--3">
                    {COLLABORATION
                        .iter()
                        .map(|item| {
                            view! {
                                <div class="collab">
                                    <div class="collab__title">{item.title}</div>
                                    <div>{item.detail}</div>
                                </div>
                            }
                        })
                        .collect::<Vec<_>>()}
                </div>
            </div>

            <PageNav current="/about" />
        </section>
    }
}
