//! Sample rows, cleaning steps, and the encoding/scaling snippet.

use leptos::prelude::*;

use crate::components::code_block::CodeBlock;
use crate::components::page_nav::PageNav;
use crate::content::{ENCODING_CODE, PREPROCESSING_STEPS, SAMPLE_ROWS};
use crate::util::format::{format_price, group_thousands};

#[component]
pub fn PreprocessingPage() -> impl IntoView {
    let show_code = RwSignal::new(true);

    let rows = SAMPLE_ROWS
        .iter()
        .map(|row| {
            view! {
                <tr>
                    <td>{group_thousands(u64::from(row.area))}</td>
                    <td>{row.bedrooms}</td>
                    <td>{row.bathrooms}</td>
                    <td>{row.stories}</td>
                    <td>{row.parking}</td>
                    <td>{format_price(row.price)}</td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    let steps = PREPROCESSING_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            view! {
                <li class="steps__item">
                    <span class="steps__number">{i + 1}</span>
                    <div>
                        <h4 class="steps__title">{step.title}</h4>
                        <p class="steps__detail">{step.detail}</p>
                    </div>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Data Preprocessing"</h1>
                <p class="page__lead">"Cleaning and preparing the data for machine learning"</p>
            </header>

            <div class="grid grid--2">
                <div class="card">
                    <h3 class="card__title">"Sample Dataset"</h3>
                    <p class="card__subtitle">"First 5 rows of our house price dataset"</p>
                    <table class="table">
                        <thead>
                            <tr>
                                <th>"Area"</th>
                                <th>"Bedrooms"</th>
                                <th>"Bathrooms"</th>
                                <th>"Stories"</th>
                                <th>"Parking"</th>
                                <th>"Price"</th>
                            </tr>
                        </thead>
                        <tbody>{rows}</tbody>
                    </table>
                </div>
                <div class="card">
                    <h3 class="card__title">"Preprocessing Steps"</h3>
                    <ol class="steps">{steps}</ol>
                </div>
            </div>

            <div class="tabs">
                <div class="tabs__list" role="tablist">
                    <button class="tabs__tab" class:tabs__tab--active=move || show_code.get() on:click=move |_| show_code.set(true)>
                        "Code Implementation"
                    </button>
                    <button class="tabs__tab" class:tabs__tab--active=move || !show_code.get() on:click=move |_| show_code.set(false)>
                        "Explanation"
                    </button>
                </div>
                <Show
                    when=move || show_code.get()
                    fallback=|| {
                        view! {
                            <div class="card">
                                <h3 class="card__title">"Why These Steps Matter"</h3>
                                <h4 class="text-blue">"One-Hot Encoding"</h4>
                                <p>
                                    "Converts categorical variables like 'yes/no' into numerical format (0/1) that machine learning algorithms can process."
                                </p>
                                <h4 class="text-green">"MinMax Scaling"</h4>
                                <p>
                                    "Normalizes numerical features to a 0-1 range, preventing features with larger values from dominating the model."
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="card">
                        <h3 class="card__title">"Preprocessing Code"</h3>
                        <CodeBlock code=ENCODING_CODE />
                    </div>
                </Show>
            </div>

            <PageNav current="/preprocessing" />
        </section>
    }
}
