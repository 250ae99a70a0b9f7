//! Training and evaluation results.
//!
//! Metric cards and the summary row count up with `AnimatedCounter` as they
//! scroll into view; the test table renders fixed sample predictions.

use leptos::prelude::*;

use crate::components::animated_counter::AnimatedCounter;
use crate::components::code_block::CodeBlock;
use crate::components::page_nav::PageNav;
use crate::components::progress_bar::ProgressBar;
use crate::content::{
    FINAL_METRICS, IMPROVEMENTS, METRIC_CARDS, MetricCard, PLOT_PLACEHOLDER, STRENGTHS, SUMMARY_STATS, TEST_RESULTS,
    TRAINING_CODE,
};
use crate::util::format::{AccuracyTier, format_compact, format_difference, format_price};

fn metric_value(card: &'static MetricCard, delay_s: f64) -> impl IntoView {
    view! {
        <div class=format!("metric__value text-{}", card.accent)>
            <AnimatedCounter end=card.end prefix=card.prefix suffix=card.suffix />
        </div>
        <ProgressBar value=card.bar accent=card.accent delay_s=delay_s />
    }
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    let cards = METRIC_CARDS
        .iter()
        .enumerate()
        .map(|(i, card)| {
            #[allow(clippy::cast_precision_loss)]
            let delay_s = 0.5 + i as f64 * 0.2;
            view! {
                <div class=format!("card metric metric--{}", card.accent)>
                    <h3 class="metric__title">{card.title}</h3>
                    {metric_value(card, delay_s)}
                    <p class="metric__caption">{card.caption}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let rows = TEST_RESULTS
        .iter()
        .map(|result| {
            let tier = AccuracyTier::from_percent(result.accuracy);
            let difference = result.difference();
            let difference_class = if difference > 0 { "text-green" } else { "text-red" };
            view! {
                <tr>
                    <td class="table__strong">{format_price(result.actual)}</td>
                    <td class="text-blue">{format_price(result.predicted)}</td>
                    <td class=difference_class>{format_difference(difference)}</td>
                    <td class=tier.css_class()>
                        <AnimatedCounter end=result.accuracy suffix="%" />
                    </td>
                    <td>
                        <span class=format!("badge badge--{}", if tier == AccuracyTier::High { "good" } else { "warn" })>
                            {tier.badge()}
                        </span>
                    </td>
                </tr>
            }
        })
        .collect::<Vec<_>>();

    let summary = SUMMARY_STATS
        .iter()
        .enumerate()
        .map(|(i, stat)| {
            #[allow(clippy::cast_precision_loss)]
            let delay_s = 0.5 + i as f64 * 0.1;
            view! {
                <div class="summary__stat">
                    {metric_value(stat, delay_s)}
                    <p class="summary__label">{stat.title}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let bullets = |items: &'static [&'static str], mark: &'static str| {
        items.iter().map(|item| view! { <li>{mark} " " {*item}</li> }).collect::<Vec<_>>()
    };

    view! {
        <section class="page">
            <header class="page__header">
                <h1 class="page__title">"Training & Evaluation Results"</h1>
                <p class="page__lead">"Comprehensive model performance metrics and evaluation results"</p>
            </header>

            <div class="grid grid--4">{cards}</div>
            <p class="metric__exact">
                {format!(
                    "MAE ${} \u{b7} MSE {} \u{b7} RMSE ${} \u{b7} R\u{b2} {:.2}",
                    format_compact(FINAL_METRICS.mae),
                    format_compact(FINAL_METRICS.mse),
                    format_compact(FINAL_METRICS.rmse),
                    FINAL_METRICS.r2,
                )}
            </p>

            <div class="grid grid--2">
                <div class="card">
                    <h3 class="card__title">"Model Training Code"</h3>
                    <p class="card__subtitle">"Linear Regression implementation using scikit-learn"</p>
                    <CodeBlock code=TRAINING_CODE />
                </div>
                <div class="card">
                    <h3 class="card__title">"Residual Analysis"</h3>
                    <p class="card__subtitle">"Distribution of prediction errors"</p>
                    <img class="plot" src=PLOT_PLACEHOLDER alt="Residual plot" />
                    <p class="insight">"Residuals show normal distribution with slight heteroscedasticity"</p>
                </div>
            </div>

            <div class="card">
                <h3 class="card__title">"Model Testing Results"</h3>
                <p class="card__subtitle">"Real predictions vs actual house prices on test data"</p>
                <table class="table">
                    <thead>
                        <tr>
                            <th>"Actual Price"</th>
                            <th>"Predicted Price"</th>
                            <th>"Difference"</th>
                            <th>"Accuracy"</th>
                            <th>"Status"</th>
                        </tr>
                    </thead>
                    <tbody>{rows}</tbody>
                </table>
            </div>

            <div class="callout summary">
                <h3 class="callout__title">"Model Performance Analysis"</h3>
                <div class="grid grid--3">{summary}</div>
                <div class="grid grid--2">
                    <div>
                        <h4 class="text-green">"Model Strengths"</h4>
                        <ul class="bullets">{bullets(STRENGTHS, "\u{2713}")}</ul>
                    </div>
                    <div>
                        <h4 class="text-blue">"Areas for Improvement"</h4>
                        <ul class="bullets">{bullets(IMPROVEMENTS, "\u{26A0}")}</ul>
                    </div>
                </div>
            </div>

            <PageNav current="/results" />
        </section>
    }
}
