//! Footer listing the project's technology stack.

#[cfg(test)]
#[path = "site_footer_test.rs"]
mod site_footer_test;

use leptos::prelude::*;

use crate::content::{GITHUB_PROFILE_URL, LINKEDIN_URL, TECH_STACK, Technology, category_class};

/// Categories in first-seen order, each with its technologies.
#[must_use]
pub fn group_by_category(stack: &'static [Technology]) -> Vec<(&'static str, Vec<&'static str>)> {
    let mut groups: Vec<(&'static str, Vec<&'static str>)> = Vec::new();
    for tech in stack {
        match groups.iter_mut().find(|(category, _)| *category == tech.category) {
            Some((_, names)) => names.push(tech.name),
            None => groups.push((tech.category, vec![tech.name])),
        }
    }
    groups
}

#[component]
pub fn SiteFooter() -> impl IntoView {
    let groups = group_by_category(TECH_STACK)
        .into_iter()
        .map(|(category, names)| {
            let badges = names
                .into_iter()
                .map(|name| view! { <span class=category_class(category)>{name}</span> })
                .collect::<Vec<_>>();
            view! {
                <div class="footer__group">
                    <h4 class="footer__category">{category}</h4>
                    <div class="footer__badges">{badges}</div>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <footer class="footer">
            <div class="footer__inner">
                <h3 class="footer__title">"Technology Stack"</h3>
                <div class="footer__groups">{groups}</div>
                <div class="footer__links">
                    <a href=GITHUB_PROFILE_URL target="_blank" rel="noopener noreferrer">"GitHub"</a>
                    <a href=LINKEDIN_URL target="_blank" rel="noopener noreferrer">"LinkedIn"</a>
                </div>
                <p class="footer__note">"House price prediction with linear regression"</p>
            </div>
        </footer>
    }
}
