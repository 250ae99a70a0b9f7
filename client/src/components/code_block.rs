//! Preformatted source snippet with a language caption.

use leptos::prelude::*;

#[component]
pub fn CodeBlock(code: &'static str, #[prop(default = "python")] language: &'static str) -> impl IntoView {
    view! {
        <div class="code-block">
            <div class="code-block__caption">{language}</div>
            <pre class="code-block__body"><code>{code}</code></pre>
        </div>
    }
}
