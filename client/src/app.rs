//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navigation::NavBar;
use crate::components::site_footer::SiteFooter;
use crate::pages::{
    about::AboutPage, analysis::AnalysisPage, concepts::ConceptsPage, downloads::DownloadsPage, home::HomePage,
    modeling::ModelingPage, not_found::NotFoundPage, overview::OverviewPage, preprocessing::PreprocessingPage,
    results::ResultsPage,
};
use crate::state::theme::{ThemeDisplay, ThemeHandle};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the theme context and sets up client-side routing. The theme
/// store itself only exists in the browser; during SSR the handle stays
/// pending.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let theme = ThemeHandle::new();
    provide_context(theme);

    #[cfg(feature = "hydrate")]
    drive_theme_store(theme);

    let pending = move || theme.display() == ThemeDisplay::Pending;

    view! {
        <Stylesheet id="leptos" href="/pkg/housing-showcase.css"/>
        <Title text="House Price Prediction | Linear Regression"/>

        <Router>
            <div class="site" class:site--pending=pending>
                <NavBar/>
                <main class="site__main">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("overview") view=OverviewPage/>
                        <Route path=StaticSegment("preprocessing") view=PreprocessingPage/>
                        <Route path=StaticSegment("analysis") view=AnalysisPage/>
                        <Route path=StaticSegment("modeling") view=ModelingPage/>
                        <Route path=StaticSegment("results") view=ResultsPage/>
                        <Route path=StaticSegment("concepts") view=ConceptsPage/>
                        <Route path=StaticSegment("downloads") view=DownloadsPage/>
                        <Route path=StaticSegment("about") view=AboutPage/>
                    </Routes>
                </main>
                <SiteFooter/>
            </div>
        </Router>
    }
}

/// Own the browser theme store for the lifetime of `App`.
///
/// The effect initializes the store on its first run, then applies each
/// request queued through `ThemeHandle::set`. Dropping the effect drops the
/// store, which releases the OS color-scheme listener.
#[cfg(feature = "hydrate")]
fn drive_theme_store(theme: ThemeHandle) {
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    use crate::state::theme_store::ThemeStore;
    use crate::util::theme_host::BrowserThemeHost;

    type BrowserStore = RefCell<ThemeStore<BrowserThemeHost>>;

    fn on_system_change(store: Weak<BrowserStore>, theme: ThemeHandle) -> impl Fn(bool) + 'static {
        move |prefers_dark| {
            let Some(store) = store.upgrade() else {
                return;
            };
            let Ok(mut store) = store.try_borrow_mut() else {
                log::warn!("theme store busy, dropping color-scheme change");
                return;
            };
            theme.publish(store.handle_system_change(prefers_dark));
        }
    }

    let store: Rc<BrowserStore> = Rc::new(RefCell::new(ThemeStore::new(BrowserThemeHost)));

    Effect::new(move || {
        let request = theme.take_request();
        let mut guard = store.borrow_mut();
        let mut state = guard.init(on_system_change(Rc::downgrade(&store), theme));
        if let Some(preference) = request {
            state = guard.set(preference);
        }
        theme.publish(state);
    });
}
