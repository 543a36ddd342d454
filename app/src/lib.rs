pub mod components;
pub mod content;
pub mod effects;
pub mod errors;
pub mod host;
pub mod pages;
pub mod sections;
pub mod state;

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, MetaTags, Stylesheet, Title};
use leptos_router::{
    components::{Route, Router, Routes},
    SsrMode, StaticSegment,
};

use content::PROFILE;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Miantsa, étudiant en Master 1 Informatique : développeur MERN, PHP et designer UI/UX à Antananarivo."/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/portfolio.css"/>

        <Title formatter=|text: String| {
            if text.is_empty() {
                format!("{} | {}", PROFILE.short_name, PROFILE.brand)
            } else {
                format!("{} - {} | {}", text, PROFILE.short_name, PROFILE.brand)
            }
        }/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                // Everything on the page is static, render it fully on the server.
                <Route
                    path=StaticSegment("")
                    view=pages::home::Index
                    ssr=SsrMode::Async
                />
            </Routes>
        </Router>
    }
}
