mod hooks;
mod nav;
mod portfolio;
mod reveal;
mod sections;

pub use hooks::{use_scroll_offset, use_scroll_offset_from};
pub use portfolio::Portfolio;
pub use reveal::{Reveal, RevealOn, StaggerGroup, StaggerItem};

use leptos::{either::Either, prelude::*};
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::SITE_CONTENT;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-gray-950 text-white antialiased">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{title} | Portfolio") />
        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=HomePage />
            </Routes>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    match &*SITE_CONTENT {
        Ok(content) => {
            let content = content.clone();
            Either::Left(
                view! {
                    <Title text=content.profile.name.clone() />
                    <Portfolio content />
                },
            )
        }
        Err(e) => {
            log::error!("site content unavailable: {e}");
            Either::Right(view! { <ContentUnavailable message=e.to_string() /> })
        }
    }
}

#[component]
fn ContentUnavailable(message: String) -> impl IntoView {
    view! {
        <Title text="Unavailable" />
        <main class="min-h-screen flex flex-col items-center justify-center gap-4 px-6 text-center">
            <h1 class="text-3xl font-bold">"This page couldn't be loaded"</h1>
            <pre class="text-sm text-gray-400 whitespace-pre-wrap">{message}</pre>
        </main>
    }
}
