mod contact;
mod delay;
mod employment_status;
mod experience;
mod header;
mod hero;
mod homepage;
mod notify;
mod projects;
mod resume_button;
mod reveal;
mod scroll_to_top;
mod skills;
mod theme;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use crate::content::PROFILE;

use header::Header;
use homepage::HomePage;
use notify::{provide_notifier, Toaster};
use reveal::provide_visibility;
use theme::provide_theme;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans bg-background text-foreground">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();
    provide_theme();
    provide_notifier();
    provide_visibility();

    view! {
        <Title formatter=|title| format!("{} | {title}", PROFILE.name) />
        <Meta name="description" content=PROFILE.tagline />

        <Router>
            <Header />
            <main class="min-h-screen relative overflow-hidden">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </main>
            <Toaster />
        </Router>
    }
}
