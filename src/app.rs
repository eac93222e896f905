use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::{
    components::{Route, Router, Routes},
    path,
};

use crate::core::booking::BOOKING_LINK_META;
use crate::core::config::Config;
use crate::ui::pages::{LandingPage, NotFoundPage};

/// Server-rendered document. Reads the [`Config`] the server provides as
/// context to emit the Tag Manager bootstrap and the booking link override.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    let config = use_context::<Config>().unwrap_or_default();
    let gtm_snippet = config.gtm_snippet();
    let gtm_frame = config.gtm_container_id.clone().map(|id| {
        format!("https://www.googletagmanager.com/ns.html?id={}", id)
    });
    let booking_link = config.booking_link;

    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="theme-color" content="#0C0F1F"/>
                <link rel="icon" type="image/svg+xml" href="/favicon.svg"/>
                {gtm_snippet.map(|snippet| view! { <script inner_html=snippet></script> })}
                {booking_link.map(|link| view! { <meta name=BOOKING_LINK_META content=link/> })}
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body class="font-inter bg-canvas-navy">
                {gtm_frame.map(|src| view! {
                    <noscript>
                        <iframe src=src height="0" width="0" style="display:none;visibility:hidden"></iframe>
                    </noscript>
                })}
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
        <Stylesheet id="leptos" href="/pkg/buddybots.css"/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=path!("/") view=LandingPage/>
            </Routes>
        </Router>
    }
}
