//! Root application component with routing and the sidebar layout.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::side_bar::{BRAND, SideBar};
use crate::pages::{send_message::SendMessagePage, view_responses::ViewResponsesPage};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="tr">
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
/// Every route renders next to the fixed sidebar. `/` and `/send-message`
/// both land on the upload workflow.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/borc-takip.css"/>
        <Title text=BRAND/>

        <Router>
            <div class="app-shell">
                <SideBar/>
                <main class="app-shell__main">
                    <Routes fallback=|| "Sayfa bulunamadı.".into_view()>
                        <Route path=StaticSegment("") view=SendMessagePage/>
                        <Route path=StaticSegment("send-message") view=SendMessagePage/>
                        <Route path=StaticSegment("view-responses") view=ViewResponsesPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
