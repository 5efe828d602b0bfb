//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::footer::Footer;
use crate::components::navbar::Navbar;
use crate::consts::APP_NAME;
use crate::pages::home::HomePage;
use crate::pages::login::LoginPage;
use crate::pages::placeholder::{DashboardPage, ProfilePage, ResultsPage};
use crate::pages::register::RegisterPage;
use crate::pages::upload::UploadPage;
use crate::state::session::Session;
use crate::state::ui::UiState;

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
/// Provides the session and UI contexts, then lays out the navigation bar,
/// the routed page and the footer.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(Session::new());
    provide_context(RwSignal::new(UiState::default()));

    view! {
        <Stylesheet id="leptos" href="/pkg/melanomascan.css"/>
        <Title text=APP_NAME/>

        <Router>
            <div class="app-shell">
                <Navbar/>
                <main class="app-main">
                    <Routes fallback=|| view! { <p class="page-status">"Page not found."</p> }>
                        <Route path=StaticSegment("") view=HomePage/>
                        <Route path=StaticSegment("login") view=LoginPage/>
                        <Route path=StaticSegment("register") view=RegisterPage/>
                        <Route path=StaticSegment("upload") view=UploadPage/>
                        <Route path=StaticSegment("dashboard") view=DashboardPage/>
                        <Route path=StaticSegment("profile") view=ProfilePage/>
                        <Route path=StaticSegment("results") view=ResultsPage/>
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
