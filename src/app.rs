mod about;
mod animate;
mod common;
mod contact;
mod hero;
mod navbar;
mod projects;
mod skills;

use leptos::{either::Either, prelude::*, server_fn::codec::GetUrl};
use leptos_meta::*;
use leptos_router::{components::*, path};

use about::About;
use common::Loading;
pub use contact::demo_submit;
use contact::Contact;
use hero::Hero;
use navbar::Navbar;
use projects::Projects;
use skills::Skills;

#[cfg(feature = "ssr")]
use crate::portfolio::load_portfolio;
use crate::portfolio::PortfolioDocument;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link
                    rel="stylesheet"
                    href="https://cdn.jsdelivr.net/gh/devicons/devicon@latest/devicon.min.css"
                />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="bg-slate-950 text-gray-100 overflow-x-hidden">
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
        <Title formatter=|title: String| {
            if title.is_empty() { "Portfolio".to_string() } else { format!("{title} | Portfolio") }
        } />

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=path!("/") view=PortfolioPage />
            </Routes>
        </Router>
    }
}

#[server(input = GetUrl)]
pub async fn get_portfolio_server() -> Result<PortfolioDocument, ServerFnError> {
    load_portfolio().await.map_err(|err| {
        tracing::error!("failed to load portfolio document: {err}");
        ServerFnError::new(err.to_string())
    })
}

/// The whole site. Renders a loading placeholder until the document arrives
/// and keeps showing it if the document cannot be loaded.
#[component]
fn PortfolioPage() -> impl IntoView {
    let document = Resource::new(|| (), |_| get_portfolio_server());

    view! {
        <Suspense fallback=|| view! { <Loading /> }>
            {move || Suspend::new(async move {
                match document.await {
                    Ok(doc) => {
                        Either::Left(
                            view! {
                                <div class="min-h-screen">
                                    <Navbar />
                                    <Hero content=doc.hero() />
                                    <About content=doc.about() />
                                    <Skills content=doc.skills() />
                                    <Projects projects=doc.projects() />
                                    <Contact content=doc.contact() />
                                </div>
                            },
                        )
                    }
                    Err(err) => {
                        log::error!("Error loading portfolio data: {err}");
                        Either::Right(view! { <Loading /> })
                    }
                }
            })}
        </Suspense>
    }
}
