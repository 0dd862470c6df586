// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Dablie Tech Club: single-page club website
//
// Entry point. Initialises logging, loads the embedded site configuration,
// and launches the Dioxus UI.

mod components;
mod pages;
mod sections;
mod services;
mod state;

use dablie_core::{Revision, content_for};
use dioxus::prelude::*;

use pages::landing::{Home, RevisionPage};
use pages::not_found::NotFound;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const TAILWIND_CDN: &str = "https://cdn.tailwindcss.com";

fn main() {
    init_logging();

    tracing::info!("Dablie Tech Club site starting");

    dioxus::launch(App);
}

#[cfg(not(target_arch = "wasm32"))]
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();
}

#[cfg(target_arch = "wasm32")]
fn init_logging() {
    // Browser builds log through the console bridge.
    let _ = dioxus::logger::init(tracing::Level::INFO);
}

/// Top-level route enum.
#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/revisions/:revision")]
    RevisionPage { revision: String },
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Root component.
#[component]
fn App() -> Element {
    // Site configuration is shared with every page as context
    use_context_provider(services::config::load);

    use_hook(|| {
        for revision in Revision::ALL {
            if let Err(e) = content_for(revision).validate() {
                tracing::warn!(%revision, error = %e, "revision content failed validation");
            }
        }
    });

    rsx! {
        document::Title { "Dablie Tech Club" }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Script { src: TAILWIND_CDN }

        Router::<Route> {}
    }
}
