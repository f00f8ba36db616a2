use dioxus::prelude::*;

pub mod api;
pub mod model;
pub mod prefs;
pub mod sync;

pub mod components;
pub mod views;

use views::{Planner, Settings};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Planner {},
    #[route("/settings")]
    Settings {},
}

#[component]
pub fn App() -> Element {
    // One HTTP client for the whole app.
    use_context_provider(api::ApiClient::from_env);

    // The active family member scopes every read and write; it is restored
    // from preferences and written back whenever it changes.
    let member = use_signal(prefs::selected_member);
    use_context_provider(|| member);
    use_effect(move || prefs::set_selected_member(member()));

    rsx! {
        document::Stylesheet { href: asset!("assets/main.css") }
        head {
            document::Meta { name: "description", content: "Family weekly planner" }
            document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        }
        div { class: "app-layout flex min-h-screen flex-col",
            main { class: "main-content flex-1 bg-white dark:bg-slate-800 text-slate-900 dark:text-slate-100",
                Router::<Route> {}
            }
            components::Navbar {}
        }
    }
}
