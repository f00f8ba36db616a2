use dioxus::prelude::*;

const NAV_LINKS: [(&str, &str, &str); 2] =
    [("/", "📅", "Planner"), ("/settings", "⚙️", "Settings")];

/// Bottom navigation bar; labels collapse to their icons on small screens.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        nav { class: "fixed bottom-0 inset-x-0 z-50 border-t border-slate-200 dark:border-slate-700 bg-white/90 dark:bg-slate-900/90 backdrop-blur",
            div { class: "mx-auto w-full max-w-5xl px-3",
                div { class: "h-14 flex items-stretch gap-2",
                    for (href, icon, label) in NAV_LINKS {
                        a {
                            href,
                            class: "flex-1 flex items-center justify-center text-sm font-medium text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 rounded-md transition",
                            span { class: "hidden sm:inline", "{icon} {label}" }
                            span { class: "sm:hidden", "{icon}" }
                        }
                    }
                }
            }
        }
    }
}
