use dioxus::prelude::*;

/// Page-level busy indicator, shown while any save or week load is
/// outstanding.
#[component]
pub fn Spinner(visible: bool) -> Element {
    rsx! {
        if visible {
            div { class: "fixed inset-0 z-40 flex items-center justify-center pointer-events-none",
                div { class: "spinner", aria_label: "Loading" }
            }
        }
    }
}
