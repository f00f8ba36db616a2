use std::collections::BTreeMap;

use dioxus::prelude::*;

use crate::api::PeriodStats;

/// Modal showing the SK-coverage percentages per period. Closes on the
/// close button or a click on the backdrop.
#[component]
pub fn StatsModal(stats: BTreeMap<String, PeriodStats>, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
            onclick: move |_| on_close.call(()),
            div {
                class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-3",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "flex items-center justify-between",
                    h2 { class: "text-lg font-semibold", "Schedule stats" }
                    button {
                        class: "close text-slate-500 hover:text-slate-700 dark:hover:text-slate-300",
                        aria_label: "Close",
                        onclick: move |_| on_close.call(()),
                        "✕"
                    }
                }
                for (period, s) in stats.iter() {
                    div {
                        h3 { class: "text-sm font-semibold capitalize", {period.clone()} }
                        p { class: "text-sm text-slate-600 dark:text-slate-300", { format!("AM (SK): {}%", s.am) } }
                        p { class: "text-sm text-slate-600 dark:text-slate-300", { format!("PM (SK): {}%", s.pm) } }
                        p { class: "text-sm text-slate-600 dark:text-slate-300", { format!("Overnight (SK): {}%", s.overnight) } }
                    }
                }
            }
        }
    }
}
