use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::model::{CellStore, Field, SaveEntry};
use crate::sync::save_entry;

/// The cell being edited in the popup, seeded from the cell cache when the
/// icon is tapped.
#[derive(Debug, Clone, PartialEq)]
pub struct PopupState {
    pub date: NaiveDate,
    pub field: Field,
    pub value: String,
}

#[component]
pub fn PopupEditor() -> Element {
    let popup = use_context::<Signal<Option<PopupState>>>();
    // The body unmounts whenever the popup closes, so reopening on another
    // cell reseeds the draft from scratch.
    rsx! {
        { popup().map(|state| rsx! { PopupBody { state } }) }
    }
}

#[component]
fn PopupBody(state: PopupState) -> Element {
    let api = use_context::<ApiClient>();
    let cells = use_context::<Signal<CellStore>>();
    let busy = use_context::<Signal<bool>>();
    let member = use_context::<Signal<Option<i64>>>();
    let mut popup = use_context::<Signal<Option<PopupState>>>();

    let date = state.date;
    let field = state.field;
    let mut draft = use_signal(move || state.value);

    let title = format!("{} • {} {}/{}", field.label(), date.format("%a"), date.day(), date.month());
    rsx! {
        div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
            div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                h2 { class: "text-lg font-semibold", {title} }
                textarea {
                    class: "w-full min-h-32 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 py-2 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                    rows: "6",
                    value: "{draft}",
                    oninput: move |evt| draft.set(evt.value()),
                }
                div { class: "flex items-center justify-end gap-2",
                    button {
                        class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition",
                        onclick: move |_| popup.set(None),
                        "Cancel"
                    }
                    button {
                        class: "inline-flex items-center h-9 px-3 rounded-md bg-blue-600 text-white hover:bg-blue-700 text-sm font-medium transition",
                        onclick: move |_| {
                            let entry = SaveEntry {
                                date,
                                field,
                                value: draft(),
                                family_member_id: *member.peek(),
                            };
                            save_entry(api.clone(), cells, busy, entry);
                            popup.set(None);
                        },
                        "Save"
                    }
                }
            }
        }
    }
}
