use chrono::{Datelike, NaiveDate};
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::PopupState;
use crate::model::{self, CellStore, DayRecord, Field, LoadedWeek, LocationCode, SaveEntry};
use crate::sync::save_entry;

/// One rendered week: header row plus a row per day. The current week's
/// table carries the `current-week` id so "Today" can scroll to it.
#[component]
pub fn WeekTable(week: LoadedWeek, is_current: bool, mobile: bool) -> Element {
    let today = model::today();
    rsx! {
        table {
            id: if is_current { "current-week" },
            class: "week-table w-full border-collapse text-sm mb-4",
            thead {
                tr {
                    th { class: "px-2 py-1 text-left font-semibold bg-slate-100 dark:bg-slate-700", "Date" }
                    for field in Field::ALL {
                        th { class: "px-2 py-1 text-left font-semibold bg-slate-100 dark:bg-slate-700",
                            {field.label()}
                        }
                    }
                }
            }
            tbody {
                for day in week.days.iter() {
                    DayRow {
                        key: "{day.date}",
                        day: day.clone(),
                        is_today: day.date == today,
                        mobile,
                    }
                }
            }
        }
    }
}

#[component]
fn DayRow(day: DayRecord, is_today: bool, mobile: bool) -> Element {
    let date = day.date;
    rsx! {
        tr { class: if is_today { "current-day" },
            td { class: "date-cell px-2 py-1 whitespace-nowrap font-medium",
                { format!("{} {}/{}", date.format("%a"), date.day(), date.month()) }
            }
            for field in Field::ALL {
                td { class: "px-1 py-0.5 align-top",
                    if mobile && field.is_multiline() {
                        EditIcon { date, field }
                    } else if field.is_multiline() {
                        PlansArea { date, field, initial: day.field(field).to_string() }
                    } else {
                        SlotInput { date, field, initial: day.field(field).to_string() }
                    }
                }
            }
        }
    }
}

/// Single-line slot (`am`/`pm`/`overnight`); location codes restyle on
/// every keystroke, saves go out on change (blur).
#[component]
fn SlotInput(date: NaiveDate, field: Field, initial: String) -> Element {
    let api = use_context::<ApiClient>();
    let cells = use_context::<Signal<CellStore>>();
    let busy = use_context::<Signal<bool>>();
    let member = use_context::<Signal<Option<i64>>>();
    let mut draft = use_signal(move || initial);

    let code = LocationCode::parse(&draft.read());
    rsx! {
        input {
            r#type: "text",
            class: "w-full bg-transparent px-1 py-0.5 focus:outline-none focus:ring-1 focus:ring-blue-500",
            class: if code == Some(LocationCode::Sk) { "location-sk" },
            class: if code == Some(LocationCode::Ls) { "location-ls" },
            value: "{draft}",
            oninput: move |evt| draft.set(evt.value()),
            onchange: move |evt| {
                let entry = SaveEntry {
                    date,
                    field,
                    value: evt.value(),
                    family_member_id: *member.peek(),
                };
                save_entry(api.clone(), cells, busy, entry);
            },
        }
    }
}

/// Auto-growing textarea for the free-text fields; the row count tracks
/// the content's line count, on input and at initial population alike.
#[component]
fn PlansArea(date: NaiveDate, field: Field, initial: String) -> Element {
    let api = use_context::<ApiClient>();
    let cells = use_context::<Signal<CellStore>>();
    let busy = use_context::<Signal<bool>>();
    let member = use_context::<Signal<Option<i64>>>();
    let mut draft = use_signal(move || initial);

    let rows = model::textarea_rows(&draft.read());
    rsx! {
        textarea {
            class: "w-full resize-none bg-transparent px-1 py-0.5 focus:outline-none focus:ring-1 focus:ring-blue-500",
            rows: "{rows}",
            value: "{draft}",
            oninput: move |evt| draft.set(evt.value()),
            onchange: move |evt| {
                let entry = SaveEntry {
                    date,
                    field,
                    value: evt.value(),
                    family_member_id: *member.peek(),
                };
                save_entry(api.clone(), cells, busy, entry);
            },
        }
    }
}

/// Narrow-viewport stand-in for the free-text fields: an icon that shows
/// whether the cached value has content and opens the popup editor.
#[component]
fn EditIcon(date: NaiveDate, field: Field) -> Element {
    let cells = use_context::<Signal<CellStore>>();
    let mut popup = use_context::<Signal<Option<PopupState>>>();

    let filled = cells.read().has_content_at(date, field);
    let label = field.label();
    rsx! {
        button {
            class: "edit-icon",
            class: if filled { "has-content" },
            aria_label: "Edit {label}",
            onclick: move |_| {
                let value = cells.peek().get(date, field);
                popup.set(Some(PopupState { date, field, value }));
            },
            "✏️"
        }
    }
}
