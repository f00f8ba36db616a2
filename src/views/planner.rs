use chrono::NaiveDate;
use dioxus::prelude::*;

use crate::api::{ApiClient, PeriodStats};
use crate::components::{PopupEditor, PopupState, Spinner, StatsModal, WeekTable};
use crate::model::{self, CellStore, LoadedWeek, Placement, ScrollMetrics, WeekWindow};

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{prelude::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::window;

const CONTENT_ID: &str = "planner-content";

// Browser glue; off-wasm stubs keep the view compiling for the native shell.

#[cfg(target_arch = "wasm32")]
fn content_element() -> Option<web_sys::Element> {
    window()?.document()?.get_element_by_id(CONTENT_ID)
}

#[cfg(target_arch = "wasm32")]
fn scroll_metrics() -> Option<ScrollMetrics> {
    let el = content_element()?;
    Some(ScrollMetrics {
        offset: el.scroll_top() as f64,
        viewport: el.client_height() as f64,
        content: el.scroll_height() as f64,
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_metrics() -> Option<ScrollMetrics> {
    None
}

#[cfg(target_arch = "wasm32")]
fn viewport_width() -> f64 {
    window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(1024.0)
}

#[cfg(not(target_arch = "wasm32"))]
fn viewport_width() -> f64 {
    1024.0
}

#[cfg(target_arch = "wasm32")]
fn scroll_to_current_week() -> bool {
    let el = window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id("current-week"));
    match el {
        Some(el) => {
            el.scroll_into_view();
            true
        }
        None => false,
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn scroll_to_current_week() -> bool {
    false
}

#[cfg(target_arch = "wasm32")]
fn alert(message: &str) {
    if let Some(w) = window() {
        let _ = w.alert_with_message(message);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn alert(message: &str) {
    tracing::warn!("{message}");
}

#[cfg(target_arch = "wasm32")]
fn reload_page() {
    if let Some(w) = window() {
        let _ = w.location().reload();
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn reload_page() {}

/// Fetch one week, with the shared spinner covering the request. Failures
/// are logged and yield `None`; the caller simply skips the week.
async fn fetch_week(
    api: ApiClient,
    member: Option<i64>,
    start: NaiveDate,
    mut busy: Signal<bool>,
) -> Option<LoadedWeek> {
    busy.set(true);
    let result = api.get_week(start, member).await;
    busy.set(false);
    match result {
        Ok(days) => Some(LoadedWeek { start, days }),
        Err(err) => {
            tracing::error!("loading week {start} failed: {err}");
            None
        }
    }
}

#[component]
#[allow(unused_mut)]
pub fn Planner() -> Element {
    let api = use_context::<ApiClient>();
    let mut member = use_context::<Signal<Option<i64>>>();

    // state
    let mut weeks = use_signal(Vec::<LoadedWeek>::new);
    let mut window_state = use_signal(|| WeekWindow::centered(model::today()));
    let mut cells = use_context_provider(|| Signal::new(CellStore::default()));
    let busy = use_context_provider(|| Signal::new(false));
    let _popup = use_context_provider(|| Signal::new(None::<PopupState>));
    let mut mobile = use_signal(|| model::is_mobile(viewport_width()));
    let mut stats = use_signal(|| None::<std::collections::BTreeMap<String, PeriodStats>>);
    let mut restore_scroll = use_signal(|| None::<f64>);

    let members = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.list_family_members().await }
        }
    });

    // Rebuild everything from scratch: reset the window, then fetch the
    // five initial weeks one at a time so they land in chronological order.
    let initial_load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn(async move {
                weeks.write().clear();
                cells.write().clear();
                let today = model::today();
                window_state.set(WeekWindow::centered(today));
                let member_id = *member.peek();
                for start in WeekWindow::initial_weeks(today) {
                    if let Some(week) = fetch_week(api.clone(), member_id, start, busy).await {
                        cells.write().load_week(&week.days);
                        weeks.write().push(week);
                        window_state.write().mark_loaded(start);
                    }
                }
                scroll_to_current_week();
            });
        }
    };

    // Initial load on mount, and again whenever the member selection changes.
    {
        let initial_load = initial_load.clone();
        use_effect(move || {
            let _ = member();
            let mut load = initial_load.clone();
            load();
        });
    }

    // Default to the first listed member when nothing is persisted yet.
    use_effect(move || {
        if member.peek().is_none() {
            if let Some(Ok(list)) = members.read().as_ref() {
                if let Some(first) = list.first() {
                    member.set(Some(first.id));
                }
            }
        }
    });

    // One scroll-triggered extension: fire-and-forget, no in-flight
    // deduplication, window bound already moved by the caller.
    let extend = {
        let api = api.clone();
        move |start: NaiveDate, placement: Placement| {
            let api = api.clone();
            let member_id = *member.peek();
            spawn(async move {
                let Some(week) = fetch_week(api, member_id, start, busy).await else {
                    return;
                };
                if placement == Placement::Prepend {
                    if let Some(metrics) = scroll_metrics() {
                        restore_scroll.set(Some(metrics.content));
                    }
                }
                cells.write().load_week(&week.days);
                match placement {
                    Placement::Prepend => weeks.write().insert(0, week),
                    Placement::Append => weeks.write().push(week),
                }
            });
        }
    };

    let on_scroll = {
        let mut extend = extend.clone();
        move |_| {
            let Some(metrics) = scroll_metrics() else { return };
            let hits = metrics.edges();
            if hits.backward {
                let start = window_state.write().extend_back();
                extend(start, Placement::Prepend);
            }
            if hits.forward {
                let start = window_state.write().extend_forward();
                extend(start, Placement::Append);
            }
        }
    };

    // After a prepend renders, push the scroll offset down by the height
    // delta so the viewport stays on the weeks the user was looking at.
    use_effect(move || {
        let _ = weeks.read().len();
        let Some(previous) = restore_scroll() else { return };
        #[cfg(target_arch = "wasm32")]
        {
            if let Some(el) = content_element() {
                let delta = el.scroll_height() as f64 - previous;
                if delta > 0.0 {
                    el.set_scroll_top(el.scroll_top() + delta as i32);
                }
            }
        }
        #[cfg(not(target_arch = "wasm32"))]
        let _ = previous;
        restore_scroll.set(None);
    });

    // Crossing the mobile breakpoint swaps the free-text rendering, so the
    // whole view is rebuilt; other resizes are ignored.
    #[cfg(target_arch = "wasm32")]
    {
        let initial_load = initial_load.clone();
        use_effect(move || {
            let mut reload = initial_load.clone();
            let callback = Closure::wrap(Box::new(move || {
                let now_mobile = model::is_mobile(viewport_width());
                if now_mobile != *mobile.peek() {
                    mobile.set(now_mobile);
                    reload();
                }
            }) as Box<dyn FnMut()>);
            if let Some(w) = window() {
                let _ = w.add_event_listener_with_callback("resize", callback.as_ref().unchecked_ref());
            }
            callback.forget();
        });
    }

    let go_to_today = {
        let initial_load = initial_load.clone();
        move |_| {
            if !scroll_to_current_week() {
                let mut reload = initial_load.clone();
                reload();
            }
        }
    };

    let show_stats = {
        let api = api.clone();
        move |_| {
            let api = api.clone();
            spawn(async move {
                match api.schedule_stats().await {
                    Ok(data) => stats.set(Some(data)),
                    Err(err) => tracing::error!("loading schedule stats failed: {err}"),
                }
            });
        }
    };

    let import_csv = {
        let api = api.clone();
        move |evt: FormEvent| {
            let api = api.clone();
            let member_id = *member.peek();
            let mut busy = busy;
            spawn(async move {
                let Some(engine) = evt.files() else { return };
                let Some(name) = engine.files().into_iter().next() else { return };
                let Some(bytes) = engine.read_file(&name).await else { return };
                busy.set(true);
                let result = api.import_csv(&name, bytes, member_id).await;
                busy.set(false);
                match result {
                    Ok(outcome) if outcome.success => {
                        alert("CSV imported successfully!");
                        reload_page();
                    }
                    Ok(outcome) => {
                        alert(&format!(
                            "Error importing CSV: {}",
                            outcome.error.unwrap_or_default()
                        ));
                    }
                    Err(err) => {
                        tracing::error!("csv import failed: {err}");
                        alert("An error occurred while importing the CSV.");
                    }
                }
            });
        }
    };

    let current_monday = model::monday_of(model::today());
    let button_class = "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition";

    rsx! {
        div { class: "planner flex flex-col h-screen",
            div { class: "flex flex-wrap items-center gap-2 px-3 py-2 border-b border-slate-200 dark:border-slate-700",
                h1 { class: "text-lg font-semibold mr-auto", "Weekly planner" }
                select {
                    class: "h-9 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-2 text-sm",
                    aria_label: "Family member",
                    onchange: move |evt| member.set(evt.value().parse::<i64>().ok()),
                    {
                        match &*members.read() {
                            Some(Ok(list)) => rsx! {
                                for m in list.iter() {
                                    option {
                                        value: "{m.id}",
                                        selected: *member.read() == Some(m.id),
                                        {m.name.clone()}
                                    }
                                }
                            },
                            Some(Err(_)) => rsx! {
                                option { disabled: true, "members unavailable" }
                            },
                            None => rsx! {
                                option { disabled: true, "Loading…" }
                            },
                        }
                    }
                }
                button { class: "{button_class}", onclick: go_to_today, "Today" }
                button { class: "{button_class}", onclick: show_stats, "Stats" }
                label { class: "{button_class} cursor-pointer",
                    "Import CSV"
                    input {
                        r#type: "file",
                        accept: ".csv",
                        class: "hidden",
                        onchange: import_csv,
                    }
                }
            }
            div {
                id: "{CONTENT_ID}",
                class: "planner-content flex-1 overflow-y-auto px-3 pb-20",
                onscroll: on_scroll,
                for week in weeks() {
                    WeekTable {
                        key: "{week.start}",
                        week: week.clone(),
                        is_current: week.start == current_monday,
                        mobile: mobile(),
                    }
                }
            }
            Spinner { visible: busy() }
            PopupEditor {}
            { stats().map(|data| rsx! {
                StatsModal { stats: data, on_close: move |_| stats.set(None) }
            }) }
        }
    }
}
