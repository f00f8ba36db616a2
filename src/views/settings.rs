use dioxus::prelude::*;

use crate::api::ApiClient;

/// Family-member management plus the CSV export link. The member list is
/// the backend's; every mutation refetches it.
#[component]
#[allow(unused_mut)]
pub fn Settings() -> Element {
    let api = use_context::<ApiClient>();
    let mut member = use_context::<Signal<Option<i64>>>();

    let mut name = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut confirm_delete_id = use_signal(|| None::<i64>);
    let mut members = use_resource({
        let api = api.clone();
        move || {
            let api = api.clone();
            async move { api.list_family_members().await }
        }
    });

    let add_member = {
        let api = api.clone();
        move |_| {
            let value = name.peek().trim().to_string();
            if value.is_empty() {
                return;
            }
            let api = api.clone();
            spawn(async move {
                match api.add_family_member(&value).await {
                    Ok(()) => {
                        name.set(String::new());
                        error.set(None);
                        members.restart();
                    }
                    Err(err) => {
                        tracing::error!("adding family member failed: {err}");
                        error.set(Some("Could not add family member".into()));
                    }
                }
            });
        }
    };

    // Removal goes through a confirm dialog; the row buttons only arm it.
    let remove_member = {
        let api = api.clone();
        move |_| {
            let Some(id) = *confirm_delete_id.peek() else { return };
            confirm_delete_id.set(None);
            let api = api.clone();
            spawn(async move {
                match api.remove_family_member(id).await {
                    Ok(()) => {
                        if *member.peek() == Some(id) {
                            member.set(None);
                        }
                        error.set(None);
                        members.restart();
                    }
                    Err(err) => {
                        tracing::error!("removing family member failed: {err}");
                        error.set(Some("Could not remove family member".into()));
                    }
                }
            });
        }
    };

    let export_href = api.export_csv_url(member());

    rsx! {
        div { class: "mx-auto w-full max-w-2xl p-4 space-y-6 pb-20",
            h1 { class: "text-2xl font-semibold", "Settings" }

            {error.read().as_ref().map(|err| rsx! {
                p { class: "text-red-600 text-sm", {err.clone()} }
            })}

            div { class: "rounded-lg border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-4 space-y-3",
                h2 { class: "text-sm font-semibold", "Family members" }
                {
                    match &*members.read() {
                        Some(Ok(list)) => rsx! {
                            ul { class: "divide-y divide-slate-200 dark:divide-slate-700",
                                for m in list.clone() {
                                    li { class: "flex items-center justify-between py-2",
                                        span { class: "text-sm", {m.name.clone()} }
                                        button {
                                            class: "inline-flex items-center h-8 px-2 rounded-md border border-red-300 text-red-600 hover:bg-red-50 dark:hover:bg-red-950 text-xs font-medium transition",
                                            onclick: move |_| confirm_delete_id.set(Some(m.id)),
                                            "Remove"
                                        }
                                    }
                                }
                                { list.is_empty().then(|| rsx!( li { class: "py-2 text-sm text-slate-500", "No family members yet" } )) }
                            }
                        },
                        Some(Err(_)) => rsx! {
                            p { class: "text-sm text-red-600", "Failed to load family members" }
                        },
                        None => rsx! {
                            p { class: "text-sm text-slate-500", "Loading…" }
                        },
                    }
                }
                div { class: "flex items-center gap-2",
                    input {
                        class: "h-9 flex-1 rounded-md border border-slate-300 dark:border-slate-600 bg-white dark:bg-slate-900 px-3 text-sm focus:outline-none focus:ring-2 focus:ring-blue-500",
                        placeholder: "Name",
                        value: "{name}",
                        oninput: move |evt| name.set(evt.value()),
                    }
                    button {
                        class: "inline-flex items-center h-9 px-3 rounded-md bg-blue-600 text-white hover:bg-blue-700 text-sm font-medium transition",
                        onclick: add_member,
                        "Add"
                    }
                }
            }

            div { class: "rounded-lg border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-sm p-4 space-y-2",
                h2 { class: "text-sm font-semibold", "Export" }
                p { class: "text-sm text-slate-600 dark:text-slate-300",
                    "Download the selected member's planner data as CSV."
                }
                a {
                    class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition",
                    href: "{export_href}",
                    "Export CSV"
                }
            }

            if confirm_delete_id().is_some() {
                div { class: "fixed inset-0 z-50 flex items-center justify-center bg-black/50 p-4",
                    div { class: "w-full max-w-md rounded-xl border border-slate-200 dark:border-slate-700 bg-white dark:bg-slate-800 shadow-lg p-5 space-y-4",
                        h2 { class: "text-lg font-semibold", "Remove family member?" }
                        p { class: "text-sm text-slate-600 dark:text-slate-300",
                            "This removes the member and every planner entry attached to them."
                        }
                        div { class: "flex items-center justify-end gap-2",
                            button {
                                class: "inline-flex items-center h-9 px-3 rounded-md border border-slate-300 dark:border-slate-600 text-slate-700 dark:text-slate-200 hover:bg-slate-100 dark:hover:bg-slate-800 text-sm font-medium transition",
                                onclick: move |_| confirm_delete_id.set(None),
                                "Cancel"
                            }
                            button {
                                class: "inline-flex items-center h-9 px-3 rounded-md bg-red-600 text-white hover:bg-red-700 text-sm font-medium transition",
                                onclick: remove_member,
                                "Remove"
                            }
                        }
                    }
                }
            }
        }
    }
}
