//! Edit persistence: one changed field goes to the backend, and the cell
//! cache mirrors the value once the server acknowledges it.

use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::model::{CellStore, SaveEntry};

/// Fire-and-forget save of a single `(date, field, value)` triple.
///
/// On success the cache commits the saved value (which the icons and popup
/// read from); on failure the error is logged and nothing else changes.
/// No rollback, no retry. The spinner flag covers the request's lifetime;
/// overlapping requests share it, so the last one to finish hides it.
pub fn save_entry(
    api: ApiClient,
    mut cells: Signal<CellStore>,
    mut busy: Signal<bool>,
    entry: SaveEntry,
) {
    busy.set(true);
    spawn(async move {
        match api.save_entry(&entry).await {
            Ok(()) => cells.write().commit(&entry),
            Err(err) => {
                tracing::error!("saving {} for {} failed: {err}", entry.field.key(), entry.date);
            }
        }
        busy.set(false);
    });
}
