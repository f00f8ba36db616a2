//! Client-side preferences that survive page loads.
//!
//! Stored as one JSON blob in `localStorage`; off-wasm (native shell,
//! tests) an in-memory stand-in keeps the same API.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
struct Prefs {
    #[serde(default)]
    family_member_id: Option<i64>,
}

#[cfg(target_arch = "wasm32")]
mod store {
    use super::Prefs;
    use web_sys::{window, Storage};

    const KEY_PREFS: &str = "famplan_prefs";

    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok().flatten())
    }

    pub fn load() -> Prefs {
        storage()
            .and_then(|s| s.get_item(KEY_PREFS).ok().flatten())
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    pub fn save(prefs: &Prefs) {
        if let (Some(s), Ok(json)) = (storage(), serde_json::to_string(prefs)) {
            let _ = s.set_item(KEY_PREFS, &json);
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod store {
    use super::Prefs;
    use once_cell::sync::Lazy;
    use std::sync::Mutex;

    static PREFS: Lazy<Mutex<Prefs>> = Lazy::new(|| Mutex::new(Prefs::default()));

    pub fn load() -> Prefs {
        PREFS.lock().unwrap().clone()
    }

    pub fn save(prefs: &Prefs) {
        *PREFS.lock().unwrap() = prefs.clone();
    }
}

pub fn selected_member() -> Option<i64> {
    store::load().family_member_id
}

pub fn set_selected_member(id: Option<i64>) {
    let mut prefs = store::load();
    prefs.family_member_id = id;
    store::save(&prefs);
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn selection_round_trips() {
        set_selected_member(Some(7));
        assert_eq!(selected_member(), Some(7));
        set_selected_member(None);
        assert_eq!(selected_member(), None);
    }
}
