//! HTTP facade over the planner backend.
//!
//! Every endpoint the client talks to lives here; the views never touch
//! `reqwest` directly. The backend is an opaque collaborator: requests are
//! JSON (multipart for the CSV import) and anything non-2xx or undecodable
//! surfaces as a single "request failed" error for the caller to log.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;

use crate::model::{DayRecord, SaveEntry};

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

/// One person tracked by the planner; entries are scoped to a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub id: i64,
    pub name: String,
}

/// Server verdict on a CSV import.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImportOutcome {
    pub success: bool,
    #[serde(default)]
    pub error: Option<String>,
}

/// SK-coverage percentages for one named period.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PeriodStats {
    #[serde(rename = "AM")]
    pub am: f64,
    #[serde(rename = "PM")]
    pub pm: f64,
    #[serde(rename = "Overnight")]
    pub overnight: f64,
}

#[derive(Clone)]
pub struct ApiClient {
    base: String,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base, http: reqwest::Client::new() }
    }

    /// Backend origin for the running target: the page origin in the
    /// browser, `FAMPLAN_SERVER` for the native shell.
    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let origin = web_sys::window()
            .and_then(|w| w.location().origin().ok())
            .unwrap_or_else(|| "http://127.0.0.1:5000".into());
        Self::new(origin)
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let origin = std::env::var("FAMPLAN_SERVER")
            .unwrap_or_else(|_| "http://127.0.0.1:5000".into());
        Self::new(origin)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    /// Fetch the seven days starting at `start` (a Monday).
    pub async fn get_week(
        &self,
        start: NaiveDate,
        member: Option<i64>,
    ) -> Result<Vec<DayRecord>, ApiError> {
        let mut body = serde_json::Map::new();
        body.insert("start_date".into(), json!(start.format("%Y-%m-%d").to_string()));
        if let Some(id) = member {
            body.insert("family_member_id".into(), json!(id));
        }
        let days = self
            .http
            .post(self.url("/get_week"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<DayRecord>>()
            .await?;
        Ok(days)
    }

    /// Persist one edited field. The body carries the date, exactly one
    /// field key, and the member scope when one is selected.
    pub async fn save_entry(&self, entry: &SaveEntry) -> Result<(), ApiError> {
        let mut body = serde_json::Map::new();
        body.insert("date".into(), json!(entry.date.format("%Y-%m-%d").to_string()));
        body.insert(entry.field.key().into(), json!(entry.value));
        if let Some(id) = entry.family_member_id {
            body.insert("family_member_id".into(), json!(id));
        }
        // The ack body varies by backend version; decode it only to confirm
        // the server answered with JSON.
        self.http
            .post(self.url("/save_entry"))
            .json(&body)
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        Ok(())
    }

    pub async fn import_csv(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        member: Option<i64>,
    ) -> Result<ImportOutcome, ApiError> {
        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str("text/csv")?;
        let mut form = reqwest::multipart::Form::new().part("file", part);
        if let Some(id) = member {
            form = form.text("family_member_id", id.to_string());
        }
        let outcome = self
            .http
            .post(self.url("/import_csv"))
            .multipart(form)
            .send()
            .await?
            .error_for_status()?
            .json::<ImportOutcome>()
            .await?;
        Ok(outcome)
    }

    pub async fn schedule_stats(&self) -> Result<BTreeMap<String, PeriodStats>, ApiError> {
        let stats = self
            .http
            .get(self.url("/api/schedule-stats"))
            .send()
            .await?
            .error_for_status()?
            .json::<BTreeMap<String, PeriodStats>>()
            .await?;
        Ok(stats)
    }

    pub async fn list_family_members(&self) -> Result<Vec<FamilyMember>, ApiError> {
        let members = self
            .http
            .get(self.url("/family_members"))
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<FamilyMember>>()
            .await?;
        Ok(members)
    }

    pub async fn add_family_member(&self, name: &str) -> Result<(), ApiError> {
        self.http
            .post(self.url("/add_family_member"))
            .form(&[("name", name)])
            .send()
            .await?
            .error_for_status()?;
        Ok(())
    }

    pub async fn remove_family_member(&self, id: i64) -> Result<(), ApiError> {
        self.http
            .post(self.url(&format!("/remove_family_member/{id}")))
            .send()
            .await?
            .error_for_status()?
            .json::<serde_json::Value>()
            .await?;
        Ok(())
    }

    /// Download link for the member's planner data; served as a file, so it
    /// is navigated to rather than fetched.
    pub fn export_csv_url(&self, member: Option<i64>) -> String {
        match member {
            Some(id) => format!("{}/export_csv?family_member_id={id}", self.base),
            None => format!("{}/export_csv", self.base),
        }
    }
}
