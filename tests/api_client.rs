//! Wire-level tests of the backend facade against a mock server.

use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use famplan::api::ApiClient;
use famplan::model::{Field, SaveEntry};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn day_json(date: &str, am: &str, plans: &str) -> serde_json::Value {
    json!({
        "date": date,
        "am": am,
        "pm": "",
        "overnight": "",
        "plans": plans,
        "family_plans": ""
    })
}

fn week_json(start: NaiveDate) -> serde_json::Value {
    let days: Vec<_> = (0..7)
        .map(|offset| {
            let d = start + chrono::Duration::days(offset);
            day_json(&d.format("%Y-%m-%d").to_string(), "", "")
        })
        .collect();
    json!(days)
}

#[tokio::test]
async fn get_week_returns_the_seven_days_in_order() {
    let server = MockServer::start().await;
    let monday = date(2024, 6, 3);
    Mock::given(method("POST"))
        .and(path("/get_week"))
        .and(body_json(json!({ "start_date": "2024-06-03" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(week_json(monday)))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let days = api.get_week(monday, None).await.unwrap();

    assert_eq!(days.len(), 7);
    for (offset, day) in days.iter().enumerate() {
        assert_eq!(day.date, monday + chrono::Duration::days(offset as i64));
    }
}

#[tokio::test]
async fn get_week_scopes_requests_to_the_selected_member() {
    let server = MockServer::start().await;
    let monday = date(2024, 6, 3);
    Mock::given(method("POST"))
        .and(path("/get_week"))
        .and(body_json(json!({ "start_date": "2024-06-03", "family_member_id": 3 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(week_json(monday)))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    api.get_week(monday, Some(3)).await.unwrap();
}

#[tokio::test]
async fn save_entry_sends_exactly_one_field() {
    let server = MockServer::start().await;
    // Exact-body matcher: the date, the one edited field, nothing else.
    Mock::given(method("POST"))
        .and(path("/save_entry"))
        .and(body_json(json!({ "date": "2024-06-04", "am": "SK" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    api.save_entry(&SaveEntry {
        date: date(2024, 6, 4),
        field: Field::Am,
        value: "SK".into(),
        family_member_id: None,
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn save_entry_includes_the_member_scope_when_set() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save_entry"))
        .and(body_json(json!({
            "date": "2024-06-04",
            "family_plans": "cinema",
            "family_member_id": 2
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "status": "success" })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    api.save_entry(&SaveEntry {
        date: date(2024, 6, 4),
        field: Field::FamilyPlans,
        value: "cinema".into(),
        family_member_id: Some(2),
    })
    .await
    .unwrap();
}

#[tokio::test]
async fn save_entry_surfaces_request_failures() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/save_entry"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let result = api
        .save_entry(&SaveEntry {
            date: date(2024, 6, 4),
            field: Field::Pm,
            value: "LS".into(),
            family_member_id: None,
        })
        .await;
    assert!(result.is_err());
}

#[tokio::test]
async fn schedule_stats_parses_the_period_map() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/schedule-stats"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "term": { "AM": 42.5, "PM": 10.0, "Overnight": 0.0 },
            "holidays": { "AM": 80.0, "PM": 75.0, "Overnight": 50.0 }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let stats = api.schedule_stats().await.unwrap();

    assert_eq!(stats.len(), 2);
    assert_eq!(stats["term"].am, 42.5);
    assert_eq!(stats["holidays"].overnight, 50.0);
}

#[tokio::test]
async fn import_csv_reports_the_backend_verdict() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/import_csv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": false,
            "error": "Invalid file type"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let outcome = api
        .import_csv("plans.csv", b"date,am\n2024-06-03,SK\n".to_vec(), Some(1))
        .await
        .unwrap();

    assert!(!outcome.success);
    assert_eq!(outcome.error.as_deref(), Some("Invalid file type"));
}

#[tokio::test]
async fn family_members_are_listed_added_and_removed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/family_members"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "June" },
            { "id": 2, "name": "Max" }
        ])))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/add_family_member"))
        .and(body_string_contains("name=Robin"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/remove_family_member/2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": true })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ApiClient::new(server.uri());
    let members = api.list_family_members().await.unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0].name, "June");

    api.add_family_member("Robin").await.unwrap();
    api.remove_family_member(2).await.unwrap();
}

#[test]
fn export_url_carries_the_member_scope() {
    let api = ApiClient::new("http://planner.local/");
    assert_eq!(
        api.export_csv_url(Some(4)),
        "http://planner.local/export_csv?family_member_id=4"
    );
    assert_eq!(api.export_csv_url(None), "http://planner.local/export_csv");
}
