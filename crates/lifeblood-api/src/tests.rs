//! Router tests driven through `tower::ServiceExt::oneshot`.

use std::sync::Arc;

use axum::{
  body::Body,
  http::{Request, StatusCode, header},
};
use lifeblood_core::{memory::MemoryStore, registry::Registry};
use serde_json::{Value, json};
use tower::ServiceExt as _;

use crate::router;

fn registry() -> Registry<MemoryStore> {
  Registry::new(Arc::new(MemoryStore::new()))
}

async fn send(
  registry: &Registry<MemoryStore>,
  method: &str,
  uri: &str,
  body: Option<Value>,
) -> (StatusCode, String) {
  let mut builder = Request::builder().method(method).uri(uri);
  let body = match body {
    Some(json) => {
      builder = builder.header(header::CONTENT_TYPE, "application/json");
      Body::from(json.to_string())
    }
    None => Body::empty(),
  };
  let resp = router(registry.clone())
    .oneshot(builder.body(body).unwrap())
    .await
    .unwrap();
  let status = resp.status();
  let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
    .await
    .unwrap();
  (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn donor_body(name: &str, group: &str, city: &str) -> Value {
  json!({
    "fullName": name,
    "age": 32,
    "gender": "female",
    "bloodGroup": group,
    "phone": "+91 98765 43210",
    "email": "",
    "city": city,
  })
}

async fn register(
  registry: &Registry<MemoryStore>,
  name: &str,
  group: &str,
  city: &str,
) -> Value {
  let (status, body) =
    send(registry, "POST", "/donors", Some(donor_body(name, group, city))).await;
  assert_eq!(status, StatusCode::CREATED, "{body}");
  serde_json::from_str(&body).unwrap()
}

// ── Donors ──────────────────────────────────────────────────────────────────

#[tokio::test]
async fn create_donor_returns_201_with_record() {
  let r = registry();
  let donor = register(&r, "Ritu", "A+", "Pune").await;
  assert_eq!(donor["fullName"], "Ritu");
  assert_eq!(donor["availability"], true);
  assert!(donor["id"].is_string());
  assert!(donor["createdAt"].is_string());
}

#[tokio::test]
async fn incomplete_donor_is_422_with_fields() {
  let r = registry();
  let (status, body) =
    send(&r, "POST", "/donors", Some(json!({ "fullName": "Only Name" }))).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
  let body: Value = serde_json::from_str(&body).unwrap();
  assert!(body["error"].as_str().unwrap().contains("age is missing"));
  assert_eq!(body["fields"][0]["field"], "age");
  assert_eq!(body["fields"][0]["problem"], "missing");
}

#[tokio::test]
async fn list_filters_conjunctively() {
  let r = registry();
  register(&r, "Delhi A", "A+", "Delhi").await;
  register(&r, "Delhi B", "B+", "Delhi").await;
  register(&r, "Pune A", "A+", "Pune").await;

  let (status, body) =
    send(&r, "GET", "/donors?bloodGroup=A%2B&city=delhi", None).await;
  assert_eq!(status, StatusCode::OK);
  let donors: Vec<Value> = serde_json::from_str(&body).unwrap();
  assert_eq!(donors.len(), 1);
  assert_eq!(donors[0]["fullName"], "Delhi A");
}

#[tokio::test]
async fn rendered_list_escapes_names() {
  let r = registry();
  register(&r, "<script>alert('x')</script>", "O+", "Goa").await;

  let (status, html) = send(&r, "GET", "/donors/list", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(!html.contains("<script>"));
  assert!(html.contains("&lt;script&gt;"));
}

#[tokio::test]
async fn unknown_filter_value_is_rejected() {
  let r = registry();
  let (status, _) = send(&r, "GET", "/donors/list?availability=sometimes", None).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn toggle_rerenders_with_filters() {
  let r = registry();
  let donor = register(&r, "Toggle Me", "AB-", "Agra").await;
  let id = donor["id"].as_str().unwrap();

  let (status, html) = send(
    &r,
    "POST",
    &format!("/donors/{id}/toggle?availability=unavailable"),
    None,
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  assert!(html.contains("Toggle Me"));
  assert!(html.contains("Not available"));

  let (_, body) = send(&r, "GET", "/matches?bloodGroup=AB-&city=Agra", None).await;
  assert_eq!(body, "[]");
}

#[tokio::test]
async fn toggle_unknown_donor_is_404() {
  let r = registry();
  let (status, body) = send(
    &r,
    "POST",
    "/donors/6f1c1f38-93a4-4c47-9d9e-1a1d1b6f0d2e/toggle",
    None,
  )
  .await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  assert!(body.contains("not found"));
}

#[tokio::test]
async fn toggle_with_non_uuid_id_is_404_json() {
  let r = registry();
  let (status, body) =
    send(&r, "POST", "/donors/donor_lq2x9abc123/toggle", None).await;
  assert_eq!(status, StatusCode::NOT_FOUND);
  let body: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(body["error"], "donor donor_lq2x9abc123 not found");
}

#[tokio::test]
async fn clear_filters_returns_neutral_controls_and_full_list() {
  let r = registry();
  register(&r, "One", "A+", "Pune").await;
  register(&r, "Two", "B+", "Delhi").await;

  let (status, body) = send(&r, "POST", "/donors/list/clear", None).await;
  assert_eq!(status, StatusCode::OK);
  let body: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(body["controls"], json!({
    "q": "",
    "bloodGroup": "all",
    "city": "all",
    "availability": "all",
  }));
  let html = body["html"].as_str().unwrap();
  assert!(html.contains("One") && html.contains("Two"));
}

#[tokio::test]
async fn cities_are_distinct_and_sorted() {
  let r = registry();
  register(&r, "a", "A+", "Pune").await;
  register(&r, "b", "A+", "Delhi").await;
  register(&r, "c", "A+", "Pune").await;

  let (_, body) = send(&r, "GET", "/donors/cities", None).await;
  assert_eq!(body, r#"["Delhi","Pune"]"#);

  let (_, html) = send(&r, "GET", "/donors/cities/options?selected=Pune", None).await;
  assert!(html.contains("<option value=\"Pune\" selected>"));
}

// ── Requests ────────────────────────────────────────────────────────────────

fn request_body(group: &str, city: &str) -> Value {
  json!({
    "patientName": "Patient X",
    "requiredBloodGroup": group,
    "hospital": "City Hospital",
    "requestCity": city,
    "contactNumber": "020 1234",
  })
}

#[tokio::test]
async fn posting_request_returns_matches() {
  let r = registry();
  register(&r, "Match", "O-", "Pune").await;
  register(&r, "Other City", "O-", "Mumbai").await;

  let (status, body) =
    send(&r, "POST", "/requests", Some(request_body("O-", " pune "))).await;
  assert_eq!(status, StatusCode::CREATED);
  let body: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(body["matches"].as_array().unwrap().len(), 1);
  assert_eq!(body["matches"][0]["fullName"], "Match");
  assert!(body["html"].as_str().unwrap().contains("match-card"));
}

#[tokio::test]
async fn request_without_matches_renders_empty_state() {
  let r = registry();
  let (status, body) =
    send(&r, "POST", "/requests", Some(request_body("B-", "Leh"))).await;
  assert_eq!(status, StatusCode::CREATED);
  let body: Value = serde_json::from_str(&body).unwrap();
  assert!(body["matches"].as_array().unwrap().is_empty());
  assert!(
    body["html"]
      .as_str()
      .unwrap()
      .contains("No matching donors found in this city.")
  );

  let (status, html) = send(&r, "GET", "/requests/latest/matches", None).await;
  assert_eq!(status, StatusCode::OK);
  assert!(html.contains("empty-state"));
}

#[tokio::test]
async fn unknown_match_group_is_rejected() {
  let r = registry();
  let (status, _) = send(&r, "GET", "/matches?bloodGroup=Q%2B&city=Pune", None).await;
  assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn stats_count_both_collections() {
  let r = registry();
  register(&r, "a", "A+", "Pune").await;
  send(&r, "POST", "/requests", Some(request_body("A+", "Pune"))).await;
  send(&r, "POST", "/requests", Some(request_body("A-", "Pune"))).await;

  let (_, body) = send(&r, "GET", "/stats", None).await;
  assert_eq!(
    serde_json::from_str::<Value>(&body).unwrap(),
    json!({ "totalDonors": 1, "totalRequests": 2 })
  );

  let (_, body) = send(&r, "GET", "/requests", None).await;
  let requests: Vec<Value> = serde_json::from_str(&body).unwrap();
  assert_eq!(requests[0]["requiredBloodGroup"], "A-");
}

// ── Eligibility ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn eligibility_reports_verdict_and_card() {
  let r = registry();
  let (status, body) = send(
    &r,
    "POST",
    "/eligibility",
    Some(json!({ "age": 30, "hasChronicIllness": true, "donatedRecently": false })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  let body: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(body["status"], "ineligible");
  assert_eq!(body["eligible"], false);
  assert!(body["reason"].as_str().unwrap().contains("chronic illness"));
  assert!(body["html"].as_str().unwrap().contains("Not Eligible"));
}

#[tokio::test]
async fn negative_age_is_ineligible_not_a_parse_error() {
  let r = registry();
  let (status, body) = send(
    &r,
    "POST",
    "/eligibility",
    Some(json!({ "age": -1, "hasChronicIllness": false, "donatedRecently": false })),
  )
  .await;
  assert_eq!(status, StatusCode::OK);
  let body: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(body["status"], "ineligible");
  assert_eq!(
    body["reason"],
    "Your age (-1) is outside the safe donation range."
  );
}

#[tokio::test]
async fn unanswered_eligibility_is_incomplete() {
  let r = registry();
  let (_, body) = send(&r, "POST", "/eligibility", Some(json!({ "age": 30 }))).await;
  let body: Value = serde_json::from_str(&body).unwrap();
  assert_eq!(body["status"], "incomplete");
}

// ── Storage failures ────────────────────────────────────────────────────────

#[tokio::test]
async fn storage_failure_is_500_and_state_is_kept() {
  let r = Registry::new(Arc::new(MemoryStore::with_quota(10)));
  let (status, body) =
    send(&r, "POST", "/donors", Some(donor_body("Too Big", "A+", "Pune"))).await;
  assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
  assert!(body.contains("quota"));

  let (_, body) = send(&r, "GET", "/donors", None).await;
  assert_eq!(body, "[]");
}
