use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use crate::shell::http::router;
use crate::shell::state::AppState;
use crate::tests::fixtures::stores::sqlite_store;

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn event_body(title: &str, date_from: &str, date_to: &str) -> Value {
    json!({
        "title": title,
        "description": format!("{title} notes"),
        "date_from": date_from,
        "date_to": date_to,
    })
}

#[tokio::test]
async fn manages_a_week_of_events_over_http() {
    let app = router(AppState::new(sqlite_store()), None);

    let mut uuids = Vec::new();
    for body in [
        event_body("Kickoff", "2022-01-03T09:00:00+01:00", "2022-01-03T10:00:00+01:00"),
        event_body("Offsite", "2022-01-06T00:00:00Z", "2022-01-08T00:00:00Z"),
        event_body("Next week", "2022-01-11T09:00:00Z", "2022-01-11T10:00:00Z"),
    ] {
        let (status, json) = send(&app, with_json("POST", "/api/events", body)).await;
        assert_eq!(status, StatusCode::OK);
        uuids.push(json["uuid"].as_str().unwrap().to_string());
    }

    let (status, week) = send(&app, get("/api/events/week?year=2022&week=1&tz=Europe/Amsterdam")).await;
    assert_eq!(status, StatusCode::OK);
    let titles: Vec<&str> = week
        .as_array()
        .unwrap()
        .iter()
        .map(|event| event["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["Kickoff", "Offsite"]);
    assert_eq!(week[0]["date_from"], json!("2022-01-03T08:00:00Z"));

    let (status, json) = send(
        &app,
        with_json(
            "PUT",
            &format!("/api/events/{}", uuids[1]),
            event_body("Offsite (short)", "2022-01-06T00:00:00Z", "2022-01-06T12:00:00Z"),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json, json!({ "message": "success" }));

    let (status, event) = send(&app, get(&format!("/api/events/{}", uuids[1]))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(event["title"], json!("Offsite (short)"));
    assert_eq!(event["date_to"], json!("2022-01-06T12:00:00Z"));

    let (status, listed) = send(
        &app,
        get("/api/events?start=2022-01-01T00:00:00Z&sort=created_at&ord=desc&limit=1"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed.as_array().unwrap().len(), 1);

    let delete = || {
        Request::delete(format!("/api/events/{}", uuids[0]))
            .body(Body::empty())
            .unwrap()
    };
    assert_eq!(send(&app, delete()).await.0, StatusCode::OK);
    let (status, json) = send(&app, delete()).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json, json!({ "message": "does not exist" }));

    let (status, all) = send(&app, get("/api/events/all")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn rejects_bad_parameters_before_touching_the_store() {
    let app = router(AppState::new(sqlite_store()), None);

    for uri in [
        "/api/events?sort=foo",
        "/api/events?ord=sideways",
        "/api/events?end=tomorrow",
        "/api/events/day?date=2022-02-01&tz=Not/AZone",
        "/api/events/week?year=2022&tz=UTC",
        "/api/events/month?year=2022&month=0&tz=UTC",
    ] {
        let (status, json) = send(&app, get(uri)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{uri}");
        assert!(json["message"].is_string(), "{uri}");
    }
}
