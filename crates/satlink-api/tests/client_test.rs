// Integration tests for `SatelliteClient` using wiremock.
#![allow(clippy::unwrap_used)]

use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use satlink_api::{Error, SatelliteClient, WireId};

// ── Helpers ─────────────────────────────────────────────────────────

async fn setup() -> (MockServer, SatelliteClient) {
    let server = MockServer::start().await;
    let client = SatelliteClient::from_reqwest(&server.uri(), reqwest::Client::new()).unwrap();
    (server, client)
}

// ── Happy-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_list_satellites() {
    let (server, client) = setup().await;

    let body = json!([
        { "id": 1, "active": false, "name": "Starship-1" },
        { "id": 2, "active": true, "name": "Dragon-1" },
    ]);

    Mock::given(method("GET"))
        .and(path("/satellites"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let list = client.list_satellites().await.unwrap().unwrap();

    assert_eq!(list.len(), 2);
    assert_eq!(list[0].name.as_deref(), Some("Starship-1"));
    assert_eq!(list[1].active, Some(true));
    assert_eq!(list[1].id, Some(WireId::Number(2)));
}

#[tokio::test]
async fn test_get_satellite() {
    let (server, client) = setup().await;

    let body = json!({
        "id": 1,
        "cost_per_launch": 7_200_000,
        "first_flight": "2021-12-01",
        "height": 118,
        "mass": 1_167_000
    });

    Mock::given(method("GET"))
        .and(path("/satellites/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let detail = client.get_satellite("1").await.unwrap().unwrap();

    assert_eq!(detail.height, Some(118));
    assert_eq!(detail.mass, Some(1_167_000));
    assert_eq!(detail.first_flight.as_deref(), Some("2021-12-01"));
    assert_eq!(detail.name, None);
}

#[tokio::test]
async fn test_get_positions() {
    let (server, client) = setup().await;

    let body = json!({
        "id": "1",
        "positions": [
            { "posX": 0.864_328_541, "posY": 0.646_450_811 },
            { "posX": 0.2, "posY": 0.3 },
        ]
    });

    Mock::given(method("GET"))
        .and(path("/satellites/1/positions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let set = client.get_positions("1").await.unwrap().unwrap();
    let positions = set.positions.unwrap();

    assert_eq!(set.id, Some(WireId::Text("1".into())));
    assert_eq!(positions.len(), 2);
    assert_eq!(positions[1].pos_y, Some(0.3));
}

#[tokio::test]
async fn test_base_url_path_prefix_is_kept() {
    let server = MockServer::start().await;
    let base = format!("{}/api/v1/", server.uri());
    let client = SatelliteClient::from_reqwest(&base, reqwest::Client::new()).unwrap();

    Mock::given(method("GET"))
        .and(path("/api/v1/satellites/42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "id": 42 })))
        .mount(&server)
        .await;

    let detail = client.get_satellite("42").await.unwrap().unwrap();
    assert_eq!(detail.id, Some(WireId::Number(42)));
}

// ── Error-path tests ────────────────────────────────────────────────

#[tokio::test]
async fn test_not_found_is_absent() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/satellites/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    assert!(client.get_satellite("99").await.unwrap().is_none());
}

#[tokio::test]
async fn test_server_error_is_http_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/satellites/1/positions"))
        .respond_with(ResponseTemplate::new(503).set_body_string("maintenance"))
        .mount(&server)
        .await;

    let err = client.get_positions("1").await.unwrap_err();
    assert!(err.is_transient());
    match err {
        Error::Http { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "maintenance");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_body_is_deserialization_error() {
    let (server, client) = setup().await;

    Mock::given(method("GET"))
        .and(path("/satellites"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = client.list_satellites().await.unwrap_err();
    assert!(matches!(err, Error::Deserialization { ref body, .. } if body == "not json"));
}

#[test]
fn test_cannot_be_a_base_url_is_rejected() {
    let err = SatelliteClient::from_reqwest("mailto:ops@example.com", reqwest::Client::new())
        .unwrap_err();
    assert!(matches!(err, Error::InvalidBaseUrl(_)));
}
