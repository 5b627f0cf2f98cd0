//! End-to-end tests against an in-process mock Snipe-IT server.
//!
//! The server records every request it receives and answers from a fixed
//! table of `path -> (status, body)`. Assertions run in the test body, not
//! in the handler.

use axum::extract::State;
use axum::http::{header, HeaderMap, Method, StatusCode, Uri};
use axum::response::IntoResponse;
use axum::Router;
use snipeit_client::{Client, DecodeError, DecodeTarget, Error};
use snipeit_model::{
    Category, CategoryListOptions, Hardware, HardwareListOptions, Location, LocationListOptions,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

const TOKEN: &str =
    "premature optimization is the root of all evil (or at least most of it) in programming";

#[derive(Debug, Clone)]
struct Recorded {
    method: Method,
    path: String,
    query: HashMap<String, String>,
    headers: HeaderMap,
}

#[derive(Clone, Default)]
struct Mock {
    routes: Arc<HashMap<String, (StatusCode, String)>>,
    requests: Arc<Mutex<Vec<Recorded>>>,
}

impl Mock {
    fn requests(&self) -> Vec<Recorded> {
        self.requests.lock().unwrap().clone()
    }

    fn single_request(&self) -> Recorded {
        let requests = self.requests();
        assert_eq!(requests.len(), 1, "expected exactly one request");
        requests.into_iter().next().unwrap()
    }
}

async fn handle(
    State(mock): State<Mock>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
) -> axum::response::Response {
    let query = url::form_urlencoded::parse(uri.query().unwrap_or_default().as_bytes())
        .into_owned()
        .collect();
    mock.requests.lock().unwrap().push(Recorded {
        method,
        path: uri.path().to_string(),
        query,
        headers,
    });

    match mock.routes.get(uri.path()) {
        Some((status, body)) => (
            *status,
            [(header::CONTENT_TYPE, "application/json")],
            body.clone(),
        )
            .into_response(),
        None => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Start a mock server and return it with the server's root URL.
async fn serve(routes: &[(&str, StatusCode, &str)]) -> (Mock, String) {
    let mock = Mock {
        routes: Arc::new(
            routes
                .iter()
                .map(|(path, status, body)| ((*path).to_string(), (*status, (*body).to_string())))
                .collect(),
        ),
        ..Default::default()
    };

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(handle).with_state(mock.clone());
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (mock, format!("http://{addr}"))
}

fn assert_headers(req: &Recorded) {
    for (key, want) in [
        (header::CONTENT_TYPE, "application/json".to_string()),
        (header::ACCEPT, "application/json".to_string()),
        (header::AUTHORIZATION, format!("Bearer {TOKEN}")),
    ] {
        let got = req.headers.get(&key).and_then(|v| v.to_str().ok());
        assert_eq!(got, Some(want.as_str()), "header {key}");
    }
}

fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
}

#[tokio::test]
async fn hardware_list_filters_by_location() {
    let (mock, url) = serve(&[(
        "/hardware",
        StatusCode::OK,
        r#"{"total":1, "rows": [{"id": 10, "name": "hardware", "location": {"id": 1}}]}"#,
    )])
    .await;
    let client = Client::new(&url, TOKEN).unwrap();

    let opts = HardwareListOptions {
        location_id: 1,
        ..Default::default()
    };
    let (hardware, response) = client.hardware().list(Some(&opts)).await.unwrap();

    let want = vec![Hardware {
        id: 10,
        name: "hardware".to_string(),
        location: Some(Location {
            id: 1,
            ..Default::default()
        }),
        ..Default::default()
    }];
    assert_eq!(hardware, want);
    assert_eq!(response.status().as_u16(), 200);

    let req = mock.single_request();
    assert_eq!(req.method, Method::GET);
    assert_eq!(req.path, "/hardware");
    assert_eq!(req.query, params(&[("location_id", "1")]));
    assert_headers(&req);
}

#[tokio::test]
async fn hardware_list_without_options_sends_no_query() {
    let (mock, url) = serve(&[("/hardware", StatusCode::OK, r#"{"total":0,"rows":[]}"#)]).await;
    let client = Client::new(&url, TOKEN).unwrap();

    let (hardware, _) = client.hardware().list(None).await.unwrap();
    assert!(hardware.is_empty());

    let (hardware, _) = client
        .hardware()
        .list(Some(&HardwareListOptions::default()))
        .await
        .unwrap();
    assert!(hardware.is_empty());

    for req in mock.requests() {
        assert!(req.query.is_empty());
    }
}

#[tokio::test]
async fn locations_list_and_get() {
    let (mock, url) = serve(&[
        (
            "/locations",
            StatusCode::OK,
            r#"{"total":1,"rows":[{"id": 1, "name": "Test"}]}"#,
        ),
        ("/locations/1", StatusCode::OK, r#"{"id": 1, "name": "Test"}"#),
    ])
    .await;
    let client = Client::new(&url, TOKEN).unwrap();
    let want = Location {
        id: 1,
        name: "Test".to_string(),
        ..Default::default()
    };

    let opts = LocationListOptions {
        search: "Test".to_string(),
        ..Default::default()
    };
    let (locations, _) = client.locations().list(Some(&opts)).await.unwrap();
    assert_eq!(locations, vec![want.clone()]);

    let (location, _) = client.locations().get(1).await.unwrap();
    assert_eq!(location, want);

    let requests = mock.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].query, params(&[("search", "Test")]));
    assert_eq!(requests[1].path, "/locations/1");
    assert!(requests[1].query.is_empty());
    requests.iter().for_each(assert_headers);
}

#[tokio::test]
async fn categories_list_and_get() {
    let (mock, url) = serve(&[
        (
            "/categories",
            StatusCode::OK,
            r#"{"total":1,"rows":[{"id": 1, "name": "Test"}]}"#,
        ),
        ("/categories/1", StatusCode::OK, r#"{"id": 1, "name": "Test"}"#),
    ])
    .await;
    let client = Client::new(&url, TOKEN).unwrap();
    let want = Category {
        id: 1,
        name: "Test".to_string(),
        ..Default::default()
    };

    let opts = CategoryListOptions {
        search: "Test".to_string(),
        ..Default::default()
    };
    let (categories, _) = client.categories().list(Some(&opts)).await.unwrap();
    assert_eq!(categories, vec![want.clone()]);

    let (category, _) = client.categories().get(1).await.unwrap();
    assert_eq!(category, want);

    let requests = mock.requests();
    assert_eq!(requests[0].query, params(&[("search", "Test")]));
    assert_eq!(requests[1].path, "/categories/1");
}

#[tokio::test]
async fn base_path_prefix_is_kept() {
    let (mock, url) = serve(&[(
        "/api/v1/locations/3",
        StatusCode::OK,
        r#"{"id": 3, "name": "Lab"}"#,
    )])
    .await;
    let client = Client::new(&format!("{url}/api/v1"), TOKEN).unwrap();

    let (location, _) = client.locations().get(3).await.unwrap();
    assert_eq!(location.name, "Lab");
    assert_eq!(mock.single_request().path, "/api/v1/locations/3");
}

#[tokio::test]
async fn error_status_is_returned_undecoded() {
    let body = r#"{"status":"error","messages":"Location not found","payload":null}"#;
    let (_mock, url) = serve(&[("/locations/99", StatusCode::NOT_FOUND, body)]).await;
    let client = Client::new(&url, TOKEN).unwrap();

    let (location, response) = client.locations().get(99).await.unwrap();

    assert_eq!(response.status().as_u16(), 404);
    assert!(!response.is_success());
    assert_eq!(location, Location::default());
    assert_eq!(response.unread_body(), body.as_bytes());
}

#[tokio::test]
async fn server_error_on_list_yields_empty_rows() {
    let (_mock, url) = serve(&[(
        "/hardware",
        StatusCode::INTERNAL_SERVER_ERROR,
        r#"{"total":1,"rows":[{"id":1}]}"#,
    )])
    .await;
    let client = Client::new(&url, TOKEN).unwrap();

    let (hardware, response) = client.hardware().list(None).await.unwrap();
    assert_eq!(response.status().as_u16(), 500);
    assert!(hardware.is_empty());
}

#[tokio::test]
async fn empty_body_leaves_zero_value() {
    let (_mock, url) = serve(&[
        ("/categories/2", StatusCode::OK, ""),
        ("/locations/2", StatusCode::OK, " \n"),
    ])
    .await;
    let client = Client::new(&url, TOKEN).unwrap();

    let (category, response) = client.categories().get(2).await.unwrap();
    assert!(response.is_success());
    assert_eq!(category, Category::default());

    let (location, _) = client.locations().get(2).await.unwrap();
    assert_eq!(location, Location::default());
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let (_mock, url) = serve(&[("/locations/1", StatusCode::OK, r#"{"id": 1, "name": "#)]).await;
    let client = Client::new(&url, TOKEN).unwrap();

    let err = client.locations().get(1).await.unwrap_err();

    assert!(matches!(
        err,
        Error::Decode {
            source: DecodeError::Json(_),
            ..
        }
    ));
    assert_eq!(err.response().map(|r| r.status().as_u16()), Some(200));
}

#[tokio::test]
async fn bad_timestamp_is_a_decode_error() {
    let (_mock, url) = serve(&[(
        "/hardware",
        StatusCode::OK,
        r#"{"total":1,"rows":[{"id": 10, "name": "hardware",
            "created_at": {"datetime": "not-a-date", "formatted": ""}}]}"#,
    )])
    .await;
    let client = Client::new(&url, TOKEN).unwrap();

    let err = client.hardware().list(None).await.unwrap_err();

    assert!(err.to_string().contains("not-a-date"), "{err}");
    assert!(err.response().is_some());
    match &err {
        Error::Decode { source, .. } => assert!(source.is_timestamp(), "{source}"),
        other => panic!("expected decode error, got {other}"),
    }
}

#[tokio::test]
async fn timestamps_decode_end_to_end() {
    let (_mock, url) = serve(&[(
        "/categories/4",
        StatusCode::OK,
        r#"{"id": 4, "name": "Monitors",
            "created_at": {"datetime": "2019-05-21 21:37:40", "formatted": "2019-05-21 21:37"},
            "updated_at": {"datetime": "", "formatted": ""}}"#,
    )])
    .await;
    let client = Client::new(&url, TOKEN).unwrap();

    let (category, _) = client.categories().get(4).await.unwrap();

    let want = chrono::NaiveDate::from_ymd_opt(2019, 5, 21)
        .and_then(|d| d.and_hms_opt(21, 37, 40))
        .map(|dt| dt.and_utc());
    assert_eq!(category.created_at.datetime(), want);
    assert!(category.updated_at.is_unset());
}

#[tokio::test]
async fn raw_sink_receives_body_verbatim() {
    let body = r#"{"total":1,  "rows":[{"id":1}]}"#;
    let (_mock, url) = serve(&[("/hardware", StatusCode::OK, body)]).await;
    let client = Client::new(&url, TOKEN).unwrap();

    let request = client
        .new_request::<()>(reqwest::Method::GET, "hardware", None)
        .unwrap();
    let mut sink: Vec<u8> = Vec::new();
    let response = client
        .execute::<()>(request, DecodeTarget::Sink(&mut sink))
        .await
        .unwrap();

    assert!(response.is_success());
    assert_eq!(sink, body.as_bytes());
    assert!(response.unread_body().is_empty());
}

#[tokio::test]
async fn discard_target_ignores_body() {
    let (mock, url) = serve(&[("/hardware", StatusCode::OK, "definitely not json")]).await;
    let client = Client::new(&url, TOKEN).unwrap();

    let request = client
        .new_request::<()>(reqwest::Method::GET, "/hardware", None)
        .unwrap();
    let response = client
        .execute::<()>(request, DecodeTarget::Discard)
        .await
        .unwrap();

    assert!(response.is_success());
    assert_headers(&mock.single_request());
}

#[tokio::test]
async fn unreachable_server_is_a_transport_error() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = Client::new(&format!("http://{addr}"), TOKEN).unwrap();
    let err = client.locations().get(1).await.unwrap_err();

    assert!(matches!(err, Error::Transport(_)), "{err}");
    assert!(err.response().is_none());
}

#[tokio::test]
async fn client_is_shared_across_tasks() {
    let (mock, url) = serve(&[
        ("/locations/1", StatusCode::OK, r#"{"id": 1, "name": "A"}"#),
        ("/categories/1", StatusCode::OK, r#"{"id": 1, "name": "B"}"#),
    ])
    .await;
    let client = Client::new(&url, TOKEN).unwrap();

    let a = {
        let client = client.clone();
        tokio::spawn(async move { client.locations().get(1).await.map(|(l, _)| l.name) })
    };
    let b = {
        let client = client.clone();
        tokio::spawn(async move { client.categories().get(1).await.map(|(c, _)| c.name) })
    };

    assert_eq!(a.await.unwrap().unwrap(), "A");
    assert_eq!(b.await.unwrap().unwrap(), "B");
    assert_eq!(mock.requests().len(), 2);
}
