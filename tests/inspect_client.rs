//! Inspection client against an in-process API
//!
//! Spins up an axum server on an ephemeral port that mimics the Gaia
//! inspection API, then drives `ApiClient`, `InspectClient` and
//! `WorldCatalog` against it.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use gaia_inspector::api::ApiClient;
use gaia_inspector::spawn::Spawner;
use gaia_inspector::worlds::WorldCatalog;
use gaia_inspector::{InspectClient, InspectError};
use inspector_types::QueryParams;
use serde_json::{json, Value};
use tokio::net::TcpListener;

// =============================================================================
// MOCK API
// =============================================================================

async fn inspect(
    Path(world): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let obj = params.get("obj").cloned().unwrap_or_default();

    match world.as_str() {
        "strict" => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{"msg": "bad perspective", "loc": ["query", "perspective"]}]})),
        )
            .into_response(),
        "gone" => (StatusCode::GONE, Json(json!({"detail": "World has ended"}))).into_response(),
        "missing" => (StatusCode::NOT_FOUND, "<html>not found</html>").into_response(),
        "garbled" => (StatusCode::OK, "definitely not json").into_response(),
        "slow" => {
            tokio::time::sleep(Duration::from_millis(300)).await;
            Json(json!({"speed": "slow", "obj": obj})).into_response()
        }
        _ => Json(json!({
            "world": world,
            "obj": obj,
            "perspective": params.get("perspective"),
            "context": params.get("context"),
            "description": "An iron-bound oak chest",
            "affordances": [{
                "action": "Open",
                "target": "chest",
                "required_capabilities": ["hands"],
                "preconditions": ["chest is unlocked"],
                "constraints": [],
                "expected_outcome": "The lid swings open",
                "possible_failure_modes": ["lid is stuck"],
                "confidence_level": "high"
            }]
        }))
        .into_response(),
    }
}

async fn worlds() -> Json<Value> {
    Json(json!([
        {"name": "Alaria", "slug": "alaria", "inspection_presets": ["Elf", "Dwarf"]},
        {"name": "Nod", "slug": "nod"}
    ]))
}

async fn broken_worlds() -> StatusCode {
    StatusCode::INTERNAL_SERVER_ERROR
}

async fn start_server() -> SocketAddr {
    let router = Router::new()
        .route("/worlds", get(worlds))
        .route("/broken/worlds", get(broken_worlds))
        .route("/:world/inspect", get(inspect));

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind TCP listener");
    let addr = listener.local_addr().expect("Failed to get local address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("mock API failed");
    });

    addr
}

async fn api() -> ApiClient {
    let addr = start_server().await;
    ApiClient::new(&format!("http://{}/", addr))
}

async fn settle(client: &mut InspectClient) {
    for _ in 0..300 {
        client.poll();
        if !client.has_pending() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("inspection did not settle");
}

// =============================================================================
// API CLIENT
// =============================================================================

#[tokio::test]
async fn test_inspect_returns_body_verbatim() {
    let api = api().await;
    let params = QueryParams::new("new world", "oak chest", "Human adult", "exploration");

    let data = api.inspect(&params).await.expect("inspection succeeds");

    assert_eq!(data["world"], "new world");
    assert_eq!(data["obj"], "oak chest");
    assert_eq!(data["perspective"], "Human adult");
    assert_eq!(data["context"], "exploration");
    assert_eq!(data["affordances"][0]["action"], "Open");

    // Server order is preserved
    let keys: Vec<&str> = data.as_object().unwrap().keys().map(String::as_str).collect();
    assert_eq!(
        keys,
        vec!["world", "obj", "perspective", "context", "description", "affordances"]
    );
}

#[tokio::test]
async fn test_validation_detail_message() {
    let api = api().await;
    let err = api
        .inspect(&QueryParams::new("strict", "chest", "Nobody", "generic"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        InspectError::Status {
            status: 422,
            message: "bad perspective".to_string()
        }
    );
    assert_eq!(err.to_string(), "bad perspective");
}

#[tokio::test]
async fn test_string_detail_message() {
    let api = api().await;
    let err = api
        .inspect(&QueryParams::new("gone", "chest", "Elf", "generic"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "World has ended");
}

#[tokio::test]
async fn test_unparseable_error_body() {
    let api = api().await;
    let err = api
        .inspect(&QueryParams::new("missing", "chest", "Elf", "generic"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Request failed with status 404");
}

#[tokio::test]
async fn test_unparseable_success_body() {
    let api = api().await;
    let err = api
        .inspect(&QueryParams::new("garbled", "chest", "Elf", "generic"))
        .await
        .unwrap_err();
    assert!(matches!(err, InspectError::Decode(_)));
}

#[tokio::test]
async fn test_network_failure() {
    // Bind then drop to get a port nobody listens on
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let api = ApiClient::new(&format!("http://{}", addr));

    let err = api
        .inspect(&QueryParams::new("alaria", "chest", "Elf", "generic"))
        .await
        .unwrap_err();
    assert!(matches!(err, InspectError::Network(_)));
}

#[tokio::test]
async fn test_worlds() {
    let api = api().await;
    let worlds = api.worlds().await.expect("worlds load");

    assert_eq!(worlds.len(), 2);
    assert_eq!(worlds[0].slug, "alaria");
    assert_eq!(
        worlds[0].perspectives(),
        Some(&["Elf".to_string(), "Dwarf".to_string()][..])
    );
    assert!(worlds[1].perspectives().is_none());
}

// =============================================================================
// INSPECT CLIENT (lifted state)
// =============================================================================

fn client(api: ApiClient) -> InspectClient {
    InspectClient::new(api, Spawner::from_handle(tokio::runtime::Handle::current()))
}

#[tokio::test]
async fn test_client_success_keeps_query() {
    let api = api().await;
    let direct = api
        .inspect(&QueryParams::new("alaria", "chest", "Dwarf", "trade"))
        .await
        .unwrap();

    let mut client = client(api);
    client.inspect(QueryParams::new("alaria", "chest", "Dwarf", "trade"));
    assert!(client.is_loading());
    assert_eq!(client.state().query().map(|q| q.obj.as_str()), Some("chest"));

    settle(&mut client).await;

    let state = client.state();
    assert!(!state.is_loading());
    assert_eq!(state.data(), Some(&direct));
    assert!(state.error().is_none());
    let query = state.query().expect("query kept on success");
    assert_eq!(query.obj, "chest");
    assert_eq!(query.perspective, "Dwarf");
    assert_eq!(query.context, "trade");
}

#[tokio::test]
async fn test_client_failure_clears_query() {
    let mut client = client(api().await);

    client.inspect(QueryParams::new("strict", "chest", "Nobody", "generic"));
    settle(&mut client).await;

    let state = client.state();
    assert!(!state.is_loading());
    assert_eq!(state.error(), Some("bad perspective"));
    assert!(state.data().is_none());
    assert!(state.query().is_none());
}

#[tokio::test]
async fn test_client_reset() {
    let mut client = client(api().await);

    client.inspect(QueryParams::new("alaria", "chest", "Elf", "generic"));
    settle(&mut client).await;
    assert!(client.state().data().is_some());

    let before = client.revision();
    client.reset();

    assert!(client.revision() > before);
    assert!(client.state().data().is_none());
    assert!(client.state().error().is_none());
    assert!(client.state().query().is_none());
}

#[tokio::test]
async fn test_last_resolved_wins() {
    let mut client = client(api().await);

    client.inspect(QueryParams::new("slow", "first-thing", "Elf", "generic"));
    client.inspect(QueryParams::new("alaria", "second-thing", "Elf", "generic"));
    settle(&mut client).await;

    // The slow response lands last and overwrites the data; the query still
    // reflects the most recent submission.
    let state = client.state();
    assert_eq!(state.data().map(|d| d["speed"].clone()), Some(json!("slow")));
    assert_eq!(state.query().map(|q| q.obj.as_str()), Some("second-thing"));
}

// =============================================================================
// WORLD CATALOG
// =============================================================================

/// Polls until the fetch resolves; returns how many polls reported arrival
async fn settle_catalog(catalog: &mut WorldCatalog) -> usize {
    let mut arrivals = 0;
    for _ in 0..300 {
        if catalog.poll() {
            arrivals += 1;
        }
        if !catalog.is_loading() {
            return arrivals;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("world catalog did not settle");
}

fn spawner() -> Spawner {
    Spawner::from_handle(tokio::runtime::Handle::current())
}

#[tokio::test]
async fn test_catalog_ready_once() {
    let mut catalog = WorldCatalog::fetch(&api().await, &spawner());
    assert!(catalog.is_loading());
    assert!(catalog.worlds().is_empty());

    assert_eq!(settle_catalog(&mut catalog).await, 1);
    assert!(matches!(catalog, WorldCatalog::Ready(_)));
    assert_eq!(catalog.worlds().len(), 2);
    assert_eq!(catalog.worlds()[0].slug, "alaria");

    // Arrival is reported exactly once
    assert!(!catalog.poll());
    assert_eq!(catalog.worlds().len(), 2);
}

#[tokio::test]
async fn test_catalog_server_error_is_unavailable() {
    let addr = start_server().await;
    let api = ApiClient::new(&format!("http://{}/broken", addr));
    let mut catalog = WorldCatalog::fetch(&api, &spawner());

    assert_eq!(settle_catalog(&mut catalog).await, 0);
    assert!(matches!(catalog, WorldCatalog::Unavailable));
    assert!(catalog.worlds().is_empty());
    assert!(!catalog.poll());
    assert!(!catalog.is_loading());
}

#[tokio::test]
async fn test_catalog_unreachable_is_unavailable() {
    let addr = {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        listener.local_addr().unwrap()
    };
    let api = ApiClient::new(&format!("http://{}", addr));
    let mut catalog = WorldCatalog::fetch(&api, &spawner());

    assert_eq!(settle_catalog(&mut catalog).await, 0);
    assert!(matches!(catalog, WorldCatalog::Unavailable));
    assert!(catalog.worlds().is_empty());
    assert!(!catalog.poll());
}
