use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

use axum::extract::{Query, RawQuery, State};
use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

use storefront_inventory::{
    InventoryClient, InventoryConfig, InventoryLookup, InventoryResult, ProductId,
};

/// One request as the stub endpoint saw it.
#[derive(Debug, Clone)]
struct SeenRequest {
    raw_query: String,
    product: Option<String>,
}

#[derive(Clone)]
struct StubEndpoint {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
}

/// Inventory endpoint stand-in bound to an ephemeral port.
struct StubServer {
    base_url: String,
    seen: Arc<Mutex<Vec<SeenRequest>>>,
    handle: tokio::task::JoinHandle<()>,
}

impl StubServer {
    async fn spawn(status: StatusCode, body: &str) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let stub = StubEndpoint {
            status,
            body: body.to_string(),
            seen: seen.clone(),
        };

        let app = Router::new()
            .route("/api/inventory", get(inventory))
            .with_state(stub);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("failed to bind ephemeral port");
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}", addr);

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base_url,
            seen,
            handle,
        }
    }

    fn client(&self) -> InventoryClient {
        client_for(&self.base_url)
    }

    fn requests(&self) -> Vec<SeenRequest> {
        self.seen.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Talk to loopback directly even if the environment configures a proxy.
fn client_for(base_url: &str) -> InventoryClient {
    let http = reqwest::Client::builder().no_proxy().build().unwrap();
    InventoryClient::with_http_client(InventoryConfig::new(base_url).unwrap(), http)
}

async fn inventory(
    State(stub): State<StubEndpoint>,
    RawQuery(raw_query): RawQuery,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    stub.seen.lock().unwrap().push(SeenRequest {
        raw_query: raw_query.unwrap_or_default(),
        product: params.get("product").cloned(),
    });

    (
        stub.status,
        [(header::CONTENT_TYPE, "application/json")],
        stub.body.clone(),
    )
        .into_response()
}

/// Collects formatted log lines written by the lookup.
#[derive(Clone, Default)]
struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    fn lines(&self) -> Vec<String> {
        let bytes = self.0.lock().unwrap().clone();
        String::from_utf8(bytes)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }
}

impl io::Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for CapturedLogs {
    type Writer = CapturedLogs;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Route WARN+ events from this crate into `logs` for the current thread.
fn capture_warnings(logs: &CapturedLogs) -> tracing::subscriber::DefaultGuard {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("storefront_inventory=warn"))
        .with_writer(logs.clone())
        .with_ansi(false)
        .without_time()
        .finish();
    tracing::subscriber::set_default(subscriber)
}

#[tokio::test]
async fn nebu_dino_resolves_available_units() {
    let srv = StubServer::spawn(StatusCode::OK, r#"{"availableUnits": 42}"#).await;

    let result = srv.client().lookup_inventory(&ProductId::from("Nebu Dino")).await;

    assert_eq!(result, InventoryResult::Units(42));
    let requests = srv.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].raw_query, "product=Nebu%20Dino");
    assert_eq!(requests[0].product.as_deref(), Some("Nebu Dino"));
}

#[tokio::test]
async fn not_found_is_unavailable() {
    let srv = StubServer::spawn(StatusCode::NOT_FOUND, r#"{"error": "not_found"}"#).await;
    let logs = CapturedLogs::default();
    let _guard = capture_warnings(&logs);

    let result = srv.client().lookup_inventory(&ProductId::from("Ghost Item")).await;

    assert_eq!(result, InventoryResult::Unavailable);
    let lines = logs.lines();
    assert_eq!(lines.len(), 1, "expected one warning, got {lines:?}");
    assert!(lines[0].contains("404"));
}

#[tokio::test]
async fn error_status_wins_over_a_count_in_the_body() {
    let srv = StubServer::spawn(StatusCode::INTERNAL_SERVER_ERROR, r#"{"availableUnits": 9}"#).await;

    let result = srv.client().lookup_inventory(&ProductId::from("Nebu Dino")).await;

    assert_eq!(result, InventoryResult::Unavailable);
}

#[tokio::test]
async fn empty_identifier_with_zero_units_is_present() {
    let srv = StubServer::spawn(StatusCode::OK, r#"{"availableUnits": 0}"#).await;

    let result = srv.client().lookup_inventory(&ProductId::from("")).await;

    assert_eq!(result, InventoryResult::Units(0));
    assert_eq!(srv.requests()[0].raw_query, "product=");
}

#[tokio::test]
async fn body_without_field_is_unavailable() {
    let srv = StubServer::spawn(StatusCode::OK, r#"{"product": "Nebu Dino"}"#).await;

    let result = srv.client().lookup_inventory(&ProductId::from("Nebu Dino")).await;

    assert_eq!(result, InventoryResult::Unavailable);
}

#[tokio::test]
async fn non_json_body_is_unavailable() {
    let srv = StubServer::spawn(StatusCode::OK, "<html>maintenance</html>").await;
    let logs = CapturedLogs::default();
    let _guard = capture_warnings(&logs);

    let result = srv.client().lookup_inventory(&ProductId::from("Nebu Dino")).await;

    assert_eq!(result, InventoryResult::Unavailable);
    assert_eq!(logs.lines().len(), 1);
}

#[tokio::test]
async fn negative_count_is_unavailable() {
    let srv = StubServer::spawn(StatusCode::OK, r#"{"availableUnits": -1}"#).await;

    let result = srv.client().lookup_inventory(&ProductId::from("Nebu Dino")).await;

    assert_eq!(result, InventoryResult::Unavailable);
}

#[tokio::test]
async fn reserved_characters_are_percent_encoded() {
    let srv = StubServer::spawn(StatusCode::OK, r#"{"availableUnits": 3}"#).await;

    let result = srv
        .client()
        .lookup_inventory(&ProductId::from("Salt & Pepper #2"))
        .await;

    assert_eq!(result, InventoryResult::Units(3));
    let requests = srv.requests();
    assert_eq!(requests[0].raw_query, "product=Salt%20%26%20Pepper%20%232");
    assert_eq!(requests[0].product.as_deref(), Some("Salt & Pepper #2"));
}

#[tokio::test]
async fn refused_connection_is_unavailable_and_logged_once() {
    // Grab a free port, then release it so nothing is listening.
    let addr = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap()
    };
    let client = client_for(&format!("http://{addr}"));

    let logs = CapturedLogs::default();
    let _guard = capture_warnings(&logs);

    let result = client.lookup_inventory(&ProductId::from("Nebu Dino")).await;

    assert_eq!(result, InventoryResult::Unavailable);
    let lines = logs.lines();
    assert_eq!(lines.len(), 1, "expected one warning, got {lines:?}");
    assert!(lines[0].contains("inventory lookup failed"));
    assert!(lines[0].contains("Nebu Dino"));
}

#[tokio::test]
async fn successful_lookup_logs_no_warning() {
    let srv = StubServer::spawn(StatusCode::OK, r#"{"availableUnits": 42}"#).await;
    let logs = CapturedLogs::default();
    let _guard = capture_warnings(&logs);

    let result = srv.client().lookup_inventory(&ProductId::from("Nebu Dino")).await;

    assert_eq!(result, InventoryResult::Units(42));
    assert!(logs.lines().is_empty());
}

#[tokio::test]
async fn concurrent_lookups_are_independent() {
    let srv = StubServer::spawn(StatusCode::OK, r#"{"availableUnits": 42}"#).await;
    let lookup: Arc<dyn InventoryLookup> = Arc::new(srv.client());
    let product = ProductId::from("Nebu Dino");

    let (a, b) = tokio::join!(
        lookup.lookup_inventory(&product),
        lookup.lookup_inventory(&product)
    );

    assert_eq!(a, InventoryResult::Units(42));
    assert_eq!(b, InventoryResult::Units(42));
    assert_eq!(srv.requests().len(), 2);
}
