//! Fake Ampio server for tests.
//!
//! Serves canned responses on a random local port. Sessions built by
//! [`FakeAmpio::session`] resolve the production host name to that port,
//! so requests use the real host name and the real paths.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::task::JoinHandle;

use super::client::AmpioConfig;
use super::convert::fixtures;

/// Host name the fake answers for.
pub const AMPIO_HOST: &str = "smog1.ampio.pl";

/// Station that answers with a summary first and a history afterwards.
pub const CHANGING_STATION: &str = "20";

/// Station that answers with a summary first and then stalls for
/// [`SLOW_STATION_DELAY`] before every later answer.
pub const SLOW_STATION: &str = "8";

/// How long [`SLOW_STATION`] stalls after its first answer.
pub const SLOW_STATION_DELAY: Duration = Duration::from_secs(10);

#[derive(Clone, Default)]
struct FakeState {
    changing_hits: Arc<AtomicUsize>,
    slow_hits: Arc<AtomicUsize>,
}

/// A running fake Ampio server.
pub struct FakeAmpio {
    addr: SocketAddr,
    handle: JoinHandle<()>,
}

impl FakeAmpio {
    /// Start the server on `127.0.0.1` with an OS-assigned port.
    pub async fn start() -> Self {
        let app = Router::new()
            .route("/api/devices/:sensor_id", get(device))
            .route("/lastHour/:sensor_id", get(last_hour))
            .with_state(FakeState::default());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, handle }
    }

    /// A session whose DNS sends the Ampio host to this server.
    pub fn session(&self) -> reqwest::Client {
        fake_session_builder(self.addr).build().unwrap()
    }

    /// Like [`session`](Self::session), with a whole-request timeout.
    pub fn session_with_timeout(&self, timeout: Duration) -> reqwest::Client {
        fake_session_builder(self.addr)
            .timeout(timeout)
            .build()
            .unwrap()
    }

    /// Endpoint config pointing at this server's port.
    pub fn config(&self) -> AmpioConfig {
        AmpioConfig::new().with_base_url(format!("http://{AMPIO_HOST}:{}", self.addr.port()))
    }

    /// Stop accepting connections.
    pub async fn stop(self) {
        self.handle.abort();
        let _ = self.handle.await;
    }
}

/// A session and config aimed at a local port nothing listens on.
pub fn unreachable_config() -> (reqwest::Client, AmpioConfig) {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = AmpioConfig::new().with_base_url(format!("http://{AMPIO_HOST}:{}", addr.port()));
    (fake_session_builder(addr).build().unwrap(), config)
}

/// Start a session that resolves [`AMPIO_HOST`] to `addr`.
///
/// Idle connections are not pooled, so a stopped server is unreachable on
/// the very next request.
fn fake_session_builder(addr: SocketAddr) -> reqwest::ClientBuilder {
    reqwest::Client::builder()
        .resolve(AMPIO_HOST, addr)
        .pool_max_idle_per_host(0)
        .no_proxy()
}

async fn device(State(state): State<FakeState>, Path(sensor_id): Path<String>) -> Response {
    match sensor_id.as_str() {
        "16" => Json(fixtures::device_summary()).into_response(),
        "10" => Json(json!([])).into_response(),
        "9" => "Hello, world".into_response(),
        "7" => Json(json!(42)).into_response(),
        "5" => Json(json!({
            "devName": 12,
            "lastPM10": "thirty",
            "lastPM25": 28,
            "humidity": null,
            "pressure": 1021.710022,
            "lat": "50.35718",
            "lon": 19.06775
        }))
        .into_response(),
        CHANGING_STATION => {
            if state.changing_hits.fetch_add(1, Ordering::SeqCst) == 0 {
                Json(fixtures::device_summary()).into_response()
            } else {
                Json(fixtures::last_hour()).into_response()
            }
        }
        SLOW_STATION => {
            if state.slow_hits.fetch_add(1, Ordering::SeqCst) > 0 {
                tokio::time::sleep(SLOW_STATION_DELAY).await;
            }
            Json(fixtures::device_summary()).into_response()
        }
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn last_hour(Path(sensor_id): Path<String>) -> Response {
    match sensor_id.as_str() {
        "16" => Json(fixtures::last_hour()).into_response(),
        "10" => Json(json!([])).into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}
