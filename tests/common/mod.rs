use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde_json::{json, Value};

/// Every `(path, body)` the fake service received, in arrival order.
pub type Received = Arc<Mutex<Vec<(String, Value)>>>;

#[derive(Clone)]
struct FakeService {
    received: Received,
    answer: Answer,
}

/// What the fake service replies to every route.
#[derive(Clone)]
pub enum Answer {
    /// 200 with a deterministic array of `n` samples
    Samples(usize),
    /// The given status with a `{"error": ..}` body
    Error(StatusCode, &'static str),
    /// 200 with a body that is not JSON
    Garbage,
}

/// One sample per day from 2024-01-01, longitude increasing by one degree per day from 280.
pub fn samples(n: usize) -> Value {
    let items: Vec<Value> = (0..n)
        .map(|i| {
            json!({
                "date": {"year": 2024, "month": 1, "day": i + 1, "hour": 8, "minute": 0, "second": 0, "tz": 8.0},
                "long": 280.0 + i as f64
            })
        })
        .collect();
    Value::Array(items)
}

async fn handle(State(service): State<FakeService>, uri: Uri, Json(body): Json<Value>) -> Response {
    service
        .received
        .lock()
        .unwrap()
        .push((uri.path().to_string(), body));

    match service.answer {
        Answer::Samples(n) => Json(samples(n)).into_response(),
        Answer::Error(status, message) => (status, Json(json!({ "error": message }))).into_response(),
        Answer::Garbage => "<html>gateway</html>".into_response(),
    }
}

/// Serve the three longitude routes under `/api` on an ephemeral local port.
///
/// Return
/// ------
/// * the base URL to give to the client, and the log of received requests
pub async fn spawn_service(answer: Answer) -> (String, Received) {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let service = FakeService {
        received: received.clone(),
        answer,
    };

    let app = Router::new()
        .route("/api/sun", post(handle))
        .route("/api/moon", post(handle))
        .route("/api/new_moon", post(handle))
        .with_state(service);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr: SocketAddr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{addr}/api"), received)
}
