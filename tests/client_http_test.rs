mod common;

use std::time::Duration;

use axum::http::StatusCode;
use common::{samples, spawn_service, Answer};
use horolong::{
    Body, ClientConfig, DateRangeRequest, DateValue, HoroDateTime, HoroLongError, LongClient,
    LongResponser,
};

fn january_request() -> DateRangeRequest {
    DateRangeRequest::new(
        DateValue::new(2024, 1, 1, 0, 0, 0),
        DateValue::new(2024, 1, 4, 0, 0, 0),
    )
}

async fn client_for(answer: Answer) -> (LongClient, common::Received) {
    let (base_url, received) = spawn_service(answer).await;
    let config = ClientConfig::default()
        .with_base_url(base_url)
        .with_timeout(Duration::from_secs(5));
    (LongClient::new(&config).unwrap(), received)
}

#[tokio::test]
async fn test_sun_long_over_http() {
    let (client, received) = client_for(Answer::Samples(3)).await;

    let longs = client.sun_long(&january_request()).await.unwrap();
    assert_eq!(
        longs,
        serde_json::from_value::<Vec<LongResponser>>(samples(3)).unwrap()
    );
    assert_eq!(
        longs[0],
        LongResponser::new(
            HoroDateTime::new(DateValue::new(2024, 1, 1, 8, 0, 0), 8.0),
            280.0
        )
    );

    let received = received.lock().unwrap().clone();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].0, "/api/sun");
    assert_eq!(
        received[0].1,
        serde_json::to_value(january_request()).unwrap()
    );
}

#[tokio::test]
async fn test_every_route_over_http() {
    let (client, received) = client_for(Answer::Samples(2)).await;
    let request = january_request();

    assert_eq!(client.sun_long(&request).await.unwrap().len(), 2);
    assert_eq!(client.moon_long(&request).await.unwrap().len(), 2);
    assert_eq!(client.new_moon_long(&request).await.unwrap().len(), 2);

    let paths: Vec<String> = received
        .lock()
        .unwrap()
        .iter()
        .map(|(path, _)| path.clone())
        .collect();
    assert_eq!(paths, vec!["/api/sun", "/api/moon", "/api/new_moon"]);
}

#[tokio::test]
async fn test_large_answer_keeps_order() {
    let (client, _) = client_for(Answer::Samples(28)).await;

    let longs = client
        .longitudes(Body::Moon, &january_request())
        .await
        .unwrap();
    assert_eq!(longs.len(), 28);
    for (i, sample) in longs.iter().enumerate() {
        assert_eq!(usize::from(sample.date.day), i + 1);
        assert_eq!(sample.long, 280.0 + i as f64);
    }
}

#[tokio::test]
async fn test_server_error_is_propagated() {
    let (client, received) = client_for(Answer::Error(
        StatusCode::BAD_REQUEST,
        "start date must be before end date",
    ))
    .await;

    let err = client.new_moon_long(&january_request()).await.unwrap_err();
    assert_eq!(err.status(), Some(400));
    match err {
        HoroLongError::Status { status, body } => {
            assert_eq!(status, 400);
            assert_eq!(body, r#"{"error":"start date must be before end date"}"#);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(received.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_internal_error_is_propagated() {
    let (client, _) = client_for(Answer::Error(
        StatusCode::INTERNAL_SERVER_ERROR,
        "ephemeris files are missing",
    ))
    .await;

    let err = client.sun_long(&january_request()).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
}

#[tokio::test]
async fn test_garbage_body_is_a_deserialize_error() {
    let (client, _) = client_for(Answer::Garbage).await;

    let err = client.moon_long(&january_request()).await.unwrap_err();
    assert!(matches!(err, HoroLongError::Deserialize(_)));
}

#[tokio::test]
async fn test_unknown_route_is_a_status_error() {
    let (base_url, _) = spawn_service(Answer::Samples(1)).await;
    // routes live under /api, so the bare host answers 404
    let config = ClientConfig::default().with_base_url(base_url.trim_end_matches("/api"));
    let client = LongClient::new(&config).unwrap();

    let err = client.sun_long(&january_request()).await.unwrap_err();
    assert_eq!(err.status(), Some(404));
}

#[tokio::test]
async fn test_unreachable_service_is_a_transport_error() {
    // bind then drop a listener to get a port nobody listens on
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let config = ClientConfig::default()
        .with_base_url(format!("http://{addr}/api"))
        .with_timeout(Duration::from_secs(2));
    let client = LongClient::new(&config).unwrap();

    let err = client.sun_long(&january_request()).await.unwrap_err();
    assert!(matches!(err, HoroLongError::Transport(_)));
}

#[tokio::test]
async fn test_concurrent_requests_over_http() {
    let (client, received) = client_for(Answer::Samples(3)).await;
    let request = january_request();

    let (sun, moon, new_moon) = tokio::join!(
        client.sun_long(&request),
        client.moon_long(&request),
        client.new_moon_long(&request)
    );
    assert_eq!(sun.unwrap().len(), 3);
    assert_eq!(moon.unwrap().len(), 3);
    assert_eq!(new_moon.unwrap().len(), 3);
    assert_eq!(received.lock().unwrap().len(), 3);
}
