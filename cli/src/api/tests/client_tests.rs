use super::*;
use axum::{extract::Path, http::StatusCode, routing::get, Json, Router};
use serde_json::{json, Value};
use tokio::net::TcpListener;

fn flight_json(id: u32, number: u32, status: &str) -> Value {
    json!({
        "id": id,
        "flightNumber": number,
        "airline": "Airline A",
        "origin": "New York",
        "destination": "Los Angeles",
        "departureTime": "2025-02-20T10:00:00Z",
        "status": status,
    })
}

async fn serve(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    format!("http://{addr}")
}

fn client_for(base_url: String) -> ApiClient {
    ApiClient::new(base_url, 5).expect("client")
}

#[tokio::test]
async fn lists_flights_from_bare_array() {
    let app = Router::new().route(
        "/flights",
        get(|| async {
            Json(json!([
                flight_json(1, 101, "On Time"),
                flight_json(2, 102, "Delayed")
            ]))
        }),
    );
    let client = client_for(serve(app).await);

    let flights = client.list_flights().await.expect("flights");
    assert_eq!(flights.len(), 2);
    assert_eq!(flights[0].id, "1");
    assert_eq!(flights[1].flight_number, "102");
    assert_eq!(flights[1].status, "Delayed");
}

#[tokio::test]
async fn lists_flights_from_wrapped_object() {
    let app = Router::new().route(
        "/flights",
        get(|| async { Json(json!({ "flights": [flight_json(1, 101, "On Time")] })) }),
    );
    let client = client_for(serve(app).await);

    let flights = client.list_flights().await.expect("flights");
    assert_eq!(flights.len(), 1);
    assert_eq!(flights[0].airline, "Airline A");
}

#[tokio::test]
async fn empty_list_is_not_an_error() {
    let app = Router::new().route("/flights", get(|| async { Json(json!([])) }));
    let client = client_for(serve(app).await);

    assert!(client.list_flights().await.expect("flights").is_empty());
}

#[tokio::test]
async fn unexpected_shape_is_unknown_failure() {
    let app = Router::new().route("/flights", get(|| async { Json(json!({ "data": [] })) }));
    let client = client_for(serve(app).await);

    let err = client.list_flights().await.unwrap_err();
    assert!(matches!(err, FetchError::Unknown { .. }), "got {err:?}");
}

#[tokio::test]
async fn missing_route_is_status_404() {
    let client = client_for(serve(Router::new()).await);

    let err = client.list_flights().await.unwrap_err();
    assert_eq!(err, FetchError::status(404, "Not Found"));
}

#[tokio::test]
async fn rate_limit_is_status_429() {
    let app = Router::new().route("/flights", get(|| async { StatusCode::TOO_MANY_REQUESTS }));
    let client = client_for(serve(app).await);

    let err = client.list_flights().await.unwrap_err();
    assert_eq!(err, FetchError::status(429, "Too Many Requests"));
}

#[tokio::test]
async fn refused_connection_is_no_response() {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let client = client_for(format!("http://{addr}"));

    let err = client.list_flights().await.unwrap_err();
    assert!(matches!(err, FetchError::NoResponse { .. }), "got {err:?}");
}

#[tokio::test]
async fn fetches_single_flight_by_id() {
    let app = Router::new().route(
        "/flights/:id",
        get(|Path(id): Path<u32>| async move { Json(flight_json(id, 100 + id, "Boarding")) }),
    );
    let client = client_for(serve(app).await);

    let flight = client.get_flight("3").await.expect("flight");
    assert_eq!(flight.id, "3");
    assert_eq!(flight.flight_number, "103");
    assert_eq!(flight.status, "Boarding");
}

#[tokio::test]
async fn single_flight_server_error_is_status_500() {
    let app = Router::new().route(
        "/flights/:id",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    );
    let client = client_for(serve(app).await);

    let err = client.get_flight("1").await.unwrap_err();
    assert_eq!(err, FetchError::status(500, "Internal Server Error"));
}

#[test]
fn trailing_slash_is_trimmed_from_base_url() {
    let client = client_for("http://localhost:9000/".to_string());
    assert_eq!(client.base_url(), "http://localhost:9000");
}
