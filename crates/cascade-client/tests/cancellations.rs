//! Cancellation workflow against a mocked Cascade endpoint.

use cascade_client::{CascadeClient, ClientOptions};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const CANCELLATION_PATH: &str =
    "/customers/cust.example.com/subscriptions/PRODCODE/cancellation-request";

fn client(server: &MockServer) -> CascadeClient {
    CascadeClient::with_options(
        "svc-user",
        "s3cret",
        ClientOptions::with_base_url(server.uri()),
    )
    .unwrap()
}

fn cancellation_date() -> chrono::NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

#[tokio::test]
async fn submit_then_abort_issue_one_call_each_and_leave_nothing_pending() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(CANCELLATION_PATH))
        .and(body_json(json!({
            "CancellationDateRequested": "2024-01-15 00:00:00"
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    Mock::given(method("DELETE"))
        .and(path(CANCELLATION_PATH))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    // After the abort, Cascade reports no pending request.
    Mock::given(method("GET"))
        .and(path(CANCELLATION_PATH))
        .respond_with(ResponseTemplate::new(404))
        .expect(1)
        .mount(&server)
        .await;

    let client = client(&server);
    client
        .submit_cancellation_request("cust.example.com", "PRODCODE", cancellation_date())
        .await
        .unwrap();
    client
        .abort_cancellation_request("cust.example.com", "PRODCODE")
        .await
        .unwrap();

    let pending = client
        .get_cancellation_request("cust.example.com", "PRODCODE")
        .await
        .unwrap();
    assert_eq!(pending, None);
}

#[tokio::test]
async fn pending_cancellation_is_returned_with_its_date() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path(CANCELLATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "CancellationDateRequested": "2024-01-15 00:00:00"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let pending = client(&server)
        .get_cancellation_request("cust.example.com", "PRODCODE")
        .await
        .unwrap()
        .expect("a pending request");
    assert_eq!(pending.date_requested, cancellation_date());
}
