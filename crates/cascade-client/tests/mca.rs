//! MCA acceptance and Microsoft tenant provisioning against a mocked
//! Cascade endpoint.

use cascade_client::{CascadeClient, ClientOptions, McaAcceptance};
use chrono::NaiveDate;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> CascadeClient {
    CascadeClient::with_options(
        "svc-user",
        "s3cret",
        ClientOptions::with_base_url(server.uri()),
    )
    .unwrap()
}

#[tokio::test]
async fn accept_mca_places_the_numeric_country_id_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/customers/cust.example.com/McaAcceptance"))
        .and(body_json(json!({
            "DateAccepted": "2019-02-06T00:00:00",
            "FirstName": "Ada",
            "Surname": "Lovelace",
            "PhoneNumber": "+44 20 7946 0000",
            "EmailAddress": "ada@cust.example.com",
            "AddressLine1": "1 High Street",
            "Postcode": "SW1A 1AA",
            "CountryId": 26,
            "AgreementUrl": "https://aka.ms/customeragreement",
        })))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let acceptance = McaAcceptance::new(
        NaiveDate::from_ymd_opt(2019, 2, 6)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap(),
        "Ada",
        "Lovelace",
        "+44 20 7946 0000",
        "ada@cust.example.com",
        "1 High Street",
        "SW1A 1AA",
        26,
    );

    client(&server)
        .accept_mca("cust.example.com", &acceptance)
        .await
        .unwrap();
}

#[tokio::test]
async fn get_customer_mca_parses_the_recorded_acceptance() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/cust.example.com/McaAcceptance"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "DateAccepted": "2019-02-06T00:00:00",
            "FirstName": "Ada",
            "Surname": "Lovelace",
            "PhoneNumber": "+44 20 7946 0000",
            "EmailAddress": "ada@cust.example.com",
            "AddressLine1": "1 High Street",
            "Postcode": "SW1A 1AA",
            "CountryId": 26,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let acceptance = client(&server)
        .get_customer_mca("cust.example.com")
        .await
        .unwrap();
    assert_eq!(acceptance.first_name, "Ada");
    assert_eq!(acceptance.country_id, 26);
    // Absent in the response, filled with the standard agreement URL.
    assert_eq!(acceptance.agreement_url, "https://aka.ms/customeragreement");
}

#[tokio::test]
async fn create_tenant_appends_the_onmicrosoft_suffix() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path(
            "/customers/cust.example.com/MicrosoftTenant/contoso.onmicrosoft.com",
        ))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .create_tenant("cust.example.com", "contoso")
        .await
        .unwrap();
}

#[tokio::test]
async fn get_customer_tenant_keeps_undocumented_fields() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/customers/cust.example.com/MicrosoftTenantAssociation"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "TenantDomain": "contoso.onmicrosoft.com",
            "TenantId": "e7f1c9be-0000-0000-0000-000000000000",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let association = client(&server)
        .get_customer_tenant("cust.example.com")
        .await
        .unwrap();
    assert_eq!(
        association.tenant_domain.as_deref(),
        Some("contoso.onmicrosoft.com")
    );
    assert_eq!(
        association.extra["TenantId"],
        json!("e7f1c9be-0000-0000-0000-000000000000")
    );
}
