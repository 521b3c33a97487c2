//! GetAvailablePets Integration Tests
//!
//! Runs the GetAvailablePets case against a local stub of the pet-store
//! service.

mod common;

use api_contract_core::PathError;
use api_contract_scenarios::{get_available_pets, CaseError, FailureKind, PetstoreTarget, Transcript};
use common::{assert_failure, client, fixtures, mount_pet_listing, petstore_target, recorded};
use serde_json::{json, Value};
use wiremock::{MockServer, ResponseTemplate};

#[tokio::test]
async fn test_get_available_pets_happy_path() {
    let server = MockServer::start().await;
    mount_pet_listing(
        &server,
        ResponseTemplate::new(200).set_body_json(fixtures::available_pets()),
    )
    .await;

    let mut transcript = Transcript::new();
    let pet = get_available_pets(&client(), &petstore_target(&server), &mut transcript)
        .await
        .expect("Case failed");

    assert_eq!(pet.name, json!("kitty"));
    assert_eq!(pet.status, json!("available"));
    assert_eq!(transcript.lines(), &["Pet Name: kitty", "Pet Status: available"]);
}

#[tokio::test]
async fn test_get_available_pets_query_encoding() {
    let server = MockServer::start().await;
    mount_pet_listing(
        &server,
        ResponseTemplate::new(200).set_body_json(fixtures::available_pets()),
    )
    .await;

    get_available_pets(&client(), &petstore_target(&server), &mut Transcript::new())
        .await
        .expect("Case failed");

    let requests = recorded(&server).await;
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method.as_str(), "GET");
    assert_eq!(requests[0].url.path(), "/v2/pet/findByStatus");
    assert_eq!(requests[0].url.query(), Some("status=available"));
}

#[test]
fn test_get_available_pets_live_url() {
    let client = client();
    let url = client
        .request(PetstoreTarget::default().base_url)
        .query("status", "available")
        .url("/pet/findByStatus")
        .unwrap();

    assert_eq!(
        url.as_str(),
        "https://petstore.swagger.io/v2/pet/findByStatus?status=available"
    );
}

#[tokio::test]
async fn test_get_available_pets_values_are_not_asserted() {
    let server = MockServer::start().await;
    mount_pet_listing(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "doggie", "status": "available" },
            { "id": 2, "name": null, "status": "sold" }
        ])),
    )
    .await;

    let mut transcript = Transcript::new();
    let pet = get_available_pets(&client(), &petstore_target(&server), &mut transcript)
        .await
        .expect("Case failed");

    assert_eq!(pet.name, Value::Null);
    assert!(transcript.contains("Pet Name: null"));
    assert!(transcript.contains("Pet Status: sold"));
}

#[tokio::test]
async fn test_get_available_pets_missing_name_reads_as_null() {
    let server = MockServer::start().await;
    mount_pet_listing(
        &server,
        ResponseTemplate::new(200).set_body_json(json!([
            { "id": 1, "name": "doggie", "photoUrls": [], "tags": [], "status": "available" },
            { "id": 2, "photoUrls": [], "tags": [], "status": "available" }
        ])),
    )
    .await;

    let mut transcript = Transcript::new();
    let pet = get_available_pets(&client(), &petstore_target(&server), &mut transcript)
        .await
        .expect("Case failed");

    assert_eq!(pet.name, Value::Null);
    assert_eq!(pet.status, json!("available"));
    assert_eq!(transcript.lines(), &["Pet Name: null", "Pet Status: available"]);
}

#[tokio::test]
async fn test_get_available_pets_needs_two_pets() {
    let server = MockServer::start().await;
    mount_pet_listing(
        &server,
        ResponseTemplate::new(200).set_body_json(fixtures::single_pet()),
    )
    .await;

    let mut transcript = Transcript::new();
    let result = get_available_pets(&client(), &petstore_target(&server), &mut transcript).await;

    assert_failure(&result, FailureKind::Assertion, "list available pets");
    assert!(matches!(
        result,
        Err(CaseError::Path {
            source: PathError::IndexOutOfBounds { index: 1, len: 1, .. },
            ..
        })
    ));
    assert!(transcript.lines().is_empty());
}

#[tokio::test]
async fn test_get_available_pets_server_error_fails() {
    let server = MockServer::start().await;
    mount_pet_listing(&server, ResponseTemplate::new(500)).await;

    let result = get_available_pets(&client(), &petstore_target(&server), &mut Transcript::new()).await;

    assert_failure(&result, FailureKind::Protocol, "list available pets");
}
