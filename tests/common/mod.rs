//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: a client
//! with a short timeout, targets aimed at a local wiremock server, and
//! stubs for each endpoint the cases call.

#![allow(dead_code)]

use api_contract_client::{ApiClient, ClientConfig};
use api_contract_core::LoginRequest;
use api_contract_scenarios::{CaseError, FailureKind, PetstoreTarget, ReqresTarget, Targets};
use std::time::Duration;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

pub mod fixtures;

/// Token the login stub hands out
pub const STUB_TOKEN: &str = "QpwL5tke4Pnpja7X4";

/// Create HTTP client
pub fn client() -> ApiClient {
    ApiClient::new(&ClientConfig::new().with_timeout(Duration::from_secs(5)))
        .expect("Failed to build client")
}

/// Pet-store target served by `server` under `/v2`
pub fn petstore_target(server: &MockServer) -> PetstoreTarget {
    PetstoreTarget::new(format!("{}/v2", server.uri()))
}

/// Reqres target served by `server`, with the live credentials
pub fn reqres_target(server: &MockServer) -> ReqresTarget {
    ReqresTarget::new(server.uri())
}

/// Both services served by one stub
pub fn stub_targets(server: &MockServer) -> Targets {
    Targets {
        petstore: petstore_target(server),
        reqres: reqres_target(server),
    }
}

/// Stub `POST /v2/pet`
pub async fn mount_pet_creation(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("POST"))
        .and(path("/v2/pet"))
        .and(header("content-type", "application/json"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Stub `GET /v2/pet/findByStatus?status=available`
pub async fn mount_pet_listing(server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/v2/pet/findByStatus"))
        .and(query_param("status", "available"))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Stub `POST /api/login` for the live credentials
pub async fn mount_login(server: &MockServer, response: ResponseTemplate) {
    let credentials = LoginRequest::new("eve.holt@reqres.in", "cityslicka");
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(header("content-type", "application/json"))
        .and(header("x-api-key", "reqres-free-v1"))
        .and(body_json(&credentials))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Stub `GET /api/users/2`, answering only requests that carry `token`
pub async fn mount_user(server: &MockServer, token: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/api/users/2"))
        .and(header("x-api-key", "reqres-free-v1"))
        .and(header("authorization", format!("Bearer {}", token).as_str()))
        .respond_with(response)
        .mount(server)
        .await;
}

/// Stub every endpoint with a passing response
pub async fn mount_all_passing(server: &MockServer) {
    mount_pet_creation(
        server,
        ResponseTemplate::new(200).set_body_json(fixtures::created_pet("Sumerge pets")),
    )
    .await;
    mount_pet_listing(
        server,
        ResponseTemplate::new(200).set_body_json(fixtures::available_pets()),
    )
    .await;
    mount_login(
        server,
        ResponseTemplate::new(200).set_body_json(fixtures::login_success(STUB_TOKEN)),
    )
    .await;
    mount_user(
        server,
        STUB_TOKEN,
        ResponseTemplate::new(200).set_body_json(fixtures::user(2, "janet.weaver@reqres.in")),
    )
    .await;
}

/// Requests the stub received, oldest first
pub async fn recorded(server: &MockServer) -> Vec<Request> {
    server
        .received_requests()
        .await
        .expect("Request recording is disabled")
}

/// Assert a case failed at `step` with the given failure kind
pub fn assert_failure<T: std::fmt::Debug>(
    result: &Result<T, CaseError>,
    kind: FailureKind,
    step: &str,
) {
    match result {
        Ok(value) => panic!("Expected {} failure at `{}`, case passed with {:?}", kind, step, value),
        Err(e) => {
            assert_eq!(e.kind(), kind, "Unexpected failure kind for: {}", e);
            assert_eq!(e.step(), step, "Unexpected failing step for: {}", e);
        }
    }
}

/// A local port with nothing listening on it
pub fn closed_port() -> u16 {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("Failed to bind random port");
    listener.local_addr().expect("Failed to get local address").port()
}
