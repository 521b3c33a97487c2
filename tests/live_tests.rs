//! Live Service Tests
//!
//! The contract cases against the public demonstration services. These need
//! outbound HTTPS and are ignored by default:
//!
//! ```bash
//! cargo test --test live_tests -- --ignored
//! ```

mod common;

use api_contract_scenarios::{run_case, CaseName, Targets};
use common::client;

async fn run_live(case: CaseName) {
    let outcome = run_case(case, &client(), &Targets::default()).await;
    assert!(outcome.passed(), "{}", outcome.summary());
}

#[tokio::test]
#[ignore = "requires network access to petstore.swagger.io"]
async fn test_create_pet() {
    run_live(CaseName::CreatePet).await;
}

#[tokio::test]
#[ignore = "requires network access to petstore.swagger.io"]
async fn test_get_available_pets() {
    run_live(CaseName::GetAvailablePets).await;
}

#[tokio::test]
#[ignore = "requires network access to reqres.in"]
async fn test_reqres_login() {
    run_live(CaseName::ReqresLogin).await;
}
