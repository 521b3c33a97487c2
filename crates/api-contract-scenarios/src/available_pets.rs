//! GetAvailablePets: list pets by status and report the second one

use api_contract_client::ApiClient;
use api_contract_core::{json_path, PetStatus};
use serde_json::Value;

use crate::error::{expect_status, AtStep, CaseError};
use crate::targets::PetstoreTarget;
use crate::transcript::Transcript;

const STEP: &str = "list available pets";

/// Fields read from the second pet of the listing
///
/// Reported but not checked: the live service's data changes over time.
#[derive(Debug, Clone, PartialEq)]
pub struct ListedPet {
    pub name: Value,
    pub status: Value,
}

/// Run the case
///
/// Passes on a 200 whose body has a second element; that element's `name`
/// and `status` are emitted whatever they contain. A missing member prints
/// as `null`.
pub async fn get_available_pets(
    client: &ApiClient,
    target: &PetstoreTarget,
    transcript: &mut Transcript,
) -> Result<ListedPet, CaseError> {
    let response = client
        .request(&target.base_url)
        .query("status", PetStatus::Available.as_str())
        .get("/pet/findByStatus")
        .await
        .at(STEP)?;

    expect_status(STEP, &response, 200)?;

    let body = response.json().at(STEP)?;
    let name = json_path::lookup_or_null(body, "[1].name").at(STEP)?.clone();
    let status = json_path::lookup_or_null(body, "[1].status").at(STEP)?.clone();

    transcript.emit(format!("Pet Name: {}", json_path::render_value(&name)));
    transcript.emit(format!("Pet Status: {}", json_path::render_value(&status)));

    Ok(ListedPet { name, status })
}
