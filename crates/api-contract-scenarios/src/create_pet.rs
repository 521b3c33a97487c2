//! CreatePet: submit a pet record and check the service echoes it back

use api_contract_client::ApiClient;
use api_contract_core::{assertions, json_path, Pet, PetStatus};
use tracing::debug;

use crate::error::{expect_status, AtStep, CaseError};
use crate::targets::PetstoreTarget;
use crate::transcript::Transcript;

/// Name submitted with the pet and expected back in the response
pub const PET_NAME: &str = "Sumerge pets";

const STEP: &str = "create pet";

/// Body sent to `POST /pet`
pub fn request_body() -> Pet {
    Pet::placeholder(PET_NAME, PetStatus::Available)
}

/// Run the case, returning the name the service echoed
///
/// Emits the status line and the pretty-printed body before any check, and
/// `Pet Created: <name>` once the name matched.
pub async fn create_pet(
    client: &ApiClient,
    target: &PetstoreTarget,
    transcript: &mut Transcript,
) -> Result<String, CaseError> {
    let response = client
        .request(&target.base_url)
        .header("Content-Type", "application/json")
        .json(&request_body())
        .at(STEP)?
        .post("/pet")
        .await
        .at(STEP)?;

    transcript.emit(response.status_line());
    transcript.emit(response.pretty_body());

    expect_status(STEP, &response, 200)?;

    let body = response.json().at(STEP)?;
    let name = json_path::lookup(body, "name").at(STEP)?;
    assertions::equals("name", name, PET_NAME).at(STEP)?;

    let name = json_path::render_value(name);
    debug!(name = %name, "Pet echoed by service");
    transcript.emit(format!("Pet Created: {}", name));

    Ok(name)
}
