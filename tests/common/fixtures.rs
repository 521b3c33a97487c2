//! Test fixtures
//!
//! Response bodies shaped like the ones the live services return.

use api_contract_core::{LoginResponse, Pet, PetStatus, User, UserEnvelope};
use serde_json::{json, Value};

/// Pet-store echo of a created pet
pub fn created_pet(name: &str) -> Value {
    let mut pet = Pet::placeholder(name, PetStatus::Available);
    pet.id = 9_223_372_036_854_775_807;
    serde_json::to_value(pet).expect("Failed to serialize pet")
}

/// `findByStatus` listing with three available pets
pub fn available_pets() -> Value {
    let pets: Vec<Pet> = ["doggie", "kitty", "rex"]
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let mut pet = Pet::placeholder(*name, PetStatus::Available);
            pet.id = i as i64 + 1;
            pet
        })
        .collect();
    serde_json::to_value(pets).expect("Failed to serialize pets")
}

/// Listing with a single pet
pub fn single_pet() -> Value {
    json!([{ "id": 1, "name": "doggie", "photoUrls": [], "tags": [], "status": "available" }])
}

/// Successful login
pub fn login_success(token: &str) -> Value {
    serde_json::to_value(LoginResponse {
        token: token.to_string(),
    })
    .expect("Failed to serialize login response")
}

/// Rejected login, as reqres answers unknown credentials
pub fn login_failure() -> Value {
    json!({ "error": "user not found" })
}

/// `GET /api/users/{id}` body
pub fn user(id: i64, email: &str) -> Value {
    let mut body = serde_json::to_value(UserEnvelope {
        data: User {
            id,
            email: email.to_string(),
            first_name: "Janet".to_string(),
            last_name: "Weaver".to_string(),
            avatar: format!("https://reqres.in/img/faces/{}-image.jpg", id),
        },
    })
    .expect("Failed to serialize user");
    body["support"] = json!({
        "url": "https://contentcaddy.io?utm_source=reqres&utm_medium=json&utm_campaign=referral",
        "text": "Tired of writing endless social media content? Let Content Caddy generate it for you."
    });
    body
}
