//! ReqresLogin: log in, then fetch a user with the issued token
//!
//! The token is opaque. It is only echoed back as a bearer credential; its
//! format is never checked.

use api_contract_client::ApiClient;
use api_contract_core::{assertions, json_path};
use serde_json::Value;

use crate::error::{expect_status, AtStep, CaseError};
use crate::targets::ReqresTarget;
use crate::transcript::Transcript;

/// User fetched in the second step
pub const USER_ID: i64 = 2;

/// Domain every reqres user email ends with
pub const EMAIL_DOMAIN: &str = "@reqres.in";

const API_KEY_HEADER: &str = "x-api-key";
const LOGIN_STEP: &str = "login";
const FETCH_STEP: &str = "fetch user";

/// Outcome of both steps
#[derive(Debug, Clone, PartialEq)]
pub struct LoginSession {
    pub token: String,
    pub user: Value,
}

/// Run both steps; a failed login ends the case before the user is fetched
pub async fn reqres_login(
    client: &ApiClient,
    target: &ReqresTarget,
    transcript: &mut Transcript,
) -> Result<LoginSession, CaseError> {
    let token = login(client, target, transcript).await?;
    let user = fetch_user(client, target, &token, transcript).await?;
    Ok(LoginSession { token, user })
}

/// Step 1: `POST /api/login`, returning the token
pub async fn login(
    client: &ApiClient,
    target: &ReqresTarget,
    transcript: &mut Transcript,
) -> Result<String, CaseError> {
    let response = client
        .request(&target.base_url)
        .header("Content-Type", "application/json")
        .header(API_KEY_HEADER, &target.api_key)
        .json(&target.credentials())
        .at(LOGIN_STEP)?
        .post("/api/login")
        .await
        .at(LOGIN_STEP)?;

    expect_status(LOGIN_STEP, &response, 200)?;

    let body = response.json().at(LOGIN_STEP)?;
    let token = json_path::lookup_str(body, "token").at(LOGIN_STEP)?.to_string();
    transcript.emit(format!("Token: {}", token));

    Ok(token)
}

/// Step 2: `GET /api/users/2` with `Authorization: Bearer <token>`
///
/// Emits the whole response (status line, headers, body) once the status
/// matched, then checks `data.id` and `data.email`.
pub async fn fetch_user(
    client: &ApiClient,
    target: &ReqresTarget,
    token: &str,
    transcript: &mut Transcript,
) -> Result<Value, CaseError> {
    let response = client
        .request(&target.base_url)
        .header(API_KEY_HEADER, &target.api_key)
        .header("Authorization", format!("Bearer {}", token))
        .get(&format!("/api/users/{}", USER_ID))
        .await
        .at(FETCH_STEP)?;

    expect_status(FETCH_STEP, &response, 200)?;
    transcript.emit(response.render_all());

    let body = response.json().at(FETCH_STEP)?;

    let id = json_path::lookup(body, "data.id").at(FETCH_STEP)?;
    assertions::equals("data.id", id, &USER_ID).at(FETCH_STEP)?;

    let email = json_path::lookup_str(body, "data.email").at(FETCH_STEP)?;
    assertions::contains_substring("data.email", email, EMAIL_DOMAIN).at(FETCH_STEP)?;

    Ok(body.clone())
}
