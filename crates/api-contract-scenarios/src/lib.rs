//! Contract cases for the demonstration APIs
//!
//! Three independent cases, each a self-contained scenario:
//!
//! | Case | Service | Request |
//! |------|---------|---------|
//! | [`CaseName::CreatePet`] | pet-store | `POST /pet` |
//! | [`CaseName::GetAvailablePets`] | pet-store | `GET /pet/findByStatus?status=available` |
//! | [`CaseName::ReqresLogin`] | reqres | `POST /api/login`, then `GET /api/users/2` |
//!
//! Every case takes the base URL of its service from a target, so the same
//! case runs against the live service or a local stub. The first failing
//! check ends a case; the remaining cases of a suite still run.

pub mod available_pets;
pub mod create_pet;
pub mod error;
pub mod reqres_login;
pub mod suite;
pub mod targets;
pub mod transcript;

pub use available_pets::{get_available_pets, ListedPet};
pub use create_pet::create_pet;
pub use error::{CaseError, FailureKind, UnknownCase};
pub use reqres_login::{fetch_user, login, reqres_login, LoginSession};
pub use suite::{run_case, run_suite, CaseName, CaseOutcome, SuiteReport};
pub use targets::{PetstoreTarget, ReqresTarget, Targets};
pub use transcript::Transcript;
