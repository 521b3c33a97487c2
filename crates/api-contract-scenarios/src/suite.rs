//! Running cases and aggregating verdicts

use api_contract_client::ApiClient;
use std::fmt;
use std::str::FromStr;
use std::time::{Duration, Instant};
use tracing::{info, warn};

use crate::error::{CaseError, UnknownCase};
use crate::targets::Targets;
use crate::transcript::Transcript;
use crate::{available_pets, create_pet, reqres_login};

/// The cases of the suite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseName {
    CreatePet,
    GetAvailablePets,
    ReqresLogin,
}

impl CaseName {
    /// Every case, in the order the runner executes them by default
    pub const ALL: [CaseName; 3] = [
        CaseName::CreatePet,
        CaseName::GetAvailablePets,
        CaseName::ReqresLogin,
    ];

    /// Kebab-case selector, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::CreatePet => "create-pet",
            Self::GetAvailablePets => "get-available-pets",
            Self::ReqresLogin => "reqres-login",
        }
    }
}

impl fmt::Display for CaseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CaseName {
    type Err = UnknownCase;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
        Self::ALL
            .into_iter()
            .find(|case| case.as_str() == normalized)
            .ok_or_else(|| UnknownCase(s.to_string()))
    }
}

/// Verdict and output of one case
#[derive(Debug)]
pub struct CaseOutcome {
    pub case: CaseName,
    pub result: Result<(), CaseError>,
    pub transcript: Transcript,
    pub elapsed: Duration,
}

impl CaseOutcome {
    pub fn passed(&self) -> bool {
        self.result.is_ok()
    }

    pub fn error(&self) -> Option<&CaseError> {
        self.result.as_ref().err()
    }

    /// One-line verdict, e.g. `PASS create-pet (412 ms)`
    pub fn summary(&self) -> String {
        let elapsed_ms = self.elapsed.as_millis();
        match &self.result {
            Ok(()) => format!("PASS {} ({} ms)", self.case, elapsed_ms),
            Err(e) => format!("FAIL {} ({} ms) [{}] {}", self.case, elapsed_ms, e.kind(), e),
        }
    }
}

/// Run one case with a fresh transcript
///
/// Cases share nothing but the HTTP client, so a case's verdict does not
/// depend on which other cases ran before it.
pub async fn run_case(case: CaseName, client: &ApiClient, targets: &Targets) -> CaseOutcome {
    let mut transcript = Transcript::new();
    info!(case = %case, "Running case");
    let started = Instant::now();

    let result = match case {
        CaseName::CreatePet => {
            create_pet::create_pet(client, &targets.petstore, &mut transcript)
                .await
                .map(|_| ())
        }
        CaseName::GetAvailablePets => {
            available_pets::get_available_pets(client, &targets.petstore, &mut transcript)
                .await
                .map(|_| ())
        }
        CaseName::ReqresLogin => {
            reqres_login::reqres_login(client, &targets.reqres, &mut transcript)
                .await
                .map(|_| ())
        }
    };

    let elapsed = started.elapsed();
    match &result {
        Ok(()) => info!(case = %case, elapsed_ms = elapsed.as_millis() as u64, "Case passed"),
        Err(e) => warn!(
            case = %case,
            step = e.step(),
            kind = %e.kind(),
            error = %e,
            "Case failed"
        ),
    }

    CaseOutcome {
        case,
        result,
        transcript,
        elapsed,
    }
}

/// Run `cases` one after another
///
/// A failing case does not stop the ones after it.
pub async fn run_suite(cases: &[CaseName], client: &ApiClient, targets: &Targets) -> SuiteReport {
    let mut outcomes = Vec::with_capacity(cases.len());
    for &case in cases {
        outcomes.push(run_case(case, client, targets).await);
    }

    let report = SuiteReport { outcomes };
    info!(
        total = report.total(),
        passed = report.passed(),
        failed = report.failed(),
        "Suite finished"
    );
    report
}

/// Aggregated verdicts of a suite run
#[derive(Debug, Default)]
pub struct SuiteReport {
    pub outcomes: Vec<CaseOutcome>,
}

impl SuiteReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed()).count()
    }

    pub fn failed(&self) -> usize {
        self.total() - self.passed()
    }

    pub fn all_passed(&self) -> bool {
        self.failed() == 0
    }

    /// Outcome of `case`, if it ran
    pub fn outcome(&self, case: CaseName) -> Option<&CaseOutcome> {
        self.outcomes.iter().find(|o| o.case == case)
    }

    /// Process exit code: 0 when every case passed, 1 otherwise
    pub fn exit_code(&self) -> u8 {
        if self.all_passed() {
            0
        } else {
            1
        }
    }

    /// One verdict line per case followed by a totals line
    pub fn summary(&self) -> String {
        let mut lines: Vec<String> = self.outcomes.iter().map(CaseOutcome::summary).collect();
        lines.push(format!(
            "{} cases: {} passed, {} failed",
            self.total(),
            self.passed(),
            self.failed()
        ));
        lines.join("\n")
    }
}
