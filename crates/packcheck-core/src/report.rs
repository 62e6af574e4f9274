//! Aggregated outcome of a manifest run, consumable by a test harness.

use serde::Serialize;
use std::fmt;

use crate::check::CheckError;

/// What a single check examined.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum CheckSubject {
    /// A string resource identifier.
    String { id: String },
    /// A relative asset path.
    Asset { path: String },
}

impl CheckSubject {
    pub fn string(id: &str) -> Self {
        CheckSubject::String { id: id.to_string() }
    }

    pub fn asset(path: &str) -> Self {
        CheckSubject::Asset {
            path: path.to_string(),
        }
    }
}

impl fmt::Display for CheckSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CheckSubject::String { id } => write!(f, "string `{id}`"),
            CheckSubject::Asset { path } => write!(f, "asset `{path}`"),
        }
    }
}

/// One executed check: pass, or fail with the rendered reason.
#[derive(Debug, Clone, Serialize)]
pub struct CheckOutcome {
    #[serde(flatten)]
    pub subject: CheckSubject,
    pub passed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

/// Ordered outcomes of one manifest run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CheckReport {
    pub outcomes: Vec<CheckOutcome>,
}

impl CheckReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_pass(&mut self, subject: CheckSubject) {
        self.outcomes.push(CheckOutcome {
            subject,
            passed: true,
            reason: None,
        });
    }

    pub fn push_fail(&mut self, subject: CheckSubject, err: &CheckError) {
        self.outcomes.push(CheckOutcome {
            subject,
            passed: false,
            reason: Some(err.to_string()),
        });
    }

    pub fn passed(&self) -> usize {
        self.outcomes.iter().filter(|o| o.passed).count()
    }

    pub fn failed(&self) -> usize {
        self.outcomes.len() - self.passed()
    }

    /// True when every recorded check passed (vacuously true when empty).
    pub fn is_pass(&self) -> bool {
        self.outcomes.iter().all(|o| o.passed)
    }

    pub fn failures(&self) -> impl Iterator<Item = &CheckOutcome> {
        self.outcomes.iter().filter(|o| !o.passed)
    }
}
