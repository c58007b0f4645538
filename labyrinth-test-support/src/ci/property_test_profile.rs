//! Property-test run profile parsing for CI and local overrides.
//!
//! Suites call [`ProptestRunProfile::load`] with their own defaults; the
//! environment can raise or lower the case count and toggle forking without
//! touching the code.

use std::env;

use thiserror::Error;

/// Environment variable controlling proptest case counts.
pub const CASES_ENV_KEY: &str = "LABYRINTH_PBT_CASES";
/// Environment variable controlling proptest process forking.
pub const FORK_ENV_KEY: &str = "LABYRINTH_PBT_FORK";

/// Reasons an override was ignored.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum OverrideError {
    /// The case count was not a positive integer.
    #[error("case count `{raw}` must be a positive integer")]
    InvalidCases {
        /// Raw value read from the environment.
        raw: String,
    },
    /// The fork flag was not a recognised boolean spelling.
    #[error("fork flag `{raw}` must be one of true/false/1/0/yes/no/on/off")]
    InvalidFlag {
        /// Raw value read from the environment.
        raw: String,
    },
}

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Load a profile from the environment, falling back to the given
    /// defaults for unset or invalid overrides.
    ///
    /// # Examples
    ///
    /// ```
    /// use labyrinth_test_support::ci::property_test_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self {
            cases: read_override(CASES_ENV_KEY, parse_cases).unwrap_or(default_cases),
            fork: read_override(FORK_ENV_KEY, parse_flag).unwrap_or(default_fork),
        }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub fn fork(&self) -> bool {
        self.fork
    }
}

fn read_override<T>(key: &'static str, parse: fn(&str) -> Result<T, OverrideError>) -> Option<T> {
    let raw = env::var(key).ok()?;
    match parse(&raw) {
        Ok(value) => Some(value),
        Err(error) => {
            tracing::warn!(env = key, %error, "ignoring invalid property-test override");
            None
        }
    }
}

fn parse_cases(raw: &str) -> Result<u32, OverrideError> {
    match raw.trim().parse::<u32>() {
        Ok(cases) if cases > 0 => Ok(cases),
        _ => Err(OverrideError::InvalidCases {
            raw: raw.to_owned(),
        }),
    }
}

fn parse_flag(raw: &str) -> Result<bool, OverrideError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(OverrideError::InvalidFlag {
            raw: raw.to_owned(),
        }),
    }
}
