//! Property-test run profile shared by the workspace's proptest suites.
//!
//! Reads case count and fork overrides from the environment so CI can run
//! deeper sweeps without code changes.

use std::env;

/// Environment variable overriding the proptest case count.
pub const PROPTEST_CASES_ENV_KEY: &str = "PROPTEST_CASES";
/// Environment variable enabling forked proptest execution.
pub const KRUSKAL_PBT_FORK_ENV_KEY: &str = "KRUSKAL_PBT_FORK";

/// Runtime profile for property-test execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProptestRunProfile {
    cases: u32,
    fork: bool,
}

impl ProptestRunProfile {
    /// Loads a profile from the process environment.
    ///
    /// # Examples
    /// ```
    /// use kruskal_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::load(64, false);
    /// assert!(profile.cases() > 0);
    /// ```
    #[must_use]
    pub fn load(default_cases: u32, default_fork: bool) -> Self {
        Self::from_lookup(default_cases, default_fork, |key| env::var(key).ok())
    }

    /// Builds a profile from an arbitrary key lookup. Invalid values are
    /// logged and replaced by the defaults.
    ///
    /// # Examples
    /// ```
    /// use kruskal_test_support::proptest_profile::ProptestRunProfile;
    ///
    /// let profile = ProptestRunProfile::from_lookup(64, false, |key| {
    ///     (key == "PROPTEST_CASES").then(|| "512".to_owned())
    /// });
    /// assert_eq!(profile.cases(), 512);
    /// assert!(!profile.fork());
    /// ```
    #[must_use]
    pub fn from_lookup(
        default_cases: u32,
        default_fork: bool,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        let cases = parse_or_default(&lookup, PROPTEST_CASES_ENV_KEY, default_cases, parse_cases);
        let fork = parse_or_default(&lookup, KRUSKAL_PBT_FORK_ENV_KEY, default_fork, parse_bool);
        Self { cases, fork }
    }

    /// Number of cases to run per property.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Whether to run proptest cases in forked subprocesses.
    #[must_use]
    pub const fn fork(&self) -> bool {
        self.fork
    }
}

fn parse_or_default<T: Copy>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
    parser: fn(&str) -> Result<T, &'static str>,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    parser(&raw).unwrap_or_else(|reason| {
        tracing::warn!(
            env = key,
            raw = %raw,
            reason,
            "invalid property-test profile override; using default",
        );
        default
    })
}

fn parse_cases(raw: &str) -> Result<u32, &'static str> {
    match raw.trim().parse::<u32>() {
        Ok(0) => Err("cases must be > 0"),
        Ok(cases) => Ok(cases),
        Err(_) => Err("expected a positive integer"),
    }
}

fn parse_bool(raw: &str) -> Result<bool, &'static str> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err("expected one of: true/false/1/0/yes/no/on/off"),
    }
}
