//! Host page routing.

use serde::Serialize;

const TEST_PLAYER_ROUTE: &str = "/v2/testPlayer/";
const TEST_CASES_ROUTE: &str = "/v2/testCases";
const TEST_CYCLE_ROUTE: &str = "/v2/testCycle/";
const ADD_TEST_CASES_SUFFIX: &str = "/addTestCases";

/// Which host page a location hash points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    /// Executing a test run.
    TestRunner,
    /// Browsing the test case folder tree.
    TestCases,
    /// Adding test cases to a test cycle.
    TestCycleAddTestCases,
    /// Anything else.
    Unsupported,
}

impl PageKind {
    /// Detect the page from a location hash.
    pub fn detect(hash: &str) -> Self {
        if hash.contains(TEST_PLAYER_ROUTE) {
            Self::TestRunner
        } else if hash.contains(TEST_CYCLE_ROUTE) && hash.contains(ADD_TEST_CASES_SUFFIX) {
            Self::TestCycleAddTestCases
        } else if hash.contains(TEST_CASES_ROUTE) {
            Self::TestCases
        } else {
            Self::Unsupported
        }
    }
}

/// Test cycle addressed by an "add test cases" page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCycleInfo {
    /// Test run key, e.g. `PRJ-R2`.
    pub run_key: String,
    /// Project id from the hash query, if present.
    pub project_id: Option<String>,
}

impl TestCycleInfo {
    /// Extract the cycle from `#!/v2/testCycle/{key}/addTestCases?projectId=…`.
    pub fn from_hash(hash: &str) -> Option<Self> {
        let start = hash.find(TEST_CYCLE_ROUTE)? + TEST_CYCLE_ROUTE.len();
        let rest = &hash[start..];
        let run_key = &rest[..rest.find(ADD_TEST_CASES_SUFFIX)?];
        if run_key.is_empty() || run_key.contains('/') {
            return None;
        }

        let project_id = hash
            .split_once('?')
            .and_then(|(_, query)| {
                query
                    .split('&')
                    .filter_map(|pair| pair.split_once('='))
                    .find(|(key, value)| *key == "projectId" && !value.is_empty())
            })
            .map(|(_, value)| value.to_string());

        Some(Self {
            run_key: run_key.to_string(),
            project_id,
        })
    }
}
