//! Pure data model for known-answer test vectors.
//! No dependency on the rest of the framework.

use serde::Deserialize;

/// ----------------------------------------------------------------
/// 1. Leaf-level test case
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestCase {
    #[serde(rename = "tcId")]
    pub test_id: u64,
    /// First operand, hex. For `fromHex` cases this is the raw input string.
    pub a: String,
    #[serde(default)]
    pub b: Option<String>,
    /// Exponent as a hex bit string
    #[serde(default)]
    pub e: Option<String>,
    /// Expected output; absent for cases that must be rejected
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default = "default_expected_result")]
    pub expected_result: String, // valid / invalid
}

fn default_expected_result() -> String {
    "valid".into()
}

/// ----------------------------------------------------------------
/// 2. Groups: one operation per group
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestGroup {
    #[serde(rename = "tgId")]
    pub group_id: u64,
    pub test_type: String, // AFT
    /// Filled in from the suite by the loader
    #[serde(default)]
    pub algorithm: String,
    pub operation: String, // add / mul / invert / ...
    pub tests: Vec<TestCase>,
}

/// ----------------------------------------------------------------
/// 3. Whole suite (file)
/// ----------------------------------------------------------------
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSuite {
    #[serde(rename = "vsId")]
    pub suite_id: u64,
    pub algorithm: String,
    #[serde(default)]
    pub revision: Option<String>,
    #[serde(rename = "testGroups")]
    pub groups: Vec<TestGroup>,
}

impl TestSuite {
    /// Total number of cases across all groups
    pub fn case_count(&self) -> usize {
        self.groups.iter().map(|g| g.tests.len()).sum()
    }
}
