//! Loads known-answer vectors from JSON files.

use crate::suites::kat::error::{EngineError, Result};
use crate::suites::kat::model::TestSuite;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// ----------------------------------------------------------------
/// Get the path to the JSON test vectors
/// ----------------------------------------------------------------
fn kat_json_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("src")
        .join("vectors")
        .join("kat_json")
}

/// ----------------------------------------------------------------
/// Public helper to load a specific suite by name
/// ----------------------------------------------------------------
pub fn load_suite_by_name(suite_name: &str) -> Result<TestSuite> {
    let suite_dir = kat_json_dir().join(suite_name);
    if !suite_dir.exists() {
        return Err(EngineError::Unsupported(format!(
            "suite directory not found: {}",
            suite_dir.display()
        )));
    }

    let prompt_file = suite_dir.join("prompt.json");
    let json = fs::read_to_string(&prompt_file)?;
    let mut suite: TestSuite = serde_json::from_str(&json)?;

    // Groups inherit the suite algorithm unless they name their own
    for group in &mut suite.groups {
        if group.algorithm.is_empty() {
            group.algorithm = suite.algorithm.clone();
        }
    }

    debug!(
        suite = suite_name,
        groups = suite.groups.len(),
        cases = suite.case_count(),
        "loaded KAT suite"
    );
    Ok(suite)
}
