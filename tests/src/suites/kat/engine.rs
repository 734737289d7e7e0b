//! KAT engine: routes each case to its registered handler

use crate::suites::kat::dispatcher::{DispatchKey, REGISTRY};
use crate::suites::kat::error::{EngineError, Result};
use crate::suites::kat::model::{TestCase, TestGroup};
use crate::suites::kat::runner::KatEngine;

/// Concrete engine used by tests: one instance suffices for all suites.
pub struct FieldEngine;

impl KatEngine for FieldEngine {
    fn run(&self, group: &TestGroup, case: &TestCase) -> Result<()> {
        let key = DispatchKey {
            algo: group.algorithm.clone(),
            op: group.operation.clone(),
            kind: group.test_type.clone(),
        };

        let handler = REGISTRY
            .get(&key)
            .ok_or_else(|| EngineError::Unsupported(format!("{:?}", key)))?;
        handler(group, case)
    }
}
