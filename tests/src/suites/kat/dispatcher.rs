//! Extensible dispatcher for KAT operation handlers

use once_cell::sync::Lazy;
use std::collections::HashMap;

use super::error::Result;
use super::model::{TestCase, TestGroup};

/// Registry key for looking up handlers
#[derive(Hash, Eq, PartialEq, Debug, Clone)]
pub struct DispatchKey {
    pub algo: String,
    pub op: String,   // "operation" from the JSON (e.g., "mul", "invert")
    pub kind: String, // "testType" from the JSON (e.g., "AFT")
}

/// Handler function type
pub type HandlerFn = fn(&TestGroup, &TestCase) -> Result<()>;

/// Global registry of operation handlers
pub static REGISTRY: Lazy<HashMap<DispatchKey, HandlerFn>> = Lazy::new(|| {
    let mut m = HashMap::<DispatchKey, HandlerFn>::new();
    super::handlers::register(&mut m);
    m
});

/// Helper function for registering handlers
pub fn insert(
    map: &mut HashMap<DispatchKey, HandlerFn>,
    algo: &str,
    op: &str,
    kind: &str,
    handler: HandlerFn,
) {
    map.insert(
        DispatchKey {
            algo: algo.to_string(),
            op: op.to_string(),
            kind: kind.to_string(),
        },
        handler,
    );
}
