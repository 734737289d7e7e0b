// tests/kat_tests.rs
use gf359_tests::init_tracing;
use gf359_tests::suites::kat::{engine::FieldEngine, loader, runner::Runner};

#[test]
fn test_gf2_359_kat() {
    init_tracing();
    let engine = FieldEngine;
    let suite = loader::load_suite_by_name("GF2-359").expect("Failed to load GF2-359 suite");
    assert_eq!(suite.algorithm, "GF2-359");

    let r = Runner::new(&engine);
    let summary = r.run_suite(&suite).expect("GF2-359 KAT failed");

    assert_eq!(summary.passed, suite.case_count());
    // Inverse of zero, malformed hex and trace-one quadratics
    assert!(summary.rejected >= 7);
}

#[test]
fn test_every_group_has_a_handler() {
    use gf359_tests::suites::kat::dispatcher::{DispatchKey, REGISTRY};

    let suite = loader::load_suite_by_name("GF2-359").unwrap();
    for group in &suite.groups {
        let key = DispatchKey {
            algo: group.algorithm.clone(),
            op: group.operation.clone(),
            kind: group.test_type.clone(),
        };
        assert!(REGISTRY.contains_key(&key), "no handler for {:?}", key);
    }
}

#[test]
fn test_missing_suite_is_an_error() {
    assert!(loader::load_suite_by_name("GF2-233").is_err());
}
