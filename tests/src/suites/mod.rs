//! Test suites driven by on-disk vector files
