//! Integration test suite for the LML workspace.
//!
//! All tests live under `tests/`: end-to-end scenarios in `tests/e2e/`,
//! proptest property suites in `tests/property/`, and adversarial cases in
//! `tests/adversarial/`. This library target exists only to anchor the
//! package; it exports nothing.
