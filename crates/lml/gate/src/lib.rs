//! # lml-gate
//!
//! The Admissibility Gate: the boundary between a text generator and its
//! released output.
//!
//! The gate holds an immutable, ordered [`LawSet`](lml_laws::LawSet) and an
//! explicit indeterminate policy. `evaluate` judges one candidate: laws run
//! in declared order, the first inadmissible ruling rejects, indeterminate
//! rulings resolve by policy (fail-closed by default), and a candidate every
//! law clears is admitted unmodified. Evaluation is pure and deterministic;
//! it cannot fail, only reject.
//!
//! Around the gate sits the [`EnforcementBoundary`]: it drives an opaque
//! [`Generator`], turns upstream failures into first-class rejected
//! candidates, and releases output text only on an admitted verdict.

pub mod boundary;
pub mod error;
pub mod gate;
pub mod generator;

pub use boundary::{EnforcementBoundary, EnforcementOutcome};
pub use error::GeneratorError;
pub use gate::{AdmissibilityGate, GateConfig};
pub use generator::{Generator, ScriptedGenerator};
