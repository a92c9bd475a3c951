//! Core type definitions for LML.
//!
//! This crate provides the shared law representation used by both the
//! admissibility gate and the path certifier. It carries no evaluation
//! logic; every other LML crate depends on it.

pub mod candidate;
pub mod ids;
pub mod ruling;
pub mod verdict;
pub mod version;

// Re-export primary types at crate root for ergonomic use.
pub use candidate::{Candidate, CandidateBody, Citation, Provenance, Span};
pub use ids::{CandidateId, CertificateId, LawId, VerdictId};
pub use ruling::{Evidence, LawRuling, Ruling, RulingKind};
pub use verdict::{Decision, IndeterminatePolicy, Verdict, VerdictRecord};
pub use version::LawSetVersion;
