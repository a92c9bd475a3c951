//! # lml-certifier
//!
//! Analytical certification of decision-path spaces.
//!
//! Given a static description of a staged decision process, the certifier
//! computes how many execution paths the process spans and proves that none
//! of them terminates in an inadmissible state. Both claims are established
//! in closed form: path counts are products over per-stage branching
//! factors, and the zero-inadmissible claim is structural, because a
//! [`BranchingModel`] cannot represent an inadmissible branch at all.
//! Outcomes a law bars are excluded when the model is assembled, and a
//! stage whose outcomes cannot be statically partitioned refuses assembly.
//!
//! Certification runs in time proportional to the number of stages, never
//! to the number of paths. A space of 10^19 paths certifies as fast as one
//! of 8.
//!
//! Results are bound to the version of the law set they were established
//! under; presenting a certificate against a drifted law set is an error,
//! not a warning.

pub mod census;
pub mod certifier;
pub mod error;
pub mod model;

pub use census::{CensusModel, CensusReport};
pub use certifier::{Certificate, PathCertifier};
pub use error::CertifierError;
pub use model::{BranchingModel, Exclusion, OutcomeDisposition, OutcomeSpec, Stage, StageSpec};
