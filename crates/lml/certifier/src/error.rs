use lml_types::{LawId, LawSetVersion};
use thiserror::Error;

/// Errors from branching-model assembly and path certification.
#[derive(Error, Debug)]
pub enum CertifierError {
    #[error("stage {stage} ({label}) cannot be statically partitioned: {cause}")]
    UnmodelableStage {
        stage: usize,
        label: String,
        cause: String,
    },

    #[error("{context} references law {law} not present in the law set")]
    UnknownLaw { context: String, law: LawId },

    #[error("stage {stage} ({label}) declares no outcomes")]
    EmptyStage { stage: usize, label: String },

    #[error("stage {stage} ({label}) leaves no admissible outcome; no path can complete")]
    DeadStage { stage: usize, label: String },

    #[error("path count overflow while computing {quantity}")]
    PathSpaceOverflow { quantity: String },

    #[error("model was assembled against law set {model}, presented with {current}")]
    StaleLawSet {
        model: LawSetVersion,
        current: LawSetVersion,
    },

    #[error("certificate was issued for law set {certified}, current law set is {current}")]
    StaleCertificate {
        certified: LawSetVersion,
        current: LawSetVersion,
    },

    #[error("invalid model: {0}")]
    InvalidModel(String),
}
