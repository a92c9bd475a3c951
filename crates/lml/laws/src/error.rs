use lml_types::LawId;
use thiserror::Error;

/// Errors from law set compilation and loading.
///
/// All of these are configuration-time failures. A law set that constructs
/// successfully cannot fail during evaluation.
#[derive(Error, Debug)]
pub enum LawSetError {
    #[error("law set is empty: at least one law is required")]
    EmptyLawSet,

    #[error("duplicate law id: {0}")]
    DuplicateLaw(LawId),

    #[error("law id {0} is reserved for the gate itself")]
    ReservedLaw(LawId),

    #[error("invalid predicate in law {law}: {reason}")]
    InvalidPredicate { law: LawId, reason: String },

    #[error("law {law} is not total: predicate panicked on probe '{probe}'")]
    NonTotalLaw { law: LawId, probe: String },

    #[error("law set was assembled from code, not declarations")]
    NotDeclarative,

    #[error("law set configuration error: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("canonical serialization failed: {0}")]
    Canonical(#[from] serde_json::Error),
}
