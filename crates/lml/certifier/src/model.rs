use lml_laws::LawSet;
use lml_types::{LawId, LawSetVersion};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::CertifierError;

/// Static disposition of one stage outcome, fixed at declaration time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum OutcomeDisposition {
    /// The outcome stays within the admissible subspace.
    Admissible,
    /// The outcome leads toward the inadmissible region. It is excluded
    /// when the model assembles, recording the law that bars it.
    Excluded { barred_by: LawId },
    /// The outcome cannot be classified without runtime data. One of these
    /// anywhere makes the whole model unmodelable.
    Unresolved { cause: String },
}

/// One declared outcome of a decision stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OutcomeSpec {
    pub label: String,
    pub disposition: OutcomeDisposition,
}

impl OutcomeSpec {
    pub fn admissible(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disposition: OutcomeDisposition::Admissible,
        }
    }

    pub fn excluded(label: impl Into<String>, barred_by: LawId) -> Self {
        Self {
            label: label.into(),
            disposition: OutcomeDisposition::Excluded { barred_by },
        }
    }

    pub fn unresolved(label: impl Into<String>, cause: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            disposition: OutcomeDisposition::Unresolved {
                cause: cause.into(),
            },
        }
    }
}

/// One declared decision stage: a label and its finite outcome alternatives.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageSpec {
    pub label: String,
    pub outcomes: Vec<OutcomeSpec>,
}

impl StageSpec {
    pub fn new(label: impl Into<String>, outcomes: Vec<OutcomeSpec>) -> Self {
        Self {
            label: label.into(),
            outcomes,
        }
    }

    /// A stage offering `n` admissible outcomes and nothing else.
    pub fn uniform(label: impl Into<String>, n: u32) -> Self {
        let label = label.into();
        let outcomes = (0..n)
            .map(|i| OutcomeSpec::admissible(format!("{label}-{i}")))
            .collect();
        Self { label, outcomes }
    }
}

/// A branching model assembled from staged outcome declarations.
///
/// Assembly is where exclusion happens: outcomes barred by a law are
/// removed from the branching structure and kept only as bookkeeping.
/// The assembled form has no way to express an inadmissible branch, which
/// is the structural core of the certifier's zero-inadmissible-paths
/// claim: no stage offers an inadmissible edge, so by induction over
/// stages no path reaches an inadmissible terminal.
///
/// The model is bound at assembly to the version of the law set its
/// exclusions cite. Certifying it against any other version fails.
pub struct BranchingModel {
    stages: Vec<Stage>,
    law_set_version: LawSetVersion,
}

/// An assembled stage: only admissible branching remains.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Stage {
    pub label: String,
    pub admissible_outcomes: u32,
    pub exclusions: Vec<Exclusion>,
}

impl Stage {
    /// Outcomes originally declared for this stage.
    pub fn declared_outcomes(&self) -> u64 {
        self.admissible_outcomes as u64 + self.exclusions.len() as u64
    }
}

/// Record of an outcome removed at assembly, and the law that barred it.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Exclusion {
    pub outcome: String,
    pub barred_by: LawId,
}

impl BranchingModel {
    /// Assemble a model against the law set whose laws its exclusions cite.
    ///
    /// Fails fast on anything that would undermine the structural
    /// guarantee: a stage with an unresolved outcome, an exclusion citing
    /// a law the set does not contain, a stage with no outcomes at all,
    /// or a stage whose outcomes are all excluded.
    pub fn assemble(stages: Vec<StageSpec>, law_set: &LawSet) -> Result<Self, CertifierError> {
        if stages.is_empty() {
            return Err(CertifierError::InvalidModel(
                "model declares no stages".into(),
            ));
        }

        let mut assembled = Vec::with_capacity(stages.len());
        for (index, spec) in stages.iter().enumerate() {
            if spec.outcomes.is_empty() {
                return Err(CertifierError::EmptyStage {
                    stage: index,
                    label: spec.label.clone(),
                });
            }

            let mut admissible_outcomes = 0u32;
            let mut exclusions = Vec::new();
            for outcome in &spec.outcomes {
                match &outcome.disposition {
                    OutcomeDisposition::Admissible => admissible_outcomes += 1,
                    OutcomeDisposition::Excluded { barred_by } => {
                        if !law_set.contains(barred_by) {
                            return Err(CertifierError::UnknownLaw {
                                context: format!("stage {index} ({})", spec.label),
                                law: barred_by.clone(),
                            });
                        }
                        exclusions.push(Exclusion {
                            outcome: outcome.label.clone(),
                            barred_by: barred_by.clone(),
                        });
                    }
                    OutcomeDisposition::Unresolved { cause } => {
                        return Err(CertifierError::UnmodelableStage {
                            stage: index,
                            label: spec.label.clone(),
                            cause: cause.clone(),
                        });
                    }
                }
            }

            if admissible_outcomes == 0 {
                return Err(CertifierError::DeadStage {
                    stage: index,
                    label: spec.label.clone(),
                });
            }

            assembled.push(Stage {
                label: spec.label.clone(),
                admissible_outcomes,
                exclusions,
            });
        }

        debug!(
            stages = assembled.len(),
            version = %law_set.version(),
            "branching model assembled"
        );

        Ok(Self {
            stages: assembled,
            law_set_version: law_set.version(),
        })
    }

    pub fn stage_count(&self) -> usize {
        self.stages.len()
    }

    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    /// Version of the law set this model was assembled against.
    pub fn law_set_version(&self) -> LawSetVersion {
        self.law_set_version
    }

    /// Exclusions across all stages, in stage order.
    pub fn exclusions(&self) -> impl Iterator<Item = &Exclusion> {
        self.stages.iter().flat_map(|s| s.exclusions.iter())
    }
}
