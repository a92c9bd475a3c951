use chrono::{DateTime, Utc};
use lml_laws::LawSet;
use lml_types::{CertificateId, LawSetVersion};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CertifierError;
use crate::model::BranchingModel;

/// Closed-form certifier over assembled branching models.
///
/// `certify` is O(stages): one checked multiplication per stage, never a
/// traversal. The zero-inadmissible claim costs nothing to establish at
/// certification time because it was established at assembly time; the
/// certifier only restates what the model's construction already guarantees.
#[derive(Clone, Copy, Debug, Default)]
pub struct PathCertifier;

impl PathCertifier {
    pub fn new() -> Self {
        Self
    }

    /// Certify an assembled model against the law set it was built from.
    ///
    /// Fails with `StaleLawSet` if the presented set is not the one the
    /// model's exclusions were checked against. Path counts that exceed
    /// `u128` surface as `PathSpaceOverflow`, never as silent wrap-around.
    pub fn certify(
        &self,
        model: &BranchingModel,
        law_set: &LawSet,
    ) -> Result<Certificate, CertifierError> {
        if model.law_set_version() != law_set.version() {
            return Err(CertifierError::StaleLawSet {
                model: model.law_set_version(),
                current: law_set.version(),
            });
        }

        let mut total_paths: u128 = 1;
        let mut declared_paths: u128 = 1;
        let mut stage_factors = Vec::with_capacity(model.stage_count());

        for stage in model.stages() {
            stage_factors.push(stage.admissible_outcomes);
            total_paths = total_paths
                .checked_mul(stage.admissible_outcomes as u128)
                .ok_or_else(|| CertifierError::PathSpaceOverflow {
                    quantity: "total admissible paths".into(),
                })?;
            declared_paths = declared_paths
                .checked_mul(stage.declared_outcomes() as u128)
                .ok_or_else(|| CertifierError::PathSpaceOverflow {
                    quantity: "declared path space".into(),
                })?;
            debug!(
                stage = %stage.label,
                admissible = stage.admissible_outcomes,
                excluded = stage.exclusions.len(),
                "stage factored into path count"
            );
        }

        // Paths that would traverse at least one excluded edge. They exist
        // in the declared space but not in the assembled model, which is
        // exactly why none of them is reachable.
        let blocked_paths = declared_paths - total_paths;

        let certificate = Certificate {
            certificate_id: CertificateId::new(),
            law_set_version: law_set.version(),
            stage_count: model.stage_count(),
            stage_factors,
            total_paths,
            blocked_paths,
            inadmissible_paths: 0,
            certified_at: Utc::now(),
        };

        info!(
            certificate = %certificate.certificate_id,
            version = %certificate.law_set_version,
            stages = certificate.stage_count,
            total_paths = certificate.total_paths,
            blocked_paths = certificate.blocked_paths,
            "path space certified"
        );

        Ok(certificate)
    }
}

/// Result of one certification run.
///
/// `inadmissible_paths` is always zero: the assembled model cannot express
/// an inadmissible branch, so no product over its stages can count one. The
/// field is carried so the claim appears in every serialized report rather
/// than being implied.
///
/// A certificate is bound to the law-set version it was computed against
/// and goes stale the moment the law set changes.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Certificate {
    pub certificate_id: CertificateId,
    pub law_set_version: LawSetVersion,
    pub stage_count: usize,
    /// Admissible branching factor per stage, in stage order.
    pub stage_factors: Vec<u32>,
    /// Closed-form product of the admissible factors.
    pub total_paths: u128,
    /// Declared-space paths that would traverse an excluded edge.
    pub blocked_paths: u128,
    /// Paths terminating in an inadmissible state. Zero by construction.
    pub inadmissible_paths: u128,
    pub certified_at: DateTime<Utc>,
}

impl Certificate {
    /// Check this certificate against a law set before reuse.
    ///
    /// A certificate computed under one law-set version says nothing about
    /// any other; presenting it against a drifted set is an error.
    pub fn validate_against(&self, law_set: &LawSet) -> Result<(), CertifierError> {
        if self.law_set_version != law_set.version() {
            return Err(CertifierError::StaleCertificate {
                certified: self.law_set_version,
                current: law_set.version(),
            });
        }
        Ok(())
    }
}
