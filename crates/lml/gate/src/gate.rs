use lml_laws::{LawSet, SupportContext};
use lml_types::{
    Candidate, CandidateBody, Decision, Evidence, IndeterminatePolicy, LawId, LawRuling, Ruling,
    Verdict, VerdictRecord,
};
use tracing::{debug, info, warn};

/// Configuration for the Admissibility Gate.
#[derive(Clone, Copy, Debug, Default)]
pub struct GateConfig {
    /// How indeterminate rulings resolve. Defaults to fail-closed: a law
    /// that cannot decide blocks admission.
    pub indeterminate_policy: IndeterminatePolicy,
}

impl GateConfig {
    pub fn fail_open() -> Self {
        Self {
            indeterminate_policy: IndeterminatePolicy::FailOpen,
        }
    }
}

/// The Admissibility Gate.
///
/// Judges candidates against an immutable law set, in declared order:
///
/// 1. A degenerate candidate (generator failure, empty output) is rejected
///    under the reserved `core.degenerate-output` id before any law runs,
///    under either policy.
/// 2. The first inadmissible ruling rejects, citing the barring law and its
///    evidence. Later laws are not consulted.
/// 3. Indeterminate rulings do not stop evaluation. If no law barred the
///    candidate but at least one could not decide, the indeterminate policy
///    settles the verdict.
/// 4. A candidate every law clears is admitted, body untouched.
///
/// `evaluate` is pure: `&self`, no interior mutability, no I/O. For a fixed
/// (candidate, law set, policy) triple the returned [`Verdict`] is identical
/// on every call, so independent evaluations may run concurrently without
/// coordination.
pub struct AdmissibilityGate {
    law_set: LawSet,
    config: GateConfig,
}

impl AdmissibilityGate {
    pub fn new(law_set: LawSet, config: GateConfig) -> Self {
        Self { law_set, config }
    }

    pub fn law_set(&self) -> &LawSet {
        &self.law_set
    }

    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Judge one candidate. Total: every candidate receives a verdict.
    pub fn evaluate(&self, candidate: &Candidate, context: &SupportContext) -> Verdict {
        debug!(
            candidate = %candidate.id,
            laws = self.law_set.len(),
            "candidate submitted to gate"
        );

        if candidate.is_degenerate() {
            let detail = match &candidate.body {
                CandidateBody::GeneratorFailure(cause) => {
                    format!("generator failure: {cause}")
                }
                CandidateBody::Text(_) => "output is empty or whitespace only".to_string(),
            };
            warn!(candidate = %candidate.id, detail = %detail, "degenerate candidate rejected");
            return self.verdict(
                candidate,
                Decision::Rejected {
                    reason: LawId::degenerate_output(),
                    evidence: Evidence::new(detail),
                },
                Vec::new(),
            );
        }

        let mut trace = Vec::with_capacity(self.law_set.len());
        let mut first_indeterminate: Option<(LawId, String)> = None;

        for law in self.law_set.laws() {
            let ruling = law.judge(candidate, context);
            trace.push(LawRuling::new(law.id().clone(), ruling.kind()));

            match ruling {
                Ruling::Admissible => {
                    debug!(law = %law.id(), "law cleared candidate");
                }
                Ruling::Inadmissible(evidence) => {
                    warn!(
                        law = %law.id(),
                        detail = %evidence.detail,
                        "law barred candidate"
                    );
                    return self.verdict(
                        candidate,
                        Decision::Rejected {
                            reason: law.id().clone(),
                            evidence,
                        },
                        trace,
                    );
                }
                Ruling::Indeterminate { cause } => {
                    debug!(law = %law.id(), cause = %cause, "law could not decide");
                    if first_indeterminate.is_none() {
                        first_indeterminate = Some((law.id().clone(), cause));
                    }
                }
            }
        }

        let decision = match (first_indeterminate, self.config.indeterminate_policy) {
            (Some((law, cause)), IndeterminatePolicy::FailClosed) => {
                warn!(law = %law, cause = %cause, "indeterminate ruling under fail-closed policy");
                Decision::Rejected {
                    reason: law,
                    evidence: Evidence::new(format!(
                        "law could not decide and policy is fail-closed: {cause}"
                    )),
                }
            }
            _ => {
                info!(candidate = %candidate.id, "candidate admitted");
                Decision::Admitted
            }
        };

        self.verdict(candidate, decision, trace)
    }

    /// Judge one candidate and wrap the verdict in a reporting envelope
    /// (fresh record id, decision timestamp).
    pub fn evaluate_recorded(
        &self,
        candidate: &Candidate,
        context: &SupportContext,
    ) -> VerdictRecord {
        VerdictRecord::new(self.evaluate(candidate, context))
    }

    fn verdict(&self, candidate: &Candidate, decision: Decision, trace: Vec<LawRuling>) -> Verdict {
        Verdict {
            candidate_id: candidate.id.clone(),
            decision,
            law_set_version: self.law_set.version(),
            policy: self.config.indeterminate_policy,
            trace,
        }
    }
}
