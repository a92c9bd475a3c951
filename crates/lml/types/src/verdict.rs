use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{CandidateId, LawId, VerdictId};
use crate::ruling::{Evidence, LawRuling, RulingKind};
use crate::version::LawSetVersion;

/// How the gate resolves laws that cannot decide.
///
/// Always declared explicitly, never inferred. The default refuses to admit
/// anything a law could not positively clear.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum IndeterminatePolicy {
    /// An indeterminate ruling rejects the candidate.
    #[default]
    FailClosed,
    /// Indeterminate rulings are tolerated; only an explicit inadmissible
    /// ruling rejects.
    FailOpen,
}

/// Final disposition of a candidate.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Decision {
    /// Every law cleared the candidate (or indeterminates were tolerated by
    /// policy). The body may be released exactly as it arrived.
    Admitted,
    /// A law barred the candidate, or policy refused an indeterminate
    /// ruling. `reason` names the deciding law.
    Rejected { reason: LawId, evidence: Evidence },
}

impl Decision {
    pub fn is_admitted(&self) -> bool {
        matches!(self, Decision::Admitted)
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Decision::Rejected { .. })
    }
}

/// The gate's judgment of one candidate against one law set.
///
/// A verdict is a pure value. Evaluating a fixed candidate against a fixed
/// law set under a fixed policy yields an identical `Verdict` every time;
/// envelope identity (unique id, decision time) lives in [`VerdictRecord`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Verdict {
    pub candidate_id: CandidateId,
    pub decision: Decision,
    /// Version of the law set the candidate was judged against.
    pub law_set_version: LawSetVersion,
    /// Policy in force when the verdict was formed.
    pub policy: IndeterminatePolicy,
    /// Per-law outcomes in declared order, up to the short-circuit point.
    pub trace: Vec<LawRuling>,
}

impl Verdict {
    pub fn is_admitted(&self) -> bool {
        self.decision.is_admitted()
    }

    /// The law that rejected this candidate, if any.
    pub fn rejected_by(&self) -> Option<&LawId> {
        match &self.decision {
            Decision::Rejected { reason, .. } => Some(reason),
            Decision::Admitted => None,
        }
    }

    /// Number of laws that could not decide. Nonzero on an admitted verdict
    /// means the candidate was admitted by fail-open policy, not cleared.
    pub fn indeterminate_count(&self) -> usize {
        self.trace
            .iter()
            .filter(|r| r.outcome == RulingKind::Indeterminate)
            .count()
    }
}

/// A verdict wrapped for reporting: unique record id plus decision time.
/// Kept apart from [`Verdict`] so the judgment itself stays deterministic.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct VerdictRecord {
    pub verdict_id: VerdictId,
    pub verdict: Verdict,
    pub decided_at: DateTime<Utc>,
}

impl VerdictRecord {
    pub fn new(verdict: Verdict) -> Self {
        Self {
            verdict_id: VerdictId::new(),
            verdict,
            decided_at: Utc::now(),
        }
    }
}
