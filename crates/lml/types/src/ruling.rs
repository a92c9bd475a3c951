use serde::{Deserialize, Serialize};

use crate::candidate::Span;
use crate::ids::LawId;

/// What a law reports when it bars a candidate: the finding, and where in
/// the candidate or its supporting material the finding points.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Evidence {
    /// What the law found.
    pub detail: String,
    /// Offending span of the candidate text, if the law can name one.
    pub span: Option<Span>,
    /// Supporting-material locator involved, if any.
    pub locator: Option<String>,
}

impl Evidence {
    pub fn new(detail: impl Into<String>) -> Self {
        Self {
            detail: detail.into(),
            span: None,
            locator: None,
        }
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    pub fn with_locator(mut self, locator: impl Into<String>) -> Self {
        self.locator = Some(locator.into());
        self
    }
}

/// Outcome of one law's predicate over one candidate.
///
/// Predicates are total: every candidate maps to exactly one ruling, and
/// evaluation never fails or hangs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Ruling {
    /// The law has no objection.
    Admissible,
    /// The law bars this candidate.
    Inadmissible(Evidence),
    /// The law cannot decide on the available material. The gate's
    /// indeterminate policy resolves what happens next.
    Indeterminate { cause: String },
}

impl Ruling {
    pub fn indeterminate(cause: impl Into<String>) -> Self {
        Ruling::Indeterminate {
            cause: cause.into(),
        }
    }

    pub fn is_admissible(&self) -> bool {
        matches!(self, Ruling::Admissible)
    }

    pub fn is_inadmissible(&self) -> bool {
        matches!(self, Ruling::Inadmissible(_))
    }

    pub fn is_indeterminate(&self) -> bool {
        matches!(self, Ruling::Indeterminate { .. })
    }

    pub fn kind(&self) -> RulingKind {
        match self {
            Ruling::Admissible => RulingKind::Admissible,
            Ruling::Inadmissible(_) => RulingKind::Inadmissible,
            Ruling::Indeterminate { .. } => RulingKind::Indeterminate,
        }
    }
}

/// A ruling stripped of its payload, for verdict traces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RulingKind {
    Admissible,
    Inadmissible,
    Indeterminate,
}

/// One entry in a verdict trace: which law ruled, and how. Trace entries
/// appear in declared law order, up to the point evaluation stopped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LawRuling {
    pub law: LawId,
    pub outcome: RulingKind,
}

impl LawRuling {
    pub fn new(law: LawId, outcome: RulingKind) -> Self {
        Self { law, outcome }
    }
}
