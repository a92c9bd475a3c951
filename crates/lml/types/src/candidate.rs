use serde::{Deserialize, Serialize};

use crate::ids::CandidateId;

/// One generated output awaiting judgment.
///
/// A candidate is created per generation call and never mutated afterwards.
/// The gate reads it; nothing rewrites it. Admission releases the body
/// exactly as it arrived.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub body: CandidateBody,
    pub provenance: Provenance,
}

/// What the generator actually handed over.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CandidateBody {
    /// Ordinary text output.
    Text(String),
    /// The generator failed upstream. Carried as a first-class candidate so
    /// the failure is judged and rejected instead of slipping past the gate.
    GeneratorFailure(String),
}

/// Where a candidate came from and what it claims to rest on.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Provenance {
    /// Name of the producing generator, if known.
    pub generator: Option<String>,
    /// Citations the generator attached to its output.
    pub citations: Vec<Citation>,
    /// Generator-reported confidence in [0, 1], if reported at all.
    pub confidence: Option<f64>,
}

/// A citation attached by the generator.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Citation {
    /// Where the cited material lives (url, document id, paper handle).
    pub locator: String,
    /// The span of candidate text the citation covers, if known.
    pub span: Option<Span>,
}

/// Byte range into the candidate text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

impl Candidate {
    /// Build a text candidate with empty provenance.
    pub fn text(body: impl Into<String>) -> Self {
        Self {
            id: CandidateId::new(),
            body: CandidateBody::Text(body.into()),
            provenance: Provenance::default(),
        }
    }

    /// Build a candidate recording an upstream generator failure.
    pub fn from_generator_failure(detail: impl Into<String>) -> Self {
        Self {
            id: CandidateId::new(),
            body: CandidateBody::GeneratorFailure(detail.into()),
            provenance: Provenance::default(),
        }
    }

    pub fn with_generator(mut self, name: impl Into<String>) -> Self {
        self.provenance.generator = Some(name.into());
        self
    }

    pub fn with_citation(mut self, locator: impl Into<String>, span: Option<Span>) -> Self {
        self.provenance.citations.push(Citation {
            locator: locator.into(),
            span,
        });
        self
    }

    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.provenance.confidence = Some(confidence);
        self
    }

    /// Text body, if this candidate carries one.
    pub fn text_body(&self) -> Option<&str> {
        match &self.body {
            CandidateBody::Text(t) => Some(t),
            CandidateBody::GeneratorFailure(_) => None,
        }
    }

    /// A degenerate candidate carries nothing judgeable: an upstream failure,
    /// or text that is empty or whitespace only. The gate rejects these
    /// before any law runs, under either indeterminate policy.
    pub fn is_degenerate(&self) -> bool {
        match &self.body {
            CandidateBody::GeneratorFailure(_) => true,
            CandidateBody::Text(t) => t.trim().is_empty(),
        }
    }
}
