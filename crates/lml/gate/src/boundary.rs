use lml_laws::SupportContext;
use lml_types::{Candidate, VerdictRecord};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::gate::AdmissibilityGate;
use crate::generator::Generator;

/// Where generation meets judgment.
///
/// Holds a gate plus the supporting material for a run, and drives opaque
/// generators through it. Generator errors become generator-failure
/// candidates and are judged like any other output. Candidate text is
/// released only on an admitted verdict: a blocked output leaves the
/// boundary as a verdict record, never as text.
pub struct EnforcementBoundary {
    gate: AdmissibilityGate,
    context: SupportContext,
}

impl EnforcementBoundary {
    pub fn new(gate: AdmissibilityGate) -> Self {
        Self {
            gate,
            context: SupportContext::empty(),
        }
    }

    /// Attach the supporting material laws may consult during this run.
    pub fn with_context(mut self, context: SupportContext) -> Self {
        self.context = context;
        self
    }

    pub fn gate(&self) -> &AdmissibilityGate {
        &self.gate
    }

    /// Run one generation call through the gate.
    pub fn enforce(&self, generator: &dyn Generator, prompt: &str) -> EnforcementOutcome {
        let candidate = match generator.generate(prompt) {
            Ok(candidate) => candidate,
            Err(err) => {
                warn!(
                    generator = generator.name(),
                    error = %err,
                    "generator failed; judging the failure itself"
                );
                Candidate::from_generator_failure(err.to_string())
                    .with_generator(generator.name())
            }
        };

        let body = candidate.text_body().map(str::to_string);
        let record = self.gate.evaluate_recorded(&candidate, &self.context);
        let released = if record.verdict.is_admitted() {
            body
        } else {
            None
        };

        info!(
            generator = generator.name(),
            verdict = %record.verdict_id,
            admitted = record.verdict.is_admitted(),
            "enforcement complete"
        );

        EnforcementOutcome {
            generator: generator.name().to_string(),
            prompt: prompt.to_string(),
            record,
            released,
        }
    }

    /// Judge an already-produced candidate at this boundary.
    pub fn enforce_candidate(&self, candidate: &Candidate) -> EnforcementOutcome {
        let body = candidate.text_body().map(str::to_string);
        let record = self.gate.evaluate_recorded(candidate, &self.context);
        let released = if record.verdict.is_admitted() {
            body
        } else {
            None
        };
        EnforcementOutcome {
            generator: candidate
                .provenance
                .generator
                .clone()
                .unwrap_or_else(|| "unattributed".to_string()),
            prompt: String::new(),
            record,
            released,
        }
    }
}

/// What came out of one enforced generation call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EnforcementOutcome {
    pub generator: String,
    pub prompt: String,
    pub record: VerdictRecord,
    /// The candidate text. Present only when the verdict admitted it.
    pub released: Option<String>,
}

impl EnforcementOutcome {
    pub fn is_blocked(&self) -> bool {
        self.released.is_none()
    }
}
