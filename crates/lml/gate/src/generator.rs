use lml_types::Candidate;

use crate::error::GeneratorError;

/// An opaque producer of candidates.
///
/// The gate never inspects generator internals; it judges outputs. A
/// generator that fails returns an error, which the enforcement boundary
/// converts into a generator-failure candidate so the failure is judged
/// like any other output.
pub trait Generator: Send + Sync {
    fn name(&self) -> &str;

    fn generate(&self, prompt: &str) -> Result<Candidate, GeneratorError>;
}

/// Deterministic generator for demos and tests: a fixed prompt-to-response
/// script in place of a model backend.
pub struct ScriptedGenerator {
    name: String,
    script: Vec<(String, String)>,
    confidence: Option<f64>,
    fail_with: Option<String>,
}

impl ScriptedGenerator {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: Vec::new(),
            confidence: None,
            fail_with: None,
        }
    }

    /// A generator that always fails, for exercising the failure path.
    pub fn failing(name: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            script: Vec::new(),
            confidence: None,
            fail_with: Some(detail.into()),
        }
    }

    /// Script a response for a prompt.
    pub fn respond(mut self, prompt: impl Into<String>, response: impl Into<String>) -> Self {
        self.script.push((prompt.into(), response.into()));
        self
    }

    /// Attach a fixed reported confidence to every produced candidate.
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = Some(confidence);
        self
    }
}

impl Generator for ScriptedGenerator {
    fn name(&self) -> &str {
        &self.name
    }

    fn generate(&self, prompt: &str) -> Result<Candidate, GeneratorError> {
        if let Some(detail) = &self.fail_with {
            return Err(GeneratorError::Failed(detail.clone()));
        }
        let response = self
            .script
            .iter()
            .find(|(p, _)| p == prompt)
            .map(|(_, r)| r.clone())
            .ok_or_else(|| {
                GeneratorError::Failed(format!("no scripted response for prompt {prompt:?}"))
            })?;
        if response.is_empty() {
            return Err(GeneratorError::EmptyOutput);
        }
        let mut candidate = Candidate::text(response).with_generator(&self.name);
        if let Some(confidence) = self.confidence {
            candidate = candidate.with_confidence(confidence);
        }
        Ok(candidate)
    }
}
