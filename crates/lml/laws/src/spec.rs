use lml_types::{Candidate, Evidence, LawId, Ruling, Span};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::context::SupportContext;
use crate::error::LawSetError;
use crate::law::Law;

/// One declared law: identifier, statement, and the predicate that decides.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LawSpec {
    pub id: LawId,
    pub description: String,
    pub predicate: PredicateSpec,
}

/// Declarative predicate forms for laws loaded from configuration.
///
/// Each form compiles into a pure, total predicate over a candidate and its
/// supporting material. Parameters are validated once, at law set
/// construction; a form that compiles cannot fail at evaluation time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum PredicateSpec {
    /// Admissible iff any of the markers occurs in the candidate text.
    MarkerPresence {
        markers: Vec<String>,
        case_insensitive: bool,
    },
    /// Admissible iff the literal token occurs in the candidate text.
    CitationToken { token: String },
    /// Every citation the candidate attaches must resolve in the support
    /// context. A candidate with no citations at all is indeterminate.
    CitedReferencesResolve,
    /// Every numeric value in the text must match a whitelisted constant
    /// within the tolerance.
    NumericWhitelist { allowed: Vec<f64>, tolerance: f64 },
    /// The pattern must not match anywhere in the text.
    ForbiddenPattern { pattern: String },
    /// The text must not exceed the character ceiling.
    MaxOutputChars { max: usize },
    /// Generator-reported confidence must meet the floor. A candidate with
    /// no reported confidence is indeterminate.
    ConfidenceFloor { min: f64 },
    /// All members must admit.
    All(Vec<PredicateSpec>),
    /// At least one member must admit.
    Any(Vec<PredicateSpec>),
}

impl PredicateSpec {
    /// Compile into the runtime form, validating all parameters.
    /// The returned reason feeds `LawSetError::InvalidPredicate`.
    pub(crate) fn compile(&self) -> Result<CompiledPredicate, String> {
        match self {
            PredicateSpec::MarkerPresence {
                markers,
                case_insensitive,
            } => {
                if markers.is_empty() {
                    return Err("marker list is empty".into());
                }
                if markers.iter().any(|m| m.trim().is_empty()) {
                    return Err("marker list contains an empty marker".into());
                }
                let markers = if *case_insensitive {
                    markers.iter().map(|m| m.to_lowercase()).collect()
                } else {
                    markers.clone()
                };
                Ok(CompiledPredicate::MarkerPresence {
                    markers,
                    case_insensitive: *case_insensitive,
                })
            }
            PredicateSpec::CitationToken { token } => {
                if token.trim().is_empty() {
                    return Err("citation token is empty".into());
                }
                Ok(CompiledPredicate::CitationToken {
                    token: token.clone(),
                })
            }
            PredicateSpec::CitedReferencesResolve => Ok(CompiledPredicate::CitedReferencesResolve),
            PredicateSpec::NumericWhitelist { allowed, tolerance } => {
                if !tolerance.is_finite() || *tolerance < 0.0 {
                    return Err("tolerance must be finite and non-negative".into());
                }
                if allowed.iter().any(|v| !v.is_finite()) {
                    return Err("whitelisted values must be finite".into());
                }
                let scanner =
                    Regex::new(r"\d+(?:\.\d+)?").map_err(|e| format!("number scanner: {e}"))?;
                Ok(CompiledPredicate::NumericWhitelist {
                    allowed: allowed.clone(),
                    tolerance: *tolerance,
                    scanner,
                })
            }
            PredicateSpec::ForbiddenPattern { pattern } => {
                let regex = Regex::new(pattern).map_err(|e| format!("invalid pattern: {e}"))?;
                Ok(CompiledPredicate::ForbiddenPattern { regex })
            }
            PredicateSpec::MaxOutputChars { max } => {
                if *max == 0 {
                    return Err("character ceiling must be positive".into());
                }
                Ok(CompiledPredicate::MaxOutputChars { max: *max })
            }
            PredicateSpec::ConfidenceFloor { min } => {
                if !min.is_finite() || !(0.0..=1.0).contains(min) {
                    return Err("confidence floor must lie within [0, 1]".into());
                }
                Ok(CompiledPredicate::ConfidenceFloor { min: *min })
            }
            PredicateSpec::All(members) => {
                if members.is_empty() {
                    return Err("compound predicate has no members".into());
                }
                let compiled = members
                    .iter()
                    .map(|m| m.compile())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CompiledPredicate::All(compiled))
            }
            PredicateSpec::Any(members) => {
                if members.is_empty() {
                    return Err("compound predicate has no members".into());
                }
                let compiled = members
                    .iter()
                    .map(|m| m.compile())
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CompiledPredicate::Any(compiled))
            }
        }
    }
}

/// Runtime form of a predicate: parameters validated, patterns pre-built.
#[derive(Clone, Debug)]
pub(crate) enum CompiledPredicate {
    MarkerPresence {
        markers: Vec<String>,
        case_insensitive: bool,
    },
    CitationToken {
        token: String,
    },
    CitedReferencesResolve,
    NumericWhitelist {
        allowed: Vec<f64>,
        tolerance: f64,
        scanner: Regex,
    },
    ForbiddenPattern {
        regex: Regex,
    },
    MaxOutputChars {
        max: usize,
    },
    ConfidenceFloor {
        min: f64,
    },
    All(Vec<CompiledPredicate>),
    Any(Vec<CompiledPredicate>),
}

impl CompiledPredicate {
    /// Evaluate over one candidate. Total: every candidate, including
    /// degenerate ones, maps to a ruling.
    pub(crate) fn evaluate(&self, candidate: &Candidate, context: &SupportContext) -> Ruling {
        let text = candidate.text_body().unwrap_or("");
        match self {
            CompiledPredicate::MarkerPresence {
                markers,
                case_insensitive,
            } => {
                let haystack = if *case_insensitive {
                    text.to_lowercase()
                } else {
                    text.to_string()
                };
                if markers.iter().any(|m| haystack.contains(m.as_str())) {
                    Ruling::Admissible
                } else {
                    Ruling::Inadmissible(Evidence::new(format!(
                        "none of {} grounding markers present",
                        markers.len()
                    )))
                }
            }
            CompiledPredicate::CitationToken { token } => {
                if text.contains(token.as_str()) {
                    Ruling::Admissible
                } else {
                    Ruling::Inadmissible(Evidence::new(format!(
                        "required citation token {token:?} absent"
                    )))
                }
            }
            CompiledPredicate::CitedReferencesResolve => {
                if candidate.provenance.citations.is_empty() {
                    return Ruling::indeterminate("candidate attaches no citations");
                }
                for citation in &candidate.provenance.citations {
                    if context.resolve(&citation.locator).is_none() {
                        let mut evidence = Evidence::new(format!(
                            "cited locator {:?} does not resolve in the support context",
                            citation.locator
                        ))
                        .with_locator(citation.locator.clone());
                        if let Some(span) = citation.span {
                            evidence = evidence.with_span(span);
                        }
                        return Ruling::Inadmissible(evidence);
                    }
                }
                Ruling::Admissible
            }
            CompiledPredicate::NumericWhitelist {
                allowed,
                tolerance,
                scanner,
            } => {
                for m in scanner.find_iter(text) {
                    let value: f64 = match m.as_str().parse() {
                        Ok(v) => v,
                        Err(_) => continue,
                    };
                    let whitelisted = allowed.iter().any(|a| (a - value).abs() <= *tolerance);
                    if !whitelisted {
                        return Ruling::Inadmissible(
                            Evidence::new(format!(
                                "value {value} does not match any whitelisted constant"
                            ))
                            .with_span(Span::new(m.start(), m.end())),
                        );
                    }
                }
                Ruling::Admissible
            }
            CompiledPredicate::ForbiddenPattern { regex } => match regex.find(text) {
                Some(m) => Ruling::Inadmissible(
                    Evidence::new(format!("forbidden pattern matched {:?}", m.as_str()))
                        .with_span(Span::new(m.start(), m.end())),
                ),
                None => Ruling::Admissible,
            },
            CompiledPredicate::MaxOutputChars { max } => {
                let chars = text.chars().count();
                if chars > *max {
                    Ruling::Inadmissible(Evidence::new(format!(
                        "output length {chars} exceeds ceiling {max}"
                    )))
                } else {
                    Ruling::Admissible
                }
            }
            CompiledPredicate::ConfidenceFloor { min } => {
                match candidate.provenance.confidence {
                    None => Ruling::indeterminate("generator reported no confidence"),
                    Some(c) if c.is_finite() && c >= *min => Ruling::Admissible,
                    Some(c) => Ruling::Inadmissible(Evidence::new(format!(
                        "reported confidence {c} below floor {min}"
                    ))),
                }
            }
            CompiledPredicate::All(members) => {
                let mut causes = Vec::new();
                for member in members {
                    match member.evaluate(candidate, context) {
                        Ruling::Inadmissible(evidence) => return Ruling::Inadmissible(evidence),
                        Ruling::Indeterminate { cause } => causes.push(cause),
                        Ruling::Admissible => {}
                    }
                }
                if causes.is_empty() {
                    Ruling::Admissible
                } else {
                    Ruling::Indeterminate {
                        cause: causes.join("; "),
                    }
                }
            }
            CompiledPredicate::Any(members) => {
                let mut first_barred = None;
                let mut undecided = false;
                for member in members {
                    match member.evaluate(candidate, context) {
                        Ruling::Admissible => return Ruling::Admissible,
                        Ruling::Indeterminate { .. } => undecided = true,
                        Ruling::Inadmissible(evidence) => {
                            if first_barred.is_none() {
                                first_barred = Some(evidence);
                            }
                        }
                    }
                }
                if undecided {
                    Ruling::indeterminate("no alternative could be positively cleared")
                } else {
                    match first_barred {
                        Some(evidence) => Ruling::Inadmissible(evidence),
                        None => Ruling::Inadmissible(Evidence::new("no alternative admitted")),
                    }
                }
            }
        }
    }
}

/// A declared law compiled to its runtime form.
pub struct CompiledLaw {
    id: LawId,
    description: String,
    predicate: CompiledPredicate,
}

impl CompiledLaw {
    pub(crate) fn from_spec(spec: &LawSpec) -> Result<Self, LawSetError> {
        let predicate = spec
            .predicate
            .compile()
            .map_err(|reason| LawSetError::InvalidPredicate {
                law: spec.id.clone(),
                reason,
            })?;
        Ok(Self {
            id: spec.id.clone(),
            description: spec.description.clone(),
            predicate,
        })
    }
}

impl Law for CompiledLaw {
    fn id(&self) -> &LawId {
        &self.id
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn judge(&self, candidate: &Candidate, context: &SupportContext) -> Ruling {
        self.predicate.evaluate(candidate, context)
    }
}
