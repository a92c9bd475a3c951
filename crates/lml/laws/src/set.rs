use std::collections::HashSet;
use std::sync::Arc;

use lml_types::{Candidate, LawId, LawSetVersion};
use serde::Serialize;
use tracing::{debug, info};

use crate::context::SupportContext;
use crate::error::LawSetError;
use crate::law::Law;
use crate::spec::{CompiledLaw, LawSpec};

/// A finite, ordered, immutable set of laws plus its content-derived version.
///
/// Construction is the single validation point: duplicate ids, reserved ids,
/// malformed predicates, and non-total predicates are all rejected here,
/// before any candidate is processed. A `LawSet` that constructs cannot
/// fail during evaluation.
///
/// Order is meaningful: the gate evaluates laws in declared order and
/// rejects on the first inadmissible ruling.
#[derive(Clone)]
pub struct LawSet {
    laws: Vec<Arc<dyn Law>>,
    declarations: Option<Vec<LawSpec>>,
    version: LawSetVersion,
}

impl std::fmt::Debug for LawSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LawSet")
            .field("laws", &self.laws.iter().map(|l| l.id()).collect::<Vec<_>>())
            .field("version", &self.version)
            .finish()
    }
}

impl LawSet {
    /// Compile declared laws into an immutable set.
    pub fn compile(specs: Vec<LawSpec>) -> Result<Self, LawSetError> {
        if specs.is_empty() {
            return Err(LawSetError::EmptyLawSet);
        }
        Self::check_ids(specs.iter().map(|s| &s.id))?;

        let mut laws: Vec<Arc<dyn Law>> = Vec::with_capacity(specs.len());
        for spec in &specs {
            laws.push(Arc::new(CompiledLaw::from_spec(spec)?));
        }

        // Version covers the full declarations, in declared order.
        let material = serde_json::to_vec(&specs)?;
        let version = LawSetVersion::compute(&material);

        let set = Self {
            laws,
            declarations: Some(specs),
            version,
        };
        set.probe_totality()?;
        info!(version = %set.version, laws = set.laws.len(), "law set compiled");
        Ok(set)
    }

    /// Assemble a set from hand-written laws.
    ///
    /// The version covers ids and descriptions only; predicate code is
    /// opaque. Authors of hand-written laws change the description when
    /// the predicate's meaning changes.
    pub fn from_laws(laws: Vec<Arc<dyn Law>>) -> Result<Self, LawSetError> {
        if laws.is_empty() {
            return Err(LawSetError::EmptyLawSet);
        }
        Self::check_ids(laws.iter().map(|l| l.id()))?;

        let digests: Vec<LawDigest<'_>> = laws
            .iter()
            .map(|l| LawDigest {
                id: l.id(),
                description: l.description(),
            })
            .collect();
        let material = serde_json::to_vec(&digests)?;
        let version = LawSetVersion::compute(&material);

        let set = Self {
            laws,
            declarations: None,
            version,
        };
        set.probe_totality()?;
        info!(version = %set.version, laws = set.laws.len(), "law set assembled");
        Ok(set)
    }

    /// Load and compile a declared law set from YAML.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, LawSetError> {
        let specs: Vec<LawSpec> = serde_yaml::from_str(yaml)?;
        Self::compile(specs)
    }

    /// Dump the declarations back to YAML. Fails for sets assembled from
    /// hand-written laws, which have no declaration form.
    pub fn to_yaml(&self) -> Result<String, LawSetError> {
        let declarations = self
            .declarations
            .as_ref()
            .ok_or(LawSetError::NotDeclarative)?;
        Ok(serde_yaml::to_string(declarations)?)
    }

    /// Laws in declared order.
    pub fn laws(&self) -> &[Arc<dyn Law>] {
        &self.laws
    }

    pub fn get(&self, id: &LawId) -> Option<&Arc<dyn Law>> {
        self.laws.iter().find(|l| l.id() == id)
    }

    pub fn contains(&self, id: &LawId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.laws.len()
    }

    pub fn is_empty(&self) -> bool {
        self.laws.is_empty()
    }

    /// Content-derived version this set is addressed by.
    pub fn version(&self) -> LawSetVersion {
        self.version
    }

    /// Declarations this set was compiled from, if it was declared as data.
    pub fn declarations(&self) -> Option<&[LawSpec]> {
        self.declarations.as_deref()
    }

    fn check_ids<'a>(ids: impl Iterator<Item = &'a LawId>) -> Result<(), LawSetError> {
        let mut seen = HashSet::new();
        for id in ids {
            if id.is_reserved() {
                return Err(LawSetError::ReservedLaw(id.clone()));
            }
            if !seen.insert(id.clone()) {
                return Err(LawSetError::DuplicateLaw(id.clone()));
            }
        }
        Ok(())
    }

    /// Invoke every law against a battery of degenerate candidates, with a
    /// panic guard. A predicate that panics on any probe is not total and
    /// the whole set is refused.
    fn probe_totality(&self) -> Result<(), LawSetError> {
        let probes = probe_candidates();
        let contexts = probe_contexts();
        for law in &self.laws {
            for (label, candidate) in &probes {
                for context in &contexts {
                    let outcome = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                        law.judge(candidate, context)
                    }));
                    if outcome.is_err() {
                        return Err(LawSetError::NonTotalLaw {
                            law: law.id().clone(),
                            probe: (*label).to_string(),
                        });
                    }
                }
            }
            debug!(law = %law.id(), "law passed totality probe");
        }
        Ok(())
    }
}

/// Hash material for hand-written laws: identity plus statement.
#[derive(Serialize)]
struct LawDigest<'a> {
    id: &'a LawId,
    description: &'a str,
}

fn probe_candidates() -> Vec<(&'static str, Candidate)> {
    vec![
        ("empty text", Candidate::text("")),
        ("whitespace only", Candidate::text(" \n\t ")),
        (
            "generator failure",
            Candidate::from_generator_failure("probe: upstream failure"),
        ),
        ("long input", Candidate::text("x".repeat(65_536))),
        ("non-ascii", Candidate::text("naïve 測試 🦀 Ω µ")),
        (
            "numeric extremes",
            Candidate::text("0 0.0000001 340282366920938463463374607431768211455 1e308"),
        ),
    ]
}

fn probe_contexts() -> Vec<SupportContext> {
    vec![
        SupportContext::empty(),
        SupportContext::empty().with_reference("probe-ref", "probe supporting material"),
    ]
}
