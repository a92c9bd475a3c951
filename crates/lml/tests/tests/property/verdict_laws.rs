//! Property tests over the gate: determinism, soundness, and the
//! fail-closed default, across randomly declared law sets and candidates.

use lml_gate::{AdmissibilityGate, GateConfig};
use lml_laws::{LawSet, LawSpec, PredicateSpec, SupportContext};
use lml_types::{Candidate, IndeterminatePolicy, LawId, RulingKind};
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

/// Generate candidate text: a sentence that may or may not carry markers,
/// tokens, or numbers.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ,.]{1,80}",
        "[a-zA-Z ,.]{0,40}\\[source\\][a-zA-Z ,.]{0,40}",
        "[a-zA-Z ]{0,30}according to [a-zA-Z ]{1,30}",
        "[a-zA-Z ]{0,20}[0-9]{1,4}[a-zA-Z ]{0,20}",
    ]
}

fn arb_candidate() -> impl Strategy<Value = Candidate> {
    (arb_text(), prop::option::of(0.0f64..=1.0)).prop_map(|(text, confidence)| {
        let mut candidate = Candidate::text(text);
        if let Some(c) = confidence {
            candidate = candidate.with_confidence(c);
        }
        candidate
    })
}

/// Generate one declarative law out of the predicate forms that can rule
/// on bare text.
fn arb_law_spec(index: usize) -> impl Strategy<Value = LawSpec> {
    prop_oneof![
        Just(PredicateSpec::CitationToken {
            token: "[source]".into(),
        }),
        Just(PredicateSpec::MarkerPresence {
            markers: vec!["according to".into(), "documented".into()],
            case_insensitive: true,
        }),
        Just(PredicateSpec::ForbiddenPattern {
            pattern: "(?i)everyone knows".into(),
        }),
        (1usize..200).prop_map(|max| PredicateSpec::MaxOutputChars { max }),
        (0.0f64..=1.0).prop_map(|min| PredicateSpec::ConfidenceFloor { min }),
    ]
    .prop_map(move |predicate| LawSpec {
        id: LawId::new(format!("prop.law-{index}")),
        description: format!("generated law {index}"),
        predicate,
    })
}

fn arb_law_set() -> impl Strategy<Value = LawSet> {
    (1usize..5)
        .prop_flat_map(|n| (0..n).map(arb_law_spec).collect::<Vec<_>>())
        .prop_map(|specs| LawSet::compile(specs).unwrap())
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    // The fail-closed property below assumes its way past most generated
    // inputs, so give the runner a larger reject budget than the default.
    #![proptest_config(ProptestConfig {
        max_global_rejects: 65536,
        ..ProptestConfig::default()
    })]

    /// Repeated evaluation of a fixed (candidate, law set, policy) triple
    /// yields the identical verdict value.
    #[test]
    fn evaluation_is_deterministic(
        candidate in arb_candidate(),
        set in arb_law_set(),
        fail_open in any::<bool>(),
    ) {
        let config = if fail_open {
            GateConfig::fail_open()
        } else {
            GateConfig::default()
        };
        let gate = AdmissibilityGate::new(set, config);
        let ctx = SupportContext::empty();
        let first = gate.evaluate(&candidate, &ctx);
        for _ in 0..5 {
            prop_assert_eq!(gate.evaluate(&candidate, &ctx), first.clone());
        }
    }

    /// Soundness: whenever any law rules inadmissible, the verdict rejects
    /// and names a law, under either policy.
    #[test]
    fn inadmissible_ruling_always_rejects(
        candidate in arb_candidate(),
        set in arb_law_set(),
        fail_open in any::<bool>(),
    ) {
        let ctx = SupportContext::empty();
        let any_barred = set
            .laws()
            .iter()
            .any(|law| law.judge(&candidate, &ctx).is_inadmissible());

        let config = if fail_open {
            GateConfig::fail_open()
        } else {
            GateConfig::default()
        };
        let gate = AdmissibilityGate::new(set, config);
        let verdict = gate.evaluate(&candidate, &ctx);

        if any_barred {
            prop_assert!(!verdict.is_admitted());
            prop_assert!(verdict.rejected_by().is_some());
        }
    }

    /// Fail-closed default: indeterminate-but-never-barred candidates are
    /// rejected, and the same candidate is admitted under fail-open.
    #[test]
    fn fail_closed_rejects_what_fail_open_tolerates(
        candidate in arb_candidate(),
        set in arb_law_set(),
    ) {
        let ctx = SupportContext::empty();
        let rulings: Vec<_> = set
            .laws()
            .iter()
            .map(|law| law.judge(&candidate, &ctx).kind())
            .collect();
        let any_barred = rulings.contains(&RulingKind::Inadmissible);
        let any_undecided = rulings.contains(&RulingKind::Indeterminate);
        prop_assume!(!candidate.is_degenerate());
        prop_assume!(!any_barred && any_undecided);

        let closed = AdmissibilityGate::new(set.clone(), GateConfig::default());
        let verdict = closed.evaluate(&candidate, &ctx);
        prop_assert!(!verdict.is_admitted());
        prop_assert_eq!(verdict.policy, IndeterminatePolicy::FailClosed);

        let open = AdmissibilityGate::new(set, GateConfig::fail_open());
        let verdict = open.evaluate(&candidate, &ctx);
        prop_assert!(verdict.is_admitted());
        prop_assert!(verdict.indeterminate_count() > 0);
    }

    /// The trace never extends past the first inadmissible ruling, and the
    /// rejecting law is the law at the short-circuit point.
    #[test]
    fn trace_stops_at_the_first_bar(
        candidate in arb_candidate(),
        set in arb_law_set(),
    ) {
        prop_assume!(!candidate.is_degenerate());
        let ctx = SupportContext::empty();
        let gate = AdmissibilityGate::new(set.clone(), GateConfig::default());
        let verdict = gate.evaluate(&candidate, &ctx);

        if let Some(position) = verdict
            .trace
            .iter()
            .position(|r| r.outcome == RulingKind::Inadmissible)
        {
            prop_assert_eq!(position, verdict.trace.len() - 1);
            prop_assert_eq!(verdict.rejected_by(), Some(&verdict.trace[position].law));
        }
    }

    /// The law-set version hash is sensitive to declaration order.
    #[test]
    fn version_hash_is_order_sensitive(shuffle in any::<bool>()) {
        let a = LawSpec {
            id: LawId::new("prop.a"),
            description: "a".into(),
            predicate: PredicateSpec::CitationToken { token: "[a]".into() },
        };
        let b = LawSpec {
            id: LawId::new("prop.b"),
            description: "b".into(),
            predicate: PredicateSpec::CitationToken { token: "[b]".into() },
        };
        let forward = LawSet::compile(vec![a.clone(), b.clone()]).unwrap();
        let other = if shuffle {
            LawSet::compile(vec![b, a]).unwrap()
        } else {
            LawSet::compile(vec![a, b]).unwrap()
        };
        if shuffle {
            prop_assert_ne!(forward.version(), other.version());
        } else {
            prop_assert_eq!(forward.version(), other.version());
        }
    }
}
