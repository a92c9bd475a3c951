//! Property tests over the certifier: the closed-form counts must agree
//! with brute-force enumeration on every model small enough to enumerate.

use lml_certifier::{
    BranchingModel, CensusModel, OutcomeSpec, PathCertifier, StageSpec,
};
use lml_laws::{LawSet, LawSpec, PredicateSpec};
use lml_types::LawId;
use proptest::prelude::*;

// ---------------------------------------------------------------------------
// Helpers / Strategies
// ---------------------------------------------------------------------------

fn law_set() -> LawSet {
    LawSet::compile(vec![LawSpec {
        id: LawId::new("prop.no-speculation"),
        description: "outputs must not speculate".into(),
        predicate: PredicateSpec::ForbiddenPattern {
            pattern: "(?i)probably".into(),
        },
    }])
    .unwrap()
}

/// One stage as (admissible, excluded) outcome counts, small enough that
/// products stay enumerable.
fn arb_stage_shape() -> impl Strategy<Value = (u32, u32)> {
    (1u32..6, 0u32..3)
}

fn arb_stage_shapes() -> impl Strategy<Value = Vec<(u32, u32)>> {
    prop::collection::vec(arb_stage_shape(), 1..6)
}

fn assemble(shapes: &[(u32, u32)], set: &LawSet) -> BranchingModel {
    let barred = LawId::new("prop.no-speculation");
    let stages = shapes
        .iter()
        .enumerate()
        .map(|(i, &(admissible, excluded))| {
            let mut outcomes = Vec::new();
            for a in 0..admissible {
                outcomes.push(OutcomeSpec::admissible(format!("s{i}-ok-{a}")));
            }
            for e in 0..excluded {
                outcomes.push(OutcomeSpec::excluded(
                    format!("s{i}-barred-{e}"),
                    barred.clone(),
                ));
            }
            StageSpec::new(format!("stage-{i}"), outcomes)
        })
        .collect();
    BranchingModel::assemble(stages, set).unwrap()
}

/// Count paths by walking the declared space one path at a time, the way
/// the certifier must never have to. A path picks one declared outcome per
/// stage and is admissible iff it avoids every excluded edge.
fn enumerate(shapes: &[(u32, u32)]) -> (u128, u128) {
    let radices: Vec<u32> = shapes.iter().map(|&(a, e)| a + e).collect();
    let declared: u128 = radices.iter().map(|&r| r as u128).product();

    let mut admissible: u128 = 0;
    let mut blocked: u128 = 0;
    for mut path in 0..declared {
        let mut clean = true;
        for (i, &radix) in radices.iter().enumerate() {
            let outcome = (path % radix as u128) as u32;
            path /= radix as u128;
            // Outcomes are declared admissible-first within each stage.
            if outcome >= shapes[i].0 {
                clean = false;
            }
        }
        if clean {
            admissible += 1;
        } else {
            blocked += 1;
        }
    }
    (admissible, blocked)
}

// ---------------------------------------------------------------------------
// Property Tests
// ---------------------------------------------------------------------------

proptest! {
    /// The certified product equals brute-force enumeration, and the
    /// inadmissible count is zero for every constructible model.
    #[test]
    fn certified_counts_match_enumeration(shapes in arb_stage_shapes()) {
        let set = law_set();
        let model = assemble(&shapes, &set);
        let certificate = PathCertifier::new().certify(&model, &set).unwrap();

        let (total, blocked) = enumerate(&shapes);
        prop_assert_eq!(certificate.total_paths, total);
        prop_assert_eq!(certificate.blocked_paths, blocked);
        prop_assert_eq!(certificate.inadmissible_paths, 0);
    }

    /// Certification is deterministic: two runs over the same model agree
    /// on every count.
    #[test]
    fn certification_is_repeatable(shapes in arb_stage_shapes()) {
        let set = law_set();
        let model = assemble(&shapes, &set);
        let certifier = PathCertifier::new();
        let first = certifier.certify(&model, &set).unwrap();
        let second = certifier.certify(&model, &set).unwrap();
        prop_assert_eq!(first.total_paths, second.total_paths);
        prop_assert_eq!(first.blocked_paths, second.blocked_paths);
        prop_assert_eq!(first.stage_factors, second.stage_factors);
    }

    /// The census closed form equals brute-force path enumeration for every
    /// enumerable (alphabet, budget, depth) combination.
    #[test]
    fn census_matches_enumeration(
        m in 2u32..5,
        budget in 0u32..4,
        max_depth in 1u32..7,
    ) {
        let set = law_set();
        let report = CensusModel::new(m, budget, max_depth)
            .unwrap()
            .sweep(&set)
            .unwrap();

        let mut total: u128 = 0;
        let mut admissible: u128 = 0;
        for depth in 1..=max_depth {
            let paths = (m as u128).pow(depth);
            for mut path in 0..paths {
                let mut bounded_uses = 0u32;
                for _ in 0..depth {
                    if path % m as u128 == 0 {
                        bounded_uses += 1;
                    }
                    path /= m as u128;
                }
                if bounded_uses <= budget {
                    admissible += 1;
                }
            }
            total += paths;
        }

        prop_assert_eq!(report.total_paths, total);
        prop_assert_eq!(report.admissible_paths, admissible);
        prop_assert_eq!(report.blocked_paths, total - admissible);
        prop_assert_eq!(report.inadmissible_reachable, 0);
    }
}
