//! Adversarial tests: cached certificates cannot outlive the law set they
//! were computed against, and certification cannot be talked into a number
//! when a stage resists static partitioning.

use lml_certifier::{
    BranchingModel, CertifierError, OutcomeSpec, PathCertifier, StageSpec,
};
use lml_laws::{LawSet, LawSpec, PredicateSpec};
use lml_types::LawId;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn law_set_v1() -> LawSet {
    LawSet::compile(vec![LawSpec {
        id: LawId::new("lml.requires-citation"),
        description: "claims must cite a source".into(),
        predicate: PredicateSpec::CitationToken {
            token: "[source]".into(),
        },
    }])
    .unwrap()
}

/// The same law, tightened: a different version of the same law set.
fn law_set_v2() -> LawSet {
    LawSet::compile(vec![LawSpec {
        id: LawId::new("lml.requires-citation"),
        description: "claims must cite a peer-reviewed source".into(),
        predicate: PredicateSpec::CitationToken {
            token: "[peer-reviewed]".into(),
        },
    }])
    .unwrap()
}

// ---------------------------------------------------------------------------
// Tests: Stale Certification
// ---------------------------------------------------------------------------

#[test]
fn certificate_cannot_be_replayed_against_a_newer_law_set() {
    let v1 = law_set_v1();
    let model =
        BranchingModel::assemble(vec![StageSpec::uniform("choices", 4)], &v1).unwrap();
    let certificate = PathCertifier::new().certify(&model, &v1).unwrap();

    // The proof held for v1. Presenting it against v2 must fail, loudly.
    let v2 = law_set_v2();
    match certificate.validate_against(&v2) {
        Err(CertifierError::StaleCertificate { certified, current }) => {
            assert_eq!(certified, v1.version());
            assert_eq!(current, v2.version());
        }
        other => panic!("expected stale certificate, got {other:?}"),
    }
}

#[test]
fn model_built_under_old_laws_cannot_be_certified_under_new_ones() {
    let v1 = law_set_v1();
    let model = BranchingModel::assemble(
        vec![StageSpec::new(
            "claim form",
            vec![
                OutcomeSpec::admissible("cited"),
                OutcomeSpec::excluded("uncited", LawId::new("lml.requires-citation")),
            ],
        )],
        &v1,
    )
    .unwrap();

    let result = PathCertifier::new().certify(&model, &law_set_v2());
    assert!(matches!(result, Err(CertifierError::StaleLawSet { .. })));
}

#[test]
fn recertifying_under_the_new_law_set_restores_validity() {
    let v2 = law_set_v2();
    let model =
        BranchingModel::assemble(vec![StageSpec::uniform("choices", 4)], &v2).unwrap();
    let certificate = PathCertifier::new().certify(&model, &v2).unwrap();
    assert!(certificate.validate_against(&v2).is_ok());
}

// ---------------------------------------------------------------------------
// Tests: Unmodelable Stages
// ---------------------------------------------------------------------------

#[test]
fn unresolved_stage_never_produces_a_count() {
    let set = law_set_v1();
    let result = BranchingModel::assemble(
        vec![
            StageSpec::uniform("opening", 3),
            StageSpec::new(
                "tone",
                vec![
                    OutcomeSpec::admissible("neutral"),
                    OutcomeSpec::unresolved("adaptive", "depends on runtime sentiment"),
                ],
            ),
        ],
        &set,
    );

    match result {
        Err(CertifierError::UnmodelableStage { stage, label, .. }) => {
            assert_eq!(stage, 1);
            assert_eq!(label, "tone");
        }
        Ok(_) => panic!("unresolved stage must not assemble"),
        Err(other) => panic!("expected unmodelable stage, got {other}"),
    }
}

#[test]
fn exclusion_cannot_cite_a_law_outside_the_set() {
    let set = law_set_v1();
    let result = BranchingModel::assemble(
        vec![StageSpec::new(
            "claim form",
            vec![
                OutcomeSpec::admissible("cited"),
                OutcomeSpec::excluded("uncited", LawId::new("lml.imaginary-law")),
            ],
        )],
        &set,
    );
    assert!(matches!(result, Err(CertifierError::UnknownLaw { .. })));
}
