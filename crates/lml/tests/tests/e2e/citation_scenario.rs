//! End-to-end scenario: one citation law, two candidates, one small
//! branching model.
//!
//! A candidate carrying the citation token is admitted, one lacking it is
//! rejected citing that law, and a [2,2,2] model certifies to 8 paths with
//! zero inadmissible terminals.

use lml_certifier::{BranchingModel, CensusModel, PathCertifier, StageSpec};
use lml_gate::{AdmissibilityGate, GateConfig};
use lml_laws::{LawSet, LawSpec, PredicateSpec, SupportContext};
use lml_types::{Candidate, Decision, LawId};

fn citation_law_set() -> LawSet {
    LawSet::compile(vec![LawSpec {
        id: LawId::new("L1"),
        description: "must contain citation token".into(),
        predicate: PredicateSpec::CitationToken {
            token: "[source]".into(),
        },
    }])
    .unwrap()
}

#[test]
fn cited_candidate_is_admitted() {
    let gate = AdmissibilityGate::new(citation_law_set(), GateConfig::default());
    let candidate = Candidate::text("Nitrogen boils at 77 K [source].");
    let verdict = gate.evaluate(&candidate, &SupportContext::empty());
    assert!(verdict.is_admitted());
}

#[test]
fn uncited_candidate_is_rejected_citing_l1() {
    let gate = AdmissibilityGate::new(citation_law_set(), GateConfig::default());
    let candidate = Candidate::text("Nitrogen boils at 77 K, trust me.");
    let verdict = gate.evaluate(&candidate, &SupportContext::empty());
    assert_eq!(verdict.rejected_by(), Some(&LawId::new("L1")));
    match &verdict.decision {
        Decision::Rejected { evidence, .. } => {
            assert!(evidence.detail.contains("[source]"));
        }
        other => panic!("expected rejection, got {other:?}"),
    }
}

#[test]
fn two_by_two_by_two_model_certifies_eight_paths() {
    let set = citation_law_set();
    let model = BranchingModel::assemble(
        vec![
            StageSpec::uniform("claim selection", 2),
            StageSpec::uniform("phrasing", 2),
            StageSpec::uniform("citation placement", 2),
        ],
        &set,
    )
    .unwrap();

    let certificate = PathCertifier::new().certify(&model, &set).unwrap();
    assert_eq!(certificate.total_paths, 8);
    assert_eq!(certificate.inadmissible_paths, 0);
    assert_eq!(certificate.stage_factors, vec![2, 2, 2]);
    assert!(certificate.validate_against(&set).is_ok());
}

#[test]
fn verdict_and_certificate_share_the_law_set_version() {
    let set = citation_law_set();
    let gate = AdmissibilityGate::new(set.clone(), GateConfig::default());
    let verdict = gate.evaluate(
        &Candidate::text("Cited [source]."),
        &SupportContext::empty(),
    );

    let model =
        BranchingModel::assemble(vec![StageSpec::uniform("only stage", 3)], &set).unwrap();
    let certificate = PathCertifier::new().certify(&model, &set).unwrap();

    assert_eq!(verdict.law_set_version, certificate.law_set_version);
}

#[test]
fn census_sweep_certifies_under_the_same_law_set() {
    let set = citation_law_set();
    let report = CensusModel::new(3, 1, 12).unwrap().sweep(&set).unwrap();
    assert_eq!(report.law_set_version, set.version());
    assert_eq!(report.inadmissible_reachable, 0);
    assert_eq!(
        report.admissible_paths + report.blocked_paths,
        report.total_paths
    );
}
