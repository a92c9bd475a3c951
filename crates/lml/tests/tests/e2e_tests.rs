#[path = "e2e/citation_scenario.rs"]
mod citation_scenario;

#[path = "e2e/enforcement_run.rs"]
mod enforcement_run;

#[path = "property/verdict_laws.rs"]
mod verdict_laws;

#[path = "property/closed_form_counts.rs"]
mod closed_form_counts;

#[path = "adversarial/stale_certification.rs"]
mod stale_certification;

#[path = "adversarial/gate_bypass.rs"]
mod gate_bypass;
