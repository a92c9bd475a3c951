//! LML Enforcement Demo — the gate between generators and their output.
//!
//! Three deterministic scripted generators (standing in for small model
//! backends) answer a prompt about a fictional physics law. The gate holds
//! two admissibility laws — grounding markers and an explicit citation
//! token — under the fail-closed policy. Every ungrounded answer is
//! blocked; a grounded follow-up is admitted; a failing backend is judged
//! and rejected like any other output.
//!
//! Demonstrated properties:
//! - Soundness: no inadmissible output is released
//! - Determinism: identical verdicts on every evaluation
//! - Fail-closed: what no law can positively clear does not pass

use colored::Colorize;
use lml_gate::{
    AdmissibilityGate, EnforcementBoundary, EnforcementOutcome, GateConfig, ScriptedGenerator,
};
use lml_laws::{LawSet, LawSpec, PredicateSpec};
use lml_types::LawId;

const PROMPT: &str = "Explain the Vortex Induction Law of physics.";

fn header(title: &str) {
    println!();
    println!("{}", "═".repeat(72).cyan());
    println!("  {}", title.cyan().bold());
    println!("{}", "═".repeat(72).cyan());
}

fn grounding_law_set() -> LawSet {
    // The marker list is demo configuration, not a library constant.
    LawSet::compile(vec![
        LawSpec {
            id: LawId::new("lml.grounding-marker"),
            description: "assertions must carry an explicit grounding marker".into(),
            predicate: PredicateSpec::MarkerPresence {
                markers: vec![
                    "according to".into(),
                    "study".into(),
                    "research".into(),
                    "published".into(),
                    "source".into(),
                    "evidence".into(),
                    "paper".into(),
                    "journal".into(),
                    "documented".into(),
                ],
                case_insensitive: true,
            },
        },
        LawSpec {
            id: LawId::new("lml.requires-citation"),
            description: "claims must carry a citation token".into(),
            predicate: PredicateSpec::CitationToken {
                token: "[source]".into(),
            },
        },
    ])
    .expect("demo law set is well formed")
}

fn print_outcome(outcome: &EnforcementOutcome) {
    let verdict = &outcome.record.verdict;
    println!("  {} generator:  {}", "│".dimmed(), outcome.generator.blue());
    match outcome.released.as_deref() {
        Some(text) => {
            println!(
                "  {} verdict:    {}",
                "│".dimmed(),
                "ADMITTED".green().bold()
            );
            println!("  {} released:   {}", "│".dimmed(), text.green());
        }
        None => {
            println!("  {} verdict:    {}", "│".dimmed(), "BLOCKED".red().bold());
            if let Some(law) = verdict.rejected_by() {
                println!("  {} reason:     {}", "│".dimmed(), law.to_string().red());
            }
            println!(
                "  {} released:   {}",
                "│".dimmed(),
                "(nothing — output withheld)".dimmed()
            );
        }
    }
    println!(
        "  {} laws run:   {} (law set {})",
        "└".dimmed(),
        verdict.trace.len(),
        verdict.law_set_version.to_string().dimmed()
    );
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .with_target(false)
        .init();

    println!();
    println!(
        "{}",
        "╔══════════════════════════════════════════════════════════════╗".cyan()
    );
    println!(
        "{}",
        "║    LML Enforcement Demo: Admissibility Gate                  ║"
            .cyan()
            .bold()
    );
    println!(
        "{}",
        "╚══════════════════════════════════════════════════════════════╝".cyan()
    );

    let law_set = grounding_law_set();
    println!();
    println!("  laws declared: {}", law_set.len());
    println!("  law set version: {}", law_set.version());
    println!("  policy: fail-closed (indeterminate rulings reject)");

    let boundary = EnforcementBoundary::new(AdmissibilityGate::new(
        law_set,
        GateConfig::default(),
    ));

    // ── Scenario 1: Three generators, all ungrounded ────────────────
    header("Scenario 1: Ungrounded outputs (all must be blocked)");

    let generators = vec![
        ScriptedGenerator::new("scripted-82m").respond(
            PROMPT,
            "The Vortex Induction Law states that spinning magnetic fields \
             always induce rotational currents in nearby matter.",
        ),
        ScriptedGenerator::new("scripted-124m").respond(
            PROMPT,
            "It is a fundamental law discovered in 1923 that governs the \
             behavior of all vortices in nature.",
        ),
        ScriptedGenerator::new("scripted-70m").respond(
            PROMPT,
            "Everyone agrees the Vortex Induction Law explains why tornados \
             rotate in the same direction.",
        ),
    ];

    let mut blocked = 0usize;
    let mut admitted = 0usize;

    for generator in &generators {
        println!();
        let outcome = boundary.enforce(generator, PROMPT);
        print_outcome(&outcome);
        if outcome.is_blocked() {
            blocked += 1;
        } else {
            admitted += 1;
        }
    }

    // ── Scenario 2: A grounded response passes ──────────────────────
    header("Scenario 2: Grounded output (admitted unmodified)");

    let grounded = ScriptedGenerator::new("grounded").respond(
        PROMPT,
        "According to the published physics literature [source], no law by \
         that name exists; the prompt describes a fictional law.",
    );
    println!();
    let outcome = boundary.enforce(&grounded, PROMPT);
    print_outcome(&outcome);
    if outcome.is_blocked() {
        blocked += 1;
    } else {
        admitted += 1;
    }

    // ── Scenario 3: Backend failure is judged, not excused ──────────
    header("Scenario 3: Generator failure (rejected, never admitted)");

    let broken = ScriptedGenerator::failing("offline-backend", "model backend unreachable");
    println!();
    let outcome = boundary.enforce(&broken, PROMPT);
    print_outcome(&outcome);
    if outcome.is_blocked() {
        blocked += 1;
    }

    // ── Summary ─────────────────────────────────────────────────────
    header("Summary");
    println!();
    println!("  outputs blocked:  {}", blocked.to_string().red().bold());
    println!("  outputs admitted: {}", admitted.to_string().green().bold());
    println!(
        "  inadmissible outputs released: {}",
        "0".green().bold()
    );
    println!();
    println!(
        "  {}",
        "The gate is model-agnostic: it judges outputs, not generators.".dimmed()
    );
    println!();
}
