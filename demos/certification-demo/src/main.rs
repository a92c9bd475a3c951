//! LML Certification Demo — closed-form proof over an astronomical path
//! space.
//!
//! Two analyses, both in closed form, neither enumerating a single path:
//!
//! 1. A staged branching model is assembled against the demo law set.
//!    Assembly excludes every outcome a law bars, so the assembled model
//!    cannot represent an inadmissible branch; the certifier then counts
//!    the path space as a product over stage factors.
//! 2. A depth-40 census over a three-operation alphabet with a bounded
//!    operation (at most one use per path) — 18+ quintillion paths,
//!    certified in milliseconds, zero inadmissible terminals.

use colored::Colorize;
use lml_certifier::{
    BranchingModel, CensusModel, OutcomeSpec, PathCertifier, StageSpec,
};
use lml_laws::{LawSet, LawSpec, PredicateSpec};
use lml_types::LawId;

fn header(title: &str) {
    println!();
    println!("{}", "═".repeat(72).cyan());
    println!("  {}", title.cyan().bold());
    println!("{}", "═".repeat(72).cyan());
}

/// Group digits for display: 18236498188585393200 → 18,236,498,188,585,393,200.
fn grouped(value: u128) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

fn demo_law_set() -> LawSet {
    LawSet::compile(vec![
        LawSpec {
            id: LawId::new("lml.no-fabricated-sources"),
            description: "outputs must not invent sources".into(),
            predicate: PredicateSpec::ForbiddenPattern {
                pattern: r"\[fabricated\]".into(),
            },
        },
        LawSpec {
            id: LawId::new("lml.bounded-evolution"),
            description: "at most one unchecked state evolution per path".into(),
            predicate: PredicateSpec::MaxOutputChars { max: 4096 },
        },
    ])
    .expect("demo law set is well formed")
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
        "║    LML Certification Demo: Analytical Path Certifier         ║"
            .cyan()
            .bold()
    );
    println!(
        "{}",
        "╚══════════════════════════════════════════════════════════════╝".cyan()
    );

    let law_set = demo_law_set();
    println!();
    println!("  law set version: {}", law_set.version());

    // ── Part 1: Staged branching model ──────────────────────────────
    header("Part 1: Staged model (construction-time exclusion)");

    let barred = LawId::new("lml.no-fabricated-sources");
    let model = BranchingModel::assemble(
        vec![
            StageSpec::new(
                "claim form",
                vec![
                    OutcomeSpec::admissible("cited claim"),
                    OutcomeSpec::admissible("hedged claim"),
                    OutcomeSpec::admissible("refusal"),
                    OutcomeSpec::excluded("fabricated citation", barred.clone()),
                ],
            ),
            StageSpec::new(
                "elaboration",
                vec![
                    OutcomeSpec::admissible("quote support"),
                    OutcomeSpec::admissible("summarize support"),
                    OutcomeSpec::excluded("invent detail", barred),
                ],
            ),
            StageSpec::uniform("phrasing", 5),
        ],
        &law_set,
    )
    .expect("demo model is statically partitioned");

    let certificate = PathCertifier::new()
        .certify(&model, &law_set)
        .expect("model certifies against its own law set");

    println!();
    println!("  stages:              {}", certificate.stage_count);
    println!("  stage factors:       {:?}", certificate.stage_factors);
    println!(
        "  admissible paths:    {}",
        grouped(certificate.total_paths).green().bold()
    );
    println!(
        "  blocked paths:       {}",
        grouped(certificate.blocked_paths).red()
    );
    println!(
        "  inadmissible paths:  {} {}",
        grouped(certificate.inadmissible_paths).green().bold(),
        "(not representable in the assembled model)".dimmed()
    );

    // ── Part 2: Depth-40 census ─────────────────────────────────────
    header("Part 2: Branching census (3 ops, bounded op budget 1, depth 40)");

    let census = CensusModel::new(3, 1, 40).expect("census parameters are valid");
    let report = census
        .sweep(&law_set)
        .expect("depth-40 census fits in u128 arithmetic");

    println!();
    println!("  alphabet size:       {}", report.alphabet_size);
    println!("  bounded op budget:   {}", report.bounded_op_budget);
    println!("  maximum depth:       {}", report.max_depth);
    println!();
    println!(
        "  total paths:         {}",
        grouped(report.total_paths).cyan().bold()
    );
    println!(
        "  admissible paths:    {}",
        grouped(report.admissible_paths).green()
    );
    println!(
        "  blocked attempts:    {}",
        grouped(report.blocked_paths).red()
    );
    println!(
        "  inadmissible leaked: {}",
        grouped(report.inadmissible_reachable).green().bold()
    );

    // ── Summary ─────────────────────────────────────────────────────
    header("Summary");
    println!();
    println!(
        "  {} paths certified against law set {}",
        grouped(report.total_paths).bold(),
        report.law_set_version
    );
    println!("  zero paths terminate in an inadmissible state");
    println!();
    println!(
        "  {}",
        "Closed-form combinatorics, not enumeration: certification cost".dimmed()
    );
    println!(
        "  {}",
        "is proportional to the number of stages, never the path count.".dimmed()
    );
    println!();
}
