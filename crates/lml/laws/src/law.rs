use lml_types::{Candidate, LawId, Ruling};

use crate::context::SupportContext;

/// A single admissibility law.
///
/// Implementations must be pure and total: `judge` returns a ruling for
/// every candidate, reads nothing beyond its arguments, writes nothing, and
/// never panics. A law that cannot decide rules `Indeterminate` rather than
/// guessing. `LawSet` construction probes each law against degenerate
/// candidates and rejects the set if any probe panics.
pub trait Law: Send + Sync {
    /// Stable identifier, unique within a law set.
    fn id(&self) -> &LawId;

    /// Human-readable statement of what the law requires.
    fn description(&self) -> &str;

    /// Judge one candidate against this law.
    fn judge(&self, candidate: &Candidate, context: &SupportContext) -> Ruling;
}
