use chrono::{DateTime, Utc};
use lml_laws::LawSet;
use lml_types::LawSetVersion;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::CertifierError;

/// Depth-sweep census over an operation alphabet.
///
/// Models a generation process where every step picks one of `alphabet_size`
/// operations, one of which is budgeted: it may occur at most
/// `bounded_op_budget` times on any admissible path. Paths that spend the
/// budget and pick the bounded operation again are blocked at the step that
/// would overspend, so no such path exists to completion.
///
/// The census sums, for every depth `1..=max_depth`, the total paths
/// (`m^L`), the admissible paths (budget-respecting arrangements, via
/// binomial closed forms), and the blocked remainder. Arithmetic is
/// O(max_depth²) and independent of the path counts themselves, which is
/// what keeps 10^19-path spaces certifiable in microseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CensusModel {
    alphabet_size: u32,
    bounded_op_budget: u32,
    max_depth: u32,
}

impl CensusModel {
    /// Declare a census model. The alphabet must offer at least one
    /// unbounded alternative, and the sweep needs at least one depth.
    pub fn new(
        alphabet_size: u32,
        bounded_op_budget: u32,
        max_depth: u32,
    ) -> Result<Self, CertifierError> {
        if alphabet_size < 2 {
            return Err(CertifierError::InvalidModel(format!(
                "alphabet of {alphabet_size} leaves no unbounded alternative"
            )));
        }
        if max_depth == 0 {
            return Err(CertifierError::InvalidModel(
                "census depth must be at least 1".into(),
            ));
        }
        Ok(Self {
            alphabet_size,
            bounded_op_budget,
            max_depth,
        })
    }

    pub fn alphabet_size(&self) -> u32 {
        self.alphabet_size
    }

    pub fn bounded_op_budget(&self) -> u32 {
        self.bounded_op_budget
    }

    pub fn max_depth(&self) -> u32 {
        self.max_depth
    }

    /// Admissible paths at exactly depth `L`:
    /// Σ over k in `0..=budget` of C(L, k) · (m−1)^(L−k).
    fn admissible_at(&self, depth: u32) -> Result<u128, CertifierError> {
        let free_ops = (self.alphabet_size - 1) as u128;
        let mut admissible: u128 = 0;
        for k in 0..=self.bounded_op_budget.min(depth) {
            let arrangements = binomial(depth, k)?;
            let fillings = checked_pow(free_ops, depth - k, "admissible paths")?;
            let term = arrangements
                .checked_mul(fillings)
                .ok_or_else(|| overflow("admissible paths"))?;
            admissible = admissible
                .checked_add(term)
                .ok_or_else(|| overflow("admissible paths"))?;
        }
        Ok(admissible)
    }

    /// Sweep all depths and accumulate the census, bound to the law set
    /// version the report certifies under.
    pub fn sweep(&self, law_set: &LawSet) -> Result<CensusReport, CertifierError> {
        let mut total: u128 = 0;
        let mut admissible: u128 = 0;

        for depth in 1..=self.max_depth {
            let total_at = checked_pow(self.alphabet_size as u128, depth, "total paths")?;
            let admissible_at = self.admissible_at(depth)?;
            total = total
                .checked_add(total_at)
                .ok_or_else(|| overflow("total paths"))?;
            admissible = admissible
                .checked_add(admissible_at)
                .ok_or_else(|| overflow("admissible paths"))?;
            debug!(
                depth,
                total_at_depth = total_at,
                admissible_at_depth = admissible_at,
                "census depth accumulated"
            );
        }

        let report = CensusReport {
            law_set_version: law_set.version(),
            alphabet_size: self.alphabet_size,
            bounded_op_budget: self.bounded_op_budget,
            max_depth: self.max_depth,
            total_paths: total,
            admissible_paths: admissible,
            blocked_paths: total - admissible,
            inadmissible_reachable: 0,
            certified_at: Utc::now(),
        };

        info!(
            version = %report.law_set_version,
            max_depth = report.max_depth,
            total_paths = report.total_paths,
            blocked_paths = report.blocked_paths,
            "branching census complete"
        );

        Ok(report)
    }
}

/// Accumulated census over all depths of a [`CensusModel`] sweep.
///
/// `inadmissible_reachable` is zero by the same structural argument the
/// path certifier makes: every budget-overspending path is blocked at the
/// overspending step, so none of them is reachable to its terminal. Blocked
/// attempts are counted; leaked paths cannot be.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CensusReport {
    pub law_set_version: LawSetVersion,
    pub alphabet_size: u32,
    pub bounded_op_budget: u32,
    pub max_depth: u32,
    pub total_paths: u128,
    pub admissible_paths: u128,
    pub blocked_paths: u128,
    /// Paths reaching an inadmissible terminal. Zero by construction.
    pub inadmissible_reachable: u128,
    pub certified_at: DateTime<Utc>,
}

fn overflow(quantity: &str) -> CertifierError {
    CertifierError::PathSpaceOverflow {
        quantity: quantity.to_string(),
    }
}

fn checked_pow(base: u128, exp: u32, quantity: &str) -> Result<u128, CertifierError> {
    base.checked_pow(exp).ok_or_else(|| overflow(quantity))
}

/// C(n, k) by the multiplicative method. Each intermediate value is itself
/// a binomial coefficient, so every division is exact.
fn binomial(n: u32, k: u32) -> Result<u128, CertifierError> {
    if k > n {
        return Ok(0);
    }
    let k = k.min(n - k);
    let mut result: u128 = 1;
    for i in 1..=k as u128 {
        result = result
            .checked_mul((n - k) as u128 + i)
            .ok_or_else(|| overflow("binomial coefficient"))?
            / i;
    }
    Ok(result)
}
