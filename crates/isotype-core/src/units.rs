//! Unit generation: expand aggregate rows into discrete unit records
//!
//! Each row is rounded on its own (half away from zero). Rounding error
//! accumulates per row and is never normalized across the dataset, so the
//! total is `Σ round(count_i / unit_size)`, not `round(Σ count_i / unit_size)`.

use std::collections::BTreeMap;
use std::num::NonZeroU64;

use crate::types::{AggregateRow, RiskKey, Unit};

/// Number of units a single row expands to
pub fn units_for_count(count: u64, unit_size: NonZeroU64) -> u64 {
    let count = u128::from(count);
    let size = u128::from(unit_size.get());
    // floor(count / size + 1/2) without floating point
    ((2 * count + size) / (2 * size)) as u64
}

/// Expand `rows` into the ordered unit sequence
///
/// Rows stay contiguous and in input order; `Unit::index` is the position in
/// the returned vector.
pub fn generate(rows: &[AggregateRow], unit_size: NonZeroU64) -> Vec<Unit> {
    let total: u64 = rows
        .iter()
        .map(|row| units_for_count(row.count, unit_size))
        .sum();
    let mut units = Vec::with_capacity(total as usize);

    for row in rows {
        let n = units_for_count(row.count, unit_size);
        for _ in 0..n {
            units.push(Unit {
                index: units.len(),
                group: row.group.clone(),
                risk: row.risk,
            });
        }
    }

    tracing::debug!(
        "Generated {} units from {} rows (unit size {})",
        units.len(),
        rows.len(),
        unit_size
    );
    units
}

/// Unit totals per risk key, in key order
pub fn count_by_risk(units: &[Unit]) -> BTreeMap<RiskKey, usize> {
    let mut counts = BTreeMap::new();
    for unit in units {
        *counts.entry(unit.risk).or_insert(0) += 1;
    }
    counts
}

/// Unit totals per group name, in first-appearance order
pub fn count_by_group(units: &[Unit]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for unit in units {
        match counts.iter_mut().find(|(group, _)| *group == unit.group) {
            Some((_, n)) => *n += 1,
            None => counts.push((unit.group.clone(), 1)),
        }
    }
    counts
}
