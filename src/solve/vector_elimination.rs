use itertools::Itertools;

use crate::collections::square::Vector;
use crate::puzzle::{CellId, Value};
use crate::solve::candidates::CandidateGrid;
use crate::solve::{Conflict, ValueSet};

/// Runs exposed-group and hidden-group elimination for every group size on
/// one row or column, then checks the line for contradictory singletons.
///
/// Exposed and hidden groups are dual deductions: k cells sharing the same
/// k-value candidate set claim those values for themselves, and k values
/// confined to k cells claim those cells for themselves. Together with cage
/// reduction they solve most puzzles without search.
pub(crate) fn eliminate_in_vector(
    grid: &mut CandidateGrid,
    vector: Vector,
) -> Result<(), Conflict> {
    let cells: Vec<CellId> = grid.vector_cells(vector).collect();
    for k in 1..=grid.width() / 2 {
        eliminate_exposed_groups(grid, &cells, k, vector);
        eliminate_hidden_groups(grid, &cells, k, vector);
    }
    check_duplicate_singletons(grid, &cells, vector)
}

/// Finds k cells in the line with identical k-element candidate sets and
/// removes their values from every other cell in the line
fn eliminate_exposed_groups(
    grid: &mut CandidateGrid,
    cells: &[CellId],
    k: usize,
    vector: Vector,
) {
    let sized_cells: Vec<CellId> = cells
        .iter()
        .copied()
        .filter(|&id| grid.cell(id).len() == k)
        .collect();
    if sized_cells.len() < k {
        return;
    }
    let groups: Vec<(Vec<CellId>, ValueSet)> = sized_cells
        .into_iter()
        .combinations(k)
        .filter(|group| group.iter().all(|&id| grid.cell(id) == grid.cell(group[0])))
        .map(|group| {
            let values = grid.cell(group[0]).clone();
            (group, values)
        })
        .collect();
    for (group, values) in groups {
        let mut removed = false;
        for &id in cells {
            if group.contains(&id) {
                continue;
            }
            for value in &values {
                removed |= grid.cell_mut(id).remove(value);
            }
        }
        if removed {
            debug!(
                "exposed group {:?} in {:?} at {:?}",
                values,
                vector,
                group.iter().map(|&id| grid.coord(id)).collect::<Vec<_>>()
            );
        }
    }
}

/// Finds k values confined to exactly k cells of the line and restricts
/// those cells to the group's values. Cells outside the group hold none of
/// the values by construction, so only the group cells change.
fn eliminate_hidden_groups(grid: &mut CandidateGrid, cells: &[CellId], k: usize, vector: Vector) {
    let size = grid.width();
    let present_values: Vec<Value> = (1..=size as Value)
        .filter(|&value| cells.iter().any(|&id| grid.cell(id).contains(value)))
        .collect();
    if present_values.len() < k {
        return;
    }
    for values in present_values.into_iter().combinations(k) {
        let holders: Vec<CellId> = cells
            .iter()
            .copied()
            .filter(|&id| values.iter().any(|&value| grid.cell(id).contains(value)))
            .collect();
        if holders.len() != k {
            continue;
        }
        let mut value_set = ValueSet::new(size);
        value_set.extend(values.iter().copied());
        let mut restricted = false;
        for &id in &holders {
            restricted |= grid.cell_mut(id).retain_all(&value_set);
        }
        if restricted {
            debug!(
                "hidden group {:?} in {:?} at {:?}",
                value_set,
                vector,
                holders.iter().map(|&id| grid.coord(id)).collect::<Vec<_>>()
            );
        }
    }
}

/// Two cells in one line fixed to the same value prove the line, and the
/// whole grid, unsatisfiable
fn check_duplicate_singletons(
    grid: &CandidateGrid,
    cells: &[CellId],
    vector: Vector,
) -> Result<(), Conflict> {
    let mut seen = ValueSet::new(grid.width());
    for &id in cells {
        if let Some(value) = grid.cell(id).single_value() {
            if !seen.insert(value) {
                debug!("{} appears in two cells of {:?}", value, vector);
                return Err(Conflict);
            }
        }
    }
    Ok(())
}
