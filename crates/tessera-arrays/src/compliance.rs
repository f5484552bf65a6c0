//! CellArray contract test helpers.
//!
//! These functions verify that a container satisfies the invariants
//! required by the trait contract. Reused across all container test
//! modules (flat, nested, ragged, strided, indirection).

use std::fmt::Debug;

use tessera_core::CellArray;

/// Assert that `len()` is unchanged by a full traversal.
pub fn assert_len_stable<A: CellArray + ?Sized>(array: &mut A) {
    let before = array.len();
    for i in 0..before {
        let _ = array.get(i);
    }
    assert_eq!(array.len(), before, "len changed during traversal");
}

/// Assert that reading the same cell twice in a row yields equal contents.
pub fn assert_get_repeatable<A>(array: &mut A)
where
    A: CellArray + ?Sized,
    A::Cell: ToOwned,
    <A::Cell as ToOwned>::Owned: PartialEq + Debug,
{
    for i in 0..array.len() {
        let first = array.get(i).to_owned();
        let second = array.get(i).to_owned();
        assert_eq!(first, second, "cell {i} changed between consecutive reads");
    }
}

/// Assert that a copy taken right after `get(i)` is unaffected by every
/// later access on the same instance.
pub fn assert_copy_survives_later_access<A>(array: &mut A)
where
    A: CellArray + ?Sized,
    A::Cell: ToOwned,
    <A::Cell as ToOwned>::Owned: PartialEq + Debug,
{
    let reference = array.to_owned_cells();
    for (i, expected) in reference.iter().enumerate() {
        let copy = array.get(i).to_owned();
        for j in (0..array.len()).rev() {
            let _ = array.get(j);
        }
        assert_eq!(&copy, expected, "copy of cell {i} changed after later accesses");
    }
}

/// Assert that no slice cell is longer than the reported `cell_size`.
pub fn assert_cells_within_cell_size<A, T>(array: &mut A)
where
    A: CellArray<Cell = [T]> + ?Sized,
{
    let Some(max) = array.cell_size() else {
        return;
    };
    for i in 0..array.len() {
        let len = array.get(i).len();
        assert!(len <= max, "cell {i} has {len} elements, cell_size is {max}");
    }
}

/// Run the checks that apply to any container with owned-copyable cells.
pub fn run_sized_compliance<A>(array: &mut A)
where
    A: CellArray + ?Sized,
    A::Cell: ToOwned,
    <A::Cell as ToOwned>::Owned: PartialEq + Debug,
{
    assert_len_stable(array);
    assert_get_repeatable(array);
    assert_copy_survives_later_access(array);
}

/// Run all checks on a slice-celled container.
pub fn run_full_compliance<A, T>(array: &mut A)
where
    A: CellArray<Cell = [T]> + ?Sized,
    T: Clone + PartialEq + Debug,
{
    run_sized_compliance(array);
    assert_cells_within_cell_size(array);
}
