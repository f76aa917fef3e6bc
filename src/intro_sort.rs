use crate::{
	heap_sort::heap_sort, insertion_sort::insertion_sort, partition::partition, pivot::PivotSource,
	stats::SortStats,
};
use ndarray::{ArrayViewMut1, Axis};
use tracing::trace;

/// Ranges shorter than this get sorted using insertion sort.
pub const MAX_INSERTION: usize = 16;

/// Sorts `v` using introspective sort, which is *O*(*n* \* log(*n*)) worst-case.
///
/// Partitions around pivots drawn from `pivot` while the recursion depth stays below
/// `2 * log2(len)` of the current range, sorts short ranges with insertion sort and falls back to
/// heapsort once the depth budget of a range is spent.
pub fn intro_sort<T, F, P>(v: ArrayViewMut1<'_, T>, pivot: &mut P, is_less: &mut F) -> SortStats
where
	F: FnMut(&T, &T) -> bool,
	P: PivotSource + ?Sized,
{
	let mut stats = SortStats::default();
	recurse(v, pivot, is_less, 0, &mut stats);
	stats
}

fn recurse<T, F, P>(
	mut v: ArrayViewMut1<'_, T>,
	pivot: &mut P,
	is_less: &mut F,
	depth: u32,
	stats: &mut SortStats,
) where
	F: FnMut(&T, &T) -> bool,
	P: PivotSource + ?Sized,
{
	let len = v.len();
	if len < 2 {
		return;
	}
	stats.visit(depth);

	if len < MAX_INSERTION {
		insertion_sort(v, is_less);
		stats.insertion_sorts += 1;
		return;
	}

	if depth_exceeded(depth, len) {
		trace!(depth, len, "depth budget exceeded, falling back to heapsort");
		heap_sort(v, is_less);
		stats.heap_sorts += 1;
		return;
	}

	let mid = partition(v.view_mut(), pivot, is_less);
	stats.partitions += 1;

	// Split into `left`, `pivot`, and `right`.
	let (left, right) = v.split_at(Axis(0), mid);
	let (_, right) = right.split_at(Axis(0), 1);

	recurse(left, pivot, is_less, depth + 1, stats);
	recurse(right, pivot, is_less, depth + 1, stats);
}

/// Whether `depth >= 2 * log2(len)`.
///
/// Evaluated exactly as `2^depth >= len^2`.
pub fn depth_exceeded(depth: u32, len: usize) -> bool {
	if depth >= u128::BITS {
		return true;
	}
	let len = len as u128;
	len.saturating_mul(len) <= 1u128 << depth
}
