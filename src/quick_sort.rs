use crate::{partition::partition, pivot::PivotSource, stats::SortStats};
use ndarray::{ArrayViewMut1, Axis};

/// Sorts `v` using plain randomized quicksort, which is *O*(*n*^2) worst-case.
///
/// Has neither an insertion sort base case nor a depth limit and partitions until every range is
/// down to a single element. With the `stacker` feature, recursion grows the stack on demand since
/// adversarial pivots recurse `len` levels deep.
pub fn quick_sort<T, F, P>(v: ArrayViewMut1<'_, T>, pivot: &mut P, is_less: &mut F) -> SortStats
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
	if v.len() < 2 {
		return;
	}
	stats.visit(depth);

	let mid = partition(v.view_mut(), pivot, is_less);
	stats.partitions += 1;

	// Split into `left`, `pivot`, and `right`.
	let (left, right) = v.split_at(Axis(0), mid);
	let (_, right) = right.split_at(Axis(0), 1);

	grow(|| recurse(left, pivot, is_less, depth + 1, stats));
	grow(|| recurse(right, pivot, is_less, depth + 1, stats));
}

#[cfg(feature = "stacker")]
#[inline]
fn grow<R>(f: impl FnOnce() -> R) -> R {
	// Remaining stack below which a new segment is allocated.
	const RED_ZONE: usize = 64 * 1024;
	// Size of each newly allocated segment.
	const STACK_SIZE: usize = 1024 * 1024;

	stacker::maybe_grow(RED_ZONE, STACK_SIZE, f)
}

#[cfg(not(feature = "stacker"))]
#[inline]
fn grow<R>(f: impl FnOnce() -> R) -> R {
	f()
}
