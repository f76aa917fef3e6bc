//! Introspective sort for 1-dimensional [`ndarray`] arrays and (sub)views with arbitrary memory
//! layout (e.g., non-contiguous), next to the plain randomized quicksort it is measured against.
//!
//! # Example
//!
//! ```
//! use ndarray_introsort::{ndarray::arr2, IntroSortExt};
//!
//! let mut v = arr2(&[[-5, 4, 1, -3,  2],
//!                    [ 8, 3, 2,  4,  8],
//!                    [38, 9, 3,  0,  3],
//!                    [ 4, 9, 0,  8, -1]]);
//!
//! // Columns are non-contiguous but can be sorted all the same.
//! let mut column = v.column_mut(4);
//! column.intro_sort();
//!
//! assert!(v == arr2(&[[-5, 4, 1, -3, -1],
//!                     [ 8, 3, 2,  4,  2],
//!                     [38, 9, 3,  0,  3],
//!                     [ 4, 9, 0,  8,  8]]));
//! ```
//!
//! # Current Implementation
//!
//! Both sorts partition with Lomuto's scheme around a pivot drawn from a [`PivotSource`], by
//! default a [`RandomPivot`] owning its generator.
//!
//!   * [`intro_sort`](IntroSortExt::intro_sort) sorts ranges shorter than 16 elements with
//!     insertion sort and falls back to heapsort once the recursion depth reaches
//!     `2 * log2(len)` of the range at hand. The budget is re-evaluated for every range.
//!   * [`baseline_sort`](IntroSortExt::baseline_sort) partitions until ranges are down to a single
//!     element.
//!
//! | Resource | Complexity | Introsort        | Baseline quicksort |
//! |----------|------------|------------------|--------------------|
//! | Time     | Average    | *O*(*n* log *n*) | *O*(*n* log *n*)   |
//! | Time     | Worst      | *O*(*n* log *n*) | *O*(*n*^2)         |
//! | Space    | Worst      | *O*(log *n*)     | *O*(*n*)           |
//!
//! Deterministic pivot sources like [`LastPivot`] force worst-case partitions, which makes the
//! heapsort fallback observable through the returned [`SortStats`].
//!
//! # Features
//!
//!   * `std` for randomly seeded convenience methods. Enabled by `default`.
//!   * `stacker` to grow the stack on demand within the unguarded baseline quicksort. Enabled by
//!     `default`.
//!   * `harness` for array generators, the timing harness, and the `introsort-analysis` binary.

#![deny(
	missing_docs,
	rustdoc::broken_intra_doc_links,
	rustdoc::missing_crate_level_docs
)]
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod heap_sort;
mod insertion_sort;
mod intro_sort;
mod partition;
mod pivot;
mod quick_sort;
mod stats;

#[cfg(feature = "harness")]
pub mod config;
#[cfg(feature = "harness")]
mod error;
#[cfg(feature = "harness")]
pub mod generator;
#[cfg(feature = "harness")]
pub mod timing;

#[cfg(feature = "harness")]
pub use crate::error::HarnessError;
pub use crate::{
	heap_sort::{build_max_heap, heap_sort},
	insertion_sort::insertion_sort,
	intro_sort::{MAX_INSERTION, depth_exceeded, intro_sort},
	partition::partition,
	pivot::{FirstPivot, LastPivot, PivotSource, RandomPivot},
	quick_sort::quick_sort,
	stats::SortStats,
};
pub use ndarray;

#[cfg(feature = "std")]
use core::cmp::Ordering::{self, Less};
use ndarray::{ArrayBase, Data, DataMut, Ix1, s};

/// Sorts the inclusive range `[left, right]` of `sequence` using introsort with random pivots.
///
/// An empty range (`left > right`) is a no-op. Elements outside the range are untouched.
///
/// # Panics
///
/// Panics if `left <= right` and `right >= sequence.len()`.
///
/// # Examples
///
/// ```
/// use ndarray_introsort::{ndarray::arr1, sort};
///
/// let mut v = arr1(&[9, 5, 3, 8, 1, 0]);
/// sort(&mut v, 1, 4);
/// assert_eq!(v, arr1(&[9, 1, 3, 5, 8, 0]));
/// ```
#[cfg(feature = "std")]
pub fn sort<A, S>(sequence: &mut ArrayBase<S, Ix1>, left: usize, right: usize)
where
	A: Ord,
	S: DataMut<Elem = A>,
{
	sort_with(sequence, left, right, &mut RandomPivot::from_entropy(), A::lt);
}

/// Sorts the inclusive range `[left, right]` of `sequence` using the unguarded baseline quicksort
/// with random pivots.
///
/// Same contract as [`sort`].
///
/// # Panics
///
/// Panics if `left <= right` and `right >= sequence.len()`.
#[cfg(feature = "std")]
pub fn baseline_sort<A, S>(sequence: &mut ArrayBase<S, Ix1>, left: usize, right: usize)
where
	A: Ord,
	S: DataMut<Elem = A>,
{
	baseline_sort_with(sequence, left, right, &mut RandomPivot::from_entropy(), A::lt);
}

/// Sorts the inclusive range `[left, right]` of `sequence` using introsort with pivots drawn from
/// `pivot` and the strict ordering `is_less`.
///
/// # Panics
///
/// Panics if `left <= right` and `right >= sequence.len()`.
pub fn sort_with<A, S, P, F>(
	sequence: &mut ArrayBase<S, Ix1>,
	left: usize,
	right: usize,
	pivot: &mut P,
	mut is_less: F,
) -> SortStats
where
	S: DataMut<Elem = A>,
	P: PivotSource + ?Sized,
	F: FnMut(&A, &A) -> bool,
{
	if left > right {
		return SortStats::default();
	}
	assert_range(sequence.len(), right);
	intro_sort(sequence.slice_mut(s![left..=right]), pivot, &mut is_less)
}

/// Sorts the inclusive range `[left, right]` of `sequence` using the baseline quicksort with pivots
/// drawn from `pivot` and the strict ordering `is_less`.
///
/// # Panics
///
/// Panics if `left <= right` and `right >= sequence.len()`.
pub fn baseline_sort_with<A, S, P, F>(
	sequence: &mut ArrayBase<S, Ix1>,
	left: usize,
	right: usize,
	pivot: &mut P,
	mut is_less: F,
) -> SortStats
where
	S: DataMut<Elem = A>,
	P: PivotSource + ?Sized,
	F: FnMut(&A, &A) -> bool,
{
	if left > right {
		return SortStats::default();
	}
	assert_range(sequence.len(), right);
	quick_sort(sequence.slice_mut(s![left..=right]), pivot, &mut is_less)
}

#[inline]
fn assert_range(len: usize, right: usize) {
	assert!(right < len, "range end {right} out of bounds for length {len}");
}

/// Extension trait for 1-dimensional [`ArrayBase<S, Ix1>`](`ArrayBase`) array or (sub)view with
/// arbitrary memory layout (e.g., non-contiguous) providing introsort and its quicksort baseline.
pub trait IntroSortExt<A, S>
where
	S: Data<Elem = A>,
{
	/// Sorts the array using introsort with random pivots.
	///
	/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
	/// allocate), and *O*(*n* \* log(*n*)) worst-case.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, IntroSortExt};
	///
	/// let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
	///
	/// v.intro_sort();
	/// assert!(v == arr1(&[1, 2, 3, 5, 8, 9]));
	/// ```
	#[cfg(feature = "std")]
	fn intro_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array using introsort with random pivots and a comparator function.
	///
	/// The comparator function must define a total ordering for the elements in the array. If
	/// the ordering is not total, the order of the elements is unspecified.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, IntroSortExt};
	///
	/// let mut floats = arr1(&[5f64, 4.0, 1.0, 3.0, 2.0]);
	/// floats.intro_sort_by(|a, b| a.partial_cmp(b).unwrap());
	/// assert_eq!(floats, arr1(&[1.0, 2.0, 3.0, 4.0, 5.0]));
	///
	/// // Reverse sorting.
	/// let mut v = arr1(&[1, 5, 4, 3, 2]);
	/// v.intro_sort_by(|a, b| b.cmp(a));
	/// assert!(v == arr1(&[5, 4, 3, 2, 1]));
	/// ```
	#[cfg(feature = "std")]
	fn intro_sort_by<F>(&mut self, compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut;
	/// Sorts the array using introsort with random pivots and a key extraction function.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, IntroSortExt};
	///
	/// let mut v = arr1(&[-5i32, 4, 1, -3, 2]);
	///
	/// v.intro_sort_by_key(|k| k.abs());
	/// assert!(v == arr1(&[1, 2, -3, 4, -5]));
	/// ```
	#[cfg(feature = "std")]
	fn intro_sort_by_key<K, F>(&mut self, f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut;
	/// Sorts the array using introsort with pivots drawn from `pivot` and the strict ordering
	/// `is_less`, returning how the sort went about it.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::Array1, IntroSortExt, LastPivot};
	///
	/// // Always picking the maximum as pivot exhausts the depth budget.
	/// let mut v = Array1::from_iter(0..200);
	/// let stats = v.intro_sort_with(&mut LastPivot, i32::lt);
	///
	/// assert!(v.is_sorted());
	/// assert_eq!(stats.heap_sorts, 1);
	/// ```
	fn intro_sort_with<P, F>(&mut self, pivot: &mut P, is_less: F) -> SortStats
	where
		P: PivotSource + ?Sized,
		F: FnMut(&A, &A) -> bool,
		S: DataMut;

	/// Sorts the array using the baseline quicksort with random pivots.
	///
	/// This sort is unstable, in-place, and *O*(*n*^2) worst-case. It exists to be measured
	/// against [`intro_sort`](IntroSortExt::intro_sort).
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, IntroSortExt};
	///
	/// let mut v = arr1(&[-5, 4, 1, -3, 2]);
	///
	/// v.baseline_sort();
	/// assert!(v == arr1(&[-5, -3, 1, 2, 4]));
	/// ```
	#[cfg(feature = "std")]
	fn baseline_sort(&mut self)
	where
		A: Ord,
		S: DataMut;
	/// Sorts the array using the baseline quicksort with pivots drawn from `pivot` and the strict
	/// ordering `is_less`, returning how the sort went about it.
	fn baseline_sort_with<P, F>(&mut self, pivot: &mut P, is_less: F) -> SortStats
	where
		P: PivotSource + ?Sized,
		F: FnMut(&A, &A) -> bool,
		S: DataMut;

	/// Checks if the elements of this array are sorted.
	///
	/// # Examples
	///
	/// ```
	/// use ndarray_introsort::{ndarray::arr1, IntroSortExt};
	///
	/// assert!(arr1(&[1, 2, 2, 9]).is_sorted());
	/// assert!(!arr1(&[1, 3, 2, 4]).is_sorted());
	/// ```
	#[must_use]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd;
}

impl<A, S> IntroSortExt<A, S> for ArrayBase<S, Ix1>
where
	S: Data<Elem = A>,
{
	#[cfg(feature = "std")]
	#[inline]
	fn intro_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		self.intro_sort_with(&mut RandomPivot::from_entropy(), A::lt);
	}
	#[cfg(feature = "std")]
	#[inline]
	fn intro_sort_by<F>(&mut self, mut compare: F)
	where
		F: FnMut(&A, &A) -> Ordering,
		S: DataMut,
	{
		self.intro_sort_with(&mut RandomPivot::from_entropy(), |a: &A, b: &A| {
			compare(a, b) == Less
		});
	}
	#[cfg(feature = "std")]
	#[inline]
	fn intro_sort_by_key<K, F>(&mut self, mut f: F)
	where
		K: Ord,
		F: FnMut(&A) -> K,
		S: DataMut,
	{
		self.intro_sort_with(&mut RandomPivot::from_entropy(), |a: &A, b: &A| {
			f(a).lt(&f(b))
		});
	}
	#[inline]
	fn intro_sort_with<P, F>(&mut self, pivot: &mut P, mut is_less: F) -> SortStats
	where
		P: PivotSource + ?Sized,
		F: FnMut(&A, &A) -> bool,
		S: DataMut,
	{
		intro_sort(self.view_mut(), pivot, &mut is_less)
	}

	#[cfg(feature = "std")]
	#[inline]
	fn baseline_sort(&mut self)
	where
		A: Ord,
		S: DataMut,
	{
		self.baseline_sort_with(&mut RandomPivot::from_entropy(), A::lt);
	}
	#[inline]
	fn baseline_sort_with<P, F>(&mut self, pivot: &mut P, mut is_less: F) -> SortStats
	where
		P: PivotSource + ?Sized,
		F: FnMut(&A, &A) -> bool,
		S: DataMut,
	{
		quick_sort(self.view_mut(), pivot, &mut is_less)
	}

	#[inline]
	fn is_sorted(&self) -> bool
	where
		A: PartialOrd,
	{
		self.windows(2).into_iter().all(|w| w[0] <= w[1])
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{
		IntroSortExt, LastPivot, RandomPivot, SortStats, baseline_sort, baseline_sort_with, sort,
		sort_with,
	};
	use ndarray::{Array1, arr1, s};
	use quickcheck_macros::quickcheck;
	use rand::{Rng, SeedableRng, rngs::StdRng};

	#[quickcheck]
	fn range_sorted(xs: Vec<i64>, left: usize, right: usize) {
		let len = xs.len();
		if len == 0 {
			return;
		}
		let (left, right) = (left % len, right % len);
		let mut array = Array1::from_vec(xs.clone());
		sort(&mut array, left, right);
		let mut expected = xs;
		if left <= right {
			expected[left..=right].sort_unstable();
		}
		assert_eq!(array, Array1::from_vec(expected));
	}

	#[quickcheck]
	fn baseline_agrees(xs: Vec<i32>, seed: u64) {
		let mut intro = Array1::from_vec(xs);
		let mut baseline = intro.clone();
		let intro_stats = intro.intro_sort_with(&mut RandomPivot::seeded(seed), i32::lt);
		let baseline_stats = baseline.baseline_sort_with(&mut RandomPivot::seeded(seed), i32::lt);
		assert_eq!(intro, baseline);
		assert!(intro.is_sorted());
		assert_eq!(baseline_stats.heap_sorts, 0);
		assert_eq!(baseline_stats.insertion_sorts, 0);
		if intro.len() < 16 {
			assert_eq!(intro_stats.partitions, 0);
		}
	}

	#[quickcheck]
	fn idempotent(xs: Vec<i32>) {
		let mut sorted = xs;
		sorted.sort_unstable();
		let sorted = Array1::from_vec(sorted);
		let mut array = sorted.clone();
		array.intro_sort();
		assert_eq!(array, sorted);
		array.baseline_sort();
		assert_eq!(array, sorted);
	}

	#[test]
	fn end_to_end() {
		let mut v = arr1(&[5, 3, 8, 1, 9, 2]);
		sort(&mut v, 0, 5);
		assert_eq!(v, arr1(&[1, 2, 3, 5, 8, 9]));

		let mut v = Array1::from_iter((1..=20).rev());
		sort(&mut v, 0, 19);
		assert_eq!(v, Array1::from_iter(1..=20));

		let mut v = Array1::from_iter((1..=20).rev());
		baseline_sort(&mut v, 0, 19);
		assert_eq!(v, Array1::from_iter(1..=20));
	}

	#[test]
	fn empty_and_singleton() {
		let mut v = arr1(&[3, 2, 1]);
		let stats = sort_with(&mut v, 2, 1, &mut LastPivot, i32::lt);
		assert_eq!(v, arr1(&[3, 2, 1]));
		assert_eq!(stats, SortStats::default());
		sort(&mut v, 1, 1);
		assert_eq!(v, arr1(&[3, 2, 1]));
		baseline_sort(&mut v, 2, 0);
		assert_eq!(v, arr1(&[3, 2, 1]));

		let mut empty = Array1::<i32>::zeros(0);
		empty.intro_sort();
		empty.baseline_sort();
		assert!(empty.is_sorted());
	}

	#[test]
	#[should_panic]
	fn out_of_bounds() {
		let mut v = arr1(&[3, 2, 1]);
		sort(&mut v, 0, 3);
	}

	#[test]
	#[should_panic(expected = "out of bounds")]
	fn far_out_of_bounds() {
		let mut v = arr1(&[3, 2, 1]);
		sort(&mut v, 0, usize::MAX);
	}

	#[test]
	#[should_panic(expected = "out of bounds")]
	fn baseline_out_of_bounds() {
		let mut v = arr1(&[3, 2, 1]);
		baseline_sort_with(&mut v, 1, usize::MAX, &mut LastPivot, i32::lt);
	}

	#[test]
	fn strided() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut v = Array1::from_iter((0..1_000).map(|_| rng.random_range(-500..500)));
		let odd = v.slice(s![1..;2]).to_owned();
		v.slice_mut(s![..;2]).intro_sort();
		assert!(v.slice(s![..;2]).is_sorted());
		assert_eq!(v.slice(s![1..;2]), odd);
	}

	#[test]
	fn adversarial() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut v = Array1::from_iter((0..5_000).map(|_| rng.random_range(0..6_000)));
		v.intro_sort();
		let stats = v.intro_sort_with(&mut LastPivot, i32::lt);
		assert!(v.is_sorted());
		assert!(stats.heap_sorts > 0);
		assert!(stats.max_depth <= 2 * (usize::BITS - 5_000usize.leading_zeros()));
	}
}
