use crate::pivot::PivotSource;
use ndarray::ArrayViewMut1;

/// Partitions `v` around a pivot chosen by `pivot`, using Lomuto's scheme.
///
/// The pivot is swapped to the last position, then every element `x` with `!is_less(pivot, x)`,
/// i.e., `x <= pivot`, is moved in front of a running boundary. Finally the pivot is swapped onto
/// the boundary. Returns the final index `mid` of the pivot, so that:
///
///   * `v[..mid]` holds elements less than or equal to the pivot,
///   * `v[mid]` is the pivot,
///   * `v[mid + 1..]` holds elements greater than the pivot.
///
/// Ranges shorter than two elements are already partitioned and return `0` without drawing a
/// pivot.
pub fn partition<T, F, P>(mut v: ArrayViewMut1<'_, T>, pivot: &mut P, is_less: &mut F) -> usize
where
	F: FnMut(&T, &T) -> bool,
	P: PivotSource + ?Sized,
{
	let len = v.len();
	if len < 2 {
		return 0;
	}
	let last = len - 1;

	let chosen = pivot.choose(len);
	assert!(chosen < len, "pivot index {chosen} out of range for length {len}");
	v.swap(chosen, last);

	let mut boundary = 0;
	for i in 0..last {
		if !is_less(&v[last], &v[i]) {
			v.swap(boundary, i);
			boundary += 1;
		}
	}
	v.swap(boundary, last);
	boundary
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::partition;
	use crate::pivot::{FirstPivot, LastPivot, RandomPivot};
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn partitioned(xs: Vec<i32>, seed: u64) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		let mid = partition(array.view_mut(), &mut RandomPivot::seeded(seed), &mut i32::lt);
		if array.len() < 2 {
			assert_eq!(mid, 0);
			return;
		}
		let pivot = array[mid];
		assert!(array.iter().take(mid).all(|&x| x <= pivot));
		assert!(array.iter().skip(mid + 1).all(|&x| x > pivot));
		let mut after = array.to_vec();
		after.sort_unstable();
		assert_eq!(after, sorted);
	}

	#[test]
	fn ties_go_low() {
		let mut array = arr1(&[3, 1, 3, 2, 3]);
		// Picks the last `3` as pivot.
		let mid = partition(array.view_mut(), &mut LastPivot, &mut i32::lt);
		assert_eq!(mid, 4);
		assert_eq!(array[4], 3);
		assert!(array.iter().all(|&x| x <= 3));
	}

	#[test]
	fn minimum_pivot() {
		let mut array = arr1(&[1, 5, 4, 3, 2]);
		let mid = partition(array.view_mut(), &mut FirstPivot, &mut i32::lt);
		assert_eq!(mid, 0);
		assert_eq!(array[0], 1);
	}

	#[test]
	fn degenerate() {
		let mut array = arr1(&[7]);
		let mut calls = 0;
		let mut pivot = |_len: usize| -> usize {
			calls += 1;
			0
		};
		assert_eq!(partition(array.view_mut(), &mut pivot, &mut i32::lt), 0);
		assert_eq!(calls, 0);
		assert_eq!(array, arr1(&[7]));
	}
}
