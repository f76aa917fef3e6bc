//! Derivative work of [`core::slice::sort`] licensed under `MIT OR Apache-2.0`.
//!
//! [`core::slice::sort`]: https://doc.rust-lang.org/src/core/slice/sort.rs.html

use ndarray::ArrayViewMut1;

/// Sorts `v` using heapsort, which guarantees *O*(*n* \* log(*n*)) worst-case.
///
/// Heap indices are relative to the start of `v`, so `v` may be any (sub)view of a larger array.
#[cold]
pub fn heap_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	build_max_heap(v.view_mut(), is_less);

	// Move the root behind the shrinking heap and restore the heap in front of it.
	for end in (1..v.len()).rev() {
		v.swap(0, end);
		sift_down(v.view_mut(), 0, end, is_less);
	}
}

/// Rearranges `v` into a binary max-heap in linear time.
///
/// Afterwards, `!is_less(&v[i], &v[c])` holds for every child `c` in `2 * i + 1` and `2 * i + 2`.
pub fn build_max_heap<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let len = v.len();
	for root in (0..len / 2).rev() {
		sift_down(v.view_mut(), root, len, is_less);
	}
}

/// Moves `v[root]` down the heap `v[..heap_len]` until neither child of its slot is greater.
///
/// The tree is rooted at index `0` of `v`, i.e., at the start of the sorted range, not of the
/// underlying array.
fn sift_down<T, F>(mut v: ArrayViewMut1<'_, T>, mut root: usize, heap_len: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	loop {
		let left = 2 * root + 1;
		let right = left + 1;

		let mut largest = root;
		if left < heap_len && is_less(&v[largest], &v[left]) {
			largest = left;
		}
		if right < heap_len && is_less(&v[largest], &v[right]) {
			largest = right;
		}
		if largest == root {
			return;
		}

		v.swap(root, largest);
		root = largest;
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::{build_max_heap, heap_sort};
	use ndarray::{Array1, ArrayView1, s};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<i32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		heap_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, Array1::from_vec(sorted));
	}

	fn assert_max_heap(heap: ArrayView1<'_, i32>) {
		let len = heap.len();
		for i in 0..len / 2 {
			for child in [2 * i + 1, 2 * i + 2] {
				if child < len {
					assert!(heap[i] >= heap[child]);
				}
			}
		}
	}

	#[quickcheck]
	fn max_heap(xs: Vec<i32>) {
		let mut array = Array1::from_vec(xs);
		build_max_heap(array.view_mut(), &mut i32::lt);
		assert_max_heap(array.view());
	}

	#[quickcheck]
	fn max_heap_subrange(xs: Vec<i32>, left: usize, right: usize) {
		let len = xs.len();
		if len == 0 {
			return;
		}
		let (left, right) = (left % len, right % len);
		let (left, right) = (left.min(right), left.max(right));
		let mut array = Array1::from_vec(xs.clone());
		build_max_heap(array.slice_mut(s![left..=right]), &mut i32::lt);
		assert_max_heap(array.slice(s![left..=right]));

		// Outside the range nothing moves, inside the multiset is kept.
		assert_eq!(array.slice(s![..left]), Array1::from_vec(xs[..left].to_vec()));
		assert_eq!(array.slice(s![right + 1..]), Array1::from_vec(xs[right + 1..].to_vec()));
		let mut heap = array.slice(s![left..=right]).to_vec();
		let mut expected = xs[left..=right].to_vec();
		heap.sort_unstable();
		expected.sort_unstable();
		assert_eq!(heap, expected);
	}

	#[quickcheck]
	fn subrange(xs: Vec<i32>, left: usize, right: usize) {
		let len = xs.len();
		if len == 0 {
			return;
		}
		let (left, right) = (left % len, right % len);
		let (left, right) = (left.min(right), left.max(right));
		let mut array = Array1::from_vec(xs.clone());
		heap_sort(array.slice_mut(s![left..=right]), &mut i32::lt);
		let mut expected = xs;
		expected[left..=right].sort_unstable();
		assert_eq!(array, Array1::from_vec(expected));
	}
}
