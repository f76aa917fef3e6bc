use ndarray::ArrayViewMut1;

/// Sorts `v` using insertion sort, which is *O*(*n*^2) worst-case.
///
/// Each element is shifted to the left past every greater neighbor, so equal elements keep their
/// relative order and already sorted input costs a single comparison per element.
pub fn insertion_sort<T, F>(mut v: ArrayViewMut1<'_, T>, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	for i in 1..v.len() {
		shift_tail(v.view_mut(), i, is_less);
	}
}

/// Shifts `v[tail]` to the left until it encounters a smaller or equal element.
fn shift_tail<T, F>(mut v: ArrayViewMut1<'_, T>, tail: usize, is_less: &mut F)
where
	F: FnMut(&T, &T) -> bool,
{
	let mut i = tail;
	while i > 0 && is_less(&v[i], &v[i - 1]) {
		v.swap(i - 1, i);
		i -= 1;
	}
}

#[cfg(feature = "std")]
#[cfg(test)]
mod test {
	use super::insertion_sort;
	use ndarray::{Array1, arr1};
	use quickcheck_macros::quickcheck;

	#[quickcheck]
	fn sorted(xs: Vec<i32>) {
		let mut sorted = xs.clone();
		sorted.sort_unstable();
		let mut array = Array1::from_vec(xs);
		insertion_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, Array1::from_vec(sorted));
	}

	#[test]
	fn reversed() {
		let mut array = Array1::from_iter((1..=15).rev());
		insertion_sort(array.view_mut(), &mut i32::lt);
		assert_eq!(array, Array1::from_iter(1..=15));
	}

	#[test]
	fn stable() {
		let mut array = arr1(&[(2, 'a'), (1, 'b'), (2, 'c'), (1, 'd')]);
		insertion_sort(array.view_mut(), &mut |a: &(i32, char), b: &(i32, char)| a.0 < b.0);
		assert_eq!(array, arr1(&[(1, 'b'), (1, 'd'), (2, 'a'), (2, 'c')]));
	}
}
