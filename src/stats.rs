/// Describes how a sort call went about sorting its range.
///
/// Both [`intro_sort`](crate::IntroSortExt::intro_sort_with) and
/// [`baseline_sort`](crate::IntroSortExt::baseline_sort_with) produce identical output for
/// identical input. They differ in these counters only.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct SortStats {
	/// Number of partitioning passes.
	pub partitions: usize,
	/// Number of ranges handed to insertion sort.
	pub insertion_sorts: usize,
	/// Number of ranges handed to heapsort because the depth budget ran out.
	pub heap_sorts: usize,
	/// Deepest recursion level at which a range of at least two elements was visited.
	pub max_depth: u32,
}

impl SortStats {
	#[inline]
	pub(crate) fn visit(&mut self, depth: u32) {
		self.max_depth = self.max_depth.max(depth);
	}
}
