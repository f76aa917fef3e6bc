//! Wall-clock comparison of introsort against the baseline quicksort.

use crate::{IntroSortExt, PivotSource, SortStats};
use core::fmt;
use ndarray::{ArrayView1, s};
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Elapsed time and counters of a single sort call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Run {
	/// Wall-clock time spent sorting.
	pub elapsed: Duration,
	/// How the sort went about it.
	pub stats: SortStats,
}

/// Sorts private copies of a sample and measures each call.
pub struct SortTester;

impl SortTester {
	/// Sorts a copy of `sample` using the baseline quicksort.
	pub fn run_quick_sort<P>(sample: ArrayView1<'_, i32>, pivot: &mut P) -> Run
	where
		P: PivotSource + ?Sized,
	{
		let mut array = sample.to_owned();
		let start = Instant::now();
		let stats = array.baseline_sort_with(pivot, i32::lt);
		let elapsed = start.elapsed();
		debug_assert!(array.is_sorted());
		Run { elapsed, stats }
	}

	/// Sorts a copy of `sample` using introsort.
	pub fn run_intro_sort<P>(sample: ArrayView1<'_, i32>, pivot: &mut P) -> Run
	where
		P: PivotSource + ?Sized,
	{
		let mut array = sample.to_owned();
		let start = Instant::now();
		let stats = array.intro_sort_with(pivot, i32::lt);
		let elapsed = start.elapsed();
		debug_assert!(array.is_sorted());
		Run { elapsed, stats }
	}
}

/// Both sorts measured on the same sample.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Timing {
	/// Sample length.
	pub len: usize,
	/// Baseline quicksort.
	pub quick_sort: Run,
	/// Introsort.
	pub intro_sort: Run,
}

impl Timing {
	/// Measures both sorts on `sample`, baseline first.
	pub fn measure<P>(sample: ArrayView1<'_, i32>, pivot: &mut P) -> Self
	where
		P: PivotSource + ?Sized,
	{
		let quick_sort = SortTester::run_quick_sort(sample, pivot);
		let intro_sort = SortTester::run_intro_sort(sample, pivot);
		Self {
			len: sample.len(),
			quick_sort,
			intro_sort,
		}
	}
}

/// Formats as `<len> <baseline µs> <introsort µs>`.
impl fmt::Display for Timing {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"{} {} {}",
			self.len,
			self.quick_sort.elapsed.as_micros(),
			self.intro_sort.elapsed.as_micros()
		)
	}
}

/// Measures both sorts on every prefix `source[..len]` for `len` in `sizes`.
///
/// # Panics
///
/// Panics if a length exceeds `source.len()`.
pub fn sweep<I, P>(source: ArrayView1<'_, i32>, sizes: I, pivot: &mut P) -> Vec<Timing>
where
	I: IntoIterator<Item = usize>,
	P: PivotSource + ?Sized,
{
	info!(source_len = source.len(), "starting sweep");
	let timings = sizes
		.into_iter()
		.map(|len| {
			let timing = Timing::measure(source.slice(s![..len]), pivot);
			debug!(
				len,
				quick_sort_us = timing.quick_sort.elapsed.as_micros() as u64,
				intro_sort_us = timing.intro_sort.elapsed.as_micros() as u64,
				partitions = timing.intro_sort.stats.partitions,
				heap_sorts = timing.intro_sort.stats.heap_sorts,
				"measured"
			);
			timing
		})
		.collect::<Vec<_>>();
	info!(measurements = timings.len(), "finished sweep");
	timings
}
