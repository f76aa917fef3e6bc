//! Pivot index providers for [`partition`](fn@crate::partition).

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Provider of pivot indices.
///
/// `choose(len)` must return an index in `0..len`. It is only ever called with `len >= 2`.
///
/// Closures `FnMut(usize) -> usize` are pivot sources, which makes it easy to force specific
/// partition patterns, e.g., `|len| len - 1` always picks the last element of a range.
pub trait PivotSource {
	/// Returns the index of the pivot within a range of length `len`.
	fn choose(&mut self, len: usize) -> usize;
}

impl<F> PivotSource for F
where
	F: FnMut(usize) -> usize,
{
	#[inline]
	fn choose(&mut self, len: usize) -> usize {
		self(len)
	}
}

/// Draws pivot indices uniformly at random from its own generator.
///
/// Every instance owns its stream. Two sorts seeded alike draw identical pivot sequences.
#[derive(Clone, Debug)]
pub struct RandomPivot<R = StdRng> {
	rng: R,
}

impl<R: Rng> RandomPivot<R> {
	/// Wraps an existing generator.
	pub fn new(rng: R) -> Self {
		Self { rng }
	}
	/// Returns the wrapped generator.
	pub fn into_inner(self) -> R {
		self.rng
	}
}

impl RandomPivot<StdRng> {
	/// Reproducible pivot stream.
	pub fn seeded(seed: u64) -> Self {
		Self::new(StdRng::seed_from_u64(seed))
	}
	/// Fresh pivot stream seeded from the thread-local generator.
	#[cfg(feature = "std")]
	pub fn from_entropy() -> Self {
		Self::new(StdRng::from_rng(&mut rand::rng()))
	}
}

impl<R: Rng> PivotSource for RandomPivot<R> {
	#[inline]
	fn choose(&mut self, len: usize) -> usize {
		debug_assert!(len > 0);
		self.rng.random_range(0..len)
	}
}

/// Always picks the first element of a range.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstPivot;

impl PivotSource for FirstPivot {
	#[inline]
	fn choose(&mut self, _len: usize) -> usize {
		0
	}
}

/// Always picks the last element of a range.
///
/// On already sorted input every partition is maximally imbalanced.
#[derive(Clone, Copy, Debug, Default)]
pub struct LastPivot;

impl PivotSource for LastPivot {
	#[inline]
	fn choose(&mut self, len: usize) -> usize {
		len - 1
	}
}
