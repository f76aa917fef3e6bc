//! Input arrays of the shapes a sweep measures.

use crate::HarnessError;
use core::fmt;
use ndarray::Array1;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Shape of generated input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
	/// Uniformly random values.
	Random,
	/// Random values sorted in non-increasing order.
	Reversed,
	/// Random values sorted in non-decreasing order with one in a hundred positions swapped.
	AlmostSorted,
}

impl Shape {
	/// All shapes in report order.
	pub const ALL: [Self; 3] = [Self::Random, Self::Reversed, Self::AlmostSorted];

	/// Report section title.
	pub fn title(self) -> &'static str {
		match self {
			Self::Random => "BASIC ARRAY",
			Self::Reversed => "REVERSED ARRAY",
			Self::AlmostSorted => "ALMOST SORTED ARRAY",
		}
	}
}

impl fmt::Display for Shape {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::Random => "random",
			Self::Reversed => "reversed",
			Self::AlmostSorted => "almost-sorted",
		})
	}
}

/// Generates arrays of `len` values in `[min, max]`.
#[derive(Clone, Debug)]
pub struct ArrayGenerator<R = StdRng> {
	len: usize,
	min: i32,
	max: i32,
	rng: R,
}

impl ArrayGenerator<StdRng> {
	/// Seeds the generator with `seed`, or from entropy if `None`.
	pub fn new(len: usize, min: i32, max: i32, seed: Option<u64>) -> Result<Self, HarnessError> {
		let rng = match seed {
			Some(seed) => StdRng::seed_from_u64(seed),
			None => StdRng::from_rng(&mut rand::rng()),
		};
		Self::with_rng(len, min, max, rng)
	}
}

impl<R: Rng> ArrayGenerator<R> {
	/// Draws values from `rng`.
	pub fn with_rng(len: usize, min: i32, max: i32, rng: R) -> Result<Self, HarnessError> {
		if min > max {
			return Err(HarnessError::InvalidValueRange { min, max });
		}
		Ok(Self { len, min, max, rng })
	}

	/// Length of generated arrays.
	pub fn len(&self) -> usize {
		self.len
	}

	/// Whether generated arrays are empty.
	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Generates an array of the given `shape`.
	pub fn generate(&mut self, shape: Shape) -> Array1<i32> {
		match shape {
			Shape::Random => self.random(),
			Shape::Reversed => self.reversed(),
			Shape::AlmostSorted => self.almost_sorted(),
		}
	}

	/// Uniformly random values.
	pub fn random(&mut self) -> Array1<i32> {
		Array1::from_vec(self.values())
	}

	/// Random values in non-increasing order.
	pub fn reversed(&mut self) -> Array1<i32> {
		let mut values = self.values();
		values.sort_unstable_by(|a, b| b.cmp(a));
		Array1::from_vec(values)
	}

	/// Random values in non-decreasing order, then `len / 100` swaps of two random positions.
	pub fn almost_sorted(&mut self) -> Array1<i32> {
		let mut values = self.values();
		values.sort_unstable();
		for _ in 0..self.len / 100 {
			let i = self.rng.random_range(0..self.len);
			let j = self.rng.random_range(0..self.len);
			values.swap(i, j);
		}
		Array1::from_vec(values)
	}

	fn values(&mut self) -> Vec<i32> {
		let (min, max) = (self.min, self.max);
		(0..self.len)
			.map(|_| self.rng.random_range(min..=max))
			.collect()
	}
}
