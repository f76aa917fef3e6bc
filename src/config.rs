//! Sweep configuration read from the environment.

use crate::HarnessError;
use core::{iter::StepBy, ops::RangeInclusive, str::FromStr};

/// Sizes and value ranges of a sweep.
///
/// Every shape is generated once with `end` elements. Prefixes of lengths `start`, `start + step`,
/// ... up to `end` are then measured.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SweepConfig {
	/// Shortest measured prefix.
	pub start: usize,
	/// Longest measured prefix and length of generated arrays.
	pub end: usize,
	/// Increment between measured prefixes.
	pub step: usize,
	/// Smallest generated value.
	pub min_value: i32,
	/// Largest generated value.
	pub max_value: i32,
	/// Seed of array generators and pivot sources. Drawn from entropy if `None`.
	pub seed: Option<u64>,
}

impl Default for SweepConfig {
	fn default() -> Self {
		Self {
			start: 500,
			end: 10_000,
			step: 100,
			min_value: 0,
			max_value: 6_000,
			seed: None,
		}
	}
}

impl SweepConfig {
	/// Reads `INTROSORT_*` variables, honoring a `.env` file, on top of the defaults.
	pub fn from_env() -> Result<Self, HarnessError> {
		dotenv::dotenv().ok();
		Self::from_lookup(|name| dotenv::var(name).ok())
	}

	/// Like [`from_env`](Self::from_env) but resolves variables with `lookup`.
	pub fn from_lookup<L>(mut lookup: L) -> Result<Self, HarnessError>
	where
		L: FnMut(&'static str) -> Option<String>,
	{
		let default = Self::default();
		let config = Self {
			start: parse(&mut lookup, "INTROSORT_SWEEP_START")?.unwrap_or(default.start),
			end: parse(&mut lookup, "INTROSORT_SWEEP_END")?.unwrap_or(default.end),
			step: parse(&mut lookup, "INTROSORT_SWEEP_STEP")?.unwrap_or(default.step),
			min_value: parse(&mut lookup, "INTROSORT_MIN_VALUE")?.unwrap_or(default.min_value),
			max_value: parse(&mut lookup, "INTROSORT_MAX_VALUE")?.unwrap_or(default.max_value),
			seed: parse(&mut lookup, "INTROSORT_SEED")?,
		};
		config.validate()?;
		Ok(config)
	}

	/// Checks that the sweep measures at least one size and values can be drawn.
	pub fn validate(&self) -> Result<(), HarnessError> {
		if self.step == 0 {
			return Err(HarnessError::ZeroStep);
		}
		if self.start == 0 || self.start > self.end {
			return Err(HarnessError::EmptySweep {
				start: self.start,
				end: self.end,
			});
		}
		if self.min_value > self.max_value {
			return Err(HarnessError::InvalidValueRange {
				min: self.min_value,
				max: self.max_value,
			});
		}
		Ok(())
	}

	/// Measured prefix lengths.
	pub fn sizes(&self) -> StepBy<RangeInclusive<usize>> {
		(self.start..=self.end).step_by(self.step)
	}
}

fn parse<T, L>(lookup: &mut L, name: &'static str) -> Result<Option<T>, HarnessError>
where
	T: FromStr,
	L: FnMut(&'static str) -> Option<String>,
{
	let Some(value) = lookup(name) else {
		return Ok(None);
	};
	match value.trim().parse() {
		Ok(parsed) => Ok(Some(parsed)),
		Err(_) => Err(HarnessError::InvalidVar { name, value }),
	}
}
