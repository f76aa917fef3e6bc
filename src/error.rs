/// Errors setting up generators and sweeps.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum HarnessError {
	/// An environment variable holds a value that does not parse.
	#[error("invalid value {value:?} for {name}")]
	InvalidVar {
		/// Variable name.
		name: &'static str,
		/// Raw value.
		value: String,
	},
	/// The sweep would measure no size at all.
	#[error("empty sweep from {start} to {end}")]
	EmptySweep {
		/// First length.
		start: usize,
		/// Last length.
		end: usize,
	},
	/// The sweep would never advance.
	#[error("sweep step must be positive")]
	ZeroStep,
	/// Generated values are drawn from `[min, max]` and need `min <= max`.
	#[error("invalid value range [{min}, {max}]")]
	InvalidValueRange {
		/// Lower bound.
		min: i32,
		/// Upper bound.
		max: i32,
	},
}
