//! Times the baseline quicksort against introsort on growing prefixes of random, reversed, and
//! almost sorted arrays.
//!
//! Prints one section per shape with lines `<len> <baseline µs> <introsort µs>` to stdout. Logs go
//! to stderr and are filtered by `RUST_LOG`.

use anyhow::Context;
use ndarray_introsort::{
	RandomPivot,
	config::SweepConfig,
	generator::{ArrayGenerator, Shape},
	timing::sweep,
};
use std::io::{self, BufWriter, Write};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_FILTER: &str = "introsort_analysis=info,ndarray_introsort=info";

fn main() -> anyhow::Result<()> {
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
	tracing_subscriber::registry()
		.with(filter)
		.with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
		.init();

	let config = SweepConfig::from_env().context("invalid sweep configuration")?;
	info!(?config, "loaded configuration");

	let mut generator =
		ArrayGenerator::new(config.end, config.min_value, config.max_value, config.seed)
			.context("failed to set up array generator")?;
	let mut pivot = match config.seed {
		Some(seed) => RandomPivot::seeded(seed.wrapping_add(1)),
		None => RandomPivot::from_entropy(),
	};

	let mut out = BufWriter::new(io::stdout().lock());
	for shape in Shape::ALL {
		info!(%shape, len = generator.len(), "generating source array");
		let source = generator.generate(shape);
		writeln!(out, "{}\n", shape.title())?;
		for timing in sweep(source.view(), config.sizes(), &mut pivot) {
			writeln!(out, "{timing}")?;
		}
		writeln!(out)?;
		out.flush().context("failed to write report")?;
	}
	Ok(())
}
