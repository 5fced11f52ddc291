//! Logging utilities for the engine.
//!
//! Uses `tracing_subscriber` to configure structured logging. The embedding
//! application (the conversation layer) normally calls `setup_logging` once
//! at startup; tests use `setup_logging_with_writer` to capture output.

use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

/// Setup logging to stdout, filtered by `RUST_LOG` (default `info`)
pub fn setup_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
	setup_logging_with_writer(std::io::stdout)?;
	Ok(())
}

/// Setup logging with a custom writer
pub fn setup_logging_with_writer<W>(
	writer: W,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>>
where
	W: for<'writer> tracing_subscriber::fmt::MakeWriter<'writer> + Send + Sync + 'static,
{
	// Create a filter based on environment variable or default to INFO
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::registry()
		.with(filter)
		.with(
			fmt::layer()
				.with_writer(writer)
				.event_format(
					fmt::format()
						.with_level(true)
						.with_target(true)
						.with_thread_ids(false)
						.with_thread_names(false)
						.with_ansi(true)
						.compact(),
				)
				.fmt_fields(fmt::format::PrettyFields::new()),
		)
		.try_init()?;
	Ok(())
}
