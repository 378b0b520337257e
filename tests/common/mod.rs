/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//! Helpers shared between integration tests

/// Installs a tracing subscriber that writes to the captured test output.
///
/// The log level is read from `RUST_LOG` and defaults to DEBUG, so rejected operations show up in failing tests
pub fn init_logging() {
	use tracing_subscriber::{EnvFilter, filter::LevelFilter};

	let env_filter = EnvFilter::builder()
		.with_default_directive(LevelFilter::DEBUG.into())
		.from_env_lossy();

	if tracing_subscriber::fmt()
		.with_env_filter(env_filter)
		.with_test_writer()
		.try_init()
		.is_err()
	{
		tracing::trace!("Tracing subscriber has already been set up by another test");
	}
}
