use std::sync::Arc;

use log::{Level, Log, Metadata, Record};

pub type SharedLogger = Arc<dyn Log>;

pub const LOG_TARGET: &str = "ctechpay_client";

/// Logger that discards every record. Default for new clients.
#[derive(Debug, Default, Clone, Copy)]
pub struct NopLogger;

impl Log for NopLogger {
	fn enabled(&self, _: &Metadata) -> bool {
		false
	}

	fn log(&self, _: &Record) {}

	fn flush(&self) {}
}

pub fn nop_logger() -> SharedLogger {
	Arc::new(NopLogger)
}

/// Builds an `env_logger` instance driven by `RUST_LOG` without installing it
/// as the global logger.
pub fn env_logger() -> SharedLogger {
	Arc::new(::env_logger::Builder::from_default_env().build())
}

pub fn debug_with_url(logger: &dyn Log, message: &str, url: &str) {
	let metadata = Metadata::builder()
		.level(Level::Debug)
		.target(LOG_TARGET)
		.build();
	if !logger.enabled(&metadata) {
		return;
	}

	let kvs: &[(&str, &str)] = &[("url", url)];
	logger.log(
		&Record::builder()
			.metadata(metadata)
			.args(format_args!("{message} {url}"))
			.module_path_static(Some(module_path!()))
			.key_values(&kvs)
			.build(),
	);
}
