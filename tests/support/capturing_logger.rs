use std::sync::{Arc, Mutex};

use log::{Level, Log, Metadata, Record};

#[derive(Debug, Clone, PartialEq)]
pub struct CapturedRecord {
	pub level:   Level,
	pub target:  String,
	pub message: String,
	pub url:     Option<String>,
}

#[derive(Default)]
pub struct CapturingLogger {
	records: Mutex<Vec<CapturedRecord>>,
}

impl CapturingLogger {
	pub fn shared() -> Arc<Self> {
		Arc::new(Self::default())
	}

	pub fn records(&self) -> Vec<CapturedRecord> {
		self.records.lock().unwrap().clone()
	}
}

impl Log for CapturingLogger {
	fn enabled(&self, _: &Metadata) -> bool {
		true
	}

	fn log(&self, record: &Record) {
		let url = record
			.key_values()
			.get(log::kv::Key::from_str("url"))
			.map(|v| v.to_string());

		self.records.lock().unwrap().push(CapturedRecord {
			level: record.level(),
			target: record.target().to_string(),
			message: record.args().to_string(),
			url,
		});
	}

	fn flush(&self) {}
}
