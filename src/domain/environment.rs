use serde::Deserialize;

pub const PRODUCTION_URL: &str = "https://api.ctechpay.com/";
pub const SANDBOX_URL: &str = "https://api-sandbox.ctechpay.com/";

#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
	Production,
	#[default]
	Sandbox,
}

impl Environment {
	pub fn default_url(&self) -> &'static str {
		match self {
			Environment::Production => PRODUCTION_URL,
			Environment::Sandbox => SANDBOX_URL,
		}
	}
}

/// Resolves the order endpoint for a base URL, trimming trailing slashes so
/// the path separator is never doubled.
pub fn order_endpoint(base_url: &str) -> String {
	format!("{}/?endpoint=order", base_url.trim_end_matches('/'))
}
