use serde::Deserialize;

use crate::domain::environment::Environment;
use crate::domain::merchant::UrlPolicy;

pub const ENV_PREFIX: &str = "CTECHPAY";

#[derive(Debug, Deserialize, Clone)]
pub struct Settings {
	pub api_token:      String,
	#[serde(default)]
	pub environment:    Environment,
	#[serde(default = "default_timeout_secs")]
	pub timeout_secs:   u64,
	pub production_url: Option<String>,
	pub sandbox_url:    Option<String>,
	pub redirect_url:   Option<String>,
	pub cancel_url:     Option<String>,
	/// Only applied together with `cancel_url`; ignored when it is unset.
	pub cancel_text:    Option<String>,
	#[serde(default)]
	pub strict_urls:    bool,
}

fn default_timeout_secs() -> u64 {
	30
}

impl Settings {
	pub fn load() -> Result<Self, config::ConfigError> {
		Self::load_with_prefix(ENV_PREFIX)
	}

	pub fn load_with_prefix(prefix: &str) -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.add_source(config::Environment::with_prefix(prefix))
			.build()?;

		config_builder.try_deserialize()
	}

	/// Endpoint override for the selected environment, if one is configured.
	pub fn base_url_override(&self) -> Option<&str> {
		match self.environment {
			Environment::Production => self.production_url.as_deref(),
			Environment::Sandbox => self.sandbox_url.as_deref(),
		}
	}

	pub fn url_policy(&self) -> UrlPolicy {
		if self.strict_urls {
			UrlPolicy::Strict
		} else {
			UrlPolicy::Lenient
		}
	}

	pub fn has_merchant_attributes(&self) -> bool {
		self.redirect_url.is_some() && self.cancel_url.is_some()
	}
}

#[cfg(test)]
mod tests {
	use std::env;

	use super::*;

	#[test]
	fn test_config_load() {
		unsafe {
			env::set_var("CTECHPAY_T1_API_TOKEN", "tok-123");
			env::set_var("CTECHPAY_T1_ENVIRONMENT", "production");
			env::set_var("CTECHPAY_T1_TIMEOUT_SECS", "5");
			env::set_var("CTECHPAY_T1_PRODUCTION_URL", "https://gateway.test/");
			env::set_var("CTECHPAY_T1_REDIRECT_URL", "https://shop.test/done");
			env::set_var("CTECHPAY_T1_CANCEL_URL", "https://shop.test/cancel");
			env::set_var("CTECHPAY_T1_STRICT_URLS", "true");
		};

		let settings = Settings::load_with_prefix("CTECHPAY_T1")
			.expect("Failed to load config in test");

		assert_eq!(settings.api_token, "tok-123");
		assert_eq!(settings.environment, Environment::Production);
		assert_eq!(settings.timeout_secs, 5);
		assert_eq!(settings.base_url_override(), Some("https://gateway.test/"));
		assert_eq!(settings.url_policy(), UrlPolicy::Strict);
		assert!(settings.has_merchant_attributes());
		assert_eq!(settings.cancel_text, None);

		unsafe {
			env::remove_var("CTECHPAY_T1_API_TOKEN");
			env::remove_var("CTECHPAY_T1_ENVIRONMENT");
			env::remove_var("CTECHPAY_T1_TIMEOUT_SECS");
			env::remove_var("CTECHPAY_T1_PRODUCTION_URL");
			env::remove_var("CTECHPAY_T1_REDIRECT_URL");
			env::remove_var("CTECHPAY_T1_CANCEL_URL");
			env::remove_var("CTECHPAY_T1_STRICT_URLS");
		}
	}

	#[test]
	fn test_config_load_defaults() {
		unsafe {
			env::set_var("CTECHPAY_T2_API_TOKEN", "tok-456");
		};

		let settings = Settings::load_with_prefix("CTECHPAY_T2")
			.expect("Failed to load config in test");

		assert_eq!(settings.api_token, "tok-456");
		assert_eq!(settings.environment, Environment::Sandbox);
		assert_eq!(settings.timeout_secs, 30);
		assert_eq!(settings.base_url_override(), None);
		assert_eq!(settings.url_policy(), UrlPolicy::Lenient);
		assert!(!settings.has_merchant_attributes());

		unsafe {
			env::remove_var("CTECHPAY_T2_API_TOKEN");
		}
	}

	#[test]
	fn test_cancel_text_without_cancel_url_is_ignored() {
		unsafe {
			env::set_var("CTECHPAY_T4_API_TOKEN", "tok-789");
			env::set_var("CTECHPAY_T4_CANCEL_TEXT", "Back to shop");
		};

		let settings = Settings::load_with_prefix("CTECHPAY_T4")
			.expect("Failed to load config in test");
		let client = crate::PaymentClient::from_settings(&settings).unwrap();

		assert_eq!(settings.cancel_text.as_deref(), Some("Back to shop"));
		assert_eq!(client.merchant_attributes().cancel_text, None);
		assert_eq!(client.merchant_attributes().cancel_url, None);

		unsafe {
			env::remove_var("CTECHPAY_T4_API_TOKEN");
			env::remove_var("CTECHPAY_T4_CANCEL_TEXT");
		}
	}

	#[test]
	fn test_config_load_requires_token() {
		assert!(Settings::load_with_prefix("CTECHPAY_T3").is_err());
	}
}
