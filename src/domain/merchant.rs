use reqwest::Url;
use serde::Deserialize;

use crate::domain::errors::PaymentClientError;

pub const DEFAULT_CANCEL_TEXT: &str = "Cancel Payment";

/// Hosted payment page customisation applied to merchant orders.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MerchantAttributes {
	pub redirect_url: Option<String>,
	pub cancel_url:   Option<String>,
	pub cancel_text:  Option<String>,
}

/// Borrowed, fully populated view of [`MerchantAttributes`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedMerchantAttributes<'a> {
	pub redirect_url: &'a str,
	pub cancel_url:   &'a str,
	pub cancel_text:  &'a str,
}

impl MerchantAttributes {
	pub fn with_redirect_url(&self, redirect_url: impl Into<String>) -> Self {
		Self {
			redirect_url: Some(redirect_url.into()),
			..self.clone()
		}
	}

	pub fn with_cancel_url(
		&self,
		cancel_url: impl Into<String>,
		cancel_text: &str,
	) -> Self {
		let cancel_text = if cancel_text.is_empty() {
			DEFAULT_CANCEL_TEXT
		} else {
			cancel_text
		};

		Self {
			cancel_url: Some(cancel_url.into()),
			cancel_text: Some(cancel_text.to_string()),
			..self.clone()
		}
	}

	pub fn resolve(
		&self,
	) -> Result<ResolvedMerchantAttributes<'_>, PaymentClientError> {
		let redirect_url = non_empty(self.redirect_url.as_deref()).ok_or(
			PaymentClientError::ConfigurationMissing {
				field:  "redirectURL",
				setter: "PaymentClient::set_redirect_url",
			},
		)?;
		let cancel_url = non_empty(self.cancel_url.as_deref()).ok_or(
			PaymentClientError::ConfigurationMissing {
				field:  "cancelURL",
				setter: "PaymentClient::set_cancel_url",
			},
		)?;
		let cancel_text = non_empty(self.cancel_text.as_deref()).ok_or(
			PaymentClientError::ConfigurationMissing {
				field:  "cancelText",
				setter: "PaymentClient::set_cancel_url",
			},
		)?;

		Ok(ResolvedMerchantAttributes {
			redirect_url,
			cancel_url,
			cancel_text,
		})
	}
}

fn non_empty(value: Option<&str>) -> Option<&str> {
	value.filter(|v| !v.is_empty())
}

/// When redirect and cancel URLs are checked for well-formedness.
#[derive(Debug, Default, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UrlPolicy {
	/// Store as given; only presence is checked when an order is sent.
	#[default]
	Lenient,
	/// Reject unparsable or non-https URLs in the setters.
	Strict,
}

impl UrlPolicy {
	pub fn check(
		&self,
		field: &'static str,
		url: &str,
	) -> Result<(), PaymentClientError> {
		if *self == UrlPolicy::Lenient {
			return Ok(());
		}

		let invalid = |reason: String| PaymentClientError::InvalidUrl {
			field,
			url: url.to_string(),
			reason,
		};

		let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
		if parsed.scheme() != "https" {
			return Err(invalid(format!(
				"only https is supported, got scheme '{}'",
				parsed.scheme()
			)));
		}

		Ok(())
	}
}
