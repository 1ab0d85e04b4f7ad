use derive_more::derive::{Display, Error};

#[derive(Debug, Display, Error)]
pub enum PaymentClientError {
	#[display("{field} must be set via {setter} before requesting merchant attributes")]
	ConfigurationMissing {
		field:  &'static str,
		setter: &'static str,
	},
	#[display("amount must not be negative, got: {amount}")]
	InvalidAmount { amount: String },
	#[display("invalid {field} '{url}': {reason}")]
	InvalidUrl {
		field:  &'static str,
		url:    String,
		reason: String,
	},
	#[display("failed to build http client, got: {source}")]
	ClientBuild { source: reqwest::Error },
	#[display("failed to create order, got: {source}")]
	TransportFailure { source: reqwest::Error },
	#[display("failed to read response body, got: {source}")]
	ResponseReadFailure { source: reqwest::Error },
	#[display("failed to parse order response as JSON: {source}")]
	ResponseParseFailure { source: serde_json::Error },
}

impl PaymentClientError {
	pub fn name(&self) -> &'static str {
		match self {
			PaymentClientError::ConfigurationMissing { .. } => "ConfigurationMissing",
			PaymentClientError::InvalidAmount { .. } => "InvalidAmount",
			PaymentClientError::InvalidUrl { .. } => "InvalidUrl",
			PaymentClientError::ClientBuild { .. } => "ClientBuild",
			PaymentClientError::TransportFailure { .. } => "TransportFailure",
			PaymentClientError::ResponseReadFailure { .. } => "ResponseReadFailure",
			PaymentClientError::ResponseParseFailure { .. } => "ResponseParseFailure",
		}
	}

	/// Errors raised before any network I/O took place.
	pub fn is_local(&self) -> bool {
		matches!(
			self,
			PaymentClientError::ConfigurationMissing { .. } |
				PaymentClientError::InvalidAmount { .. } |
				PaymentClientError::InvalidUrl { .. } |
				PaymentClientError::ClientBuild { .. }
		)
	}
}

impl From<serde_json::Error> for PaymentClientError {
	fn from(source: serde_json::Error) -> Self {
		PaymentClientError::ResponseParseFailure { source }
	}
}
