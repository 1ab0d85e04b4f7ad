use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::domain::merchant::ResolvedMerchantAttributes;

/// Form body of an order request.
#[derive(Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest<'a> {
	pub token:               &'a str,
	pub amount:              String,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub merchant_attributes: Option<bool>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub redirect_url:        Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cancel_url:          Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	pub cancel_text:         Option<&'a str>,
}

impl<'a> OrderRequest<'a> {
	pub fn new(token: &'a str, amount: Decimal) -> Self {
		Self {
			token,
			amount: amount.to_string(),
			merchant_attributes: None,
			redirect_url: None,
			cancel_url: None,
			cancel_text: None,
		}
	}

	pub fn with_merchant_attributes(
		self,
		attributes: ResolvedMerchantAttributes<'a>,
	) -> Self {
		Self {
			merchant_attributes: Some(true),
			redirect_url: Some(attributes.redirect_url),
			cancel_url: Some(attributes.cancel_url),
			cancel_text: Some(attributes.cancel_text),
			..self
		}
	}
}

impl fmt::Debug for OrderRequest<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("OrderRequest")
			.field("token", &"***")
			.field("amount", &self.amount)
			.field("merchant_attributes", &self.merchant_attributes)
			.field("redirect_url", &self.redirect_url)
			.field("cancel_url", &self.cancel_url)
			.field("cancel_text", &self.cancel_text)
			.finish()
	}
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct OrderResponse {
	/// Caller-side correlation id. Never sent to, nor read from, the gateway.
	#[serde(skip)]
	pub txn_id:           String,
	pub order_reference:  String,
	#[serde(rename = "payment_page_URL")]
	pub payment_page_url: String,
}
