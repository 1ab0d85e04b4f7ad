use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use reqwest::Client;
use rust_decimal::Decimal;

use crate::config::Settings;
use crate::domain::environment::{Environment, order_endpoint};
use crate::domain::errors::PaymentClientError;
use crate::domain::merchant::{MerchantAttributes, UrlPolicy};
use crate::domain::order::{OrderRequest, OrderResponse};
use crate::infrastructure::logging::{SharedLogger, debug_with_url, nop_logger};

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the CTechPay order API.
///
/// Token, endpoint, transport and logger are fixed at construction. Merchant
/// attributes are held as an immutable snapshot that setters replace as a
/// whole, so every order sees one consistent set of values. No ordering is
/// guaranteed between a setter on one task and an order sent from another.
pub struct PaymentClient {
	api_token:  String,
	base_url:   String,
	http:       Client,
	logger:     SharedLogger,
	url_policy: UrlPolicy,
	merchant:   RwLock<Arc<MerchantAttributes>>,
}

impl PaymentClient {
	pub fn production(
		token: impl Into<String>,
		timeout: Duration,
	) -> Result<Self, PaymentClientError> {
		Self::builder(token)
			.environment(Environment::Production)
			.timeout(timeout)
			.build()
	}

	pub fn sandbox(
		token: impl Into<String>,
		timeout: Duration,
	) -> Result<Self, PaymentClientError> {
		Self::builder(token)
			.environment(Environment::Sandbox)
			.timeout(timeout)
			.build()
	}

	pub fn builder(token: impl Into<String>) -> PaymentClientBuilder {
		PaymentClientBuilder::new(token)
	}

	pub fn from_settings(settings: &Settings) -> Result<Self, PaymentClientError> {
		PaymentClientBuilder::from_settings(settings).build()
	}

	pub fn base_url(&self) -> &str {
		&self.base_url
	}

	pub fn merchant_attributes(&self) -> Arc<MerchantAttributes> {
		self.merchant
			.read()
			.unwrap_or_else(PoisonError::into_inner)
			.clone()
	}

	/// Sets the URL the customer is sent back to after paying.
	pub fn set_redirect_url(
		&self,
		redirect_url: &str,
	) -> Result<(), PaymentClientError> {
		self.url_policy.check("redirectURL", redirect_url)?;
		self.update_merchant(|current| current.with_redirect_url(redirect_url));
		Ok(())
	}

	/// Sets the cancel URL and its link text. Empty text falls back to
	/// "Cancel Payment".
	pub fn set_cancel_url(
		&self,
		cancel_url: &str,
		cancel_text: &str,
	) -> Result<(), PaymentClientError> {
		self.url_policy.check("cancelURL", cancel_url)?;
		self.update_merchant(|current| {
			current.with_cancel_url(cancel_url, cancel_text)
		});
		Ok(())
	}

	fn update_merchant(
		&self,
		update: impl FnOnce(&MerchantAttributes) -> MerchantAttributes,
	) {
		let mut guard =
			self.merchant.write().unwrap_or_else(PoisonError::into_inner);
		let next = Arc::new(update(&guard));
		*guard = next;
	}

	/// Initiates a card payment order on the gateway.
	///
	/// `txn_id` is kept on the caller's side and attached to the response.
	/// Exactly one request is attempted.
	pub async fn initiate_card_order(
		&self,
		txn_id: &str,
		amount: Decimal,
		use_merchant_attributes: bool,
	) -> Result<OrderResponse, PaymentClientError> {
		if amount < Decimal::ZERO {
			return Err(PaymentClientError::InvalidAmount {
				amount: amount.to_string(),
			});
		}

		let merchant = self.merchant_attributes();
		let mut request = OrderRequest::new(&self.api_token, amount);
		if use_merchant_attributes {
			request = request.with_merchant_attributes(merchant.resolve()?);
		}

		let url = order_endpoint(&self.base_url);
		debug_with_url(
			self.logger.as_ref(),
			"Sending request to CTechPay at",
			&url,
		);

		let response = self
			.http
			.post(&url)
			.form(&request)
			.send()
			.await
			.map_err(|source| PaymentClientError::TransportFailure { source })?;

		let body = response
			.bytes()
			.await
			.map_err(|source| PaymentClientError::ResponseReadFailure { source })?;

		let mut order: OrderResponse = serde_json::from_slice(&body)?;
		order.txn_id = txn_id.to_string();
		Ok(order)
	}
}

impl fmt::Debug for PaymentClient {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("PaymentClient")
			.field("api_token", &"***")
			.field("base_url", &self.base_url)
			.field("url_policy", &self.url_policy)
			.field("merchant", &self.merchant_attributes())
			.finish_non_exhaustive()
	}
}

pub struct PaymentClientBuilder {
	api_token:   String,
	environment: Environment,
	base_url:    Option<String>,
	timeout:     Duration,
	http:        Option<Client>,
	logger:      SharedLogger,
	url_policy:  UrlPolicy,
	merchant:    MerchantAttributes,
}

impl PaymentClientBuilder {
	pub fn new(token: impl Into<String>) -> Self {
		Self {
			api_token:   token.into(),
			environment: Environment::default(),
			base_url:    None,
			timeout:     DEFAULT_TIMEOUT,
			http:        None,
			logger:      nop_logger(),
			url_policy:  UrlPolicy::default(),
			merchant:    MerchantAttributes::default(),
		}
	}

	/// Seeds a builder from loaded settings. Transport and logger can still
	/// be replaced before building.
	pub fn from_settings(settings: &Settings) -> Self {
		let mut builder = Self::new(settings.api_token.clone())
			.environment(settings.environment)
			.timeout(Duration::from_secs(settings.timeout_secs))
			.url_policy(settings.url_policy());

		if let Some(url) = settings.base_url_override() {
			builder = builder.base_url(url);
		}
		if let Some(url) = &settings.redirect_url {
			builder = builder.redirect_url(url.clone());
		}
		// Cancel text has no meaning without a cancel URL.
		if let Some(url) = &settings.cancel_url {
			builder = builder.cancel_url(
				url.clone(),
				settings.cancel_text.as_deref().unwrap_or_default(),
			);
		}

		builder
	}

	pub fn environment(mut self, environment: Environment) -> Self {
		self.environment = environment;
		self
	}

	/// Overrides the endpoint the environment would select.
	pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = Some(base_url.into());
		self
	}

	/// Ignored when a transport is injected with [`Self::http_client`].
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = timeout;
		self
	}

	pub fn http_client(mut self, http: Client) -> Self {
		self.http = Some(http);
		self
	}

	pub fn logger(mut self, logger: SharedLogger) -> Self {
		self.logger = logger;
		self
	}

	pub fn url_policy(mut self, url_policy: UrlPolicy) -> Self {
		self.url_policy = url_policy;
		self
	}

	pub fn redirect_url(mut self, redirect_url: impl Into<String>) -> Self {
		self.merchant = self.merchant.with_redirect_url(redirect_url);
		self
	}

	pub fn cancel_url(
		mut self,
		cancel_url: impl Into<String>,
		cancel_text: &str,
	) -> Self {
		self.merchant = self.merchant.with_cancel_url(cancel_url, cancel_text);
		self
	}

	pub fn build(self) -> Result<PaymentClient, PaymentClientError> {
		if let Some(url) = &self.merchant.redirect_url {
			self.url_policy.check("redirectURL", url)?;
		}
		if let Some(url) = &self.merchant.cancel_url {
			self.url_policy.check("cancelURL", url)?;
		}

		let http = match self.http {
			Some(http) => http,
			None => Client::builder()
				.timeout(self.timeout)
				.build()
				.map_err(|source| PaymentClientError::ClientBuild { source })?,
		};

		let base_url = self
			.base_url
			.unwrap_or_else(|| self.environment.default_url().to_string());

		Ok(PaymentClient {
			api_token: self.api_token,
			base_url,
			http,
			logger: self.logger,
			url_policy: self.url_policy,
			merchant: RwLock::new(Arc::new(self.merchant)),
		})
	}
}
