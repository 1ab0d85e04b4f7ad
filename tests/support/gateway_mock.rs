use std::sync::Arc;
use std::time::Duration;

use ctechpay_client::{PaymentClient, PaymentClientBuilder};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockBuilder, MockServer, ResponseTemplate};

use crate::support::capturing_logger::CapturingLogger;

pub const TEST_TOKEN: &str = "test-token";

pub struct GatewayTestServer {
	pub server: MockServer,
	pub logger: Arc<CapturingLogger>,
}

impl GatewayTestServer {
	pub async fn start() -> Self {
		Self {
			server: MockServer::start().await,
			logger: CapturingLogger::shared(),
		}
	}

	pub fn url(&self) -> String {
		self.server.uri()
	}

	pub fn client_builder(&self) -> PaymentClientBuilder {
		PaymentClient::builder(TEST_TOKEN)
			.base_url(self.url())
			.timeout(Duration::from_secs(2))
			.logger(self.logger.clone())
	}

	pub fn client(&self) -> PaymentClient {
		self.client_builder().build().unwrap()
	}

	pub async fn received_bodies(&self) -> Vec<String> {
		self.server
			.received_requests()
			.await
			.unwrap_or_default()
			.into_iter()
			.map(|request| String::from_utf8(request.body).unwrap())
			.collect()
	}
}

pub fn order_endpoint() -> MockBuilder {
	Mock::given(method("POST"))
		.and(path("/"))
		.and(query_param("endpoint", "order"))
}

pub fn order_created(
	order_reference: &str,
	payment_page_url: &str,
) -> ResponseTemplate {
	ResponseTemplate::new(200).set_body_json(json!({
		"order_reference":  order_reference,
		"payment_page_URL": payment_page_url,
	}))
}
