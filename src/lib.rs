pub mod config;

pub mod domain {
	pub mod environment;
	pub mod errors;
	pub mod merchant;
	pub mod order;
}

pub mod infrastructure {
	pub mod ctechpay_client;
	pub mod logging;
}

pub use domain::environment::Environment;
pub use domain::errors::PaymentClientError;
pub use domain::merchant::{DEFAULT_CANCEL_TEXT, MerchantAttributes, UrlPolicy};
pub use domain::order::OrderResponse;
pub use infrastructure::ctechpay_client::{PaymentClient, PaymentClientBuilder};
pub use rust_decimal::Decimal;
