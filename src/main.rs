use std::error::Error;
use std::str::FromStr;

use ctechpay_client::config::Settings;
use ctechpay_client::infrastructure::logging;
use ctechpay_client::{Decimal, PaymentClientBuilder};
use log::info;
use uuid::Uuid;

const USAGE: &str = "usage: ctechpay-order <amount> [txn-id]";

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
	// Global logger for this binary's own records; the client gets its own
	// injected instance below.
	env_logger::init();

	let mut args = std::env::args().skip(1);
	let amount = args.next().ok_or(USAGE)?;
	let amount = Decimal::from_str(&amount)?;
	let txn_id = args.next().unwrap_or_else(|| Uuid::new_v4().to_string());

	let settings = Settings::load()?;
	let client = PaymentClientBuilder::from_settings(&settings)
		.logger(logging::env_logger())
		.build()?;

	info!("Initiating order {txn_id} for {amount} on {}", client.base_url());
	let order = client
		.initiate_card_order(&txn_id, amount, settings.has_merchant_attributes())
		.await?;

	println!("txn_id:           {}", order.txn_id);
	println!("order_reference:  {}", order.order_reference);
	println!("payment_page_URL: {}", order.payment_page_url);

	Ok(())
}
