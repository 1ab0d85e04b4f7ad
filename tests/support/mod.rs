pub mod capturing_logger;
pub mod gateway_mock;
