pub mod api;
pub mod config;
pub mod error;
pub mod orders;
pub mod services;

use std::sync::Arc;

use config::Config;
use services::RazorpayClient;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub razorpay: Arc<RazorpayClient>,
}

impl AppState {
    pub fn new(config: Config, razorpay: RazorpayClient) -> Self {
        Self {
            config: Arc::new(config),
            razorpay: Arc::new(razorpay),
        }
    }
}
