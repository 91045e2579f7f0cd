mod client;
mod orders;

pub use client::RazorpayClient;
pub use orders::*;
