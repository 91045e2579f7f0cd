use serde::{Deserialize, Serialize};

use super::RazorpayClient;
use crate::error::AppResult;
use crate::orders::{NoteMap, OrderDraft};

#[derive(Debug, Clone, Serialize)]
pub struct CreateOrderRequest {
    pub amount: i64,
    pub currency: String,
    pub receipt: String,
    pub notes: NoteMap,
    /// 1 tells the gateway to capture the payment automatically.
    pub payment_capture: u8,
}

impl From<OrderDraft> for CreateOrderRequest {
    fn from(draft: OrderDraft) -> Self {
        Self {
            amount: draft.amount_minor,
            currency: draft.currency,
            receipt: draft.receipt,
            notes: draft.notes,
            payment_capture: u8::from(draft.auto_capture),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct RazorpayOrder {
    pub id: String,
    pub amount: i64,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
    #[serde(default)]
    pub created_at: i64,
}

impl RazorpayClient {
    pub async fn create_order(&self, request: &CreateOrderRequest) -> AppResult<RazorpayOrder> {
        self.post("/orders", request).await
    }
}
