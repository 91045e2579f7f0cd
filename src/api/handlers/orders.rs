use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{AppError, AppResult};
use crate::orders::{build_notes, build_order};
use crate::services::razorpay::CreateOrderRequest;
use crate::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderBody {
    #[serde(default)]
    pub amount: Value,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub form_data: Map<String, Value>,
    #[serde(default)]
    pub receipt: Option<String>,
    #[serde(default)]
    pub metadata: Map<String, Value>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderResponse {
    pub order_id: String,
    /// Minor units, as reported back by the gateway.
    pub amount: i64,
    pub currency: String,
    pub receipt: Option<String>,
    pub status: String,
    pub razorpay_key_id: String,
}

/// `POST /api/orders/:form_type` — validates the booking amount, attaches
/// sanitized form metadata as order notes and creates the order with the
/// gateway. The public key id is returned so the client can open the
/// payment widget; the secret never leaves the server.
pub async fn create_order(
    State(state): State<AppState>,
    Path(form_type): Path<String>,
    Json(body): Json<CreateOrderBody>,
) -> AppResult<(StatusCode, Json<CreateOrderResponse>)> {
    // metadata wins over formData on key collision
    let mut payload = body.form_data;
    for (key, value) in body.metadata {
        payload.insert(key, value);
    }

    let notes = build_notes(&form_type, &payload);

    let draft = build_order(&form_type, &body.amount, body.currency, body.receipt, notes)
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let request = CreateOrderRequest::from(draft);
    let order = state.razorpay.create_order(&request).await?;

    tracing::info!(
        order_id = %order.id,
        form_type = %form_type,
        amount = order.amount,
        "Razorpay order created successfully"
    );

    Ok((
        StatusCode::CREATED,
        Json(CreateOrderResponse {
            order_id: order.id,
            amount: order.amount,
            currency: order.currency,
            receipt: order.receipt,
            status: order.status,
            razorpay_key_id: state.razorpay.key_id().to_string(),
        }),
    ))
}
