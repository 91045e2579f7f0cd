use chrono::Utc;
use serde_json::Value;
use thiserror::Error;

use super::notes::NoteMap;

pub const DEFAULT_CURRENCY: &str = "INR";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderValidationError {
    #[error("A form type must be provided in the URL.")]
    MissingFormType,

    #[error("An amount is required.")]
    MissingAmount,

    #[error("Amount must be a positive number.")]
    InvalidAmount,
}

/// A validated, normalized order ready to be sent to the gateway.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderDraft {
    /// Amount in minor currency units (paise for INR).
    pub amount_minor: i64,
    pub currency: String,
    pub receipt: String,
    pub notes: NoteMap,
    /// Payment is captured automatically; no manual capture step exists.
    pub auto_capture: bool,
}

/// Amounts arrive as a JSON number or a numeric string; anything else does
/// not coerce.
fn coerce_amount(raw: &Value) -> Option<f64> {
    match raw {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
}

/// Validates the request pieces and assembles an [`OrderDraft`].
///
/// The amount is given in major currency units and converted with
/// `round(amount * 100)`, rounding half away from zero (`f64::round`).
/// When no receipt is supplied, one of the form
/// `"<formType>-<epoch millis>"` is generated.
pub fn build_order(
    form_type: &str,
    raw_amount: &Value,
    currency: Option<String>,
    receipt: Option<String>,
    notes: NoteMap,
) -> Result<OrderDraft, OrderValidationError> {
    if form_type.trim().is_empty() {
        return Err(OrderValidationError::MissingFormType);
    }

    let amount_missing = match raw_amount {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    };
    if amount_missing {
        return Err(OrderValidationError::MissingAmount);
    }

    let amount = coerce_amount(raw_amount).ok_or(OrderValidationError::InvalidAmount)?;
    if !amount.is_finite() || amount <= 0.0 {
        return Err(OrderValidationError::InvalidAmount);
    }

    let receipt = receipt
        .filter(|r| !r.is_empty())
        .unwrap_or_else(|| format!("{}-{}", form_type, Utc::now().timestamp_millis()));

    Ok(OrderDraft {
        amount_minor: (amount * 100.0).round() as i64,
        currency: currency.unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
        receipt,
        notes,
        auto_capture: true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn build(raw_amount: Value) -> Result<OrderDraft, OrderValidationError> {
        build_order("tickets", &raw_amount, None, None, NoteMap::new())
    }

    #[test]
    fn converts_major_units_to_paise() {
        let draft = build(json!(20)).unwrap();
        assert_eq!(draft.amount_minor, 2000);
        assert_eq!(draft.currency, "INR");
        assert!(draft.auto_capture);
    }

    #[test]
    fn accepts_numeric_strings() {
        assert_eq!(build(json!("20.5")).unwrap().amount_minor, 2050);
        assert_eq!(build(json!(" 99 ")).unwrap().amount_minor, 9900);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        // 0.125 rupees is exactly 12.5 paise; the tie rounds up to 13
        assert_eq!(build(json!(0.125)).unwrap().amount_minor, 13);
        assert_eq!(build(json!(10.004)).unwrap().amount_minor, 1000);
        assert_eq!(build(json!(10.006)).unwrap().amount_minor, 1001);
    }

    #[test]
    fn rejects_missing_amount() {
        assert_eq!(build(Value::Null), Err(OrderValidationError::MissingAmount));
        assert_eq!(build(json!("")), Err(OrderValidationError::MissingAmount));
    }

    #[test]
    fn rejects_non_positive_and_non_numeric_amounts() {
        assert_eq!(build(json!(0)), Err(OrderValidationError::InvalidAmount));
        assert_eq!(build(json!(-5)), Err(OrderValidationError::InvalidAmount));
        assert_eq!(build(json!("abc")), Err(OrderValidationError::InvalidAmount));
        assert_eq!(build(json!(true)), Err(OrderValidationError::InvalidAmount));
        assert_eq!(build(json!([20])), Err(OrderValidationError::InvalidAmount));
    }

    #[test]
    fn rejects_non_finite_amounts() {
        assert_eq!(build(json!("inf")), Err(OrderValidationError::InvalidAmount));
        assert_eq!(build(json!("NaN")), Err(OrderValidationError::InvalidAmount));
    }

    #[test]
    fn rejects_blank_form_type() {
        let result = build_order("  ", &json!(20), None, None, NoteMap::new());
        assert_eq!(result, Err(OrderValidationError::MissingFormType));
    }

    #[test]
    fn generates_receipt_when_absent_or_empty() {
        let draft = build(json!(20)).unwrap();
        assert!(draft.receipt.starts_with("tickets-"));
        let millis: i64 = draft.receipt["tickets-".len()..].parse().unwrap();
        assert!(millis > 0);

        let draft = build_order(
            "tickets",
            &json!(20),
            None,
            Some(String::new()),
            NoteMap::new(),
        )
        .unwrap();
        assert!(draft.receipt.starts_with("tickets-"));
    }

    #[test]
    fn keeps_supplied_receipt_and_currency() {
        let draft = build_order(
            "stall",
            &json!(20),
            Some("USD".to_string()),
            Some("stall-0042".to_string()),
            NoteMap::new(),
        )
        .unwrap();
        assert_eq!(draft.receipt, "stall-0042");
        assert_eq!(draft.currency, "USD");
    }
}
