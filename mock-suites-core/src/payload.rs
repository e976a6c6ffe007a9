//! Request and response payloads encoded into test case records
//!
//! Each service carries one service-specific block, selected by its
//! [`PayloadKind`]. Generic services carry none. The blocks are flattened into
//! the surrounding object so the encoded JSON reads as a single flat record.

use crate::catalog::PayloadKind;
use crate::model::{TestStatus, format_iso};
use chrono::{DateTime, Duration, Utc};
use rand::Rng;
use serde::Serialize;
use tracing::warn;

/// Body sent with POST/PUT/PATCH requests
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestPayload {
    pub user_id: u32,
    #[serde(flatten)]
    pub details: Option<RequestDetails>,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RequestDetails {
    Payment(PaymentRequest),
    Order(OrderRequest),
    User(UserRequest),
    Inventory(InventoryRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub amount: f64,
    pub currency: String,
    pub payment_method: String,
    pub card_last4: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub order_id: String,
    pub items: Vec<OrderItem>,
    pub shipping_address: Address,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub product_id: String,
    pub quantity: u32,
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Address {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    pub email: String,
    pub name: String,
    pub phone_number: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryRequest {
    pub product_id: String,
    pub quantity: u32,
    pub warehouse_id: String,
}

impl RequestDetails {
    /// Build the block for `kind`; `None` for generic services
    pub fn generate<R: Rng>(kind: PayloadKind, index: u32, rng: &mut R) -> Option<Self> {
        let details = match kind {
            PayloadKind::Payment => RequestDetails::Payment(PaymentRequest {
                amount: random_amount(rng, 10_000),
                currency: "USD".to_string(),
                payment_method: "credit_card".to_string(),
                card_last4: "4242".to_string(),
            }),
            PayloadKind::Order => RequestDetails::Order(OrderRequest {
                order_id: order_id(index),
                items: vec![
                    OrderItem {
                        product_id: "PROD-001".to_string(),
                        quantity: rng.gen_range(1..=5),
                        price: 29.99,
                    },
                    OrderItem {
                        product_id: "PROD-002".to_string(),
                        quantity: rng.gen_range(1..=3),
                        price: 49.99,
                    },
                ],
                shipping_address: Address {
                    street: "123 Main St".to_string(),
                    city: "San Francisco".to_string(),
                    state: "CA".to_string(),
                    zip_code: "94102".to_string(),
                    country: "USA".to_string(),
                },
            }),
            PayloadKind::User => RequestDetails::User(UserRequest {
                email: user_email(index),
                name: format!("Test User {index}"),
                phone_number: format!("+1-555-{:04}", rng.gen_range(0..10_000)),
                role: "customer".to_string(),
            }),
            PayloadKind::Inventory => RequestDetails::Inventory(random_inventory(rng)),
            PayloadKind::Generic => return None,
        };
        Some(details)
    }
}

/// Response body returned by the simulated service
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    pub data: ResponseData,
    pub metadata: ResponseMetadata,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData {
    pub id: String,
    #[serde(flatten)]
    pub details: Option<ResponseDetails>,
    pub timestamp: String,
    pub processing_node: String,
    pub trace_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseMetadata {
    pub api_version: String,
    pub request_id: String,
    pub execution_time: f64,
    pub cache_hit: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseDetails {
    Payment(PaymentResponse),
    Order(OrderResponse),
    User(UserResponse),
    Inventory(InventoryRequest),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    pub transaction_id: String,
    pub amount: f64,
    pub currency: String,
    pub status: String,
    pub processing_time: u32,
    pub provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub order_id: String,
    pub order_status: String,
    pub total_amount: f64,
    pub item_count: u32,
    pub estimated_delivery: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: u32,
    pub email: String,
    pub account_status: String,
    pub created_at: String,
    pub last_login: String,
    pub preferences: Preferences,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub notifications: bool,
    pub newsletter: bool,
    pub language: String,
}

impl ResponseDetails {
    /// Build the block for `kind` with values independent of the request block
    pub fn generate<R: Rng>(
        kind: PayloadKind,
        index: u32,
        status: TestStatus,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> Option<Self> {
        let details = match kind {
            PayloadKind::Payment => ResponseDetails::Payment(PaymentResponse {
                transaction_id: format!("TXN-{:010}", rng.gen_range(0..1_000_000)),
                amount: random_amount(rng, 10_000),
                currency: "USD".to_string(),
                status: if status.is_pass() { "completed" } else { "failed" }.to_string(),
                processing_time: rng.gen_range(0..3_000),
                provider: "Stripe".to_string(),
            }),
            PayloadKind::Order => ResponseDetails::Order(OrderResponse {
                order_id: order_id(index),
                order_status: if status.is_pass() { "confirmed" } else { "pending" }.to_string(),
                total_amount: random_amount(rng, 50_000),
                item_count: rng.gen_range(1..=10),
                estimated_delivery: format_iso(&(now + Duration::days(7))),
            }),
            PayloadKind::User => ResponseDetails::User(UserResponse {
                user_id: 1000 + index,
                email: user_email(index),
                account_status: "active".to_string(),
                created_at: format_iso(&random_past(rng, now, 365)),
                last_login: format_iso(&random_past(rng, now, 7)),
                preferences: Preferences {
                    notifications: true,
                    newsletter: false,
                    language: "en-US".to_string(),
                },
            }),
            PayloadKind::Inventory => ResponseDetails::Inventory(random_inventory(rng)),
            PayloadKind::Generic => return None,
        };
        Some(details)
    }
}

/// Pretty-print a payload with two-space indentation.
///
/// Plain data records always serialize; an empty string is returned if that ever stops being true.
pub(crate) fn to_pretty_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|e| {
        warn!("Failed to encode payload: {}", e);
        String::new()
    })
}

/// Random lowercase base-36 token, e.g. for trace and request ids
pub(crate) fn base36_token<R: Rng>(rng: &mut R, len: usize) -> String {
    const ALPHABET: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";
    (0..len).map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())])).collect()
}

/// Amount with two decimal places in `[0, cents_bound / 100)`
fn random_amount<R: Rng>(rng: &mut R, cents_bound: u32) -> f64 {
    f64::from(rng.gen_range(0..cents_bound)) / 100.0
}

fn random_past<R: Rng>(rng: &mut R, now: DateTime<Utc>, max_days: i64) -> DateTime<Utc> {
    let max_millis = max_days * 24 * 60 * 60 * 1000;
    now - Duration::milliseconds(rng.gen_range(0..max_millis))
}

fn random_inventory<R: Rng>(rng: &mut R) -> InventoryRequest {
    InventoryRequest {
        product_id: format!("PROD-{:03}", rng.gen_range(0..1_000)),
        quantity: rng.gen_range(0..100),
        warehouse_id: format!("WH-{}", rng.gen_range(1..=5)),
    }
}

fn order_id(index: u32) -> String {
    format!("ORD-{:08}", 10_000 + index)
}

fn user_email(index: u32) -> String {
    format!("user{index}@example.com")
}
