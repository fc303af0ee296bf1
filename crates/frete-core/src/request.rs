//! Request and response types exchanged with the host checkout pipeline.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Destination portion of a rate request.
///
/// Every field is optional so the engine can report exactly which component
/// the host failed to supply. Blank strings count as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Destination {
    pub country: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
}

/// One cart line item to be shipped. Weight in kilograms, dimensions in
/// centimetres.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShipmentItem {
    pub weight_kg: Decimal,
    pub length_cm: Decimal,
    pub height_cm: Decimal,
    pub width_cm: Decimal,
    pub quantity: u32,
}

/// A shipping-rate request as handed over by the host checkout pipeline.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RateRequest {
    pub destination: Option<Destination>,
    pub items: Vec<ShipmentItem>,
}

/// A single shippable choice presented to the customer. `rate` is in the
/// store's primary currency; `name` carries the delivery estimate, e.g.
/// `"SEDEX - 3 dia(s)"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingOption {
    pub name: String,
    pub rate: Decimal,
}

/// Outcome of a rate computation.
///
/// `errors` carries localized user-facing messages; a response with any
/// error has zero options. A response without errors always has at least
/// one option (the configured default when the carrier produced nothing).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RateResponse {
    pub options: Vec<ShippingOption>,
    pub errors: Vec<String>,
}

impl RateResponse {
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }
}
