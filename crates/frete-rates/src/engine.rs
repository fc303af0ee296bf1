//! The host-facing rate computation method.

use frete_core::{
    CorreiosSettings, CurrencyConverter, Localizer, Message, Parcel, RateRequest, RateResponse,
};
use frete_correios::CarrierGateway;
use rust_decimal::Decimal;

use crate::tracker::ShipmentTracker;
use crate::translate::{default_option, translate};

/// Orchestrates one rate computation: request validation, the carrier
/// call, per-quote translation, and the default-option fallback.
///
/// All collaborators are constructor-injected; the engine itself holds no
/// mutable state and is safe to share across requests.
pub struct RateEngine<G, X, L> {
    settings: CorreiosSettings,
    gateway: G,
    converter: X,
    localizer: L,
}

impl<G, X, L> RateEngine<G, X, L>
where
    G: CarrierGateway,
    X: CurrencyConverter,
    L: Localizer,
{
    pub fn new(settings: CorreiosSettings, gateway: G, converter: X, localizer: L) -> Self {
        Self {
            settings,
            gateway,
            converter,
            localizer,
        }
    }

    /// Computes the shippable options for one request. Never fails: every
    /// problem ends as either a localized error in the response (invalid
    /// request) or a logged degradation to the configured default option.
    pub async fn shipping_options(&self, request: &RateRequest) -> RateResponse {
        let mut response = RateResponse::default();

        let postal_code_to = match validate(request) {
            Ok(postal) => postal,
            Err(message) => {
                response.add_error(self.localizer.message(message));
                return response;
            }
        };

        let parcel = Parcel::from_items(&request.items);
        let quotes = match self.gateway.request_rates(postal_code_to, &parcel).await {
            Ok(quotes) => quotes,
            Err(e) => {
                tracing::error!(error = %e, "carrier rate request failed");
                Vec::new()
            }
        };

        for quote in &quotes {
            match translate(quote, &self.settings, &self.converter) {
                Ok(option) => response.options.push(option),
                Err(e) => {
                    tracing::warn!(service = %quote.code, error = %e, "discarding carrier quote");
                }
            }
        }

        // The caller always gets something shippable.
        if response.options.is_empty() {
            response
                .options
                .push(default_option(&self.settings, &self.converter));
        }

        response
    }

    /// This computation method is real-time only; there is no fixed rate.
    #[must_use]
    pub fn fixed_rate(&self) -> Option<Decimal> {
        None
    }

    #[must_use]
    pub fn shipment_tracker(&self) -> ShipmentTracker {
        ShipmentTracker::from_settings(&self.settings)
    }
}

/// Checks the request top to bottom and returns the destination postal
/// code on success. The first missing piece wins, in a fixed priority
/// order: items, address, country, state, postal code.
fn validate(request: &RateRequest) -> Result<&str, Message> {
    if request.items.is_empty() {
        return Err(Message::NoShipmentItems);
    }
    let Some(destination) = request.destination.as_ref() else {
        return Err(Message::AddressNotSet);
    };
    if is_blank(destination.country.as_deref()) {
        return Err(Message::CountryNotSet);
    }
    if is_blank(destination.state.as_deref()) {
        return Err(Message::StateNotSet);
    }
    match destination.postal_code.as_deref().map(str::trim) {
        Some(postal) if !postal.is_empty() => Ok(postal),
        _ => Err(Message::PostalCodeNotSet),
    }
}

fn is_blank(field: Option<&str>) -> bool {
    field.is_none_or(|value| value.trim().is_empty())
}
