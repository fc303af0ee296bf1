//! Turns one carrier [`ServiceQuote`] into one [`ShippingOption`].

use frete_core::{CorreiosSettings, CurrencyConverter, ErrorFieldPolarity, ShippingOption};
use frete_correios::{parse_decimal_br, service_display_name, ServiceQuote};
use rust_decimal::Decimal;

use crate::error::RateError;

/// Validates a quote and produces the customer-facing option.
///
/// Checks run in a fixed order so the surfaced failure is deterministic:
/// the service error field first (polarity per settings), then the
/// delivery estimate, then the price. On success the rate gets the markup
/// multiplier, the estimate gets the configured extra days, and the rate
/// is converted to the store's primary currency.
///
/// # Errors
///
/// - [`RateError::Service`] when the error field fails the polarity check.
/// - [`RateError::InvalidDeliveryEstimate`] when the estimate does not
///   parse or is not positive.
/// - [`RateError::InvalidPrice`] when the price does not parse or is not
///   positive.
pub fn translate(
    quote: &ServiceQuote,
    settings: &CorreiosSettings,
    converter: &impl CurrencyConverter,
) -> Result<ShippingOption, RateError> {
    check_error_field(quote, settings.error_polarity)?;

    let days = quote
        .delivery_days
        .trim()
        .parse::<i64>()
        .ok()
        .filter(|d| *d > 0)
        .ok_or_else(|| RateError::InvalidDeliveryEstimate {
            raw: quote.delivery_days.clone(),
        })?;

    let rate = parse_decimal_br(&quote.price)
        .filter(|r| *r > Decimal::ZERO)
        .ok_or_else(|| RateError::InvalidPrice {
            raw: quote.price.clone(),
        })?;

    let rate = apply_markup(rate, settings.markup_percentage);
    let days = days + i64::from(settings.additional_delivery_days);

    Ok(ShippingOption {
        name: option_name(&service_display_name(&quote.code), days),
        rate: converter.to_primary(rate),
    })
}

/// The option the engine falls back to when the carrier produced nothing
/// usable. Built from the configured defaults verbatim: no markup, no
/// extra delivery days, only the currency conversion every displayed rate
/// gets.
pub(crate) fn default_option(
    settings: &CorreiosSettings,
    converter: &impl CurrencyConverter,
) -> ShippingOption {
    ShippingOption {
        name: option_name(
            &settings.default_service_name,
            i64::from(settings.default_delivery_days),
        ),
        rate: converter.to_primary(settings.default_rate),
    }
}

fn option_name(service_name: &str, days: i64) -> String {
    format!("{service_name} - {days} dia(s)")
}

fn apply_markup(rate: Decimal, markup: Decimal) -> Decimal {
    if markup > Decimal::ZERO {
        rate * markup
    } else {
        rate
    }
}

fn check_error_field(quote: &ServiceQuote, polarity: ErrorFieldPolarity) -> Result<(), RateError> {
    // The endpoint reports "0" (and some deployments a blank string) in the
    // error field of a successful quote.
    let error = quote.error.trim();
    let blank = error.is_empty() || error == "0";
    let failed = match polarity {
        ErrorFieldPolarity::NonEmptyIsError => !blank,
        ErrorFieldPolarity::EmptyIsError => blank,
    };
    if failed {
        return Err(RateError::Service {
            code: error.to_string(),
            message: quote.error_message.trim().to_string(),
        });
    }
    Ok(())
}
