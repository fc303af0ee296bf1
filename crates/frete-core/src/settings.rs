use rust_decimal::Decimal;

/// Pricing-and-deadline endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "http://ws.correios.com.br/calculador/CalcPrecoPrazo.asmx";

pub(crate) const DEFAULT_TRACKING_URL: &str =
    "https://www2.correios.com.br/sistemas/rastreamento/default.cfm";

/// PAC and SEDEX, the two tiers every deployment starts with.
pub(crate) const DEFAULT_CARRIER_SERVICES: &str = "41106,40010";

pub(crate) const DEFAULT_USER_AGENT: &str = "frete/0.1 (shipping-rates)";

/// How the per-service error field of a carrier quote is interpreted.
///
/// The carrier documents a blank (or `"0"`) error field as success, but
/// deployments of the original integration shipped for years with the check
/// inverted. Both readings are supported so the behavior is a configuration
/// decision rather than a silent code change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ErrorFieldPolarity {
    /// A non-blank error field fails the quote.
    #[default]
    NonEmptyIsError,
    /// A blank error field fails the quote (historical inverted check).
    EmptyIsError,
}

/// Read-only settings snapshot for one rate computation.
///
/// Loaded once from the environment via [`crate::load_settings`] and never
/// mutated afterwards.
#[derive(Clone)]
pub struct CorreiosSettings {
    /// `CalcPrecoPrazo` endpoint URL.
    pub url: String,
    /// Origin postal code (CEP) of the store's warehouse.
    pub postal_code_from: String,
    /// Contract account code; blank for the public (uncredentialed) tariff.
    pub company_code: String,
    /// Contract password; blank for the public tariff.
    pub password: String,
    /// Carrier service codes quoted on every request.
    pub carrier_services: Vec<String>,
    /// Days added on top of every carrier delivery estimate.
    pub additional_delivery_days: u32,
    /// Option name used when the carrier returns nothing usable.
    pub default_service_name: String,
    /// Rate of the fallback option, in the carrier's currency.
    pub default_rate: Decimal,
    /// Delivery estimate of the fallback option.
    pub default_delivery_days: u32,
    /// Multiplier applied to carrier rates; a value of zero or less
    /// disables the markup.
    pub markup_percentage: Decimal,
    pub error_polarity: ErrorFieldPolarity,
    /// Declared parcel value sent to the carrier for insurance purposes.
    pub declared_value: Decimal,
    /// Carrier currency to store primary currency conversion factor.
    pub exchange_rate: Decimal,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    /// Base URL of the carrier's public tracking page.
    pub tracking_url: String,
}

impl Default for CorreiosSettings {
    /// The values the original integration seeded on install: public
    /// tariff, no markup, no extra delivery days.
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            postal_code_from: String::new(),
            company_code: String::new(),
            password: String::new(),
            carrier_services: DEFAULT_CARRIER_SERVICES
                .split(',')
                .map(str::to_string)
                .collect(),
            additional_delivery_days: 0,
            default_service_name: "Entrega".to_string(),
            default_rate: Decimal::from(25),
            default_delivery_days: 10,
            markup_percentage: Decimal::ONE,
            error_polarity: ErrorFieldPolarity::default(),
            declared_value: Decimal::ZERO,
            exchange_rate: Decimal::ONE,
            request_timeout_secs: 30,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            tracking_url: DEFAULT_TRACKING_URL.to_string(),
        }
    }
}

impl std::fmt::Debug for CorreiosSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CorreiosSettings")
            .field("url", &self.url)
            .field("postal_code_from", &self.postal_code_from)
            .field("company_code", &self.company_code)
            .field("password", &"[redacted]")
            .field("carrier_services", &self.carrier_services)
            .field("additional_delivery_days", &self.additional_delivery_days)
            .field("default_service_name", &self.default_service_name)
            .field("default_rate", &self.default_rate)
            .field("default_delivery_days", &self.default_delivery_days)
            .field("markup_percentage", &self.markup_percentage)
            .field("error_polarity", &self.error_polarity)
            .field("declared_value", &self.declared_value)
            .field("exchange_rate", &self.exchange_rate)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("tracking_url", &self.tracking_url)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_output_redacts_password() {
        let settings = CorreiosSettings {
            password: "contract-secret".to_string(),
            ..CorreiosSettings::default()
        };
        let rendered = format!("{settings:?}");
        assert!(!rendered.contains("contract-secret"));
        assert!(rendered.contains("[redacted]"));
    }

    #[test]
    fn defaults_match_install_values() {
        let settings = CorreiosSettings::default();
        assert_eq!(settings.url, DEFAULT_ENDPOINT);
        assert_eq!(settings.markup_percentage, Decimal::ONE);
        assert_eq!(settings.additional_delivery_days, 0);
        assert_eq!(settings.carrier_services, vec!["41106", "40010"]);
        assert_eq!(settings.error_polarity, ErrorFieldPolarity::NonEmptyIsError);
    }
}
