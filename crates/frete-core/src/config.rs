use rust_decimal::Decimal;

use crate::error::ConfigError;
use crate::settings::{
    CorreiosSettings, ErrorFieldPolarity, DEFAULT_CARRIER_SERVICES, DEFAULT_ENDPOINT,
    DEFAULT_TRACKING_URL, DEFAULT_USER_AGENT,
};

/// Load carrier settings from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_settings() -> Result<CorreiosSettings, ConfigError> {
    dotenvy::dotenv().ok();
    load_settings_from_env()
}

/// Load carrier settings from environment variables already in the process.
///
/// Unlike [`load_settings`], this does NOT load `.env` files — useful for
/// testing or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_settings_from_env() -> Result<CorreiosSettings, ConfigError> {
    build_settings(|key| std::env::var(key))
}

/// Build carrier settings using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual
/// environment so it can be tested with a pure `HashMap` lookup.
fn build_settings<F>(lookup: F) -> Result<CorreiosSettings, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_decimal = |var: &str, default: &str| -> Result<Decimal, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<Decimal>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let postal_code_from = require("FRETE_POSTAL_CODE_FROM")?;

    let url = or_default("FRETE_CORREIOS_URL", DEFAULT_ENDPOINT);
    let company_code = or_default("FRETE_COMPANY_CODE", "");
    let password = or_default("FRETE_PASSWORD", "");
    let carrier_services = parse_services(&or_default(
        "FRETE_CARRIER_SERVICES",
        DEFAULT_CARRIER_SERVICES,
    ))?;
    let additional_delivery_days = parse_u32("FRETE_ADDITIONAL_DELIVERY_DAYS", "0")?;
    let default_service_name = or_default("FRETE_DEFAULT_SERVICE_NAME", "Entrega");
    let default_rate = parse_decimal("FRETE_DEFAULT_RATE", "25.00")?;
    let default_delivery_days = parse_u32("FRETE_DEFAULT_DELIVERY_DAYS", "10")?;
    let markup_percentage = parse_decimal("FRETE_MARKUP_PERCENTAGE", "1.0")?;
    let error_polarity = parse_polarity(&or_default("FRETE_ERROR_POLARITY", "non-empty"))?;
    let declared_value = parse_decimal("FRETE_DECLARED_VALUE", "0")?;
    let exchange_rate = parse_decimal("FRETE_EXCHANGE_RATE", "1.0")?;
    let request_timeout_secs = parse_u64("FRETE_REQUEST_TIMEOUT_SECS", "30")?;
    let user_agent = or_default("FRETE_USER_AGENT", DEFAULT_USER_AGENT);
    let tracking_url = or_default("FRETE_TRACKING_URL", DEFAULT_TRACKING_URL);

    Ok(CorreiosSettings {
        url,
        postal_code_from,
        company_code,
        password,
        carrier_services,
        additional_delivery_days,
        default_service_name,
        default_rate,
        default_delivery_days,
        markup_percentage,
        error_polarity,
        declared_value,
        exchange_rate,
        request_timeout_secs,
        user_agent,
        tracking_url,
    })
}

/// Split a comma-separated service-code list, dropping blanks.
fn parse_services(raw: &str) -> Result<Vec<String>, ConfigError> {
    let services: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(str::to_string)
        .collect();
    if services.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            var: "FRETE_CARRIER_SERVICES".to_string(),
            reason: "at least one service code is required".to_string(),
        });
    }
    Ok(services)
}

fn parse_polarity(raw: &str) -> Result<ErrorFieldPolarity, ConfigError> {
    match raw {
        "non-empty" => Ok(ErrorFieldPolarity::NonEmptyIsError),
        "empty" => Ok(ErrorFieldPolarity::EmptyIsError),
        other => Err(ConfigError::InvalidEnvVar {
            var: "FRETE_ERROR_POLARITY".to_string(),
            reason: format!("expected \"non-empty\" or \"empty\", got \"{other}\""),
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid values.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("FRETE_POSTAL_CODE_FROM", "01310100");
        m
    }

    #[test]
    fn build_settings_fails_without_origin_postal_code() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_settings(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "FRETE_POSTAL_CODE_FROM"),
            "expected MissingEnvVar(FRETE_POSTAL_CODE_FROM), got: {result:?}"
        );
    }

    #[test]
    fn build_settings_succeeds_with_defaults() {
        let map = full_env();
        let settings = build_settings(lookup_from_map(&map)).unwrap();
        assert_eq!(settings.postal_code_from, "01310100");
        assert_eq!(settings.url, DEFAULT_ENDPOINT);
        assert_eq!(settings.carrier_services, vec!["41106", "40010"]);
        assert_eq!(settings.additional_delivery_days, 0);
        assert_eq!(settings.markup_percentage, Decimal::ONE);
        assert_eq!(settings.error_polarity, ErrorFieldPolarity::NonEmptyIsError);
        assert_eq!(settings.exchange_rate, Decimal::ONE);
        assert_eq!(settings.request_timeout_secs, 30);
        assert_eq!(settings.default_rate, "25.00".parse::<Decimal>().unwrap());
        assert_eq!(settings.default_delivery_days, 10);
    }

    #[test]
    fn build_settings_parses_service_list_with_whitespace() {
        let mut map = full_env();
        map.insert("FRETE_CARRIER_SERVICES", "40010, 40215 ,40290");
        let settings = build_settings(lookup_from_map(&map)).unwrap();
        assert_eq!(settings.carrier_services, vec!["40010", "40215", "40290"]);
    }

    #[test]
    fn build_settings_rejects_empty_service_list() {
        let mut map = full_env();
        map.insert("FRETE_CARRIER_SERVICES", " , ");
        let result = build_settings(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FRETE_CARRIER_SERVICES"),
            "expected InvalidEnvVar(FRETE_CARRIER_SERVICES), got: {result:?}"
        );
    }

    #[test]
    fn build_settings_rejects_invalid_markup() {
        let mut map = full_env();
        map.insert("FRETE_MARKUP_PERCENTAGE", "ten percent");
        let result = build_settings(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FRETE_MARKUP_PERCENTAGE"),
            "expected InvalidEnvVar(FRETE_MARKUP_PERCENTAGE), got: {result:?}"
        );
    }

    #[test]
    fn build_settings_accepts_empty_error_polarity_mode() {
        let mut map = full_env();
        map.insert("FRETE_ERROR_POLARITY", "empty");
        let settings = build_settings(lookup_from_map(&map)).unwrap();
        assert_eq!(settings.error_polarity, ErrorFieldPolarity::EmptyIsError);
    }

    #[test]
    fn build_settings_rejects_unknown_error_polarity() {
        let mut map = full_env();
        map.insert("FRETE_ERROR_POLARITY", "inverted");
        let result = build_settings(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FRETE_ERROR_POLARITY"),
            "expected InvalidEnvVar(FRETE_ERROR_POLARITY), got: {result:?}"
        );
    }

    #[test]
    fn build_settings_parses_additional_days_override() {
        let mut map = full_env();
        map.insert("FRETE_ADDITIONAL_DELIVERY_DAYS", "3");
        let settings = build_settings(lookup_from_map(&map)).unwrap();
        assert_eq!(settings.additional_delivery_days, 3);
    }

    #[test]
    fn build_settings_rejects_invalid_additional_days() {
        let mut map = full_env();
        map.insert("FRETE_ADDITIONAL_DELIVERY_DAYS", "-1");
        let result = build_settings(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "FRETE_ADDITIONAL_DELIVERY_DAYS"),
            "expected InvalidEnvVar(FRETE_ADDITIONAL_DELIVERY_DAYS), got: {result:?}"
        );
    }

    #[test]
    fn build_settings_parses_exchange_rate_override() {
        let mut map = full_env();
        map.insert("FRETE_EXCHANGE_RATE", "0.21");
        let settings = build_settings(lookup_from_map(&map)).unwrap();
        assert_eq!(settings.exchange_rate, "0.21".parse::<Decimal>().unwrap());
    }
}
