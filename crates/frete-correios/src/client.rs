use std::future::Future;
use std::time::Duration;

use frete_core::{CorreiosSettings, Parcel};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use rust_decimal::Decimal;

use crate::envelope::{build_calc_preco_prazo, SOAP_ACTION};
use crate::error::CorreiosError;
use crate::parse::parse_quotes;
use crate::types::ServiceQuote;

/// Outbound seam of the rate pipeline: one call quotes all configured
/// service codes for a destination and parcel.
///
/// The rate engine is generic over this trait so tests can substitute a
/// canned gateway without any network.
pub trait CarrierGateway {
    fn request_rates(
        &self,
        postal_code_to: &str,
        parcel: &Parcel,
    ) -> impl Future<Output = Result<Vec<ServiceQuote>, CorreiosError>> + Send;
}

/// HTTP client for the Correios `CalcPrecoPrazo` SOAP endpoint.
///
/// Snapshots everything it needs from [`CorreiosSettings`] at construction;
/// the endpoint is slow legacy infrastructure, so the request timeout from
/// settings bounds every call. No retries — a failed call degrades to the
/// caller's default option immediately.
pub struct CorreiosClient {
    client: Client,
    url: String,
    company_code: String,
    password: String,
    services: String,
    postal_code_from: String,
    declared_value: Decimal,
}

impl CorreiosClient {
    /// # Errors
    ///
    /// Returns [`CorreiosError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(settings: &CorreiosSettings) -> Result<Self, CorreiosError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(settings.request_timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&settings.user_agent)
            .build()?;
        Ok(Self {
            client,
            url: settings.url.clone(),
            company_code: settings.company_code.clone(),
            password: settings.password.clone(),
            services: settings.carrier_services.join(","),
            postal_code_from: settings.postal_code_from.clone(),
            declared_value: settings.declared_value,
        })
    }
}

impl CarrierGateway for CorreiosClient {
    async fn request_rates(
        &self,
        postal_code_to: &str,
        parcel: &Parcel,
    ) -> Result<Vec<ServiceQuote>, CorreiosError> {
        let body = build_calc_preco_prazo(
            &self.company_code,
            &self.password,
            &self.services,
            &self.postal_code_from,
            postal_code_to,
            parcel,
            self.declared_value,
        );

        tracing::debug!(
            services = %self.services,
            destination = postal_code_to,
            "requesting carrier rates"
        );

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "text/xml; charset=utf-8")
            .header("SOAPAction", SOAP_ACTION)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CorreiosError::UnexpectedStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let text = response.text().await?;
        parse_quotes(&text)
    }
}
