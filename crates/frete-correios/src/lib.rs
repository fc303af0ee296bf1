//! Client for the Correios `CalcPrecoPrazo` SOAP pricing service.
//!
//! One outbound call quotes every configured service code at once; the
//! response is a list of per-service results parsed into [`ServiceQuote`]s.
//! Everything that can go wrong on the wire surfaces as a [`CorreiosError`],
//! which callers treat as "no quotes from the carrier", never as fatal.

mod client;
mod decimal;
mod envelope;
mod error;
mod parse;
mod service;
mod types;

pub use client::{CarrierGateway, CorreiosClient};
pub use decimal::parse_decimal_br;
pub use error::CorreiosError;
pub use service::{service_display_name, CorreiosService};
pub use types::ServiceQuote;
