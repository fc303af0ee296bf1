//! Domain types and configuration for the Correios shipping-rate
//! integration.
//!
//! Everything the host platform used to provide ambiently (settings store,
//! localization service, currency service) lives here as plain data or as a
//! narrow trait the calling crate injects.

mod config;
mod currency;
mod error;
mod localize;
mod parcel;
mod request;
mod settings;

pub use config::{load_settings, load_settings_from_env};
pub use currency::{CurrencyConverter, FixedRateConverter, IdentityConverter};
pub use error::ConfigError;
pub use localize::{EnglishMessages, Localizer, Message, PortugueseMessages};
pub use parcel::Parcel;
pub use request::{Destination, RateRequest, RateResponse, ShipmentItem, ShippingOption};
pub use settings::{CorreiosSettings, ErrorFieldPolarity, DEFAULT_ENDPOINT};
