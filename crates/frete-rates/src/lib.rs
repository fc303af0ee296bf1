//! Rate computation on top of the carrier client: validates inbound
//! requests, translates per-service quotes into shippable options, and
//! guarantees the caller always gets at least one option back.

mod engine;
mod error;
mod tracker;
mod translate;

pub use engine::RateEngine;
pub use error::RateError;
pub use tracker::ShipmentTracker;
pub use translate::translate;
