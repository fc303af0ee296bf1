/// One per-service entry from a `CalcPrecoPrazo` response.
///
/// All fields arrive as strings on the wire: `price` in the carrier's
/// decimal-comma format (`"24,50"`), `delivery_days` a string-encoded
/// integer, `error` blank or `"0"` when the service quoted successfully.
/// Quotes are transient: produced by the client, consumed by the rate
/// translator, discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceQuote {
    pub code: String,
    pub price: String,
    pub delivery_days: String,
    pub error: String,
    pub error_message: String,
}
