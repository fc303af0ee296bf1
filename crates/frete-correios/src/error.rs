use thiserror::Error;

/// Errors from a `CalcPrecoPrazo` call. All variants mean the carrier is
/// effectively unavailable for this request; none carries per-service
/// detail (that lives in the quote's own error fields).
#[derive(Debug, Error)]
pub enum CorreiosError {
    /// Network, TLS, or timeout failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected HTTP status {status} from {url}")]
    UnexpectedStatus { status: u16, url: String },

    #[error("XML parse error: {0}")]
    Xml(#[from] quick_xml::Error),

    /// The body parsed as XML but carried no per-service results.
    #[error("malformed carrier response: {reason}")]
    MalformedResponse { reason: String },
}
