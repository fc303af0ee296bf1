use frete_core::CorreiosSettings;

/// Builds customer-facing tracking links on the carrier's public tracking
/// page. Pure string work; no calls to the carrier.
#[derive(Debug, Clone)]
pub struct ShipmentTracker {
    base_url: String,
}

impl ShipmentTracker {
    #[must_use]
    pub fn from_settings(settings: &CorreiosSettings) -> Self {
        Self {
            base_url: settings.tracking_url.clone(),
        }
    }

    /// URL of the tracking page for one shipment code.
    #[must_use]
    pub fn tracking_url(&self, tracking_code: &str) -> String {
        let separator = if self.base_url.contains('?') { '&' } else { '?' };
        format!("{}{}objetos={}", self.base_url, separator, tracking_code.trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker(base_url: &str) -> ShipmentTracker {
        ShipmentTracker {
            base_url: base_url.to_string(),
        }
    }

    #[test]
    fn appends_code_as_query_parameter() {
        assert_eq!(
            tracker("https://tracking.example/page").tracking_url("PN123456789BR"),
            "https://tracking.example/page?objetos=PN123456789BR"
        );
    }

    #[test]
    fn preserves_existing_query_string() {
        assert_eq!(
            tracker("https://tracking.example/page?lang=pt").tracking_url("PN1"),
            "https://tracking.example/page?lang=pt&objetos=PN1"
        );
    }

    #[test]
    fn trims_whitespace_from_the_code() {
        assert_eq!(
            tracker("https://tracking.example/p").tracking_url(" PN1 "),
            "https://tracking.example/p?objetos=PN1"
        );
    }
}
