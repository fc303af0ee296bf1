//! Carrier delivery tiers known to this integration.
//!
//! The wire protocol keys services by numeric string codes; the enum keeps
//! the code to display-name mapping explicit instead of a string-keyed
//! lookup table.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorreiosService {
    Pac,
    Sedex,
    SedexACobrar,
    Sedex10,
    SedexHoje,
    ESedex,
}

impl CorreiosService {
    /// Wire code used by the `CalcPrecoPrazo` endpoint.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            CorreiosService::Pac => "41106",
            CorreiosService::Sedex => "40010",
            CorreiosService::SedexACobrar => "40045",
            CorreiosService::Sedex10 => "40215",
            CorreiosService::SedexHoje => "40290",
            CorreiosService::ESedex => "81019",
        }
    }

    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "41106" => Some(CorreiosService::Pac),
            "40010" => Some(CorreiosService::Sedex),
            "40045" => Some(CorreiosService::SedexACobrar),
            "40215" => Some(CorreiosService::Sedex10),
            "40290" => Some(CorreiosService::SedexHoje),
            "81019" => Some(CorreiosService::ESedex),
            _ => None,
        }
    }

    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            CorreiosService::Pac => "PAC",
            CorreiosService::Sedex => "SEDEX",
            CorreiosService::SedexACobrar => "SEDEX a Cobrar",
            CorreiosService::Sedex10 => "SEDEX 10",
            CorreiosService::SedexHoje => "SEDEX Hoje",
            CorreiosService::ESedex => "e-SEDEX",
        }
    }
}

/// Resolves a wire code to its display name. Codes outside the known set
/// fall back to the raw code so new carrier tiers still produce an option.
#[must_use]
pub fn service_display_name(code: &str) -> String {
    let code = code.trim();
    CorreiosService::from_code(code).map_or_else(|| code.to_string(), |s| s.display_name().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_and_from_code_round_trip() {
        let services = [
            CorreiosService::Pac,
            CorreiosService::Sedex,
            CorreiosService::SedexACobrar,
            CorreiosService::Sedex10,
            CorreiosService::SedexHoje,
            CorreiosService::ESedex,
        ];
        for service in services {
            assert_eq!(CorreiosService::from_code(service.code()), Some(service));
        }
    }

    #[test]
    fn display_name_resolves_known_codes() {
        assert_eq!(service_display_name("40010"), "SEDEX");
        assert_eq!(service_display_name("41106"), "PAC");
        assert_eq!(service_display_name(" 40215 "), "SEDEX 10");
    }

    #[test]
    fn display_name_falls_back_to_raw_code() {
        assert_eq!(service_display_name("99999"), "99999");
    }
}
