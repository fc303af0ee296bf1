//! User-facing message catalog.
//!
//! The host platform owns real localization; this crate only needs the
//! handful of messages a rate computation can surface, keyed by an explicit
//! enum rather than resource-name strings.

/// Every user-facing message a rate computation can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    NoShipmentItems,
    AddressNotSet,
    CountryNotSet,
    StateNotSet,
    PostalCodeNotSet,
}

/// Resolves a [`Message`] into display text. Injected into the rate engine
/// so hosts can plug their own localization service in.
pub trait Localizer {
    fn message(&self, message: Message) -> String;
}

/// The original integration's English resource strings.
pub struct EnglishMessages;

impl Localizer for EnglishMessages {
    fn message(&self, message: Message) -> String {
        match message {
            Message::NoShipmentItems => "No shipment items",
            Message::AddressNotSet => "Shipping address is not set",
            Message::CountryNotSet => "Shipping country is not set",
            Message::StateNotSet => "Shipping state is not set",
            Message::PostalCodeNotSet => "Shipping zip postal code is not set",
        }
        .to_string()
    }
}

/// Portuguese catalog for Brazilian storefronts.
pub struct PortugueseMessages;

impl Localizer for PortugueseMessages {
    fn message(&self, message: Message) -> String {
        match message {
            Message::NoShipmentItems => "Não há itens para envio",
            Message::AddressNotSet => "Endereço de entrega não informado",
            Message::CountryNotSet => "País de entrega não informado",
            Message::StateNotSet => "Estado de entrega não informado",
            Message::PostalCodeNotSet => "CEP de entrega não informado",
        }
        .to_string()
    }
}
