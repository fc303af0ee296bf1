//! Event-driven parsing of `CalcPrecoPrazo` response bodies.

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::CorreiosError;
use crate::types::ServiceQuote;

/// Extracts one [`ServiceQuote`] per `<cServico>` element.
///
/// Only the fields this integration consumes are read (`Codigo`, `Valor`,
/// `PrazoEntrega`, `Erro`, `MsgErro`); the SOAP envelope nesting around
/// them is ignored, which keeps the parser indifferent to namespace
/// prefixes and wrapper elements.
///
/// # Errors
///
/// - [`CorreiosError::Xml`] if the body is not well-formed XML.
/// - [`CorreiosError::MalformedResponse`] if no `<cServico>` element is
///   present, which is how the endpoint manifests total failure.
pub(crate) fn parse_quotes(xml: &str) -> Result<Vec<ServiceQuote>, CorreiosError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut quotes = Vec::new();
    let mut in_service = false;
    let mut current_tag = String::new();
    let mut current = ServiceQuote::default();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("").to_string();
                if name == "cServico" {
                    in_service = true;
                    current = ServiceQuote::default();
                }
                current_tag = name;
            }
            Ok(Event::End(e)) => {
                let name_buf = e.name().as_ref().to_vec();
                let name = std::str::from_utf8(&name_buf).unwrap_or("");
                if name == "cServico" && in_service {
                    in_service = false;
                    quotes.push(std::mem::take(&mut current));
                }
                current_tag.clear();
            }
            Ok(Event::Text(e)) => {
                if in_service {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    match current_tag.as_str() {
                        "Codigo" => current.code = text,
                        "Valor" => current.price = text,
                        "PrazoEntrega" => current.delivery_days = text,
                        "Erro" => current.error = text,
                        "MsgErro" => current.error_message = text,
                        _ => {}
                    }
                }
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(CorreiosError::Xml(e)),
            _ => {}
        }
    }

    if quotes.is_empty() {
        return Err(CorreiosError::MalformedResponse {
            reason: "no cServico element in response body".to_string(),
        });
    }
    Ok(quotes)
}
