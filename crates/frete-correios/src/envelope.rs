//! SOAP 1.1 request envelope for `CalcPrecoPrazo`.

use std::fmt::Write;

use frete_core::Parcel;
use rust_decimal::Decimal;

pub(crate) const SOAP_ACTION: &str = "\"http://tempuri.org/CalcPrecoPrazo\"";

/// Parcel format code: 1 = box/package. Rolls and envelopes are not
/// supported by this integration.
const FORMAT_BOX: &str = "1";

/// Renders the request body quoting every service code at once.
///
/// Credentials may be blank; the endpoint then applies the public tariff.
/// All caller-supplied text is XML-escaped. Measurements serialize with a
/// dot decimal separator, the canonical `xsd:decimal` form the WSDL
/// declares for these fields.
pub(crate) fn build_calc_preco_prazo(
    company_code: &str,
    password: &str,
    services: &str,
    postal_code_from: &str,
    postal_code_to: &str,
    parcel: &Parcel,
    declared_value: Decimal,
) -> String {
    let mut body = String::with_capacity(768);
    body.push_str(concat!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>",
        "<soap:Envelope xmlns:soap=\"http://schemas.xmlsoap.org/soap/envelope/\">",
        "<soap:Body>",
        "<CalcPrecoPrazo xmlns=\"http://tempuri.org/\">",
    ));
    push_field(&mut body, "nCdEmpresa", company_code);
    push_field(&mut body, "sDsSenha", password);
    push_field(&mut body, "nCdServico", services);
    push_field(&mut body, "sCepOrigem", postal_code_from);
    push_field(&mut body, "sCepDestino", postal_code_to);
    push_field(&mut body, "nVlPeso", &parcel.weight_kg.to_string());
    push_field(&mut body, "nCdFormato", FORMAT_BOX);
    push_field(&mut body, "nVlComprimento", &parcel.length_cm.to_string());
    push_field(&mut body, "nVlAltura", &parcel.height_cm.to_string());
    push_field(&mut body, "nVlLargura", &parcel.width_cm.to_string());
    push_field(&mut body, "nVlDiametro", "0");
    push_field(&mut body, "sCdMaoPropria", "N");
    push_field(&mut body, "nVlValorDeclarado", &declared_value.to_string());
    push_field(&mut body, "sCdAvisoRecebimento", "N");
    body.push_str("</CalcPrecoPrazo></soap:Body></soap:Envelope>");
    body
}

fn push_field(body: &mut String, tag: &str, value: &str) {
    // String's fmt::Write never fails.
    let _ = write!(body, "<{tag}>{}</{tag}>", xml_escape(value));
}

fn xml_escape(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
