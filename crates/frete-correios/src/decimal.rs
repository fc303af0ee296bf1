use rust_decimal::Decimal;

/// Parses a decimal in the carrier's native pt-BR convention: `,` is the
/// decimal separator, `.` groups thousands (`"1.234,56"` is 1234.56).
///
/// The convention is fixed here on purpose — relying on the ambient process
/// locale would make parsing nondeterministic across environments.
#[must_use]
pub fn parse_decimal_br(raw: &str) -> Option<Decimal> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    let normalized: String = trimmed
        .chars()
        .filter(|c| *c != '.')
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    normalized.parse::<Decimal>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_decimal_comma() {
        assert_eq!(parse_decimal_br("12,50"), Some("12.50".parse().unwrap()));
    }

    #[test]
    fn parses_thousands_separator() {
        assert_eq!(
            parse_decimal_br("1.234,56"),
            Some("1234.56".parse().unwrap())
        );
    }

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_decimal_br("10"), Some(Decimal::from(10)));
    }

    #[test]
    fn parses_negative_value() {
        assert_eq!(parse_decimal_br("-1,00"), Some("-1.00".parse().unwrap()));
    }

    #[test]
    fn parses_with_surrounding_whitespace() {
        assert_eq!(parse_decimal_br("  24,50 "), Some("24.50".parse().unwrap()));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_decimal_br("abc"), None);
        assert_eq!(parse_decimal_br(""), None);
        assert_eq!(parse_decimal_br("   "), None);
        assert_eq!(parse_decimal_br("12,5,0"), None);
    }
}
