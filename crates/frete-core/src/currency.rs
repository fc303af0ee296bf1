use rust_decimal::Decimal;

/// Converts carrier-currency amounts into the store's primary currency.
///
/// The carrier always quotes in its national currency; the host decides
/// what the customer actually pays in.
pub trait CurrencyConverter {
    fn to_primary(&self, amount: Decimal) -> Decimal;
}

/// No-op converter for stores whose primary currency is the carrier's.
pub struct IdentityConverter;

impl CurrencyConverter for IdentityConverter {
    fn to_primary(&self, amount: Decimal) -> Decimal {
        amount
    }
}

/// Multiplies by a fixed exchange rate captured at configuration time.
pub struct FixedRateConverter {
    rate: Decimal,
}

impl FixedRateConverter {
    #[must_use]
    pub fn new(rate: Decimal) -> Self {
        Self { rate }
    }
}

impl CurrencyConverter for FixedRateConverter {
    fn to_primary(&self, amount: Decimal) -> Decimal {
        amount * self.rate
    }
}
