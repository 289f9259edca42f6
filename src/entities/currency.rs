use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount with its ISO-4217 currency code.
///
/// `value` travels as a JSON string (`"20.00"`), which keeps the scale the
/// caller chose.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    pub currency: String,
    pub value: Decimal,
}

impl Currency {
    #[must_use]
    pub fn new(currency: impl Into<String>, value: Decimal) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn value_is_a_string_on_the_wire() {
        let amount = Currency::new("USD", dec!(20.00));
        assert_eq!(
            serde_json::to_value(&amount).unwrap(),
            json!({ "currency": "USD", "value": "20.00" })
        );
    }

    #[test]
    fn accepts_numeric_value() {
        let amount: Currency =
            serde_json::from_value(json!({ "currency": "EUR", "value": 7.5 })).unwrap();
        assert_eq!(amount.value, dec!(7.5));
    }
}
