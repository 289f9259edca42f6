use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{
    cost::{Cost, Tax},
    currency::Currency,
};

/// A line on an invoice.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    /// Name of the item. 60 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Description of the item. 1000 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Quantity of the item. Range of 0 to 9999.999.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub quantity: Option<Decimal>,
    /// Unit price of the item. Range of -999999.99 to 999999.99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_price: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Tax>,
    /// Date on which the item or service was provided, `yyyy-MM-dd z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Item discount in percent or amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Cost>,
    /// `QUANTITY`, `HOURS` or `AMOUNT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit_of_measure: Option<String>,
}

impl InvoiceItem {
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: Decimal, unit_price: Currency) -> Self {
        Self {
            name: Some(name.into()),
            quantity: Some(quantity),
            unit_price: Some(unit_price),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_tax(mut self, tax: Tax) -> Self {
        self.tax = Some(tax);
        self
    }

    #[must_use]
    pub fn with_discount(mut self, discount: Cost) -> Self {
        self.discount = Some(discount);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn item_serializes_with_wire_names() {
        let item = InvoiceItem::new("Sutures", dec!(100), Currency::new("USD", dec!(5.00)))
            .with_tax(Tax::new("Tax", dec!(8)))
            .with_discount(Cost::percent(dec!(10)));

        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(
            json,
            json!({
                "name": "Sutures",
                "quantity": 100.0,
                "unit_price": { "currency": "USD", "value": "5.00" },
                "tax": { "name": "Tax", "percent": 8.0 },
                "discount": { "percent": 10.0 }
            })
        );
    }

    #[test]
    fn fractional_quantity_is_kept() {
        let item: InvoiceItem = serde_json::from_value(json!({
            "name": "Consulting",
            "quantity": 2.5,
            "unit_of_measure": "HOURS"
        }))
        .unwrap();
        assert_eq!(item.quantity, Some(dec!(2.5)));
        assert_eq!(item.unit_of_measure.as_deref(), Some("HOURS"));
        assert!(item.unit_price.is_none());
    }
}
