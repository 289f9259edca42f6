use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// A discount expressed either as a percentage or as a fixed amount.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cost {
    /// Cost in percent. Range of 0 to 100.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub percent: Option<Decimal>,
    /// Cost in amount. Range of 0 to 999999.99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
}

impl Cost {
    #[must_use]
    pub fn percent(percent: Decimal) -> Self {
        Self {
            percent: Some(percent),
            amount: None,
        }
    }

    #[must_use]
    pub fn amount(amount: Currency) -> Self {
        Self {
            percent: None,
            amount: Some(amount),
        }
    }
}

/// Tax applied to an item or to shipping.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Tax {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Name of the tax. 10 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Rate of the tax. Range of 0.001 to 99.999.
    #[serde(
        default,
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub percent: Option<Decimal>,
    /// Tax in currency, calculated by the API.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
}

impl Tax {
    #[must_use]
    pub fn new(name: impl Into<String>, percent: Decimal) -> Self {
        Self {
            name: Some(name.into()),
            percent: Some(percent),
            ..Self::default()
        }
    }
}

/// Shipping cost of an invoice.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ShippingCost {
    /// Shipping cost in amount. Range of 0 to 999999.99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
    /// Tax percentage on shipping amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax: Option<Tax>,
}

/// Custom amount applied on an invoice. If a label is included then the
/// amount cannot be empty.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomAmount {
    /// 25 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Range of 0 to 999999.99.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
}
