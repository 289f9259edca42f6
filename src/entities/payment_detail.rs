use serde::{Deserialize, Serialize};

use super::currency::Currency;

/// Whether a payment or refund went through PayPal or happened outside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PaymentType {
    Paypal,
    External,
    Other,
}

/// Method used for a payment recorded against an invoice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    BankTransfer,
    Cash,
    Check,
    CreditCard,
    DebitCard,
    Paypal,
    WireTransfer,
    Other,
}

/// A payment against an invoice.
///
/// The mark-as-paid call records `EXTERNAL` payments; `PAYPAL` remains for
/// backward compatibility.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentDetail {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub payment_type: Option<PaymentType>,
    /// Mandatory when `type` is `PAYPAL`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_type: Option<String>,
    /// Date when the invoice was paid, `yyyy-MM-dd z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Mandatory when `type` is `OTHER`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<PaymentMethod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
}

impl PaymentDetail {
    /// An `EXTERNAL` payment made with `method`.
    #[must_use]
    pub fn external(method: PaymentMethod) -> Self {
        Self {
            payment_type: Some(PaymentType::External),
            method: Some(method),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: Currency) -> Self {
        self.amount = Some(amount);
        self
    }
}

/// A refund against an invoice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefundDetail {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub refund_type: Option<PaymentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    /// Date when the invoice was marked as refunded, `yyyy-MM-dd z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Currency>,
}

impl RefundDetail {
    #[must_use]
    pub fn external() -> Self {
        Self {
            refund_type: Some(PaymentType::External),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    #[must_use]
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: Currency) -> Self {
        self.amount = Some(amount);
        self
    }
}
