use serde::{Deserialize, Serialize};
use time::Date;

use crate::utils::date_format::{parse_paypal_date, zone_of};

/// Audit information maintained by PayPal. All dates use `yyyy-MM-dd z`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cancelled_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_sent_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sent_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_sent_by: Option<String>,
    /// URL the payer uses to view the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payer_view_url: Option<String>,
}

impl Metadata {
    /// Calendar date the invoice was created, ignoring time and zone.
    #[must_use]
    pub fn created_on(&self) -> Option<Date> {
        let created = self.created_date.as_deref()?;
        parse_paypal_date(created)
            .inspect_err(|e| warn!("{e}"))
            .ok()
    }

    /// Zone suffix of `created_date`, e.g. `PDT`.
    #[must_use]
    pub fn created_zone(&self) -> Option<&str> {
        zone_of(self.created_date.as_deref()?)
    }

    /// Calendar date the invoice was last sent.
    #[must_use]
    pub fn last_sent_on(&self) -> Option<Date> {
        parse_paypal_date(self.last_sent_date.as_deref()?).ok()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TermType {
    DueOnReceipt,
    #[serde(rename = "NET_10")]
    Net10,
    #[serde(rename = "NET_15")]
    Net15,
    #[serde(rename = "NET_30")]
    Net30,
    #[serde(rename = "NET_45")]
    Net45,
    #[serde(rename = "NET_60")]
    Net60,
    #[serde(rename = "NET_90")]
    Net90,
    NoDueDate,
}

/// Payment deadline. Pass either `term_type` or `due_date`, not both.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentTerm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_type: Option<TermType>,
    /// Due date, `yyyy-MM-dd z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

impl PaymentTerm {
    #[must_use]
    pub fn term(term_type: TermType) -> Self {
        Self {
            term_type: Some(term_type),
            due_date: None,
        }
    }

    #[must_use]
    pub fn due_on(due_date: impl Into<String>) -> Self {
        Self {
            term_type: None,
            due_date: Some(due_date.into()),
        }
    }
}
