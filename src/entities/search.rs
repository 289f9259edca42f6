use serde::{Deserialize, Serialize};
use time::Date;

use super::{currency::Currency, invoice::Status};
use crate::utils::date_format::format_paypal_date;

/// Criteria for [`Invoice::search`](super::invoice::Invoice::search).
///
/// Every criterion is optional; date bounds use `yyyy-MM-dd z`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Search {
    /// Initial letters of the email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recipient_business_name: Option<String>,
    /// The invoice number that appears on the invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Vec<Status>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lower_total_amount: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub upper_total_amount: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_due_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_payment_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_creation_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_creation_date: Option<String>,
    /// Offset of the first result.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size. Defaults to 20 on the server.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count_required: Option<bool>,
    /// Restrict results to archived (`true`) or unarchived (`false`) invoices.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

impl Search {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(mut self, status: Status) -> Self {
        self.status.get_or_insert_with(Vec::new).push(status);
        self
    }

    #[must_use]
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = Some(number.into());
        self
    }

    #[must_use]
    pub fn with_invoice_date_range(mut self, start: Date, end: Date, zone: &str) -> Self {
        self.start_invoice_date = Some(format_paypal_date(start, zone));
        self.end_invoice_date = Some(format_paypal_date(end, zone));
        self
    }

    #[must_use]
    pub fn with_due_date_range(mut self, start: Date, end: Date, zone: &str) -> Self {
        self.start_due_date = Some(format_paypal_date(start, zone));
        self.end_due_date = Some(format_paypal_date(end, zone));
        self
    }

    #[must_use]
    pub fn with_page(mut self, page: u32, page_size: u32) -> Self {
        self.page = Some(page);
        self.page_size = Some(page_size);
        self
    }

    #[must_use]
    pub fn with_total_count_required(mut self, required: bool) -> Self {
        self.total_count_required = Some(required);
        self
    }
}
