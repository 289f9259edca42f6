use reqwest::Method;
use serde::{Deserialize, Serialize};
use time::Date;

use crate::{
    client::{ApiContext, NO_BODY},
    endpoints::PayPalEndpoint,
    error::{Result, require_non_empty},
    utils::date_format::{DEFAULT_ZONE, format_paypal_date},
};

use super::{
    billing_info::{BillingInfo, Participant, ShippingInfo},
    cost::{Cost, CustomAmount, ShippingCost},
    currency::Currency,
    image::Image,
    invoice_item::InvoiceItem,
    links::Links,
    merchant_info::MerchantInfo,
    metadata::{Metadata, PaymentTerm},
    notification::{CancelNotification, Notification},
    payment_detail::{PaymentDetail, RefundDetail},
    search::Search,
};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Draft,
    Sent,
    Paid,
    MarkedAsPaid,
    Cancelled,
    Refunded,
    PartiallyRefunded,
    MarkedAsRefunded,
    Unpaid,
    PaymentPending,
    PartiallyPaid,
    Scheduled,
    /// A status this crate does not know about yet, kept as sent by the server.
    #[serde(untagged)]
    Unknown(String),
}

/// Totals split by where the money moved.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paypal: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub other: Option<Currency>,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAttachment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// A PayPal invoice.
///
/// Instances have no server identity until [`Invoice::create`] returns one
/// carrying `id` and `uri`. Length limits noted on fields are enforced by
/// the API, not here.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique invoice resource identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Number that appears on the invoice. Auto-incremented from the last
    /// number when left blank. 25 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_info: Option<MerchantInfo>,
    /// Recipient email (required) and optional billing details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_info: Option<Vec<BillingInfo>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_info: Option<Vec<Participant>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_info: Option<ShippingInfo>,
    /// 100 items max per invoice.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<InvoiceItem>>,
    /// `yyyy-MM-dd z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub invoice_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_term: Option<PaymentTerm>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    /// Invoice level discount in percent or amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<Cost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shipping_cost: Option<ShippingCost>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<CustomAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_partial_payment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_amount_due: Option<Currency>,
    /// Tax is calculated before a discount unless this is `true`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_calculated_after_discount: Option<bool>,
    /// Whether unit prices include tax.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_inclusive: Option<bool>,
    /// 4000 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
    /// Note to the payer. 4000 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Bookkeeping memo private to the merchant. 150 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant_memo: Option<String>,
    /// 4000 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Currency>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_details: Option<Vec<PaymentDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refund_details: Option<Vec<RefundDetail>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<Metadata>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub paid_amount: Option<PaymentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refunded_amount: Option<PaymentSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<FileAttachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Links>>,
}

/// One page of invoices, as returned by listing and searching.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Invoices {
    /// Only present when `total_count_required` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_count: Option<u32>,
    #[serde(default)]
    pub invoices: Vec<Invoice>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Links>>,
}

/// Query for [`Invoice::get_all`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GetAllParameters {
    /// Start index.
    pub page: u32,
    pub page_size: u32,
    /// Ask the server to include `total_count` in the response.
    pub total_count_required: bool,
}

impl Default for GetAllParameters {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: 20,
            total_count_required: false,
        }
    }
}

/// Query for [`Invoice::qr_code`]. Width and height range from 150 to 500 pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QrCodeParameters {
    pub width: u32,
    pub height: u32,
    /// Which URL the code points at, `pay` or `details`.
    pub action: String,
}

impl Default for QrCodeParameters {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            action: "pay".to_string(),
        }
    }
}

impl Invoice {
    #[must_use]
    pub fn new(merchant_info: MerchantInfo, billing_info: BillingInfo) -> Self {
        Self {
            merchant_info: Some(merchant_info),
            billing_info: Some(vec![billing_info]),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_item(mut self, item: InvoiceItem) -> Self {
        self.items.get_or_insert_with(Vec::new).push(item);
        self
    }

    #[must_use]
    pub fn with_payment_term(mut self, payment_term: PaymentTerm) -> Self {
        self.payment_term = Some(payment_term);
        self
    }

    /// Sets `invoice_date`, in UTC unless `zone` names another.
    #[must_use]
    pub fn with_invoice_date(mut self, date: Date, zone: Option<&str>) -> Self {
        self.invoice_date = Some(format_paypal_date(date, zone.unwrap_or(DEFAULT_ZONE)));
        self
    }

    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    fn require_id(&self) -> Result<String> {
        require_non_empty(self.id.as_deref(), "id").map(str::to_string)
    }

    /// Creates the invoice as a draft and returns the stored resource.
    #[instrument(skip(self, context))]
    pub async fn create(&self, context: &ApiContext) -> Result<Self> {
        context.validate()?;
        context
            .execute(Method::POST, &PayPalEndpoint::Invoices, Some(self))
            .await
    }

    /// Searches invoices matching `search`.
    #[instrument(skip(context))]
    pub async fn search(context: &ApiContext, search: &Search) -> Result<Invoices> {
        context.validate()?;
        context
            .execute(Method::POST, &PayPalEndpoint::Search, Some(search))
            .await
    }

    /// Sends the invoice to the payer.
    #[instrument(skip(self, context), fields(id = ?self.id))]
    pub async fn send(&self, context: &ApiContext, notify_merchant: bool) -> Result<()> {
        context.validate()?;
        let id = self.require_id()?;
        context
            .execute_without_response(
                Method::POST,
                &PayPalEndpoint::Send {
                    id,
                    notify_merchant,
                },
                NO_BODY,
            )
            .await
    }

    /// Reminds the payer to pay the invoice.
    #[instrument(skip(self, context), fields(id = ?self.id))]
    pub async fn remind(&self, context: &ApiContext, notification: &Notification) -> Result<()> {
        context.validate()?;
        let id = self.require_id()?;
        context
            .execute_without_response(Method::POST, &PayPalEndpoint::Remind(id), Some(notification))
            .await
    }

    #[instrument(skip(self, context), fields(id = ?self.id))]
    pub async fn cancel(
        &self,
        context: &ApiContext,
        cancel_notification: &CancelNotification,
    ) -> Result<()> {
        context.validate()?;
        let id = self.require_id()?;
        context
            .execute_without_response(
                Method::POST,
                &PayPalEndpoint::Cancel(id),
                Some(cancel_notification),
            )
            .await
    }

    /// Marks the invoice as paid.
    #[instrument(skip(self, context), fields(id = ?self.id))]
    pub async fn record_payment(
        &self,
        context: &ApiContext,
        payment_detail: &PaymentDetail,
    ) -> Result<()> {
        context.validate()?;
        let id = self.require_id()?;
        context
            .execute_without_response(
                Method::POST,
                &PayPalEndpoint::RecordPayment(id),
                Some(payment_detail),
            )
            .await
    }

    /// Marks the invoice as refunded.
    #[instrument(skip(self, context), fields(id = ?self.id))]
    pub async fn record_refund(
        &self,
        context: &ApiContext,
        refund_detail: &RefundDetail,
    ) -> Result<()> {
        context.validate()?;
        let id = self.require_id()?;
        context
            .execute_without_response(
                Method::POST,
                &PayPalEndpoint::RecordRefund(id),
                Some(refund_detail),
            )
            .await
    }

    /// Retrieve a single invoice by its id.
    #[instrument(skip(context))]
    pub async fn get(context: &ApiContext, invoice_id: &str) -> Result<Self> {
        context.validate()?;
        let id = require_non_empty(Some(invoice_id), "invoice_id")?.to_string();
        context
            .execute(Method::GET, &PayPalEndpoint::Invoice(id), NO_BODY)
            .await
    }

    /// Retrieve a page of the merchant's invoices.
    #[instrument(skip(context))]
    pub async fn get_all(context: &ApiContext, parameters: GetAllParameters) -> Result<Invoices> {
        context.validate()?;
        let endpoint = PayPalEndpoint::InvoicesPage {
            page: parameters.page,
            page_size: parameters.page_size,
            total_count_required: parameters.total_count_required,
        };
        context.execute(Method::GET, &endpoint, NO_BODY).await
    }

    /// Replaces the stored invoice with this one.
    #[instrument(skip(self, context), fields(id = ?self.id))]
    pub async fn update(&self, context: &ApiContext, notify_merchant: bool) -> Result<Self> {
        context.validate()?;
        let id = self.require_id()?;
        context
            .execute(
                Method::PUT,
                &PayPalEndpoint::InvoiceUpdate {
                    id,
                    notify_merchant,
                },
                Some(self),
            )
            .await
    }

    /// Deletes a draft invoice.
    ///
    /// Leaves `context` with request-id masking switched on, so later calls
    /// through it send no `PayPal-Request-Id` either.
    #[instrument(skip(context))]
    pub async fn delete(context: &mut ApiContext, invoice_id: &str) -> Result<()> {
        context.validate()?;
        let id = require_non_empty(Some(invoice_id), "invoice_id")?.to_string();

        context.set_mask_request_id(true);
        context
            .execute_without_response(Method::DELETE, &PayPalEndpoint::Invoice(id), NO_BODY)
            .await
    }

    /// Generates a QR code for the invoice URL.
    #[instrument(skip(context))]
    pub async fn qr_code(
        context: &ApiContext,
        invoice_id: &str,
        parameters: QrCodeParameters,
    ) -> Result<Image> {
        context.validate()?;
        let id = require_non_empty(Some(invoice_id), "invoice_id")?.to_string();
        let endpoint = PayPalEndpoint::QrCode {
            id,
            width: parameters.width,
            height: parameters.height,
            action: parameters.action,
        };
        context.execute(Method::GET, &endpoint, NO_BODY).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{cost::Tax, metadata::TermType};
    use rust_decimal_macros::dec;
    use serde_json::json;

    fn sample_invoice() -> Invoice {
        Invoice::new(
            MerchantInfo {
                business_name: Some("Medical Professionals, LLC".to_string()),
                ..MerchantInfo::new("merchant@example.com")
            },
            BillingInfo::new("payer@example.com"),
        )
        .with_item(
            InvoiceItem::new("Sutures", dec!(100), Currency::new("USD", dec!(5.00)))
                .with_tax(Tax::new("Tax", dec!(8))),
        )
        .with_payment_term(PaymentTerm::term(TermType::Net45))
        .with_note("Medical Invoice 16 Jul, 2013 PST")
    }

    #[test]
    fn invoice_round_trips() {
        let mut invoice = sample_invoice();
        invoice.discount = Some(Cost::percent(dec!(1)));
        invoice.shipping_cost = Some(ShippingCost {
            amount: Some(Currency::new("USD", dec!(10.00))),
            tax: None,
        });
        invoice.tax_inclusive = Some(false);

        let json = serde_json::to_string(&invoice).unwrap();
        let back: Invoice = serde_json::from_str(&json).unwrap();
        assert_eq!(back, invoice);
    }

    #[test]
    fn unset_fields_are_not_serialized_as_null() {
        let json = serde_json::to_value(sample_invoice()).unwrap();
        let object = json.as_object().unwrap();

        assert!(object.values().all(|value| !value.is_null()));
        assert!(!object.contains_key("id"));
        assert!(!object.contains_key("status"));
        assert!(!object.contains_key("tax_calculated_after_discount"));
        assert_eq!(
            json["billing_info"],
            json!([{ "email": "payer@example.com" }])
        );
        assert_eq!(json["payment_term"], json!({ "term_type": "NET_45" }));
    }

    #[test]
    fn server_invoice_deserializes() {
        let body = json!({
            "id": "INV2-9DRB-YTHU-2V9Q-7Q24",
            "number": "0014",
            "template_id": "TEMP-9FN71364KE8513435",
            "status": "DRAFT",
            "merchant_info": { "email": "merchant@example.com" },
            "billing_info": [{ "email": "payer@example.com" }],
            "items": [{
                "name": "Sutures",
                "quantity": 100.0,
                "unit_price": { "currency": "USD", "value": "5.00" }
            }],
            "invoice_date": "2014-03-24 PDT",
            "tax_calculated_after_discount": false,
            "tax_inclusive": false,
            "total_amount": { "currency": "USD", "value": "500.00" },
            "metadata": {
                "created_date": "2014-03-24 12:11:52 PDT",
                "payer_view_url": "https://www.sandbox.paypal.com/cgi_bin/webscr?cmd=_pay-inv&id=INV2-9DRB-YTHU-2V9Q-7Q24"
            },
            "links": [{
                "rel": "self",
                "href": "https://api.sandbox.paypal.com/v1/invoicing/invoices/INV2-9DRB-YTHU-2V9Q-7Q24",
                "method": "GET"
            }]
        });

        let invoice: Invoice = serde_json::from_value(body).unwrap();
        assert_eq!(invoice.id.as_deref(), Some("INV2-9DRB-YTHU-2V9Q-7Q24"));
        assert_eq!(invoice.status, Some(Status::Draft));
        assert_eq!(invoice.items.as_ref().map(Vec::len), Some(1));
        assert_eq!(
            invoice.total_amount.as_ref().map(|amount| amount.value),
            Some(dec!(500.00))
        );
        assert_eq!(invoice.links.unwrap()[0].rel.as_deref(), Some("self"));
    }

    #[test]
    fn unfamiliar_status_survives_round_trip() {
        let body = json!({ "id": "INV2-1", "status": "ARCHIVED" });
        let invoice: Invoice = serde_json::from_value(body.clone()).unwrap();
        assert_eq!(invoice.status, Some(Status::Unknown("ARCHIVED".to_string())));
        assert_eq!(serde_json::to_value(&invoice).unwrap(), body);
    }

    #[test]
    fn known_status_keeps_wire_name() {
        let invoice: Invoice =
            serde_json::from_value(json!({ "status": "MARKED_AS_PAID" })).unwrap();
        assert_eq!(invoice.status, Some(Status::MarkedAsPaid));
        assert_eq!(
            serde_json::to_value(&invoice).unwrap(),
            json!({ "status": "MARKED_AS_PAID" })
        );
    }

    #[test]
    fn invoice_date_defaults_to_utc() {
        let day = time::macros::date!(2024 - 03 - 05);
        let utc = Invoice::default().with_invoice_date(day, None);
        assert_eq!(utc.invoice_date.as_deref(), Some("2024-03-05 UTC"));

        let pacific = Invoice::default().with_invoice_date(day, Some("PST"));
        assert_eq!(pacific.invoice_date.as_deref(), Some("2024-03-05 PST"));
    }

    #[test]
    fn invoices_page_defaults_to_empty() {
        let page: Invoices = serde_json::from_value(json!({ "total_count": 0 })).unwrap();
        assert_eq!(page.total_count, Some(0));
        assert!(page.invoices.is_empty());
    }

    #[test]
    fn default_parameters() {
        assert_eq!(
            GetAllParameters::default(),
            GetAllParameters {
                page: 1,
                page_size: 20,
                total_count_required: false
            }
        );
        let qr = QrCodeParameters::default();
        assert_eq!((qr.width, qr.height, qr.action.as_str()), (500, 500, "pay"));
    }
}
