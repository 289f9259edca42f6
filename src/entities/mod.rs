//! Records exchanged with the Invoicing API.
//!
//! Every field is optional and omitted from the JSON when unset, so a record
//! built locally only sends what the caller filled in.

pub mod address;
pub mod billing_info;
pub mod cost;
pub mod currency;
pub mod image;
pub mod invoice;
pub mod invoice_item;
pub mod links;
pub mod merchant_info;
pub mod metadata;
pub mod notification;
pub mod payment_detail;
pub mod search;

pub use self::{
    address::{InvoiceAddress, Phone},
    billing_info::{BillingInfo, Participant, ShippingInfo},
    cost::{Cost, CustomAmount, ShippingCost, Tax},
    currency::Currency,
    image::Image,
    invoice::{
        FileAttachment, GetAllParameters, Invoice, Invoices, PaymentSummary, QrCodeParameters,
        Status,
    },
    invoice_item::InvoiceItem,
    links::Links,
    merchant_info::MerchantInfo,
    metadata::{Metadata, PaymentTerm, TermType},
    notification::{CancelNotification, Notification},
    payment_detail::{PaymentDetail, PaymentMethod, PaymentType, RefundDetail},
    search::Search,
};
