use serde::{Deserialize, Serialize};

use super::address::{InvoiceAddress, Phone};

/// The merchant sending the invoice.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MerchantInfo {
    /// The merchant email address. Must be a PayPal account. 260 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    /// 256 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    /// 256 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<InvoiceAddress>,
    /// 100 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub business_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fax: Option<Phone>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// 100 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tax_id: Option<String>,
    /// Label for `additional_info`. 40 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info_label: Option<String>,
    /// 40 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

impl MerchantInfo {
    #[must_use]
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: Some(email.into()),
            ..Self::default()
        }
    }
}
