use std::fmt;

use url::Url;

use crate::error::{Error, Result};

/// Base used when an endpoint is rendered without a configured context.
const DISPLAY_BASE: &str = "https://api.paypal.com/";

const INVOICES: [&str; 3] = ["v1", "invoicing", "invoices"];
const SEARCH: [&str; 3] = ["v1", "invoicing", "search"];

/// A typed representation of the PayPal Invoicing endpoints.
///
/// Every variant corresponds to one fixed path template; ids are pushed as
/// percent-encoded path segments and query parameters are appended in the
/// order the template lists them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PayPalEndpoint {
    /// `v1/invoicing/invoices`
    Invoices,
    /// `v1/invoicing/invoices?page={n}&page_size={n}&total_count_required={bool}`
    InvoicesPage {
        page: u32,
        page_size: u32,
        total_count_required: bool,
    },
    /// `v1/invoicing/search`
    Search,
    /// `v1/invoicing/invoices/{id}`
    Invoice(String),
    /// `v1/invoicing/invoices/{id}?notify_merchant={bool}`
    InvoiceUpdate { id: String, notify_merchant: bool },
    /// `v1/invoicing/invoices/{id}/send?notify_merchant={bool}`
    Send { id: String, notify_merchant: bool },
    /// `v1/invoicing/invoices/{id}/remind`
    Remind(String),
    /// `v1/invoicing/invoices/{id}/cancel`
    Cancel(String),
    /// `v1/invoicing/invoices/{id}/record-payment`
    RecordPayment(String),
    /// `v1/invoicing/invoices/{id}/record-refund`
    RecordRefund(String),
    /// `v1/invoicing/invoices/{id}/qr-code?width={n}&height={n}&action={s}`
    QrCode {
        id: String,
        width: u32,
        height: u32,
        action: String,
    },
}

fn bool_param(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

impl PayPalEndpoint {
    fn segments(&self) -> Vec<&str> {
        let (id, action) = match self {
            Self::Invoices | Self::InvoicesPage { .. } => return INVOICES.to_vec(),
            Self::Search => return SEARCH.to_vec(),
            Self::Invoice(id) | Self::InvoiceUpdate { id, .. } => (id, None),
            Self::Send { id, .. } => (id, Some("send")),
            Self::Remind(id) => (id, Some("remind")),
            Self::Cancel(id) => (id, Some("cancel")),
            Self::RecordPayment(id) => (id, Some("record-payment")),
            Self::RecordRefund(id) => (id, Some("record-refund")),
            Self::QrCode { id, .. } => (id, Some("qr-code")),
        };

        let mut segments = INVOICES.to_vec();
        segments.push(id.as_str());
        segments.extend(action);
        segments
    }

    fn query(&self) -> Vec<(&'static str, String)> {
        match self {
            Self::InvoicesPage {
                page,
                page_size,
                total_count_required,
            } => vec![
                ("page", page.to_string()),
                ("page_size", page_size.to_string()),
                (
                    "total_count_required",
                    bool_param(*total_count_required).to_string(),
                ),
            ],
            Self::InvoiceUpdate {
                notify_merchant, ..
            }
            | Self::Send {
                notify_merchant, ..
            } => vec![("notify_merchant", bool_param(*notify_merchant).to_string())],
            Self::QrCode {
                width,
                height,
                action,
                ..
            } => vec![
                ("width", width.to_string()),
                ("height", height.to_string()),
                ("action", action.clone()),
            ],
            _ => Vec::new(),
        }
    }

    /// Resolves the endpoint against `base`, which must end with `/`.
    pub fn to_url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| Error::InvalidEndpoint)?;
            path.pop_if_empty().extend(self.segments());
        }

        let query = self.query();
        if query.is_empty() {
            url.set_query(None);
        } else {
            url.query_pairs_mut().clear().extend_pairs(query);
        }
        Ok(url)
    }

    /// The resource path relative to the API base, e.g. `v1/invoicing/invoices/INV2-1/remind`.
    #[must_use]
    pub fn resource_path(&self) -> String {
        let Ok(base) = Url::parse(DISPLAY_BASE) else {
            return String::new();
        };
        match self.to_url(&base) {
            Ok(url) => url[url::Position::BeforePath..]
                .trim_start_matches('/')
                .to_string(),
            Err(_) => String::new(),
        }
    }
}

impl fmt::Display for PayPalEndpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.resource_path())
    }
}
