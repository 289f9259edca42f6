//! Sentry integration for paypal-invoicing errors.
//!
//! Only available when the `sentry` feature is enabled. Set up tracing with
//! `ErrorLayer` so API errors carry a span trace:
//!
//! ```ignore
//! use tracing_subscriber::prelude::*;
//! use tracing_error::ErrorLayer;
//!
//! tracing_subscriber::registry()
//!     .with(tracing_subscriber::fmt::layer())
//!     .with(ErrorLayer::default())
//!     .with(sentry::integrations::tracing::layer())
//!     .init();
//! ```

use std::collections::BTreeMap;

use sentry_core::{Breadcrumb, protocol::Value};

use crate::error::Error;

const MAX_BODY_PREVIEW: usize = 500;

/// Convert a paypal-invoicing Error into a Sentry breadcrumb.
impl<'a> From<&'a Error> for Breadcrumb {
    fn from(error: &'a Error) -> Self {
        let (category, message, data) = match error {
            Error::Validation { argument } => {
                let mut data = BTreeMap::new();
                data.insert("argument".to_string(), Value::from(*argument));
                (
                    "paypal.validation",
                    format!("Missing required argument `{argument}`"),
                    data,
                )
            }

            Error::Request(source) => (
                "http.request",
                format!("HTTP request error: {source}"),
                BTreeMap::new(),
            ),

            Error::DeserializationError(source, _) => (
                "http.response",
                format!("Failed to deserialize response: {source}"),
                BTreeMap::new(),
            ),

            Error::InvalidEndpoint => (
                "paypal.config",
                "Invalid endpoint URL".to_string(),
                BTreeMap::new(),
            ),

            Error::Api {
                status_code,
                url,
                response,
                ..
            } => {
                let mut data = BTreeMap::new();
                data.insert("url".to_string(), Value::from(url.clone()));
                data.insert("status_code".to_string(), Value::from(status_code.as_u16()));
                if let Some(debug_id) = &response.debug_id {
                    data.insert("debug_id".to_string(), Value::from(debug_id.clone()));
                }
                let name = response.name.as_deref().unwrap_or("UNKNOWN");
                ("paypal.api", format!("PayPal API error: {name}"), data)
            }

            Error::Http {
                status_code, url, ..
            } => {
                let mut data = BTreeMap::new();
                data.insert("url".to_string(), Value::from(url.clone()));
                data.insert("status_code".to_string(), Value::from(status_code.as_u16()));
                ("http.response", format!("HTTP status {status_code}"), data)
            }

            Error::OAuth2(_) => ("auth", "OAuth2 error".to_string(), BTreeMap::new()),

            Error::ImageDecode(source) => (
                "paypal.qr_code",
                format!("QR code decode failed: {source}"),
                BTreeMap::new(),
            ),
        };

        Breadcrumb {
            ty: "error".to_string(),
            category: Some(category.to_string()),
            message: Some(message),
            data,
            level: sentry_core::Level::Error,
            ..Default::default()
        }
    }
}

/// Extracts error details for use as additional Sentry context.
///
/// ```ignore
/// use sentry::configure_scope;
/// use paypal_invoicing::sentry_integration::error_to_sentry_context;
///
/// if let Err(e) = invoice.send(&context, false).await {
///     configure_scope(|scope| {
///         for (key, value) in error_to_sentry_context(&e) {
///             scope.set_extra(&key, value);
///         }
///     });
/// }
/// ```
pub fn error_to_sentry_context(error: &Error) -> BTreeMap<String, Value> {
    let mut context = BTreeMap::new();

    if let Some(span_trace) = error.span_trace() {
        context.insert(
            "paypal.span_trace".to_string(),
            Value::from(format!("{span_trace}")),
        );
    }

    if let Some(url) = error.url() {
        context.insert("paypal.url".to_string(), Value::from(url.to_string()));
    }

    if let Some(status) = error.status_code() {
        context.insert("paypal.status_code".to_string(), Value::from(status.as_u16()));
    }

    if let Some(body) = error.response_body() {
        let truncated: String = body.chars().take(MAX_BODY_PREVIEW).collect();
        context.insert("paypal.response_body".to_string(), Value::from(truncated));
    }

    if let Some(response) = error.api_error() {
        if let Some(name) = &response.name {
            context.insert("paypal.name".to_string(), Value::from(name.clone()));
        }
        if let Some(debug_id) = &response.debug_id {
            context.insert("paypal.debug_id".to_string(), Value::from(debug_id.clone()));
        }
        if let Some(message) = &response.message {
            context.insert("paypal.message".to_string(), Value::from(message.clone()));
        }
        for (index, detail) in response.details.iter().flatten().enumerate() {
            context.insert(
                format!("paypal.details.{index}"),
                Value::from(format!(
                    "{}: {}",
                    detail.field.as_deref().unwrap_or_default(),
                    detail.issue.as_deref().unwrap_or_default()
                )),
            );
        }
    }

    context
}
