use std::fmt;

use miette::Diagnostic;
use oauth2::HttpClientError;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing_error::SpanTrace;

use crate::entities::links::Links;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OAuth2ErrorResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

impl oauth2::ErrorResponse for OAuth2ErrorResponse {}

impl fmt::Display for OAuth2ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.error, &self.error_description) {
            (Some(error), Some(description)) => write!(f, "{error}: {description}"),
            (Some(error), None) => write!(f, "{error}"),
            _ => write!(f, "OAuth2 error occurred"),
        }
    }
}

/// A single field-level problem reported inside an [`ApiError`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorDetails {
    /// Name of the field that caused the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    /// Reason for the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issue: Option<String>,
}

/// The `Error` object PayPal returns in the body of a failed call.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ApiError {
    /// Human readable, unique name of the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// PayPal internal identifier used for correlation purposes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_id: Option<String>,
    /// Message describing the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// URI for detailed information related to this error for the developer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub information_link: Option<String>,
    /// Additional details of the error, in the order PayPal reported them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Vec<ErrorDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<Links>>,
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PayPal API Error ({}): {}",
            self.name.as_deref().unwrap_or("UNKNOWN"),
            self.message.as_deref().unwrap_or("no message")
        )?;
        if let Some(debug_id) = &self.debug_id {
            write!(f, " [debug_id: {debug_id}]")?;
        }
        for detail in self.details.iter().flatten() {
            write!(
                f,
                "\n  - {}: {}",
                detail.field.as_deref().unwrap_or("<unknown field>"),
                detail.issue.as_deref().unwrap_or("<no issue>")
            )?;
        }
        Ok(())
    }
}

/// Errors that can occur when interacting with the PayPal Invoicing API.
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    /// A required argument was missing before any request was made.
    #[error("required argument `{argument}` is missing or empty")]
    #[diagnostic(
        code(paypal_invoicing::validation),
        help("Set `{argument}` before calling this operation")
    )]
    Validation { argument: &'static str },

    #[error("error making request: {0:?}")]
    #[diagnostic(
        code(paypal_invoicing::request_error),
        help("Check your network connection and PayPal API availability")
    )]
    Request(#[source] reqwest::Error),

    #[error("error decoding response: {0:?}")]
    #[diagnostic(
        code(paypal_invoicing::deserialization_error),
        help("The API returned data in an unexpected format")
    )]
    DeserializationError(#[source] serde_json::Error, Option<String>),

    #[error("endpoint could not be parsed as a URL")]
    #[diagnostic(
        code(paypal_invoicing::invalid_endpoint),
        help("Check that the configured PayPal endpoint is an absolute URL")
    )]
    InvalidEndpoint,

    /// A non-2xx response carrying a PayPal `Error` payload.
    #[error("{response} (status: {status_code}, url: {url})")]
    #[diagnostic(
        code(paypal_invoicing::api_error),
        help("Review the error details returned by the PayPal API")
    )]
    Api {
        status_code: reqwest::StatusCode,
        url: String,
        response: Box<ApiError>,
        span_trace: SpanTrace,
    },

    /// A non-2xx response whose body was not a PayPal `Error` payload.
    #[error("unexpected HTTP status {status_code} from {url}")]
    #[diagnostic(code(paypal_invoicing::http_status))]
    Http {
        status_code: reqwest::StatusCode,
        url: String,
        response_body: Option<String>,
    },

    /// An error returned during `OAuth2` operations
    #[error("oauth2 error: {0:?}")]
    #[diagnostic(
        code(paypal_invoicing::oauth2_error),
        help("Verify your client id, client secret and mode")
    )]
    OAuth2(oauth2::RequestTokenError<HttpClientError<reqwest::Error>, OAuth2ErrorResponse>),

    #[error("QR code image is not valid base64: {0}")]
    #[diagnostic(code(paypal_invoicing::image_decode))]
    ImageDecode(#[source] base64::DecodeError),
}

impl Error {
    /// Span trace captured when an API error was created.
    #[must_use]
    pub fn span_trace(&self) -> Option<&SpanTrace> {
        match self {
            Self::Api { span_trace, .. } => Some(span_trace),
            _ => None,
        }
    }

    #[must_use]
    pub fn status_code(&self) -> Option<reqwest::StatusCode> {
        match self {
            Self::Api { status_code, .. } | Self::Http { status_code, .. } => Some(*status_code),
            Self::Request(e) => e.status(),
            _ => None,
        }
    }

    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Api { url, .. } | Self::Http { url, .. } => Some(url),
            _ => None,
        }
    }

    /// The PayPal error payload, if the API returned one.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { response, .. } => Some(response),
            _ => None,
        }
    }

    #[must_use]
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Self::Http { response_body, .. } | Self::DeserializationError(_, response_body) => {
                response_body.as_deref()
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Self::Request(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::DeserializationError(e, None)
    }
}

impl From<oauth2::RequestTokenError<HttpClientError<reqwest::Error>, OAuth2ErrorResponse>>
    for Error
{
    fn from(
        e: oauth2::RequestTokenError<HttpClientError<reqwest::Error>, OAuth2ErrorResponse>,
    ) -> Self {
        Self::OAuth2(e)
    }
}

impl From<base64::DecodeError> for Error {
    fn from(e: base64::DecodeError) -> Self {
        Self::ImageDecode(e)
    }
}

/// Type alias for results from this crate.
pub type Result<O> = std::result::Result<O, Error>;

/// Fails with [`Error::Validation`] when a required string argument is empty.
pub(crate) fn require_non_empty<'a>(
    value: Option<&'a str>,
    argument: &'static str,
) -> Result<&'a str> {
    match value {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => {
            debug!(argument, "required argument missing");
            Err(Error::Validation { argument })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn api_error_deserializes_with_details() {
        let payload = json!({
            "name": "VALIDATION_ERROR",
            "debug_id": "b4ab3c5e3e2d1",
            "message": "Invalid request - see details.",
            "information_link": "https://developer.paypal.com/docs/api/invoicing/#errors",
            "details": [
                { "field": "items[0].name", "issue": "Item name cannot be empty." },
                { "field": "billing_info[0].email", "issue": "Invalid email address." }
            ]
        });

        let error: ApiError = serde_json::from_value(payload).unwrap();
        assert_eq!(error.name.as_deref(), Some("VALIDATION_ERROR"));
        assert_eq!(error.debug_id.as_deref(), Some("b4ab3c5e3e2d1"));
        let details = error.details.as_ref().unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].field.as_deref(), Some("items[0].name"));
        assert_eq!(details[1].issue.as_deref(), Some("Invalid email address."));
    }

    #[test]
    fn api_error_display_lists_details() {
        let error = ApiError {
            name: Some("VALIDATION_ERROR".to_string()),
            message: Some("Invalid request".to_string()),
            details: Some(vec![ErrorDetails {
                field: Some("number".to_string()),
                issue: Some("Duplicate invoice number.".to_string()),
            }]),
            ..Default::default()
        };

        let text = error.to_string();
        assert!(text.starts_with("PayPal API Error (VALIDATION_ERROR): Invalid request"));
        assert!(text.contains("number: Duplicate invoice number."));
    }

    #[test]
    fn unset_api_error_fields_are_omitted() {
        let error = ApiError {
            name: Some("INTERNAL_SERVICE_ERROR".to_string()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&error).unwrap(),
            json!({ "name": "INTERNAL_SERVICE_ERROR" })
        );
    }

    #[test]
    fn require_non_empty_rejects_blank() {
        assert!(matches!(
            require_non_empty(None, "id"),
            Err(Error::Validation { argument: "id" })
        ));
        assert!(matches!(
            require_non_empty(Some("  "), "invoice_id"),
            Err(Error::Validation { argument: "invoice_id" })
        ));
        assert_eq!(require_non_empty(Some("INV2-1"), "id").unwrap(), "INV2-1");
    }

    #[test]
    fn require_non_empty_borrows_from_value() {
        let id = String::from("INV2-9DRB-YTHU-2V9Q-7Q24");
        let checked: &str = require_non_empty(Some(id.as_str()), "invoice_id").unwrap();
        assert_eq!(checked, id);
        assert!(require_non_empty(Some(""), "invoice_id").is_err());
    }
}
