use serde_json::json;
use paypal_invoicing::error::{ApiError, Error};

#[test]
fn test_validation_error_payload() {
    let error_json = json!({
        "name": "VALIDATION_ERROR",
        "message": "Invalid request - see details.",
        "debug_id": "b6b9a374802ea",
        "information_link": "https://developer.paypal.com/docs/api/invoicing/#errors",
        "details": [
            { "field": "items[0].quantity", "issue": "Must be greater than 0." },
            { "field": "merchant_info.email", "issue": "Required field missing." }
        ]
    });

    let result: Result<ApiError, _> = serde_json::from_value(error_json);
    assert!(
        result.is_ok(),
        "Failed to deserialize VALIDATION_ERROR: {:?}",
        result.err()
    );

    let api_error = result.unwrap();
    let details = api_error.details.as_deref().unwrap_or_default();
    assert_eq!(details.len(), 2);
    assert_eq!(details[1].field.as_deref(), Some("merchant_info.email"));

    let rendered = api_error.to_string();
    assert!(rendered.starts_with("PayPal API Error (VALIDATION_ERROR)"));
    assert!(rendered.contains("[debug_id: b6b9a374802ea]"));
    assert!(rendered.contains("items[0].quantity: Must be greater than 0."));
}

#[test]
fn test_error_payload_without_details() {
    let error_json = json!({
        "name": "RESOURCE_NOT_FOUND",
        "message": "The requested resource ID was not found",
        "debug_id": "3f4e5d",
        "links": [{ "href": "https://developer.paypal.com/docs/api/invoicing/#errors", "rel": "information_link" }]
    });

    let api_error: ApiError = serde_json::from_value(error_json).unwrap();
    assert!(api_error.details.is_none());
    assert_eq!(api_error.links.as_ref().map(Vec::len), Some(1));
    assert_eq!(
        api_error.to_string(),
        "PayPal API Error (RESOURCE_NOT_FOUND): The requested resource ID was not found [debug_id: 3f4e5d]"
    );
}

#[test]
fn test_unknown_fields_are_ignored() {
    let error_json = json!({
        "name": "INTERNAL_SERVICE_ERROR",
        "message": "An internal service error has occurred",
        "debug_id": "90957fca61718",
        "unexpected": { "nested": true }
    });

    let api_error: ApiError = serde_json::from_value(error_json).unwrap();
    assert_eq!(api_error.name.as_deref(), Some("INTERNAL_SERVICE_ERROR"));
}

#[test]
fn test_validation_error_accessors() {
    let error = Error::Validation {
        argument: "invoice_id",
    };
    assert_eq!(error.status_code(), None);
    assert_eq!(error.url(), None);
    assert!(error.api_error().is_none());
    assert!(error.span_trace().is_none());
    assert_eq!(
        error.to_string(),
        "required argument `invoice_id` is missing or empty"
    );
}
