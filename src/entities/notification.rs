use serde::{Deserialize, Serialize};

/// Email notification sent with a reminder.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    /// Subject of the notification. 4000 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    /// Note to the payer. 4000 characters max.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Whether a copy of the notification goes to the merchant.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_to_merchant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_emails: Option<Vec<String>>,
}

impl Notification {
    #[must_use]
    pub fn new(subject: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            note: Some(note.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_send_to_merchant(mut self, send_to_merchant: bool) -> Self {
        self.send_to_merchant = Some(send_to_merchant);
        self
    }
}

/// Email notification sent when an invoice is cancelled.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelNotification {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_to_merchant: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub send_to_payer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cc_emails: Option<Vec<String>>,
}

impl CancelNotification {
    #[must_use]
    pub fn new(subject: impl Into<String>, note: impl Into<String>) -> Self {
        Self {
            subject: Some(subject.into()),
            note: Some(note.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_recipients(mut self, send_to_merchant: bool, send_to_payer: bool) -> Self {
        self.send_to_merchant = Some(send_to_merchant);
        self.send_to_payer = Some(send_to_payer);
        self
    }
}
