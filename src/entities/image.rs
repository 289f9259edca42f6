use base64::{Engine as _, engine::general_purpose::STANDARD};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// QR code returned by the API as a base64 encoded PNG.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

impl Image {
    /// Decodes the image into raw PNG bytes. An absent image decodes to no bytes.
    pub fn decode(&self) -> Result<Vec<u8>> {
        match &self.image {
            Some(encoded) => Ok(STANDARD.decode(encoded.trim())?),
            None => Ok(Vec::new()),
        }
    }
}
