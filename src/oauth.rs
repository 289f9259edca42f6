use oauth2::{
    EndpointNotSet, EndpointSet, StandardRevocableToken,
    basic::{BasicTokenIntrospectionResponse, BasicTokenType},
};
use serde::{Deserialize, Serialize};

use crate::error::{self, Error, Result};

/// Path of the client-credentials token grant, relative to the API base URL.
pub const TOKEN_PATH: &str = "v1/oauth2/token";

pub const ENV_CLIENT_ID: &str = "PAYPAL_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "PAYPAL_CLIENT_SECRET";

/// Stores the OAuth 2 client ID and client secret of a PayPal REST app.
#[derive(Debug, Clone)]
pub struct KeyPair(
    pub(crate) oauth2::ClientId,
    pub(crate) oauth2::ClientSecret,
);

impl KeyPair {
    /// Creates a new `KeyPair` from the provided `client_id` and `client_secret` strings.
    #[must_use]
    pub fn new(client_id: String, client_secret: String) -> Self {
        Self(
            oauth2::ClientId::new(client_id),
            oauth2::ClientSecret::new(client_secret),
        )
    }

    /// Creates a new `KeyPair` from `PAYPAL_CLIENT_ID` and `PAYPAL_CLIENT_SECRET`.
    pub fn from_env() -> Result<Self> {
        let client_id = std::env::var(ENV_CLIENT_ID).map_err(|_| Error::Validation {
            argument: ENV_CLIENT_ID,
        })?;
        let client_secret = std::env::var(ENV_CLIENT_SECRET).map_err(|_| Error::Validation {
            argument: ENV_CLIENT_SECRET,
        })?;
        Ok(Self::new(client_id, client_secret))
    }

    #[must_use]
    pub fn client_id(&self) -> &str {
        self.0.as_str()
    }
}

/// Fields PayPal adds to the standard token response.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PayPalTokenFields {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nonce: Option<String>,
}

impl oauth2::ExtraTokenFields for PayPalTokenFields {}

pub type TokenResponse = oauth2::StandardTokenResponse<PayPalTokenFields, BasicTokenType>;

pub type OAuthClient = oauth2::Client<
    error::OAuth2ErrorResponse,
    TokenResponse,
    BasicTokenIntrospectionResponse,
    StandardRevocableToken,
    error::OAuth2ErrorResponse,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[instrument(skip(key_pair), fields(client_id = key_pair.client_id()))]
pub(crate) fn build_oauth_client(key_pair: KeyPair, token_url: url::Url) -> OAuthClient {
    oauth2::Client::new(key_pair.0)
        .set_client_secret(key_pair.1)
        .set_token_uri(oauth2::TokenUrl::from_url(token_url))
}
