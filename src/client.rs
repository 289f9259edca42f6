use oauth2::{AccessToken, TokenResponse};
use reqwest::{Method, RequestBuilder, StatusCode, header};
use serde::{Serialize, de::DeserializeOwned};
use tracing_error::SpanTrace;
use url::Url;
use uuid::Uuid;

use crate::config::Config;
use crate::endpoints::PayPalEndpoint;
use crate::error::{ApiError, Error, Result};
use crate::oauth::{self, KeyPair};

/// Header PayPal uses for idempotent retries of the same request.
pub const HEADER_REQUEST_ID: &str = "PayPal-Request-Id";

const USER_AGENT: &str = concat!("paypal-invoicing-rust/", env!("CARGO_PKG_VERSION"));

/// Use as the body argument of [`ApiContext::execute`] for calls without a payload.
pub const NO_BODY: Option<&()> = None;

#[derive(Clone, Debug)]
/// The call context every operation runs against. It carries the configuration,
/// the access token and the request-id settings, and executes requests.
pub struct ApiContext {
    config: Config,
    base_url: Url,
    access_token: AccessToken,
    request_id: Option<String>,
    mask_request_id: bool,
    http_client: reqwest::Client,
}

impl ApiContext {
    /// Creates a context from an access token that was obtained elsewhere.
    #[instrument(skip(access_token))]
    pub fn new(config: Config, access_token: AccessToken) -> Result<Self> {
        let base_url = config.base_url()?;
        let http_client = Self::build_http_client(&config)?;
        Ok(Self {
            config,
            base_url,
            access_token,
            request_id: None,
            mask_request_id: false,
            http_client,
        })
    }

    /// Obtains an access token through the client-credentials grant and
    /// returns a context using it.
    #[instrument(skip(key_pair), fields(client_id = key_pair.client_id()))]
    pub async fn from_client_credentials(config: Config, key_pair: KeyPair) -> Result<Self> {
        let token_url = config
            .base_url()?
            .join(oauth::TOKEN_PATH)
            .map_err(|_| Error::InvalidEndpoint)?;
        let oauth_client = oauth::build_oauth_client(key_pair, token_url);

        // Following redirects would leak the client secret.
        let http_client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .build()?;

        let token = oauth_client
            .exchange_client_credentials()
            .request_async(&http_client)
            .await?;
        debug!(expires_in = ?token.expires_in(), "obtained access token");

        Self::new(config, token.access_token().clone())
    }

    fn build_http_client(config: &Config) -> Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder().user_agent(USER_AGENT);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }

    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn access_token(&self) -> &AccessToken {
        &self.access_token
    }

    pub fn set_access_token(&mut self, access_token: AccessToken) {
        trace!("updating access token");
        self.access_token = access_token;
    }

    /// Fixes the `PayPal-Request-Id` sent with every call. When unset a fresh
    /// UUID is generated per request.
    pub fn set_request_id(&mut self, request_id: Option<String>) {
        trace!(?request_id, "updating request id");
        self.request_id = request_id;
    }

    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// When set, no `PayPal-Request-Id` header is sent.
    pub fn set_mask_request_id(&mut self, mask_request_id: bool) {
        trace!(mask_request_id, "updating request id masking");
        self.mask_request_id = mask_request_id;
    }

    #[must_use]
    pub fn mask_request_id(&self) -> bool {
        self.mask_request_id
    }

    /// Checks the context can authenticate a call.
    pub fn validate(&self) -> Result<()> {
        if self.access_token.secret().trim().is_empty() {
            debug!("context has no access token");
            return Err(Error::Validation {
                argument: "access_token",
            });
        }
        Ok(())
    }

    /// Build a request object with authentication headers.
    pub(crate) fn build_request(&self, method: Method, url: Url) -> RequestBuilder {
        let mut request = self
            .http_client
            .request(method, url)
            .bearer_auth(self.access_token.secret())
            .header(header::ACCEPT, "application/json")
            .header(header::CONTENT_TYPE, "application/json");

        if !self.mask_request_id {
            let request_id = self
                .request_id
                .clone()
                .unwrap_or_else(|| Uuid::new_v4().to_string());
            request = request.header(HEADER_REQUEST_ID, request_id);
        }
        request
    }

    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        endpoint: &PayPalEndpoint,
        body: Option<&B>,
    ) -> Result<reqwest::Response> {
        self.validate()?;
        let url = endpoint.to_url(&self.base_url)?;
        let payload = body.map(serde_json::to_string).transpose()?;
        trace!(%method, %url, json = ?payload, "making request");

        let mut request = self.build_request(method, url);
        if let Some(payload) = payload {
            request = request.body(payload);
        }
        Ok(request.send().await?)
    }

    /// Sends a request and deserializes the JSON response into `R`.
    #[instrument(skip(self, body))]
    pub async fn execute<R, B>(
        &self,
        method: Method,
        endpoint: &PayPalEndpoint,
        body: Option<&B>,
    ) -> Result<R>
    where
        R: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let response = self.send(method, endpoint, body).await?;
        Self::handle_response(response).await
    }

    /// Sends a request whose response carries no payload of interest.
    #[instrument(skip(self, body))]
    pub async fn execute_without_response<B>(
        &self,
        method: Method,
        endpoint: &PayPalEndpoint,
        body: Option<&B>,
    ) -> Result<()>
    where
        B: Serialize + ?Sized,
    {
        let response = self.send(method, endpoint, body).await?;
        let status = response.status();
        let url = response.url().to_string();
        debug!(%status, url = %url, "response received");

        if status.is_success() {
            Ok(())
        } else {
            let text = response.text().await?;
            Err(Self::error_from_response(status, url, text))
        }
    }

    #[instrument(skip(response))]
    async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
        let status = response.status();
        let url = response.url().to_string();
        let entity_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        debug!(%status, url = %url, entity_type, "response received");

        let text = response.text().await?;
        debug!("Response body size: {} bytes", text.len());
        trace!("Response text:\n{}", text);

        if !status.is_success() {
            return Err(Self::error_from_response(status, url, text));
        }

        serde_json::from_str(&text).map_err(|e| {
            error!(
                "Deserialization error: {}, near position: {} - response text around that position: {}",
                e,
                e.column(),
                &text
                    .chars()
                    .skip(e.column().saturating_sub(30))
                    .take(100)
                    .collect::<String>()
            );
            Error::DeserializationError(e, Some(text))
        })
    }

    fn error_from_response(status_code: StatusCode, url: String, text: String) -> Error {
        error!(%status_code, url = %url, "PayPal API returned an error");

        match serde_json::from_str::<ApiError>(&text) {
            Ok(response) if response.name.is_some() || response.message.is_some() => {
                debug!(name = ?response.name, debug_id = ?response.debug_id, "parsed PayPal error");
                Error::Api {
                    status_code,
                    url,
                    response: Box::new(response),
                    span_trace: SpanTrace::capture(),
                }
            }
            _ => Error::Http {
                status_code,
                url,
                response_body: (!text.is_empty()).then_some(text),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Mode;

    fn context(token: &str) -> ApiContext {
        ApiContext::new(Config::new(Mode::Sandbox), AccessToken::new(token.to_string())).unwrap()
    }

    #[test]
    fn empty_token_fails_validation() {
        assert!(matches!(
            context("").validate(),
            Err(Error::Validation {
                argument: "access_token"
            })
        ));
        assert!(context("A21AA-token").validate().is_ok());
    }

    #[test]
    fn request_id_and_masking_are_independent() {
        let mut context = context("A21AA-token");
        assert!(!context.mask_request_id());
        assert_eq!(context.request_id(), None);

        context.set_request_id(Some("fixed-id".to_string()));
        context.set_mask_request_id(true);
        assert_eq!(context.request_id(), Some("fixed-id"));
        assert!(context.mask_request_id());
    }

    #[test]
    fn request_carries_auth_and_request_id() {
        let mut context = context("A21AA-token");
        context.set_request_id(Some("fixed-id".to_string()));
        let url = PayPalEndpoint::Invoices.to_url(context.base_url()).unwrap();
        let request = context.build_request(Method::GET, url).build().unwrap();

        assert_eq!(
            request.headers()[header::AUTHORIZATION].to_str().unwrap(),
            "Bearer A21AA-token"
        );
        assert_eq!(
            request.headers()[HEADER_REQUEST_ID].to_str().unwrap(),
            "fixed-id"
        );
        assert_eq!(
            request.url().as_str(),
            "https://api.sandbox.paypal.com/v1/invoicing/invoices"
        );
    }

    #[test]
    fn masked_request_has_no_request_id() {
        let mut context = context("A21AA-token");
        context.set_mask_request_id(true);
        let url = PayPalEndpoint::Invoice("INV2-1".to_string())
            .to_url(context.base_url())
            .unwrap();
        let request = context.build_request(Method::DELETE, url).build().unwrap();
        assert!(request.headers().get(HEADER_REQUEST_ID).is_none());
    }

    #[test]
    fn error_body_with_name_becomes_api_error() {
        let error = ApiContext::error_from_response(
            StatusCode::BAD_REQUEST,
            "https://api.sandbox.paypal.com/v1/invoicing/invoices".to_string(),
            r#"{"name":"VALIDATION_ERROR","message":"Invalid request - see details.","debug_id":"7a1b"}"#
                .to_string(),
        );
        let api_error = error.api_error().unwrap();
        assert_eq!(api_error.name.as_deref(), Some("VALIDATION_ERROR"));
        assert_eq!(error.status_code(), Some(StatusCode::BAD_REQUEST));
        assert!(error.span_trace().is_some());
    }

    #[test]
    fn unrecognised_error_body_becomes_http_error() {
        let error = ApiContext::error_from_response(
            StatusCode::UNAUTHORIZED,
            "https://api.sandbox.paypal.com/v1/invoicing/invoices".to_string(),
            r#"{"error":"invalid_token","error_description":"Token signature verification failed"}"#
                .to_string(),
        );
        assert!(matches!(error, Error::Http { .. }));
        assert!(error.response_body().unwrap().contains("invalid_token"));
    }
}
