//! # paypal-invoicing
//!
//! A Rust client library for the PayPal Invoicing REST API (v1).
//!
//! Every call runs against an [`ApiContext`], which carries the access token,
//! the target environment and the `PayPal-Request-Id` settings:
//!
//! ```ignore
//! use paypal_invoicing::{ApiContext, Config, Invoice, KeyPair};
//!
//! let context = ApiContext::from_client_credentials(Config::from_env()?, KeyPair::from_env()?).await?;
//! let created = invoice.create(&context).await?;
//! created.send(&context, false).await?;
//! ```
//!
//! ## Sentry Integration
//!
//! Errors carrying a PayPal error payload include async span traces that
//! capture the call stack at the point of error creation.
//!
//! ### Setup with Sentry
//!
//! 1. Enable the `sentry` feature (optional, for `Breadcrumb` support):
//!
//! ```toml
//! [dependencies]
//! paypal-invoicing = { version = "0.1", features = ["sentry"] }
//! ```
//!
//! 2. Set up tracing with `ErrorLayer` and `sentry-tracing`:
//!
//! ```ignore
//! use tracing_subscriber::prelude::*;
//! use tracing_error::ErrorLayer;
//!
//! tracing_subscriber::registry()
//!     .with(tracing_subscriber::fmt::layer())
//!     .with(ErrorLayer::default())  // Required for SpanTrace capture
//!     .with(sentry::integrations::tracing::layer())
//!     .init();
//! ```
//!
//! 3. Errors will now include span traces when reported to Sentry:
//!
//! ```ignore
//! if let Err(e) = Invoice::get(&context, "INV2-9DRB-YTHU-2V9Q-7Q24").await {
//!     if let Some(trace) = e.span_trace() {
//!         eprintln!("Span trace:\n{}", trace);
//!     }
//!     sentry::capture_error(&e);
//! }
//! ```

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub mod client;
pub mod config;
pub mod endpoints;
pub mod entities;
pub mod error;
pub mod oauth;
pub mod utils;

#[cfg(feature = "sentry")]
pub mod sentry_integration;

pub use client::{ApiContext, HEADER_REQUEST_ID};
pub use config::{Config, Mode};
pub use endpoints::PayPalEndpoint;
pub use entities::*;
pub use error::{ApiError, Error, ErrorDetails, Result};
pub use oauth::KeyPair;

// Re-export so callers can build a context from an existing token
pub use oauth2::AccessToken;

// Re-export SpanTrace for users who want to access it
pub use tracing_error::SpanTrace;
