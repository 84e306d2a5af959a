//! JSON-defaulting request wrapper for a web application's API calls.
//!
//! This crate provides [`ApiClient`], a thin wrapper over a [`reqwest`]
//! transport that applies the application's JSON conventions to outgoing
//! requests (non-GET structured payloads become `application/json` bodies,
//! GET payloads become query strings) and drives a shared
//! [`LoadingIndicator`] around every request lifecycle.
//!
//! The wrapper never reinterprets transport results: [`ApiClient::perform`]
//! returns the transport's own [`reqwest::Response`], so callers chain
//! status and body handling exactly as they would without the wrapper.
//!
//! # Example
//!
//! ```no_run
//! use udk_api_client::{ApiClient, ApiResult, RequestOptions};
//!
//! async fn example() -> ApiResult<()> {
//!     let client = ApiClient::new();
//!     let options = RequestOptions::post("https://api.example.com/entries")
//!         .data(&serde_json::json!({ "name": "logbook" }))?;
//!     let response = client.perform(options).await?;
//!     println!("status: {}", response.status());
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod indicator;
mod options;

pub use client::ApiClient;
pub use error::{ApiResult, Error};
pub use indicator::{IndicatorMode, LoadingIndicator, OVERLAY_ELEMENT_ID};
pub use options::{BeforeSendHook, CompleteHook, RequestBody, RequestOptions, ResponseFormat};
