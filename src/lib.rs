//! # ProxyCheck Client
//! Asynchronous wrapper around the ProxyCheck.io HTTP API: check one IP, a batch of IPs, or an email address, and read the provider's loosely shaped JSON through typed accessors on [`ResponseModel`] and [`DisposableEmailResponseModel`].
//!
//! ## Audience and uses
//! For Rust services that want to flag proxies, VPNs, risky addresses or throwaway mailboxes at signup, checkout or login: turn caller-selected flags into [`QueryOptions`], send them with a [`Client`], then read only the fields you asked for.
//!
//! ## Runtime requirements
//! Async-only; run inside a Tokio (v1) runtime. HTTP calls use `reqwest`. Each operation sends exactly one request; the client keeps no cache and never retries.
//!
//! ## Out of scope
//! Not a general-purpose HTTP client, cache or rate limiter. Provider quotas and retry policy belong to the caller.
//!
//! ## Errors
//! Rejected input surfaces as [`Error::Validation`] or [`Error::BatchTooLarge`] before any request is sent. Network failures become [`Error::Transport`], unreadable bodies [`Error::Decode`], and provider refusals (bad key, exhausted quota) [`Error::Provider`] with the provider's own status and message. The crate-wide [`Result`] alias wraps these errors.
//!
//! ## Logging
//! Requests and outcomes are reported through `tracing` at `debug`, provider warnings and missing batch entries at `warn`. No subscriber is installed.
//!
//! ## Example
//! ```no_run
//! use proxycheck_client::{Client, QueryOptions};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), proxycheck_client::Error> {
//!     let client = Client::new("111111-222222-333333-444444")?;
//!     let options = QueryOptions::build(["vpn", "asn", "risk_history"], Some("signup"));
//!
//!     let result = client.check_ip("185.220.101.1", &options).await?;
//!     println!("proxy: {}, risk: {:?}", result.is_proxy(), result.risk_score());
//!
//!     let batch = client.check_ips(["1.1.1.1", "8.8.8.8"], &options).await?;
//!     for model in &batch {
//!         println!("{}: {:?}", model.ip(), model.country());
//!     }
//!
//!     let email = client.check_email("someone@mailinator.com").await?;
//!     println!("disposable: {}", email.is_disposable());
//!     Ok(())
//! }
//! ```

mod client;
mod email;
mod error;
mod lookup;
mod models;
mod options;

pub use client::{CheckResult, Client, ClientBuilder, MAX_BATCH_SIZE, Target, split_batch_input};
pub use email::DisposableEmailResponseModel;
pub use error::Error;
pub use models::{
    AttackHistory, BatchResult, Continent, Coordinates, Country, Currency, Devices, LastSeen,
    Operator, Region, ResponseMeta, ResponseModel, RiskLevel, policy_label,
};
pub use options::{QueryFlag, QueryOptions, UnknownFlag};

/// Result type alias for ProxyCheck operations.
///
/// This is equivalent to `std::result::Result<T, Error>`.
pub type Result<T> = std::result::Result<T, Error>;
