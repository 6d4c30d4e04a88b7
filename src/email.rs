//! Typed view over disposable email check responses.

use crate::lookup::{f64_at, flag_at, string_at};
use serde::Serialize;
use serde_json::Value;

/// Result of checking one email address.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisposableEmailResponseModel {
    email: String,
    raw: Value,
}

impl DisposableEmailResponseModel {
    /// Wrap a decoded email response body for `email`.
    pub fn new(email: impl Into<String>, raw: Value) -> Self {
        Self {
            email: email.into(),
            raw,
        }
    }

    /// The address that was checked.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The provider's verdict, if it sent one.
    pub fn disposable(&self) -> Option<bool> {
        // the verdict sits under the address key, or at top level on older nodes
        flag_at(&self.raw, &[self.email.as_str(), "disposable"])
            .or_else(|| flag_at(&self.raw, &["disposable"]))
    }

    /// `true` only when the provider reported a disposable address.
    pub fn is_disposable(&self) -> bool {
        self.disposable() == Some(true)
    }

    /// Top-level response status.
    pub fn status(&self) -> Option<String> {
        string_at(&self.raw, &["status"])
    }

    /// Top-level provider message.
    pub fn message(&self) -> Option<String> {
        string_at(&self.raw, &["message"])
    }

    /// Node that answered the query.
    pub fn node(&self) -> Option<String> {
        string_at(&self.raw, &["node"])
    }

    /// Query time in seconds.
    pub fn query_time(&self) -> Option<f64> {
        f64_at(&self.raw, &["query time"])
    }

    /// The raw response body, for display and debugging only.
    pub fn raw(&self) -> &Value {
        &self.raw
    }
}
