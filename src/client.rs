//! ProxyCheck async client implementation.

use crate::models::{BatchResult, ResponseMeta, ResponseModel};
use crate::{DisposableEmailResponseModel, Error, QueryOptions, Result};
use reqwest::header::{ACCEPT, HeaderValue};
use reqwest::{RequestBuilder, Url};
use serde_json::Value;
use std::collections::HashSet;
use std::net::IpAddr;
use std::fmt;
use std::time::Duration;
use tracing::{debug, warn};

/// Maximum number of IPs one batch request may carry.
pub const MAX_BATCH_SIZE: usize = 1000;

/// Top-level response keys that are not query targets.
const META_KEYS: [&str; 4] = ["status", "message", "node", "query time"];

/// Async client for the ProxyCheck.io API.
///
/// Use [`Client::new`] for defaults or [`Client::builder`] to set a proxy,
/// timeout, endpoint or a prebuilt `reqwest::Client`.
///
/// The client holds only the API key and a `reqwest::Client`, neither of
/// which changes after construction. `reqwest::Client` is `Send + Sync` and
/// pools connections internally, so one `Client` may be cloned or shared
/// across tasks and called concurrently.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    api_key: String,
    base_url: Url,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .finish()
    }
}

impl Client {
    /// Create a builder for configuring the client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Create a client for `api_key` with default settings.
    ///
    /// An empty key is accepted; the provider then serves a small
    /// anonymous quota.
    ///
    /// # Examples
    /// ```no_run
    /// # use proxycheck_client::Client;
    /// # fn main() -> Result<(), proxycheck_client::Error> {
    /// let client = Client::new("111111-222222-333333-444444")?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        ClientBuilder::new().api_key(api_key).build()
    }

    /// Base URL requests are sent to.
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// Check a single IP address.
    ///
    /// # Errors
    /// [`Error::Validation`] for an empty address (no request is sent),
    /// [`Error::Provider`] when the provider refuses the query, and
    /// [`Error::Transport`] or [`Error::Decode`] for network and body
    /// failures.
    ///
    /// # Examples
    /// ```no_run
    /// # use proxycheck_client::{Client, QueryOptions};
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), proxycheck_client::Error> {
    /// let client = Client::new("111111-222222-333333-444444")?;
    /// let options = QueryOptions::build(["vpn", "asn", "risk"], None);
    /// let result = client.check_ip("185.220.101.1", &options).await?;
    /// println!("{} proxy={} risk={:?}", result.ip(), result.is_proxy(), result.risk_score());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check_ip(&self, ip: &str, options: &QueryOptions) -> Result<ResponseModel> {
        let ip = ip.trim();
        if ip.is_empty() {
            return Err(Error::Validation("IP address must not be empty".to_string()));
        }

        debug!(ip = %ip, options = options.len(), "Querying ProxyCheck");

        let request = self
            .http
            .get(self.endpoint(Some(ip)))
            .query(&self.query_params(options));
        let mut raw = self.send(request).await?;
        let meta = ResponseMeta::from_raw(&raw);

        let model = match take_entry(&mut raw, ip) {
            Some(entry) => ResponseModel::new(ip, entry, meta),
            None => {
                warn!(ip = %ip, "ProxyCheck response had no entry for IP");
                ResponseModel::empty(ip, meta)
            }
        };

        debug!(
            ip = %ip,
            proxy = ?model.proxy(),
            risk = ?model.risk_score(),
            "ProxyCheck lookup complete"
        );

        Ok(model)
    }

    /// Check many IP addresses in one request.
    ///
    /// Each entry is trimmed and blank entries are dropped. Results come
    /// back in submission order, keyed by the trimmed address; a repeated
    /// address appears once. An address the provider did not answer for
    /// yields a model with every field absent rather than failing the batch.
    ///
    /// # Errors
    /// [`Error::Validation`] when nothing is left after trimming and
    /// [`Error::BatchTooLarge`] when more than [`MAX_BATCH_SIZE`] entries
    /// remain. Callers with larger lists must split them first. Other
    /// errors as for [`Client::check_ip`].
    pub async fn check_ips<I, S>(&self, ips: I, options: &QueryOptions) -> Result<BatchResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let ips: Vec<String> = ips
            .into_iter()
            .map(|ip| ip.as_ref().trim().to_string())
            .filter(|ip| !ip.is_empty())
            .collect();

        if ips.is_empty() {
            return Err(Error::Validation(
                "at least one IP address is required".to_string(),
            ));
        }
        if ips.len() > MAX_BATCH_SIZE {
            return Err(Error::BatchTooLarge {
                count: ips.len(),
                max: MAX_BATCH_SIZE,
            });
        }

        let mut seen = HashSet::with_capacity(ips.len());
        let ips: Vec<String> = ips.into_iter().filter(|ip| seen.insert(ip.clone())).collect();

        debug!(count = ips.len(), options = options.len(), "Querying ProxyCheck batch");

        let form = [("ips", ips.join(","))];
        let request = self
            .http
            .post(self.endpoint(None))
            .query(&self.query_params(options))
            .form(&form);
        let mut raw = self.send(request).await?;
        let meta = ResponseMeta::from_raw(&raw);

        let models: Vec<ResponseModel> = ips
            .into_iter()
            .map(|ip| match take_entry(&mut raw, &ip) {
                Some(entry) => ResponseModel::new(ip, entry, meta.clone()),
                None => {
                    warn!(ip = %ip, "ProxyCheck batch response had no entry for IP");
                    ResponseModel::empty(ip, meta.clone())
                }
            })
            .collect();

        let batch = BatchResult::from_models(models);
        debug!(
            count = batch.len(),
            proxies = batch.proxies().count(),
            "ProxyCheck batch complete"
        );

        Ok(batch)
    }

    /// Check whether an email address belongs to a disposable mail service.
    ///
    /// Query flags do not apply to email checks, so none are sent.
    ///
    /// # Examples
    /// ```no_run
    /// # use proxycheck_client::Client;
    /// # #[tokio::main]
    /// # async fn main() -> Result<(), proxycheck_client::Error> {
    /// let client = Client::new("111111-222222-333333-444444")?;
    /// let result = client.check_email("someone@mailinator.com").await?;
    /// println!("disposable: {}", result.is_disposable());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn check_email(&self, email: &str) -> Result<DisposableEmailResponseModel> {
        let email = email.trim();
        if email.is_empty() {
            return Err(Error::Validation("email address must not be empty".to_string()));
        }

        let domain = email_domain(email);
        debug!(domain = %domain, "Querying ProxyCheck email");

        let request = self
            .http
            .get(self.endpoint(Some(email)))
            .query(&self.query_params(&QueryOptions::new()));
        let raw = self.send(request).await?;
        let model = DisposableEmailResponseModel::new(email, raw);

        debug!(
            domain = %domain,
            disposable = ?model.disposable(),
            "ProxyCheck email lookup complete"
        );

        Ok(model)
    }

    /// Run whichever check `target` calls for.
    ///
    /// `options` is ignored for [`Target::Email`].
    pub async fn check(&self, target: Target, options: &QueryOptions) -> Result<CheckResult> {
        match target {
            Target::Ip(ip) => self.check_ip(&ip, options).await.map(CheckResult::SingleIp),
            Target::Ips(ips) => self.check_ips(&ips, options).await.map(CheckResult::BatchIp),
            Target::Email(email) => {
                if !options.is_empty() {
                    debug!("Query options are not sent with email checks");
                }
                self.check_email(&email).await.map(CheckResult::Email)
            }
        }
    }

    /// `{base}/{target}`, or `{base}/` for batch posts.
    fn endpoint(&self, target: Option<&str>) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().push(target.unwrap_or(""));
        }
        url
    }

    fn query_params<'a>(&'a self, options: &'a QueryOptions) -> Vec<(&'a str, &'a str)> {
        let mut params = Vec::with_capacity(options.len() + 1);
        if !self.api_key.is_empty() {
            params.push(("key", self.api_key.as_str()));
        }
        params.extend(options.iter());
        params
    }

    /// Send `request` and decode the body, surfacing provider error statuses.
    async fn send(&self, request: RequestBuilder) -> Result<Value> {
        let response = request
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .send()
            .await?;
        let http_status = response.status();
        let body = response.text().await?;

        let raw = match serde_json::from_str::<Value>(&body) {
            Ok(raw) if raw.is_object() => raw,
            Ok(_) | Err(_) if !http_status.is_success() => {
                let body = body.trim();
                warn!(status = %http_status, "ProxyCheck returned an error page");
                return Err(Error::Provider {
                    status: http_status.as_u16().to_string(),
                    message: (!body.is_empty()).then(|| body.to_string()),
                });
            }
            Ok(_) => return Err(Error::Decode("response is not a JSON object".to_string())),
            Err(e) => return Err(e.into()),
        };

        let meta = ResponseMeta::from_raw(&raw);
        match meta.status.as_deref() {
            Some(status @ ("denied" | "error")) => {
                warn!(status, message = ?meta.message, "ProxyCheck refused query");
                return Err(Error::Provider {
                    status: status.to_string(),
                    message: meta.message,
                });
            }
            Some("warning") => {
                warn!(message = ?meta.message, "ProxyCheck returned a warning");
            }
            _ => {}
        }

        if !http_status.is_success() {
            return Err(Error::Provider {
                status: http_status.as_u16().to_string(),
                message: meta.message,
            });
        }

        Ok(raw)
    }
}

/// Remove and return the entry for `target`.
///
/// An exact key match wins. Otherwise an IP target matches the key that
/// parses to the same address, since the provider echoes IPv6 addresses in
/// canonical form (`2001:0DB8::0001` comes back as `2001:db8::1`).
fn take_entry(raw: &mut Value, target: &str) -> Option<Value> {
    let object = raw.as_object_mut()?;
    if let Some(entry) = object.remove(target) {
        return Some(entry);
    }

    let wanted: IpAddr = target.parse().ok()?;
    let key = object
        .keys()
        .filter(|key| !META_KEYS.contains(&key.as_str()))
        .find(|key| key.parse::<IpAddr>().is_ok_and(|addr| addr == wanted))?
        .clone();
    object.remove(&key)
}

/// Domain part of an address, for logging without the mailbox.
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map_or("", |(_, domain)| domain)
}

/// Split newline-delimited input into trimmed, non-blank entries.
///
/// # Examples
/// ```
/// use proxycheck_client::split_batch_input;
///
/// let ips = split_batch_input("1.1.1.1\n\n  8.8.8.8  \r\n");
/// assert_eq!(ips, vec!["1.1.1.1", "8.8.8.8"]);
/// ```
pub fn split_batch_input(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// What to check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// One IP address.
    Ip(String),
    /// Many IP addresses, sent as one batch.
    Ips(Vec<String>),
    /// An email address.
    Email(String),
}

/// Outcome of [`Client::check`], tagged by the kind of target.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckResult {
    /// Result of [`Target::Ip`].
    SingleIp(ResponseModel),
    /// Result of [`Target::Ips`].
    BatchIp(BatchResult),
    /// Result of [`Target::Email`].
    Email(DisposableEmailResponseModel),
}

const API_URL: &str = "https://proxycheck.io/v2/";
const USER_AGENT_VALUE: &str = concat!("proxycheck-client-rs/", env!("CARGO_PKG_VERSION"));

/// Builder for configuring a ProxyCheck client.
///
/// Start with [`Client::builder`] to override defaults.
#[derive(Debug, Clone)]
pub struct ClientBuilder {
    api_key: String,
    base_url: String,
    proxy: Option<String>,
    user_agent: String,
    timeout: Option<Duration>,
    http: Option<reqwest::Client>,
}

impl ClientBuilder {
    /// Create a new builder with default settings.
    ///
    /// Defaults:
    /// - No API key
    /// - The public ProxyCheck v2 endpoint
    /// - No proxy and no timeout
    /// - Default user agent
    pub fn new() -> Self {
        Self {
            api_key: String::new(),
            base_url: API_URL.to_string(),
            proxy: None,
            user_agent: USER_AGENT_VALUE.to_string(),
            timeout: None,
            http: None,
        }
    }

    /// Set the API key sent with every request.
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    /// Override the API endpoint.
    ///
    /// Useful for testing against a local server.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set a proxy URL (e.g., "socks5://127.0.0.1:9050").
    ///
    /// Ignored when a prebuilt client is supplied with [`ClientBuilder::http_client`].
    pub fn proxy(mut self, proxy: impl Into<String>) -> Self {
        self.proxy = Some(proxy.into());
        self
    }

    /// Override the default user agent string.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Fail requests that take longer than `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Use a prebuilt `reqwest::Client` for all requests.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    /// Build the client. No network request is made.
    ///
    /// # Errors
    /// [`Error::Validation`] for an unusable base URL and
    /// [`Error::Transport`] when the HTTP client cannot be built.
    pub fn build(self) -> Result<Client> {
        let base_url = Url::parse(&self.base_url)
            .map_err(|e| Error::Validation(format!("invalid base url {}: {e}", self.base_url)))?;
        if base_url.cannot_be_a_base() {
            return Err(Error::Validation(format!(
                "base url cannot carry a path: {}",
                self.base_url
            )));
        }

        let http = match self.http {
            Some(http) => http,
            None => {
                let mut builder = reqwest::Client::builder().user_agent(self.user_agent);
                if let Some(proxy_url) = &self.proxy {
                    builder = builder.proxy(reqwest::Proxy::all(proxy_url)?);
                }
                if let Some(timeout) = self.timeout {
                    builder = builder.timeout(timeout);
                }
                builder.build()?
            }
        };

        Ok(Client {
            http,
            api_key: self.api_key,
            base_url,
        })
    }
}

impl Default for ClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
