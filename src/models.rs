//! Typed views over IP check responses.

use crate::lookup::{at, f64_at, flag_at, string_at, strings_at, u64_at};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt;

/// Top-level fields shared by every target in one response.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ResponseMeta {
    /// `ok` or `warning` for successful responses.
    pub status: Option<String>,
    /// Provider message, usually sent alongside a `warning` status.
    pub message: Option<String>,
    /// Node that answered, when the `node` flag was set.
    pub node: Option<String>,
    /// Query time in seconds, when the `time` flag was set.
    pub query_time: Option<f64>,
}

impl ResponseMeta {
    pub(crate) fn from_raw(raw: &Value) -> Self {
        Self {
            status: string_at(raw, &["status"]),
            message: string_at(raw, &["message"]),
            node: string_at(raw, &["node"]),
            query_time: f64_at(raw, &["query time"]),
        }
    }
}

/// Result of checking one IP address.
///
/// Every accessor returns `None` (or `false` for the boolean shortcuts)
/// when the provider did not send the field. Which fields are sent depends
/// on the [`QueryOptions`](crate::QueryOptions) the query ran with.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResponseModel {
    ip: String,
    meta: ResponseMeta,
    raw: Value,
}

impl ResponseModel {
    /// Wrap the provider object for `ip`. A non-object entry is treated as
    /// an empty one.
    pub fn new(ip: impl Into<String>, raw: Value, meta: ResponseMeta) -> Self {
        let raw = if raw.is_object() {
            raw
        } else {
            Value::Object(Default::default())
        };
        Self {
            ip: ip.into(),
            meta,
            raw,
        }
    }

    /// Model for an IP the provider did not answer for. All fields are absent.
    pub fn empty(ip: impl Into<String>, meta: ResponseMeta) -> Self {
        Self::new(ip, Value::Null, meta)
    }

    /// Whether the provider sent any data for this IP.
    pub fn has_data(&self) -> bool {
        self.raw.as_object().is_some_and(|o| !o.is_empty())
    }

    /// The raw provider object for this IP.
    ///
    /// Intended for display and debugging. Its shape follows the provider
    /// and is not part of this crate's stable surface.
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    // identity

    /// The IP address this result is for.
    pub fn ip(&self) -> &str {
        &self.ip
    }

    /// Reverse DNS hostname.
    pub fn hostname(&self) -> Option<String> {
        string_at(&self.raw, &["hostname"])
    }

    /// CIDR range the address belongs to.
    pub fn range(&self) -> Option<String> {
        string_at(&self.raw, &["range"])
    }

    // proxy verdict

    /// The provider's proxy verdict, if it sent one.
    pub fn proxy(&self) -> Option<bool> {
        flag_at(&self.raw, &["proxy"])
    }

    /// `true` only when the provider reported a proxy or VPN.
    pub fn is_proxy(&self) -> bool {
        self.proxy() == Some(true)
    }

    /// Proxy type, e.g. `VPN`, `SOCKS5`, `Business`.
    pub fn proxy_type(&self) -> Option<String> {
        string_at(&self.raw, &["type"])
    }

    /// Port the proxy was seen operating on.
    pub fn port(&self) -> Option<u16> {
        u64_at(&self.raw, &["port"]).and_then(|p| u16::try_from(p).ok())
    }

    /// Whether the proxy was seen recently, with the provider's timestamps.
    pub fn last_seen(&self) -> Option<LastSeen> {
        let seen = LastSeen {
            seen: flag_at(&self.raw, &["seen"]),
            human: string_at(&self.raw, &["last seen human"]),
            unix: u64_at(&self.raw, &["last seen unix"]),
        };
        (seen != LastSeen::default()).then_some(seen)
    }

    // network

    /// Autonomous system number, e.g. `AS13335`.
    pub fn asn(&self) -> Option<String> {
        string_at(&self.raw, &["asn"])
    }

    /// Network provider name.
    pub fn provider(&self) -> Option<String> {
        string_at(&self.raw, &["provider"])
    }

    /// Organisation the address is registered to.
    pub fn organisation(&self) -> Option<String> {
        string_at(&self.raw, &["organisation"])
    }

    /// Service running the detected proxy or VPN.
    pub fn operator(&self) -> Option<Operator> {
        let value = at(&self.raw, &["operator"])?;
        value.is_object().then(|| Operator::from_value(value))
    }

    /// Device counts seen on this address and its subnet.
    pub fn devices(&self) -> Option<Devices> {
        let devices = Devices {
            address: u64_at(&self.raw, &["devices", "address"]),
            subnet: u64_at(&self.raw, &["devices", "subnet"]),
        };
        (devices.address.is_some() || devices.subnet.is_some()).then_some(devices)
    }

    // risk

    /// Risk score from 0 to 100.
    pub fn risk_score(&self) -> Option<u8> {
        u64_at(&self.raw, &["risk"]).map(|r| r.min(100) as u8)
    }

    /// Risk score bucketed into [`RiskLevel`].
    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.risk_score().map(RiskLevel::from_score)
    }

    /// Attack counts by attack type, when `risk_history` was requested.
    pub fn attack_history(&self) -> Option<AttackHistory> {
        let entries: Vec<(String, u64)> = at(&self.raw, &["attack history"])?
            .as_object()?
            .iter()
            .filter_map(|(kind, _)| {
                u64_at(&self.raw, &["attack history", kind.as_str()]).map(|n| (kind.clone(), n))
            })
            .collect();
        (!entries.is_empty()).then_some(AttackHistory { entries })
    }

    // location

    /// Continent name and code.
    pub fn continent(&self) -> Option<Continent> {
        let continent = Continent {
            name: string_at(&self.raw, &["continent"]),
            code: string_at(&self.raw, &["continentcode"]),
        };
        (continent.name.is_some() || continent.code.is_some()).then_some(continent)
    }

    /// Country name, ISO code and EU membership.
    pub fn country(&self) -> Option<Country> {
        let name = string_at(&self.raw, &["country"]);
        let code = string_at(&self.raw, &["isocode"]);
        if name.is_none() && code.is_none() {
            return None;
        }
        let is_eu = code.as_deref().is_some_and(is_eu_member);
        Some(Country { name, code, is_eu })
    }

    /// Region or state name and code.
    pub fn region(&self) -> Option<Region> {
        let region = Region {
            name: string_at(&self.raw, &["region"]),
            code: string_at(&self.raw, &["regioncode"]),
        };
        (region.name.is_some() || region.code.is_some()).then_some(region)
    }

    /// City name.
    pub fn city(&self) -> Option<String> {
        string_at(&self.raw, &["city"])
    }

    /// Postal code.
    pub fn postcode(&self) -> Option<String> {
        string_at(&self.raw, &["postcode"])
    }

    /// Both coordinates, or `None` if either is missing.
    pub fn coordinates(&self) -> Option<Coordinates> {
        Some(Coordinates {
            latitude: f64_at(&self.raw, &["latitude"])?,
            longitude: f64_at(&self.raw, &["longitude"])?,
        })
    }

    // regional settings

    /// IANA timezone name, e.g. `Europe/London`.
    pub fn timezone(&self) -> Option<String> {
        string_at(&self.raw, &["timezone"])
    }

    /// Local currency of the address.
    pub fn currency(&self) -> Option<Currency> {
        let currency = Currency {
            symbol: string_at(&self.raw, &["currency", "symbol"]),
            code: string_at(&self.raw, &["currency", "code"]),
            name: string_at(&self.raw, &["currency", "name"]),
        };
        (currency.symbol.is_some() || currency.code.is_some() || currency.name.is_some())
            .then_some(currency)
    }

    // query metadata

    /// Top-level fields of the response this model came from.
    pub fn meta(&self) -> &ResponseMeta {
        &self.meta
    }

    /// Top-level response status, `ok` or `warning`.
    pub fn status(&self) -> Option<&str> {
        self.meta.status.as_deref()
    }

    /// Top-level provider message.
    pub fn message(&self) -> Option<&str> {
        self.meta.message.as_deref()
    }

    /// Node that answered the query.
    pub fn node(&self) -> Option<&str> {
        self.meta.node.as_deref()
    }

    /// Query time in seconds.
    pub fn query_time(&self) -> Option<f64> {
        self.meta.query_time
    }
}

/// Metadata about the organisation running a detected proxy or VPN.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Operator {
    /// Operator name.
    pub name: Option<String>,
    /// Operator website.
    pub url: Option<String>,
    /// Anonymity level, e.g. `high`.
    pub anonymity: Option<String>,
    /// Popularity level, e.g. `medium`.
    pub popularity: Option<String>,
    /// Supported protocols, e.g. `WireGuard`, `OpenVPN`.
    pub protocols: Vec<String>,
    /// Yes/no policies sorted by name, e.g. `("logging", false)`.
    pub policies: Vec<(String, bool)>,
}

impl Operator {
    fn from_value(value: &Value) -> Self {
        let policies = at(value, &["policies"])
            .and_then(Value::as_object)
            .map(|map| {
                map.keys()
                    .filter_map(|name| {
                        flag_at(value, &["policies", name.as_str()]).map(|on| (name.clone(), on))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            name: string_at(value, &["name"]),
            url: string_at(value, &["url"]),
            anonymity: string_at(value, &["anonymity"]),
            popularity: string_at(value, &["popularity"]),
            protocols: strings_at(value, &["protocols"]).unwrap_or_default(),
            policies,
        }
    }

    /// Value of policy `name`, if the provider sent it.
    pub fn policy(&self, name: &str) -> Option<bool> {
        self.policies
            .iter()
            .find(|(policy, _)| policy == name)
            .map(|(_, on)| *on)
    }
}

/// Turn a policy key like `ad_filtering` into `Ad Filtering`.
pub fn policy_label(name: &str) -> String {
    name.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Attack counts keyed by attack type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AttackHistory {
    entries: Vec<(String, u64)>,
}

impl AttackHistory {
    /// Count for attack type `kind`, e.g. `Vulnerability Probing`.
    pub fn get(&self, kind: &str) -> Option<u64> {
        self.entries
            .iter()
            .find(|(k, _)| k == kind)
            .map(|(_, n)| *n)
    }

    /// The provider's own `Total`, or the sum of all other entries.
    pub fn total(&self) -> u64 {
        self.get("Total").unwrap_or_else(|| {
            self.entries
                .iter()
                .filter(|(k, _)| k != "Total")
                .map(|(_, n)| n)
                .sum()
        })
    }

    /// Entries as `(attack type, count)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, n)| (k.as_str(), *n))
    }

    /// Number of attack types listed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Coarse bucket for a 0-100 risk score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    /// 0 to 33.
    Low,
    /// 34 to 66.
    Medium,
    /// 67 and above.
    High,
}

impl RiskLevel {
    /// Bucket a 0-100 score.
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=33 => RiskLevel::Low,
            34..=66 => RiskLevel::Medium,
            _ => RiskLevel::High,
        }
    }
}

/// Device counts the provider has seen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Devices {
    /// Devices seen on this exact address.
    pub address: Option<u64>,
    /// Devices seen on the surrounding subnet.
    pub subnet: Option<u64>,
}

/// When a proxy was last seen active.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LastSeen {
    /// Whether the proxy was seen at all.
    pub seen: Option<bool>,
    /// Relative description, e.g. `6 hours, 12 minutes ago`.
    pub human: Option<String>,
    /// Last sighting as a Unix timestamp.
    pub unix: Option<u64>,
}

/// Continent an address is located in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Continent {
    /// Continent name.
    pub name: Option<String>,
    /// Two-letter continent code, e.g. `EU`.
    pub code: Option<String>,
}

/// Country an address is located in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Country {
    /// Country name.
    pub name: Option<String>,
    /// ISO 3166-1 alpha-2 code.
    pub code: Option<String>,
    /// Whether the country is an EU member state.
    pub is_eu: bool,
}

/// Region or state an address is located in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Region {
    /// Region name.
    pub name: Option<String>,
    /// Region code, e.g. `ENG`.
    pub code: Option<String>,
}

/// Approximate location of an address.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinates {
    /// Degrees north.
    pub latitude: f64,
    /// Degrees east.
    pub longitude: f64,
}

impl Coordinates {
    /// Map search link centred on these coordinates.
    pub fn map_url(&self) -> String {
        format!(
            "https://www.google.com/maps/search/?api=1&query={},{}",
            self.latitude, self.longitude
        )
    }
}

/// Currency used where an address is located.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Currency {
    /// Symbol, e.g. `€`.
    pub symbol: Option<String>,
    /// ISO 4217 code.
    pub code: Option<String>,
    /// Currency name, e.g. `Euro`.
    pub name: Option<String>,
}

/// Renders as `symbol code (name)`, skipping absent parts.
impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::with_capacity(3);
        parts.extend(self.symbol.clone());
        parts.extend(self.code.clone());
        parts.extend(self.name.as_ref().map(|n| format!("({n})")));
        f.write_str(&parts.join(" "))
    }
}

const EU_MEMBERS: [&str; 27] = [
    "AT", "BE", "BG", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GR", "HR", "HU", "IE",
    "IT", "LT", "LU", "LV", "MT", "NL", "PL", "PT", "RO", "SE", "SI", "SK",
];

fn is_eu_member(code: &str) -> bool {
    EU_MEMBERS
        .iter()
        .any(|member| member.eq_ignore_ascii_case(code.trim()))
}

/// Results of a batch IP check, in the order the IPs were submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchResult {
    entries: Vec<ResponseModel>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl BatchResult {
    /// Entries keep their order; a repeated IP resolves to its first entry.
    pub(crate) fn from_models(entries: Vec<ResponseModel>) -> Self {
        let mut index = HashMap::with_capacity(entries.len());
        for (position, model) in entries.iter().enumerate() {
            index.entry(model.ip().to_string()).or_insert(position);
        }
        Self { entries, index }
    }

    /// Result for `ip`, matched against the trimmed input.
    pub fn get(&self, ip: &str) -> Option<&ResponseModel> {
        self.index.get(ip).and_then(|&position| self.entries.get(position))
    }

    /// IPs in submission order.
    pub fn ips(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(ResponseModel::ip)
    }

    /// Models in submission order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResponseModel> {
        self.entries.iter()
    }

    /// Number of IPs in the batch.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Models flagged as proxies or VPNs.
    pub fn proxies(&self) -> impl Iterator<Item = &ResponseModel> {
        self.entries.iter().filter(|m| m.is_proxy())
    }
}

impl IntoIterator for BatchResult {
    type Item = ResponseModel;
    type IntoIter = std::vec::IntoIter<ResponseModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a BatchResult {
    type Item = &'a ResponseModel;
    type IntoIter = std::slice::Iter<'a, ResponseModel>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_entry() -> Value {
        json!({
            "asn": "AS9009",
            "range": "185.220.100.0/22",
            "hostname": "exit.example.net",
            "provider": "M247 Europe SRL",
            "organisation": "M247 Europe",
            "continent": "Europe",
            "continentcode": "EU",
            "country": "Germany",
            "isocode": "DE",
            "region": "Hesse",
            "regioncode": "HE",
            "timezone": "Europe/Berlin",
            "city": "Frankfurt am Main",
            "postcode": "60313",
            "latitude": 50.1188,
            "longitude": 8.6843,
            "currency": {"code": "EUR", "name": "Euro", "symbol": "€"},
            "devices": {"address": 3, "subnet": "41"},
            "proxy": "yes",
            "type": "VPN",
            "port": "1194",
            "seen": "yes",
            "last seen human": "2 hours ago",
            "last seen unix": "1700000000",
            "operator": {
                "name": "ExampleVPN",
                "url": "https://vpn.example",
                "anonymity": "high",
                "popularity": "medium",
                "protocols": ["WireGuard", "OpenVPN"],
                "policies": {"ad_filtering": "yes", "logging": "no", "odd": "sometimes"}
            },
            "risk": 87,
            "attack history": {"Total": "12", "Vulnerability Probing": 9, "Login Attempt": 3}
        })
    }

    fn meta() -> ResponseMeta {
        ResponseMeta {
            status: Some("ok".into()),
            message: None,
            node: Some("NODE-1".into()),
            query_time: Some(0.012),
        }
    }

    #[test]
    fn reads_identity_and_verdict() {
        let model = ResponseModel::new("185.220.101.1", full_entry(), meta());
        assert_eq!(model.ip(), "185.220.101.1");
        assert_eq!(model.hostname().as_deref(), Some("exit.example.net"));
        assert_eq!(model.range().as_deref(), Some("185.220.100.0/22"));
        assert!(model.is_proxy());
        assert_eq!(model.proxy_type().as_deref(), Some("VPN"));
        assert_eq!(model.port(), Some(1194));
        assert_eq!(model.node(), Some("NODE-1"));
        assert_eq!(model.query_time(), Some(0.012));
    }

    #[test]
    fn reads_operator() {
        let model = ResponseModel::new("1.1.1.1", full_entry(), meta());
        let operator = model.operator().unwrap();
        assert_eq!(operator.name.as_deref(), Some("ExampleVPN"));
        assert_eq!(operator.anonymity.as_deref(), Some("high"));
        assert_eq!(operator.protocols, vec!["WireGuard", "OpenVPN"]);
        assert_eq!(operator.policy("ad_filtering"), Some(true));
        assert_eq!(operator.policy("logging"), Some(false));
        // unrecognised values are skipped rather than guessed
        assert_eq!(operator.policy("odd"), None);
    }

    #[test]
    fn reads_risk_and_history() {
        let model = ResponseModel::new("1.1.1.1", full_entry(), meta());
        assert_eq!(model.risk_score(), Some(87));
        assert_eq!(model.risk_level(), Some(RiskLevel::High));
        let history = model.attack_history().unwrap();
        assert_eq!(history.get("Vulnerability Probing"), Some(9));
        assert_eq!(history.total(), 12);
        assert_eq!(history.len(), 3);
    }

    #[test]
    fn reads_location_and_region_settings() {
        let model = ResponseModel::new("1.1.1.1", full_entry(), meta());
        let continent = model.continent().unwrap();
        assert_eq!(continent.code.as_deref(), Some("EU"));
        let country = model.country().unwrap();
        assert_eq!(country.name.as_deref(), Some("Germany"));
        assert!(country.is_eu);
        assert_eq!(model.region().unwrap().code.as_deref(), Some("HE"));
        assert_eq!(model.city().as_deref(), Some("Frankfurt am Main"));
        assert_eq!(model.postcode().as_deref(), Some("60313"));
        let coords = model.coordinates().unwrap();
        assert_eq!(coords.latitude, 50.1188);
        assert_eq!(model.timezone().as_deref(), Some("Europe/Berlin"));
        assert_eq!(model.currency().unwrap().to_string(), "€ EUR (Euro)");
        assert_eq!(
            model.devices(),
            Some(Devices {
                address: Some(3),
                subnet: Some(41)
            })
        );
        let seen = model.last_seen().unwrap();
        assert_eq!(seen.unix, Some(1_700_000_000));
    }

    #[test]
    fn empty_model_reports_everything_absent() {
        let model = ResponseModel::empty("10.0.0.1", ResponseMeta::default());
        assert_eq!(model.ip(), "10.0.0.1");
        assert!(!model.has_data());
        assert_eq!(model.proxy(), None);
        assert!(!model.is_proxy());
        assert!(model.risk_score().is_none());
        assert!(model.operator().is_none());
        assert!(model.country().is_none());
        assert!(model.coordinates().is_none());
        assert!(model.currency().is_none());
        assert!(model.attack_history().is_none());
        assert!(model.last_seen().is_none());
        assert!(model.devices().is_none());
    }

    #[test]
    fn malformed_entry_is_treated_as_empty() {
        let model = ResponseModel::new("10.0.0.1", json!("not an object"), meta());
        assert!(!model.has_data());
        assert!(model.hostname().is_none());
    }

    #[test]
    fn clean_address_is_a_valid_negative() {
        let model = ResponseModel::new("8.8.8.8", json!({"proxy": "no", "risk": 0}), meta());
        assert_eq!(model.proxy(), Some(false));
        assert_eq!(model.risk_score(), Some(0));
        assert_eq!(model.risk_level(), Some(RiskLevel::Low));
    }

    #[test]
    fn non_eu_country() {
        let model = ResponseModel::new("1.1.1.1", json!({"isocode": "GB"}), meta());
        let country = model.country().unwrap();
        assert!(!country.is_eu);
        assert!(country.name.is_none());
    }

    #[test]
    fn risk_level_boundaries() {
        assert_eq!(RiskLevel::from_score(33), RiskLevel::Low);
        assert_eq!(RiskLevel::from_score(34), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(66), RiskLevel::Medium);
        assert_eq!(RiskLevel::from_score(67), RiskLevel::High);
    }

    #[test]
    fn currency_display_skips_missing_parts() {
        let currency = Currency {
            symbol: None,
            code: Some("GBP".into()),
            name: Some("Pound Sterling".into()),
        };
        assert_eq!(currency.to_string(), "GBP (Pound Sterling)");
    }

    #[test]
    fn policy_labels() {
        assert_eq!(policy_label("ad_filtering"), "Ad Filtering");
        assert_eq!(policy_label("free_access"), "Free Access");
        assert_eq!(policy_label("logging"), "Logging");
    }

    #[test]
    fn map_url_contains_coordinates() {
        let coords = Coordinates {
            latitude: 51.5,
            longitude: -0.12,
        };
        assert!(coords.map_url().ends_with("query=51.5,-0.12"));
    }

    #[test]
    fn batch_lookup_and_order() {
        let batch = BatchResult::from_models(vec![
            ResponseModel::new("2.2.2.2", json!({"proxy": "yes"}), meta()),
            ResponseModel::empty("1.1.1.1", meta()),
        ]);
        assert_eq!(batch.ips().collect::<Vec<_>>(), vec!["2.2.2.2", "1.1.1.1"]);
        assert!(batch.get("2.2.2.2").unwrap().is_proxy());
        assert!(batch.get("3.3.3.3").is_none());
        assert_eq!(batch.proxies().count(), 1);
    }

    #[test]
    fn batch_lookup_finds_every_entry_by_index() {
        let models: Vec<ResponseModel> = (0..1000)
            .map(|i| {
                ResponseModel::new(
                    format!("10.0.{}.{}", i / 256, i % 256),
                    json!({"risk": i % 100}),
                    meta(),
                )
            })
            .collect();
        let batch = BatchResult::from_models(models);

        for (position, ip) in batch.ips().enumerate() {
            let model = batch.get(ip).unwrap();
            assert_eq!(model.ip(), ip);
            assert_eq!(model.risk_score(), Some((position % 100) as u8));
        }
    }
}
