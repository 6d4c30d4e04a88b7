//! Query flags and the request parameters built from them.

use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// A data category the provider can include in an IP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryFlag {
    /// VPN detection in addition to proxies.
    Vpn,
    /// Network, provider and location data.
    Asn,
    /// Name of the node that answered.
    Node,
    /// Time the query took.
    Time,
    /// Risk score.
    Risk,
    /// Risk score plus attack history. Supersedes [`QueryFlag::Risk`].
    RiskHistory,
    /// Port the proxy was found operating on.
    Port,
    /// When the proxy was last seen.
    Seen,
}

impl QueryFlag {
    /// All known flags.
    pub const ALL: [QueryFlag; 8] = [
        QueryFlag::Vpn,
        QueryFlag::Asn,
        QueryFlag::Node,
        QueryFlag::Time,
        QueryFlag::Risk,
        QueryFlag::RiskHistory,
        QueryFlag::Port,
        QueryFlag::Seen,
    ];

    /// The flag name as it appears in caller input.
    pub fn as_str(&self) -> &'static str {
        match self {
            QueryFlag::Vpn => "vpn",
            QueryFlag::Asn => "asn",
            QueryFlag::Node => "node",
            QueryFlag::Time => "time",
            QueryFlag::Risk => "risk",
            QueryFlag::RiskHistory => "risk_history",
            QueryFlag::Port => "port",
            QueryFlag::Seen => "seen",
        }
    }
}

impl fmt::Display for QueryFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a flag name is not one of [`QueryFlag::ALL`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownFlag(pub String);

impl fmt::Display for UnknownFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown query flag: {}", self.0)
    }
}

impl std::error::Error for UnknownFlag {}

impl FromStr for QueryFlag {
    type Err = UnknownFlag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        QueryFlag::ALL
            .into_iter()
            .find(|flag| flag.as_str() == s)
            .ok_or_else(|| UnknownFlag(s.to_string()))
    }
}

/// Provider request parameters, e.g. `vpn=1`, `risk=2`, `tag=signup`.
///
/// Build them from caller flags with [`QueryOptions::build`]. Parameters are
/// kept sorted by name so identical input always yields identical requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryOptions {
    params: BTreeMap<&'static str, String>,
}

impl QueryOptions {
    /// Options with no parameters set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Map caller flag names and an optional tag to provider parameters.
    ///
    /// Known flags set their parameter to `1`. `risk_history` sets `risk=2`
    /// whether or not `risk` is also present, and never appears as a key of
    /// its own. Unknown names are ignored. A blank tag is treated as absent;
    /// any other tag is sent verbatim.
    ///
    /// # Examples
    /// ```
    /// use proxycheck_client::QueryOptions;
    ///
    /// let options = QueryOptions::build(["vpn", "risk", "risk_history"], Some("signup"));
    /// assert_eq!(options.get("vpn"), Some("1"));
    /// assert_eq!(options.get("risk"), Some("2"));
    /// assert_eq!(options.get("tag"), Some("signup"));
    /// ```
    pub fn build<I, S>(flags: I, tag: Option<&str>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let flags = flags
            .into_iter()
            .filter_map(|name| name.as_ref().parse::<QueryFlag>().ok());
        Self::from_flags(flags, tag)
    }

    /// Same as [`QueryOptions::build`] for already-typed flags.
    pub fn from_flags<I>(flags: I, tag: Option<&str>) -> Self
    where
        I: IntoIterator<Item = QueryFlag>,
    {
        let mut options = Self::new();
        let mut risk_history = false;

        for flag in flags {
            match flag {
                QueryFlag::RiskHistory => risk_history = true,
                QueryFlag::Risk => {
                    options.params.entry("risk").or_insert_with(|| "1".to_string());
                }
                other => {
                    options.params.insert(other.as_str(), "1".to_string());
                }
            }
        }

        // risk_history wins regardless of the order flags were given in
        if risk_history {
            options.params.insert("risk", "2".to_string());
        }

        if let Some(tag) = tag.filter(|t| !t.trim().is_empty()) {
            options.params.insert("tag", tag.to_string());
        }

        options
    }

    /// Limit attack history and last-seen data to the past `days` days.
    pub fn with_days(mut self, days: u32) -> Self {
        self.params.insert("days", days.to_string());
        self
    }

    /// Value of parameter `name`, if set.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    /// Whether parameter `name` is set.
    pub fn contains(&self, name: &str) -> bool {
        self.params.contains_key(name)
    }

    /// Number of parameters set.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Whether no parameters are set.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Parameters as `(name, value)` pairs in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn simple_flags_map_to_one() {
        let options = QueryOptions::build(["vpn", "asn", "node", "time", "port", "seen"], None);
        assert_eq!(options.len(), 6);
        for name in ["vpn", "asn", "node", "time", "port", "seen"] {
            assert_eq!(options.get(name), Some("1"), "{name}");
        }
        assert!(!options.contains("risk"));
    }

    #[test]
    fn risk_flag_sets_one() {
        let options = QueryOptions::build(["risk", "vpn"], None);
        assert_eq!(options.get("risk"), Some("1"));
    }

    #[test]
    fn risk_history_overrides_risk_in_any_order() {
        for flags in [
            vec!["risk_history"],
            vec!["risk", "risk_history"],
            vec!["risk_history", "risk"],
        ] {
            let options = QueryOptions::build(&flags, None);
            assert_eq!(options.get("risk"), Some("2"), "{flags:?}");
            assert!(!options.contains("risk_history"));
        }
    }

    #[test]
    fn unknown_flags_are_ignored() {
        let options = QueryOptions::build(["vpn", "inf", "", "VPN"], None);
        assert_eq!(options.iter().collect::<Vec<_>>(), vec![("vpn", "1")]);
    }

    #[test]
    fn blank_tags_are_dropped() {
        for tag in ["", " ", "\t\n"] {
            assert!(!QueryOptions::build(["vpn"], Some(tag)).contains("tag"));
        }
        assert!(!QueryOptions::build(["vpn"], None).contains("tag"));
    }

    #[test]
    fn tag_is_kept_verbatim() {
        let options = QueryOptions::build(Vec::<String>::new(), Some("  checkout page "));
        assert_eq!(options.get("tag"), Some("  checkout page "));
    }

    #[test]
    fn build_is_deterministic() {
        let a = QueryOptions::build(["seen", "vpn", "risk"], Some("x"));
        let b = QueryOptions::build(["risk", "seen", "vpn"], Some("x"));
        assert_eq!(a, b);
        assert_eq!(
            a.iter().map(|(k, _)| k).collect::<Vec<_>>(),
            vec!["risk", "seen", "tag", "vpn"]
        );
    }

    #[test]
    fn flag_names_round_trip() {
        for flag in QueryFlag::ALL {
            assert_eq!(flag.as_str().parse::<QueryFlag>(), Ok(flag));
        }
        assert!("proxy".parse::<QueryFlag>().is_err());
    }

    #[test]
    fn days_is_added() {
        let options = QueryOptions::build(["risk_history"], None).with_days(7);
        assert_eq!(options.get("days"), Some("7"));
    }
}
