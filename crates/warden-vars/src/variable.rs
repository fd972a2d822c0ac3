//! The variable enumeration and its name registry.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Identity of a collection the rule language can reference.
///
/// Keyed variables are collections addressed as `COLLECTION.key`; scalar
/// variables hold a single per-transaction value and take no key. `Unknown`
/// is the identity of literal (non-variable) text and never resolves from a
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Variable {
    /// Not a variable reference; literal text.
    Unknown,
    /// Transaction-scoped key/value collection.
    Tx,
    /// All request arguments (GET + POST).
    Args,
    /// Query-string arguments.
    ArgsGet,
    /// Body arguments.
    ArgsPost,
    /// Names of all request arguments.
    ArgsNames,
    /// Names of query-string arguments.
    ArgsGetNames,
    /// Names of body arguments.
    ArgsPostNames,
    /// Request headers by name.
    RequestHeaders,
    /// Names of request headers.
    RequestHeadersNames,
    /// Request cookies by name.
    RequestCookies,
    /// Names of request cookies.
    RequestCookiesNames,
    /// Response headers by name.
    ResponseHeaders,
    /// Process environment values exposed to rules.
    Env,
    /// Unique transaction identifier.
    UniqueId,
    /// Client address.
    RemoteAddr,
    /// Client port.
    RemotePort,
    /// Server address.
    ServerAddr,
    /// Server port.
    ServerPort,
    /// Full request line.
    RequestLine,
    /// Request method.
    RequestMethod,
    /// Request protocol version.
    RequestProtocol,
    /// Request URI (path and query).
    RequestUri,
    /// Raw request body.
    RequestBody,
    /// Response status code.
    ResponseStatus,
}

/// Case-insensitive name registry, built once on first use and read-only
/// thereafter.
static BY_NAME: LazyLock<HashMap<String, Variable>> = LazyLock::new(|| {
    Variable::all()
        .iter()
        .map(|v| (v.name().to_ascii_lowercase(), *v))
        .collect()
});

impl Variable {
    /// Returns all nameable variables in a consistent order.
    ///
    /// `Unknown` is deliberately absent: it marks literal text and cannot be
    /// spelled in rule language.
    pub fn all() -> &'static [Variable] {
        &[
            Variable::Tx,
            Variable::Args,
            Variable::ArgsGet,
            Variable::ArgsPost,
            Variable::ArgsNames,
            Variable::ArgsGetNames,
            Variable::ArgsPostNames,
            Variable::RequestHeaders,
            Variable::RequestHeadersNames,
            Variable::RequestCookies,
            Variable::RequestCookiesNames,
            Variable::ResponseHeaders,
            Variable::Env,
            Variable::UniqueId,
            Variable::RemoteAddr,
            Variable::RemotePort,
            Variable::ServerAddr,
            Variable::ServerPort,
            Variable::RequestLine,
            Variable::RequestMethod,
            Variable::RequestProtocol,
            Variable::RequestUri,
            Variable::RequestBody,
            Variable::ResponseStatus,
        ]
    }

    /// Canonical upper-case spelling as it appears in rule files.
    pub fn name(&self) -> &'static str {
        match self {
            Variable::Unknown => "UNKNOWN",
            Variable::Tx => "TX",
            Variable::Args => "ARGS",
            Variable::ArgsGet => "ARGS_GET",
            Variable::ArgsPost => "ARGS_POST",
            Variable::ArgsNames => "ARGS_NAMES",
            Variable::ArgsGetNames => "ARGS_GET_NAMES",
            Variable::ArgsPostNames => "ARGS_POST_NAMES",
            Variable::RequestHeaders => "REQUEST_HEADERS",
            Variable::RequestHeadersNames => "REQUEST_HEADERS_NAMES",
            Variable::RequestCookies => "REQUEST_COOKIES",
            Variable::RequestCookiesNames => "REQUEST_COOKIES_NAMES",
            Variable::ResponseHeaders => "RESPONSE_HEADERS",
            Variable::Env => "ENV",
            Variable::UniqueId => "UNIQUE_ID",
            Variable::RemoteAddr => "REMOTE_ADDR",
            Variable::RemotePort => "REMOTE_PORT",
            Variable::ServerAddr => "SERVER_ADDR",
            Variable::ServerPort => "SERVER_PORT",
            Variable::RequestLine => "REQUEST_LINE",
            Variable::RequestMethod => "REQUEST_METHOD",
            Variable::RequestProtocol => "REQUEST_PROTOCOL",
            Variable::RequestUri => "REQUEST_URI",
            Variable::RequestBody => "REQUEST_BODY",
            Variable::ResponseStatus => "RESPONSE_STATUS",
        }
    }

    /// Resolves a collection name, case-insensitively.
    ///
    /// Returns `None` for names outside the registry, including "unknown".
    pub fn by_name(name: &str) -> Option<Variable> {
        BY_NAME.get(&name.to_ascii_lowercase()).copied()
    }

    /// Whether this variable is a keyed collection (`true`) or a single
    /// scalar value (`false`).
    ///
    /// `Unknown` reports `false`; it never reaches a lookup.
    pub fn is_keyed(&self) -> bool {
        matches!(
            self,
            Variable::Tx
                | Variable::Args
                | Variable::ArgsGet
                | Variable::ArgsPost
                | Variable::ArgsNames
                | Variable::ArgsGetNames
                | Variable::ArgsPostNames
                | Variable::RequestHeaders
                | Variable::RequestHeadersNames
                | Variable::RequestCookies
                | Variable::RequestCookiesNames
                | Variable::ResponseHeaders
                | Variable::Env
        )
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_by_name_case_insensitive() {
        assert_eq!(Variable::by_name("tx"), Some(Variable::Tx));
        assert_eq!(Variable::by_name("TX"), Some(Variable::Tx));
        assert_eq!(Variable::by_name("Tx"), Some(Variable::Tx));
        assert_eq!(Variable::by_name("args_get"), Some(Variable::ArgsGet));
        assert_eq!(Variable::by_name("ARGS_GET"), Some(Variable::ArgsGet));
        assert_eq!(
            Variable::by_name("request_headers"),
            Some(Variable::RequestHeaders)
        );
    }

    #[test]
    fn test_by_name_unknown() {
        assert_eq!(Variable::by_name("unknown_variable"), None);
        assert_eq!(Variable::by_name(""), None);
        // The literal-text sentinel is not addressable from rule text.
        assert_eq!(Variable::by_name("unknown"), None);
    }

    #[test]
    fn test_name_round_trips_for_all_variables() {
        for v in Variable::all() {
            assert_eq!(Variable::by_name(v.name()), Some(*v), "variable {v}");
        }
    }

    #[test]
    fn test_keyed_flags() {
        assert!(Variable::Tx.is_keyed());
        assert!(Variable::Args.is_keyed());
        assert!(Variable::RequestHeaders.is_keyed());
        assert!(Variable::Env.is_keyed());

        assert!(!Variable::RequestUri.is_keyed());
        assert!(!Variable::RequestMethod.is_keyed());
        assert!(!Variable::UniqueId.is_keyed());
        assert!(!Variable::ResponseStatus.is_keyed());
        assert!(!Variable::Unknown.is_keyed());
    }

    #[test]
    fn test_serde_uses_rule_file_spelling() {
        let json = serde_json::to_string(&Variable::ArgsGet).unwrap();
        assert_eq!(json, "\"ARGS_GET\"");

        let back: Variable = serde_json::from_str("\"REQUEST_URI\"").unwrap();
        assert_eq!(back, Variable::RequestUri);
    }

    #[test]
    fn test_display_matches_name() {
        assert_eq!(Variable::Tx.to_string(), "TX");
        assert_eq!(Variable::ArgsGetNames.to_string(), "ARGS_GET_NAMES");
    }
}
