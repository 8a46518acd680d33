//! Typed request context for the demo page handlers.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::timing::TimingContext;

/// Opaque request identifier, carried through logs and metrics.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestId(String);

impl RequestId {
    /// Generate a fresh id from the wall clock plus an LCG step.
    pub fn generate() -> Self {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64;
        Self(format!("{:x}-{:04x}", nanos, rand_simple() & 0xffff))
    }

    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RequestId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One step of a linear congruential generator. Enough entropy for request
/// ids and demo seeding in WASM, where there is no OS randomness to ask for.
pub fn rand_simple() -> u32 {
    static SEED: AtomicU32 = AtomicU32::new(0x2f6e2b1);
    SEED.fetch_update(Ordering::Relaxed, Ordering::Relaxed, |seed| {
        Some(seed.wrapping_mul(1103515245).wrapping_add(12345))
    })
    .unwrap_or_default()
}

/// Extracted route parameters (e.g. `:slug` from `/blog/:slug`).
pub type RouteParams = HashMap<String, String>;

/// Query string parameters.
pub type QueryParams = HashMap<String, String>;

/// HTTP headers.
pub type Headers = HashMap<String, String>;

/// HTTP method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
    Patch,
    Head,
    Options,
}

/// Everything a handler needs to know about one request.
#[derive(Debug)]
pub struct RequestContext {
    pub request_id: RequestId,
    pub method: Method,
    /// Path with the query string already split off.
    pub path: String,
    pub params: RouteParams,
    pub query: QueryParams,
    pub headers: Headers,
    pub timing: TimingContext,
}

impl RequestContext {
    /// Build a context from the raw request path, which may carry a query
    /// string.
    pub fn new(method: Method, path_with_query: impl Into<String>) -> Self {
        let raw = path_with_query.into();
        let (path, query) = match raw.split_once('?') {
            Some((path, query)) => (path.to_owned(), parse_query_string(query)),
            None => (raw, QueryParams::new()),
        };

        Self {
            request_id: RequestId::generate(),
            method,
            path,
            params: RouteParams::new(),
            query,
            headers: Headers::new(),
            timing: TimingContext::new(),
        }
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.get(name).map(String::as_str)
    }

    /// Header lookup, case-insensitive per RFC 9110.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Parse a query string. Later duplicates win. Both `+` and `%20` decode to
/// a space, which covers what the demo forms submit.
pub fn parse_query_string(query: &str) -> QueryParams {
    let mut params = QueryParams::new();
    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        params.insert(percent_decode(key), percent_decode(value));
    }
    params
}

fn percent_decode(component: &str) -> String {
    let mut bytes = Vec::with_capacity(component.len());
    let mut rest = component.as_bytes();
    while let Some((&byte, tail)) = rest.split_first() {
        match byte {
            b'+' => {
                bytes.push(b' ');
                rest = tail;
            }
            b'%' if tail.len() >= 2 => match hex_pair(tail[0], tail[1]) {
                Some(decoded) => {
                    bytes.push(decoded);
                    rest = &tail[2..];
                }
                None => {
                    bytes.push(b'%');
                    rest = tail;
                }
            },
            _ => {
                bytes.push(byte);
                rest = tail;
            }
        }
    }
    String::from_utf8_lossy(&bytes).into_owned()
}

fn hex_pair(high: u8, low: u8) -> Option<u8> {
    let hi = (high as char).to_digit(16)?;
    let lo = (low as char).to_digit(16)?;
    Some((hi * 16 + lo) as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_ids_differ() {
        assert_ne!(RequestId::generate(), RequestId::generate());
    }

    #[test]
    fn query_string_splits_off_path() {
        let ctx = RequestContext::new(Method::Get, "/demos/shop?category=books&page=2");
        assert_eq!(ctx.path, "/demos/shop");
        assert_eq!(ctx.query_param("category"), Some("books"));
        assert_eq!(ctx.query_param("page"), Some("2"));
        assert_eq!(ctx.query_param("missing"), None);
    }

    #[test]
    fn plus_and_percent_both_decode_to_space() {
        let params = parse_query_string("q=new+delhi&note=a%20b");
        assert_eq!(params.get("q").map(String::as_str), Some("new delhi"));
        assert_eq!(params.get("note").map(String::as_str), Some("a b"));
    }

    #[test]
    fn multibyte_sequences_survive() {
        let params = parse_query_string("q=%E0%A4%AA%E0%A5%81%E0%A4%A3%E0%A5%87");
        assert_eq!(params.get("q").map(String::as_str), Some("पुणे"));
    }

    #[test]
    fn bad_escape_passes_through() {
        let params = parse_query_string("q=100%zz");
        assert_eq!(params.get("q").map(String::as_str), Some("100%zz"));
    }

    #[test]
    fn bare_key_maps_to_empty_value() {
        let params = parse_query_string("debug&x=1");
        assert_eq!(params.get("debug").map(String::as_str), Some(""));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let mut ctx = RequestContext::new(Method::Get, "/");
        ctx.headers
            .insert("Content-Type".to_owned(), "text/html".to_owned());
        assert_eq!(ctx.header("content-type"), Some("text/html"));
    }
}
