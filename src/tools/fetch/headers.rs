use reqwest::header::{HeaderMap, HeaderName, HeaderValue, USER_AGENT};

const FALLBACK_UA: &str = "Mozilla/5.0";

/// Browser-like request headers, including User-Agent.
pub(super) fn default_headers(user_agent: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();

    for (k, v) in header_pairs() {
        let name = HeaderName::from_lowercase(k.to_ascii_lowercase().as_bytes())
            .unwrap_or_else(|_| HeaderName::from_static("accept"));
        if let Ok(val) = HeaderValue::from_str(v) {
            headers.insert(name, val);
        }
    }

    headers.insert(
        USER_AGENT,
        HeaderValue::from_str(user_agent).unwrap_or(HeaderValue::from_static(FALLBACK_UA)),
    );

    headers
}

fn header_pairs() -> Vec<(&'static str, &'static str)> {
    vec![
        ("Accept", "text/html,application/xhtml+xml,application/xml;q=0.9,*/*;q=0.8"),
        ("Accept-Language", "en-US,en;q=0.9"),
        ("Upgrade-Insecure-Requests", "1"),
    ]
}
