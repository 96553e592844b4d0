//! Request URL resolution
//!
//! Joins the configured base URL with an endpoint path and upgrades
//! accidental plain-http base URLs to https when the page itself is not
//! served from a local development host. A static config pointing at
//! `http://` on a deployed origin would otherwise die as mixed content.

/// Hosts exempt from the https upgrade.
fn is_local_host(host: &str) -> bool {
    host == "localhost" || host == "127.0.0.1"
}

/// Join base URL and endpoint, normalizing the single slash between them.
pub fn join_url(base: &str, endpoint: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}

/// Rewrite a plain-http URL to https unless the page host is a local
/// development host. `page_host` is `None` when no window is available
/// (server rendering, tests); the URL is then left untouched.
pub fn enforce_https(url: &str, page_host: Option<&str>) -> String {
    let Some(host) = page_host else {
        return url.to_string();
    };
    if url.starts_with("http://") && !is_local_host(host) {
        return url.replacen("http://", "https://", 1);
    }
    url.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_handles_slash_combinations() {
        assert_eq!(
            join_url("http://localhost:8000/dmcp", "/health"),
            "http://localhost:8000/dmcp/health"
        );
        assert_eq!(
            join_url("http://localhost:8000/dmcp/", "health"),
            "http://localhost:8000/dmcp/health"
        );
        assert_eq!(
            join_url("http://localhost:8000/dmcp", "datasources/1/test"),
            "http://localhost:8000/dmcp/datasources/1/test"
        );
    }

    #[test]
    fn http_is_upgraded_on_deployed_hosts() {
        assert_eq!(
            enforce_https("http://api.example.com/dmcp/health", Some("console.example.com")),
            "https://api.example.com/dmcp/health"
        );
    }

    #[test]
    fn http_is_kept_on_local_hosts() {
        assert_eq!(
            enforce_https("http://localhost:8000/dmcp/health", Some("localhost")),
            "http://localhost:8000/dmcp/health"
        );
        assert_eq!(
            enforce_https("http://localhost:8000/dmcp/health", Some("127.0.0.1")),
            "http://localhost:8000/dmcp/health"
        );
    }

    #[test]
    fn https_urls_are_untouched() {
        assert_eq!(
            enforce_https("https://api.example.com/dmcp", Some("console.example.com")),
            "https://api.example.com/dmcp"
        );
    }

    #[test]
    fn unknown_page_host_leaves_url_unchanged() {
        assert_eq!(
            enforce_https("http://api.example.com/dmcp", None),
            "http://api.example.com/dmcp"
        );
    }

    #[test]
    fn only_the_scheme_prefix_is_rewritten() {
        // An http:// substring later in the URL must survive.
        assert_eq!(
            enforce_https(
                "http://api.example.com/redirect?to=http://other",
                Some("console.example.com")
            ),
            "https://api.example.com/redirect?to=http://other"
        );
    }
}
