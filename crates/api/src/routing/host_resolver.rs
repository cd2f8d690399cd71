//! Host-to-Subdomain Resolution
//!
//! Extracts the tenant subdomain from an incoming Host header value:
//! - tenant1.example.com -> Some("tenant1")
//! - a.b.example.com -> Some("a")
//! - example.com, localhost, 192.168.1.1 -> None

/// Hostname that never carries a tenant
const LOCALHOST: &str = "localhost";

/// Minimum number of labels for a host to carry a subdomain
const MIN_LABELS_FOR_SUBDOMAIN: usize = 3;

/// Resolve a raw Host header value to its subdomain label.
///
/// Returns `None` for localhost, numeric IPv4-style hosts and hosts with
/// fewer than three labels. The first label is returned as-is, without
/// case folding or charset checks.
pub fn resolve_subdomain(host: &str) -> Option<&str> {
    let hostname = strip_port(host);

    if hostname == LOCALHOST || is_dotted_quad(hostname) {
        return None;
    }

    if hostname.split('.').count() < MIN_LABELS_FOR_SUBDOMAIN {
        return None;
    }

    hostname.split('.').next()
}

/// Remove everything from the first `:` onward
fn strip_port(host: &str) -> &str {
    host.split(':').next().unwrap_or(host)
}

/// Four dot-separated groups of ASCII digits, with no range check
fn is_dotted_quad(hostname: &str) -> bool {
    let groups: Vec<&str> = hostname.split('.').collect();
    groups.len() == 4
        && groups
            .iter()
            .all(|g| !g.is_empty() && g.chars().all(|c| c.is_ascii_digit()))
}
